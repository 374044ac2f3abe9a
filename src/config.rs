//! Service configuration, read from the environment at startup.

use secrecy::SecretString;

use crate::error::ConfigError;

/// Everything the binary needs to start.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// OpenAI API key, used for chat completions and the audio endpoints.
    pub api_key: SecretString,
    /// Chat model for question generation and classification.
    pub model: String,
    /// TCP port to listen on.
    pub port: u16,
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| ConfigError::MissingEnvVar("OPENAI_API_KEY".to_string()))?;

        let model =
            std::env::var("INTERVIEW_MODEL").unwrap_or_else(|_| "gpt-4o".to_string());

        let port: u16 = match std::env::var("INTERVIEW_PORT") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
                key: "INTERVIEW_PORT".to_string(),
                message: format!("`{raw}` is not a port number"),
            })?,
            Err(_) => 8000,
        };

        Ok(Self {
            api_key: SecretString::from(api_key),
            model,
            port,
        })
    }
}
