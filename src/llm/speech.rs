//! Speech round-trips: text-to-speech and transcription.
//!
//! Both are blocking calls to OpenAI's audio endpoints. Audio bytes stay in
//! memory for the life of the request; there is no shared temp-file staging,
//! so concurrent requests cannot corrupt each other.

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::error::SpeechError;

const SPEECH_URL: &str = "https://api.openai.com/v1/audio/speech";
const TRANSCRIPTION_URL: &str = "https://api.openai.com/v1/audio/transcriptions";

const TTS_MODEL: &str = "tts-1";
const TTS_VOICE: &str = "nova";
const STT_MODEL: &str = "whisper-1";

/// Client for the hosted speech services.
pub struct SpeechClient {
    client: reqwest::Client,
    api_key: SecretString,
}

impl SpeechClient {
    pub fn new(api_key: SecretString) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
        }
    }

    /// Synthesize `text` to MP3 bytes.
    pub async fn synthesize(&self, text: &str) -> Result<Vec<u8>, SpeechError> {
        let body = serde_json::json!({
            "model": TTS_MODEL,
            "input": text,
            "voice": TTS_VOICE,
            "response_format": "mp3",
        });

        let response = self
            .client
            .post(SPEECH_URL)
            .bearer_auth(self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| SpeechError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SpeechError::Http {
                status: status.as_u16(),
                body: body.chars().take(500).collect(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| SpeechError::Network(e.to_string()))?;
        Ok(bytes.to_vec())
    }

    /// Transcribe an uploaded audio file to text.
    pub async fn transcribe(&self, file_name: &str, data: Vec<u8>) -> Result<String, SpeechError> {
        let part = reqwest::multipart::Part::bytes(data).file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new()
            .text("model", STT_MODEL)
            .part("file", part);

        let response = self
            .client
            .post(TRANSCRIPTION_URL)
            .bearer_auth(self.api_key.expose_secret())
            .multipart(form)
            .send()
            .await
            .map_err(|e| SpeechError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| SpeechError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(SpeechError::Http {
                status: status.as_u16(),
                body: text.chars().take(500).collect(),
            });
        }

        let parsed: TranscriptionResponse =
            serde_json::from_str(&text).map_err(|e| SpeechError::InvalidResponse(e.to_string()))?;
        Ok(parsed.text)
    }
}

#[derive(Debug, Deserialize)]
struct TranscriptionResponse {
    text: String,
}
