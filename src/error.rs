//! Error types for Interview Assist.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Generative-model errors.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("Request to {provider} failed: {reason}")]
    Network { provider: String, reason: String },

    #[error("{provider} returned HTTP {status}: {body}")]
    Http {
        provider: String,
        status: u16,
        body: String,
    },

    #[error("Invalid response from {provider}: {reason}")]
    InvalidResponse { provider: String, reason: String },
}

/// Speech-service errors (TTS and STT).
#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    #[error("Speech request failed: {0}")]
    Network(String),

    #[error("Speech service returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Invalid response from speech service: {0}")]
    InvalidResponse(String),
}

/// Résumé upload/extraction errors.
#[derive(Debug, thiserror::Error)]
pub enum ResumeError {
    #[error("Upload contained no file")]
    MissingFile,

    #[error("Failed to read upload: {0}")]
    Upload(String),

    #[error("PDF text extraction failed: {0}")]
    Extract(String),
}

/// Entity-list extraction errors. These never surface to the caller; the
/// protocols fall back to the opening branch deterministically.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("no turn tagged `{0}` in the transcript")]
    MissingTag(String),

    #[error("answer to the `{0}` question contained no usable entries")]
    EmptyList(String),
}

/// HTTP-facing error: a status plus a structured `{"error": ...}` payload.
///
/// Every handler failure maps through this, including the question path the
/// original left uncaught.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(serde_json::json!({ "error": self.message })),
        )
            .into_response()
    }
}

impl From<LlmError> for ApiError {
    fn from(err: LlmError) -> Self {
        Self::internal(format!("Question generation failed: {err}"))
    }
}

impl From<SpeechError> for ApiError {
    fn from(err: SpeechError) -> Self {
        Self::internal(format!("Speech generation failed: {err}"))
    }
}

impl From<ResumeError> for ApiError {
    fn from(err: ResumeError) -> Self {
        match err {
            ResumeError::MissingFile => Self::bad_request(err.to_string()),
            _ => Self::internal(err.to_string()),
        }
    }
}
