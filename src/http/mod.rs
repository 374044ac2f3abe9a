//! HTTP surface: router and the four endpoints.
//!
//! The HTTP layer is serialization around the interview engine; all state
//! lives in the request/response payloads. CORS is deliberately permissive
//! (any origin, method, header) and there is no authentication.

use std::sync::Arc;

use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::{ApiError, ResumeError};
use crate::interview::{Engine, InterviewState, NextQuestion};
use crate::llm::speech::SpeechClient;

const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<Engine>,
    pub speech: Arc<SpeechClient>,
}

/// Build the Axum router with the interview routes.
pub fn routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/upload-cv", post(upload_cv))
        .route("/next-question", post(next_question))
        .route("/speak", post(speak))
        .route("/transcribe", post(transcribe))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(cors)
        .with_state(state)
}

// ── Health ──────────────────────────────────────────────────────────────

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "interview-assist"
    }))
}

// ── Upload CV ───────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct UploadCvResponse {
    text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<String>,
}

async fn upload_cv(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<UploadCvResponse>, ApiError> {
    let request_id = Uuid::new_v4();
    let (file_name, data) = read_file_field(multipart).await?;
    info!(%request_id, file = %file_name, bytes = data.len(), "CV upload received");

    let text = pdf_extract::extract_text_from_mem(&data)
        .map_err(|e| ResumeError::Extract(e.to_string()))?;

    // Best-effort: the academic-fields summary enriches the opener but is
    // not required for the interview to proceed.
    let fields = match state.engine.cv_fields(&text).await {
        Ok(summary) => Some(summary),
        Err(err) => {
            warn!(%request_id, error = %err, "CV field summary failed, omitting");
            None
        }
    };

    Ok(Json(UploadCvResponse { text, fields }))
}

// ── Next question ───────────────────────────────────────────────────────

async fn next_question(
    State(state): State<AppState>,
    Json(snapshot): Json<InterviewState>,
) -> Result<Json<NextQuestion>, ApiError> {
    let response = state.engine.next_question(&snapshot).await?;
    Ok(Json(response))
}

// ── Speak ───────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct SpeakRequest {
    #[serde(default)]
    text: String,
}

async fn speak(
    State(state): State<AppState>,
    Json(request): Json<SpeakRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if request.text.trim().is_empty() {
        return Err(ApiError::bad_request("No text provided."));
    }
    let audio = state.speech.synthesize(&request.text).await?;
    Ok(([(header::CONTENT_TYPE, "audio/mpeg")], audio))
}

// ── Transcribe ──────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct TranscribeResponse {
    text: String,
}

async fn transcribe(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<TranscribeResponse>, ApiError> {
    let request_id = Uuid::new_v4();
    let (file_name, data) = read_file_field(multipart).await?;
    info!(%request_id, file = %file_name, bytes = data.len(), "audio upload received");

    let text = state.speech.transcribe(&file_name, data).await?;
    Ok(Json(TranscribeResponse { text }))
}

// ── Multipart helper ────────────────────────────────────────────────────

/// Pull the first file field out of a multipart body, fully into memory.
async fn read_file_field(mut multipart: Multipart) -> Result<(String, Vec<u8>), ResumeError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ResumeError::Upload(e.to_string()))?
    {
        if field.name() != Some("file") && field.file_name().is_none() {
            continue;
        }
        let file_name = field.file_name().unwrap_or("upload").to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| ResumeError::Upload(e.to_string()))?;
        if data.is_empty() {
            return Err(ResumeError::MissingFile);
        }
        return Ok((file_name, data.to_vec()));
    }
    Err(ResumeError::MissingFile)
}
