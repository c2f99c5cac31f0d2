// src/web/handlers/resume_handlers.rs
use crate::completion::{relay_json, CompletionGateway};
use crate::error::ApiError;
use crate::extract::{require_content, text_from_upload, MAX_UPLOAD_BYTES};
use crate::prompts;
use crate::web::types::{MatchRequest, ResumeUploadForm};
use rocket::form::Form;
use rocket::fs::TempFile;
use rocket::serde::json::{Json, Value};
use rocket::State;
use std::sync::Arc;
use tracing::info;

pub async fn analyze_resume_handler(
    upload: Form<ResumeUploadForm<'_>>,
    gateway: &State<Arc<dyn CompletionGateway>>,
) -> Result<Json<Value>, ApiError> {
    let ResumeUploadForm { mut file, text } = upload.into_inner();

    let resume_text = match (file.as_mut(), text.as_deref()) {
        (Some(file), _) => {
            if file.len() > MAX_UPLOAD_BYTES {
                return Err(ApiError::FileTooLarge);
            }

            let filename = file
                .raw_name()
                .and_then(|name| name.as_str())
                .unwrap_or("")
                .to_string();

            let bytes = read_upload(file).await?;
            text_from_upload(&filename, &bytes)?
        }
        (None, Some(text)) => text.to_string(),
        (None, None) => return Err(ApiError::MissingInput),
    };

    let resume_text = require_content(resume_text)?;
    info!("Analyzing resume ({} bytes of text)", resume_text.len());

    let request = prompts::resume_analysis(&resume_text);
    let raw = gateway.complete(&request).await?;
    Ok(Json(relay_json(&raw)?))
}

pub async fn match_job_handler(
    request: Json<MatchRequest>,
    gateway: &State<Arc<dyn CompletionGateway>>,
) -> Result<Json<Value>, ApiError> {
    let request = prompts::job_match(&request.resume_text, &request.job_description);
    let raw = gateway.complete(&request).await?;
    Ok(Json(relay_json(&raw)?))
}

/// Spool the upload to a uuid-named temp path and read it back. The
/// temp file is removed even when the read fails.
async fn read_upload(file: &mut TempFile<'_>) -> Result<Vec<u8>, ApiError> {
    let temp_path = std::env::temp_dir().join(format!("resume_upload_{}", uuid::Uuid::new_v4()));

    file.persist_to(&temp_path)
        .await
        .map_err(|e| ApiError::Internal(format!("Failed to store uploaded file: {}", e)))?;

    let bytes = tokio::fs::read(&temp_path).await;
    let _ = tokio::fs::remove_file(&temp_path).await;

    bytes.map_err(|e| ApiError::Internal(format!("Failed to read uploaded file: {}", e)))
}
