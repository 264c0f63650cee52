//! Axum route handler for the optimization endpoint.

use axum::{
    extract::{Multipart, State},
    Json,
};
use tracing::info;

use crate::errors::AppError;
use crate::optimize::extractor::extract_text;
use crate::optimize::prompts::build_prompt;
use crate::optimize::response::{extract_optimization, OptimizationResult};
use crate::state::AppState;

/// POST /api/v1/optimize-resume
///
/// Multipart form: `job_description` (text) + `resume_file` (PDF or DOCX).
/// Pipeline: extract resume text → build prompt → call provider → parse the
/// mandated two-field JSON out of the raw reply. All-or-nothing: any stage
/// failure becomes a single `{"detail": ...}` error response.
pub async fn handle_optimize(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<OptimizationResult>, AppError> {
    let mut job_description: Option<String> = None;
    let mut resume_file: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart request: {e}")))?
    {
        // Capture the part name up front: reading the field consumes it.
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("job_description") => {
                let text = field.text().await.map_err(|e| {
                    AppError::Validation(format!("Invalid job_description field: {e}"))
                })?;
                job_description = Some(text);
            }
            Some("resume_file") => {
                let filename = field
                    .file_name()
                    .ok_or_else(|| {
                        AppError::Validation("resume_file is missing a filename".to_string())
                    })?
                    .to_string();
                let data = field.bytes().await.map_err(|e| {
                    AppError::Validation(format!("Invalid resume_file field: {e}"))
                })?;
                resume_file = Some((filename, data.to_vec()));
            }
            _ => {} // unknown parts are ignored
        }
    }

    let job_description = job_description
        .ok_or_else(|| AppError::Validation("job_description field is required".to_string()))?;
    let (filename, data) = resume_file
        .ok_or_else(|| AppError::Validation("resume_file field is required".to_string()))?;

    if job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }

    info!(
        filename = %filename,
        resume_bytes = data.len(),
        jd_chars = job_description.len(),
        "Optimizing resume"
    );

    let resume_text = extract_text(&filename, &data)?;
    if resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "Resume contained no extractable text".to_string(),
        ));
    }

    let prompt = build_prompt(&resume_text, &job_description);

    let raw = state
        .llm
        .generate(&prompt)
        .await
        .map_err(|e| AppError::Llm(e.to_string()))?;

    let result = extract_optimization(&raw)?;

    Ok(Json(result))
}
