//! Model-output parsing — digs the mandated JSON object out of raw LLM text.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

pub const NO_JSON_DETAIL: &str = "AI response did not contain valid JSON";

/// The two-field result returned to the caller. The shape is mandated by the
/// prompt contract; anything else the model says is discarded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizationResult {
    pub optimized_resume_text: String,
    pub explanation_of_changes: String,
}

/// Locates the JSON object in raw model output and parses it.
///
/// The scan takes the span from the first `{` to the last `}`, so prose
/// before or after the object is discarded. Stray braces inside that prose
/// would corrupt the span; the prompt forbids surrounding text, which keeps
/// this from mattering in practice.
pub fn extract_optimization(raw: &str) -> Result<OptimizationResult, AppError> {
    let span = match (raw.find('{'), raw.rfind('}')) {
        (Some(start), Some(end)) if start < end => &raw[start..=end],
        _ => return Err(AppError::MalformedOutput(NO_JSON_DETAIL.to_string())),
    };

    serde_json::from_str(span)
        .map_err(|e| AppError::MalformedOutput(format!("AI response JSON was not usable: {e}")))
}
