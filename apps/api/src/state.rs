use std::sync::Arc;

use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Provider client, held as a trait object so tests can swap in a canned
    /// generator without touching handler code.
    pub llm: Arc<dyn TextGenerator>,
}
