use std::sync::Arc;

use sqlx::PgPool;

use crate::guidelines::store::GuidelineStore;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// The text-generation capability. Constructor-injected so tests and
    /// alternative providers can swap in their own implementation.
    pub llm: Arc<dyn TextGenerator>,
    /// Read-side guideline resolver consumed by the generation pipeline.
    pub guidelines: Arc<dyn GuidelineStore>,
}
