use std::sync::Arc;

use crate::augmentation::AugmentationProvider;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable enrichment backend: `LlmAugmenter` when a key is configured,
    /// `DisabledAugmenter` otherwise.
    pub augmenter: Arc<dyn AugmentationProvider>,
}
