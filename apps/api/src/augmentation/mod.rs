//! Augmentation — optional LLM enrichment of suggestions, rewrites and summary.
//!
//! Two backends behind one trait, chosen once at startup:
//! - `DisabledAugmenter`: no credential configured, always `Unavailable`.
//! - `LlmAugmenter`: one chat-completion call, response recovered by `parse`.
//!
//! `AppState` holds an `Arc<dyn AugmentationProvider>`. Providers never return
//! an error: every failure resolves to `Augmentation::Unavailable`.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::analysis::signals::ExtractedSignals;
use crate::config::Config;
use crate::llm_client::LlmClient;

pub mod parse;
pub mod prompts;

use parse::recover_augmentation;
use prompts::{build_prompt, AUGMENT_SYSTEM};

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// What the provider gets to see about one analysis.
#[derive(Debug, Clone, Copy)]
pub struct AugmentationRequest<'a> {
    pub resume_text: &'a str,
    pub signals: &'a ExtractedSignals,
    pub job_match_score: f64,
}

/// Enrichment parsed from the model. Absent fields fall back at assembly time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AugmentationResult {
    pub suggestions: Option<Vec<String>>,
    pub rewrites: Option<Vec<String>>,
    pub summary: Option<String>,
}

/// Outcome of an augmentation attempt. Both variants are normal results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Augmentation {
    Enriched(AugmentationResult),
    Unavailable,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

#[async_trait]
pub trait AugmentationProvider: Send + Sync {
    async fn augment(&self, request: AugmentationRequest<'_>) -> Augmentation;

    /// Backend label for logs and the health endpoint.
    fn backend(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// Backends
// ────────────────────────────────────────────────────────────────────────────

/// Used when no credential is configured.
pub struct DisabledAugmenter;

#[async_trait]
impl AugmentationProvider for DisabledAugmenter {
    async fn augment(&self, _request: AugmentationRequest<'_>) -> Augmentation {
        Augmentation::Unavailable
    }

    fn backend(&self) -> &'static str {
        "disabled"
    }
}

/// Calls the chat-completions API once per analysis.
pub struct LlmAugmenter {
    llm: LlmClient,
}

impl LlmAugmenter {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl AugmentationProvider for LlmAugmenter {
    async fn augment(&self, request: AugmentationRequest<'_>) -> Augmentation {
        let prompt = build_prompt(&request);
        match self.llm.complete(&prompt, AUGMENT_SYSTEM).await {
            Ok(text) => Augmentation::Enriched(recover_augmentation(&text)),
            Err(e) => {
                warn!("Augmentation unavailable, using local suggestions: {e}");
                Augmentation::Unavailable
            }
        }
    }

    fn backend(&self) -> &'static str {
        "llm"
    }
}

/// Picks the backend from configuration. A client that cannot be built
/// degrades to the disabled backend rather than failing startup.
pub fn build_augmenter(config: &Config) -> Arc<dyn AugmentationProvider> {
    let Some(api_key) = config.openai_api_key.clone() else {
        info!("OPENAI_API_KEY not set; augmentation disabled");
        return Arc::new(DisabledAugmenter);
    };

    match LlmClient::new(
        api_key,
        config.openai_model.clone(),
        &config.openai_base_url,
        Duration::from_secs(config.llm_timeout_secs),
    ) {
        Ok(llm) => {
            info!("LLM augmentation enabled (model: {})", llm.model());
            Arc::new(LlmAugmenter::new(llm))
        }
        Err(e) => {
            warn!("Failed to build LLM client, augmentation disabled: {e}");
            Arc::new(DisabledAugmenter)
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
