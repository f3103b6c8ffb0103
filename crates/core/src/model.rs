//! TextModel trait — the abstraction over the hosted generative backend.
//!
//! A TextModel takes an assembled prompt and returns the raw reply text.
//! The engine never sees transport details; it only sees text or a
//! `ModelError`.

use crate::error::ModelError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Sampling configuration sent with every generation request.
///
/// These are fixed constants for the application; they are not tuned
/// per call site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Temperature (0.0 = deterministic, 1.0 = creative)
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Top-k sampling cutoff
    #[serde(default = "default_top_k", rename = "topK")]
    pub top_k: u32,

    /// Nucleus sampling cutoff
    #[serde(default = "default_top_p", rename = "topP")]
    pub top_p: f32,
}

fn default_temperature() -> f32 {
    0.7
}
fn default_top_k() -> u32 {
    40
}
fn default_top_p() -> f32 {
    0.95
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: default_temperature(),
            top_k: default_top_k(),
            top_p: default_top_p(),
        }
    }
}

/// The core TextModel trait.
///
/// The Gemini gateway implements this; tests implement it with mocks.
/// One outbound call per invocation, no internal retries — every failure
/// is handled by the caller's one-shot fallback, not resubmission.
#[async_trait]
pub trait TextModel: Send + Sync {
    /// A human-readable name for this backend (e.g., "gemini").
    fn name(&self) -> &str;

    /// Send a prompt and return the raw reply text.
    async fn generate(&self, prompt: &str) -> std::result::Result<String, ModelError>;

    /// Health check — can we reach the backend?
    async fn health_check(&self) -> std::result::Result<bool, ModelError> {
        Ok(true)
    }
}
