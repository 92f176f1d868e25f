/*!
 * Provider implementations for the external translation capability.
 *
 * This module contains client implementations for various LLM providers:
 * - OpenAI: chat completions API (default)
 * - Anthropic: messages API
 * - Ollama: local LLM server
 * - Mock: scripted provider used by the test suite
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;
use crate::translation::prompts::TranslationPrompt;

/// Text produced by a provider, with optional usage figures
#[derive(Debug, Clone, Default)]
pub struct Completion {
    /// The generated text, untrimmed
    pub text: String,
    /// Prompt tokens reported by the provider
    pub prompt_tokens: Option<u64>,
    /// Completion tokens reported by the provider
    pub completion_tokens: Option<u64>,
}

impl Completion {
    /// Build a completion without usage figures
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }
}

/// Sampling settings shared by every HTTP provider
#[derive(Debug, Clone)]
pub struct GenerationSettings {
    /// Model name
    pub model: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Maximum number of tokens to generate
    pub max_tokens: u32,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

/// Common trait for all LLM providers
///
/// This trait is the text-in/text-out contract of the external translation
/// capability. A call either yields a completion or a `ProviderError`
/// describing the fault; callers decide what to do with the fault.
#[async_trait]
pub trait Provider: Send + Sync + Debug {
    /// Human-readable provider name for log lines
    fn name(&self) -> &str;

    /// Complete a translation prompt using this provider
    ///
    /// # Arguments
    /// * `prompt` - System instruction, user payload and the raw text
    ///
    /// # Returns
    /// * `Result<Completion, ProviderError>` - The generated text or the fault
    async fn complete(&self, prompt: &TranslationPrompt) -> Result<Completion, ProviderError>;
}

/// Build the `reqwest` client every HTTP provider uses
pub(crate) fn http_client(timeout_secs: u64) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(timeout_secs))
        .build()
        .unwrap_or_default()
}

/// Read a failed response body and map it onto a provider error
pub(crate) async fn error_from_response(provider: &str, response: reqwest::Response) -> ProviderError {
    let status = response.status();
    let error_text = response.text().await
        .unwrap_or_else(|_| "Failed to get error response text".to_string());
    log::debug!("{} API error ({}): {}", provider, status, error_text);
    ProviderError::from_status(status.as_u16(), error_text)
}

pub mod anthropic;
pub mod mock;
pub mod ollama;
pub mod openai;
