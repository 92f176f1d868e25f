/*!
 * Core translation service implementation.
 *
 * This module contains the `TranslationService`, which turns plain text and
 * Markdown documents into the target language through a `Provider`.
 *
 * Every call comes in two flavors: `try_*` returns the provider fault to the
 * caller, while the plain variants fall back to the untranslated input so a
 * failing call never aborts a batch.
 */

use anyhow::{Result, anyhow};
use log::{debug, error};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use crate::app_config::{TranslationConfig, TranslationProvider as ConfigTranslationProvider};
use crate::errors::ProviderError;
use crate::providers::anthropic::Anthropic;
use crate::providers::ollama::Ollama;
use crate::providers::openai::OpenAI;
use crate::providers::{GenerationSettings, Provider};
use super::prompts::TranslationPrompt;

/// Token usage statistics for tracking API consumption
#[derive(Clone, Debug)]
pub struct TokenUsageStats {
    /// Number of calls sent to the provider
    pub calls: u64,

    /// Number of calls that ended in a provider fault
    pub failures: u64,

    /// Number of prompt tokens
    pub prompt_tokens: u64,

    /// Number of completion tokens
    pub completion_tokens: u64,

    /// Total time spent on API requests
    pub api_duration: Duration,

    /// Provider name
    pub provider: String,
}

impl TokenUsageStats {
    /// Total number of tokens
    pub fn total_tokens(&self) -> u64 {
        self.prompt_tokens + self.completion_tokens
    }

    /// Generate a summary of token usage
    pub fn summary(&self) -> String {
        format!(
            "{} calls to {} ({} failed), {} prompt + {} completion tokens, {:.1}s in API requests",
            self.calls,
            self.provider,
            self.failures,
            self.prompt_tokens,
            self.completion_tokens,
            self.api_duration.as_secs_f64()
        )
    }
}

/// Running counters, updated after every provider call
#[derive(Debug, Default)]
struct UsageCounters {
    calls: AtomicU64,
    failures: AtomicU64,
    prompt_tokens: AtomicU64,
    completion_tokens: AtomicU64,
    api_micros: AtomicU64,
}

/// Translation service backed by a single provider
#[derive(Debug)]
pub struct TranslationService {
    /// Provider answering translation calls
    provider: Arc<dyn Provider>,

    /// Usage counters
    usage: UsageCounters,
}

impl TranslationService {
    /// Create a new translation service from configuration
    pub fn new(config: &TranslationConfig) -> Result<Self> {
        let settings = GenerationSettings {
            model: config.get_model(),
            temperature: config.common.temperature,
            max_tokens: config.common.max_tokens,
            timeout_secs: config.get_timeout_secs(),
        };

        let provider: Arc<dyn Provider> = match config.provider {
            ConfigTranslationProvider::OpenAI => {
                Arc::new(OpenAI::new(config.get_api_key(), config.get_endpoint(), settings))
            },
            ConfigTranslationProvider::Anthropic => {
                Arc::new(Anthropic::new(config.get_api_key(), config.get_endpoint(), settings))
            },
            ConfigTranslationProvider::Ollama => {
                let client = Ollama::new(&config.get_endpoint(), settings)
                    .map_err(|e| anyhow!("Failed to configure Ollama: {}", e))?;
                Arc::new(client)
            },
        };

        Ok(Self::with_provider(provider))
    }

    /// Create a translation service around an existing provider
    pub fn with_provider(provider: Arc<dyn Provider>) -> Self {
        Self {
            provider,
            usage: UsageCounters::default(),
        }
    }

    /// Name of the provider behind this service
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Translate a short plain-text fragment, reporting provider faults
    pub async fn try_translate_text(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, ProviderError> {
        self.request(TranslationPrompt::text(text, source_language, target_language)).await
    }

    /// Translate a short plain-text fragment; on any fault the input comes back unchanged
    pub async fn translate_text(&self, text: &str, source_language: &str, target_language: &str) -> String {
        match self.try_translate_text(text, source_language, target_language).await {
            Ok(translated) => translated,
            Err(e) => {
                error!("Error during translation: {}", e);
                text.to_string()
            }
        }
    }

    /// Translate a Markdown document, reporting provider faults
    pub async fn try_translate_markdown(
        &self,
        markdown: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, ProviderError> {
        self.request(TranslationPrompt::markdown(markdown, source_language, target_language)).await
    }

    /// Translate a Markdown document; on any fault the input comes back unchanged
    pub async fn translate_markdown(&self, markdown: &str, source_language: &str, target_language: &str) -> String {
        match self.try_translate_markdown(markdown, source_language, target_language).await {
            Ok(translated) => translated,
            Err(e) => {
                error!("Error during Markdown translation: {}", e);
                markdown.to_string()
            }
        }
    }

    /// Snapshot of the usage counters
    pub fn usage(&self) -> TokenUsageStats {
        TokenUsageStats {
            calls: self.usage.calls.load(Ordering::Relaxed),
            failures: self.usage.failures.load(Ordering::Relaxed),
            prompt_tokens: self.usage.prompt_tokens.load(Ordering::Relaxed),
            completion_tokens: self.usage.completion_tokens.load(Ordering::Relaxed),
            api_duration: Duration::from_micros(self.usage.api_micros.load(Ordering::Relaxed)),
            provider: self.provider.name().to_string(),
        }
    }

    async fn request(&self, prompt: TranslationPrompt) -> Result<String, ProviderError> {
        // Skip empty text
        if prompt.text.trim().is_empty() {
            return Ok(prompt.text);
        }

        let start_time = Instant::now();
        let result = self.provider.complete(&prompt).await;

        self.usage.calls.fetch_add(1, Ordering::Relaxed);
        self.usage.api_micros.fetch_add(start_time.elapsed().as_micros() as u64, Ordering::Relaxed);

        let completion = match result {
            Ok(completion) => completion,
            Err(e) => {
                self.usage.failures.fetch_add(1, Ordering::Relaxed);
                return Err(e);
            }
        };

        self.usage.prompt_tokens.fetch_add(completion.prompt_tokens.unwrap_or(0), Ordering::Relaxed);
        self.usage.completion_tokens.fetch_add(completion.completion_tokens.unwrap_or(0), Ordering::Relaxed);

        let translated = completion.text.trim();
        if translated.is_empty() {
            self.usage.failures.fetch_add(1, Ordering::Relaxed);
            return Err(ProviderError::EmptyResponse);
        }

        debug!(
            "{} translated {} chars into {} chars ({:?})",
            self.provider.name(),
            prompt.text.len(),
            translated.len(),
            prompt.kind
        );

        Ok(translated.to_string())
    }
}
