/*!
 * Mock provider implementation for testing.
 *
 * This module provides a mock provider that simulates different behaviors:
 * - `MockProvider::working()` - Always succeeds with tagged text
 * - `MockProvider::uppercase()` - Succeeds by uppercasing the payload
 * - `MockProvider::intermittent(n)` - Fails every nth request
 * - `MockProvider::failing(kind)` - Always fails with the given error
 * - `MockProvider::empty()` - Succeeds with an empty body
 *
 * Every request is counted and its payload recorded, so tests can assert
 * exactly which texts reached the external capability.
 */

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::errors::ProviderError;
use crate::providers::{Completion, Provider};
use crate::translation::prompts::TranslationPrompt;

/// Type of error to simulate
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockErrorType {
    /// Authentication error (invalid API key)
    Auth,
    /// Connection error
    Connection,
    /// Rate limit error
    RateLimit,
    /// API error
    Api,
    /// Reply cut off at the token limit
    Truncated,
}

impl MockErrorType {
    fn to_error(self) -> ProviderError {
        match self {
            Self::Auth => ProviderError::AuthenticationError("Invalid API key".into()),
            Self::Connection => ProviderError::ConnectionError("Connection failed".into()),
            Self::RateLimit => ProviderError::RateLimitExceeded("Rate limit exceeded".into()),
            Self::Api => ProviderError::ApiError {
                status_code: 500,
                message: "Internal error".into(),
            },
            Self::Truncated => ProviderError::TruncatedResponse("finish_reason: length".into()),
        }
    }
}

/// Behavior mode for the mock provider
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Always succeeds
    Working,
    /// Fails intermittently (every Nth request)
    Intermittent { fail_every: usize },
    /// Always fails with an error
    Failing(MockErrorType),
    /// Returns empty response
    Empty,
}

/// Mock provider for testing translation behavior
#[derive(Debug)]
pub struct MockProvider {
    /// Behavior mode
    behavior: MockBehavior,
    /// Request counter
    request_count: Arc<AtomicUsize>,
    /// Payloads seen, in call order
    payloads: Arc<Mutex<Vec<String>>>,
    /// Custom response generator (optional)
    custom_response: Option<fn(&TranslationPrompt) -> String>,
}

impl MockProvider {
    /// Create a new mock provider with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            request_count: Arc::new(AtomicUsize::new(0)),
            payloads: Arc::new(Mutex::new(Vec::new())),
            custom_response: None,
        }
    }

    /// Create a working mock provider that always succeeds
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Create a working mock provider that answers with the uppercased payload
    pub fn uppercase() -> Self {
        Self::working().with_custom_response(|prompt| prompt.text.to_uppercase())
    }

    /// Create an intermittently failing mock provider
    pub fn intermittent(fail_every: usize) -> Self {
        Self::new(MockBehavior::Intermittent { fail_every: fail_every.max(1) })
    }

    /// Create a failing mock provider that always errors
    pub fn failing(error_type: MockErrorType) -> Self {
        Self::new(MockBehavior::Failing(error_type))
    }

    /// Create a mock that returns empty responses
    pub fn empty() -> Self {
        Self::new(MockBehavior::Empty)
    }

    /// Set a custom response generator
    pub fn with_custom_response(mut self, generator: fn(&TranslationPrompt) -> String) -> Self {
        self.custom_response = Some(generator);
        self
    }

    /// Number of requests received so far
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }

    /// Payloads received so far, in call order
    pub fn payloads(&self) -> Vec<String> {
        self.payloads.lock().map(|p| p.clone()).unwrap_or_default()
    }

    fn respond(&self, prompt: &TranslationPrompt) -> Completion {
        let text = match self.custom_response {
            Some(generator) => generator(prompt),
            None => format!("[TRANSLATED to {}] {}", prompt.target_language, prompt.text),
        };

        Completion {
            prompt_tokens: Some(prompt.user.len() as u64),
            completion_tokens: Some((text.len() / 2) as u64),
            text,
        }
    }
}

impl Clone for MockProvider {
    fn clone(&self) -> Self {
        Self {
            behavior: self.behavior,
            request_count: Arc::clone(&self.request_count),
            payloads: Arc::clone(&self.payloads),
            custom_response: self.custom_response,
        }
    }
}

#[async_trait]
impl Provider for MockProvider {
    fn name(&self) -> &str {
        "Mock"
    }

    async fn complete(&self, prompt: &TranslationPrompt) -> Result<Completion, ProviderError> {
        let count = self.request_count.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut payloads) = self.payloads.lock() {
            payloads.push(prompt.text.clone());
        }

        match self.behavior {
            MockBehavior::Working => Ok(self.respond(prompt)),
            MockBehavior::Intermittent { fail_every } => {
                if count % fail_every == fail_every - 1 {
                    Err(MockErrorType::Api.to_error())
                } else {
                    Ok(self.respond(prompt))
                }
            }
            MockBehavior::Failing(error_type) => Err(error_type.to_error()),
            MockBehavior::Empty => Ok(Completion::from_text("")),
        }
    }
}
