use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::errors::ProviderError;
use crate::providers::{error_from_response, http_client, Completion, GenerationSettings, Provider};
use crate::translation::prompts::TranslationPrompt;

/// Ollama client for interacting with a local Ollama server
pub struct Ollama {
    /// Base URL of the Ollama API
    base_url: Url,
    /// HTTP client for making requests
    client: Client,
    /// Model and sampling settings
    settings: GenerationSettings,
}

/// Generation options for the Ollama API
#[derive(Debug, Serialize, Deserialize)]
pub struct GenerationOptions {
    /// Temperature for generation
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    /// Random seed for generation
    #[serde(skip_serializing_if = "Option::is_none")]
    seed: Option<u64>,
    /// Maximum number of tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    num_predict: Option<u32>,
}

/// Chat message object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role of the message sender (system, user, assistant, or tool)
    pub role: String,
    /// Content of the message
    pub content: String,
}

/// Chat request for the Ollama API
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Model name to use for generation
    model: String,
    /// Messages of the conversation
    messages: Vec<ChatMessage>,
    /// Additional model parameters
    #[serde(skip_serializing_if = "Option::is_none")]
    options: Option<GenerationOptions>,
    /// Whether to stream the response
    stream: bool,
}

/// Chat response from the Ollama API
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Model name
    pub model: String,
    /// Response message
    pub message: ChatMessage,
    /// Whether the generation is complete
    pub done: bool,
    /// Why generation stopped (`stop`, `length`, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub done_reason: Option<String>,
    /// Number of prompt tokens
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt_eval_count: Option<u64>,
    /// Number of generated tokens
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eval_count: Option<u64>,
}

impl ChatRequest {
    /// Create a new non-streaming chat request
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            messages: Vec::new(),
            options: None,
            stream: false,
        }
    }

    /// Add a message to the request
    pub fn add_message(mut self, role: impl Into<String>, content: impl Into<String>) -> Self {
        self.messages.push(ChatMessage {
            role: role.into(),
            content: content.into(),
        });
        self
    }

    /// Pin temperature and seed so repeated runs give the same output
    pub fn deterministic(mut self, temperature: f32, num_predict: u32) -> Self {
        self.options = Some(GenerationOptions {
            temperature: Some(temperature),
            seed: Some(0),
            num_predict: Some(num_predict),
        });
        self
    }
}

impl Ollama {
    /// Create a new Ollama client for the given endpoint
    pub fn new(endpoint: &str, settings: GenerationSettings) -> Result<Self, ProviderError> {
        let base_url = parse_endpoint(endpoint)?;
        Ok(Self {
            base_url,
            client: http_client(settings.timeout_secs),
            settings,
        })
    }

    /// Send a chat request
    pub async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, ProviderError> {
        let url = self.base_url.join("api/chat")
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

        let response = self.client.post(url)
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(error_from_response("Ollama", response).await);
        }

        response.json::<ChatResponse>().await
            .map_err(|e| ProviderError::ParseError(e.to_string()))
    }
}

/// Parse an endpoint string into a base URL, accepting a bare `host:port`
fn parse_endpoint(endpoint: &str) -> Result<Url, ProviderError> {
    if endpoint.is_empty() {
        return Err(ProviderError::ConnectionError("Endpoint cannot be empty".to_string()));
    }

    let with_scheme = if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        endpoint.to_string()
    } else {
        format!("http://{}", endpoint)
    };

    // A trailing slash makes `join` append instead of replacing the last segment
    let normalized = format!("{}/", with_scheme.trim_end_matches('/'));
    Url::parse(&normalized)
        .map_err(|e| ProviderError::ConnectionError(format!("Invalid endpoint {}: {}", endpoint, e)))
}

/// Take the reply text; a reply cut at `num_predict` is an error
fn extract_text_from_response(response: ChatResponse) -> Result<String, ProviderError> {
    if response.done_reason.as_deref() == Some("length") {
        return Err(ProviderError::TruncatedResponse("done_reason: length".to_string()));
    }
    Ok(response.message.content)
}

impl std::fmt::Debug for Ollama {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ollama")
            .field("base_url", &self.base_url.as_str())
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Provider for Ollama {
    fn name(&self) -> &str {
        "Ollama"
    }

    async fn complete(&self, prompt: &TranslationPrompt) -> Result<Completion, ProviderError> {
        let request = ChatRequest::new(&self.settings.model)
            .add_message("system", &prompt.system)
            .add_message("user", &prompt.user)
            .deterministic(self.settings.temperature, self.settings.max_tokens);

        let response = self.chat(&request).await?;
        let prompt_tokens = response.prompt_eval_count;
        let completion_tokens = response.eval_count;

        Ok(Completion {
            text: extract_text_from_response(response)?,
            prompt_tokens,
            completion_tokens,
        })
    }
}
