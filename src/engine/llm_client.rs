use log::debug;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::{CompletionConfig, Secret, COMPLETION_KEY_ENV};
use crate::engine::error::ExtractionError;

/// Anything that can answer a single prompt with text.
pub trait CompletionService: Send {
    fn complete(&self, prompt: &str) -> Result<String, ExtractionError>;
}

#[derive(Serialize)]
pub struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

#[derive(Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'static str,
    pub content: &'a str,
}

#[derive(Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<Choice>,
}

#[derive(Deserialize)]
pub struct Choice {
    pub message: ChatMessageResponse,
}

#[derive(Deserialize)]
pub struct ChatMessageResponse {
    pub content: Option<String>,
}

impl ChatCompletionResponse {
    pub fn into_content(self) -> Result<String, ExtractionError> {
        self.choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| {
                ExtractionError::MalformedResponse("completion had no message content".to_string())
            })
    }
}

/// Client for an OpenAI-compatible chat completions endpoint.
pub struct OpenAiClient {
    http: Client,
    base_url: String,
    model: String,
    temperature: Option<f32>,
    api_key: Option<Secret>,
    timeout: Duration,
}

impl OpenAiClient {
    pub fn from_config(config: &CompletionConfig) -> Result<Self, ExtractionError> {
        let timeout = config.timeout();
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ExtractionError::Unavailable(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            temperature: config.temperature,
            api_key: config.api_key.clone(),
            timeout,
        })
    }
}

impl CompletionService for OpenAiClient {
    fn complete(&self, prompt: &str) -> Result<String, ExtractionError> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or(ExtractionError::MissingCredential(COMPLETION_KEY_ENV))?;

        let req = ChatCompletionRequest {
            model: &self.model,
            temperature: self.temperature,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        let url = format!("{}/chat/completions", self.base_url);
        debug!(
            "complete: POST {} model={} prompt_len={}",
            url,
            self.model,
            prompt.len()
        );

        let resp = self
            .http
            .post(&url)
            .bearer_auth(api_key.expose())
            .json(&req)
            .send()
            .map_err(|e| ExtractionError::from_transport(e, self.timeout))?;

        let status = resp.status();
        let body = resp
            .text()
            .map_err(|e| ExtractionError::from_transport(e, self.timeout))?;

        if !status.is_success() {
            return Err(ExtractionError::Status {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        let parsed: ChatCompletionResponse = serde_json::from_str(&body).map_err(|e| {
            ExtractionError::MalformedResponse(format!("unexpected completion envelope: {e}"))
        })?;

        parsed.into_content()
    }
}

/// Pull `error.message` out of an API error body, else return the body.
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}
