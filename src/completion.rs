// src/completion.rs
use crate::config::ProviderConfig;
use crate::error::ApiError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::{error, info};

/// Generation knobs fixed per prompt template.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GenerationParams {
    pub temperature: f32,
    pub max_tokens: u32,
    pub json_mode: bool,
}

#[derive(Clone, Debug, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// An ordered message list plus generation parameters, ready to send to
/// the provider.
#[derive(Clone, Debug)]
pub struct CompletionRequest {
    pub messages: Vec<ChatMessage>,
    pub params: GenerationParams,
}

impl CompletionRequest {
    pub fn from_prompts(system: &str, user: String, params: GenerationParams) -> Self {
        Self {
            messages: vec![ChatMessage::system(system), ChatMessage::user(user)],
            params,
        }
    }
}

/// Boundary to the external model provider. One call per request, no
/// retry, no streaming, no caching.
#[rocket::async_trait]
pub trait CompletionGateway: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, ApiError>;
}

#[derive(Serialize)]
struct ChatCompletionBody<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
    max_tokens: u32,
    stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// Groq-backed gateway speaking the OpenAI-compatible chat completions
/// contract.
pub struct GroqClient {
    client: reqwest::Client,
    config: ProviderConfig,
}

impl GroqClient {
    pub fn new(config: ProviderConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, config })
    }
}

#[rocket::async_trait]
impl CompletionGateway for GroqClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, ApiError> {
        let api_key = self.config.api_key.as_deref().ok_or_else(|| {
            ApiError::Gateway("GROQ_API_KEY environment variable not set".to_string())
        })?;

        let body = ChatCompletionBody {
            model: &self.config.model,
            messages: &request.messages,
            temperature: request.params.temperature,
            max_tokens: request.params.max_tokens,
            stream: false,
            response_format: request
                .params
                .json_mode
                .then_some(ResponseFormat { kind: "json_object" }),
        };

        info!(
            "Sending completion request to provider (model: {}, messages: {})",
            self.config.model,
            request.messages.len()
        );

        let response = self
            .client
            .post(format!("{}/chat/completions", self.config.base_url))
            .header("Authorization", format!("Bearer {}", api_key))
            .json(&body)
            .send()
            .await
            .map_err(|e| ApiError::Gateway(format!("Failed to reach completion provider: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            error!("Completion provider error {}: {}", status, error_text);
            return Err(ApiError::Gateway(format!(
                "Provider returned {}: {}",
                status, error_text
            )));
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            ApiError::Gateway(format!("Failed to parse provider response: {}", e))
        })?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| ApiError::Gateway("Provider response contained no choices".to_string()))
    }
}

/// Parse the provider's raw text as JSON and pass it through verbatim.
/// No schema validation happens here; callers receive whatever the
/// provider emitted.
pub fn relay_json(raw: &str) -> Result<Value, ApiError> {
    serde_json::from_str(raw).map_err(|e| {
        ApiError::MalformedResponse(format!("Provider did not return valid JSON: {}", e))
    })
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relay_json_passes_valid_json_through() {
        let value = relay_json(r#"{"score": 70, "matchedSkills": ["Python"]}"#).unwrap();
        assert_eq!(value["score"], 70);
        assert_eq!(value["matchedSkills"][0], "Python");
    }

    #[test]
    fn test_relay_json_rejects_invalid_json() {
        let result = relay_json("Sure! Here is your JSON: {");
        assert!(matches!(result, Err(ApiError::MalformedResponse(_))));
    }

    #[test]
    fn test_body_includes_response_format_only_in_json_mode() {
        let messages = vec![ChatMessage::system("s"), ChatMessage::user("u")];

        let with_json = ChatCompletionBody {
            model: "llama-3.3-70b-versatile",
            messages: &messages,
            temperature: 0.2,
            max_tokens: 2048,
            stream: false,
            response_format: Some(ResponseFormat { kind: "json_object" }),
        };
        let value = serde_json::to_value(&with_json).unwrap();
        assert_eq!(value["response_format"]["type"], "json_object");
        assert_eq!(value["stream"], false);

        let without_json = ChatCompletionBody {
            model: "llama-3.3-70b-versatile",
            messages: &messages,
            temperature: 0.7,
            max_tokens: 1024,
            stream: false,
            response_format: None,
        };
        let value = serde_json::to_value(&without_json).unwrap();
        assert!(value.get("response_format").is_none());
    }
}
