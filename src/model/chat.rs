//! Blocking client for OpenAI-compatible chat-completions endpoints.

use super::{ModelError, TextGenerator};
use crate::config::Config;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub struct ChatCompletionsClient {
    http: reqwest::blocking::Client,
    endpoint: String,
    model: String,
    token: String,
    temperature: f32,
    top_p: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    temperature: f32,
    top_p: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: AssistantMessage,
}

#[derive(Deserialize)]
struct AssistantMessage {
    content: Option<String>,
}

impl ChatCompletionsClient {
    /// Build a client from configuration, reading the bearer token from the
    /// configured environment variable.
    pub fn from_config(config: &Config) -> Result<Self, ModelError> {
        let token = std::env::var(&config.token_env)
            .ok()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ModelError::MissingToken(config.token_env.clone()))?;

        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            token,
            temperature: config.temperature,
            top_p: config.top_p,
            max_tokens: config.max_tokens,
        })
    }
}

impl TextGenerator for ChatCompletionsClient {
    fn generate(&self, prompt: &str, system_instruction: &str) -> Result<String, ModelError> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                Message { role: "system", content: system_instruction },
                Message { role: "user", content: prompt },
            ],
            temperature: self.temperature,
            top_p: self.top_p,
            max_tokens: self.max_tokens,
        };

        tracing::debug!(model = %self.model, prompt_bytes = prompt.len(), "sending generation request");

        let response = self
            .http
            .post(format!("{}/chat/completions", self.endpoint))
            .bearer_auth(&self.token)
            .json(&request)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ModelError::Api { status: status.as_u16(), body });
        }

        let parsed: ChatResponse = response.json()?;
        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(ModelError::EmptyResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_payload_shape_parses() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"hello"}}],"usage":{"total_tokens":5}}"#;
        let parsed: ChatResponse = serde_json::from_str(body).expect("parse");
        assert_eq!(parsed.choices.len(), 1);
        assert_eq!(parsed.choices[0].message.content.as_deref(), Some("hello"));
    }

    #[test]
    fn test_missing_choices_field_parses_as_empty() {
        let parsed: ChatResponse = serde_json::from_str("{}").expect("parse");
        assert!(parsed.choices.is_empty());
    }

    #[test]
    fn test_request_payload_shape() {
        let request = ChatRequest {
            model: "gpt-4o",
            messages: vec![
                Message { role: "system", content: "sys" },
                Message { role: "user", content: "hi" },
            ],
            temperature: 0.7,
            top_p: 1.0,
            max_tokens: 4000,
        };
        let json = serde_json::to_value(&request).expect("serialize");
        assert_eq!(json["model"], "gpt-4o");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "hi");
        assert_eq!(json["max_tokens"], 4000);
    }
}
