//! Chat-completion client for the AI gateway.

use std::time::Duration;

use reqwest::{header::AUTHORIZATION, Client};
use serde::{Deserialize, Serialize};

use crate::error::Error;

pub const DEFAULT_GATEWAY_URL: &str = "https://ai.gateway.lovable.dev/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "google/gemini-3-flash-preview";

#[derive(Debug, Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'static str,
    pub content: &'a str,
}

#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: [ChatMessage<'a>; 2],
}

#[derive(Debug, Default, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: Option<AssistantMessage>,
}

#[derive(Debug, Deserialize)]
pub struct AssistantMessage {
    pub content: Option<String>,
}

impl ChatResponse {
    /// Text of the first choice, if the model produced any.
    pub fn into_content(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .filter(|content| !content.is_empty())
    }
}

#[derive(Clone)]
pub struct ChatClient {
    client: Client,
    url: String,
    api_key: String,
    model: String,
}

impl ChatClient {
    pub fn new(
        url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            url: url.into(),
            api_key: api_key.into(),
            model: model.into(),
        })
    }

    pub fn has_credential(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send one system + user exchange and return the assistant's raw text.
    ///
    /// Exactly one request is made; 429 and 402 map to their own errors and are never retried.
    pub async fn complete(&self, system: &str, user: &str) -> Result<String, Error> {
        if !self.has_credential() {
            return Err(Error::Configuration);
        }

        let payload = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
        };

        let response = self
            .client
            .post(&self.url)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .json(&payload)
            .send()
            .await
            .map_err(|e| Error::Upstream {
                status: None,
                body: format!("Failed to send AI gateway request: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(match status.as_u16() {
                429 => Error::RateLimited,
                402 => Error::PaymentRequired,
                _ => {
                    let body = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "<unable to read response body>".to_string());
                    Error::Upstream {
                        status: Some(status.as_u16()),
                        body,
                    }
                }
            });
        }

        let body: ChatResponse = response.json().await.map_err(|e| Error::Upstream {
            status: Some(status.as_u16()),
            body: format!("Failed to decode AI gateway response: {e}"),
        })?;

        tracing::debug!(model = %self.model, "AI gateway replied");
        body.into_content().ok_or(Error::NoContent)
    }
}
