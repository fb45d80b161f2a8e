//! Anthropic Messages API client for adjudication calls.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::service::{AdjudicationRequest, AdjudicationService, ServiceError};

pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
pub const API_VERSION: &str = "2023-06-01";

/// HTTP client for the `/v1/messages` endpoint.
pub struct AnthropicClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    system: &'a str,
    messages: Vec<Message<'a>>,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
    #[serde(default)]
    stop_reason: Option<String>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

impl AnthropicClient {
    /// `base_url` should be like `https://api.anthropic.com`; a trailing slash is dropped.
    pub fn new(
        api_key: impl Into<String>,
        base_url: &str,
        timeout: Duration,
    ) -> Result<Self, ServiceError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/messages", self.base_url)
    }
}

fn request_body(request: &AdjudicationRequest) -> MessagesRequest<'_> {
    MessagesRequest {
        model: &request.model,
        max_tokens: request.max_tokens,
        temperature: request.temperature,
        system: &request.system_prompt,
        messages: vec![Message {
            role: "user",
            content: &request.user_prompt,
        }],
    }
}

/// Concatenate the text blocks of a response.
///
/// A response with no text is returned as an empty string; the adjudicator
/// reads that as an unparseable verdict, not a transport failure.
fn response_text(response: MessagesResponse) -> Result<String, ServiceError> {
    if response.stop_reason.as_deref() == Some("refusal") {
        return Err(ServiceError::Refusal);
    }
    Ok(response
        .content
        .into_iter()
        .filter(|block| block.kind == "text")
        .filter_map(|block| block.text)
        .collect())
}

#[async_trait]
impl AdjudicationService for AnthropicClient {
    async fn decide(&self, request: &AdjudicationRequest) -> Result<String, ServiceError> {
        let url = self.endpoint();
        debug!(url = %url, model = %request.model, "sending adjudication request");

        let resp = self
            .client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&request_body(request))
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "adjudication request rejected");
            return Err(ServiceError::Server {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: MessagesResponse = resp.json().await?;
        response_text(parsed)
    }
}
