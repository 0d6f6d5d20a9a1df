//! OpenAI-compatible chat-completions client for bill reading.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::TextExtractor;
use crate::error::{Result, VisionError};

/// Instruction sent with every bill image. The model must answer with either
/// a bare number or the `NOT_FOUND` sentinel; anything else is still safe
/// because the downstream parser treats the reply as free-form text.
pub const BILL_READING_PROMPT: &str = "You are an expert at reading electricity bills. \
Look at this electricity bill image carefully and find the TOTAL electricity units \
consumed in kWh. Look for labels like \"Units Consumed\", \"Total Units\", \
\"Energy Consumed\", \"kWh Used\", or similar. The number is usually prominent and may \
have commas or spaces. Extract ONLY that number, nothing else. If you find it, respond \
with just the number (e.g., \"450\" or \"1250.5\"). If you cannot find it clearly, \
respond with \"NOT_FOUND\".";

/// Chat completion request payload.
#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<Message>,
    max_tokens: u32,
    temperature: f64,
}

#[derive(Debug, Serialize)]
struct Message {
    role: &'static str,
    content: Vec<ContentPart>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Serialize)]
struct ImageUrl {
    url: String,
}

/// Chat completion response.
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}

/// Client for an OpenAI-compatible vision gateway.
///
/// Retries rate-limit and server errors with exponential backoff; everything
/// else surfaces immediately.
pub struct GatewayClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
    max_retries: u32,
}

impl GatewayClient {
    pub fn new(
        api_key: &str,
        base_url: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
        max_retries: u32,
    ) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let auth = HeaderValue::from_str(&format!("Bearer {}", api_key))
            .map_err(|_| VisionError::Config("API key contains invalid characters".to_string()))?;
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            model: model.into(),
            max_retries,
        })
    }

    async fn complete(&self, request: &ChatCompletionRequest) -> Result<String> {
        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));

        let mut attempt: u32 = 0;
        loop {
            attempt += 1;

            let response = match self.client.post(&url).json(request).send().await {
                Ok(response) => response,
                Err(err) => {
                    if err.is_timeout() && attempt <= self.max_retries {
                        warn!("gateway request timed out, attempt {}", attempt);
                        tokio::time::sleep(backoff_delay(attempt)).await;
                        continue;
                    }
                    return Err(err.into());
                }
            };

            let status = response.status();
            if status.is_success() {
                let body: ChatCompletionResponse = response.json().await?;
                let choice = body
                    .choices
                    .into_iter()
                    .next()
                    .ok_or(VisionError::EmptyResponse)?;
                return Ok(choice.message.content);
            }

            let retryable = status.as_u16() == 429 || status.is_server_error();
            if retryable && attempt <= self.max_retries {
                let delay = backoff_delay(attempt);
                warn!("gateway returned {}, retrying in {:?}", status, delay);
                tokio::time::sleep(delay).await;
                continue;
            }

            let message = response.text().await.unwrap_or_default();
            return Err(VisionError::Api {
                status: status.as_u16(),
                message,
            });
        }
    }
}

fn backoff_delay(attempt: u32) -> Duration {
    Duration::from_millis(500 * 2u64.pow(attempt.saturating_sub(1).min(6)))
}

#[async_trait]
impl TextExtractor for GatewayClient {
    async fn extract_text(&self, image_url: &str) -> Result<String> {
        debug!("requesting bill text for {}", image_url);

        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![Message {
                role: "user",
                content: vec![
                    ContentPart::Text {
                        text: BILL_READING_PROMPT.to_string(),
                    },
                    ContentPart::ImageUrl {
                        image_url: ImageUrl {
                            url: image_url.to_string(),
                        },
                    },
                ],
            }],
            max_tokens: 64,
            temperature: 0.0,
        };

        let content = self.complete(&request).await?;
        Ok(content.trim().to_string())
    }
}
