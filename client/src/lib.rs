//! # Messages API client
//!
//! A minimal client for Anthropic's `POST /v1/messages` endpoint. One call,
//! one response: no streaming, no retries.
//!
//! ```rust,no_run
//! use anthropic_request::{Message, V1MessagesRequest};
//! use client::{MessagesApi, MessagesClient, config::ClientConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = MessagesClient::new(ClientConfig::new("sk-ant-..."))?;
//!
//!     let request = V1MessagesRequest::builder()
//!         .model("claude-3-5-sonnet-20241022")
//!         .max_tokens(256)
//!         .message(Message::user_text("Hello, world!"))
//!         .build();
//!
//!     let response = client.create(&request).await?;
//!     println!("{}", response.text());
//!
//!     Ok(())
//! }
//! ```

use anthropic_request::V1MessagesRequest;
use anthropic_response::{ErrorResponse, V1MessagesResponse};
use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error, info};

pub mod config;

use config::ClientConfig;

const MESSAGES_PATH: &str = "/v1/messages";

#[async_trait]
pub trait MessagesApi {
    async fn create(&self, request: &V1MessagesRequest) -> Result<V1MessagesResponse>;
}

pub struct MessagesClient {
    config: ClientConfig,
    http: Client,
}

impl MessagesClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { config, http })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}{}",
            self.config.base_url.trim_end_matches('/'),
            MESSAGES_PATH
        )
    }
}

#[async_trait]
impl MessagesApi for MessagesClient {
    async fn create(&self, request: &V1MessagesRequest) -> Result<V1MessagesResponse> {
        let url = self.endpoint();
        info!(
            "Sending v1/messages request for model: {} to {}",
            request.model, url
        );
        debug!(
            "Messages count: {}, max_tokens: {}, temperature: {:?}",
            request.messages.len(),
            request.max_tokens,
            request.temperature
        );

        let response = self
            .http
            .post(&url)
            .header("x-api-key", &self.config.api_key)
            .header("anthropic-version", &self.config.api_version)
            .header("content-type", "application/json")
            .json(request)
            .send()
            .await
            .with_context(|| format!("Failed to send request to {url}"))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .context("Failed to read response body")?;

        if !status.is_success() {
            error!("Messages API returned status {}", status);
            match serde_json::from_str::<ErrorResponse>(&body) {
                Ok(error_response) => {
                    bail!("Request failed with status {}: {}", status, error_response.error)
                }
                Err(_) => bail!("Request failed with status {}: {}", status, body),
            }
        }

        let message: V1MessagesResponse =
            serde_json::from_str(&body).context("Failed to decode messages response")?;
        info!(
            "Usage: input_tokens: {}, output_tokens: {}, stop_reason: {:?}",
            message.usage.input_tokens, message.usage.output_tokens, message.stop_reason
        );

        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_strips_trailing_slash() {
        let mut config = ClientConfig::new("key");
        config.base_url = "http://localhost:8080/".to_string();
        let client = MessagesClient::new(config).unwrap();
        assert_eq!(client.endpoint(), "http://localhost:8080/v1/messages");
    }
}
