//! Review API client.

use async_trait::async_trait;
use hwbot_core::{error::BotError, traits::StatusSource};
use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error};

/// Fixed review-status endpoint.
pub const ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the homework review API.
pub struct ReviewClient {
    client: reqwest::Client,
    endpoint: String,
    token: String,
}

impl ReviewClient {
    /// Create a client for the fixed endpoint.
    pub fn new(token: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: ENDPOINT.to_string(),
            token: token.to_string(),
        }
    }

    /// Fetch homework statuses changed since `since` (epoch seconds).
    ///
    /// Returns the body as raw JSON; shape validation happens downstream.
    /// Transport-level failures come back as `Ok(None)`. A non-200 answer is
    /// a hard error and propagates.
    pub async fn get_api_answer(&self, since: i64) -> Result<Option<Value>, BotError> {
        let resp = match self
            .client
            .get(&self.endpoint)
            .query(&[("from_date", since)])
            .header("Authorization", format!("OAuth {}", self.token))
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) if e.is_connect() => {
                error!("connection error: {e}");
                return Ok(None);
            }
            Err(e) => {
                error!("request error: {e}");
                return Ok(None);
            }
        };

        if resp.status() != StatusCode::OK {
            let status = resp.status().as_u16();
            error!(
                "endpoint {} is unavailable, API answered {status}",
                self.endpoint
            );
            return Err(BotError::Endpoint {
                endpoint: self.endpoint.clone(),
                status,
            });
        }

        match resp.json::<Value>().await {
            Ok(body) => {
                debug!("api answer: {body}");
                Ok(Some(body))
            }
            Err(e) => {
                error!("failed to decode api answer: {e}");
                Ok(None)
            }
        }
    }
}

#[async_trait]
impl StatusSource for ReviewClient {
    async fn poll(&self, since: i64) -> Result<Option<Value>, BotError> {
        self.get_api_answer(since).await
    }
}
