//! `sendMessage` call against the Bot API.

use super::types::{TgResponse, TgSentMessage};
use super::TelegramChannel;
use hwbot_core::error::BotError;
use serde_json::json;
use std::time::Duration;

const SEND_TIMEOUT: Duration = Duration::from_secs(10);

impl TelegramChannel {
    /// Deliver `text` to the configured chat.
    pub(crate) async fn send_text(&self, text: &str) -> Result<(), BotError> {
        let url = format!("{}/sendMessage", self.base_url);
        let body = json!({ "chat_id": self.chat_id, "text": text });

        let resp: TgResponse<TgSentMessage> = self
            .client
            .post(&url)
            .timeout(SEND_TIMEOUT)
            .json(&body)
            .send()
            .await
            .map_err(|e| BotError::Channel(format!("telegram sendMessage failed: {e}")))?
            .json()
            .await
            .map_err(|e| BotError::Channel(format!("telegram sendMessage parse failed: {e}")))?;

        if !resp.ok {
            return Err(BotError::Channel(format!(
                "telegram API error: {}",
                resp.description.unwrap_or_default()
            )));
        }

        Ok(())
    }
}
