//! Telegram Bot API notification channel.
//!
//! Send-only: delivers status lines to one fixed chat via `sendMessage`.
//! Docs: <https://core.telegram.org/bots/api>

mod send;
pub(crate) mod types;

#[cfg(test)]
mod tests;

use async_trait::async_trait;
use hwbot_core::traits::Notifier;
use tracing::{debug, error};

/// Telegram channel using the Bot API.
pub struct TelegramChannel {
    chat_id: String,
    client: reqwest::Client,
    base_url: String,
}

impl TelegramChannel {
    /// Create a channel bound to one chat.
    pub fn new(bot_token: &str, chat_id: &str) -> Self {
        let base_url = format!("https://api.telegram.org/bot{bot_token}");
        Self {
            chat_id: chat_id.to_string(),
            client: reqwest::Client::new(),
            base_url,
        }
    }
}

#[async_trait]
impl Notifier for TelegramChannel {
    async fn notify(&self, text: &str) {
        // Delivery is best-effort: a lost notification must not stop the
        // poll loop.
        match self.send_text(text).await {
            Ok(()) => debug!("sent message: {text}"),
            Err(e) => error!("message not delivered: {e}"),
        }
    }
}
