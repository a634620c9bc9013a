//! Telegram Bot API deserialization types.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub(crate) struct TgResponse<T> {
    pub ok: bool,
    pub result: Option<T>,
    pub description: Option<String>,
}

/// Subset of the Message object that `sendMessage` returns.
#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub(crate) struct TgSentMessage {
    pub message_id: i64,
}
