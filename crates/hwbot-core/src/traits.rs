use crate::error::BotError;
use async_trait::async_trait;
use serde_json::Value;

/// Upstream review API consumed by the watcher.
#[async_trait]
pub trait StatusSource: Send + Sync {
    /// Fetch the raw API answer for changes since `since` (epoch seconds).
    ///
    /// `Ok(None)` means a transient transport failure: nothing to process
    /// this cycle, try again on the next one. `Err` means the upstream broke
    /// its contract and the caller must report it.
    async fn poll(&self, since: i64) -> Result<Option<Value>, BotError>;
}

/// Outbound notification channel.
///
/// Delivery is best-effort: implementations log failures and never
/// propagate them to the caller.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Send one text message to the fixed chat target.
    async fn notify(&self, text: &str);
}
