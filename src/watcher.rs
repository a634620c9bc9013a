//! Poll loop: fetch, validate, format, dedup, notify.

use chrono::Utc;
use hwbot_api::response::{check_response, parse_status};
use hwbot_core::{
    error::BotError,
    status::NOTHING_UNDER_REVIEW,
    traits::{Notifier, StatusSource},
};
use std::time::Duration;
use tracing::{debug, error, info};

/// Seconds between poll cycles.
pub const POLL_PERIOD_SECS: u64 = 600;

/// Polls the review API and relays status changes to the notifier.
pub struct Watcher {
    source: Box<dyn StatusSource>,
    notifier: Box<dyn Notifier>,
    /// Last report delivered; an identical report on the next cycle is
    /// suppressed.
    last_report: String,
}

impl Watcher {
    pub fn new(source: Box<dyn StatusSource>, notifier: Box<dyn Notifier>) -> Self {
        Self {
            source,
            notifier,
            last_report: String::new(),
        }
    }

    /// Run forever. The cursor is fixed at startup: every cycle asks for the
    /// full history since the process came up.
    pub async fn run(mut self) {
        let since = Utc::now().timestamp();
        info!("watcher started, polling every {POLL_PERIOD_SECS}s");
        loop {
            self.tick(since).await;
            tokio::time::sleep(Duration::from_secs(POLL_PERIOD_SECS)).await;
        }
    }

    /// One poll cycle. Failures become chat messages and flow through the
    /// same dedup as regular reports; only a quiet transport error ends the
    /// cycle without one.
    pub async fn tick(&mut self, since: i64) {
        let report = match self.compute_report(since).await {
            Ok(Some(report)) => report,
            Ok(None) => return,
            Err(e) => {
                error!("cycle failed: {e}");
                format!("Сбой в работе программы {e}")
            }
        };

        if report != self.last_report {
            self.notifier.notify(&report).await;
            self.last_report = report;
        } else {
            debug!("status unchanged since last cycle");
        }
    }

    async fn compute_report(&self, since: i64) -> Result<Option<String>, BotError> {
        let response = match self.source.poll(since).await? {
            Some(body) => body,
            None => return Ok(None),
        };

        let homeworks = check_response(&response)?;
        if homeworks.is_empty() {
            info!("no homeworks under review");
            return Ok(Some(NOTHING_UNDER_REVIEW.to_string()));
        }

        // Only the first entry in the list is reported.
        parse_status(&homeworks[0]).map(Some)
    }
}
