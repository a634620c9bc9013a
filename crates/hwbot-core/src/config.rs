use std::env;

const ENV_PRACTICUM_TOKEN: &str = "YANDEX_TOKEN";
const ENV_TELEGRAM_TOKEN: &str = "TELEGRAM_TOKEN";
const ENV_TELEGRAM_CHAT_ID: &str = "TELEGRAM_CHAT_ID";

/// Runtime credentials, read once at startup and passed into components.
#[derive(Debug, Clone)]
pub struct Config {
    /// OAuth token for the review API.
    pub practicum_token: String,
    /// Telegram Bot API token.
    pub telegram_token: String,
    /// Chat that receives every notification.
    pub telegram_chat_id: String,
}

impl Config {
    /// Read all credentials from the environment. Missing variables become
    /// empty strings; `check_tokens` decides whether that is fatal.
    pub fn from_env() -> Self {
        Self {
            practicum_token: env::var(ENV_PRACTICUM_TOKEN).unwrap_or_default(),
            telegram_token: env::var(ENV_TELEGRAM_TOKEN).unwrap_or_default(),
            telegram_chat_id: env::var(ENV_TELEGRAM_CHAT_ID).unwrap_or_default(),
        }
    }

    /// True only when every credential is present. A false result is a
    /// startup precondition failure, not a transient condition.
    pub fn check_tokens(&self) -> bool {
        !self.practicum_token.is_empty()
            && !self.telegram_token.is_empty()
            && !self.telegram_chat_id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full() -> Config {
        Config {
            practicum_token: "practicum".into(),
            telegram_token: "telegram".into(),
            telegram_chat_id: "42".into(),
        }
    }

    #[test]
    fn test_all_tokens_present() {
        assert!(full().check_tokens());
    }

    #[test]
    fn test_any_missing_token_fails() {
        let mut cfg = full();
        cfg.practicum_token.clear();
        assert!(!cfg.check_tokens());

        let mut cfg = full();
        cfg.telegram_token.clear();
        assert!(!cfg.check_tokens());

        let mut cfg = full();
        cfg.telegram_chat_id.clear();
        assert!(!cfg.check_tokens());
    }
}
