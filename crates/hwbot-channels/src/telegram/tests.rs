use super::types::{TgResponse, TgSentMessage};
use super::TelegramChannel;

#[test]
fn test_envelope_ok() {
    let raw = r#"{ "ok": true, "result": { "message_id": 7, "date": 1700000000 } }"#;
    let resp: TgResponse<TgSentMessage> = serde_json::from_str(raw).unwrap();
    assert!(resp.ok);
    assert_eq!(resp.result.unwrap().message_id, 7);
    assert!(resp.description.is_none());
}

#[test]
fn test_envelope_error() {
    let raw = r#"{ "ok": false, "description": "Bad Request: chat not found" }"#;
    let resp: TgResponse<TgSentMessage> = serde_json::from_str(raw).unwrap();
    assert!(!resp.ok);
    assert!(resp.result.is_none());
    assert_eq!(resp.description.as_deref(), Some("Bad Request: chat not found"));
}

#[test]
fn test_base_url_embeds_token() {
    let channel = TelegramChannel::new("123:abc", "42");
    assert_eq!(channel.base_url, "https://api.telegram.org/bot123:abc");
    assert_eq!(channel.chat_id, "42");
}
