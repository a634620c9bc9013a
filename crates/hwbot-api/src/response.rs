//! Shape validation and status formatting for review API answers.
//!
//! Failures here are contract violations on the upstream API, not expected
//! runtime conditions; they propagate to the watcher's failure branch.

use hwbot_core::{error::BotError, status::HomeworkStatus};
use serde_json::Value;
use tracing::debug;

/// Validate the overall shape of an API answer and extract the homework list.
///
/// The list comes back unchanged and may be empty.
pub fn check_response(response: &Value) -> Result<&[Value], BotError> {
    let map = response.as_object().ok_or(BotError::NotAnObject)?;
    let homeworks = map
        .get("homeworks")
        .ok_or(BotError::MissingKey("homeworks"))?;
    if !map.contains_key("current_date") {
        return Err(BotError::MissingKey("current_date"));
    }
    homeworks
        .as_array()
        .map(Vec::as_slice)
        .ok_or(BotError::HomeworksNotAList)
}

/// Format a single homework entry into the user-facing status line.
pub fn parse_status(homework: &Value) -> Result<String, BotError> {
    let name = homework
        .get("homework_name")
        .and_then(Value::as_str)
        .ok_or(BotError::MissingKey("homework_name"))?;
    debug!("homework name: {name}");

    let code = homework
        .get("status")
        .and_then(Value::as_str)
        .unwrap_or_default();
    debug!("homework status: {code}");

    let status = HomeworkStatus::from_code(code).ok_or(BotError::UnknownStatus)?;
    Ok(format!(
        "Изменился статус проверки работы \"{name}\". {}",
        status.verdict()
    ))
}
