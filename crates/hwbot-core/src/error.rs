use thiserror::Error;

/// Top-level error type for the bot.
///
/// Display texts for API contract violations are user-facing: the watcher
/// embeds them verbatim in failure notifications, so they stay in the
/// product language.
#[derive(Debug, Error)]
pub enum BotError {
    /// The review endpoint answered with a non-200 status.
    #[error("Эндпоинт {endpoint} недоступен. Код ответа API: {status}")]
    Endpoint { endpoint: String, status: u16 },

    /// The API body is not a JSON object.
    #[error("Ответ не является словарем")]
    NotAnObject,

    /// A required key is absent from the API body.
    #[error("Ответ не содержит ключ {0}")]
    MissingKey(&'static str),

    /// `homeworks` is present but is not an array.
    #[error("homeworks не возвращается в виде списка")]
    HomeworksNotAList,

    /// The homework carries a status outside the documented set.
    #[error("Недокументированный статус домашней работы в ответе API")]
    UnknownStatus,

    /// Error from a messaging channel. Logged only, never user-facing.
    #[error("channel error: {0}")]
    Channel(String),
}
