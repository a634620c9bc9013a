//! Homework review statuses and their human-readable verdicts.

/// Review states the API documents for a homework.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    /// Map an API status code to a known status.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "approved" => Some(Self::Approved),
            "reviewing" => Some(Self::Reviewing),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Verdict text shown to the user for this status.
    pub fn verdict(&self) -> &'static str {
        match self {
            Self::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Self::Reviewing => "Работа взята на проверку ревьюером.",
            Self::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

/// Status line sent when the review queue is empty.
pub const NOTHING_UNDER_REVIEW: &str = "Нет домашних заданий на проверке";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes_map() {
        assert_eq!(
            HomeworkStatus::from_code("approved"),
            Some(HomeworkStatus::Approved)
        );
        assert_eq!(
            HomeworkStatus::from_code("reviewing"),
            Some(HomeworkStatus::Reviewing)
        );
        assert_eq!(
            HomeworkStatus::from_code("rejected"),
            Some(HomeworkStatus::Rejected)
        );
    }

    #[test]
    fn test_unknown_code_is_none() {
        assert_eq!(HomeworkStatus::from_code("unknown"), None);
        assert_eq!(HomeworkStatus::from_code(""), None);
        // Codes are case-sensitive.
        assert_eq!(HomeworkStatus::from_code("Approved"), None);
    }

    #[test]
    fn test_verdicts_are_distinct() {
        let verdicts = [
            HomeworkStatus::Approved.verdict(),
            HomeworkStatus::Reviewing.verdict(),
            HomeworkStatus::Rejected.verdict(),
        ];
        assert_ne!(verdicts[0], verdicts[1]);
        assert_ne!(verdicts[1], verdicts[2]);
        assert_ne!(verdicts[0], verdicts[2]);
    }
}
