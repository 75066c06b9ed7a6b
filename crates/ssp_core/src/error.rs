use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChatError {
    #[error("duplicate message id: {0}")]
    DuplicateMessageId(String),

    #[error("no submission in flight")]
    NotSubmitting,

    #[error("responder error: {0}")]
    Responder(String),

    #[error("config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ChatError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_id_error() {
        let err = ChatError::DuplicateMessageId("user-1".to_string());
        assert_eq!(err.to_string(), "duplicate message id: user-1");
    }

    #[test]
    fn test_not_submitting_error() {
        assert_eq!(ChatError::NotSubmitting.to_string(), "no submission in flight");
    }

    #[test]
    fn test_responder_error() {
        let err = ChatError::Responder("backend unavailable".to_string());
        assert_eq!(err.to_string(), "responder error: backend unavailable");
    }

    #[test]
    fn test_config_error() {
        let err = ChatError::Config("unknown theme: sepia".to_string());
        assert_eq!(err.to_string(), "config error: unknown theme: sepia");
    }
}
