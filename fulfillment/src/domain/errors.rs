use std::fmt;

// Domain-level errors for conversation turns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversationError {
    UnknownHandler(String),
}

impl fmt::Display for ConversationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversationError::UnknownHandler(name) => write!(f, "unknown handler {name:?}"),
        }
    }
}

impl std::error::Error for ConversationError {}
