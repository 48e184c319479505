//! Shared error type across teambynumbers crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed request body.
    BadRequest,
    /// Entry rejected by record validation.
    ValidationFailed,
    /// Backing file could not be read or written.
    Storage,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in logs and test assertions.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::ValidationFailed => "VALIDATION_FAILED",
            ClientCode::Storage => "STORAGE",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, TbnError>;

/// A rejected append. Rules are checked in declaration order and the first
/// violation wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing team name")]
    TeamEmpty,
    #[error("team name must be at most 10 characters long")]
    TeamTooLong,
    #[error("team must have at least one participating member")]
    MemberCount,
    #[error("missing cycle time")]
    CycleTime,
    #[error("missing lead time")]
    LeadTime,
    #[error("bugs reported can't be under 0")]
    BugsReported,
    #[error("squashed bugs can't be under 0")]
    BugsSquashed,
    #[error("fields may not contain commas or line breaks")]
    FieldSeparator,
    #[error("value score must be a finite number")]
    ValueScore,
}

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum TbnError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl TbnError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            TbnError::Validation(_) => ClientCode::ValidationFailed,
            TbnError::Io(_) => ClientCode::Storage,
            TbnError::BadRequest(_) => ClientCode::BadRequest,
            TbnError::Internal(_) => ClientCode::Internal,
        }
    }
}
