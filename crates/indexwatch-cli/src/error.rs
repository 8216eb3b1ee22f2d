use indexwatch_core::{FetchError, SessionError, StoreError, ValidationError};
use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("command error: {0}")]
    Command(String),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<SessionError> for CliError {
    fn from(error: SessionError) -> Self {
        match error {
            SessionError::Validation(error) => Self::Validation(error),
            SessionError::Fetch(error) => Self::Fetch(error),
            SessionError::Store(error) => Self::Store(error),
        }
    }
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => 2,
            Self::Command(_) => 2,
            Self::Fetch(_) => 3,
            Self::Store(_) => 4,
            Self::Serialization(_) => 4,
            Self::Io(_) => 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_errors_keep_their_category() {
        let fetch = CliError::from(SessionError::Fetch(FetchError::Status {
            url: String::from("https://archive.test/ind_nifty50list.csv"),
            status: 404,
        }));
        assert_eq!(fetch.exit_code(), 3);

        let validation = CliError::from(SessionError::Validation(ValidationError::EmptySymbol));
        assert_eq!(validation.exit_code(), 2);
        assert_eq!(validation.to_string(), "symbol cannot be empty");
    }
}
