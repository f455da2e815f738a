use thiserror::Error;

/// Error taxonomy for the prediction client.
///
/// `NotFound` is an expected outcome (team outside the provider's data,
/// no upcoming fixture) and is absorbed into partial snapshots rather than
/// shown to the user. The other variants are reportable.
#[derive(Error, Debug)]
pub enum GoalsightError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("remote error: {0}")]
    RemoteLogical(String),
}

impl From<reqwest::Error> for GoalsightError {
    fn from(err: reqwest::Error) -> Self {
        GoalsightError::Transport(err.to_string())
    }
}

// Malformed provider payloads are a transport-class failure, not a panic.
impl From<serde_json::Error> for GoalsightError {
    fn from(err: serde_json::Error) -> Self {
        GoalsightError::Transport(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GoalsightError>;
