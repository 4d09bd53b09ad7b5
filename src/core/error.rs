use thiserror::Error;

#[derive(Error, Debug)]
pub enum BrawlError {
    #[error("Match is already over: {0:?}")]
    MatchOver(crate::battle::Phase),

    #[error("Invalid action: {0}")]
    InvalidAction(String),

    #[error("Invalid difficulty profile: {0}")]
    InvalidProfile(String),

    #[error("Data error: {0}")]
    DataError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BrawlError>;
