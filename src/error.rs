use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("File not found or could not be read: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse hotel inventory JSON: {0}")]
    DeserializationError(#[from] serde_json::Error),

    /// A caller handed a room number that can never identify a room.
    #[error("Invalid room number: {0}")]
    InvalidArgument(String),

    /// A room transition was requested against a room already in the target state.
    #[error("Invalid room state: {0}")]
    InvalidState(String),

    #[error("Hotel lock poisoned by a panicking writer")]
    LockPoisoned,
}

pub type Result<T> = std::result::Result<T, Error>;
