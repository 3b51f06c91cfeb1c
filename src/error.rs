//! Error Types
//!
//! Failures surfaced by the timer store, the edit flow and storage backends.

/// Result alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Error type for timer store and edit operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("timer index {index} out of range (have {len} timers)")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("no timer edit in progress")]
    NoActiveEdit,
    #[error("storage error: {0}")]
    Storage(String),
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
