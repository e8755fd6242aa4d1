use thiserror::Error;

/// Custom error types for the rentdesk system
#[derive(Debug, Error)]
pub enum RentdeskError {
    #[error("store is full: all {capacity} slots are taken")]
    CapacityExceeded { capacity: usize },

    #[error("no record with id {0}")]
    RecordNotFound(u32),

    #[error("console input closed before a value was read")]
    InputClosed,

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type specific to rentdesk operations
pub type RentdeskResult<T> = Result<T, RentdeskError>;
