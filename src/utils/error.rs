use thiserror::Error;

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Record {id} already exists")]
    DuplicateId { id: i64 },

    #[error("Directory is full: at most {limit} records are allowed")]
    CapacityExceeded { limit: usize },
}

pub type Result<T> = std::result::Result<T, DirectoryError>;
