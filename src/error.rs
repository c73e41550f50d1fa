use thiserror::Error;

/// newpost error types
#[derive(Error, Debug)]
pub enum NewPostError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Relocation error: {0}")]
    Relocation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for newpost operations
pub type Result<T> = std::result::Result<T, NewPostError>;
