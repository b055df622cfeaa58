use thiserror::Error;

pub type Result<T> = std::result::Result<T, MimeError>;

#[derive(Debug, Error)]
pub enum MimeError {
    #[error("unsupported mime type: {0}")]
    UnsupportedMimeType(String),

    #[error("unsupported extension: {0}")]
    UnsupportedExtension(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
