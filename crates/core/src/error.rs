use thiserror::Error;

#[derive(Error, Debug)]
pub enum MapshelfError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Asset index unavailable: {0}")]
    IndexUnavailable(String),
    #[error("Settings error: {0}")]
    Settings(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, MapshelfError>;
