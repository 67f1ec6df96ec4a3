use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatchmeterError {
    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("snapshot parse error: {0}")]
    SnapshotParse(String),

    #[error("connection not found: {0}")]
    ConnectionNotFound(String),

    #[error("invalid observation: {0}")]
    InvalidObservation(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MatchmeterError>;
