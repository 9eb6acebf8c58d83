use thiserror::Error;

#[derive(Error, Debug)]
pub enum TextveilError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown transformation: {0}")]
    UnknownTransform(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Parameter out of domain: {0}")]
    ParamDomain(String),
}

pub type Result<T> = std::result::Result<T, TextveilError>;
