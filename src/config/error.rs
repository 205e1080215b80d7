use thiserror::Error;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
