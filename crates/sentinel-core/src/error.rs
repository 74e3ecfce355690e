use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unknown risk level: {0}")]
    UnknownRiskLevel(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
