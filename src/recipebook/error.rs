use crate::model::RecordId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecipeError {
    #[error("{0}")]
    Validation(&'static str),

    #[error("Recipe not found: {0}")]
    RecordNotFound(RecordId),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),

    /// A submit the engine turned down; carries the user-facing message.
    #[error("{0}")]
    Rejected(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, RecipeError>;
