use serde::{Serialize, Deserialize};
use thiserror::Error;

/// JSON body returned with every non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    #[error("Missing cardId or answer")]
    MissingField,
}

pub type Result<T> = std::result::Result<T, ValidationError>;
