use thiserror::Error;

use crate::models::Field;

#[derive(Debug, Error)]
pub enum BookError {
    #[error("Please fill out the {0} field.")]
    Validation(Field),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("unknown field `{0}`")]
    UnknownField(String),
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("{0}")]
    Request(#[from] reqwest::Error),

    #[error("Request failed with status code {status}")]
    Status { status: u16, body: String },

    #[error("Can't decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl TransportError {
    /// Response body when the server sent one, the error text otherwise.
    pub fn detail(&self) -> String {
        match self {
            TransportError::Status { body, .. } if !body.trim().is_empty() => body.clone(),
            other => other.to_string(),
        }
    }
}

impl BookError {
    pub fn detail(&self) -> String {
        match self {
            BookError::Transport(err) => err.detail(),
            other => other.to_string(),
        }
    }
}
