use super::JsError;
use std::{error::Error, fmt::Display};

/// Ways a diet fetch can settle without data.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    InvalidUrl(String),
    Transport(String),
    InvalidResponseType,
    Server(u16),
    EmptyBody,
    Decode(String),
}

impl Error for FetchError {}

impl Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::InvalidUrl(url) => write!(f, "Invalid URL: {}", url),
            FetchError::Transport(description) => write!(f, "Network error: {}", description),
            FetchError::InvalidResponseType => write!(f, "Invalid server response"),
            FetchError::Server(status) => write!(f, "Server error: {}", status),
            FetchError::EmptyBody => write!(f, "No data received"),
            FetchError::Decode(description) => write!(f, "Failed to decode data: {}", description),
        }
    }
}

impl From<JsError> for FetchError {
    fn from(err: JsError) -> Self {
        FetchError::Transport(err.description)
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}
