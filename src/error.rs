use thiserror::Error;

/// Transport-level failures and response decoding failures
#[derive(Debug, Error)]
pub enum HttpError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("failed to decode gateway response: {0}")]
    Decode(String),
}

/// WhatsGate SDK error types
#[derive(Debug, Error)]
pub enum WhatsgateError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("gateway returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for WhatsgateError {
    fn from(error: reqwest::Error) -> Self {
        WhatsgateError::Http(HttpError::Request(error))
    }
}

impl WhatsgateError {
    /// HTTP status returned by the gateway, if the call got that far.
    pub fn status(&self) -> Option<u16> {
        match self {
            WhatsgateError::Status { status, .. } => Some(*status),
            WhatsgateError::Http(HttpError::Request(e)) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
