//! Action Errors
//!
//! Everything that can stop a page action from applying its response.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ActionError {
    /// Server asked the user to log in first
    #[error("{0}")]
    LoginRequired(String),

    /// Server refused the action with a human-readable reason
    #[error("{0}")]
    Rejected(String),

    /// Required form fields are missing; no request was sent
    #[error("{0}")]
    Validation(String),

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Server responded with status {0}")]
    Status(u16),

    #[error("Unexpected response: {0}")]
    Decode(String),

    /// Third-party service answered with an error body
    #[error("Service error: {0}")]
    Service(String),
}

impl From<gloo_net::Error> for ActionError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ActionError::Decode(e.to_string()),
            other => ActionError::Transport(other.to_string()),
        }
    }
}
