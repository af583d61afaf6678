use std::fmt;

use thiserror::Error;

use crate::transport::TransportError;

/// Which half of the credential pair failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialField {
    LoginName,
    Password,
}

impl fmt::Display for CredentialField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialField::LoginName => f.write_str("login name"),
            CredentialField::Password => f.write_str("login password"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("{field} is empty")]
    EmptyCredential { field: CredentialField },
    #[error("invalid endpoint {endpoint}: {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
    #[error("transport failure: {0}")]
    Transport(#[from] TransportError),
    #[error("response body is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("upstream reported status {status}: {message}")]
    Upstream { status: i64, message: String },
}

impl ClientError {
    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Transport(_))
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, ClientError::Decode(_))
    }
}
