//! Opt-in interpretation of the upstream `status`/`msg` envelope.
//!
//! The client itself returns every decoded body untouched, including bodies
//! that report an application failure. Callers that want failures as errors
//! chain [`ResponseExt::ensure_status`] onto a call.

use serde_json::Value;

use crate::error::ClientError;

pub const STATUS_FIELD: &str = "status";
pub const MESSAGE_FIELD: &str = "msg";

/// Reported when a body carries no usable `status` field.
pub const MISSING_STATUS: i64 = -1;

pub trait ResponseExt: Sized {
    /// The `status` field as an integer; numeric strings are accepted.
    fn upstream_status(&self) -> Option<i64>;

    fn upstream_message(&self) -> Option<&str>;

    /// Pass the body through when `status` equals `expected`, otherwise turn it
    /// into [`ClientError::Upstream`].
    fn ensure_status(self, expected: i64) -> Result<Self, ClientError>;
}

impl ResponseExt for Value {
    fn upstream_status(&self) -> Option<i64> {
        match self.get(STATUS_FIELD)? {
            Value::Number(number) => number.as_i64(),
            Value::String(text) => text.trim().parse().ok(),
            _ => None,
        }
    }

    fn upstream_message(&self) -> Option<&str> {
        self.get(MESSAGE_FIELD).and_then(Value::as_str)
    }

    fn ensure_status(self, expected: i64) -> Result<Self, ClientError> {
        match self.upstream_status() {
            Some(status) if status == expected => Ok(self),
            Some(status) => Err(ClientError::Upstream {
                status,
                message: self.upstream_message().unwrap_or_default().to_string(),
            }),
            None => Err(ClientError::Upstream {
                status: MISSING_STATUS,
                message: "missing status".to_string(),
            }),
        }
    }
}
