//! Transport-level error type for vault API calls.
//!
//! ERROR HANDLING
//! ==============
//! The transport layer only classifies what happened. Turning an error into a
//! user-facing sentence is the state layer's job, since the same failure reads
//! differently for login, save, or delete.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// HTTP 401. On dashboard calls this means the session is gone.
    #[error("unauthorized")]
    Unauthorized { message: Option<String> },

    /// Any other non-2xx status, with the server's `error` field if present.
    #[error("request failed: status {status}")]
    Status { status: u16, message: Option<String> },

    #[error("network error: {0}")]
    Network(String),

    #[error("response decode failed: {0}")]
    Decode(String),

    #[error("request timed out")]
    Timeout,
}

impl ApiError {
    /// Build the error for a non-2xx status.
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        let message = message.filter(|m| !m.trim().is_empty());
        if status == 401 {
            Self::Unauthorized { message }
        } else {
            Self::Status { status, message }
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// The server-reported message, if the server answered at all.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Unauthorized { message } | Self::Status { message, .. } => message.as_deref(),
            Self::Network(_) | Self::Decode(_) | Self::Timeout => None,
        }
    }

    /// True when no usable HTTP response came back.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Decode(_) | Self::Timeout)
    }
}
