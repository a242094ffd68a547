//! Error type for record API operations.

/// Error produced by [`Client`](crate::Client) operations.
///
/// The taxonomy mirrors the three ways a call can fail: the request never
/// completed, the server answered with the wrong status code, or the success
/// body could not be decoded. None of these are retried.
#[derive(Debug, Clone)]
pub enum ClientError {
    /// Transport-level failure: connection, DNS resolution, TLS, or reading
    /// the response body.
    Request {
        /// Error details from the HTTP stack.
        detail: String,
    },

    /// The server answered with a status code other than the operation's
    /// expected success code.
    UnexpectedStatus {
        /// HTTP status code observed.
        status: u16,
        /// Server-supplied error message, when the response body carried one.
        message: Option<String>,
    },

    /// The success response body was not valid JSON for the expected shape.
    Decode {
        /// Details about the decode failure.
        detail: String,
    },
}

impl ClientError {
    /// HTTP status code, for [`UnexpectedStatus`](Self::UnexpectedStatus) errors.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the server reported the target as missing (HTTP 404).
    ///
    /// Lets callers distinguish "removed externally" from every other
    /// failure mode, e.g. to drop a record from tracked state.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Request { detail } => {
                write!(f, "error while executing the request: {detail}")
            }
            Self::UnexpectedStatus { status, message } => {
                if let Some(msg) = message {
                    write!(f, "unexpected status code: {status}: {msg}")
                } else {
                    write!(f, "unexpected status code: {status}")
                }
            }
            Self::Decode { detail } => {
                write!(f, "unable to decode the response body: {detail}")
            }
        }
    }
}

impl std::error::Error for ClientError {}

/// Convenience type alias for `Result<T, ClientError>`.
pub type Result<T> = std::result::Result<T, ClientError>;
