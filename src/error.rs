// src/error.rs

use std::fmt;

/// Error type for the remote comment service.
/// Every failure mode of the three endpoints collapses into one of these
/// variants; callers treat them uniformly as a transient I/O failure.
#[derive(Debug)]
pub enum ServiceError {
    /// Connection refused, DNS failure, timeout -- the request never
    /// produced a response.
    Transport(String),

    /// The service answered with a non-success HTTP status. No
    /// status-specific branching happens anywhere; it is recorded only
    /// for the diagnostic log.
    Status(u16),

    /// The response body was not the JSON shape we expected.
    Decode(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::Transport(msg) => write!(f, "transport error: {}", msg),
            ServiceError::Status(code) => write!(f, "unexpected status: {}", code),
            ServiceError::Decode(msg) => write!(f, "decode error: {}", msg),
        }
    }
}

impl std::error::Error for ServiceError {}

/// Converts `reqwest::Error` into `ServiceError`.
/// Allows using the `?` operator on requests and body decoding.
impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ServiceError::Decode(err.to_string())
        } else {
            ServiceError::Transport(err.to_string())
        }
    }
}
