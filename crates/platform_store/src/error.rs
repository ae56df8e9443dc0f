//! Shared error type for object-store adapters.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Failures produced by [`ObjectStore`](crate::ObjectStore) implementations.
///
/// Adapters build these at the point of failure and flatten them to strings at the trait
/// boundary; the runtime layer decides how each operation's failure is surfaced.
pub enum StoreError {
    /// The request never reached the remote store (network, CORS, interrupted fetch).
    #[error("object store request failed in transit: {0}")]
    Transport(String),
    /// The remote store answered with a non-success HTTP status.
    #[error("object store rejected the request with status {status}: {message}")]
    Status {
        /// HTTP status code returned by the store.
        status: u16,
        /// Response body, truncated for logging.
        message: String,
    },
    /// The response arrived but could not be decoded into the expected shape.
    #[error("object store response could not be decoded: {0}")]
    Payload(String),
    /// An object with the requested key already exists.
    #[error("object already exists: {0}")]
    AlreadyExists(String),
    /// The operation is not available on this build target or store flavor.
    #[error("object store unavailable: {0}")]
    Unavailable(&'static str),
}

impl StoreError {
    /// Builds a [`StoreError::Status`], truncating the response body to a log-friendly message.
    pub fn status(status: u16, body: &str) -> Self {
        const MAX_MESSAGE_LEN: usize = 240;
        let mut message = body.trim().to_string();
        if message.len() > MAX_MESSAGE_LEN {
            message.truncate(MAX_MESSAGE_LEN);
        }
        Self::Status { status, message }
    }
}
