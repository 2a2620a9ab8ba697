//! Error types for the zxcvbn-server client.
//!
//! # Design
//! Only the password and endpoint checks originate here. Everything else is
//! a collaborator failure passed through without rewriting: transport errors
//! keep the transport's own error as `source()`, and deserialization errors
//! carry the original `serde_json::Error`.

use thiserror::Error;

/// Errors returned by `ZxcvbnClient` and `ZxcvbnRemote`.
#[derive(Debug, Error)]
pub enum ZxcvbnError {
    /// The password was empty. Raised before any network activity.
    #[error("invalid password: must not be empty")]
    InvalidPassword,

    /// The endpoint is not a usable http(s) URL.
    #[error("invalid endpoint {endpoint:?}: {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    /// The endpoint would send the password in cleartext and the endpoint
    /// policy does not allow it.
    #[error("insecure endpoint {0:?}: password would be sent without TLS")]
    InsecureEndpoint(String),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The transport failed before a response was received.
    #[error("transport failed: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The response body does not match the expected JSON shape.
    #[error("deserialization failed: {0}")]
    Deserialization(#[from] serde_json::Error),
}

impl ZxcvbnError {
    pub(crate) fn transport<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        ZxcvbnError::Transport(Box::new(err))
    }
}
