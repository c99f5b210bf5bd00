//! Error types shared across the client crate.
//!
//! ERROR HANDLING
//! ==============
//! None of these escape to the user as panics. `MalformedToken` is always
//! recovered at the call site with a safe default; bootstrap and config
//! errors are logged by the start entrypoint.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// A stored or supplied id token that cannot be read as a claims payload.
#[derive(Debug, thiserror::Error)]
pub enum MalformedToken {
    #[error("token has no payload segment")]
    MissingPayload,
    #[error("token payload is not base64url: {0}")]
    Encoding(#[from] base64::DecodeError),
    #[error("token payload is not JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("token payload is not a JSON object")]
    NotAnObject,
}

/// Failure to attach the application to the page.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BootstrapError {
    #[error("no browser window available")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("mount anchor #{id} not found")]
    MissingAnchor { id: String },
    #[error("mount anchor #{id} is not an HTML element")]
    AnchorNotHtml { id: String },
}

/// Invalid build-time configuration value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} must not be empty")]
    Empty { key: String },
    #[error("unknown log level '{0}' (expected error, warn, info, debug or trace)")]
    InvalidLogLevel(String),
    #[error("{key} must be true or false, got '{value}'")]
    InvalidFlag { key: String, value: String },
}
