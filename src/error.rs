//! Unified error types for the prompt generator.

use strum::{Display, IntoStaticStr};
use thiserror::Error;

/// Top-level error type for the binary and server.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Configuration is present but unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure kinds of a single prompt-generation call.
///
/// Per-market parse failures are not represented here; those markets are
/// skipped and logged.
#[derive(Error, Debug)]
pub enum PromptError {
    /// The event URL could not be turned into a slug.
    #[error("invalid event url {input:?}: {reason}")]
    InvalidInput {
        /// The URL as supplied by the caller.
        input: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Transport failure, non-2xx status, or unreadable body.
    #[error("failed to fetch event data: {0}")]
    Network(#[from] reqwest::Error),

    /// Response body was not valid JSON or not shaped like an event.
    #[error("failed to decode event data: {0}")]
    Decode(#[from] serde_json::Error),

    /// The API returned no event for this slug.
    #[error("no event found for slug {slug:?}")]
    NotFound {
        /// The slug that was looked up.
        slug: String,
    },
}

/// Coarse classification of a [`PromptError`], used for metrics labels and
/// HTTP status mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    /// Malformed URL.
    InvalidInput,
    /// Transport failure.
    Network,
    /// Invalid JSON.
    Decode,
    /// Empty or absent event.
    NotFound,
}

impl PromptError {
    /// Build an `InvalidInput` error.
    pub fn invalid_input(input: &str, reason: impl Into<String>) -> Self {
        PromptError::InvalidInput {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    /// Build a `NotFound` error.
    pub fn not_found(slug: &str) -> Self {
        PromptError::NotFound {
            slug: slug.to_string(),
        }
    }

    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            PromptError::InvalidInput { .. } => ErrorKind::InvalidInput,
            PromptError::Network(_) => ErrorKind::Network,
            PromptError::Decode(_) => ErrorKind::Decode,
            PromptError::NotFound { .. } => ErrorKind::NotFound,
        }
    }
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, AppError>;
