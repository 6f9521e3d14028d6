//! Error types for the configuration and audio boundaries
//!
//! The simulation step itself is infallible.

use thiserror::Error;

/// Errors raised while building a [`MatchConfig`](crate::MatchConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Config document is not valid JSON for the expected shape.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field holds a value the simulation cannot run with.
    #[error("invalid config field `{field}`: {reason}")]
    Invalid {
        /// Offending field name.
        field: &'static str,
        /// Human readable reason.
        reason: String,
    },
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

/// Errors raised by a sound backend. Never fatal to the simulation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AudioError {
    /// The sound file for a cue could not be found.
    #[error("missing sound asset: {0}")]
    MissingAsset(String),

    /// The playback backend refused the request.
    #[error("audio backend error: {0}")]
    Backend(String),
}
