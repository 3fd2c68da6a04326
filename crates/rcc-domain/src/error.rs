//! Error handling types
//!
//! One enum for the whole workspace. Store failures (`Cache`) are absorbed by
//! the text processing use case; `Analysis` is the only variant a caller of
//! that use case can observe.

use thiserror::Error;

/// Boxed cause attached to an error
pub type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Recruitment crew cache error
#[derive(Error, Debug)]
pub enum Error {
    /// Filesystem or socket I/O failed
    #[error("I/O error: {source}")]
    Io {
        /// Underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// JSON encoding or decoding failed
    #[error("JSON parsing error: {source}")]
    Json {
        /// Underlying serde error
        #[from]
        source: serde_json::Error,
    },

    /// Configuration could not be loaded or failed validation
    #[error("Configuration error: {message}")]
    Configuration {
        /// What was wrong
        message: String,
        /// Cause, when one exists
        #[source]
        source: Option<BoxedSource>,
    },

    /// Result store command failed
    #[error("Cache error: {message}")]
    Cache {
        /// What failed
        message: String,
        /// Cause, when one exists
        #[source]
        source: Option<BoxedSource>,
    },

    /// The analysis computation failed
    #[error("Analysis error: {message}")]
    Analysis {
        /// What failed
        message: String,
    },

    /// Logging, wiring or other runtime plumbing failed
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// What failed
        message: String,
        /// Cause, when one exists
        #[source]
        source: Option<BoxedSource>,
    },
}

fn boxed<E>(source: E) -> Option<BoxedSource>
where
    E: std::error::Error + Send + Sync + 'static,
{
    Some(Box::new(source))
}

impl Error {
    /// `Analysis` from a message
    pub fn analysis(message: impl Into<String>) -> Self {
        Self::Analysis {
            message: message.into(),
        }
    }

    /// `Configuration` without a cause
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// `Configuration` wrapping `source`
    pub fn configuration_with_source<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Configuration {
            message: message.into(),
            source: boxed(source),
        }
    }

    /// `Cache` without a cause
    pub fn cache(message: impl Into<String>) -> Self {
        Self::Cache {
            message: message.into(),
            source: None,
        }
    }

    /// `Cache` wrapping `source`
    pub fn cache_with_source<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Cache {
            message: message.into(),
            source: boxed(source),
        }
    }

    /// `Infrastructure` wrapping `source`
    pub fn infrastructure_with_source<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Infrastructure {
            message: message.into(),
            source: boxed(source),
        }
    }
}
