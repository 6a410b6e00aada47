//! Error types for the ReflexEval activity provider.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A shared error type for every ReflexEval crate.
///
/// The first three variants are the request-level taxonomy surfaced to API
/// callers; the remaining ones cover configuration and I/O at startup.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ReflexError {
    /// The plan identifier is not known to the plan provider
    #[error("Unknown plan: '{plan_id}'")]
    UnknownPlan { plan_id: String },

    /// The requested session index is outside the plan's stages
    #[error("Session index {index} is out of range for plan '{plan_id}' ({stage_count} stages)")]
    IndexOutOfRange {
        plan_id: String,
        index: i64,
        stage_count: usize,
    },

    /// Malformed input rejected at the boundary
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error (params schema, config file)
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON"
        message: String,
    },

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Discriminant of [`ReflexError`], serialized as the `kind` of an error body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    UnknownPlan,
    IndexOutOfRange,
    InvalidInput,
    Config,
    Io,
    Serialization,
    Internal,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UnknownPlan => "UnknownPlan",
            Self::IndexOutOfRange => "IndexOutOfRange",
            Self::InvalidInput => "InvalidInput",
            Self::Config => "Config",
            Self::Io => "Io",
            Self::Serialization => "Serialization",
            Self::Internal => "Internal",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ReflexError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates an UnknownPlan error
    pub fn unknown_plan(plan_id: impl Into<String>) -> Self {
        Self::UnknownPlan {
            plan_id: plan_id.into(),
        }
    }

    /// Creates an IndexOutOfRange error
    pub fn index_out_of_range(plan_id: impl Into<String>, index: i64, stage_count: usize) -> Self {
        Self::IndexOutOfRange {
            plan_id: plan_id.into(),
            index,
            stage_count,
        }
    }

    /// Creates an InvalidInput error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Returns the discriminant of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownPlan { .. } => ErrorKind::UnknownPlan,
            Self::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
            Self::Config(_) => ErrorKind::Config,
            Self::Io { .. } => ErrorKind::Io,
            Self::Serialization { .. } => ErrorKind::Serialization,
            Self::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Check if this is an UnknownPlan error
    pub fn is_unknown_plan(&self) -> bool {
        matches!(self, Self::UnknownPlan { .. })
    }

    /// Check if this is an IndexOutOfRange error
    pub fn is_index_out_of_range(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }

    /// Check if this is an InvalidInput error
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    /// Check if this is a config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Returns true for errors caused by the caller's request rather than the
    /// server's own state.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::UnknownPlan | ErrorKind::IndexOutOfRange | ErrorKind::InvalidInput
        )
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for ReflexError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for ReflexError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for ReflexError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, ReflexError>`.
pub type Result<T> = std::result::Result<T, ReflexError>;
