//! Domain layer for ReflexEval.
//!
//! Holds the reflection session model, the plan model, the params schema and
//! the traits the application layer is written against.

pub mod config;
pub mod error;
pub mod params;
pub mod plan;
pub mod session;

// Re-export common error type
pub use error::{ErrorKind, ReflexError, Result};
