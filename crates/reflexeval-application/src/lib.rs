//! Application layer for ReflexEval.
//!
//! This crate provides the use case implementations that coordinate the plan
//! provider and the session factory.

pub mod session;

pub use session::{SessionService, StandardSessionFactory};
