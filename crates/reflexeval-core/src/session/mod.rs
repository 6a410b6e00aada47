//! Session domain module.
//!
//! This module contains the reflection session model, the factory trait that
//! produces sessions, and their serializable view-model.
//!
//! # Module Structure
//!
//! - `kind`: Session kind and stage selection (`SessionKind`)
//! - `metadata`: Primitive metadata values (`Metadata`, `MetadataValue`)
//! - `model`: Session variants (`ReflectionSession` and its three stages)
//! - `factory`: Factory trait (`SessionFactory`)
//! - `view_model`: Serializable projection (`SessionViewModel`)

mod factory;
mod kind;
mod metadata;
mod model;
mod view_model;

// Re-export public API
pub use factory::SessionFactory;
pub use kind::SessionKind;
pub use metadata::{Metadata, MetadataValue};
pub use model::{
    FinalReflectionSession, InitialReflectionSession, IntermediateReflectionSession,
    ReflectionSession, SessionBase,
};
pub use view_model::SessionViewModel;
