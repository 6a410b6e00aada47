//! Plan domain module.
//!
//! # Module Structure
//!
//! - `model`: Plan context, stage descriptors and shared settings
//! - `provider`: Trait for resolving plans by identifier

mod model;
mod provider;

pub use model::{PlanContext, PlanSettings, StageDescriptor};
pub use provider::PlanProvider;
