//! Plan provider trait.
//!
//! Defines the interface through which the session service resolves plans.

use super::model::PlanContext;
use crate::error::Result;
use async_trait::async_trait;

/// An abstract source of plan contexts.
///
/// This trait decouples the session service from wherever plans live
/// (in-memory seed data, a database, a remote activity platform).
///
/// # Implementation Notes
///
/// Implementations must return `ReflexError::UnknownPlan` for identifiers
/// they do not know, and every context they return must have at least one
/// stage.
#[async_trait]
pub trait PlanProvider: Send + Sync {
    /// Resolves the plan context for `plan_id`.
    ///
    /// # Returns
    ///
    /// - `Ok(PlanContext)`: Plan found
    /// - `Err(ReflexError::UnknownPlan)`: No plan with this identifier
    async fn resolve_plan(&self, plan_id: &str) -> Result<PlanContext>;

    /// Lists the identifiers of every plan this provider can resolve.
    async fn plan_ids(&self) -> Result<Vec<String>>;
}
