//! Session factory trait.

use super::model::ReflectionSession;
use crate::error::Result;
use crate::plan::PlanContext;

/// Produces a [`ReflectionSession`] for one stage of a plan.
///
/// Construction is pure: the same `(plan_id, session_index, plan)` always
/// yields a structurally equal session, and the session's kind depends only
/// on where `session_index` falls within `plan`'s stages.
///
/// `session_index` is signed so that negative indices coming from the
/// boundary are rejected here as `IndexOutOfRange` rather than being
/// truncated.
pub trait SessionFactory: Send + Sync {
    /// Creates the session at `session_index`.
    ///
    /// # Errors
    ///
    /// - `ReflexError::UnknownPlan` if `plan` does not belong to `plan_id`
    /// - `ReflexError::IndexOutOfRange` if `session_index` is negative or
    ///   not below the plan's stage count
    fn create(
        &self,
        plan_id: &str,
        session_index: i64,
        plan: &PlanContext,
    ) -> Result<ReflectionSession>;
}
