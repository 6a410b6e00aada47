use reflexeval_core::plan::PlanContext;
use reflexeval_core::session::{ReflectionSession, SessionBase, SessionFactory, SessionKind};
use reflexeval_core::{ReflexError, Result};

/// The standard stage selection policy.
///
/// Index 0 is the initial session, the last index is the final session and
/// every index between is intermediate. A single-stage plan produces an
/// initial session.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardSessionFactory;

impl StandardSessionFactory {
    /// Creates a new StandardSessionFactory.
    pub fn new() -> Self {
        Self
    }
}

impl SessionFactory for StandardSessionFactory {
    fn create(
        &self,
        plan_id: &str,
        session_index: i64,
        plan: &PlanContext,
    ) -> Result<ReflectionSession> {
        if plan.plan_id != plan_id {
            return Err(ReflexError::unknown_plan(plan_id));
        }

        let stage_count = plan.stage_count();
        let (index, stage) = usize::try_from(session_index)
            .ok()
            .and_then(|index| plan.stage(index).map(|stage| (index, stage)))
            .ok_or_else(|| {
                ReflexError::index_out_of_range(plan_id, session_index, stage_count)
            })?;

        let kind = SessionKind::select(index, stage_count);
        Ok(ReflectionSession::build(kind, SessionBase::new(plan, index, stage)))
    }
}
