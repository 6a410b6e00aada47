use super::factory::StandardSessionFactory;
use reflexeval_core::Result;
use reflexeval_core::plan::PlanProvider;
use reflexeval_core::session::{SessionFactory, SessionViewModel};
use std::sync::Arc;

/// Use case for looking up a reflection session.
///
/// `SessionService` resolves a plan through the [`PlanProvider`], asks the
/// [`SessionFactory`] for the session at the requested index and projects it
/// into a [`SessionViewModel`].
///
/// # Thread Safety
///
/// The service holds no mutable state; every call is independent and may run
/// concurrently with any other.
#[derive(Clone)]
pub struct SessionService {
    /// Source of plan contexts
    plan_provider: Arc<dyn PlanProvider>,
    /// Policy for choosing the session variant
    session_factory: Arc<dyn SessionFactory>,
}

impl SessionService {
    /// Creates a service using the [`StandardSessionFactory`].
    ///
    /// # Arguments
    ///
    /// * `plan_provider` - Provider used to resolve plan identifiers
    pub fn new(plan_provider: Arc<dyn PlanProvider>) -> Self {
        Self::with_factory(plan_provider, Arc::new(StandardSessionFactory::new()))
    }

    /// Creates a service with an explicit session factory.
    pub fn with_factory(
        plan_provider: Arc<dyn PlanProvider>,
        session_factory: Arc<dyn SessionFactory>,
    ) -> Self {
        Self {
            plan_provider,
            session_factory,
        }
    }

    /// Returns the view-model of the session at `session_index` in `plan_id`.
    ///
    /// Errors from the plan provider and the factory are returned unchanged.
    pub async fn get_session_view(
        &self,
        plan_id: &str,
        session_index: i64,
    ) -> Result<SessionViewModel> {
        let plan = self.plan_provider.resolve_plan(plan_id).await?;
        let session = self
            .session_factory
            .create(plan_id, session_index, &plan)?;

        tracing::debug!(
            "[SessionService] Created {} session {} of {} for plan '{}'",
            session.kind(),
            session_index,
            plan.stage_count(),
            plan_id
        );

        Ok(SessionViewModel::from(session))
    }

    /// Identifiers of every plan the provider can resolve.
    pub async fn plan_ids(&self) -> Result<Vec<String>> {
        self.plan_provider.plan_ids().await
    }
}
