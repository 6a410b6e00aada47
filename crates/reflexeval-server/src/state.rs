//! Shared state for the axum application.

use reflexeval_application::SessionService;
use reflexeval_core::Result;
use reflexeval_core::config::AppConfig;
use reflexeval_core::params::ParamsSchema;
use reflexeval_infrastructure::InMemoryPlanProvider;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub session_service: SessionService,
    pub params_schema: Arc<ParamsSchema>,
}

impl AppState {
    pub fn new(session_service: SessionService, params_schema: ParamsSchema) -> Self {
        Self {
            session_service,
            params_schema: Arc::new(params_schema),
        }
    }

    /// Wires the built-in params schema and the configured plans.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let params_schema = ParamsSchema::builtin()?;
        let provider = InMemoryPlanProvider::from_params_schema(&params_schema, &config.plans)?;
        if provider.is_empty() {
            tracing::warn!("[Bootstrap] No plans configured, every session lookup will fail");
        } else {
            tracing::info!("[Bootstrap] Registered {} plan(s)", provider.len());
        }

        let session_service = SessionService::new(Arc::new(provider));
        Ok(Self::new(session_service, params_schema))
    }
}
