//! In-memory plan provider.
//!
//! Plans are built once at startup from the params schema and the configured
//! plan list, then served read-only.

use async_trait::async_trait;
use reflexeval_core::config::PlanEntry;
use reflexeval_core::params::ParamsSchema;
use reflexeval_core::plan::{PlanContext, PlanProvider};
use reflexeval_core::{ReflexError, Result};
use std::collections::HashMap;

/// A [`PlanProvider`] backed by a map of prebuilt plan contexts.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPlanProvider {
    plans: HashMap<String, PlanContext>,
}

impl InMemoryPlanProvider {
    /// Creates an empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds one plan per entry from the schema's defaults.
    ///
    /// # Errors
    ///
    /// Returns `ReflexError::Config` if an entry's id is blank or duplicated,
    /// or if the schema cannot produce a valid plan.
    pub fn from_params_schema(schema: &ParamsSchema, entries: &[PlanEntry]) -> Result<Self> {
        let mut provider = Self::new();
        for entry in entries {
            if entry.id.trim().is_empty() {
                return Err(ReflexError::config("plan id must not be empty"));
            }
            if provider.plans.contains_key(&entry.id) {
                return Err(ReflexError::config(format!(
                    "plan '{}' is configured more than once",
                    entry.id
                )));
            }
            let plan = PlanContext::from_params_schema(&entry.id, schema, entry.sessions_number)?;
            tracing::debug!(
                "[InMemoryPlanProvider] Registered plan '{}' with {} stages",
                plan.plan_id,
                plan.stage_count()
            );
            provider.insert(plan);
        }
        Ok(provider)
    }

    /// Adds a plan, replacing any plan with the same id.
    pub fn insert(&mut self, plan: PlanContext) {
        self.plans.insert(plan.plan_id.clone(), plan);
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }
}

#[async_trait]
impl PlanProvider for InMemoryPlanProvider {
    async fn resolve_plan(&self, plan_id: &str) -> Result<PlanContext> {
        self.plans
            .get(plan_id)
            .cloned()
            .ok_or_else(|| ReflexError::unknown_plan(plan_id))
    }

    async fn plan_ids(&self) -> Result<Vec<String>> {
        let mut ids: Vec<String> = self.plans.keys().cloned().collect();
        ids.sort();
        Ok(ids)
    }
}
