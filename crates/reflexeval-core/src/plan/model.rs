//! Plan domain model.
//!
//! A plan is the ordered sequence of reflection stages of one activity
//! instance, together with the settings every stage shares.

use crate::error::{ReflexError, Result};
use crate::params::{ParamsSchema, names};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const DEFAULT_SESSIONS_NUMBER: i64 = 3;
/// Upper bound on `sessions_number` when the schema declares no `max`.
pub const MAX_SESSIONS_NUMBER: i64 = 1000;
const DEFAULT_REFLECTION_INTERVAL_DAYS: i64 = 7;
/// 2099-12-31T23:59:00Z
const DEFAULT_DEADLINE_TIMESTAMP: i64 = 4_102_444_740;
const DEFAULT_LOCALE: &str = "pt-PT";

/// One position within a plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageDescriptor {
    /// Zero-based position within the plan
    pub position: usize,
    /// Display label ("Sessão 1", "Sessão 2", ...)
    pub label: String,
    /// Days after the activity start at which this stage opens
    pub opens_after_days: u32,
}

/// Settings shared by every stage of a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanSettings {
    pub reflection_interval_days: u32,
    pub deadline_utc: DateTime<Utc>,
    pub allow_revisions: bool,
    pub comment_enabled: bool,
    pub locale: String,
    /// Questions asked in every session
    pub reflection_prompts: Vec<String>,
    /// Criterion name to weight
    pub criteria_weights: BTreeMap<String, f64>,
}

impl Default for PlanSettings {
    fn default() -> Self {
        Self {
            reflection_interval_days: DEFAULT_REFLECTION_INTERVAL_DAYS as u32,
            deadline_utc: DateTime::<Utc>::from_timestamp(DEFAULT_DEADLINE_TIMESTAMP, 0)
                .unwrap_or_default(),
            allow_revisions: true,
            comment_enabled: true,
            locale: DEFAULT_LOCALE.to_string(),
            reflection_prompts: Vec::new(),
            criteria_weights: BTreeMap::new(),
        }
    }
}

impl PlanSettings {
    /// Deadline formatted as RFC 3339 with whole seconds.
    pub fn deadline_rfc3339(&self) -> String {
        self.deadline_utc.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

/// Everything the plan provider resolved for one plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanContext {
    pub plan_id: String,
    pub stages: Vec<StageDescriptor>,
    pub settings: PlanSettings,
}

impl PlanContext {
    /// Creates a plan of `stage_count` evenly spaced stages.
    pub fn new(plan_id: impl Into<String>, stage_count: usize, settings: PlanSettings) -> Self {
        let interval = settings.reflection_interval_days;
        let stages = (0..stage_count)
            .map(|position| StageDescriptor {
                position,
                label: format!("Sessão {}", position + 1),
                opens_after_days: u32::try_from(position)
                    .map_or(u32::MAX, |position| interval.saturating_mul(position)),
            })
            .collect();

        Self {
            plan_id: plan_id.into(),
            stages,
            settings,
        }
    }

    /// Builds a plan from the defaults declared in a params schema.
    ///
    /// `sessions_override` replaces the schema's `sessions_number` default and
    /// must satisfy the same bounds.
    pub fn from_params_schema(
        plan_id: impl Into<String>,
        schema: &ParamsSchema,
        sessions_override: Option<u32>,
    ) -> Result<Self> {
        let plan_id = plan_id.into();

        let sessions_param = schema.integer(names::SESSIONS_NUMBER)?;
        let sessions_number = match (sessions_override, sessions_param) {
            (Some(value), Some(param)) if !param.contains(i64::from(value)) => {
                return Err(ReflexError::config(format!(
                    "plan '{}': sessions_number {} is outside the schema bounds",
                    plan_id, value
                )));
            }
            (Some(value), _) => i64::from(value),
            (None, Some(param)) => param.default,
            (None, None) => DEFAULT_SESSIONS_NUMBER,
        };
        if !(1..=MAX_SESSIONS_NUMBER).contains(&sessions_number) {
            return Err(ReflexError::config(format!(
                "plan '{}': sessions_number must be between 1 and {}, got {}",
                plan_id, MAX_SESSIONS_NUMBER, sessions_number
            )));
        }
        let stage_count = usize::try_from(sessions_number).map_err(|_| {
            ReflexError::config(format!(
                "plan '{}': sessions_number {} does not fit this platform",
                plan_id, sessions_number
            ))
        })?;

        let interval = schema
            .integer(names::REFLECTION_INTERVAL_DAYS)?
            .map_or(DEFAULT_REFLECTION_INTERVAL_DAYS, |p| p.default);
        let reflection_interval_days = u32::try_from(interval).map_err(|_| {
            ReflexError::config(format!(
                "reflection_interval_days must be non-negative, got {}",
                interval
            ))
        })?;

        let mut settings = PlanSettings {
            reflection_interval_days,
            ..PlanSettings::default()
        };

        if let Some(deadline) = schema.text(names::DEADLINE_UTC)? {
            settings.deadline_utc = DateTime::parse_from_rfc3339(deadline)
                .map_err(|e| {
                    ReflexError::config(format!(
                        "deadline_utc '{}' is not RFC 3339: {}",
                        deadline, e
                    ))
                })?
                .with_timezone(&Utc);
        }
        if let Some(allow) = schema.boolean(names::ALLOW_REVISIONS)? {
            settings.allow_revisions = allow;
        }
        if let Some(enabled) = schema.boolean(names::COMMENT_ENABLED)? {
            settings.comment_enabled = enabled;
        }
        if let Some(locale) = schema.text(names::LOCALE)? {
            settings.locale = locale.to_string();
        }
        if let Some(prompts) = schema.string_list(names::REFLECTION_PROMPTS)? {
            settings.reflection_prompts = prompts.to_vec();
        }
        settings.criteria_weights = schema
            .criteria()?
            .iter()
            .map(|c| (c.name.clone(), c.weight))
            .collect();

        Ok(Self::new(plan_id, stage_count, settings))
    }

    /// Number of stages in the plan.
    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    pub fn stage(&self, position: usize) -> Option<&StageDescriptor> {
        self.stages.get(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema_with(params: &str) -> ParamsSchema {
        ParamsSchema::from_json(&format!(
            concat!(
                r#"{{"schema_version": "1.0", "activity_type": "reflexeval_ap", "#,
                r#""name": "t", "params": [{}]}}"#
            ),
            params
        ))
        .unwrap()
    }

    #[test]
    fn test_new_builds_spaced_stages() {
        let settings = PlanSettings {
            reflection_interval_days: 5,
            ..PlanSettings::default()
        };
        let plan = PlanContext::new("p1", 3, settings);

        assert_eq!(plan.stage_count(), 3);
        assert_eq!(plan.stages[0].label, "Sessão 1");
        assert_eq!(plan.stages[2].label, "Sessão 3");
        assert_eq!(plan.stages[2].opens_after_days, 10);
        assert!(plan.stage(3).is_none());
    }

    #[test]
    fn test_from_builtin_schema() {
        let schema = ParamsSchema::builtin().unwrap();
        let plan = PlanContext::from_params_schema("demo-plan", &schema, None).unwrap();

        assert_eq!(plan.plan_id, "demo-plan");
        assert_eq!(plan.stage_count(), 3);
        assert_eq!(plan.settings.reflection_interval_days, 7);
        assert_eq!(plan.settings.deadline_rfc3339(), "2025-12-20T23:59:00Z");
        assert_eq!(plan.settings.locale, "pt-PT");
        assert_eq!(plan.settings.reflection_prompts.len(), 3);
        assert_eq!(plan.settings.criteria_weights.get("dominio"), Some(&0.34));
    }

    #[test]
    fn test_empty_schema_uses_fallbacks() {
        let schema = schema_with("");
        let plan = PlanContext::from_params_schema("p1", &schema, None).unwrap();

        assert_eq!(plan.stage_count(), 3);
        assert_eq!(plan.settings.reflection_interval_days, 7);
        assert_eq!(plan.settings.deadline_rfc3339(), "2099-12-31T23:59:00Z");
        assert!(plan.settings.reflection_prompts.is_empty());
        assert!(plan.settings.criteria_weights.is_empty());
    }

    #[test]
    fn test_sessions_override() {
        let schema = ParamsSchema::builtin().unwrap();
        let plan = PlanContext::from_params_schema("p1", &schema, Some(5)).unwrap();
        assert_eq!(plan.stage_count(), 5);

        let err = PlanContext::from_params_schema("p1", &schema, Some(11)).unwrap_err();
        assert!(err.is_config());
        let err = PlanContext::from_params_schema("p1", &schema, Some(0)).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_zero_sessions_without_bounds_is_rejected() {
        let schema = schema_with(
            r#"{"name": "sessions_number", "type": "integer", "label": "n", "default": 0}"#,
        );
        let err = PlanContext::from_params_schema("p1", &schema, None).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_huge_sessions_without_bounds_is_rejected() {
        let schema = schema_with(
            r#"{"name": "sessions_number", "type": "integer", "label": "n",
                "default": 4000000000}"#,
        );
        let err = PlanContext::from_params_schema("p1", &schema, None).unwrap_err();
        assert!(err.is_config());
        assert!(err.to_string().contains("4000000000"));

        let schema = schema_with(
            r#"{"name": "sessions_number", "type": "integer", "label": "n", "default": 1000}"#,
        );
        let plan = PlanContext::from_params_schema("p1", &schema, None).unwrap();
        assert_eq!(plan.stage_count(), MAX_SESSIONS_NUMBER as usize);
        assert_eq!(plan.stages[999].opens_after_days, 999 * 7);
    }

    #[test]
    fn test_opening_offsets_saturate() {
        let settings = PlanSettings {
            reflection_interval_days: 1 << 31,
            ..PlanSettings::default()
        };
        let plan = PlanContext::new("p1", 3, settings);
        assert_eq!(plan.stages[1].opens_after_days, 1 << 31);
        assert_eq!(plan.stages[2].opens_after_days, u32::MAX);
    }

    #[test]
    fn test_invalid_deadline_is_rejected() {
        let schema = schema_with(
            r#"{"name": "deadline_utc", "type": "datetime", "label": "d", "default": "tomorrow"}"#,
        );
        let err = PlanContext::from_params_schema("p1", &schema, None).unwrap_err();
        assert!(err.is_config());
        assert!(err.to_string().contains("tomorrow"));
    }
}
