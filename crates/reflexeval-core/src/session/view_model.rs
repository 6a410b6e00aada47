//! Serializable projection of a session.

use super::kind::SessionKind;
use super::metadata::Metadata;
use super::model::ReflectionSession;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// What callers receive for a session.
///
/// Field order is the serialization order: `kind`, `planId`, `index`,
/// `prompt`, `metadata`, then the display fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionViewModel {
    pub kind: SessionKind,
    pub plan_id: String,
    pub index: usize,
    pub prompt: String,
    pub metadata: Metadata,
    pub title: String,
    pub questions: Vec<String>,
    pub criteria_weights: BTreeMap<String, f64>,
}

impl From<&ReflectionSession> for SessionViewModel {
    fn from(session: &ReflectionSession) -> Self {
        Self {
            kind: session.kind(),
            plan_id: session.plan_id().to_string(),
            index: session.index(),
            prompt: session.prompt().to_string(),
            metadata: session.metadata(),
            title: session.title(),
            questions: session.questions(),
            criteria_weights: session.base().criteria_weights.clone(),
        }
    }
}

impl From<ReflectionSession> for SessionViewModel {
    fn from(session: ReflectionSession) -> Self {
        Self::from(&session)
    }
}
