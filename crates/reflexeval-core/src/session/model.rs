//! Reflection session domain model.
//!
//! A reflection session is one stage of a guided self-assessment activity.
//! The three stages are peer variants of [`ReflectionSession`]; each wraps the
//! shared [`SessionBase`] and adds its own prompt, title and extra fields.

use super::kind::SessionKind;
use super::metadata::Metadata;
use crate::plan::{PlanContext, StageDescriptor};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Fields common to every session variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionBase {
    pub plan_id: String,
    /// Zero-based position within the plan
    pub index: usize,
    pub stage_count: usize,
    pub stage_label: String,
    pub opens_after_days: u32,
    /// Questions shared by every stage of the plan
    pub questions: Vec<String>,
    pub criteria_weights: BTreeMap<String, f64>,
    pub deadline_utc: String,
    pub allow_revisions: bool,
    pub comment_enabled: bool,
    pub locale: String,
}

impl SessionBase {
    /// Captures the plan state the session at `index` needs. `stage` is the
    /// descriptor stored at that index.
    pub fn new(plan: &PlanContext, index: usize, stage: &StageDescriptor) -> Self {
        let settings = &plan.settings;
        Self {
            plan_id: plan.plan_id.clone(),
            index,
            stage_count: plan.stage_count(),
            stage_label: stage.label.clone(),
            opens_after_days: stage.opens_after_days,
            questions: settings.reflection_prompts.clone(),
            criteria_weights: settings.criteria_weights.clone(),
            deadline_utc: settings.deadline_rfc3339(),
            allow_revisions: settings.allow_revisions,
            comment_enabled: settings.comment_enabled,
            locale: settings.locale.clone(),
        }
    }

    fn metadata(&self) -> Metadata {
        let mut metadata = Metadata::new();
        metadata.insert("stageLabel".to_string(), self.stage_label.as_str().into());
        metadata.insert("stageCount".to_string(), self.stage_count.into());
        metadata.insert("opensAfterDays".to_string(), self.opens_after_days.into());
        metadata.insert("deadlineUtc".to_string(), self.deadline_utc.as_str().into());
        metadata.insert("allowRevisions".to_string(), self.allow_revisions.into());
        metadata.insert("commentEnabled".to_string(), self.comment_enabled.into());
        metadata.insert("locale".to_string(), self.locale.as_str().into());
        metadata
    }
}

/// First session: expectations and starting point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InitialReflectionSession {
    pub base: SessionBase,
}

impl InitialReflectionSession {
    pub const TITLE: &'static str = "Reflexão inicial";
    pub const PROMPT: &'static str = "Esta é a primeira sessão de reflexão. \
         Regista expectativas, ponto de partida e objetivos pessoais.";

    pub fn new(base: SessionBase) -> Self {
        Self { base }
    }
}

/// Any session between the first and the last.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntermediateReflectionSession {
    pub base: SessionBase,
    /// Index of the session this one follows
    pub since_session_index: usize,
}

impl IntermediateReflectionSession {
    pub const PROMPT: &'static str = "Sessão de reflexão intermédia. \
         Foca-te nas dificuldades recentes e na evolução desde a última sessão.";

    pub fn new(base: SessionBase) -> Self {
        let since_session_index = base.index.saturating_sub(1);
        Self {
            base,
            since_session_index,
        }
    }

    pub fn title(&self) -> String {
        format!("Reflexão intermédia #{}", self.base.index)
    }
}

/// Last session: synthesis and final self-assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalReflectionSession {
    pub base: SessionBase,
    pub summary_required: bool,
}

impl FinalReflectionSession {
    pub const TITLE: &'static str = "Reflexão final e autoavaliação";
    pub const PROMPT: &'static str = "Última sessão de reflexão. \
         Sintetiza o teu percurso, evidências de aprendizagem e autoavaliação final.";
    /// Asked after the plan's own questions.
    pub const CLOSING_QUESTIONS: [&'static str; 2] = [
        "Que evidências concretas mostram a tua evolução ao longo da unidade curricular?",
        "Se repetisses a unidade curricular, o que farias de forma diferente?",
    ];

    pub fn new(base: SessionBase) -> Self {
        Self {
            base,
            summary_required: true,
        }
    }
}

/// A reflection session of any kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ReflectionSession {
    Initial(InitialReflectionSession),
    Intermediate(IntermediateReflectionSession),
    Final(FinalReflectionSession),
}

impl ReflectionSession {
    /// Builds the variant named by `kind`.
    pub fn build(kind: SessionKind, base: SessionBase) -> Self {
        match kind {
            SessionKind::Initial => InitialReflectionSession::new(base).into(),
            SessionKind::Intermediate => IntermediateReflectionSession::new(base).into(),
            SessionKind::Final => FinalReflectionSession::new(base).into(),
        }
    }

    pub fn kind(&self) -> SessionKind {
        match self {
            Self::Initial(_) => SessionKind::Initial,
            Self::Intermediate(_) => SessionKind::Intermediate,
            Self::Final(_) => SessionKind::Final,
        }
    }

    pub fn base(&self) -> &SessionBase {
        match self {
            Self::Initial(s) => &s.base,
            Self::Intermediate(s) => &s.base,
            Self::Final(s) => &s.base,
        }
    }

    pub fn plan_id(&self) -> &str {
        &self.base().plan_id
    }

    pub fn index(&self) -> usize {
        self.base().index
    }

    pub fn title(&self) -> String {
        match self {
            Self::Initial(_) => InitialReflectionSession::TITLE.to_string(),
            Self::Intermediate(s) => s.title(),
            Self::Final(_) => FinalReflectionSession::TITLE.to_string(),
        }
    }

    /// Stage-specific guidance text.
    pub fn prompt(&self) -> &'static str {
        match self {
            Self::Initial(_) => InitialReflectionSession::PROMPT,
            Self::Intermediate(_) => IntermediateReflectionSession::PROMPT,
            Self::Final(_) => FinalReflectionSession::PROMPT,
        }
    }

    pub fn questions(&self) -> Vec<String> {
        let mut questions = self.base().questions.clone();
        if let Self::Final(_) = self {
            questions.extend(
                FinalReflectionSession::CLOSING_QUESTIONS
                    .iter()
                    .map(|q| q.to_string()),
            );
        }
        questions
    }

    /// Shared metadata plus the variant's own fields.
    pub fn metadata(&self) -> Metadata {
        let mut metadata = self.base().metadata();
        match self {
            Self::Initial(_) => {}
            Self::Intermediate(s) => {
                metadata.insert(
                    "sinceSessionIndex".to_string(),
                    s.since_session_index.into(),
                );
            }
            Self::Final(s) => {
                metadata.insert("summaryRequired".to_string(), s.summary_required.into());
            }
        }
        metadata
    }
}

impl From<InitialReflectionSession> for ReflectionSession {
    fn from(session: InitialReflectionSession) -> Self {
        Self::Initial(session)
    }
}

impl From<IntermediateReflectionSession> for ReflectionSession {
    fn from(session: IntermediateReflectionSession) -> Self {
        Self::Intermediate(session)
    }
}

impl From<FinalReflectionSession> for ReflectionSession {
    fn from(session: FinalReflectionSession) -> Self {
        Self::Final(session)
    }
}
