use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use reflexeval_core::ReflexError;
use reflexeval_core::session::SessionViewModel;
use serde::Deserialize;

use crate::error::ApiError;
use crate::state::AppState;

/// Raw query of `GET /debug/session`.
///
/// Both fields are taken as strings and validated by [`SessionQuery::parse`].
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionQuery {
    pub plan_id: Option<String>,
    pub session_index: Option<String>,
}

impl SessionQuery {
    /// Validates the query into `(plan_id, session_index)`.
    pub fn parse(&self) -> Result<(&str, i64), ReflexError> {
        let plan_id = self
            .plan_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| ReflexError::invalid_input("planId is required"))?;

        let raw_index = self
            .session_index
            .as_deref()
            .map(str::trim)
            .filter(|index| !index.is_empty())
            .ok_or_else(|| ReflexError::invalid_input("sessionIndex is required"))?;
        let session_index = raw_index.parse::<i64>().map_err(|_| {
            ReflexError::invalid_input(format!(
                "sessionIndex must be an integer, got '{}'",
                raw_index
            ))
        })?;

        Ok((plan_id, session_index))
    }
}

pub async fn debug_session_handler(
    State(app_state): State<AppState>,
    query: Result<Query<SessionQuery>, QueryRejection>,
) -> Result<Json<SessionViewModel>, ApiError> {
    let Query(query) = query?;
    let (plan_id, session_index) = query.parse()?;
    let view = app_state
        .session_service
        .get_session_view(plan_id, session_index)
        .await?;
    Ok(Json(view))
}
