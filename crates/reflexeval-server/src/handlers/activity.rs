//! Activity provider endpoints: banner, params schema, plan config, deploy.

use axum::Json;
use axum::body::Bytes;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use reflexeval_core::ReflexError;
use reflexeval_core::config::DEFAULT_PLAN_ID;
use reflexeval_core::params::ParamsSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::error::ApiError;
use crate::state::AppState;

const DEFAULT_USER_ID: &str = "demo-user";
const ACTIVITY_BASE_URL: &str = "https://reflexeval.example";
const AUTHOR: &str = "João Valadares - UAb - 2401840";

pub async fn home_handler(State(app_state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let plans = app_state.session_service.plan_ids().await?;
    Ok(Json(json!({
        "message": "ReflexEval AP – AP operacional",
        "status": "online",
        "version": env!("CARGO_PKG_VERSION"),
        "autor": [AUTHOR],
        "plans": plans,
        "endpoints": {
            "params": "/params",
            "config": "/config",
            "deploy": "/deploy (POST)",
            "debugSession": "/debug/session",
            "health": "/health",
        }
    })))
}

pub async fn params_handler(State(app_state): State<AppState>) -> Json<ParamsSchema> {
    Json(app_state.params_schema.as_ref().clone())
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigQuery {
    pub plan_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PlanConfigResponse {
    pub plan_id: String,
    pub params: ParamsSchema,
}

pub async fn config_handler(
    State(app_state): State<AppState>,
    query: Result<Query<ConfigQuery>, QueryRejection>,
) -> Result<Json<PlanConfigResponse>, ApiError> {
    let Query(query) = query?;
    let plan_id = query
        .plan_id
        .filter(|id| !id.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_PLAN_ID.to_string());
    Ok(Json(PlanConfigResponse {
        plan_id,
        params: app_state.params_schema.as_ref().clone(),
    }))
}

/// Usage hint for browsers hitting `/deploy` with GET.
pub async fn deploy_info_handler() -> Json<Value> {
    Json(json!({
        "message": "Use POST com JSON para fazer deploy da atividade.",
        "example": {
            "method": "POST",
            "url": "/deploy",
            "body": {
                "user_id": "u1",
                "plan_id": "p1"
            }
        }
    }))
}

#[derive(Debug, Default, Deserialize)]
pub struct DeployRequest {
    pub user_id: Option<String>,
    pub plan_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeployResponse {
    pub instance_id: String,
    pub activity_url: String,
    pub initial_state: String,
}

impl DeployResponse {
    pub fn for_request(request: DeployRequest) -> Self {
        let user_id = request
            .user_id
            .unwrap_or_else(|| DEFAULT_USER_ID.to_string());
        let plan_id = request
            .plan_id
            .unwrap_or_else(|| DEFAULT_PLAN_ID.to_string());
        let instance_id = format!("instance-{}-{}", plan_id, user_id);
        Self {
            activity_url: format!("{}/{}", ACTIVITY_BASE_URL, instance_id),
            instance_id,
            initial_state: "ready".to_string(),
        }
    }
}

/// An empty body deploys with the defaults.
pub async fn deploy_handler(body: Bytes) -> Result<Json<DeployResponse>, ApiError> {
    let request = if body.iter().all(u8::is_ascii_whitespace) {
        DeployRequest::default()
    } else {
        serde_json::from_slice(&body).map_err(|e| {
            ReflexError::invalid_input(format!("deploy body must be a JSON object: {}", e))
        })?
    };
    Ok(Json(DeployResponse::for_request(request)))
}
