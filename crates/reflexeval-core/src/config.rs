use serde::{Deserialize, Serialize};

pub const DEFAULT_PLAN_ID: &str = "demo-plan";

/// Root of `config.toml`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct AppConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub server: ServerSettings,
    /// Plans served by the in-memory plan provider
    #[serde(default = "default_plans")]
    pub plans: Vec<PlanEntry>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            server: ServerSettings::default(),
            plans: default_plans(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerSettings {
    /// `host:port`, suitable for `SocketAddr` parsing.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// A plan registered at startup.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PlanEntry {
    pub id: String,
    /// Overrides the schema's `sessions_number` default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sessions_number: Option<u32>,
}

impl PlanEntry {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            sessions_number: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_plans() -> Vec<PlanEntry> {
    vec![PlanEntry::new(DEFAULT_PLAN_ID)]
}
