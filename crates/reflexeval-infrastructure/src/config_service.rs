//! Configuration service implementation.
//!
//! This module provides a ConfigService that loads the application
//! configuration from a TOML file (by default
//! `~/.config/reflexeval/config.toml`).

use reflexeval_core::config::AppConfig;
use reflexeval_core::{ReflexError, Result};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// Environment variable overriding the configured port.
pub const PORT_ENV: &str = "PORT";

/// Configuration service that loads and caches the application configuration.
///
/// A missing file is not an error: the defaults are used instead.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
    /// Cached configuration loaded from file.
    /// Uses RwLock for thread-safe lazy loading.
    config: Arc<RwLock<Option<AppConfig>>>,
}

impl ConfigService {
    /// Creates a ConfigService reading from `path`.
    ///
    /// The configuration is loaded lazily on first access.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            config: Arc::new(RwLock::new(None)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Gets the configuration, loading from file if not cached.
    ///
    /// The `PORT` environment variable, when set, replaces `server.port`.
    pub fn get_config(&self) -> Result<AppConfig> {
        // Check if already cached
        {
            let read_lock = self
                .config
                .read()
                .map_err(|_| ReflexError::internal("config cache lock poisoned"))?;
            if let Some(ref cached) = *read_lock {
                return Ok(cached.clone());
            }
        }

        let mut loaded = Self::load_config(&self.path)?;
        apply_port_override(&mut loaded, std::env::var(PORT_ENV).ok().as_deref())?;

        // Cache it
        {
            let mut write_lock = self
                .config
                .write()
                .map_err(|_| ReflexError::internal("config cache lock poisoned"))?;
            *write_lock = Some(loaded.clone());
        }

        Ok(loaded)
    }

    /// Loads AppConfig from a TOML file.
    fn load_config(path: &Path) -> Result<AppConfig> {
        if !path.exists() {
            tracing::info!(
                "[ConfigService] No config file at {:?}, using defaults",
                path
            );
            return Ok(AppConfig::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&content)?;
        tracing::debug!("[ConfigService] Loaded config from {:?}", path);
        Ok(config)
    }
}

/// Replaces the configured port with `port` when one is given.
pub fn apply_port_override(config: &mut AppConfig, port: Option<&str>) -> Result<()> {
    let Some(port) = port.map(str::trim).filter(|p| !p.is_empty()) else {
        return Ok(());
    };
    config.server.port = port.parse().map_err(|_| {
        ReflexError::config(format!("{} must be a port number, got '{}'", PORT_ENV, port))
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = ConfigService::load_config(&temp_dir.path().join("config.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_loads_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
log_level = "debug"

[server]
host = "127.0.0.1"
port = 8081

[[plans]]
id = "demo-plan"

[[plans]]
id = "long-plan"
sessions_number = 6
"#,
        )
        .unwrap();

        let config = ConfigService::load_config(&path).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.server.bind_address(), "127.0.0.1:8081");
        assert_eq!(config.plans.len(), 2);
        assert_eq!(config.plans[1].sessions_number, Some(6));
    }

    #[test]
    fn test_invalid_toml_is_serialization_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[server\nport = ").unwrap();

        let err = ConfigService::load_config(&path).unwrap_err();
        assert!(matches!(err, ReflexError::Serialization { ref format, .. } if format == "TOML"));
    }

    #[test]
    fn test_get_config_caches() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "log_level = \"warn\"\n").unwrap();

        let service = ConfigService::new(&path);
        assert_eq!(service.get_config().unwrap().log_level, "warn");

        std::fs::write(&path, "log_level = \"trace\"\n").unwrap();
        assert_eq!(service.get_config().unwrap().log_level, "warn");

        let fresh = ConfigService::new(&path);
        assert_eq!(fresh.get_config().unwrap().log_level, "trace");
    }

    #[test]
    fn test_port_override() {
        let mut config = AppConfig::default();
        apply_port_override(&mut config, None).unwrap();
        assert_eq!(config.server.port, 5000);

        apply_port_override(&mut config, Some(" 10000 ")).unwrap();
        assert_eq!(config.server.port, 10000);

        apply_port_override(&mut config, Some("")).unwrap();
        assert_eq!(config.server.port, 10000);

        let err = apply_port_override(&mut config, Some("eighty")).unwrap_err();
        assert!(err.is_config());
    }
}
