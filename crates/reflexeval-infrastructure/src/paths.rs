//! Path resolution for ReflexEval configuration files.
//!
//! ```text
//! ~/.config/reflexeval/        # Config directory (dirs::config_dir)
//! └── config.toml              # Application configuration
//! ```

use reflexeval_core::{ReflexError, Result};
use std::ffi::OsString;
use std::path::PathBuf;

/// Environment variable pointing at an explicit config file.
pub const CONFIG_PATH_ENV: &str = "REFLEXEVAL_CONFIG";

const APP_DIR_NAME: &str = "reflexeval";
const CONFIG_FILE_NAME: &str = "config.toml";

pub struct ReflexPaths;

impl ReflexPaths {
    /// Returns the platform configuration directory for ReflexEval.
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .ok_or_else(|| ReflexError::config("Cannot find the user configuration directory"))
    }

    /// Resolves the config file path.
    ///
    /// An explicit path wins, then `$REFLEXEVAL_CONFIG`, then
    /// `<config_dir>/reflexeval/config.toml`.
    pub fn config_file(explicit: Option<PathBuf>) -> Result<PathBuf> {
        Self::resolve_config_file(
            explicit,
            std::env::var_os(CONFIG_PATH_ENV),
            Self::config_dir(),
        )
    }

    /// [`ReflexPaths::config_file`] with the environment value and the config
    /// directory passed in. An empty environment value counts as unset.
    pub fn resolve_config_file(
        explicit: Option<PathBuf>,
        env_value: Option<OsString>,
        config_dir: Result<PathBuf>,
    ) -> Result<PathBuf> {
        if let Some(path) = explicit {
            return Ok(path);
        }
        if let Some(path) = env_value.filter(|p| !p.is_empty()) {
            return Ok(PathBuf::from(path));
        }
        Ok(config_dir?.join(CONFIG_FILE_NAME))
    }
}
