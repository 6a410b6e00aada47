use tracing::Subscriber;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt, reload};

/// Level used until the configuration file has been read.
pub const BOOTSTRAP_LEVEL: &str = "info";

/// Handle to the filter of the installed subscriber.
pub struct LogHandle {
    filter: reload::Handle<EnvFilter, Registry>,
    /// `RUST_LOG` was set at startup
    env_override: bool,
}

impl LogHandle {
    /// Switches to the configured `log_level`, unless `RUST_LOG` is set.
    pub fn apply_config_level(&self, level: &str) -> anyhow::Result<()> {
        if self.env_override {
            return Ok(());
        }
        let filter = EnvFilter::try_new(level)?;
        self.filter.reload(filter)?;
        Ok(())
    }

    /// The active filter directives.
    pub fn current_filter(&self) -> anyhow::Result<String> {
        Ok(self.filter.with_current(|filter| filter.to_string())?)
    }
}

fn layered(
    filter: EnvFilter,
) -> (
    impl Subscriber + Send + Sync + 'static,
    reload::Handle<EnvFilter, Registry>,
) {
    let (filter, handle) = reload::Layer::new(filter);
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr));
    (subscriber, handle)
}

/// Installs the global fmt subscriber at [`BOOTSTRAP_LEVEL`].
///
/// `RUST_LOG` takes precedence over the bootstrap level and over any level
/// applied later through [`LogHandle::apply_config_level`].
pub fn init_tracing() -> anyhow::Result<LogHandle> {
    let env_override = std::env::var_os(EnvFilter::DEFAULT_ENV).is_some();
    let filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(BOOTSTRAP_LEVEL))?;
    let (subscriber, handle) = layered(filter);
    subscriber
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))?;
    Ok(LogHandle {
        filter: handle,
        env_override,
    })
}
