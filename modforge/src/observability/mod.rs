//! Logging setup
//!
//! Logs go to stderr so that status lines printed on stdout stay clean. The
//! filter comes from `RUST_LOG` when set.

use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Single-line human output
    #[default]
    Compact,
    /// Multi-line human output
    Pretty,
    /// One JSON object per event
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Filter used when `RUST_LOG` is unset
    pub default_filter: String,

    /// Output format
    pub format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            default_filter: "warn".to_string(),
            format: LogFormat::Compact,
        }
    }
}

impl ObservabilityConfig {
    /// Config with the given fallback filter
    #[must_use]
    pub fn new(default_filter: impl Into<String>) -> Self {
        Self {
            default_filter: default_filter.into(),
            ..Default::default()
        }
    }

    /// Set the output format
    #[must_use]
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Filter for a verbosity count (`-v`, `-vv`, ...)
    #[must_use]
    pub fn for_verbosity(verbosity: u8) -> Self {
        let filter = match verbosity {
            0 => "warn",
            1 => "info,modforge=debug",
            _ => "debug,modforge=trace",
        };
        Self::new(filter)
    }
}

/// Errors raised while installing the subscriber
#[derive(Debug, Error)]
pub enum ObservabilityError {
    /// The fallback filter does not parse
    #[error("invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),

    /// A global subscriber is already installed
    #[error("failed to install log subscriber: {0}")]
    Init(#[from] tracing_subscriber::util::TryInitError),
}

/// Install the global subscriber
///
/// # Errors
///
/// Returns an error if the fallback filter is invalid or a subscriber is
/// already installed.
///
/// # Example
///
/// ```rust,no_run
/// use modforge::observability::{self, ObservabilityConfig};
///
/// # fn main() -> anyhow::Result<()> {
/// observability::init(&ObservabilityConfig::default())?;
/// tracing::info!("ready");
/// # Ok(())
/// # }
/// ```
pub fn init(config: &ObservabilityConfig) -> Result<(), ObservabilityError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.default_filter)?,
    };

    let registry = tracing_subscriber::registry().with(env_filter);
    let layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    match config.format {
        LogFormat::Compact => registry.with(layer.compact()).try_init()?,
        LogFormat::Pretty => registry.with(layer.pretty()).try_init()?,
        LogFormat::Json => registry.with(layer.json()).try_init()?,
    }

    Ok(())
}
