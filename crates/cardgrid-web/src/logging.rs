/// Logging configuration for the card grid server
///
/// Structured logging through `tracing`, filtered per target and rendered in
/// one of the fmt layer formats.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    pub format: LogFormat,
    pub filters: Vec<LogFilter>,
    pub include_location: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Plain,
    Compact,
    Pretty,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogFilter {
    pub target: String,
    pub level: LogLevel,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            format: LogFormat::Compact,
            filters: vec![
                LogFilter {
                    target: "tower_http".to_string(),
                    level: LogLevel::Warn,
                },
                LogFilter {
                    target: "hyper".to_string(),
                    level: LogLevel::Warn,
                },
            ],
            include_location: false,
        }
    }
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Filter directives for the configured levels, crate target first
pub fn filter_directives(config: &LoggingConfig) -> Vec<String> {
    let mut directives = vec![format!("cardgrid_web={}", config.level.as_str())];
    directives.extend(
        config
            .filters
            .iter()
            .map(|filter| format!("{}={}", filter.target, filter.level.as_str())),
    );
    directives
}

/// Initialize the global subscriber from the provided configuration
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = match std::env::var("RUST_LOG") {
        Ok(env_filter) => EnvFilter::new(env_filter),
        Err(_) => {
            let mut filter = EnvFilter::new(config.level.as_str());
            for directive in filter_directives(config) {
                filter = filter.add_directive(directive.parse()?);
            }
            filter
        }
    };

    let location = config.include_location;
    let layer: Box<dyn Layer<Registry> + Send + Sync> = match config.format {
        LogFormat::Json => fmt::layer()
            .with_file(location)
            .with_line_number(location)
            .json()
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .with_file(location)
            .with_line_number(location)
            .compact()
            .boxed(),
        LogFormat::Pretty => fmt::layer()
            .with_file(location)
            .with_line_number(location)
            .pretty()
            .boxed(),
        LogFormat::Plain => fmt::layer()
            .with_file(location)
            .with_line_number(location)
            .boxed(),
    };

    tracing_subscriber::registry().with(layer).with(filter).try_init()?;

    Ok(())
}
