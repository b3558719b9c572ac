//! Client configuration

use clap::{Args, ValueEnum};

use crate::api::BackendConfig;

/// Log output format.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "warn", global = true)]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(
        long,
        env = "LOG_FORMAT",
        value_enum,
        default_value_t = LogFormat::Compact,
        global = true
    )]
    pub log_format: LogFormat,
}

/// Backend connection settings.
#[derive(Debug, Args)]
pub struct BackendArgs {
    /// Backend base URI
    #[arg(long, env = "BACKEND_URI")]
    pub backend_uri: String,

    /// Backend API key
    #[arg(long, env = "API_KEY", hide_env_values = true)]
    pub api_key: String,
}

impl From<BackendArgs> for BackendConfig {
    fn from(args: BackendArgs) -> Self {
        Self {
            base_uri: args.backend_uri,
            api_key: args.api_key,
        }
    }
}

/// Order desk configuration.
#[derive(Debug, Args)]
pub struct AppConfig {
    /// Backend connection settings.
    #[command(flatten)]
    pub backend: BackendArgs,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,
}
