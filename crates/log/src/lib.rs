//! # albumkit-log
//!
//! Installs a global `tracing` subscriber for albumkit binaries.
//!
//! ```no_run
//! // Level from ALBUMKIT_LOG / RUST_LOG, format from ALBUMKIT_LOG_FORMAT.
//! albumkit_log::init().expect("logger");
//! tracing::info!("ready");
//! ```
//!
//! Libraries in the workspace only emit events through `tracing`; they never
//! install a subscriber themselves.

mod builder;
mod config;
mod error;

pub use builder::LoggerBuilder;
pub use config::{Config, DisplayConfig, Format};
pub use error::{LogError, LogResult};

/// Initializes logging from environment variables.
pub fn init() -> LogResult<()> {
    LoggerBuilder::from_config(Config::from_env()).build()
}

/// Initializes logging from an explicit configuration.
pub fn init_with(config: Config) -> LogResult<()> {
    LoggerBuilder::from_config(config).build()
}
