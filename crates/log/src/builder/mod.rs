//! Logger builder implementation

use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Config, Format};
use crate::error::{LogError, LogResult};

/// Builds the fmt layer for one format, applying the shared display options.
/// Events always go to stderr so stdout stays free for program output.
macro_rules! create_fmt_layer {
    ($style:ident, $display:expr) => {
        fmt::layer()
            .$style()
            .with_writer(std::io::stderr)
            .with_ansi($display.colors)
            .with_target($display.target)
            .with_file($display.source)
            .with_line_number($display.source)
    };
}

/// Logger builder
#[derive(Debug)]
pub struct LoggerBuilder {
    config: Config,
}

impl LoggerBuilder {
    /// Create builder from config
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// Parses the filter directives without installing anything.
    pub fn filter(&self) -> LogResult<EnvFilter> {
        EnvFilter::try_new(&self.config.level)
            .map_err(|e| LogError::Filter(format!("'{}': {e}", self.config.level)))
    }

    /// Build and install the global subscriber
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Filter string cannot be parsed
    /// - A global subscriber is already set
    pub fn build(self) -> LogResult<()> {
        let filter = self.filter()?;
        let display = &self.config.display;
        let registry = Registry::default().with(filter);

        let installed = match self.config.format {
            Format::Pretty => registry.with(create_fmt_layer!(pretty, display)).try_init(),
            Format::Compact => registry.with(create_fmt_layer!(compact, display)).try_init(),
            Format::Json => registry
                .with(create_fmt_layer!(json, display).with_ansi(false))
                .try_init(),
        };
        installed.map_err(|e| LogError::Init(e.to_string()))?;

        tracing::debug!(
            level = %self.config.level,
            format = %self.config.format,
            "logger initialized"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_filter_is_reported() {
        let builder = LoggerBuilder::from_config(Config {
            level: "albumkit=loudest".to_string(),
            ..Config::default()
        });
        assert!(matches!(builder.filter(), Err(LogError::Filter(_))));
        assert!(matches!(builder.build(), Err(LogError::Filter(_))));
    }

    #[test]
    fn valid_filter_parses() {
        let builder = LoggerBuilder::from_config(Config {
            level: "warn,albumkit_validator=trace".to_string(),
            ..Config::default()
        });
        assert!(builder.filter().is_ok());
    }

    // The only test in this crate that installs a subscriber.
    #[test]
    fn second_install_fails() {
        let first = LoggerBuilder::from_config(Config::production()).build();
        assert!(first.is_ok());
        let second = LoggerBuilder::from_config(Config::development()).build();
        assert!(matches!(second, Err(LogError::Init(_))));
    }
}
