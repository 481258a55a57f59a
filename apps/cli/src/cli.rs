//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::OutputFormat;

/// Validate date,name records, GUIDs and IPv6 addresses.
///
/// Inputs come from the positional arguments, or one per stdin line when
/// none are given. Exits 0 when every input is valid and 1 otherwise.
#[derive(Debug, Parser)]
#[command(name = "albumkit", version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (defaults to ./albumkit.toml when present).
    #[arg(long, global = true, value_name = "FILE", env = "ALBUMKIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log filter directives, e.g. "debug" or "warn,albumkit_validator=trace".
    ///
    /// Also read from ALBUMKIT_LOG_LEVEL or ALBUMKIT_LOG; RUST_LOG is not
    /// consulted.
    #[arg(long, global = true, value_name = "FILTER")]
    pub log_level: Option<String>,

    /// Log format: pretty, compact or json.
    #[arg(long, global = true, value_name = "FORMAT")]
    pub log_format: Option<albumkit_log::Format>,

    /// Result format on stdout.
    #[arg(long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Validate "YYYY/MM/DD,name" records.
    Record {
        /// Records to validate.
        inputs: Vec<String>,
    },
    /// Validate GUIDs (8-4-4-4-12 hex, version 1-5, variant 8/9/a/b).
    Guid {
        /// Require brackets to be absent or a matching {} / () pair.
        #[arg(long)]
        paired: bool,
        /// GUIDs to validate.
        inputs: Vec<String>,
    },
    /// Validate IPv6 addresses.
    Ipv6 {
        /// Addresses to validate.
        inputs: Vec<String>,
    },
}

impl Command {
    /// Inputs given on the command line.
    pub fn inputs(&self) -> &[String] {
        match self {
            Self::Record { inputs } | Self::Guid { inputs, .. } | Self::Ipv6 { inputs } => inputs,
        }
    }

    /// Short name used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Record { .. } => "record",
            Self::Guid { .. } => "guid",
            Self::Ipv6 { .. } => "ipv6",
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn clap_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "albumkit",
            "guid",
            "--paired",
            "--output",
            "json",
            "--log-format",
            "json",
            "abc",
        ])
        .unwrap();
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.log_format, Some(albumkit_log::Format::Json));
        assert!(matches!(cli.command, Command::Guid { paired: true, .. }));
        assert_eq!(cli.command.inputs(), ["abc".to_string()]);
    }

    #[test]
    fn rejects_unknown_log_format() {
        assert!(Cli::try_parse_from(["albumkit", "--log-format", "xml", "ipv6"]).is_err());
    }
}
