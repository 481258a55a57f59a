//! Runs a validation command over a batch of inputs.

use std::io::{self, BufRead, Write};

use albumkit_validator::foundation::{Validate, ValidationError};
use albumkit_validator::validators::{BracketMode, CompositeRecord, Guid, Ipv6, RecordValidator};
use serde::Serialize;

use crate::cli::Command;
use crate::config::{OutputFormat, Settings};

/// Result of validating one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub input: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<CompositeRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ValidationError>,
}

impl Outcome {
    fn new(input: &str, result: Result<Option<CompositeRecord>, ValidationError>) -> Self {
        match result {
            Ok(value) => Self {
                input: input.to_owned(),
                valid: true,
                value,
                error: None,
            },
            Err(error) => Self {
                input: input.to_owned(),
                valid: false,
                value: None,
                error: Some(error),
            },
        }
    }
}

/// Positional inputs if any were given, otherwise one input per line of
/// `reader`.
pub fn collect_inputs(args: &[String], reader: impl BufRead) -> io::Result<Vec<String>> {
    if !args.is_empty() {
        return Ok(args.to_vec());
    }
    reader.lines().collect()
}

/// Validates a single input according to `command`.
pub fn check(command: &Command, settings: &Settings, input: &str) -> Outcome {
    let result = match command {
        Command::Record { .. } => RecordValidator::new()
            .parse(input)
            .map(Some)
            .map_err(ValidationError::from),
        Command::Guid { paired, .. } => {
            let mode = if *paired {
                BracketMode::Paired
            } else {
                settings.guid_brackets.into()
            };
            Guid::new().brackets(mode).validate(input).map(|()| None)
        }
        Command::Ipv6 { .. } => Ipv6::new().validate(input).map(|()| None),
    };
    Outcome::new(input, result)
}

/// Writes one outcome in the requested format.
pub fn write_outcome(
    out: &mut impl Write,
    format: OutputFormat,
    outcome: &Outcome,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, outcome)?;
            writeln!(out)
        }
        OutputFormat::Text => match (&outcome.value, &outcome.error) {
            (_, Some(error)) => writeln!(out, "invalid\t{}\t{}", outcome.input, error.message),
            (Some(record), None) => writeln!(out, "ok\t{record}"),
            (None, None) => writeln!(out, "ok\t{}", outcome.input),
        },
    }
}

/// Validates every input, writing one line per input.
///
/// Returns `true` when all inputs were valid.
pub fn run(
    command: &Command,
    settings: &Settings,
    inputs: &[String],
    mut out: impl Write,
) -> io::Result<bool> {
    let span = tracing::info_span!("validate", kind = command.kind(), count = inputs.len());
    let _entered = span.enter();

    let mut rejected = 0usize;
    for input in inputs {
        let outcome = check(command, settings, input);
        if !outcome.valid {
            rejected += 1;
        }
        write_outcome(&mut out, settings.output, &outcome)?;
    }
    out.flush()?;

    tracing::info!(rejected, "validation finished");
    Ok(rejected == 0)
}
