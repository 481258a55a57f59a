//! Composite record validator.
//!
//! Parses `"YYYY/MM/DD,name"` strings into a [`CompositeRecord`]. Validation
//! runs in a fixed order and stops at the first failure:
//!
//! 1. the input splits on `,` into exactly two fields;
//! 2. the date field matches `DDDD/DD/DD` ([`check_date_syntax`]);
//! 3. the date field names a real calendar day ([`parse_calendar_date`]);
//! 4. the name field is non-empty once trimmed ([`validate_name`]).

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::foundation::{Validate, ValidationError};

static DATE_SYNTAX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^[0-9]{4}/[0-9]{2}/[0-9]{2}$").unwrap());

// ============================================================================
// ERRORS
// ============================================================================

/// Why a composite record was rejected.
///
/// Variants are listed in the order they are checked; exactly one is
/// reported per input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum RecordError {
    /// The input did not split into exactly two comma-separated fields.
    #[error("Invalid input format. Expected \"date,name\".")]
    InvalidInputFormat,

    /// The date field is not four digits, slash, two digits, slash, two digits.
    #[error("Invalid date format. Expected \"YYYY/MM/DD\".")]
    InvalidDateFormat,

    /// The date field is well-formed but is not a real calendar day.
    #[error("Invalid date value.")]
    InvalidDateValue,

    /// The name field is empty or whitespace only.
    #[error("Invalid name. Name cannot be empty.")]
    InvalidNameEmpty,
}

impl RecordError {
    /// Stable machine-readable code for this failure.
    pub const fn code(self) -> &'static str {
        match self {
            Self::InvalidInputFormat => "invalid_input_format",
            Self::InvalidDateFormat => "invalid_date_format",
            Self::InvalidDateValue => "invalid_date_value",
            Self::InvalidNameEmpty => "invalid_name_empty",
        }
    }
}

impl From<RecordError> for ValidationError {
    fn from(error: RecordError) -> Self {
        Self::new(error.code(), error.to_string())
    }
}

// ============================================================================
// RECORD
// ============================================================================

/// A validated `{date, name}` pair.
///
/// Only produced by a successful parse, so `date` is always a real day and
/// `name` is never empty and never has surrounding whitespace.
///
/// `Display` renders the canonical `YYYY/MM/DD,name` form, which parses
/// back into an equal record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CompositeRecord {
    date: NaiveDate,
    name: String,
}

impl CompositeRecord {
    /// The calendar date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The trimmed name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Consumes the record, returning its fields.
    pub fn into_parts(self) -> (NaiveDate, String) {
        (self.date, self.name)
    }
}

impl fmt::Display for CompositeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}/{:02}/{:02},{}",
            self.date.year(),
            self.date.month(),
            self.date.day(),
            self.name
        )
    }
}

impl FromStr for CompositeRecord {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_and_convert_composite_record(s)
    }
}

// ============================================================================
// STAGES
// ============================================================================

/// Syntactic stage: the date field must be exactly `DDDD/DD/DD` in ASCII
/// digits. Says nothing about whether the digits form a real date.
pub fn check_date_syntax(date_field: &str) -> Result<(), RecordError> {
    if DATE_SYNTAX.is_match(date_field) {
        Ok(())
    } else {
        Err(RecordError::InvalidDateFormat)
    }
}

/// Semantic stage: builds the calendar date for a field that already
/// passed [`check_date_syntax`].
///
/// Out-of-range months and days are rejected rather than rolled over into
/// the next month.
pub fn parse_calendar_date(date_field: &str) -> Result<NaiveDate, RecordError> {
    let iso = date_field.replace('/', "-");
    NaiveDate::parse_from_str(&iso, "%Y-%m-%d").map_err(|_| RecordError::InvalidDateValue)
}

/// Trims the name field, rejecting it if nothing is left.
///
/// Trimming strips Unicode whitespace and the byte-order mark (U+FEFF).
pub fn validate_name(name_field: &str) -> Result<&str, RecordError> {
    let name = name_field.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}');
    if name.is_empty() {
        Err(RecordError::InvalidNameEmpty)
    } else {
        Ok(name)
    }
}

fn parse_record(input: &str) -> Result<CompositeRecord, RecordError> {
    let (date_field, name_field) = match input.split_once(',') {
        Some((date, name)) if !name.contains(',') => (date, name),
        _ => return Err(RecordError::InvalidInputFormat),
    };

    check_date_syntax(date_field)?;
    let date = parse_calendar_date(date_field)?;
    let name = validate_name(name_field)?;

    Ok(CompositeRecord {
        date,
        name: name.to_owned(),
    })
}

/// Validates a `"YYYY/MM/DD,name"` string and converts it to a
/// [`CompositeRecord`].
///
/// # Examples
///
/// ```
/// use albumkit_validator::validators::{RecordError, validate_and_convert_composite_record};
///
/// let record = validate_and_convert_composite_record("2023/10/01, Test Name ").unwrap();
/// assert_eq!(record.name(), "Test Name");
/// assert_eq!(record.to_string(), "2023/10/01,Test Name");
///
/// assert_eq!(
///     validate_and_convert_composite_record("2023/02/30,X"),
///     Err(RecordError::InvalidDateValue)
/// );
/// ```
pub fn validate_and_convert_composite_record(input: &str) -> Result<CompositeRecord, RecordError> {
    let result = parse_record(input);
    if let Err(error) = &result {
        tracing::debug!(code = error.code(), "composite record rejected");
    }
    result
}

// ============================================================================
// VALIDATOR
// ============================================================================

/// [`Validate`] adapter over [`validate_and_convert_composite_record`].
///
/// `validate` only reports success or the failure code; use
/// [`RecordValidator::parse`] to keep the converted record.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordValidator;

impl RecordValidator {
    /// Creates a new record validator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Validates and converts in one step.
    pub fn parse(&self, input: &str) -> Result<CompositeRecord, RecordError> {
        validate_and_convert_composite_record(input)
    }
}

impl Validate for RecordValidator {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        self.parse(input).map(drop).map_err(ValidationError::from)
    }
}

/// Creates a new [`RecordValidator`].
#[must_use]
pub fn record() -> RecordValidator {
    RecordValidator::new()
}

// ============================================================================
// TESTS
// ============================================================================
