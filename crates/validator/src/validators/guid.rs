//! GUID validator.
//!
//! Accepts the canonical 8-4-4-4-12 hexadecimal layout with an RFC 4122
//! version nibble (`1`-`5`) and variant nibble (`8`, `9`, `a`, `b`),
//! optionally wrapped in `{}` or `()`. Hex digits are case-insensitive.

use std::sync::LazyLock;

use crate::foundation::{Validate, ValidationError};

// Each bracket side is optional on its own, so `{…)` and `{…` match too.
static GUID_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(
        r"(?i)^[{(]?[0-9a-f]{8}-[0-9a-f]{4}-[1-5][0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}[)}]?$",
    )
    .unwrap()
});

// ============================================================================
// BRACKET MODE
// ============================================================================

/// How surrounding brackets are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BracketMode {
    /// Opening and closing brackets are independently optional and need not
    /// match each other.
    #[default]
    Lenient,
    /// Brackets must be absent or form a matching `{}` / `()` pair.
    Paired,
}

// ============================================================================
// GUID VALIDATOR
// ============================================================================

/// Validates GUID strings.
///
/// # Examples
///
/// ```
/// use albumkit_validator::validators::Guid;
/// use albumkit_validator::foundation::Validate;
///
/// let lenient = Guid::new();
/// assert!(lenient.validate("123e4567-e89b-12d3-a456-426614174000").is_ok());
/// assert!(lenient.validate("{123e4567-e89b-12d3-a456-426614174000)").is_ok());
///
/// let paired = Guid::new().paired_brackets();
/// assert!(paired.validate("{123e4567-e89b-12d3-a456-426614174000}").is_ok());
/// assert!(paired.validate("{123e4567-e89b-12d3-a456-426614174000)").is_err());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Guid {
    brackets: BracketMode,
}

impl Guid {
    /// Creates a new GUID validator with lenient bracket handling.
    #[must_use]
    pub fn new() -> Self {
        Self {
            brackets: BracketMode::Lenient,
        }
    }

    /// Sets the bracket mode.
    #[must_use = "builder methods must be chained or built"]
    pub fn brackets(mut self, mode: BracketMode) -> Self {
        self.brackets = mode;
        self
    }

    /// Require brackets to be absent or a matching pair.
    #[must_use = "builder methods must be chained or built"]
    pub fn paired_brackets(self) -> Self {
        self.brackets(BracketMode::Paired)
    }

    /// The configured bracket mode.
    pub fn bracket_mode(&self) -> BracketMode {
        self.brackets
    }
}

fn brackets_paired(input: &str) -> bool {
    let bytes = input.as_bytes();
    let open = bytes.first().copied().filter(|b| matches!(*b, b'{' | b'('));
    let close = bytes.last().copied().filter(|b| matches!(*b, b'}' | b')'));
    matches!(
        (open, close),
        (None, None) | (Some(b'{'), Some(b'}')) | (Some(b'('), Some(b')'))
    )
}

impl Validate for Guid {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if !GUID_REGEX.is_match(input) {
            tracing::trace!(len = input.len(), "guid shape mismatch");
            return Err(ValidationError::new(
                "invalid_guid",
                "GUID must be 8-4-4-4-12 hex digits with version 1-5 and variant 8, 9, a or b",
            ));
        }

        if self.brackets == BracketMode::Paired && !brackets_paired(input) {
            return Err(ValidationError::new(
                "unpaired_brackets",
                "GUID brackets must be absent or a matching {} or () pair",
            ));
        }

        Ok(())
    }
}

/// Returns `true` when `input` is a GUID under the lenient bracket rules.
///
/// Never fails; any string that does not fit the grammar yields `false`.
pub fn is_valid_guid(input: &str) -> bool {
    Guid::new().is_valid(input)
}

// ============================================================================
// TESTS
// ============================================================================
