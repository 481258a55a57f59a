//! Core trait for the validation system

use crate::foundation::ValidationError;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The trait every format validator implements.
///
/// Generic over the input type so that a validator for `str` cannot be
/// handed anything else. All validators return `Result<(), ValidationError>`
/// for a consistent API; validators that also materialise a typed value
/// (see [`RecordValidator`](crate::validators::RecordValidator)) expose
/// that through their own inherent methods.
///
/// # Examples
///
/// ```
/// use albumkit_validator::foundation::{Validate, ValidationError};
///
/// struct NoSpaces;
///
/// impl Validate for NoSpaces {
///     type Input = str;
///
///     fn validate(&self, input: &str) -> Result<(), ValidationError> {
///         if input.contains(' ') {
///             Err(ValidationError::new("contains_space", "Must not contain spaces"))
///         } else {
///             Ok(())
///         }
///     }
/// }
///
/// assert!(NoSpaces.is_valid("abc"));
/// assert!(!NoSpaces.is_valid("a b"));
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` to allow validation of unsized types like `str`.
    type Input: ?Sized;

    /// Validates the input value.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;

    /// Boolean form of [`validate`](Self::validate).
    fn is_valid(&self, input: &Self::Input) -> bool {
        self.validate(input).is_ok()
    }

    /// Returns the name of this validator.
    ///
    /// Used for debugging and log fields.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
