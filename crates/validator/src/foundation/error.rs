//! Error type for validation failures
//!
//! All string fields use `Cow<'static, str>` for zero-allocation in the
//! common case of static error codes and messages.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured validation error.
///
/// `code` is stable and meant for programmatic matching; `message` is the
/// human-readable English text.
///
/// # Examples
///
/// ```
/// use albumkit_validator::foundation::ValidationError;
///
/// let error = ValidationError::new("invalid_group", "IPv6 group is not 1-4 hex digits")
///     .with_param("group", "12345");
///
/// assert_eq!(error.code, "invalid_group");
/// assert_eq!(error.param("group"), Some("12345"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// Error code for programmatic handling.
    ///
    /// Examples: "invalid_date_value", "invalid_guid", "multiple_compression"
    pub code: Cow<'static, str>,

    /// Human-readable error message in English.
    pub message: Cow<'static, str>,

    /// Ordered key-value pairs describing the failure (typically 0-2).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            params: Vec::new(),
        }
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)?;

        if !self.params.is_empty() {
            write!(f, " (params: [")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, "])")?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_without_params() {
        let error = ValidationError::new("invalid_guid", "Not a GUID");
        assert_eq!(error.to_string(), "invalid_guid: Not a GUID");
    }

    #[test]
    fn display_with_params() {
        let error = ValidationError::new("group_count", "Wrong number of groups")
            .with_param("expected", "8")
            .with_param("actual", "7");
        assert_eq!(
            error.to_string(),
            "group_count: Wrong number of groups (params: [expected=8, actual=7])"
        );
    }

    #[test]
    fn param_lookup() {
        let error = ValidationError::new("x", "y").with_param("group", "zz");
        assert_eq!(error.param("group"), Some("zz"));
        assert_eq!(error.param("missing"), None);
    }

    #[test]
    fn serializes_without_empty_params() {
        let error = ValidationError::new("invalid_guid", "Not a GUID");
        let json = serde_json::to_string(&error).unwrap();
        assert_eq!(json, r#"{"code":"invalid_guid","message":"Not a GUID"}"#);
    }
}
