//! IPv6 address validator.
//!
//! Eight colon-separated groups of 1-4 hex digits, where a single `::` may
//! stand in for one or more all-zero groups. Dotted IPv4 tails and `%zone`
//! suffixes are not accepted.

use crate::foundation::{Validate, ValidationError};

const GROUPS: usize = 8;
const MAX_GROUP_DIGITS: usize = 4;

// ============================================================================
// IPV6 VALIDATOR
// ============================================================================

/// Validates textual IPv6 addresses.
///
/// # Examples
///
/// ```
/// use albumkit_validator::validators::Ipv6;
/// use albumkit_validator::foundation::Validate;
///
/// let v = Ipv6::new();
/// assert!(v.validate("2001:0db8:85a3:0000:0000:8a2e:0370:7334").is_ok());
/// assert!(v.validate("2001:db8::8a2e:370:7334").is_ok());
/// assert!(v.validate("::1").is_ok());
///
/// let err = v.validate("2001:db8::85a3::8a2e:370:7334").unwrap_err();
/// assert_eq!(err.code, "multiple_compression");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Ipv6;

impl Ipv6 {
    /// Creates a new IPv6 validator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

/// Counts the groups in a `:`-separated run, checking each one.
/// An empty run has zero groups.
fn count_groups(run: &str) -> Result<usize, ValidationError> {
    if run.is_empty() {
        return Ok(0);
    }

    let mut count = 0;
    for group in run.split(':') {
        let well_formed = (1..=MAX_GROUP_DIGITS).contains(&group.len())
            && group.bytes().all(|b| b.is_ascii_hexdigit());
        if !well_formed {
            return Err(ValidationError::new(
                "invalid_group",
                "Each IPv6 group must be 1 to 4 hex digits",
            )
            .with_param("group", group.to_owned()));
        }
        count += 1;
    }
    Ok(count)
}

fn group_count_error(actual: usize, compressed: bool) -> ValidationError {
    let message = if compressed {
        "A compressed IPv6 address may have at most 7 explicit groups"
    } else {
        "An IPv6 address without '::' must have exactly 8 groups"
    };
    ValidationError::new("group_count", message).with_param("actual", actual.to_string())
}

fn check_address(input: &str) -> Result<(), ValidationError> {
    if input.is_empty() {
        return Err(ValidationError::new(
            "empty_input",
            "IPv6 address cannot be empty",
        ));
    }

    match input.split_once("::") {
        Some((_, tail)) if tail.contains("::") => Err(ValidationError::new(
            "multiple_compression",
            "IPv6 address may contain '::' at most once",
        )),
        Some((head, tail)) => {
            let explicit = count_groups(head)? + count_groups(tail)?;
            // `::` must replace at least one group.
            if explicit < GROUPS {
                Ok(())
            } else {
                Err(group_count_error(explicit, true))
            }
        }
        None => {
            let groups = count_groups(input)?;
            if groups == GROUPS {
                Ok(())
            } else {
                Err(group_count_error(groups, false))
            }
        }
    }
}

impl Validate for Ipv6 {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let result = check_address(input);
        if let Err(error) = &result {
            tracing::trace!(code = %error.code, "ipv6 address rejected");
        }
        result
    }
}

/// Returns `true` when `input` is a textual IPv6 address.
///
/// Never fails; any string outside the grammar yields `false`.
pub fn is_valid_ipv6(input: &str) -> bool {
    Ipv6::new().is_valid(input)
}

// ============================================================================
// TESTS
// ============================================================================
