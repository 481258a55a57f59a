//! # albumkit-validator
//!
//! Strict string-format validators for the album viewer toolkit.
//!
//! ## Quick Start
//!
//! ```
//! use albumkit_validator::prelude::*;
//!
//! let record = validate_and_convert_composite_record("2023/10/01,Test Name").unwrap();
//! assert_eq!(record.name(), "Test Name");
//!
//! assert!(is_valid_guid("123e4567-e89b-12d3-a456-426614174000"));
//! assert!(is_valid_ipv6("2001:0db8:85a3:0000:0000:8a2e:0370:7334"));
//! assert!(!is_valid_ipv6("2001:db8::85a3::8a2e:370:7334"));
//! ```
//!
//! ## Built-in Validators
//!
//! - **Record**: [`RecordValidator`](validators::RecordValidator) producing
//!   [`CompositeRecord`](validators::CompositeRecord), failing with
//!   [`RecordError`](validators::RecordError)
//! - **GUID**: [`Guid`](validators::Guid) with a
//!   [`BracketMode`](validators::BracketMode)
//! - **Network**: [`Ipv6`](validators::Ipv6)
//!
//! All validators are stateless and safe to share across threads.

pub mod foundation;
pub mod prelude;
pub mod validators;

pub use validators::{
    CompositeRecord, RecordError, is_valid_guid, is_valid_ipv6,
    validate_and_convert_composite_record,
};
