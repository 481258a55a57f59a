//! Built-in validators
//!
//! - **Record**: `"YYYY/MM/DD,name"` strings into [`CompositeRecord`]
//! - **GUID**: 8-4-4-4-12 hex with RFC 4122 version and variant nibbles
//! - **Network**: textual IPv6 addresses
//!
//! Each validator is a [`Validate`](crate::foundation::Validate) impl plus a
//! free function for callers that only want the answer.

pub mod guid;
pub mod ipv6;
pub mod record;

pub use guid::{BracketMode, Guid, is_valid_guid};
pub use ipv6::{Ipv6, is_valid_ipv6};
pub use record::{
    CompositeRecord, RecordError, RecordValidator, check_date_syntax, parse_calendar_date, record,
    validate_and_convert_composite_record, validate_name,
};
