//! Prelude module for convenient imports.
//!
//! ```
//! use albumkit_validator::prelude::*;
//!
//! assert!(is_valid_guid("123e4567-e89b-12d3-a456-426614174000"));
//! assert!(Ipv6::new().validate("::1").is_ok());
//! ```

pub use crate::foundation::{Validate, ValidationError};

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;
