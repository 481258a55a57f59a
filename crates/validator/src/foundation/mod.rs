//! Core validation types and traits
//!
//! - **Trait**: [`Validate`]
//! - **Error**: [`ValidationError`]
//!
//! Validators are generic over their input type:
//!
//! ```
//! use albumkit_validator::foundation::Validate;
//! use albumkit_validator::validators::Ipv6;
//!
//! let validator = Ipv6::new();
//! assert!(validator.validate("fe80::1").is_ok());
//! assert!(validator.validate("fe80::1::2").is_err());
//! ```

pub mod error;
pub mod traits;

pub use error::ValidationError;
pub use traits::Validate;
