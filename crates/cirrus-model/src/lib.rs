//! cirrus-model - Response shapes for the autoscaling and IAM cloud APIs.
//!
//! Every type here is a plain value: fields are settable without checks,
//! equality and hashing are structural, and [`std::fmt::Display`] renders
//! only the fields that are present. Documented length and pattern
//! constraints are checked only when a caller asks via `validate()`.
//!
//! # Example
//!
//! ```
//! use cirrus_model::PolicySetResult;
//!
//! let result = PolicySetResult::default().with_continuation_token(Some("abc".to_string()));
//!
//! assert!(result.policies().is_empty());
//! assert_eq!(result.continuation_token(), Some("abc"));
//! assert_eq!(result.to_string(), "{NextToken: abc}");
//! ```

pub mod autoscaling;
pub mod constraints;
pub mod error;
pub mod iam;
mod render;

// Re-export primary types at crate root for convenience
pub use autoscaling::{Alarm, PolicyRecord, PolicySetResult};
pub use error::Error;
pub use iam::UserRecord;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
