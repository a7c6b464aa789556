//! Core validation types and traits
//!
//! - [`Validate`]: one check over a borrowed input
//! - [`ValidateExt`]: `with_message` on every validator
//! - [`ValidationError`]: code, message and params of a single failure

pub mod error;
pub mod traits;

pub use error::ValidationError;
pub use traits::{Validate, ValidateExt};
