//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use bloom_validator::prelude::*;
//!
//! let size = one_of(["S", "M", "L"]).with_message("Size must be S, M, or L");
//! ```

pub use crate::foundation::{Validate, ValidateExt, ValidationError};

pub use crate::validators::*;

pub use crate::combinators::WithMessage;

pub use crate::rules::{
    Constraint, ErrorKind, ErrorMap, FieldError, FieldKind, FieldSource, FieldSpec, FieldValue,
    RuleError, RuleSet, RuleSetBuilder,
};
