//! Declarative form rules
//!
//! A [`RuleSet`] is an ordered list of [`FieldSpec`]s. Evaluating it against
//! a [`FieldSource`] is a pure, total function producing an [`ErrorMap`] with
//! at most one [`FieldError`] per field.
//!
//! ```rust,ignore
//! use bloom_validator::rules::{FieldSpec, RuleSet};
//!
//! let rules = RuleSet::builder()
//!     .field(FieldSpec::single_select("size")
//!         .required("Size is required")
//!         .one_of(["S", "M", "L"], "Size must be S, M, or L"))
//!     .field(FieldSpec::multi_select("toppings"))
//!     .build()?;
//! ```

mod engine;
mod error_map;
mod source;
mod spec;

pub use engine::{RuleSet, RuleSetBuilder};
pub use error_map::{ErrorKind, ErrorMap, FieldError};
pub use source::{FieldKind, FieldSource, FieldValue};
pub use spec::{Constraint, FieldSpec};

/// Error raised while assembling a [`RuleSet`].
///
/// Evaluation itself never fails; every fault is caught at build time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    /// Two specs share a field name.
    #[error("field `{field}` is declared more than once")]
    DuplicateField { field: String },

    /// A constraint was attached to a field whose values it cannot check.
    #[error("constraint `{constraint}` does not apply to {kind} field `{field}`")]
    KindMismatch {
        field: String,
        kind: FieldKind,
        constraint: String,
    },
}

impl RuleError {
    /// Machine-readable error code for programmatic handling.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::DuplicateField { .. } => "RULE_DUPLICATE_FIELD",
            Self::KindMismatch { .. } => "RULE_KIND_MISMATCH",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let err = RuleError::DuplicateField {
            field: "size".into(),
        };
        assert_eq!(err.to_string(), "field `size` is declared more than once");
        assert_eq!(err.code(), "RULE_DUPLICATE_FIELD");

        let err = RuleError::KindMismatch {
            field: "toppings".into(),
            kind: FieldKind::MultiSelect,
            constraint: "too_short".into(),
        };
        assert_eq!(
            err.to_string(),
            "constraint `too_short` does not apply to multi-select field `toppings`"
        );
        assert_eq!(err.code(), "RULE_KIND_MISMATCH");
    }
}
