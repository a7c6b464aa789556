//! Construction-time errors.
//!
//! A running form reports problems through its
//! [`ErrorMap`](bloom_validator::rules::ErrorMap); these types only cover
//! bad configuration and unknown field names.

use bloom_validator::rules::RuleError;

/// Error type for loading and checking static form configuration.
///
/// Only raised while a [`FormController`](crate::controller::FormController)
/// is being constructed; a running form never fails.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration document is not valid JSON for [`FormConfig`](crate::config::FormConfig).
    #[error("invalid form configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two toppings share an id.
    #[error("duplicate topping id `{id}`")]
    DuplicateToppingId { id: String },

    /// Two toppings share a label. Labels are the stored values, so they must be unique.
    #[error("duplicate topping label `{label}`")]
    DuplicateToppingLabel { label: String },

    /// A topping has an empty label.
    #[error("topping `{id}` has an empty label")]
    EmptyToppingLabel { id: String },

    /// Two sizes share a code.
    #[error("duplicate size code `{code}`")]
    DuplicateSize { code: String },

    /// A size has an empty code, which would collide with "nothing selected".
    #[error("size codes must not be empty")]
    EmptySizeCode,

    /// No sizes are configured, so no order could ever be valid.
    #[error("size table is empty")]
    EmptySizes,

    /// The derived rule set could not be built.
    #[error(transparent)]
    Rules(#[from] RuleError),
}

impl ConfigError {
    /// Machine-readable error code for programmatic handling.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::Parse(_) => "CONFIG_PARSE",
            Self::DuplicateToppingId { .. } => "CONFIG_DUPLICATE_TOPPING_ID",
            Self::DuplicateToppingLabel { .. } => "CONFIG_DUPLICATE_TOPPING_LABEL",
            Self::EmptyToppingLabel { .. } => "CONFIG_EMPTY_TOPPING_LABEL",
            Self::DuplicateSize { .. } => "CONFIG_DUPLICATE_SIZE",
            Self::EmptySizeCode => "CONFIG_EMPTY_SIZE_CODE",
            Self::EmptySizes => "CONFIG_EMPTY_SIZES",
            Self::Rules(_) => "CONFIG_RULES",
        }
    }
}

/// A field name that is not part of the order form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown form field `{0}`")]
pub struct UnknownField(pub String);
