//! Field kinds and the read-only view the engine evaluates.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The shape of a form field's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Free text input.
    Text,
    /// Exactly one value from a fixed set, or nothing selected yet.
    SingleSelect,
    /// Any number of values from a fixed catalog.
    MultiSelect,
}

impl FieldKind {
    /// Stable lowercase name, used in logs and error messages.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::SingleSelect => "single-select",
            Self::MultiSelect => "multi-select",
        }
    }

    /// Whether a value of this shape is a single string.
    #[must_use]
    pub fn is_scalar(self) -> bool {
        !matches!(self, Self::MultiSelect)
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A borrowed field value handed to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    /// Text and single-select fields.
    Scalar(&'a str),
    /// Multi-select fields.
    Many(&'a [String]),
}

impl FieldValue<'_> {
    /// Empty text, no selection, or an empty multi-selection.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Scalar(s) => s.is_empty(),
            Self::Many(items) => items.is_empty(),
        }
    }

    /// Whether this value has the shape `kind` expects.
    #[must_use]
    pub fn fits(&self, kind: FieldKind) -> bool {
        match self {
            Self::Scalar(_) => kind.is_scalar(),
            Self::Many(_) => !kind.is_scalar(),
        }
    }
}

/// Anything that can expose its fields by name to a [`RuleSet`](super::RuleSet).
///
/// Returning `None` for a declared field is treated as an empty value.
pub trait FieldSource {
    /// Looks up the current value of the field called `name`.
    fn field_value(&self, name: &str) -> Option<FieldValue<'_>>;
}

impl<S: FieldSource + ?Sized> FieldSource for &S {
    fn field_value(&self, name: &str) -> Option<FieldValue<'_>> {
        (**self).field_value(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emptiness() {
        assert!(FieldValue::Scalar("").is_empty());
        assert!(!FieldValue::Scalar("S").is_empty());
        assert!(FieldValue::Many(&[]).is_empty());
        assert!(!FieldValue::Many(&["Ham".to_owned()]).is_empty());
    }

    #[test]
    fn test_fits_kind() {
        assert!(FieldValue::Scalar("x").fits(FieldKind::Text));
        assert!(FieldValue::Scalar("x").fits(FieldKind::SingleSelect));
        assert!(!FieldValue::Scalar("x").fits(FieldKind::MultiSelect));
        assert!(FieldValue::Many(&[]).fits(FieldKind::MultiSelect));
        assert!(!FieldValue::Many(&[]).fits(FieldKind::Text));
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(FieldKind::SingleSelect.to_string(), "single-select");
        assert_eq!(
            serde_json::to_string(&FieldKind::MultiSelect).unwrap(),
            "\"multi_select\""
        );
    }
}
