//! Field-level error kinds and the per-form error map.

use std::borrow::Cow;
use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::foundation::ValidationError;

/// Why a field failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The field is required and empty.
    Required,
    /// Text shorter than the minimum length.
    TooShort,
    /// Text longer than the maximum length.
    TooLong,
    /// Value outside the allowed enumeration.
    InvalidEnum,
    /// Fewer selections than the minimum.
    TooFewSelections,
    /// More selections than the maximum.
    TooManySelections,
}

impl ErrorKind {
    /// Machine-readable code for programmatic handling.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::TooShort => "too_short",
            Self::TooLong => "too_long",
            Self::InvalidEnum => "invalid_enum",
            Self::TooFewSelections => "too_few_selections",
            Self::TooManySelections => "too_many_selections",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// The single error reported for one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Error classification.
    pub kind: ErrorKind,

    /// Message shown to the user.
    pub message: Cow<'static, str>,

    /// Details from the failing validator, e.g. `[("min", "3"), ("actual", "2")]`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl FieldError {
    /// Creates an error without params.
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            params: Vec::new(),
        }
    }

    /// Classifies a validator failure, keeping its message and params.
    pub fn from_validation(kind: ErrorKind, source: ValidationError) -> Self {
        Self {
            kind,
            message: source.message,
            params: source.params,
        }
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

/// Failing fields mapped to their single current error.
///
/// A field absent from the map is valid. Iteration follows the order the
/// fields were declared in the [`RuleSet`](super::RuleSet).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorMap {
    errors: IndexMap<Cow<'static, str>, FieldError>,
}

impl ErrorMap {
    /// Creates an empty (fully valid) map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the error for `field`, replacing any previous one.
    pub fn insert(&mut self, field: impl Into<Cow<'static, str>>, error: FieldError) {
        self.errors.insert(field.into(), error);
    }

    /// The error for `field`, if it currently fails.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&FieldError> {
        self.errors.get(field)
    }

    /// The message for `field`, if it currently fails.
    #[must_use]
    pub fn message(&self, field: &str) -> Option<&str> {
        self.get(field).map(|e| e.message.as_ref())
    }

    /// Whether `field` currently fails.
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    /// Whether every field passes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of failing fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Names of the failing fields, in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(AsRef::as_ref)
    }

    /// Failing fields with their errors, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldError)> {
        self.errors.iter().map(|(k, v)| (k.as_ref(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_map_is_valid() {
        let map = ErrorMap::new();
        assert!(map.is_empty());
        assert_eq!(map.len(), 0);
        assert!(map.get("fullName").is_none());
    }

    #[test]
    fn test_insert_and_lookup() {
        let mut map = ErrorMap::new();
        map.insert("size", FieldError::new(ErrorKind::Required, "Size is required"));
        map.insert(
            "fullName",
            FieldError::new(ErrorKind::TooShort, "Full name must be at least 3 characters"),
        );

        assert!(map.contains("size"));
        assert_eq!(map.message("size"), Some("Size is required"));
        assert_eq!(map.get("fullName").map(|e| e.kind), Some(ErrorKind::TooShort));
        assert_eq!(map.fields().collect::<Vec<_>>(), vec!["size", "fullName"]);
    }

    #[test]
    fn test_from_validation_keeps_params() {
        let error = FieldError::from_validation(
            ErrorKind::TooLong,
            ValidationError::max_length(20, 25)
                .with_message("Full name must be at most 20 characters"),
        );
        assert_eq!(error.param("actual"), Some("25"));
        assert_eq!(
            error.to_string(),
            "too_long: Full name must be at most 20 characters"
        );
    }

    #[test]
    fn test_serializes_as_object() {
        let mut map = ErrorMap::new();
        map.insert("size", FieldError::new(ErrorKind::InvalidEnum, "Size must be S, M, or L"));
        let json = serde_json::to_value(&map).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "size": { "kind": "invalid_enum", "message": "Size must be S, M, or L" }
            })
        );
    }
}
