//! Enumeration membership validator
//!
//! Single-select fields accept exactly one value from a fixed set.

use crate::foundation::ValidationError;

crate::validator! {
    /// Validates that a string is one of a fixed set of values.
    ///
    /// Comparison is exact and case-sensitive.
    #[derive(PartialEq, Eq)]
    pub OneOf { allowed: Vec<String> } for str;
    rule(self, input) { self.allowed.iter().any(|a| a.as_str() == input) }
    error(self, input) { ValidationError::not_one_of(&self.allowed, input) }
    new(allowed: impl IntoIterator<Item = impl Into<String>>) {
        Self {
            allowed: allowed.into_iter().map(Into::into).collect(),
        }
    }
    fn one_of(allowed: impl IntoIterator<Item = impl Into<String>>);
}
