//! Error types for validation failures
//!
//! All string fields use `Cow<'static, str>` so static codes and messages
//! never allocate.

use std::borrow::Cow;
use std::fmt;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured validation error produced by a single validator.
///
/// # Examples
///
/// ```rust,ignore
/// use bloom_validator::foundation::ValidationError;
///
/// let error = ValidationError::new("min_length", "String is too short")
///     .with_param("min", "3")
///     .with_param("actual", "2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error code for programmatic handling.
    ///
    /// Examples: "min_length", "one_of", "max_size"
    pub code: Cow<'static, str>,

    /// Human-readable error message.
    pub message: Cow<'static, str>,

    /// Parameters describing the failure, e.g. `[("min", "3"), ("actual", "2")]`.
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            params: Vec::new(),
        }
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Replaces the message, keeping code and params.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = message.into();
        self
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

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)?;

        if !self.params.is_empty() {
            write!(f, " (params: [")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, "])")?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// Creates a "min_length" error.
    pub fn min_length(min: usize, actual: usize) -> Self {
        Self::new("min_length", format!("Must be at least {min} characters"))
            .with_param("min", min.to_string())
            .with_param("actual", actual.to_string())
    }

    /// Creates a "max_length" error.
    pub fn max_length(max: usize, actual: usize) -> Self {
        Self::new("max_length", format!("Must be at most {max} characters"))
            .with_param("max", max.to_string())
            .with_param("actual", actual.to_string())
    }

    /// Creates a "one_of" error listing the allowed values.
    pub fn not_one_of(allowed: &[String], actual: &str) -> Self {
        Self::new(
            "one_of",
            format!("Must be one of: {}", allowed.join(", ")),
        )
        .with_param("allowed", allowed.join(","))
        .with_param("actual", actual.to_owned())
    }

    /// Creates a "min_size" error.
    pub fn min_size(min: usize, actual: usize) -> Self {
        Self::new("min_size", format!("Must select at least {min}"))
            .with_param("min", min.to_string())
            .with_param("actual", actual.to_string())
    }

    /// Creates a "max_size" error.
    pub fn max_size(max: usize, actual: usize) -> Self {
        Self::new("max_size", format!("Must select at most {max}"))
            .with_param("max", max.to_string())
            .with_param("actual", actual.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_error() {
        let error = ValidationError::new("test", "Test error");
        assert_eq!(error.code, "test");
        assert_eq!(error.message, "Test error");
    }

    #[test]
    fn test_error_with_params() {
        let error = ValidationError::min_length(3, 2);
        assert_eq!(error.param("min"), Some("3"));
        assert_eq!(error.param("actual"), Some("2"));
        assert_eq!(error.param("max"), None);
        assert_eq!(
            error.to_string(),
            "min_length: Must be at least 3 characters (params: [min=3, actual=2])"
        );
    }

    #[test]
    fn test_not_one_of_lists_allowed() {
        let allowed = vec!["S".to_owned(), "M".to_owned()];
        let error = ValidationError::not_one_of(&allowed, "X");
        assert_eq!(error.message, "Must be one of: S, M");
        assert_eq!(error.param("actual"), Some("X"));
    }

    #[test]
    fn test_with_message_keeps_code() {
        let error = ValidationError::max_length(20, 21).with_message("Too long");
        assert_eq!(error.code, "max_length");
        assert_eq!(error.message, "Too long");
        assert_eq!(error.param("max"), Some("20"));
    }

    #[test]
    fn test_zero_alloc_static_strings() {
        let error = ValidationError::new("one_of", "Must be one of the allowed values");
        assert!(matches!(error.code, Cow::Borrowed(_)));
        assert!(matches!(error.message, Cow::Borrowed(_)));
    }
}
