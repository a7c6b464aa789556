//! Collection size validators
//!
//! Bound how many options a multi-select field may hold.

use std::marker::PhantomData;

use crate::foundation::{Validate, ValidationError};

// ============================================================================
// MIN SIZE
// ============================================================================

/// Validates that a collection has at least a minimum size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MinSize<T> {
    min: usize,
    _phantom: PhantomData<T>,
}

impl<T> Validate for MinSize<T> {
    type Input = [T];

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if input.len() >= self.min {
            Ok(())
        } else {
            Err(ValidationError::min_size(self.min, input.len()))
        }
    }
}

/// Creates a validator that checks if a collection has at least a minimum size.
#[must_use]
pub fn min_size<T>(min: usize) -> MinSize<T> {
    MinSize {
        min,
        _phantom: PhantomData,
    }
}

// ============================================================================
// MAX SIZE
// ============================================================================

/// Validates that a collection has at most a maximum size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaxSize<T> {
    max: usize,
    _phantom: PhantomData<T>,
}

impl<T> Validate for MaxSize<T> {
    type Input = [T];

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if input.len() <= self.max {
            Ok(())
        } else {
            Err(ValidationError::max_size(self.max, input.len()))
        }
    }
}

/// Creates a validator that checks if a collection has at most a maximum size.
#[must_use]
pub fn max_size<T>(max: usize) -> MaxSize<T> {
    MaxSize {
        max,
        _phantom: PhantomData,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_size() {
        let validator = min_size::<String>(1);
        assert!(validator.validate(&["Ham".to_owned()]).is_ok());
        let err = validator.validate(&[]).unwrap_err();
        assert_eq!(err.code, "min_size");
    }

    #[test]
    fn test_max_size() {
        let validator = max_size::<i32>(2);
        assert!(validator.validate(&[1, 2]).is_ok());
        let err = validator.validate(&[1, 2, 3]).unwrap_err();
        assert_eq!(err.param("actual"), Some("3"));
    }
}
