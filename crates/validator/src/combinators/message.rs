//! Rule-specific failure messages.

use std::borrow::Cow;

use crate::foundation::{Validate, ValidationError};

/// Runs `inner` and, on failure, swaps in a fixed message.
///
/// Code and params are left alone, so a form shows its own wording while
/// the failure stays machine-readable. Every [`Constraint`](crate::rules::Constraint)
/// wraps its validator this way.
#[derive(Debug, Clone)]
pub struct WithMessage<V> {
    inner: V,
    message: Cow<'static, str>,
}

impl<V> WithMessage<V> {
    pub fn new(inner: V, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            inner,
            message: message.into(),
        }
    }

    /// The wrapped validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl<V: Validate> Validate for WithMessage<V> {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match self.inner.validate(input) {
            Ok(()) => Ok(()),
            Err(failure) => Err(failure.with_message(self.message.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidateExt;
    use crate::validators::{max_size, min_length, one_of};

    #[test]
    fn swaps_message_keeps_code_and_params() {
        let name = min_length(3).with_message("Full name must be at least 3 characters");
        let err = name.validate("12").unwrap_err();
        assert_eq!(err.message, "Full name must be at least 3 characters");
        assert_eq!(err.code, "min_length");
        assert_eq!(err.param("actual"), Some("2"));
    }

    #[test]
    fn success_is_untouched() {
        let size = WithMessage::new(one_of(["S", "M", "L"]), "Size must be S, M, or L");
        assert!(size.validate("M").is_ok());
        assert_eq!(size.message(), "Size must be S, M, or L");
        assert_eq!(size.inner().allowed.len(), 3);
    }

    #[test]
    fn wraps_collection_validators() {
        let toppings = max_size::<String>(1).with_message("One topping only");
        let picked = vec!["Ham".to_owned(), "Pineapple".to_owned()];
        let err = toppings.validate(&picked).unwrap_err();
        assert_eq!(err.message, "One topping only");
        assert_eq!(err.code, "max_size");
    }
}
