//! The validator trait and its extension methods.

use std::borrow::Cow;

use crate::combinators::WithMessage;
use crate::foundation::ValidationError;

/// A single check over a borrowed input.
///
/// `Input` is usually unsized: `str` for text and single-select values,
/// `[String]` for multi-select values. Keeping it an associated type means
/// a length check can never be attached to a selection list.
pub trait Validate {
    type Input: ?Sized;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

/// Builder-style helpers available on every [`Validate`] type.
pub trait ValidateExt: Validate + Sized {
    /// Wraps `self` so failures report `message`.
    fn with_message(self, message: impl Into<Cow<'static, str>>) -> WithMessage<Self> {
        WithMessage::new(self, message)
    }
}

impl<T: Validate> ValidateExt for T {}

#[cfg(test)]
mod tests {
    use super::*;

    struct Uppercase;

    impl Validate for Uppercase {
        type Input = str;

        fn validate(&self, input: &str) -> Result<(), ValidationError> {
            if input.chars().all(|c| !c.is_lowercase()) {
                Ok(())
            } else {
                Err(ValidationError::new("uppercase", "must be uppercase"))
            }
        }
    }

    #[test]
    fn boxed_validator_delegates() {
        let boxed: Box<dyn Validate<Input = str>> = Box::new(Uppercase);
        assert!(boxed.validate("XL").is_ok());
        assert_eq!(boxed.validate("xl").unwrap_err().code, "uppercase");
    }

    #[test]
    fn with_message_is_available_on_custom_validators() {
        let err = Uppercase
            .with_message("Size codes are uppercase")
            .validate("m")
            .unwrap_err();
        assert_eq!(err.message, "Size codes are uppercase");
    }
}
