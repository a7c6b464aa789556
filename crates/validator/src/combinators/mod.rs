//! Validator combinators
//!
//! [`WithMessage`] attaches a rule's own wording to a built-in validator.
//! [`ValidateExt::with_message`](crate::foundation::ValidateExt::with_message)
//! is the usual way to build one.

pub mod message;

pub use message::WithMessage;
