//! # bloom-validator
//!
//! A small, composable validation engine for Bloom order forms.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use bloom_validator::prelude::*;
//!
//! let rules = RuleSet::builder()
//!     .field(
//!         FieldSpec::text("fullName")
//!             .required("Full name is required")
//!             .min_length(3, "Full name must be at least 3 characters")
//!             .max_length(20, "Full name must be at most 20 characters"),
//!     )
//!     .build()?;
//!
//! let errors = rules.validate(&form_data);
//! assert!(errors.is_empty());
//! ```
//!
//! ## Layers
//!
//! - [`foundation`]: the [`Validate`](foundation::Validate) trait and
//!   [`ValidationError`](foundation::ValidationError).
//! - [`validators`]: built-in checks ([`MinLength`](validators::MinLength),
//!   [`MaxLength`](validators::MaxLength), [`OneOf`](validators::OneOf),
//!   [`MinSize`](validators::MinSize), [`MaxSize`](validators::MaxSize)).
//! - [`combinators`]: [`WithMessage`](combinators::WithMessage), which gives
//!   each rule its own wording.
//! - [`rules`]: declarative per-field constraints evaluated into an
//!   [`ErrorMap`](rules::ErrorMap), one message per failing field.

pub mod combinators;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod rules;
pub mod validators;
