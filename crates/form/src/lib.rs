//! # bloom-form
//!
//! The Bloom pizza order form as an explicit state machine: current field
//! values, touched fields, the derived error map, and the submit/reset
//! lifecycle. Rendering and routing live elsewhere; a view layer drives
//! [`FormController`](controller::FormController) with [`FormEvent`](event::FormEvent)s and reads its
//! state back.
//!
//! ```rust,ignore
//! use bloom_form::prelude::*;
//!
//! let mut form = FormController::with_defaults()?;
//! form.set_field_value(Field::FullName, "Mollusk");
//! form.set_field_value(Field::Size, "L");
//! assert!(form.submit_enabled());
//!
//! let message = form.submit().unwrap();
//! assert_eq!(
//!     message,
//!     "Thank you for your order, Mollusk! Your large pizza with no toppings is on the way."
//! );
//! ```

pub mod catalog;
pub mod config;
pub mod confirmation;
pub mod controller;
pub mod data;
pub mod error;
pub mod event;
pub mod field;
pub mod schema;
pub mod size;

pub mod prelude {
    pub use crate::catalog::{Topping, ToppingCatalog};
    pub use crate::config::FormConfig;
    pub use crate::confirmation::{confirmation_message, topping_phrase};
    pub use crate::controller::FormController;
    pub use crate::data::FormData;
    pub use crate::error::{ConfigError, UnknownField};
    pub use crate::event::FormEvent;
    pub use crate::field::{Field, TouchedSet};
    pub use crate::schema::order_rules;
    pub use crate::size::{SizeOption, SizeTable};

    pub use bloom_validator::rules::{ErrorKind, ErrorMap, FieldError};
}
