//! Built-in validators
//!
//! - **String**: length bounds
//! - **Single-select**: membership in a fixed set
//! - **Multi-select**: selection count bounds
//!
//! ```rust,ignore
//! use bloom_validator::prelude::*;
//!
//! let full_name = min_length(3).with_message("Full name must be at least 3 characters");
//! let size = one_of(["S", "M", "L"]);
//! let toppings = max_size::<String>(5);
//! ```

pub mod length;
pub mod membership;
pub mod size;

pub use length::{MaxLength, MinLength, max_length, min_length, text_length};
pub use membership::{OneOf, one_of};
pub use size::{MaxSize, MinSize, max_size, min_size};
