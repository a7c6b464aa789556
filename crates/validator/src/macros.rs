//! Macros for declaring validators with minimal boilerplate.
//!
//! # Examples
//!
//! ```rust,ignore
//! use bloom_validator::validator;
//! use bloom_validator::foundation::ValidationError;
//!
//! validator! {
//!     #[derive(Copy, PartialEq, Eq, Hash)]
//!     pub MinLength { min: usize } for str;
//!     rule(self, input) { text_length(input) >= self.min }
//!     error(self, input) { ValidationError::min_length(self.min, text_length(input)) }
//!     fn min_length(min: usize);
//! }
//! ```

/// Creates a complete validator: struct definition, `Validate` implementation,
/// constructor, and factory function.
///
/// `#[derive(Debug, Clone)]` is always applied. Add extra derives via
/// `#[derive(...)]`.
///
/// # Variants
///
/// **Struct with fields** (auto `new` from all fields):
/// ```rust,ignore
/// validator! {
///     pub MaxLength { max: usize } for str;
///     rule(self, input) { text_length(input) <= self.max }
///     error(self, input) { ValidationError::max_length(self.max, text_length(input)) }
///     fn max_length(max: usize);
/// }
/// ```
///
/// **Custom constructor** (overrides auto `new`):
/// ```rust,ignore
/// validator! {
///     pub OneOf { allowed: Vec<String> } for str;
///     rule(self, input) { self.allowed.iter().any(|a| a == input) }
///     error(self, input) { ValidationError::not_one_of(&self.allowed, input) }
///     new(allowed: impl IntoIterator<Item = impl Into<String>>) {
///         Self { allowed: allowed.into_iter().map(Into::into).collect() }
///     }
///     fn one_of(allowed: impl IntoIterator<Item = impl Into<String>>);
/// }
/// ```
#[macro_export]
macro_rules! validator {
    // ── Shared `Validate` impl for struct validators ─────────────────────
    (@impl $name:ident, $input:ty, $self_:ident, $inp:ident, $rule:block, $einp:ident, $err:block) => {
        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };

    // ── Struct with fields + custom new + factory fn ─────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        $crate::validator!(@impl $name, $input, $self_, $inp, $rule, $einp, $err);

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Struct with fields + auto new + factory fn ───────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        $crate::validator!(@impl $name, $input, $self_, $inp, $rule, $einp, $err);

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };
}
