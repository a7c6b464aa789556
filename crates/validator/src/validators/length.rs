//! String length validators
//!
//! Length is measured in UTF-16 code units, the unit browsers report for
//! text inputs. "Zoë" has length 3; an emoji outside the Basic Multilingual
//! Plane counts as 2.

use crate::foundation::ValidationError;

/// Measures a string the way every length validator in this module does.
#[inline]
pub fn text_length(input: &str) -> usize {
    input.encode_utf16().count()
}

// ============================================================================
// MIN LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a string has at least a minimum length.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinLength { min: usize } for str;
    rule(self, input) { text_length(input) >= self.min }
    error(self, input) { ValidationError::min_length(self.min, text_length(input)) }
    fn min_length(min: usize);
}

// ============================================================================
// MAX LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a string does not exceed a maximum length.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxLength { max: usize } for str;
    rule(self, input) { text_length(input) <= self.max }
    error(self, input) { ValidationError::max_length(self.max, text_length(input)) }
    fn max_length(max: usize);
}
