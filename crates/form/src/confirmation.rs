//! Confirmation text for an accepted order.

use crate::data::FormData;
use crate::size::SizeTable;

/// `"no toppings"`, `"1 topping"` or `"<n> toppings"`.
#[must_use]
pub fn topping_phrase(count: usize) -> String {
    match count {
        0 => "no toppings".to_owned(),
        1 => "1 topping".to_owned(),
        n => format!("{n} toppings"),
    }
}

/// Renders the thank-you message for `data`.
///
/// A size code missing from `sizes` is echoed as-is; the controller only
/// calls this for orders that passed validation.
#[must_use]
pub fn confirmation_message(data: &FormData, sizes: &SizeTable) -> String {
    let size_word = sizes.word(&data.size).unwrap_or(&data.size);
    format!(
        "Thank you for your order, {}! Your {} pizza with {} is on the way.",
        data.full_name,
        size_word,
        topping_phrase(data.toppings.len())
    )
}
