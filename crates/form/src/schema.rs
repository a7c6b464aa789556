//! The order form's rule set.

use bloom_validator::rules::{FieldSpec, RuleError, RuleSet};

use crate::field::Field;
use crate::size::SizeTable;

/// Shortest accepted name, in characters.
pub const FULL_NAME_MIN: usize = 3;
/// Longest accepted name, in characters.
pub const FULL_NAME_MAX: usize = 20;

pub const FULL_NAME_REQUIRED: &str = "Full name is required";
pub const FULL_NAME_TOO_SHORT: &str = "Full name must be at least 3 characters";
pub const FULL_NAME_TOO_LONG: &str = "Full name must be at most 20 characters";
pub const SIZE_REQUIRED: &str = "Size is required";

/// `"Size must be S, M, or L"` for the default table.
#[must_use]
pub fn size_invalid_message(sizes: &SizeTable) -> String {
    let codes: Vec<&str> = sizes.codes().collect();
    let list = match codes.as_slice() {
        [] => String::new(),
        [only] => (*only).to_owned(),
        [first, second] => format!("{first} or {second}"),
        [init @ .., last] => format!("{}, or {last}", init.join(", ")),
    };
    format!("Size must be {list}")
}

/// Builds the rules for `fullName`, `size` and `toppings`.
///
/// Toppings carry no constraint: any number of catalog toppings is valid.
pub fn order_rules(sizes: &SizeTable) -> Result<RuleSet, RuleError> {
    RuleSet::builder()
        .field(
            FieldSpec::text(Field::FullName.as_str())
                .required(FULL_NAME_REQUIRED)
                .min_length(FULL_NAME_MIN, FULL_NAME_TOO_SHORT)
                .max_length(FULL_NAME_MAX, FULL_NAME_TOO_LONG),
        )
        .field(
            FieldSpec::single_select(Field::Size.as_str())
                .required(SIZE_REQUIRED)
                .one_of(sizes.codes(), size_invalid_message(sizes)),
        )
        .field(FieldSpec::multi_select(Field::Toppings.as_str()))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::FormData;
    use crate::size::SizeOption;
    use bloom_validator::rules::ErrorKind;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn data(full_name: &str, size: &str) -> FormData {
        FormData {
            full_name: full_name.into(),
            size: size.into(),
            toppings: vec![],
        }
    }

    #[test]
    fn invalid_size_message_lists_codes() {
        assert_eq!(
            size_invalid_message(&SizeTable::default()),
            "Size must be S, M, or L"
        );
        let two = SizeTable::new(vec![SizeOption::new("S", "small"), SizeOption::new("L", "large")])
            .unwrap();
        assert_eq!(size_invalid_message(&two), "Size must be S or L");
        let one = SizeTable::new(vec![SizeOption::new("P", "personal")]).unwrap();
        assert_eq!(size_invalid_message(&one), "Size must be P");
    }

    #[rstest]
    #[case("", ErrorKind::Required, FULL_NAME_REQUIRED)]
    #[case("1", ErrorKind::TooShort, FULL_NAME_TOO_SHORT)]
    #[case("12", ErrorKind::TooShort, FULL_NAME_TOO_SHORT)]
    #[case("123456789012345678901", ErrorKind::TooLong, FULL_NAME_TOO_LONG)]
    fn full_name_failures(#[case] name: &str, #[case] kind: ErrorKind, #[case] message: &str) {
        let rules = order_rules(&SizeTable::default()).unwrap();
        let errors = rules.validate(&data(name, "M"));
        let error = errors.get("fullName").unwrap();
        assert_eq!(error.kind, kind);
        assert_eq!(error.message, message);
        assert!(!errors.contains("size"));
    }

    #[rstest]
    #[case("", ErrorKind::Required, "Size is required")]
    #[case("XL", ErrorKind::InvalidEnum, "Size must be S, M, or L")]
    #[case("s", ErrorKind::InvalidEnum, "Size must be S, M, or L")]
    fn size_failures(#[case] size: &str, #[case] kind: ErrorKind, #[case] message: &str) {
        let rules = order_rules(&SizeTable::default()).unwrap();
        let errors = rules.validate(&data("Mollusk", size));
        let error = errors.get("size").unwrap();
        assert_eq!(error.kind, kind);
        assert_eq!(error.message, message);
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn valid_order_has_no_errors() {
        let rules = order_rules(&SizeTable::default()).unwrap();
        let mut order = data("Mollusk", "L");
        assert!(rules.validate(&order).is_empty());
        order.toppings = vec!["Ham".into(), "Pineapple".into()];
        assert!(rules.validate(&order).is_empty());
    }

    #[test]
    fn errors_follow_field_order() {
        let rules = order_rules(&SizeTable::default()).unwrap();
        let errors = rules.validate(&FormData::default());
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["fullName", "size"]);
    }
}
