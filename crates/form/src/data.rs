//! The mutable order value.

use bloom_validator::rules::{FieldSource, FieldValue};
use serde::{Deserialize, Serialize};

use crate::field::Field;

/// Current contents of the order form.
///
/// `toppings` keeps insertion order for display and never holds duplicates;
/// [`FormController`](crate::controller::FormController) only ever toggles
/// catalog labels into it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormData {
    pub full_name: String,
    /// A size code, or empty while nothing is selected.
    pub size: String,
    pub toppings: Vec<String>,
}

impl FormData {
    /// Borrowed value of `field`.
    #[must_use]
    pub fn value(&self, field: Field) -> FieldValue<'_> {
        match field {
            Field::FullName => FieldValue::Scalar(&self.full_name),
            Field::Size => FieldValue::Scalar(&self.size),
            Field::Toppings => FieldValue::Many(&self.toppings),
        }
    }

    #[must_use]
    pub fn has_topping(&self, label: &str) -> bool {
        self.toppings.iter().any(|t| t == label)
    }
}

impl FieldSource for FormData {
    fn field_value(&self, name: &str) -> Option<FieldValue<'_>> {
        name.parse::<Field>().ok().map(|field| self.value(field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        let data = FormData::default();
        assert!(data.value(Field::FullName).is_empty());
        assert!(data.value(Field::Size).is_empty());
        assert!(data.value(Field::Toppings).is_empty());
    }

    #[test]
    fn exposes_fields_by_wire_name() {
        let data = FormData {
            full_name: "Mollusk".into(),
            size: "L".into(),
            toppings: vec!["Ham".into()],
        };
        assert_eq!(
            data.field_value("fullName"),
            Some(FieldValue::Scalar("Mollusk"))
        );
        assert_eq!(data.field_value("size"), Some(FieldValue::Scalar("L")));
        assert!(matches!(
            data.field_value("toppings"),
            Some(FieldValue::Many(items)) if items == ["Ham".to_owned()]
        ));
        assert_eq!(data.field_value("email"), None);
        assert!(data.has_topping("Ham"));
        assert!(!data.has_topping("Pepperoni"));
    }

    #[test]
    fn serializes_camel_case() {
        let data = FormData {
            full_name: "Fish".into(),
            size: "S".into(),
            toppings: vec![],
        };
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "fullName": "Fish", "size": "S", "toppings": [] })
        );
    }
}
