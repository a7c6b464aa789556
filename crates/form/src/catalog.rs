//! The topping catalog: selectable add-ons with a stable id and a display label.
//!
//! The label, not the id, is what an order stores and what the confirmation
//! counts, so labels must be unique too.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// One selectable topping.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Topping {
    /// Stable machine-readable key, e.g. for checkbox element ids.
    pub id: String,

    /// Display label; the value stored in [`FormData::toppings`](crate::data::FormData::toppings).
    pub label: String,
}

impl Topping {
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// The static list of toppings a form offers, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToppingCatalog {
    entries: Vec<Topping>,
}

impl ToppingCatalog {
    /// Builds a catalog, rejecting duplicate ids, duplicate labels and empty labels.
    pub fn new(entries: Vec<Topping>) -> Result<Self, ConfigError> {
        let catalog = Self { entries };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Checks the catalog invariants. Needed after deserialization.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut ids = HashSet::new();
        let mut labels = HashSet::new();
        for topping in &self.entries {
            if topping.label.is_empty() {
                return Err(ConfigError::EmptyToppingLabel {
                    id: topping.id.clone(),
                });
            }
            if !ids.insert(topping.id.as_str()) {
                return Err(ConfigError::DuplicateToppingId {
                    id: topping.id.clone(),
                });
            }
            if !labels.insert(topping.label.as_str()) {
                return Err(ConfigError::DuplicateToppingLabel {
                    label: topping.label.clone(),
                });
            }
        }
        Ok(())
    }

    /// All toppings in display order.
    #[must_use]
    pub fn entries(&self) -> &[Topping] {
        &self.entries
    }

    /// Looks up a topping by id.
    #[must_use]
    pub fn by_id(&self, id: &str) -> Option<&Topping> {
        self.entries.iter().find(|t| t.id == id)
    }

    /// Looks up a topping by label.
    #[must_use]
    pub fn by_label(&self, label: &str) -> Option<&Topping> {
        self.entries.iter().find(|t| t.label == label)
    }

    /// Whether `label` names a topping in this catalog.
    #[must_use]
    pub fn contains_label(&self, label: &str) -> bool {
        self.by_label(label).is_some()
    }

    /// Labels in display order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|t| t.label.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ToppingCatalog {
    fn default() -> Self {
        Self {
            entries: vec![
                Topping::new("1", "Pepperoni"),
                Topping::new("2", "Green Peppers"),
                Topping::new("3", "Pineapple"),
                Topping::new("4", "Mushrooms"),
                Topping::new("5", "Ham"),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog() {
        let catalog = ToppingCatalog::default();
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.len(), 5);
        assert_eq!(
            catalog.labels().collect::<Vec<_>>(),
            vec!["Pepperoni", "Green Peppers", "Pineapple", "Mushrooms", "Ham"]
        );
    }

    #[test]
    fn lookup_by_id_and_label() {
        let catalog = ToppingCatalog::default();
        assert_eq!(catalog.by_id("3").map(|t| t.label.as_str()), Some("Pineapple"));
        assert_eq!(catalog.by_label("Ham").map(|t| t.id.as_str()), Some("5"));
        assert!(catalog.contains_label("Mushrooms"));
        assert!(!catalog.contains_label("Anchovies"));
        assert!(!catalog.contains_label("5"));
        assert!(catalog.by_id("Ham").is_none());
    }

    #[test]
    fn rejects_duplicate_id() {
        let err = ToppingCatalog::new(vec![Topping::new("1", "Ham"), Topping::new("1", "Olives")])
            .unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateToppingId { id } if id == "1"));
    }

    #[test]
    fn rejects_duplicate_label() {
        let err = ToppingCatalog::new(vec![Topping::new("1", "Ham"), Topping::new("2", "Ham")])
            .unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateToppingLabel { label } if label == "Ham"));
    }

    #[test]
    fn rejects_empty_label() {
        let err = ToppingCatalog::new(vec![Topping::new("9", "")]).unwrap_err();
        assert_eq!(err.code(), "CONFIG_EMPTY_TOPPING_LABEL");
    }

    #[test]
    fn serializes_as_list() {
        let catalog = ToppingCatalog::new(vec![Topping::new("a", "Olives")]).unwrap();
        let json = serde_json::to_string(&catalog).unwrap();
        assert_eq!(json, r#"[{"id":"a","label":"Olives"}]"#);
    }
}
