//! Static form configuration.
//!
//! Both tables are immutable lookups supplied when a form is constructed.
//! The defaults are the stock Bloom menu; [`FormConfig::from_json`] loads an
//! alternative menu:
//!
//! ```json
//! {
//!   "toppings": [{ "id": "1", "label": "Olives" }],
//!   "sizes": [{ "code": "S", "word": "small" }, { "code": "L", "word": "large" }]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::catalog::ToppingCatalog;
use crate::error::ConfigError;
use crate::size::SizeTable;

/// Topping catalog and size table for one form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormConfig {
    /// Missing from JSON means the stock catalog.
    #[serde(default)]
    pub toppings: ToppingCatalog,

    /// Missing from JSON means S, M and L.
    #[serde(default)]
    pub sizes: SizeTable,
}

impl FormConfig {
    /// Creates a configuration from already-checked tables.
    #[must_use]
    pub fn new(toppings: ToppingCatalog, sizes: SizeTable) -> Self {
        Self { toppings, sizes }
    }

    /// Parses and checks a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks both tables.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.toppings.validate()?;
        self.sizes.validate()
    }
}
