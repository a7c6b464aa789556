//! Pizza sizes: the code stored by the form and the word used in confirmations.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// One entry of the size enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SizeOption {
    /// Value stored in [`FormData::size`](crate::data::FormData::size), e.g. `"L"`.
    pub code: String,

    /// Word used in the confirmation message, e.g. `"large"`.
    pub word: String,
}

impl SizeOption {
    #[must_use]
    pub fn new(code: impl Into<String>, word: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            word: word.into(),
        }
    }
}

/// The ordered size enumeration and its confirmation words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SizeTable {
    options: Vec<SizeOption>,
}

impl SizeTable {
    /// Builds a table, rejecting empty tables, empty codes and duplicate codes.
    pub fn new(options: Vec<SizeOption>) -> Result<Self, ConfigError> {
        let table = Self { options };
        table.validate()?;
        Ok(table)
    }

    /// Checks the table invariants. Needed after deserialization.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.options.is_empty() {
            return Err(ConfigError::EmptySizes);
        }
        let mut codes = HashSet::new();
        for option in &self.options {
            if option.code.is_empty() {
                return Err(ConfigError::EmptySizeCode);
            }
            if !codes.insert(option.code.as_str()) {
                return Err(ConfigError::DuplicateSize {
                    code: option.code.clone(),
                });
            }
        }
        Ok(())
    }

    /// The confirmation word for `code`.
    #[must_use]
    pub fn word(&self, code: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.code == code)
            .map(|o| o.word.as_str())
    }

    /// Valid codes, in order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.options.iter().map(|o| o.code.as_str())
    }

    #[must_use]
    pub fn options(&self) -> &[SizeOption] {
        &self.options
    }

    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.word(code).is_some()
    }
}

impl Default for SizeTable {
    fn default() -> Self {
        Self {
            options: vec![
                SizeOption::new("S", "small"),
                SizeOption::new("M", "medium"),
                SizeOption::new("L", "large"),
            ],
        }
    }
}
