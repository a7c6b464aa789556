//! Order form fields and the touched-field set.

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;
use bloom_validator::rules::FieldKind;
use serde::{Deserialize, Serialize};

use crate::error::UnknownField;

/// One independently validated unit of order data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FullName,
    Size,
    Toppings,
}

impl Field {
    /// Every field, in form order.
    pub const ALL: [Self; 3] = [Self::FullName, Self::Size, Self::Toppings];

    /// The wire name used for error map keys and view bindings.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Size => "size",
            Self::Toppings => "toppings",
        }
    }

    /// The shape of this field's value.
    #[must_use]
    pub fn kind(self) -> FieldKind {
        match self {
            Self::FullName => FieldKind::Text,
            Self::Size => FieldKind::SingleSelect,
            Self::Toppings => FieldKind::MultiSelect,
        }
    }

    fn flag(self) -> TouchedSet {
        match self {
            Self::FullName => TouchedSet::FULL_NAME,
            Self::Size => TouchedSet::SIZE,
            Self::Toppings => TouchedSet::TOPPINGS,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_owned()))
    }
}

bitflags! {
    /// Fields the user has blurred since the last reset.
    ///
    /// Only gates whether an error is shown; validity never depends on it.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TouchedSet: u8 {
        const FULL_NAME = 0b0000_0001;
        const SIZE = 0b0000_0010;
        const TOPPINGS = 0b0000_0100;
    }
}

impl TouchedSet {
    /// Marks `field` as touched.
    pub fn mark(&mut self, field: Field) {
        self.insert(field.flag());
    }

    /// Whether `field` has been touched.
    #[must_use]
    pub fn has(&self, field: Field) -> bool {
        self.contains(field.flag())
    }

    /// Touched fields, in form order.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        Field::ALL.into_iter().filter(|field| self.has(*field))
    }
}

impl From<Field> for TouchedSet {
    fn from(field: Field) -> Self {
        field.flag()
    }
}
