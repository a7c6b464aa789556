//! View events routed by [`FormController::dispatch`](crate::controller::FormController::dispatch).

use serde::{Deserialize, Serialize};

use crate::field::Field;

/// A named input event raised by the view layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FormEvent {
    /// A text input changed.
    TextChanged { field: Field, value: String },

    /// A select changed.
    SelectChanged { field: Field, value: String },

    /// A topping checkbox was toggled. `label` is the catalog label.
    CheckboxToggled { label: String, checked: bool },

    /// A topping checkbox keyed by catalog id was toggled.
    CheckboxToggledById { id: String, checked: bool },

    /// A field lost focus.
    Blurred { field: Field },

    /// The user pressed submit.
    SubmitAttempted,
}

impl FormEvent {
    /// The field this event is about, if any.
    #[must_use]
    pub fn field(&self) -> Option<Field> {
        match self {
            Self::TextChanged { field, .. }
            | Self::SelectChanged { field, .. }
            | Self::Blurred { field } => Some(*field),
            Self::CheckboxToggled { .. } | Self::CheckboxToggledById { .. } => {
                Some(Field::Toppings)
            }
            Self::SubmitAttempted => None,
        }
    }

    /// Whether this event can change [`FormData`](crate::data::FormData).
    #[must_use]
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Self::TextChanged { .. }
                | Self::SelectChanged { .. }
                | Self::CheckboxToggled { .. }
                | Self::CheckboxToggledById { .. }
        )
    }
}
