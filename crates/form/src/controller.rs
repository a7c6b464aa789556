//! The order form state machine.
//!
//! A [`FormController`] owns the current [`FormData`], the [`TouchedSet`] and
//! the derived [`ErrorMap`]. Every mutating operation ends by re-running the
//! rule set over the full data, so a caller never observes data and errors
//! that disagree. Touched state only decides whether an error is shown.

use bloom_validator::rules::{ErrorMap, FieldError, RuleSet};

use crate::catalog::ToppingCatalog;
use crate::config::FormConfig;
use crate::confirmation::confirmation_message;
use crate::data::FormData;
use crate::error::ConfigError;
use crate::event::FormEvent;
use crate::field::{Field, TouchedSet};
use crate::schema::order_rules;
use crate::size::SizeTable;

/// One live order form.
#[derive(Debug)]
pub struct FormController {
    config: FormConfig,
    rules: RuleSet,
    data: FormData,
    touched: TouchedSet,
    errors: ErrorMap,
    confirmation: Option<String>,
}

impl FormController {
    /// Creates a form with empty data over `config`.
    pub fn new(config: FormConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let rules = order_rules(&config.sizes)?;
        let data = FormData::default();
        let errors = rules.validate(&data);
        Ok(Self {
            config,
            rules,
            data,
            touched: TouchedSet::empty(),
            errors,
            confirmation: None,
        })
    }

    /// Creates a form over the stock topping catalog and sizes.
    pub fn with_defaults() -> Result<Self, ConfigError> {
        Self::new(FormConfig::default())
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Overwrites a text or select field.
    ///
    /// `Toppings` is a multi-select and only changes through
    /// [`toggle_topping`](Self::toggle_topping); setting it here is ignored.
    pub fn set_field_value(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::FullName => &mut self.data.full_name,
            Field::Size => &mut self.data.size,
            Field::Toppings => {
                tracing::warn!(%field, "ignoring scalar value for multi-select field");
                return;
            }
        };

        let value = value.into();
        if *slot == value {
            return;
        }
        *slot = value;
        self.after_mutation(field);
    }

    /// Adds (`selected`) or removes a topping by catalog label.
    ///
    /// Both directions are idempotent. Labels missing from the catalog are
    /// ignored.
    pub fn toggle_topping(&mut self, label: &str, selected: bool) {
        if !self.config.toppings.contains_label(label) {
            tracing::warn!(label, "ignoring toggle of unknown topping");
            return;
        }

        let present = self.data.has_topping(label);
        match (selected, present) {
            (true, false) => self.data.toppings.push(label.to_owned()),
            (false, true) => self.data.toppings.retain(|t| t != label),
            _ => return,
        }
        self.after_mutation(Field::Toppings);
    }

    /// Same as [`toggle_topping`](Self::toggle_topping), keyed by catalog id.
    pub fn toggle_topping_by_id(&mut self, id: &str, selected: bool) {
        let Some(topping) = self.config.toppings.by_id(id) else {
            tracing::warn!(id, "ignoring toggle of unknown topping id");
            return;
        };
        let label = topping.label.clone();
        self.toggle_topping(&label, selected);
    }

    /// Records that `field` lost focus. Validity is unaffected.
    pub fn mark_touched(&mut self, field: Field) {
        self.touched.mark(field);
    }

    /// Accepts the order if it is valid.
    ///
    /// On success the confirmation is rendered from the current data, then
    /// data and touched state are reset, and the message is returned. An
    /// invalid form is left exactly as it was and `None` is returned.
    pub fn submit(&mut self) -> Option<String> {
        let errors = self.rules.validate(&self.data);
        if !errors.is_empty() {
            tracing::debug!(errors = errors.len(), "submit ignored, form is invalid");
            return None;
        }

        let message = confirmation_message(&self.data, &self.config.sizes);
        tracing::info!(
            full_name = %self.data.full_name,
            size = %self.data.size,
            toppings = self.data.toppings.len(),
            "order submitted"
        );

        self.data = FormData::default();
        self.touched = TouchedSet::empty();
        self.revalidate();
        self.confirmation = Some(message.clone());
        Some(message)
    }

    /// Routes a view event to the matching operation.
    ///
    /// Returns the confirmation when the event was an accepted submit.
    pub fn dispatch(&mut self, event: FormEvent) -> Option<String> {
        match event {
            FormEvent::TextChanged { field, value } | FormEvent::SelectChanged { field, value } => {
                self.set_field_value(field, value);
            }
            FormEvent::CheckboxToggled { label, checked } => self.toggle_topping(&label, checked),
            FormEvent::CheckboxToggledById { id, checked } => {
                self.toggle_topping_by_id(&id, checked);
            }
            FormEvent::Blurred { field } => self.mark_touched(field),
            FormEvent::SubmitAttempted => return self.submit(),
        }
        None
    }

    fn after_mutation(&mut self, field: Field) {
        self.confirmation = None;
        self.revalidate();
        tracing::debug!(
            %field,
            errors = self.errors.len(),
            valid = self.errors.is_empty(),
            "form revalidated"
        );
    }

    fn revalidate(&mut self) {
        self.errors = self.rules.validate(&self.data);
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    #[must_use]
    pub fn data(&self) -> &FormData {
        &self.data
    }

    /// Errors for the current data, touched or not.
    #[must_use]
    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    #[must_use]
    pub fn error(&self, field: Field) -> Option<&FieldError> {
        self.errors.get(field.as_str())
    }

    /// Whether the view should reveal `field`'s error: it is invalid and touched.
    #[must_use]
    pub fn should_display_error(&self, field: Field) -> bool {
        self.touched.has(field) && self.errors.contains(field.as_str())
    }

    /// The error to render for `field`, if it should be displayed.
    #[must_use]
    pub fn visible_error(&self, field: Field) -> Option<&FieldError> {
        if self.touched.has(field) {
            self.error(field)
        } else {
            None
        }
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn submit_enabled(&self) -> bool {
        self.is_valid()
    }

    #[must_use]
    pub fn touched(&self) -> TouchedSet {
        self.touched
    }

    #[must_use]
    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.has(field)
    }

    /// Whether the topping `label` is currently selected.
    #[must_use]
    pub fn is_selected(&self, label: &str) -> bool {
        self.data.has_topping(label)
    }

    /// Message from the last accepted submit, until the next data change.
    #[must_use]
    pub fn confirmation_message(&self) -> Option<&str> {
        self.confirmation.as_deref()
    }

    #[must_use]
    pub fn catalog(&self) -> &ToppingCatalog {
        &self.config.toppings
    }

    #[must_use]
    pub fn sizes(&self) -> &SizeTable {
        &self.config.sizes
    }

    #[must_use]
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }
}
