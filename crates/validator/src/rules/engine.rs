use std::collections::HashSet;

use crate::rules::error_map::{ErrorMap, FieldError};
use crate::rules::source::FieldSource;
use crate::rules::spec::FieldSpec;
use crate::rules::RuleError;

/// An immutable, ordered set of field rules.
#[derive(Debug, Default)]
pub struct RuleSet {
    fields: Vec<FieldSpec>,
}

impl RuleSet {
    /// Starts an empty builder.
    #[must_use]
    pub fn builder() -> RuleSetBuilder {
        RuleSetBuilder::default()
    }

    /// Field specs in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Looks up a field spec by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name() == name)
    }

    /// Evaluates every field against `source`.
    ///
    /// Pure and deterministic: the result depends only on `source`. Fields
    /// that pass are absent from the map.
    pub fn validate<S>(&self, source: &S) -> ErrorMap
    where
        S: FieldSource + ?Sized,
    {
        let mut errors = ErrorMap::new();
        for spec in &self.fields {
            if let Some(error) = spec.evaluate(source.field_value(spec.name())) {
                errors.insert(spec.key(), error);
            }
        }
        errors
    }

    /// Evaluates a single field. Unknown field names are valid.
    pub fn validate_field<S>(&self, name: &str, source: &S) -> Option<FieldError>
    where
        S: FieldSource + ?Sized,
    {
        self.field(name)?.evaluate(source.field_value(name))
    }
}

/// Collects field specs and checks them once in [`build`](Self::build).
#[derive(Debug, Default)]
pub struct RuleSetBuilder {
    fields: Vec<FieldSpec>,
}

impl RuleSetBuilder {
    /// Appends a field. Declaration order is the [`ErrorMap`] order.
    #[must_use = "builder methods must be chained or built"]
    pub fn field(mut self, spec: FieldSpec) -> Self {
        self.fields.push(spec);
        self
    }

    /// Validates the collected specs and freezes them.
    pub fn build(mut self) -> Result<RuleSet, RuleError> {
        let mut seen = HashSet::new();
        for spec in &mut self.fields {
            if let Some(error) = spec.take_rejected().into_iter().next() {
                return Err(error);
            }
            if !seen.insert(spec.name().to_owned()) {
                return Err(RuleError::DuplicateField {
                    field: spec.name().to_owned(),
                });
            }
        }
        Ok(RuleSet {
            fields: self.fields,
        })
    }
}
