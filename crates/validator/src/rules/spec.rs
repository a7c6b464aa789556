//! Declarative per-field constraints.

use std::borrow::Cow;
use std::fmt;

use crate::combinators::WithMessage;
use crate::foundation::{Validate, ValidateExt};
use crate::rules::error_map::{ErrorKind, FieldError};
use crate::rules::source::{FieldKind, FieldValue};
use crate::rules::RuleError;
use crate::validators::{max_length, max_size, min_length, min_size, one_of};

type ScalarCheck = Box<dyn Validate<Input = str> + Send + Sync>;
type ManyCheck = Box<dyn Validate<Input = [String]> + Send + Sync>;

fn labelled<V: Validate>(validator: V, message: &Cow<'static, str>) -> WithMessage<V> {
    validator.with_message(message.clone())
}

/// The validator a constraint runs, typed by the value shape it accepts.
enum Check {
    Scalar(ScalarCheck),
    Many(ManyCheck),
}

impl Check {
    fn accepts(&self, kind: FieldKind) -> bool {
        match self {
            Self::Scalar(_) => kind.is_scalar(),
            Self::Many(_) => !kind.is_scalar(),
        }
    }
}

/// One `(predicate, error kind, message)` entry of a field's rule list.
pub struct Constraint {
    kind: ErrorKind,
    message: Cow<'static, str>,
    check: Check,
}

impl Constraint {
    /// A constraint over text and single-select values.
    pub fn scalar<V>(kind: ErrorKind, message: impl Into<Cow<'static, str>>, validator: V) -> Self
    where
        V: Validate<Input = str> + Send + Sync + 'static,
    {
        let message = message.into();
        Self {
            kind,
            check: Check::Scalar(Box::new(labelled(validator, &message))),
            message,
        }
    }

    /// A constraint over multi-select values.
    pub fn many<V>(kind: ErrorKind, message: impl Into<Cow<'static, str>>, validator: V) -> Self
    where
        V: Validate<Input = [String]> + Send + Sync + 'static,
    {
        let message = message.into();
        Self {
            kind,
            check: Check::Many(Box::new(labelled(validator, &message))),
            message,
        }
    }

    /// Error kind reported when this constraint fails.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Message reported when this constraint fails.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Runs the constraint. Values of the wrong shape pass.
    ///
    /// The validator is wrapped in [`WithMessage`], so a failure carries this
    /// constraint's message together with the validator's code and params.
    #[must_use]
    pub fn evaluate(&self, value: FieldValue<'_>) -> Option<FieldError> {
        let result = match (&self.check, value) {
            (Check::Scalar(v), FieldValue::Scalar(s)) => v.validate(s),
            (Check::Many(v), FieldValue::Many(items)) => v.validate(items),
            _ => Ok(()),
        };
        result
            .err()
            .map(|e| FieldError::from_validation(self.kind, e))
    }
}

impl fmt::Debug for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constraint")
            .field("kind", &self.kind)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// Static description of one form field and its rules.
///
/// Rules are checked in a fixed order: `required` first, then every
/// constraint in the order it was added. The first failure is the field's
/// only error. An empty field that is not required skips its constraints.
///
/// # Examples
///
/// ```rust,ignore
/// let full_name = FieldSpec::text("fullName")
///     .required("Full name is required")
///     .min_length(3, "Full name must be at least 3 characters")
///     .max_length(20, "Full name must be at most 20 characters");
/// ```
#[derive(Debug)]
pub struct FieldSpec {
    name: Cow<'static, str>,
    kind: FieldKind,
    required: Option<Cow<'static, str>>,
    constraints: Vec<Constraint>,
    rejected: Vec<RuleError>,
}

impl FieldSpec {
    /// Creates a field with no rules.
    pub fn new(name: impl Into<Cow<'static, str>>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            required: None,
            constraints: Vec::new(),
            rejected: Vec::new(),
        }
    }

    /// A free-text field.
    pub fn text(name: impl Into<Cow<'static, str>>) -> Self {
        Self::new(name, FieldKind::Text)
    }

    /// A pick-one field.
    pub fn single_select(name: impl Into<Cow<'static, str>>) -> Self {
        Self::new(name, FieldKind::SingleSelect)
    }

    /// A pick-many field.
    pub fn multi_select(name: impl Into<Cow<'static, str>>) -> Self {
        Self::new(name, FieldKind::MultiSelect)
    }

    /// Marks the field required, failing with `message` while it is empty.
    #[must_use = "builder methods must be chained or built"]
    pub fn required(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.required = Some(message.into());
        self
    }

    /// Appends a constraint. Constraints that cannot apply to this field's
    /// kind are recorded and reported by [`RuleSetBuilder::build`](super::RuleSetBuilder::build).
    #[must_use = "builder methods must be chained or built"]
    pub fn constraint(mut self, constraint: Constraint) -> Self {
        if constraint.check.accepts(self.kind) {
            self.constraints.push(constraint);
        } else {
            self.rejected.push(RuleError::KindMismatch {
                field: self.name.to_string(),
                kind: self.kind,
                constraint: constraint.kind.code().to_owned(),
            });
        }
        self
    }

    /// Text must have at least `min` characters.
    #[must_use = "builder methods must be chained or built"]
    pub fn min_length(self, min: usize, message: impl Into<Cow<'static, str>>) -> Self {
        let constraint = Constraint::scalar(ErrorKind::TooShort, message, min_length(min));
        self.text_only(constraint)
    }

    /// Text must have at most `max` characters.
    #[must_use = "builder methods must be chained or built"]
    pub fn max_length(self, max: usize, message: impl Into<Cow<'static, str>>) -> Self {
        let constraint = Constraint::scalar(ErrorKind::TooLong, message, max_length(max));
        self.text_only(constraint)
    }

    /// Value must be one of `allowed`.
    #[must_use = "builder methods must be chained or built"]
    pub fn one_of(
        self,
        allowed: impl IntoIterator<Item = impl Into<String>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.constraint(Constraint::scalar(
            ErrorKind::InvalidEnum,
            message,
            one_of(allowed),
        ))
    }

    /// At least `min` options must be selected.
    #[must_use = "builder methods must be chained or built"]
    pub fn min_selections(self, min: usize, message: impl Into<Cow<'static, str>>) -> Self {
        self.constraint(Constraint::many(
            ErrorKind::TooFewSelections,
            message,
            min_size::<String>(min),
        ))
    }

    /// At most `max` options may be selected.
    #[must_use = "builder methods must be chained or built"]
    pub fn max_selections(self, max: usize, message: impl Into<Cow<'static, str>>) -> Self {
        self.constraint(Constraint::many(
            ErrorKind::TooManySelections,
            message,
            max_size::<String>(max),
        ))
    }

    // Length bounds only make sense for free text.
    fn text_only(mut self, constraint: Constraint) -> Self {
        if self.kind == FieldKind::Text {
            self.constraints.push(constraint);
        } else {
            self.rejected.push(RuleError::KindMismatch {
                field: self.name.to_string(),
                kind: self.kind,
                constraint: constraint.kind.code().to_owned(),
            });
        }
        self
    }

    /// Field name, as used for [`ErrorMap`](super::ErrorMap) keys.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value shape.
    #[must_use]
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Whether an empty value is an error.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.required.is_some()
    }

    /// The ordered constraint list.
    #[must_use]
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    pub(crate) fn key(&self) -> Cow<'static, str> {
        self.name.clone()
    }

    pub(crate) fn take_rejected(&mut self) -> Vec<RuleError> {
        std::mem::take(&mut self.rejected)
    }

    /// Evaluates this field alone. `None` means the field is valid.
    ///
    /// A missing value, or one whose shape does not match the field kind,
    /// counts as empty.
    #[must_use]
    pub fn evaluate(&self, value: Option<FieldValue<'_>>) -> Option<FieldError> {
        let value = value.filter(|v| v.fits(self.kind) && !v.is_empty());

        let Some(value) = value else {
            return self
                .required
                .as_ref()
                .map(|message| FieldError::new(ErrorKind::Required, message.clone()));
        };

        self.constraints.iter().find_map(|c| c.evaluate(value))
    }
}
