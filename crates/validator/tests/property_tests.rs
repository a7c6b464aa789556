//! Property-based tests for bloom-validator.

use bloom_validator::prelude::*;
use proptest::prelude::*;

struct Pair {
    text: String,
    choice: String,
}

impl FieldSource for Pair {
    fn field_value(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "text" => Some(FieldValue::Scalar(&self.text)),
            "choice" => Some(FieldValue::Scalar(&self.choice)),
            _ => None,
        }
    }
}

fn rules() -> RuleSet {
    RuleSet::builder()
        .field(
            FieldSpec::text("text")
                .required("required")
                .min_length(3, "short")
                .max_length(20, "long"),
        )
        .field(
            FieldSpec::single_select("choice")
                .required("required")
                .one_of(["S", "M", "L"], "enum"),
        )
        .build()
        .unwrap()
}

// ============================================================================
// IDEMPOTENCY: validate(x) == validate(x)
// ============================================================================

proptest! {
    #[test]
    fn min_length_idempotent(s in ".*") {
        let v = min_length(3);
        prop_assert_eq!(v.validate(&*s).is_ok(), v.validate(&*s).is_ok());
    }

    #[test]
    fn rule_set_deterministic(text in ".{0,30}", choice in "[SMLX]?") {
        let rules = rules();
        let source = Pair { text, choice };
        prop_assert_eq!(rules.validate(&source), rules.validate(&source));
    }
}

// ============================================================================
// MESSAGES: a rule's failure always carries the rule's own wording
// ============================================================================

proptest! {
    #[test]
    fn failing_rule_reports_its_message(text in "[a-z]{1,2}|[a-z]{21,30}") {
        let error = rules().validate(&Pair { text, choice: "M".to_owned() });
        let message = error.message("text");
        prop_assert!(message == Some("short") || message == Some("long"));
    }

    #[test]
    fn with_message_keeps_verdict(s in ".{0,30}") {
        let plain = min_length(3);
        let worded = plain.with_message("too short");
        prop_assert_eq!(plain.validate(&s).is_ok(), worded.validate(&s).is_ok());
    }
}

// ============================================================================
// FIELD INDEPENDENCE: one field's value never changes another's error
// ============================================================================

proptest! {
    #[test]
    fn text_error_ignores_choice(text in ".{0,30}", c1 in "[SMLX]?", c2 in "[SMLX]?") {
        let rules = rules();
        let a = rules.validate(&Pair { text: text.clone(), choice: c1 });
        let b = rules.validate(&Pair { text, choice: c2 });
        prop_assert_eq!(a.get("text"), b.get("text"));
    }

    #[test]
    fn length_window_is_valid(text in "[a-zA-Z ]{3,20}") {
        let errors = rules().validate(&Pair { text, choice: "M".to_owned() });
        prop_assert!(errors.is_empty());
    }

    #[test]
    fn outside_window_fails(text in "[a-z]{0,2}|[a-z]{21,40}") {
        let errors = rules().validate(&Pair { text, choice: "S".to_owned() });
        prop_assert!(errors.contains("text"));
        prop_assert!(!errors.contains("choice"));
    }

    #[test]
    fn at_most_one_error_per_field(text in ".{0,30}", choice in ".{0,3}") {
        let errors = rules().validate(&Pair { text, choice });
        prop_assert!(errors.len() <= 2);
    }
}
