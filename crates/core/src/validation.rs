//! Rule-table validation.
//!
//! A [`RuleSet`] is a static table of `(field, message, predicate)` entries.
//! Validation walks the whole table and records one [`FieldError`] for every
//! predicate that does not hold; it never stops at the first failure, so a
//! caller sees every violation in one pass.
//!
//! Rules only look at the candidate value itself (no lookups, no clocks), which
//! keeps the outcome a pure function of the input.

use serde::{Deserialize, Serialize};

/// A single failed rule on one field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Result of running a rule table over a candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid,
    Invalid(Vec<FieldError>),
}

impl ValidationOutcome {
    /// `Valid` for an empty error list, `Invalid` otherwise.
    pub fn from_errors(errors: Vec<FieldError>) -> Self {
        if errors.is_empty() {
            ValidationOutcome::Valid
        } else {
            ValidationOutcome::Invalid(errors)
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }

    pub fn errors(&self) -> &[FieldError] {
        match self {
            ValidationOutcome::Valid => &[],
            ValidationOutcome::Invalid(errors) => errors,
        }
    }

    /// Messages in rule-table order.
    pub fn messages(&self) -> Vec<&str> {
        self.errors().iter().map(|e| e.message.as_str()).collect()
    }

    pub fn into_result(self) -> Result<(), Vec<FieldError>> {
        match self {
            ValidationOutcome::Valid => Ok(()),
            ValidationOutcome::Invalid(errors) => Err(errors),
        }
    }
}

/// One row of a rule table.
pub struct Rule<T> {
    field: &'static str,
    message: &'static str,
    check: fn(&T) -> bool,
}

impl<T> Rule<T> {
    /// `check` returns `true` when the candidate satisfies the rule.
    pub const fn new(field: &'static str, message: &'static str, check: fn(&T) -> bool) -> Self {
        Self {
            field,
            message,
            check,
        }
    }

    pub fn field(&self) -> &'static str {
        self.field
    }

    pub fn message(&self) -> &'static str {
        self.message
    }

    pub fn holds(&self, candidate: &T) -> bool {
        (self.check)(candidate)
    }
}

impl<T> core::fmt::Debug for Rule<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Rule")
            .field("field", &self.field)
            .field("message", &self.message)
            .finish()
    }
}

/// An ordered, static table of rules for `T`.
#[derive(Debug)]
pub struct RuleSet<T: 'static> {
    rules: &'static [Rule<T>],
}

impl<T: 'static> RuleSet<T> {
    pub const fn new(rules: &'static [Rule<T>]) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &'static [Rule<T>] {
        self.rules
    }

    /// Append one error per failing rule to `errors`.
    ///
    /// Lets several tables (e.g. an entity and its embedded parts) feed a
    /// single error list.
    pub fn collect_into(&self, candidate: &T, errors: &mut Vec<FieldError>) {
        errors.extend(
            self.rules
                .iter()
                .filter(|rule| !rule.holds(candidate))
                .map(|rule| FieldError::new(rule.field, rule.message)),
        );
    }

    pub fn validate(&self, candidate: &T) -> ValidationOutcome {
        let mut errors = Vec::new();
        self.collect_into(candidate, &mut errors);
        ValidationOutcome::from_errors(errors)
    }
}

/// Types that know which rule table applies to them.
pub trait Validate {
    fn validate(&self) -> ValidationOutcome;
}

/// Length in Unicode scalar values, the unit all length rules are written in.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// `true` when `s` is non-blank and its length lies in `min..=max`.
pub fn length_within(s: &str, min: usize, max: usize) -> bool {
    !s.trim().is_empty() && (min..=max).contains(&char_len(s))
}
