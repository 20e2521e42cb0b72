//! Fail-fast field validation
//!
//! Rules run in the order they were added; the first failure is returned and
//! the rest are skipped. Fields are addressed with JSON Pointers
//! (`/order/lines/0/sku`).

use serde_json::Value;

use crate::errors::{Result, SupportError};

/// A single check against one field
#[derive(Clone)]
pub enum Rule {
    /// Field must be present and not null
    Required { pointer: String },
    /// Field must be a string with visible content
    NonEmptyString { pointer: String },
    /// Field must be a string equal to one of `allowed`
    OneOf {
        pointer: String,
        allowed: Vec<String>,
    },
    /// Field must be present and satisfy `check`
    Matches {
        pointer: String,
        name: &'static str,
        check: fn(&Value) -> bool,
    },
}

impl Rule {
    fn name(&self) -> &'static str {
        match self {
            Rule::Required { .. } => "required",
            Rule::NonEmptyString { .. } => "non_empty_string",
            Rule::OneOf { .. } => "one_of",
            Rule::Matches { name, .. } => *name,
        }
    }

    fn pointer(&self) -> &str {
        match self {
            Rule::Required { pointer }
            | Rule::NonEmptyString { pointer }
            | Rule::OneOf { pointer, .. }
            | Rule::Matches { pointer, .. } => pointer,
        }
    }

    /// `None` if the rule passes, otherwise the reason it failed
    fn violation(&self, value: &Value) -> Option<String> {
        let field = value.pointer(self.pointer()).filter(|v| !v.is_null());
        let Some(field) = field else {
            return Some("field is missing".to_string());
        };
        match self {
            Rule::Required { .. } => None,
            Rule::NonEmptyString { .. } => match field.as_str() {
                Some(s) if !s.trim().is_empty() => None,
                Some(_) => Some("string is blank".to_string()),
                None => Some("field is not a string".to_string()),
            },
            Rule::OneOf { allowed, .. } => match field.as_str() {
                Some(s) if allowed.iter().any(|a| a == s) => None,
                _ => Some(format!("expected one of [{}]", allowed.join(", "))),
            },
            Rule::Matches { check, .. } => {
                (!check(field)).then(|| "predicate rejected value".to_string())
            }
        }
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name())
            .field("pointer", &self.pointer())
            .finish()
    }
}

/// Ordered list of rules evaluated fail-fast
#[derive(Debug, Clone, Default)]
pub struct FieldValidator {
    rules: Vec<Rule>,
}

impl FieldValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required(mut self, pointer: impl Into<String>) -> Self {
        self.rules.push(Rule::Required {
            pointer: pointer.into(),
        });
        self
    }

    pub fn non_empty_string(mut self, pointer: impl Into<String>) -> Self {
        self.rules.push(Rule::NonEmptyString {
            pointer: pointer.into(),
        });
        self
    }

    pub fn one_of(mut self, pointer: impl Into<String>, allowed: &[&str]) -> Self {
        self.rules.push(Rule::OneOf {
            pointer: pointer.into(),
            allowed: allowed.iter().map(|s| s.to_string()).collect(),
        });
        self
    }

    pub fn matches(
        mut self,
        pointer: impl Into<String>,
        name: &'static str,
        check: fn(&Value) -> bool,
    ) -> Self {
        self.rules.push(Rule::Matches {
            pointer: pointer.into(),
            name,
            check,
        });
        self
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Run every rule in order, stopping at the first failure
    ///
    /// # Errors
    ///
    /// Returns `SupportError::Validation` naming the first failing rule and field.
    pub fn validate(&self, value: &Value) -> Result<()> {
        for rule in &self.rules {
            if let Some(reason) = rule.violation(value) {
                return Err(SupportError::Validation {
                    rule: rule.name().to_string(),
                    path: rule.pointer().to_string(),
                    reason,
                });
            }
        }
        Ok(())
    }
}
