use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config;
use crate::form::FormState;

static EMAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
static PHONE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?[0-9\s()\-]{10,}$").unwrap());

pub fn is_valid_email(value: &str) -> bool {
    EMAIL.is_match(value)
}

/// Optional leading `+`, then at least 10 digits, spaces, hyphens or parentheses.
pub fn is_valid_phone(value: &str) -> bool {
    PHONE.is_match(value)
}

/// Blur-time check. An empty field is left to the submit-time required check.
pub fn passes_on_blur(value: &str, rule: fn(&str) -> bool) -> bool {
    value.is_empty() || rule(value)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub blank_fields: Vec<&'static str>,
    pub choice_missing: bool,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.blank_fields.is_empty() && !self.choice_missing
    }

    pub fn is_blank(&self, field: &str) -> bool {
        self.blank_fields.contains(&field)
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            return write!(f, "ok");
        }
        if !self.blank_fields.is_empty() {
            write!(f, "blank: {}", self.blank_fields.join(", "))?;
        }
        if self.choice_missing {
            if !self.blank_fields.is_empty() {
                write!(f, "; ")?;
            }
            write!(f, "no {} option selected", config::CHOICE_GROUP)?;
        }
        Ok(())
    }
}

/// Submit-time validation of the booking form. `fields` holds the current
/// value of each required control keyed by its element id.
pub fn validate_booking(fields: &FormState, choice_selected: bool) -> ValidationReport {
    let blank_fields = config::REQUIRED_FIELDS
        .iter()
        .copied()
        .filter(|field| fields.get(field).map_or(true, |value| value.trim().is_empty()))
        .collect();
    ValidationReport {
        blank_fields,
        choice_missing: !choice_selected,
    }
}
