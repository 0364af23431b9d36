//! Field validation shared by every writable DTO

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Every violated rule, grouped by field name (camelCase, dotted for nested values)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, Vec<String>>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single-entry collection
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn messages(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// `Ok(())` when nothing was recorded
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            for message in messages {
                if !first {
                    f.write_str("; ")?;
                }
                write!(f, "{}: {}", field, message)?;
                first = false;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Validation rules for a field
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub min: Option<i64>,
    pub max: Option<i64>,
    pub max_length: Option<usize>,
}

impl ValidationRules {
    /// No constraints
    pub const fn none() -> Self {
        Self {
            required: false,
            min: None,
            max: None,
            max_length: None,
        }
    }

    /// Non-blank text
    pub const fn required() -> Self {
        Self {
            required: true,
            ..Self::none()
        }
    }

    pub const fn with_max_length(self, max_length: usize) -> Self {
        Self {
            max_length: Some(max_length),
            ..self
        }
    }

    pub const fn with_min(self, min: i64) -> Self {
        Self {
            min: Some(min),
            ..self
        }
    }

    /// Record every string rule `value` breaks
    pub fn check_string(&self, errors: &mut ValidationErrors, field: &str, value: &str) {
        if self.required && value.trim().is_empty() {
            errors.add(field, format!("'{}' must not be empty.", field));
        }

        if let Some(max) = self.max_length {
            let len = value.chars().count();
            if len > max {
                errors.add(
                    field,
                    format!("'{}' must be {} characters or fewer. You entered {}.", field, max, len),
                );
            }
        }
    }

    /// Record every numeric rule `value` breaks
    pub fn check_number(&self, errors: &mut ValidationErrors, field: &str, value: i64) {
        if let Some(min) = self.min {
            if value < min {
                errors.add(field, format!("'{}' must be at least {}.", field, min));
            }
        }

        if let Some(max) = self.max {
            if value > max {
                errors.add(field, format!("'{}' must be at most {}.", field, max));
            }
        }
    }
}
