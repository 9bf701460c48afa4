//! Structured formatting for field-level validation failures.

use std::collections::BTreeMap;

use serde::Serialize;
use validator::ValidationErrors;

/// Fixed top-level message for every validation failure response.
pub const VALIDATION_FAILED: &str = "Validation failed";

/// Fallback message for a violation that carries no message of its own.
pub const INVALID_VALUE: &str = "Invalid value";

/// Structured response body for a set of per-field validation failures.
///
/// Serializes as `{"message": "Validation failed", "errors": {field: [..]}}`.
/// Fields without violations never appear in `errors`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationErrorResponse {
    pub message: String,
    pub errors: BTreeMap<String, Vec<String>>,
}

impl ValidationErrorResponse {
    /// Builds a response from a field → messages mapping.
    ///
    /// Fields with an empty message list are dropped; empty messages are
    /// replaced with the `"Invalid value"` literal.
    pub fn from_field_errors(fields: BTreeMap<String, Vec<String>>) -> Self {
        let errors = fields
            .into_iter()
            .filter(|(_, messages)| !messages.is_empty())
            .map(|(field, messages)| {
                let messages = messages
                    .into_iter()
                    .map(|m| {
                        if m.is_empty() {
                            INVALID_VALUE.to_string()
                        } else {
                            m
                        }
                    })
                    .collect();
                (field, messages)
            })
            .collect();

        Self {
            message: VALIDATION_FAILED.to_string(),
            errors,
        }
    }
}

impl From<&ValidationErrors> for ValidationErrorResponse {
    fn from(errors: &ValidationErrors) -> Self {
        let fields = errors
            .field_errors()
            .iter()
            .map(|(field, errors)| {
                let messages = errors
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| INVALID_VALUE.to_string())
                    })
                    .collect();
                (field.to_string(), messages)
            })
            .collect();

        Self::from_field_errors(fields)
    }
}
