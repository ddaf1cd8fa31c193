//! Input validation for request DTOs.

use validator::{Validate, ValidationErrors};

use crate::error::{DomainError, FieldError};

/// Runs the `validator` rules declared on a DTO and reports every offending
/// field as a [`DomainError::Validation`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidationService;

impl ValidationService {
    pub fn new() -> Self {
        Self
    }

    pub fn validate<T: Validate>(&self, payload: &T) -> Result<(), DomainError> {
        payload
            .validate()
            .map_err(|errors| DomainError::Validation(field_errors(&errors)))
    }
}

/// First message per field, ordered by field name.
fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut fields: Vec<FieldError> = errors
        .field_errors()
        .iter()
        .filter_map(|(field, errs)| {
            errs.first().map(|e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("invalid value ({})", e.code));
                FieldError::new(camel_case(field), message)
            })
        })
        .collect();

    fields.sort_by(|a, b| a.field.cmp(&b.field));
    fields
}

/// Field names are reported the way clients send them.
fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}
