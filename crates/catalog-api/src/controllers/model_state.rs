//! Validation outcome of a submitted entity.

use std::collections::BTreeMap;

use validator::{Validate, ValidationErrors};

/// Field errors collected while binding and validating a submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelState {
    errors: BTreeMap<String, Vec<String>>,
}

impl ModelState {
    /// An empty, valid model state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the entity's validation rules and record what they report.
    pub fn validate<T: Validate>(&mut self, entity: &T) {
        if let Err(errors) = entity.validate() {
            self.merge(&errors);
        }
    }

    /// Record an error against a field.
    pub fn add_model_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    fn merge(&mut self, errors: &ValidationErrors) {
        for (field, field_errors) in errors.field_errors() {
            for error in field_errors {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("The field {field} is invalid ({}).", error.code));
                self.add_model_error(field.to_string(), message);
            }
        }
    }

    /// Whether no errors were recorded.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Errors for one field.
    pub fn errors_for(&self, field: &str) -> &[String] {
        self.errors.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All recorded errors, keyed by field.
    pub fn errors(&self) -> &BTreeMap<String, Vec<String>> {
        &self.errors
    }

    /// All messages joined into a single line.
    pub fn summary(&self) -> String {
        self.errors
            .iter()
            .flat_map(|(field, messages)| messages.iter().map(move |m| format!("{field}: {m}")))
            .collect::<Vec<_>>()
            .join("; ")
    }
}
