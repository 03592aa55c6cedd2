// src/shared/validation.rs
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::hash::Hash;

use serde::Serialize;

/// A single rejected field: a stable code for clients plus a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub code: &'static str,
    pub message: String,
}

/// Collects field errors in one pass over the input.
///
/// Only the first error recorded for a field is kept, and fields are ordered
/// by name, so the same input always produces the same output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    fields: BTreeMap<String, FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, code: &'static str, message: impl Into<String>) {
        self.fields
            .entry(field.to_string())
            .or_insert_with(|| FieldError {
                code,
                message: message.into(),
            });
    }

    /// Records the error when `ok` is false.
    pub fn check(&mut self, ok: bool, field: &str, code: &'static str, message: &str) {
        if !ok {
            self.add(field, code, message);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn get(&self, field: &str) -> Option<&FieldError> {
        self.fields.get(field)
    }

    pub fn code_for(&self, field: &str) -> Option<&'static str> {
        self.fields.get(field).map(|e| e.code)
    }

    pub fn fields(&self) -> &BTreeMap<String, FieldError> {
        &self.fields
    }

    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .fields
            .iter()
            .map(|(field, err)| format!("{field} ({})", err.code))
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}

impl std::error::Error for ValidationErrors {}

pub fn unique<T: Eq + Hash>(values: &[T]) -> bool {
    let mut seen = HashSet::with_capacity(values.len());
    values.iter().all(|v| seen.insert(v))
}
