//! Aggregate record of all current field values

use super::field::{FieldDeclaration, FieldValue};
use serde::Serialize;
use std::collections::BTreeMap;

/// Receiver for validated value changes reported by field controllers
pub trait FieldSink {
    fn on_field_change(&mut self, name: &str, value: FieldValue);
}

/// Mapping from field name to its current value.
///
/// Holds exactly one entry per declared field for its whole life: every entry
/// starts at the declaration's default and changes overwrite in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AggregateRecord {
    values: BTreeMap<String, FieldValue>,
}

impl AggregateRecord {
    /// Create a record with every declared field at its default value
    pub fn new(declarations: &[FieldDeclaration]) -> Self {
        let values = declarations
            .iter()
            .map(|d| (d.name.clone(), d.default_value()))
            .collect();
        Self { values }
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }
}

impl FieldSink for AggregateRecord {
    fn on_field_change(&mut self, name: &str, value: FieldValue) {
        match self.values.get_mut(name) {
            Some(slot) => {
                tracing::debug!(field = name, value = %value, "field changed");
                *slot = value;
            }
            None => tracing::warn!("Ignoring change for undeclared field {name:?}"),
        }
    }
}
