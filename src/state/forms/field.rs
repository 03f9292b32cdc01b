//! Form field value objects and declarations

use serde::Serialize;
use std::fmt;

/// Type-safe field values
///
/// Serialized untagged so the record goes over the wire as plain JSON
/// scalars (`true`, `1950`, `"Wolseley"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Number(i64),
    Text(String),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Bool(b) => write!(f, "{}", if *b { "Yes" } else { "No" }),
            FieldValue::Number(n) => write!(f, "{n}"),
            FieldValue::Text(s) => f.write_str(s),
        }
    }
}

/// The kind of a field together with its kind-specific constraints
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Boolean,
    Numeric { min: i64, max: Option<i64> },
    /// `options` is a suggestion list, not a whitelist
    Categorical { options: Vec<String> },
}

/// Static metadata describing one form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDeclaration {
    pub name: String,
    pub kind: FieldKind,
}

impl FieldDeclaration {
    /// Create a boolean (checkbox) field
    pub fn boolean(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: FieldKind::Boolean,
        }
    }

    /// Create a numeric field bounded below by `min`, optionally above by `max`
    pub fn numeric(name: &str, min: i64, max: Option<i64>) -> Self {
        Self {
            name: name.to_string(),
            kind: FieldKind::Numeric { min, max },
        }
    }

    /// Create a categorical field with a list of suggested options
    pub fn categorical(name: &str, options: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            kind: FieldKind::Categorical {
                options: options.iter().map(|o| o.to_string()).collect(),
            },
        }
    }

    /// The sentinel value the field starts at
    pub fn default_value(&self) -> FieldValue {
        match &self.kind {
            FieldKind::Boolean => FieldValue::Bool(false),
            FieldKind::Numeric { min, .. } => FieldValue::Number(*min),
            FieldKind::Categorical { .. } => FieldValue::Text(String::new()),
        }
    }

    /// Booleans have no "unset" state distinct from `false`, so they are
    /// excluded from completeness checking.
    pub fn is_exempt(&self) -> bool {
        matches!(self.kind, FieldKind::Boolean)
    }

    /// Replace the suggestion list of a categorical field. No-op for other kinds.
    pub fn set_options(&mut self, replacement: Vec<String>) {
        if let FieldKind::Categorical { options } = &mut self.kind {
            *options = replacement;
        }
    }
}
