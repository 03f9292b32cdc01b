//! Form domain layer
//!
//! Field declarations, the per-field controllers, the aggregate record they
//! report into, and the form that owns them all.

mod catalog;
mod controller;
mod field;
mod form_state;
mod record;

pub use catalog::{property_fields, property_fields_with_options};
pub use controller::FieldController;
pub use field::FieldDeclaration;
#[cfg(test)]
pub use field::FieldValue;
pub use form_state::{Form, PredictionForm};
pub use record::AggregateRecord;
#[cfg(test)]
pub use record::FieldSink;
