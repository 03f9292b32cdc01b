//! Form rendering module
//!
//! - `field_renderer`: one box per field controller
//! - `prediction_form`: field grid, Predict button and result box

mod field_renderer;
mod prediction_form;

pub use prediction_form::draw_prediction_form;
