//! Reference form controls
//!
//! Both controls own an [`InputElement`](formbridge_forms::InputElement) delegate,
//! commit on every mutation and render through the form control template.

mod checkbox_group;
mod input_field;

pub use checkbox_group::{CheckboxGroup, CheckboxOption};
pub use input_field::InputField;
