//! Form control templates, field bindings and reference controls
//!
//! This module provides access to formbridge-pages, which builds labeled form
//! controls on top of the form association core.
//!
//! ## Example
//!
//! ```rust
//! use formbridge::forms::{FormParticipant, InputType};
//! use formbridge::pages::InputField;
//!
//! let mut name = InputField::new("name", InputType::Text).with_label("Name");
//! name.handle_input("Jim");
//! assert!(name.render().contains("value=\"Jim\""));
//! assert_eq!(name.name(), "name");
//! ```

// Re-export all formbridge-pages functionality
pub use formbridge_pages::*;
