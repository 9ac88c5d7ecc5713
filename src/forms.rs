//! Form association module.
//!
//! This module lets custom components take part in an enclosing form's
//! submission, validation, reset and state restoration.
//!
//! # Examples
//!
//! ```rust
//! use formbridge::forms::{FormOwner, FormValue};
//!
//! let form = FormOwner::new();
//! assert!(form.form_data().is_empty());
//! assert_eq!(FormValue::from(42).display_text(), "42");
//! ```

pub use formbridge_forms::*;
