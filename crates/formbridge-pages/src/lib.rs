//! Form control templates and typed field bindings
//!
//! Helpers for building labeled form controls on top of `formbridge-forms`:
//!
//! - **Template composer**: label + input + help-text markup with stable part and
//!   class names and accessibility id cross-references
//! - **Property-name resolver**: typed field keys instead of raw field-name strings
//! - **Field bindings**: bind an input control to one field of a data object
//! - **Controls**: [`InputField`] and [`CheckboxGroup`], form participants rendered
//!   through the template
//!
//! ## Example
//!
//! ```
//! use formbridge_forms::{FormOwner, InputType};
//! use formbridge_pages::{CheckboxGroup, InputField};
//!
//! let mut form = FormOwner::new();
//! let email = form
//!     .register(InputField::new("email", InputType::Email).with_label("Email"))
//!     .unwrap();
//! form.register(
//!     CheckboxGroup::new("topic", [("rust", "Rust"), ("web", "Web")]).with_default(["web"]),
//! )
//! .unwrap();
//!
//! form.get_mut(email).unwrap().commit_value("jim@example.com".into());
//!
//! let data = form.submit().unwrap();
//! assert_eq!(data.to_urlencoded().unwrap(), "email=jim%40example.com&topic=web");
//! ```

pub mod binding;
pub mod callback;
pub mod config;
pub mod controls;
pub mod error;
mod markup;
pub mod resolver;
pub mod template;

pub use binding::{FieldBinding, InputOverrides};
pub use callback::Callback;
pub use config::TemplateSettings;
pub use controls::{CheckboxGroup, CheckboxOption, InputField};
pub use error::{PagesError, PagesResult};
pub use resolver::{Bindable, FieldKey, FieldMap, property_name, resolve_field};
pub use template::{
	ControlSize, FormControlFragment, FormControlOptions, compute_accessible_label_ids,
	render_form_control,
};
