//! # formbridge
//!
//! Form association for custom form controls.
//!
//! formbridge makes any component a first-class member of an enclosing form. A
//! component holds a [`FormAssociated`](forms::FormAssociated) helper, owns a
//! delegate control that computes validity, and implements
//! [`FormParticipant`](forms::FormParticipant). It then reports its value and
//! validity to the form, tracks focus, and answers form reset and state
//! restoration.
//!
//! On top of that core, the `pages` module composes labeled input markup and binds
//! controls to typed data fields without raw field-name strings.
//!
//! ## Feature Flags
//!
//! - `forms` - Form association core
//! - `pages` - Templates, field bindings and reference controls (implies `forms`)
//! - `full` (default) - Everything
//!
//! ## Quick Example
//!
//! ```rust
//! use formbridge::prelude::*;
//!
//! let mut age = InputField::new("age", InputType::Number).with_min(18.0).required();
//! age.handle_input("16");
//! assert!(age.form_association().invalid());
//!
//! age.handle_input("21");
//! let mut form = FormOwner::new();
//! form.register(age).unwrap();
//! assert_eq!(form.submit().unwrap().get("age"), Some("21"));
//! ```

#[cfg(feature = "forms")]
pub mod forms;
#[cfg(feature = "pages")]
pub mod pages;

/// Commonly used types
pub mod prelude {
	#[cfg(feature = "forms")]
	pub use crate::forms::{
		DelegateControl, ElementInternals, FormAssociated, FormData, FormError, FormOwner,
		FormParticipant, FormResult, FormState, FormValue, InputElement, InputType, RestoreMode,
		ValidityState,
	};

	#[cfg(feature = "pages")]
	pub use crate::pages::{
		Bindable, CheckboxGroup, ControlSize, FieldBinding, FieldKey, InputField, PagesError,
		PagesResult, TemplateSettings, field_keys, property_name,
	};
}
