//! Form association for custom form controls
//!
//! This crate lets any component take part in the submission and validation
//! lifecycle of an enclosing form:
//! - Reporting a typed value as one or more named form entries
//! - Forwarding the validity of a delegate control (the editable widget inside the
//!   component) to the form, with its message and anchor element
//! - Tracking focus and notifying listeners on focus and blur
//! - Restoring initial values on form reset and saved values on state restoration
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────┐
//! │ Component (FormParticipant)  │
//! │  ├─ FormAssociated ──────────┼──▶ ElementInternals ──▶ FormOwner
//! │  │   value, flags, focus     │    value + validity      submit / reset /
//! │  └─ DelegateControl          │                          restore
//! │      validity, message, id   │
//! └──────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use formbridge_forms::{
//!     DelegateControl, FormAssociated, FormOwner, FormParticipant, FormState, FormValue,
//!     InputElement, InputType, RestoreMode,
//! };
//!
//! struct Quantity {
//!     assoc: FormAssociated,
//!     input: InputElement,
//! }
//!
//! impl FormParticipant for Quantity {
//!     fn form_association(&self) -> &FormAssociated { &self.assoc }
//!     fn form_association_mut(&mut self) -> &mut FormAssociated { &mut self.assoc }
//!     fn input(&self) -> &dyn DelegateControl { &self.input }
//!     fn input_mut(&mut self) -> &mut dyn DelegateControl { &mut self.input }
//!     fn apply_value(&mut self, value: FormValue) {
//!         self.input.set_value(value.display_text());
//!         self.assoc.set_value(value);
//!     }
//!     fn form_reset_callback(&mut self) { self.commit_value(FormValue::Number(1.0)); }
//!     fn form_state_restore_callback(&mut self, state: &FormState, _mode: RestoreMode) {
//!         self.commit_value(state.value().clone());
//!     }
//! }
//!
//! let mut quantity = Quantity {
//!     assoc: FormAssociated::new("quantity"),
//!     input: InputElement::new("quantity-input", InputType::Number),
//! };
//! quantity.commit_value(FormValue::from(3));
//!
//! let mut form = FormOwner::new();
//! form.register(quantity).unwrap();
//! assert_eq!(form.submit().unwrap().get("quantity"), Some("3"));
//! ```

pub mod delegate;
pub mod error;
pub mod events;
pub mod internals;
pub mod owner;
pub mod participant;
pub mod validity;
pub mod value;

pub use delegate::{DelegateControl, InputElement, InputType};
pub use error::{FormError, FormResult, InvalidField};
pub use events::{ControlEvent, ControlEventKind, EventListeners, ListenerId};
pub use internals::{ElementInternals, Internals};
pub use owner::{FormOwner, ParticipantId, SavedState};
pub use participant::{FocusState, FormAssociated, FormParticipant, FormState, RestoreMode};
pub use validity::ValidityState;
pub use value::{FormData, FormEntry, FormValue, number_to_text};
