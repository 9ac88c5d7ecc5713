//! Form participation for custom components
//!
//! Any component can take part in form submission and validation by holding a
//! [`FormAssociated`] helper and implementing [`FormParticipant`]. The helper owns the
//! component's logical value, its reflected flags, its focus state and the single
//! association handle acquired at construction. The trait supplies the
//! synchronization logic on top of the callbacks each component must implement.
//!
//! ## Synchronization
//!
//! ```text
//! ┌───────────────┐  validity, message, id  ┌─────────────────┐
//! │DelegateControl│ ───────────────────────▶│                 │
//! └───────────────┘                         │ update_internals│──▶ ElementInternals
//! ┌───────────────┐  value (FormValue)      │                 │    (value, validity)
//! │FormAssociated │ ───────────────────────▶│                 │
//! └───────────────┘                         └─────────────────┘
//! ```
//!
//! Synchronization is pushed by the component, never triggered reactively: the
//! delegate control's validity is read exactly when [`FormParticipant::update_internals`]
//! runs. [`FormParticipant::commit_value`] is the synchronization point for value
//! mutations that should become visible to the form. It hands the value to the
//! host's [`FormParticipant::apply_value`] first, so the delegate control always
//! validates the value being reported.
//!
//! ## Focus
//!
//! ```text
//!            handle_focus (emits focus)
//! Unfocused ───────────────────────────▶ Focused
//!     ▲                                     │
//!     └─────────────────────────────────────┘
//!            handle_blur (emits blur)
//! ```

use crate::delegate::DelegateControl;
use crate::events::{ControlEvent, ControlEventKind, EventListeners, ListenerId};
use crate::internals::{ElementInternals, Internals};
use crate::validity::ValidityState;
use crate::value::FormValue;
use std::fmt;

/// Focus state of a form-associated component
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FocusState {
	#[default]
	Unfocused,
	Focused,
}

/// Why the enclosing form is restoring a component's state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreMode {
	/// Session history navigation or browser restart
	Restore,
	/// Autofill
	Autocomplete,
}

impl RestoreMode {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Restore => "restore",
			Self::Autocomplete => "autocomplete",
		}
	}
}

/// Opaque token a component hands back to itself on state restoration
#[derive(Debug, Clone, PartialEq)]
pub struct FormState(FormValue);

impl FormState {
	pub fn value(&self) -> &FormValue {
		&self.0
	}

	pub fn into_value(self) -> FormValue {
		self.0
	}
}

impl From<FormValue> for FormState {
	fn from(value: FormValue) -> Self {
		Self(value)
	}
}

/// Form participation state shared by every form-associated component
///
/// Holds the association handle for the component's whole lifetime. The handle is
/// created with the helper and cannot be replaced afterwards.
pub struct FormAssociated {
	name: String,
	value: FormValue,
	readonly: bool,
	disabled: bool,
	required: bool,
	invalid: bool,
	focus: FocusState,
	internals: Box<dyn ElementInternals>,
	listeners: EventListeners,
}

impl FormAssociated {
	/// Creates the helper with an in-memory association handle
	///
	/// # Examples
	///
	/// ```
	/// use formbridge_forms::{FormAssociated, FormValue};
	///
	/// let assoc = FormAssociated::new("email");
	/// assert_eq!(assoc.name(), "email");
	/// assert_eq!(assoc.value(), &FormValue::Unsupported);
	/// assert!(!assoc.has_focus());
	/// ```
	pub fn new(name: impl Into<String>) -> Self {
		Self::with_internals(name, Box::new(Internals::new()))
	}

	/// Creates the helper around a handle supplied by the host environment
	pub fn with_internals(name: impl Into<String>, internals: Box<dyn ElementInternals>) -> Self {
		Self {
			name: name.into(),
			value: FormValue::Unsupported,
			readonly: false,
			disabled: false,
			required: false,
			invalid: false,
			focus: FocusState::Unfocused,
			internals,
			listeners: EventListeners::new(),
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn set_name(&mut self, name: impl Into<String>) {
		self.name = name.into();
	}

	pub fn value(&self) -> &FormValue {
		&self.value
	}

	/// Replaces the logical value without synchronizing it.
	///
	/// Prefer [`FormParticipant::commit_value`] unless several mutations are batched
	/// before one explicit [`FormParticipant::update_internals`].
	pub fn set_value(&mut self, value: impl Into<FormValue>) {
		self.value = value.into();
	}

	pub fn readonly(&self) -> bool {
		self.readonly
	}

	pub fn set_readonly(&mut self, readonly: bool) {
		self.readonly = readonly;
	}

	pub fn disabled(&self) -> bool {
		self.disabled
	}

	pub fn set_disabled(&mut self, disabled: bool) {
		self.disabled = disabled;
	}

	pub fn required(&self) -> bool {
		self.required
	}

	pub fn set_required(&mut self, required: bool) {
		self.required = required;
	}

	/// Whether the last synchronization reported a failed constraint
	pub fn invalid(&self) -> bool {
		self.invalid
	}

	pub fn has_focus(&self) -> bool {
		self.focus == FocusState::Focused
	}

	pub fn focus_state(&self) -> FocusState {
		self.focus
	}

	pub fn internals(&self) -> &dyn ElementInternals {
		self.internals.as_ref()
	}

	pub fn add_event_listener<F>(&mut self, kind: ControlEventKind, listener: F) -> ListenerId
	where
		F: Fn(&ControlEvent) + Send + Sync + 'static,
	{
		self.listeners.add(kind, listener)
	}

	pub fn remove_event_listener(&mut self, id: ListenerId) -> bool {
		self.listeners.remove(id)
	}

	/// Attributes reflected onto the component's host element.
	///
	/// Boolean flags are present with an empty value only when set.
	///
	/// # Examples
	///
	/// ```
	/// use formbridge_forms::FormAssociated;
	///
	/// let mut assoc = FormAssociated::new("age");
	/// assoc.set_required(true);
	/// assert_eq!(
	///     assoc.reflected_attributes(),
	///     vec![("name", "age".to_string()), ("required", String::new())]
	/// );
	/// ```
	pub fn reflected_attributes(&self) -> Vec<(&'static str, String)> {
		let mut attributes = vec![("name", self.name.clone())];
		let flags = [
			("readonly", self.readonly),
			("disabled", self.disabled),
			("required", self.required),
			("invalid", self.invalid),
		];
		attributes.extend(
			flags
				.into_iter()
				.filter(|(_, set)| *set)
				.map(|(attr, _)| (attr, String::new())),
		);
		attributes
	}

	/// Pushes the current value and the given validity triple into the handle
	pub fn synchronize(&mut self, validity: ValidityState, message: &str, anchor: &str) {
		let entries = self.value.to_form_data(&self.name);
		let state = FormState::from(self.value.clone());

		tracing::debug!(
			name = %self.name,
			entries = entries.as_ref().map_or(0, |d| d.len()),
			valid = validity.is_valid(),
			"synchronized form internals"
		);

		self.internals.set_form_value(entries, Some(state));
		self.invalid = !validity.is_valid();
		self.internals.set_validity(validity, message, Some(anchor));
	}

	/// Records a focus transition and notifies listeners once
	pub fn record_focus(&mut self, focused: bool) {
		let kind = if focused {
			self.focus = FocusState::Focused;
			ControlEventKind::Focus
		} else {
			self.focus = FocusState::Unfocused;
			ControlEventKind::Blur
		};

		tracing::trace!(name = %self.name, event = kind.as_str(), "focus transition");

		self.listeners.emit(&ControlEvent {
			kind,
			target: self.name.clone(),
		});
	}
}

impl fmt::Debug for FormAssociated {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FormAssociated")
			.field("name", &self.name)
			.field("value", &self.value)
			.field("readonly", &self.readonly)
			.field("disabled", &self.disabled)
			.field("required", &self.required)
			.field("invalid", &self.invalid)
			.field("focus", &self.focus)
			.field("internals", &self.internals)
			.field("listeners", &self.listeners)
			.finish()
	}
}

/// Contract a component satisfies to participate in an enclosing form
///
/// Implementors supply access to their [`FormAssociated`] helper and delegate
/// control, the value setter, and the reset and restoration callbacks. Everything
/// else is provided.
///
/// Callbacks must not panic. The enclosing form isolates a panicking reset callback
/// so the other fields still reset, but the failing field is left as it was.
pub trait FormParticipant {
	fn form_association(&self) -> &FormAssociated;

	fn form_association_mut(&mut self) -> &mut FormAssociated;

	/// The delegate control computing validity for this component
	fn input(&self) -> &dyn DelegateControl;

	fn input_mut(&mut self) -> &mut dyn DelegateControl;

	/// Stores a new value in the host and mirrors it into the delegate control.
	///
	/// Must leave `form_association().value()` holding the value the delegate now
	/// validates. Does not synchronize; [`commit_value`](Self::commit_value) does.
	fn apply_value(&mut self, value: FormValue);

	/// Restores the value to the field's initial state when the form resets
	fn form_reset_callback(&mut self);

	/// Restores the value from a previously saved state token
	fn form_state_restore_callback(&mut self, state: &FormState, mode: RestoreMode);

	/// Declares that this component participates in form submission
	fn form_associated(&self) -> bool {
		true
	}

	/// Component type name used in diagnostics
	fn component_name(&self) -> &'static str {
		std::any::type_name::<Self>()
	}

	fn name(&self) -> &str {
		self.form_association().name()
	}

	fn value(&self) -> &FormValue {
		self.form_association().value()
	}

	fn has_focus(&self) -> bool {
		self.form_association().has_focus()
	}

	fn internals(&self) -> &dyn ElementInternals {
		self.form_association().internals()
	}

	/// Reports the current value and the delegate's validity to the form.
	///
	/// Idempotent: calling it again without a state change reports the same value
	/// and validity.
	fn update_internals(&mut self) {
		let input = self.input();
		let validity = input.validity();
		let message = input.validation_message();
		let anchor = input.id().to_string();

		self.form_association_mut()
			.synchronize(validity, &message, &anchor);
	}

	/// Applies the value through the host and synchronizes it
	fn commit_value(&mut self, value: FormValue) {
		self.apply_value(value);
		self.update_internals();
	}

	/// Handler for the delegate control's focus event
	fn handle_focus(&mut self) {
		self.form_association_mut().record_focus(true);
	}

	/// Handler for the delegate control's blur event
	fn handle_blur(&mut self) {
		self.form_association_mut().record_focus(false);
	}

	/// Moves focus into the delegate control
	fn focus(&mut self) {
		if self.input_mut().focus() {
			self.handle_focus();
		}
	}

	/// Removes focus from the delegate control
	fn blur(&mut self) {
		if self.input_mut().blur() {
			self.handle_blur();
		}
	}
}
