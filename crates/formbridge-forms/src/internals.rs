//! The association handle bridging a component to its enclosing form
//!
//! [`ElementInternals`] is the capability a host environment provides: it receives the
//! value a component reports for submission and the validity triple forwarded from the
//! component's delegate control. [`Internals`] is the in-memory implementation used
//! when no other environment is plugged in.

use crate::participant::FormState;
use crate::validity::ValidityState;
use crate::value::FormData;
use std::fmt;

/// Bridge between one component instance and the enclosing form
pub trait ElementInternals: fmt::Debug {
	/// Sets the value reported on submission.
	///
	/// `None` removes the field from submission. `state` is the token handed back to
	/// the component when the form restores state.
	fn set_form_value(&mut self, value: Option<FormData>, state: Option<FormState>);

	/// Sets the reported validity, its message and the element validation UI anchors to
	fn set_validity(&mut self, validity: ValidityState, message: &str, anchor: Option<&str>);

	/// Value last reported with [`set_form_value`](Self::set_form_value)
	fn form_value(&self) -> Option<&FormData>;

	/// Restoration token last reported with [`set_form_value`](Self::set_form_value)
	fn state(&self) -> Option<&FormState>;

	fn validity(&self) -> ValidityState;

	fn validation_message(&self) -> &str;

	fn validation_anchor(&self) -> Option<&str>;

	/// Whether the last reported validity has no failed constraint
	fn check_validity(&self) -> bool {
		self.validity().is_valid()
	}
}

/// In-memory association handle
#[derive(Debug, Default)]
pub struct Internals {
	form_value: Option<FormData>,
	state: Option<FormState>,
	validity: ValidityState,
	validation_message: String,
	validation_anchor: Option<String>,
}

impl Internals {
	pub fn new() -> Self {
		Self::default()
	}
}

impl ElementInternals for Internals {
	fn set_form_value(&mut self, value: Option<FormData>, state: Option<FormState>) {
		self.form_value = value;
		self.state = state;
	}

	fn set_validity(&mut self, validity: ValidityState, message: &str, anchor: Option<&str>) {
		self.validity = validity;
		// A valid control carries no message, whatever the delegate says
		self.validation_message = if validity.is_valid() {
			String::new()
		} else {
			message.to_string()
		};
		self.validation_anchor = anchor.map(str::to_string);
	}

	fn form_value(&self) -> Option<&FormData> {
		self.form_value.as_ref()
	}

	fn state(&self) -> Option<&FormState> {
		self.state.as_ref()
	}

	fn validity(&self) -> ValidityState {
		self.validity
	}

	fn validation_message(&self) -> &str {
		&self.validation_message
	}

	fn validation_anchor(&self) -> Option<&str> {
		self.validation_anchor.as_deref()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::value::FormValue;
	use rstest::rstest;

	#[rstest]
	fn test_new_internals_report_nothing_and_are_valid() {
		let internals = Internals::new();

		assert!(internals.form_value().is_none());
		assert!(internals.state().is_none());
		assert!(internals.check_validity());
		assert_eq!(internals.validation_message(), "");
		assert_eq!(internals.validation_anchor(), None);
	}

	#[rstest]
	fn test_set_form_value_replaces_previous_value() {
		let mut internals = Internals::new();
		let first = FormValue::from("a");
		internals.set_form_value(first.to_form_data("f"), Some(FormState::from(first)));
		internals.set_form_value(None, None);

		assert!(internals.form_value().is_none());
		assert!(internals.state().is_none());
	}

	#[rstest]
	fn test_set_validity_keeps_message_only_when_invalid() {
		let mut internals = Internals::new();
		let missing = ValidityState {
			value_missing: true,
			..ValidityState::VALID
		};

		internals.set_validity(missing, "Please fill out this field.", Some("name-input"));
		assert!(!internals.check_validity());
		assert_eq!(internals.validation_message(), "Please fill out this field.");
		assert_eq!(internals.validation_anchor(), Some("name-input"));

		internals.set_validity(ValidityState::VALID, "stale", Some("name-input"));
		assert!(internals.check_validity());
		assert_eq!(internals.validation_message(), "");
	}
}
