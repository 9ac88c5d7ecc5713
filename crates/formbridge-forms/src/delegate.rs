//! Delegate controls
//!
//! A form-associated component never computes validity itself. It owns a delegate
//! control (the editable widget doing the actual input handling) and forwards that
//! control's validity, validation message and identity to the association handle.
//!
//! [`InputElement`] is a delegate with native-style constraint validation for the
//! common `<input>` types.

use crate::error::{FormError, FormResult};
use crate::validity::ValidityState;
use crate::value::number_to_text;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

// Same shape browsers accept for `type="email"`.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(
		r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
	)
	.expect("EMAIL_REGEX: invalid regex pattern")
});

/// The editable control a form-associated component delegates to
pub trait DelegateControl: fmt::Debug {
	/// Element id, used as the anchor for validation UI
	fn id(&self) -> &str;

	/// Current constraint validation result
	fn validity(&self) -> ValidityState;

	/// Human readable message for the current validity, empty when valid
	fn validation_message(&self) -> String;

	fn is_focused(&self) -> bool;

	/// Moves focus to the control. Returns `true` if the control gained focus.
	fn focus(&mut self) -> bool;

	/// Removes focus from the control. Returns `true` if the control lost focus.
	fn blur(&mut self) -> bool;
}

/// `<input>` types understood by [`InputElement`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputType {
	#[default]
	Text,
	Email,
	Number,
	Password,
	Search,
	Tel,
	Checkbox,
}

impl InputType {
	/// Value of the `type` attribute
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Text => "text",
			Self::Email => "email",
			Self::Number => "number",
			Self::Password => "password",
			Self::Search => "search",
			Self::Tel => "tel",
			Self::Checkbox => "checkbox",
		}
	}

	fn supports_pattern(&self) -> bool {
		matches!(
			self,
			Self::Text | Self::Email | Self::Password | Self::Search | Self::Tel
		)
	}

	fn supports_length(&self) -> bool {
		!matches!(self, Self::Number | Self::Checkbox)
	}
}

/// Delegate control modelled on a native `<input>` element
#[derive(Debug, Clone)]
pub struct InputElement {
	id: String,
	input_type: InputType,
	value: String,
	checked: bool,
	placeholder: Option<String>,
	required: bool,
	disabled: bool,
	readonly: bool,
	pattern: Option<(String, Regex)>,
	min_length: Option<usize>,
	max_length: Option<usize>,
	min: Option<f64>,
	max: Option<f64>,
	step: Option<f64>,
	custom_validity: String,
	focused: bool,
}

impl InputElement {
	/// Creates an empty, unconstrained input
	///
	/// # Examples
	///
	/// ```
	/// use formbridge_forms::{DelegateControl, InputElement, InputType};
	///
	/// let input = InputElement::new("email-input", InputType::Email).required();
	/// assert!(!input.validity().is_valid());
	/// assert_eq!(input.validation_message(), "Please fill out this field.");
	/// ```
	pub fn new(id: impl Into<String>, input_type: InputType) -> Self {
		Self {
			id: id.into(),
			input_type,
			value: String::new(),
			checked: false,
			placeholder: None,
			required: false,
			disabled: false,
			readonly: false,
			pattern: None,
			min_length: None,
			max_length: None,
			min: None,
			max: None,
			step: None,
			custom_validity: String::new(),
			focused: false,
		}
	}

	pub fn required(mut self) -> Self {
		self.required = true;
		self
	}

	pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.placeholder = Some(placeholder.into());
		self
	}

	/// Adds a `pattern` constraint. The pattern must match the whole value.
	///
	/// # Examples
	///
	/// ```
	/// use formbridge_forms::{DelegateControl, InputElement, InputType};
	///
	/// let mut input = InputElement::new("zip", InputType::Text)
	///     .with_pattern("[0-9]{5}")
	///     .unwrap();
	/// input.set_value("1234x");
	/// assert!(input.validity().pattern_mismatch);
	///
	/// assert!(InputElement::new("bad", InputType::Text).with_pattern("(").is_err());
	/// ```
	pub fn with_pattern(mut self, pattern: &str) -> FormResult<Self> {
		let regex = Regex::new(&format!("^(?:{pattern})$")).map_err(|source| {
			FormError::InvalidPattern {
				pattern: pattern.to_string(),
				source,
			}
		})?;
		self.pattern = Some((pattern.to_string(), regex));
		Ok(self)
	}

	pub fn with_min_length(mut self, min_length: usize) -> Self {
		self.min_length = Some(min_length);
		self
	}

	pub fn with_max_length(mut self, max_length: usize) -> Self {
		self.max_length = Some(max_length);
		self
	}

	pub fn with_min(mut self, min: f64) -> Self {
		self.min = Some(min);
		self
	}

	pub fn with_max(mut self, max: f64) -> Self {
		self.max = Some(max);
		self
	}

	pub fn with_step(mut self, step: f64) -> Self {
		self.step = Some(step);
		self
	}

	pub fn input_type(&self) -> InputType {
		self.input_type
	}

	pub fn value(&self) -> &str {
		&self.value
	}

	pub fn set_value(&mut self, value: impl Into<String>) {
		self.value = value.into();
	}

	pub fn checked(&self) -> bool {
		self.checked
	}

	pub fn set_checked(&mut self, checked: bool) {
		self.checked = checked;
	}

	pub fn placeholder(&self) -> Option<&str> {
		self.placeholder.as_deref()
	}

	pub fn is_required(&self) -> bool {
		self.required
	}

	pub fn set_required(&mut self, required: bool) {
		self.required = required;
	}

	pub fn is_disabled(&self) -> bool {
		self.disabled
	}

	/// Disabling a focused control drops its focus
	pub fn set_disabled(&mut self, disabled: bool) {
		self.disabled = disabled;
		if disabled {
			self.focused = false;
		}
	}

	pub fn is_readonly(&self) -> bool {
		self.readonly
	}

	pub fn set_readonly(&mut self, readonly: bool) {
		self.readonly = readonly;
	}

	pub fn pattern(&self) -> Option<&str> {
		self.pattern.as_ref().map(|(source, _)| source.as_str())
	}

	pub fn min_length(&self) -> Option<usize> {
		self.min_length
	}

	pub fn max_length(&self) -> Option<usize> {
		self.max_length
	}

	pub fn min(&self) -> Option<f64> {
		self.min
	}

	pub fn max(&self) -> Option<f64> {
		self.max
	}

	pub fn step(&self) -> Option<f64> {
		self.step
	}

	/// Sets a custom error. An empty message clears it.
	pub fn set_custom_validity(&mut self, message: impl Into<String>) {
		self.custom_validity = message.into();
	}

	/// Value parsed as a number, `None` when empty or not numeric
	pub fn value_as_number(&self) -> Option<f64> {
		self.value.trim().parse::<f64>().ok().filter(|n| n.is_finite())
	}

	// Disabled and readonly controls are barred from constraint validation.
	fn will_validate(&self) -> bool {
		!self.disabled && !self.readonly
	}

	fn compute_validity(&self) -> ValidityState {
		let mut state = ValidityState {
			custom_error: !self.custom_validity.is_empty(),
			..ValidityState::VALID
		};

		if self.input_type == InputType::Checkbox {
			state.value_missing = self.required && !self.checked;
			return state;
		}

		if self.value.is_empty() {
			state.value_missing = self.required;
			return state;
		}

		let length = self.value.chars().count();
		if self.input_type.supports_length() {
			state.too_long = self.max_length.is_some_and(|max| length > max);
			state.too_short = self.min_length.is_some_and(|min| length < min);
		}

		if self.input_type.supports_pattern() {
			state.pattern_mismatch = self
				.pattern
				.as_ref()
				.is_some_and(|(_, regex)| !regex.is_match(&self.value));
		}

		match self.input_type {
			InputType::Email => {
				state.type_mismatch = !EMAIL_REGEX.is_match(&self.value);
			}
			InputType::Number => match self.value_as_number() {
				None => state.bad_input = true,
				Some(n) => {
					state.range_underflow = self.min.is_some_and(|min| n < min);
					state.range_overflow = self.max.is_some_and(|max| n > max);
					state.step_mismatch = self.step.is_some_and(|step| {
						let base = self.min.unwrap_or(0.0);
						let steps = (n - base) / step;
						(steps - steps.round()).abs() > 1e-9
					});
				}
			},
			_ => {}
		}

		state
	}
}

impl DelegateControl for InputElement {
	fn id(&self) -> &str {
		&self.id
	}

	fn validity(&self) -> ValidityState {
		if !self.will_validate() {
			return ValidityState::VALID;
		}
		self.compute_validity()
	}

	fn validation_message(&self) -> String {
		let state = self.validity();
		if state.is_valid() {
			return String::new();
		}
		if state.custom_error {
			return self.custom_validity.clone();
		}
		if state.value_missing {
			return if self.input_type == InputType::Checkbox {
				"Please check this box if you want to proceed.".to_string()
			} else {
				"Please fill out this field.".to_string()
			};
		}
		if state.bad_input {
			return "Please enter a number.".to_string();
		}
		if state.type_mismatch {
			return "Please enter an email address.".to_string();
		}
		if state.pattern_mismatch {
			return "Please match the requested format.".to_string();
		}
		let length = self.value.chars().count();
		if let (true, Some(max)) = (state.too_long, self.max_length) {
			return format!(
				"Please shorten this text to {max} characters or less (you are currently using {length} characters)."
			);
		}
		if let (true, Some(min)) = (state.too_short, self.min_length) {
			return format!(
				"Please lengthen this text to {min} characters or more (you are currently using {length} characters)."
			);
		}
		if let (true, Some(min)) = (state.range_underflow, self.min) {
			return format!(
				"Value must be greater than or equal to {}.",
				number_to_text(min)
			);
		}
		if let (true, Some(max)) = (state.range_overflow, self.max) {
			return format!("Value must be less than or equal to {}.", number_to_text(max));
		}
		"Please enter a valid value.".to_string()
	}

	fn is_focused(&self) -> bool {
		self.focused
	}

	fn focus(&mut self) -> bool {
		if self.disabled || self.focused {
			return false;
		}
		self.focused = true;
		true
	}

	fn blur(&mut self) -> bool {
		let was_focused = self.focused;
		self.focused = false;
		was_focused
	}
}
