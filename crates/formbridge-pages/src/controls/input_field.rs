//! Single-value input control

use crate::config::TemplateSettings;
use crate::error::PagesResult;
use crate::markup::{attr, flag, host_element};
use crate::template::{ControlSize, FormControlOptions, render_form_control};
use formbridge_forms::{
	DelegateControl, FormAssociated, FormParticipant, FormState, FormValue, InputElement,
	InputType, RestoreMode,
};

/// Labeled input reporting a scalar value to its form
///
/// Number inputs report [`FormValue::Number`] once the text parses, every other type
/// reports [`FormValue::Text`]. Every mutation is committed immediately.
///
/// # Examples
///
/// ```
/// use formbridge_forms::{FormParticipant, FormValue, InputType};
/// use formbridge_pages::InputField;
///
/// let mut age = InputField::new("age", InputType::Number).with_label("Age");
/// age.handle_input("42");
/// assert_eq!(age.value(), &FormValue::Number(42.0));
/// assert_eq!(age.internals().form_value().unwrap().get("age"), Some("42"));
/// ```
#[derive(Debug)]
pub struct InputField {
	assoc: FormAssociated,
	input: InputElement,
	options: FormControlOptions,
	default_value: FormValue,
}

impl InputField {
	pub fn new(name: &str, input_type: InputType) -> Self {
		Self::with_settings(name, input_type, &TemplateSettings::default())
	}

	/// Creates the control with ids and size taken from template settings
	pub fn with_settings(name: &str, input_type: InputType, settings: &TemplateSettings) -> Self {
		let options = FormControlOptions::from_settings(name, settings);
		let mut field = Self {
			assoc: FormAssociated::new(name),
			input: InputElement::new(options.input_id.clone(), input_type),
			options,
			default_value: FormValue::Text(String::new()),
		};
		field.commit_value(FormValue::Text(String::new()));
		field
	}

	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.options.label = label.into();
		self
	}

	pub fn with_help_text(mut self, help_text: impl Into<String>) -> Self {
		self.options.help_text = help_text.into();
		self
	}

	pub fn with_size(mut self, size: ControlSize) -> Self {
		self.options.size = size;
		self
	}

	pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.input = self.input.with_placeholder(placeholder);
		self
	}

	/// Sets the value restored on form reset and makes it the current value
	pub fn with_default(mut self, value: impl Into<FormValue>) -> Self {
		self.default_value = value.into();
		self.set_value(self.default_value.clone());
		self
	}

	pub fn required(mut self) -> Self {
		self.set_required(true);
		self
	}

	pub fn with_pattern(mut self, pattern: &str) -> PagesResult<Self> {
		self.input = self.input.with_pattern(pattern)?;
		self.update_internals();
		Ok(self)
	}

	pub fn with_min_length(mut self, min_length: usize) -> Self {
		self.input = self.input.with_min_length(min_length);
		self.update_internals();
		self
	}

	pub fn with_max_length(mut self, max_length: usize) -> Self {
		self.input = self.input.with_max_length(max_length);
		self.update_internals();
		self
	}

	pub fn with_min(mut self, min: f64) -> Self {
		self.input = self.input.with_min(min);
		self.update_internals();
		self
	}

	pub fn with_max(mut self, max: f64) -> Self {
		self.input = self.input.with_max(max);
		self.update_internals();
		self
	}

	pub fn options(&self) -> &FormControlOptions {
		&self.options
	}

	pub fn options_mut(&mut self) -> &mut FormControlOptions {
		&mut self.options
	}

	/// The delegate `<input>`
	pub fn delegate(&self) -> &InputElement {
		&self.input
	}

	pub fn input_type(&self) -> InputType {
		self.input.input_type()
	}

	pub fn default_value(&self) -> &FormValue {
		&self.default_value
	}

	/// Handles text typed into the delegate. The typed text is kept as is.
	pub fn handle_input(&mut self, text: &str) {
		self.input.set_value(text);
		let value = self.parse(text);
		self.assoc.set_value(value);
		self.update_internals();
	}

	/// Sets the value programmatically and mirrors it into the delegate
	pub fn set_value(&mut self, value: impl Into<FormValue>) {
		self.commit_value(value.into());
	}

	pub fn set_required(&mut self, required: bool) {
		self.assoc.set_required(required);
		self.input.set_required(required);
		self.update_internals();
	}

	pub fn set_disabled(&mut self, disabled: bool) {
		let had_focus = self.input.is_focused();
		self.assoc.set_disabled(disabled);
		self.input.set_disabled(disabled);
		if had_focus && !self.input.is_focused() {
			self.handle_blur();
		}
		self.update_internals();
	}

	pub fn set_readonly(&mut self, readonly: bool) {
		self.assoc.set_readonly(readonly);
		self.input.set_readonly(readonly);
		self.update_internals();
	}

	/// Sets a custom validation error. An empty message clears it.
	pub fn set_custom_validity(&mut self, message: impl Into<String>) {
		self.input.set_custom_validity(message);
		self.update_internals();
	}

	/// Label activation: runs the label handler and moves focus to the input
	pub fn click_label(&mut self) {
		if let Some(handler) = &self.options.on_label_click {
			handler.call(());
		}
		self.focus();
	}

	/// Renders the host element around the labeled input
	pub fn render(&self) -> String {
		let mut input = format!(
			"<input{}{}{}",
			attr("id", self.input.id()),
			attr("type", self.input.input_type().as_str()),
			attr("value", self.input.value()),
		);
		if let Some(placeholder) = self.input.placeholder() {
			input.push_str(&attr("placeholder", placeholder));
		}
		input.push_str(&flag("required", self.input.is_required()));
		input.push_str(&flag("disabled", self.input.is_disabled()));
		input.push_str(&flag("readonly", self.input.is_readonly()));
		if self.assoc.invalid() {
			input.push_str(&attr("aria-invalid", "true"));
		}
		if let Some(ids) = self.options.accessible_label_ids() {
			input.push_str(&attr("aria-describedby", &ids));
		}
		input.push('>');

		let fragment = render_form_control(&self.options, &input);
		host_element(
			"fb-input",
			&self.assoc.reflected_attributes(),
			fragment.markup(),
		)
	}

	fn parse(&self, text: &str) -> FormValue {
		match self.input.input_type() {
			InputType::Number => self
				.input
				.value_as_number()
				.map_or_else(|| FormValue::from(text), FormValue::Number),
			_ => FormValue::from(text),
		}
	}
}

impl FormParticipant for InputField {
	fn form_association(&self) -> &FormAssociated {
		&self.assoc
	}

	fn form_association_mut(&mut self) -> &mut FormAssociated {
		&mut self.assoc
	}

	fn input(&self) -> &dyn DelegateControl {
		&self.input
	}

	fn input_mut(&mut self) -> &mut dyn DelegateControl {
		&mut self.input
	}

	fn apply_value(&mut self, value: FormValue) {
		self.input.set_value(value.display_text());
		self.assoc.set_value(value);
	}

	fn form_reset_callback(&mut self) {
		self.input.set_custom_validity("");
		self.set_value(self.default_value.clone());
	}

	fn form_state_restore_callback(&mut self, state: &FormState, mode: RestoreMode) {
		tracing::debug!(name = %self.assoc.name(), mode = mode.as_str(), "restoring input");
		self.set_value(state.value().clone());
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::sync::Arc;
	use std::sync::atomic::{AtomicUsize, Ordering};

	#[rstest]
	#[case("42", FormValue::Number(42.0))]
	#[case("2.5", FormValue::Number(2.5))]
	#[case("abc", FormValue::from("abc"))]
	#[case("", FormValue::from(""))]
	fn test_number_input_parses_typed_text(#[case] text: &str, #[case] expected: FormValue) {
		let mut field = InputField::new("qty", InputType::Number);
		field.handle_input(text);
		assert_eq!(field.value(), &expected);
	}

	#[rstest]
	fn test_text_input_reports_text_verbatim() {
		let mut field = InputField::new("title", InputType::Text);
		field.handle_input("  spaced  ");
		assert_eq!(
			field.internals().form_value().unwrap().get("title"),
			Some("  spaced  ")
		);
	}

	#[rstest]
	fn test_validity_anchor_is_input_id() {
		let field = InputField::new("email", InputType::Email).required();
		assert!(field.form_association().invalid());
		assert_eq!(field.internals().validation_anchor(), Some("email-input"));
		assert_eq!(
			field.internals().validation_message(),
			"Please fill out this field."
		);
	}

	#[rstest]
	fn test_reset_restores_default_after_edits() {
		let mut field = InputField::new("city", InputType::Text).with_default("Paris");
		field.handle_input("Berlin");
		field.set_custom_validity("Unknown city");

		field.form_reset_callback();

		assert_eq!(field.value(), &FormValue::from("Paris"));
		assert_eq!(field.delegate().value(), "Paris");
		assert!(field.internals().check_validity());
	}

	#[rstest]
	fn test_disabling_focused_field_blurs_it() {
		let blurs = Arc::new(AtomicUsize::new(0));
		let mut field = InputField::new("name", InputType::Text);
		let counter = Arc::clone(&blurs);
		field.form_association_mut().add_event_listener(
			formbridge_forms::ControlEventKind::Blur,
			move |_| {
				counter.fetch_add(1, Ordering::SeqCst);
			},
		);

		field.focus();
		assert!(field.has_focus());

		field.set_disabled(true);
		assert!(!field.has_focus());
		assert_eq!(blurs.load(Ordering::SeqCst), 1);
	}

	#[rstest]
	fn test_click_label_runs_handler_and_focuses() {
		let clicks = Arc::new(AtomicUsize::new(0));
		let mut field = InputField::new("name", InputType::Text).with_label("Name");
		let counter = Arc::clone(&clicks);
		field.options_mut().on_label_click = Some(crate::Callback::new(move |_| {
			counter.fetch_add(1, Ordering::SeqCst);
		}));

		field.click_label();

		assert_eq!(clicks.load(Ordering::SeqCst), 1);
		assert!(field.has_focus());
	}

	#[rstest]
	fn test_render_wires_accessibility_ids() {
		let field = InputField::new("email", InputType::Email)
			.with_label("Email")
			.with_help_text("We never share it")
			.with_placeholder("you@example.com")
			.required();

		let markup = field.render();

		assert!(markup.starts_with("<fb-input name=\"email\" required invalid>"));
		assert!(markup.contains(
			"<input id=\"email-input\" type=\"email\" value=\"\" placeholder=\"you@example.com\" required aria-invalid=\"true\" aria-describedby=\"email-label email-help-text\">"
		));
		assert!(markup.contains("for=\"email-input\""));
		assert!(markup.ends_with("</fb-input>"));
	}

	#[rstest]
	fn test_render_without_label_has_no_describedby() {
		let markup = InputField::new("q", InputType::Search).render();
		assert!(!markup.contains("aria-describedby"));
	}

	#[rstest]
	fn test_invalid_pattern_is_reported() {
		assert!(InputField::new("zip", InputType::Text).with_pattern("(").is_err());
	}
}
