//! Multi-value checkbox group

use crate::config::TemplateSettings;
use crate::markup::{attr, flag, host_element, text};
use crate::template::{FormControlOptions, render_form_control};
use formbridge_forms::{
	DelegateControl, FormAssociated, FormParticipant, FormState, FormValue, InputElement,
	InputType, RestoreMode,
};

/// One selectable option of a [`CheckboxGroup`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckboxOption {
	pub value: String,
	pub label: String,
}

/// Group of checkboxes sharing one name
///
/// The selection is reported as one entry per checked option, in option order.
#[derive(Debug)]
pub struct CheckboxGroup {
	assoc: FormAssociated,
	input: InputElement,
	options: FormControlOptions,
	choices: Vec<CheckboxOption>,
	selected: Vec<String>,
	default_selected: Vec<String>,
}

impl CheckboxGroup {
	/// Creates a group from `(value, label)` pairs with nothing selected
	///
	/// # Examples
	///
	/// ```
	/// use formbridge_pages::CheckboxGroup;
	///
	/// let mut toppings = CheckboxGroup::new("topping", [("ham", "Ham"), ("olives", "Olives")]);
	/// toppings.toggle("olives");
	/// toppings.toggle("ham");
	/// assert_eq!(toppings.selected(), ["ham", "olives"]);
	/// ```
	pub fn new<I, V, L>(name: &str, choices: I) -> Self
	where
		I: IntoIterator<Item = (V, L)>,
		V: Into<String>,
		L: Into<String>,
	{
		Self::with_settings(name, choices, &TemplateSettings::default())
	}

	pub fn with_settings<I, V, L>(name: &str, choices: I, settings: &TemplateSettings) -> Self
	where
		I: IntoIterator<Item = (V, L)>,
		V: Into<String>,
		L: Into<String>,
	{
		let options = FormControlOptions::from_settings(name, settings);
		let mut group = Self {
			assoc: FormAssociated::new(name),
			input: InputElement::new(options.input_id.clone(), InputType::Checkbox),
			options,
			choices: choices
				.into_iter()
				.map(|(value, label)| CheckboxOption {
					value: value.into(),
					label: label.into(),
				})
				.collect(),
			selected: Vec::new(),
			default_selected: Vec::new(),
		};
		group.commit_value(FormValue::Sequence(Vec::new()));
		group
	}

	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.options.label = label.into();
		self
	}

	pub fn with_help_text(mut self, help_text: impl Into<String>) -> Self {
		self.options.help_text = help_text.into();
		self
	}

	/// Sets the selection restored on form reset and makes it current
	pub fn with_default<I, S>(mut self, selected: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.set_selected(selected);
		self.default_selected = self.selected.clone();
		self
	}

	/// At least one option must be checked
	pub fn required(mut self) -> Self {
		self.set_required(true);
		self
	}

	pub fn choices(&self) -> &[CheckboxOption] {
		&self.choices
	}

	pub fn selected(&self) -> &[String] {
		&self.selected
	}

	pub fn is_selected(&self, value: &str) -> bool {
		self.selected.iter().any(|s| s == value)
	}

	pub fn options(&self) -> &FormControlOptions {
		&self.options
	}

	/// Flips one option. Returns whether it is now checked.
	///
	/// Values that are not options of the group are ignored.
	pub fn toggle(&mut self, value: &str) -> bool {
		if !self.choices.iter().any(|c| c.value == value) {
			tracing::warn!(name = %self.assoc.name(), value, "ignoring unknown checkbox value");
			return false;
		}

		let mut selection = self.selected.clone();
		let checked = if self.is_selected(value) {
			selection.retain(|s| s != value);
			false
		} else {
			selection.push(value.to_string());
			true
		};
		self.commit_value(FormValue::Sequence(selection));
		checked
	}

	/// Replaces the selection. Unknown values are dropped.
	pub fn set_selected<I, S>(&mut self, selected: I)
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let selection = selected.into_iter().map(Into::into).collect();
		self.commit_value(FormValue::Sequence(selection));
	}

	pub fn set_required(&mut self, required: bool) {
		self.assoc.set_required(required);
		self.input.set_required(required);
		self.update_internals();
	}

	/// Disabling a focused group blurs it
	pub fn set_disabled(&mut self, disabled: bool) {
		let had_focus = self.input.is_focused();
		self.assoc.set_disabled(disabled);
		self.input.set_disabled(disabled);
		if had_focus && !self.input.is_focused() {
			self.handle_blur();
		}
		self.update_internals();
	}

	/// Renders the host element around the labeled checkboxes
	pub fn render(&self) -> String {
		let mut boxes = String::new();
		for (index, choice) in self.choices.iter().enumerate() {
			let id = if index == 0 {
				self.input.id().to_string()
			} else {
				format!("{}-{index}", self.input.id())
			};
			boxes.push_str(&format!(
				"<label{}><input{}{}{}{}{}{}>{}</label>",
				attr("class", "checkbox"),
				attr("id", &id),
				attr("type", InputType::Checkbox.as_str()),
				attr("value", &choice.value),
				flag("checked", self.is_selected(&choice.value)),
				flag("disabled", self.input.is_disabled()),
				self.options
					.accessible_label_ids()
					.map(|ids| attr("aria-describedby", &ids))
					.unwrap_or_default(),
				text(&choice.label),
			));
		}

		let fragment = render_form_control(&self.options, &boxes);
		host_element(
			"fb-checkbox-group",
			&self.assoc.reflected_attributes(),
			fragment.markup(),
		)
	}

	// Option order, no duplicates, unknown values dropped.
	fn normalize(&self, chosen: &[String]) -> Vec<String> {
		self.choices
			.iter()
			.filter(|c| chosen.contains(&c.value))
			.map(|c| c.value.clone())
			.collect()
	}
}

impl FormParticipant for CheckboxGroup {
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

	/// Only sequences change the selection; other shapes keep the current one.
	fn apply_value(&mut self, value: FormValue) {
		match value {
			FormValue::Sequence(items) => self.selected = self.normalize(&items),
			other => {
				tracing::warn!(
					name = %self.assoc.name(),
					value = ?other,
					"ignoring non-sequence value for checkbox group"
				);
			}
		}
		self.input.set_checked(!self.selected.is_empty());
		self.assoc.set_value(FormValue::Sequence(self.selected.clone()));
	}

	fn form_reset_callback(&mut self) {
		self.set_selected(self.default_selected.clone());
	}

	fn form_state_restore_callback(&mut self, state: &FormState, mode: RestoreMode) {
		tracing::debug!(name = %self.assoc.name(), mode = mode.as_str(), "restoring checkbox group");
		self.commit_value(state.value().clone());
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::{fixture, rstest};
	use std::sync::Arc;
	use std::sync::atomic::{AtomicUsize, Ordering};

	#[fixture]
	fn toppings() -> CheckboxGroup {
		CheckboxGroup::new(
			"topping",
			[("cheese", "Cheese"), ("ham", "Ham"), ("olives", "Olives")],
		)
	}

	#[rstest]
	fn test_selection_follows_option_order(mut toppings: CheckboxGroup) {
		toppings.set_selected(["olives", "cheese", "olives"]);
		assert_eq!(toppings.selected(), ["cheese", "olives"]);
		assert_eq!(
			toppings.internals().form_value().unwrap().get_all("topping"),
			vec!["cheese", "olives"]
		);
	}

	#[rstest]
	fn test_toggle(mut toppings: CheckboxGroup) {
		assert!(toppings.toggle("ham"));
		assert!(toppings.is_selected("ham"));
		assert!(!toppings.toggle("ham"));
		assert!(toppings.selected().is_empty());
		assert!(!toppings.toggle("pineapple"));
	}

	#[rstest]
	fn test_empty_selection_reports_no_entries(toppings: CheckboxGroup) {
		let data = toppings.internals().form_value().unwrap();
		assert!(data.is_empty());
	}

	#[rstest]
	fn test_required_group(toppings: CheckboxGroup) {
		let mut group = toppings.required();
		assert!(group.form_association().invalid());
		assert_eq!(
			group.internals().validation_message(),
			"Please check this box if you want to proceed."
		);

		group.toggle("cheese");
		assert!(!group.form_association().invalid());
	}

	#[rstest]
	fn test_reset_restores_default_selection(toppings: CheckboxGroup) {
		let mut group = toppings.with_default(["ham"]);
		group.set_selected(["cheese", "olives"]);

		group.form_reset_callback();
		assert_eq!(group.selected(), ["ham"]);
	}

	#[rstest]
	fn test_restore_ignores_scalar_state(mut toppings: CheckboxGroup) {
		toppings.set_selected(["ham"]);
		toppings.form_state_restore_callback(&FormState::from(FormValue::from("x")), RestoreMode::Restore);
		assert_eq!(toppings.selected(), ["ham"]);
	}

	#[rstest]
	fn test_disabling_focused_group_blurs_it(mut toppings: CheckboxGroup) {
		let blurs = Arc::new(AtomicUsize::new(0));
		let counter = Arc::clone(&blurs);
		toppings.form_association_mut().add_event_listener(
			formbridge_forms::ControlEventKind::Blur,
			move |_| {
				counter.fetch_add(1, Ordering::SeqCst);
			},
		);

		toppings.focus();
		assert!(toppings.has_focus());

		toppings.set_disabled(true);
		assert!(!toppings.has_focus());
		assert_eq!(blurs.load(Ordering::SeqCst), 1);

		toppings.blur();
		assert_eq!(blurs.load(Ordering::SeqCst), 1);
	}

	#[rstest]
	fn test_committed_sequence_updates_selection(toppings: CheckboxGroup) {
		let mut group = toppings.required();
		group.commit_value(FormValue::from(vec!["olives", "pineapple", "ham"]));

		assert_eq!(group.selected(), ["ham", "olives"]);
		assert!(group.input.checked());
		assert!(group.internals().check_validity());
		assert_eq!(
			group.internals().form_value().unwrap().get_all("topping"),
			vec!["ham", "olives"]
		);
	}

	#[rstest]
	fn test_render_marks_checked_options(mut toppings: CheckboxGroup) {
		toppings.set_selected(["ham"]);
		let markup = toppings.render();

		assert!(markup.starts_with("<fb-checkbox-group name=\"topping\">"));
		assert!(markup.contains(
			"<input id=\"topping-input\" type=\"checkbox\" value=\"cheese\">Cheese</label>"
		));
		assert!(markup.contains(
			"<input id=\"topping-input-1\" type=\"checkbox\" value=\"ham\" checked>Ham</label>"
		));
	}
}
