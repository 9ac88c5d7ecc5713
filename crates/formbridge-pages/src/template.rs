//! Form control template composer
//!
//! Assembles the label + input + help-text fragment shared by every control, with
//! stable part and class names and the ids needed for accessibility
//! cross-references.
//!
//! ## Markup
//!
//! ```text
//! div.form-control[part=form-control]
//! ├── label.form-control__label[part=form-control-label]       (for = input id)
//! ├── div.form-control-input[part=form-control-input]          (input markup)
//! └── div.form-control__help-text[part=form-control-help-text]
//! ```
//!
//! The label and help-text containers are `aria-hidden` exactly when neither inline
//! text nor slotted content was supplied for them.

use crate::callback::Callback;
use crate::config::TemplateSettings;
use crate::markup::{attr, text};
use serde::{Deserialize, Serialize};

/// Visual size of a form control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlSize {
	Small,
	#[default]
	Medium,
	Large,
}

impl ControlSize {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Small => "small",
			Self::Medium => "medium",
			Self::Large => "large",
		}
	}
}

/// Declarative options for [`render_form_control`]
#[derive(Debug, Clone)]
pub struct FormControlOptions {
	pub size: ControlSize,
	pub label: String,
	/// Label content is supplied through the `label` slot
	pub has_label_slot: bool,
	pub help_text: String,
	/// Help content is supplied through the `help-text` slot
	pub has_help_text_slot: bool,
	pub input_id: String,
	pub label_id: String,
	pub help_text_id: String,
	pub on_label_click: Option<Callback>,
}

impl FormControlOptions {
	/// Options with ids derived from `base`: `{base}-input`, `{base}-label` and
	/// `{base}-help-text`.
	pub fn new(base: &str) -> Self {
		Self::from_settings(base, &TemplateSettings::default())
	}

	/// Options with ids and size taken from template settings
	pub fn from_settings(base: &str, settings: &TemplateSettings) -> Self {
		Self {
			size: settings.default_size,
			label: String::new(),
			has_label_slot: false,
			help_text: String::new(),
			has_help_text_slot: false,
			input_id: settings.element_id(base, "input"),
			label_id: settings.element_id(base, "label"),
			help_text_id: settings.element_id(base, "help-text"),
			on_label_click: None,
		}
	}

	pub fn with_size(mut self, size: ControlSize) -> Self {
		self.size = size;
		self
	}

	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = label.into();
		self
	}

	pub fn with_label_slot(mut self) -> Self {
		self.has_label_slot = true;
		self
	}

	pub fn with_help_text(mut self, help_text: impl Into<String>) -> Self {
		self.help_text = help_text.into();
		self
	}

	pub fn with_help_text_slot(mut self) -> Self {
		self.has_help_text_slot = true;
		self
	}

	pub fn on_label_click<F>(mut self, handler: F) -> Self
	where
		F: Fn(()) + Send + Sync + 'static,
	{
		self.on_label_click = Some(Callback::new(handler));
		self
	}

	/// Whether any label content is present
	pub fn has_label(&self) -> bool {
		!self.label.is_empty() || self.has_label_slot
	}

	/// Whether any help content is present
	pub fn has_help_text(&self) -> bool {
		!self.help_text.is_empty() || self.has_help_text_slot
	}

	/// Value for the delegate control's `aria-describedby`
	pub fn accessible_label_ids(&self) -> Option<String> {
		compute_accessible_label_ids(
			self.has_label(),
			&self.label_id,
			self.has_help_text(),
			&self.help_text_id,
		)
	}
}

/// Space-joined ids of the present label parts, label first.
///
/// # Examples
///
/// ```
/// use formbridge_pages::compute_accessible_label_ids;
///
/// assert_eq!(compute_accessible_label_ids(false, "l", false, "h"), None);
/// assert_eq!(compute_accessible_label_ids(true, "l", false, "h").as_deref(), Some("l"));
/// assert_eq!(compute_accessible_label_ids(true, "l", true, "h").as_deref(), Some("l h"));
/// ```
pub fn compute_accessible_label_ids(
	has_label: bool,
	label_id: &str,
	has_help_text: bool,
	help_text_id: &str,
) -> Option<String> {
	let ids: Vec<&str> = [(has_label, label_id), (has_help_text, help_text_id)]
		.into_iter()
		.filter_map(|(present, id)| present.then_some(id))
		.collect();

	if ids.is_empty() {
		None
	} else {
		Some(ids.join(" "))
	}
}

/// Rendered form control fragment
#[derive(Debug, Clone)]
pub struct FormControlFragment {
	markup: String,
	on_label_click: Option<Callback>,
}

impl FormControlFragment {
	pub fn markup(&self) -> &str {
		&self.markup
	}

	pub fn into_markup(self) -> String {
		self.markup
	}

	/// Runs the label-click handler. Returns `false` when there is none.
	pub fn click_label(&self) -> bool {
		match &self.on_label_click {
			Some(handler) => {
				handler.call(());
				true
			}
			None => false,
		}
	}
}

fn slot_content(slot: &str, has_slot: bool, fallback: &str) -> String {
	if has_slot {
		format!("<slot{}>{}</slot>", attr("name", slot), text(fallback))
	} else {
		text(fallback)
	}
}

fn aria_hidden(present: bool) -> String {
	attr("aria-hidden", if present { "false" } else { "true" })
}

/// Composes the label, input and help-text fragment around `input_markup`.
///
/// `input_markup` is inserted as-is.
pub fn render_form_control(options: &FormControlOptions, input_markup: &str) -> FormControlFragment {
	let has_label = options.has_label();
	let has_help_text = options.has_help_text();

	let mut classes = format!("form-control form-control--{}", options.size.as_str());
	if has_label {
		classes.push_str(" form-control--has-label");
	}
	if has_help_text {
		classes.push_str(" form-control--has-help-text");
	}

	let label = format!(
		"<label{}{}{}{}{}>{}</label>",
		attr("part", "form-control-label"),
		attr("id", &options.label_id),
		attr("class", "form-control__label"),
		attr("for", &options.input_id),
		aria_hidden(has_label),
		slot_content("label", options.has_label_slot, &options.label),
	);

	let input = format!(
		"<div{}{}>{input_markup}</div>",
		attr("part", "form-control-input"),
		attr("class", "form-control-input"),
	);

	let help_text = format!(
		"<div{}{}{}{}>{}</div>",
		attr("part", "form-control-help-text"),
		attr("id", &options.help_text_id),
		attr("class", "form-control__help-text"),
		aria_hidden(has_help_text),
		slot_content("help-text", options.has_help_text_slot, &options.help_text),
	);

	let markup = format!(
		"<div{}{}>{label}{input}{help_text}</div>",
		attr("part", "form-control"),
		attr("class", &classes),
	);

	tracing::trace!(
		input_id = %options.input_id,
		has_label,
		has_help_text,
		"rendered form control"
	);

	FormControlFragment {
		markup,
		on_label_click: options.on_label_click.clone(),
	}
}
