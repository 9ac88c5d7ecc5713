//! Field bindings
//!
//! A [`FieldBinding`] describes "bind an input to field Y of object Z". It resolves
//! the field through a typed selector, captures the field's current value and
//! carries a restricted set of presentation overrides. Identity attributes (name,
//! id and value) always come from the bound field and cannot be overridden.
//!
//! ```text
//! data + selector ──▶ FieldBinding ──into_control──▶ InputField
//!                          ▲                              │
//!                          └────────── apply ◀────────────┘
//! ```

use crate::config::TemplateSettings;
use crate::controls::InputField;
use crate::resolver::{Bindable, FieldKey, FieldMap, resolve_field};
use crate::template::ControlSize;
use formbridge_forms::{FormParticipant, FormValue, InputType};

/// Attributes a binding may override on the generated control
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputOverrides {
	pub label: Option<String>,
	pub help_text: Option<String>,
	pub placeholder: Option<String>,
	pub size: Option<ControlSize>,
	pub input_type: Option<InputType>,
	pub disabled: bool,
	pub readonly: bool,
	pub required: bool,
}

/// Binding of an input control to one field of a data object
///
/// # Examples
///
/// ```
/// use formbridge_forms::{FormParticipant, FormValue};
/// use formbridge_pages::{field_keys, Bindable, FieldBinding, TemplateSettings};
///
/// field_keys! {
///     pub enum ProfileField {
///         Nickname => "nickname",
///     }
/// }
///
/// struct Profile {
///     nickname: String,
/// }
///
/// impl Bindable for Profile {
///     type Field = ProfileField;
///
///     fn field_value(&self, _field: ProfileField) -> FormValue {
///         FormValue::from(self.nickname.as_str())
///     }
///
///     fn set_field_value(&mut self, _field: ProfileField, value: FormValue) {
///         self.nickname = value.display_text();
///     }
/// }
///
/// let mut profile = Profile { nickname: "jb".into() };
/// let binding = FieldBinding::new(&profile, |_| ProfileField::Nickname).with_label("Nickname");
///
/// let mut control = binding.to_control(&TemplateSettings::default());
/// assert_eq!(control.name(), "nickname");
/// assert_eq!(control.value(), &FormValue::from("jb"));
///
/// control.handle_input("jimbo");
/// binding.apply(&mut profile, &control);
/// assert_eq!(profile.nickname, "jimbo");
/// ```
#[derive(Debug, Clone)]
pub struct FieldBinding<K> {
	field: K,
	value: FormValue,
	overrides: InputOverrides,
}

impl<K: FieldKey> FieldBinding<K> {
	/// Binds to the field `selector` picks on `data`
	pub fn new<T, F>(data: &T, selector: F) -> Self
	where
		T: Bindable<Field = K>,
		F: FnOnce(&FieldMap<K>) -> K,
	{
		let field = resolve_field(selector);
		Self {
			field,
			value: data.field_value(field),
			overrides: InputOverrides::default(),
		}
	}

	pub fn field(&self) -> K {
		self.field
	}

	/// Property name of the bound field
	pub fn name(&self) -> &'static str {
		self.field.name()
	}

	/// Field value captured when the binding was created
	pub fn value(&self) -> &FormValue {
		&self.value
	}

	pub fn overrides(&self) -> &InputOverrides {
		&self.overrides
	}

	pub fn with_overrides(mut self, overrides: InputOverrides) -> Self {
		self.overrides = overrides;
		self
	}

	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.overrides.label = Some(label.into());
		self
	}

	pub fn with_help_text(mut self, help_text: impl Into<String>) -> Self {
		self.overrides.help_text = Some(help_text.into());
		self
	}

	pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.overrides.placeholder = Some(placeholder.into());
		self
	}

	pub fn with_size(mut self, size: ControlSize) -> Self {
		self.overrides.size = Some(size);
		self
	}

	pub fn with_input_type(mut self, input_type: InputType) -> Self {
		self.overrides.input_type = Some(input_type);
		self
	}

	pub fn disabled(mut self) -> Self {
		self.overrides.disabled = true;
		self
	}

	pub fn readonly(mut self) -> Self {
		self.overrides.readonly = true;
		self
	}

	pub fn required(mut self) -> Self {
		self.overrides.required = true;
		self
	}

	/// Input type used when none is overridden
	fn inferred_input_type(&self) -> InputType {
		match self.value {
			FormValue::Number(_) => InputType::Number,
			_ => InputType::Text,
		}
	}

	/// Builds an input named after the field and holding its captured value.
	///
	/// The captured value also becomes the control's reset default.
	pub fn to_control(&self, settings: &TemplateSettings) -> InputField {
		let input_type = self
			.overrides
			.input_type
			.unwrap_or_else(|| self.inferred_input_type());

		let mut control = InputField::with_settings(self.name(), input_type, settings)
			.with_default(self.value.clone());

		let overrides = &self.overrides;
		if let Some(label) = &overrides.label {
			control = control.with_label(label.clone());
		}
		if let Some(help_text) = &overrides.help_text {
			control = control.with_help_text(help_text.clone());
		}
		if let Some(placeholder) = &overrides.placeholder {
			control = control.with_placeholder(placeholder.clone());
		}
		if let Some(size) = overrides.size {
			control = control.with_size(size);
		}
		control.set_required(overrides.required);
		control.set_readonly(overrides.readonly);
		control.set_disabled(overrides.disabled);

		tracing::debug!(
			field = self.name(),
			input_type = input_type.as_str(),
			"bound input to field"
		);

		control
	}

	/// Writes the control's current value back into the bound field
	pub fn apply<T>(&self, data: &mut T, control: &InputField)
	where
		T: Bindable<Field = K>,
	{
		data.set_field_value(self.field, control.value().clone());
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	crate::field_keys! {
		enum ItemField {
			Title => "title",
			Price => "price",
		}
	}

	#[derive(Debug)]
	struct Item {
		title: String,
		price: f64,
	}

	impl Bindable for Item {
		type Field = ItemField;

		fn field_value(&self, field: ItemField) -> FormValue {
			match field {
				ItemField::Title => FormValue::from(self.title.as_str()),
				ItemField::Price => FormValue::Number(self.price),
			}
		}

		fn set_field_value(&mut self, field: ItemField, value: FormValue) {
			match (field, value) {
				(ItemField::Title, value) => self.title = value.display_text(),
				(ItemField::Price, FormValue::Number(n)) => self.price = n,
				(ItemField::Price, _) => {}
			}
		}
	}

	fn item() -> Item {
		Item {
			title: "Lamp".to_string(),
			price: 19.5,
		}
	}

	#[rstest]
	#[case(ItemField::Title, InputType::Text)]
	#[case(ItemField::Price, InputType::Number)]
	fn test_input_type_follows_value(#[case] field: ItemField, #[case] expected: InputType) {
		let control = FieldBinding::new(&item(), |_| field).to_control(&TemplateSettings::default());
		assert_eq!(control.input_type(), expected);
	}

	#[rstest]
	fn test_control_holds_current_value() {
		let control = FieldBinding::new(&item(), |_| ItemField::Price)
			.to_control(&TemplateSettings::default());
		assert_eq!(control.name(), "price");
		assert_eq!(control.delegate().value(), "19.5");
		assert_eq!(control.internals().form_value().unwrap().get("price"), Some("19.5"));
	}

	#[rstest]
	fn test_overrides_are_applied() {
		let settings = TemplateSettings {
			id_prefix: "shop".to_string(),
			..Default::default()
		};
		let control = FieldBinding::new(&item(), |_| ItemField::Title)
			.with_label("Title")
			.with_help_text("Shown in listings")
			.with_placeholder("Name")
			.with_size(ControlSize::Small)
			.with_input_type(InputType::Search)
			.required()
			.readonly()
			.to_control(&settings);

		assert_eq!(control.input_type(), InputType::Search);
		assert_eq!(control.options().label, "Title");
		assert_eq!(control.options().help_text, "Shown in listings");
		assert_eq!(control.options().size, ControlSize::Small);
		assert_eq!(control.options().input_id, "shop-title-input");
		assert_eq!(control.delegate().placeholder(), Some("Name"));
		assert!(control.form_association().required());
		assert!(control.form_association().readonly());
		assert!(!control.form_association().disabled());
	}

	#[rstest]
	fn test_apply_writes_back_and_reset_restores_bound_value() {
		let mut data = item();
		let binding = FieldBinding::new(&data, |fields| {
			fields.get("price").unwrap_or(ItemField::Title)
		});
		let mut control = binding.to_control(&TemplateSettings::default());

		control.handle_input("24");
		binding.apply(&mut data, &control);
		assert_eq!(data.price, 24.0);

		control.form_reset_callback();
		assert_eq!(control.value(), &FormValue::Number(19.5));
	}
}
