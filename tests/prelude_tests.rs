//! Facade Tests
//!
//! Tests that the prelude is enough to build, bind and submit a form.

use formbridge::prelude::*;
use rstest::rstest;

field_keys! {
	enum BookField {
		Title => "title",
		Pages => "pages",
	}
}

struct Book {
	title: String,
	pages: f64,
}

impl Bindable for Book {
	type Field = BookField;

	fn field_value(&self, field: BookField) -> FormValue {
		match field {
			BookField::Title => FormValue::from(self.title.as_str()),
			BookField::Pages => FormValue::Number(self.pages),
		}
	}

	fn set_field_value(&mut self, field: BookField, value: FormValue) {
		match (field, value) {
			(BookField::Title, value) => self.title = value.display_text(),
			(BookField::Pages, FormValue::Number(n)) => self.pages = n,
			(BookField::Pages, _) => {}
		}
	}
}

/// Tests a bound form submitted through the facade
#[rstest]
fn test_bound_form_submits() {
	let book = Book {
		title: "Dune".to_string(),
		pages: 412.0,
	};
	let settings = TemplateSettings::default();

	let mut form = FormOwner::new();
	for field in [BookField::Title, BookField::Pages] {
		let control = FieldBinding::new(&book, |_| field).to_control(&settings);
		form.register(control).unwrap();
	}
	form.register(CheckboxGroup::new("format", [("paperback", "Paperback")]))
		.unwrap();

	let data = form.submit().unwrap();
	assert_eq!(data.to_urlencoded().unwrap(), "title=Dune&pages=412");
	assert_eq!(property_name(&book, |_| BookField::Pages), "pages");
}

/// Tests that blocked submissions surface the form error
#[rstest]
fn test_blocked_submission() {
	let mut form = FormOwner::new();
	form.register(InputField::new("title", InputType::Text).required())
		.unwrap();

	let result: FormResult<FormData> = form.submit();
	assert!(matches!(result, Err(FormError::Invalid { .. })));
}
