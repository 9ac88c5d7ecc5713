//! Form values and the entries they contribute to a submission
//!
//! A component's logical value is held as a [`FormValue`], a tagged variant that is
//! resolved once when the value is set. Synchronizing it into the association handle
//! is then a total match over the variants:
//!
//! | Variant | Reported entries |
//! |---------|------------------|
//! | `Sequence` | one entry per element, same name, in order |
//! | `Number` | one entry, decimal text |
//! | `Text` | one entry, verbatim |
//! | `Unsupported` | none (field absent from submission) |

use crate::error::FormResult;
use serde::Serialize;

/// Logical value of a form-associated component
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FormValue {
	/// Multi-value field, e.g. several checkboxes sharing a name
	Sequence(Vec<String>),
	/// Numeric field
	Number(f64),
	/// Plain text field
	Text(String),
	/// Any other shape; excluded from submission
	#[default]
	Unsupported,
}

impl FormValue {
	/// Returns the entries this value contributes under `name`.
	///
	/// `None` means the field is absent from the submission, which is how
	/// uninitialized or structured values are treated.
	///
	/// # Examples
	///
	/// ```
	/// use formbridge_forms::FormValue;
	///
	/// let data = FormValue::from(vec!["red", "blue"]).to_form_data("color").unwrap();
	/// assert_eq!(data.get_all("color"), vec!["red", "blue"]);
	///
	/// let data = FormValue::from(42).to_form_data("age").unwrap();
	/// assert_eq!(data.get("age"), Some("42"));
	///
	/// assert!(FormValue::Unsupported.to_form_data("meta").is_none());
	/// ```
	pub fn to_form_data(&self, name: &str) -> Option<FormData> {
		match self {
			Self::Sequence(items) => {
				let mut data = FormData::new();
				for item in items {
					data.append(name, item.clone());
				}
				Some(data)
			}
			Self::Number(n) => Some(FormData::single(name, number_to_text(*n))),
			Self::Text(text) => Some(FormData::single(name, text.clone())),
			Self::Unsupported => None,
		}
	}

	/// Whether this value contributes at least a slot in the submission
	pub fn is_submittable(&self) -> bool {
		!matches!(self, Self::Unsupported)
	}

	/// Text shown in a single-line control for this value
	pub fn display_text(&self) -> String {
		match self {
			Self::Sequence(items) => items.join(","),
			Self::Number(n) => number_to_text(*n),
			Self::Text(text) => text.clone(),
			Self::Unsupported => String::new(),
		}
	}
}

/// Plain decimal text of a number as reported in form submissions
///
/// Uses the shortest round-trip digits and never switches to exponent notation,
/// so `1e21` is written out in full. NaN and the infinities keep their names.
pub fn number_to_text(n: f64) -> String {
	if n.is_nan() {
		"NaN".to_string()
	} else if n.is_infinite() {
		let text = if n > 0.0 { "Infinity" } else { "-Infinity" };
		text.to_string()
	} else if n == 0.0 {
		// -0 stringifies as "0"
		"0".to_string()
	} else {
		n.to_string()
	}
}

impl From<String> for FormValue {
	fn from(value: String) -> Self {
		Self::Text(value)
	}
}

impl From<&str> for FormValue {
	fn from(value: &str) -> Self {
		Self::Text(value.to_string())
	}
}

impl From<f64> for FormValue {
	fn from(value: f64) -> Self {
		Self::Number(value)
	}
}

impl From<f32> for FormValue {
	fn from(value: f32) -> Self {
		Self::Number(f64::from(value))
	}
}

impl From<i32> for FormValue {
	fn from(value: i32) -> Self {
		Self::Number(f64::from(value))
	}
}

impl From<u32> for FormValue {
	fn from(value: u32) -> Self {
		Self::Number(f64::from(value))
	}
}

impl From<i64> for FormValue {
	fn from(value: i64) -> Self {
		Self::Number(value as f64)
	}
}

impl From<Vec<String>> for FormValue {
	fn from(value: Vec<String>) -> Self {
		Self::Sequence(value)
	}
}

impl From<Vec<&str>> for FormValue {
	fn from(value: Vec<&str>) -> Self {
		Self::Sequence(value.into_iter().map(str::to_string).collect())
	}
}

impl<T: Into<FormValue>> From<Option<T>> for FormValue {
	fn from(value: Option<T>) -> Self {
		value.map_or(Self::Unsupported, Into::into)
	}
}

impl From<serde_json::Value> for FormValue {
	/// Strings, numbers and arrays of strings map onto their variants; anything
	/// else (objects, booleans, null, mixed arrays) is `Unsupported`.
	fn from(value: serde_json::Value) -> Self {
		use serde_json::Value;

		match value {
			Value::String(s) => Self::Text(s),
			Value::Number(n) => n.as_f64().map_or(Self::Unsupported, Self::Number),
			Value::Array(items) => items
				.into_iter()
				.map(|item| match item {
					Value::String(s) => Some(s),
					_ => None,
				})
				.collect::<Option<Vec<_>>>()
				.map_or(Self::Unsupported, Self::Sequence),
			_ => Self::Unsupported,
		}
	}
}

/// One `name=value` pair of a submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormEntry {
	/// Field name
	pub name: String,
	/// Field value
	pub value: String,
}

/// Ordered multimap of form entries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
	entries: Vec<FormEntry>,
}

impl FormData {
	/// Creates an empty set of entries
	pub fn new() -> Self {
		Self::default()
	}

	fn single(name: &str, value: String) -> Self {
		let mut data = Self::new();
		data.append(name, value);
		data
	}

	/// Appends an entry, keeping any existing entries of the same name
	pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
		self.entries.push(FormEntry {
			name: name.into(),
			value: value.into(),
		});
	}

	/// Appends every entry of `other`, preserving order
	pub fn extend(&mut self, other: FormData) {
		self.entries.extend(other.entries);
	}

	/// First value reported under `name`
	pub fn get(&self, name: &str) -> Option<&str> {
		self.entries
			.iter()
			.find(|e| e.name == name)
			.map(|e| e.value.as_str())
	}

	/// Every value reported under `name`, in order
	pub fn get_all(&self, name: &str) -> Vec<&str> {
		self.entries
			.iter()
			.filter(|e| e.name == name)
			.map(|e| e.value.as_str())
			.collect()
	}

	/// Whether any entry is reported under `name`
	pub fn contains(&self, name: &str) -> bool {
		self.entries.iter().any(|e| e.name == name)
	}

	pub fn iter(&self) -> impl Iterator<Item = &FormEntry> {
		self.entries.iter()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Encodes the entries as `application/x-www-form-urlencoded`
	///
	/// # Examples
	///
	/// ```
	/// use formbridge_forms::FormData;
	///
	/// let mut data = FormData::new();
	/// data.append("q", "rust forms");
	/// data.append("tag", "a&b");
	/// assert_eq!(data.to_urlencoded().unwrap(), "q=rust+forms&tag=a%26b");
	/// ```
	pub fn to_urlencoded(&self) -> FormResult<String> {
		let pairs: Vec<(&str, &str)> = self
			.entries
			.iter()
			.map(|e| (e.name.as_str(), e.value.as_str()))
			.collect();
		Ok(serde_urlencoded::to_string(pairs)?)
	}
}

impl<'a> IntoIterator for &'a FormData {
	type Item = &'a FormEntry;
	type IntoIter = std::slice::Iter<'a, FormEntry>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.iter()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_sequence_reports_entries_in_order() {
		let value = FormValue::from(vec!["a", "b", "c"]);
		let data = value.to_form_data("letters").unwrap();

		assert_eq!(data.len(), 3);
		assert_eq!(data.get_all("letters"), vec!["a", "b", "c"]);
	}

	#[rstest]
	fn test_empty_sequence_reports_no_entries_but_is_present() {
		let data = FormValue::Sequence(vec![]).to_form_data("letters").unwrap();
		assert!(data.is_empty());
	}

	#[rstest]
	#[case(42.0, "42")]
	#[case(1.5, "1.5")]
	#[case(-3.25, "-3.25")]
	#[case(-0.0, "0")]
	#[case(1e21, "1000000000000000000000")]
	#[case(1e-7, "0.0000001")]
	#[case(f64::NAN, "NaN")]
	#[case(f64::INFINITY, "Infinity")]
	#[case(f64::NEG_INFINITY, "-Infinity")]
	fn test_number_decimal_text(#[case] n: f64, #[case] expected: &str) {
		let data = FormValue::Number(n).to_form_data("n").unwrap();
		assert_eq!(data.get("n"), Some(expected));
	}

	#[rstest]
	fn test_text_is_verbatim() {
		let text = "  héllo & <world>  ";
		let data = FormValue::from(text).to_form_data("t").unwrap();
		assert_eq!(data.get("t"), Some(text));
	}

	#[rstest]
	fn test_unsupported_reports_nothing() {
		assert!(FormValue::Unsupported.to_form_data("x").is_none());
		assert!(!FormValue::default().is_submittable());
	}

	#[rstest]
	#[case(json!("hi"), FormValue::Text("hi".into()))]
	#[case(json!(7), FormValue::Number(7.0))]
	#[case(json!(["x", "y"]), FormValue::Sequence(vec!["x".into(), "y".into()]))]
	#[case(json!({"first": "Jim"}), FormValue::Unsupported)]
	#[case(json!(["x", 1]), FormValue::Unsupported)]
	#[case(json!(true), FormValue::Unsupported)]
	#[case(json!(null), FormValue::Unsupported)]
	fn test_from_json(#[case] input: serde_json::Value, #[case] expected: FormValue) {
		assert_eq!(FormValue::from(input), expected);
	}

	#[rstest]
	fn test_option_maps_none_to_unsupported() {
		assert_eq!(FormValue::from(None::<String>), FormValue::Unsupported);
		assert_eq!(FormValue::from(Some(3)), FormValue::Number(3.0));
	}

	#[rstest]
	fn test_form_data_extend_preserves_order() {
		let mut data = FormData::new();
		data.append("a", "1");
		let mut other = FormData::new();
		other.append("b", "2");
		other.append("a", "3");
		data.extend(other);

		let names: Vec<_> = data.iter().map(|e| e.name.as_str()).collect();
		assert_eq!(names, vec!["a", "b", "a"]);
		assert_eq!(data.get("a"), Some("1"));
		assert_eq!(data.get_all("a"), vec!["1", "3"]);
		assert!(data.contains("b"));
		assert!(!data.contains("c"));
	}

	#[rstest]
	fn test_urlencoded_repeats_names() {
		let data = FormValue::from(vec!["x", "y z"]).to_form_data("pick").unwrap();
		assert_eq!(data.to_urlencoded().unwrap(), "pick=x&pick=y+z");
	}
}
