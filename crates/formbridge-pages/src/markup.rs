//! Attribute and element string building

/// ` name="value"` with the value escaped for a double-quoted attribute
pub(crate) fn attr(name: &str, value: &str) -> String {
	format!(
		" {name}=\"{}\"",
		html_escape::encode_double_quoted_attribute(value)
	)
}

/// ` name` when `on`, nothing otherwise
pub(crate) fn flag(name: &str, on: bool) -> String {
	if on { format!(" {name}") } else { String::new() }
}

pub(crate) fn text(value: &str) -> String {
	html_escape::encode_text(value).into_owned()
}

/// Wraps `inner` in a host element carrying reflected attributes.
///
/// Attributes other than `name` render bare when their value is empty.
pub(crate) fn host_element(tag: &str, attributes: &[(&'static str, String)], inner: &str) -> String {
	let mut out = format!("<{tag}");
	for (name, value) in attributes {
		if value.is_empty() && *name != "name" {
			out.push_str(&format!(" {name}"));
		} else {
			out.push_str(&attr(name, value));
		}
	}
	out.push_str(&format!(">{inner}</{tag}>"));
	out
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_attr_escapes_quotes() {
		assert_eq!(attr("title", "say \"hi\""), " title=\"say &quot;hi&quot;\"");
	}

	#[rstest]
	fn test_flag() {
		assert_eq!(flag("required", true), " required");
		assert_eq!(flag("required", false), "");
	}

	#[rstest]
	fn test_text_escapes_markup() {
		assert_eq!(text("<b>&</b>"), "&lt;b&gt;&amp;&lt;/b&gt;");
	}

	#[rstest]
	fn test_host_element_renders_boolean_attributes_bare() {
		let attributes = vec![("name", "age".to_string()), ("required", String::new())];
		assert_eq!(
			host_element("fb-input", &attributes, "x"),
			"<fb-input name=\"age\" required>x</fb-input>"
		);
	}
}
