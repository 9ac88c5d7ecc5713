//! Property-based tests for the form control template
//!
//! Verifies the accessibility id rules and that rendered markup never carries
//! unescaped user text.

use formbridge_pages::{FormControlOptions, compute_accessible_label_ids, render_form_control};
use proptest::prelude::*;

proptest! {
	/// Test: present ids are joined label first
	///
	/// Category: Property
	/// Verifies that exactly the ids of present parts are listed, in fixed order.
	#[test]
	fn prop_accessible_ids_follow_presence(
		has_label in any::<bool>(),
		has_help_text in any::<bool>(),
		label_id in "[a-z][a-z0-9-]{0,15}",
		help_text_id in "[a-z][a-z0-9-]{0,15}"
	) {
		let ids = compute_accessible_label_ids(has_label, &label_id, has_help_text, &help_text_id);

		let expected = match (has_label, has_help_text) {
			(false, false) => None,
			(true, false) => Some(label_id.clone()),
			(false, true) => Some(help_text_id.clone()),
			(true, true) => Some(format!("{label_id} {help_text_id}")),
		};
		prop_assert_eq!(ids, expected);
	}

	/// Test: label visibility is driven by content
	///
	/// Category: Property
	/// Verifies that the label is hidden exactly when it has neither text nor slot.
	#[test]
	fn prop_label_hidden_without_content(
		label in "[A-Za-z ]{0,10}",
		has_slot in any::<bool>()
	) {
		let mut options = FormControlOptions::new("field").with_label(label.clone());
		options.has_label_slot = has_slot;
		let markup = render_form_control(&options, "").into_markup();

		let present = !label.is_empty() || has_slot;
		let label_open = if present {
			"for=\"field-input\" aria-hidden=\"false\">"
		} else {
			"for=\"field-input\" aria-hidden=\"true\">"
		};
		prop_assert!(markup.contains(label_open));
		prop_assert_eq!(markup.contains("form-control--has-label"), present);
	}

	/// Test: label and help text are escaped
	///
	/// Category: Property
	/// Verifies that angle brackets from label or help text never reach the markup.
	#[test]
	fn prop_text_is_escaped(label in ".{0,24}", help_text in ".{0,24}") {
		let options = FormControlOptions::new("f")
			.with_label(label)
			.with_help_text(help_text);
		let markup = render_form_control(&options, "").into_markup();

		// Only the fixed structure contributes '<'
		let opening_tags = markup.matches('<').count();
		prop_assert_eq!(opening_tags, 8);
	}
}
