//! Template settings
//!
//! Controls derive their element ids and default size from [`TemplateSettings`].
//! Settings are plain serde structs and are usually loaded from a TOML table:
//!
//! ```toml
//! id_prefix = "signup"
//! default_size = "large"
//! ```

use crate::error::PagesResult;
use crate::template::ControlSize;
use serde::{Deserialize, Serialize};

/// Settings shared by every rendered form control
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateSettings {
	/// Prefix added to every generated element id, so several forms can share a page
	pub id_prefix: String,

	/// Size used when a control does not choose one
	pub default_size: ControlSize,
}

impl TemplateSettings {
	/// Parses settings from TOML. Missing keys keep their defaults.
	///
	/// # Examples
	///
	/// ```
	/// use formbridge_pages::{ControlSize, TemplateSettings};
	///
	/// let settings = TemplateSettings::from_toml_str(r#"default_size = "small""#).unwrap();
	/// assert_eq!(settings.default_size, ControlSize::Small);
	/// assert_eq!(settings.id_prefix, "");
	/// ```
	pub fn from_toml_str(source: &str) -> PagesResult<Self> {
		Ok(toml::from_str(source)?)
	}

	/// Id of one part of a control, e.g. `signup-email-input`
	pub fn element_id(&self, base: &str, part: &str) -> String {
		if self.id_prefix.is_empty() {
			format!("{base}-{part}")
		} else {
			format!("{}-{base}-{part}", self.id_prefix)
		}
	}
}
