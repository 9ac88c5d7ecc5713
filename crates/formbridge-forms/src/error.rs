//! Error types for formbridge-forms

use thiserror::Error;

/// A field that failed constraint validation at submission time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidField {
	/// Name the field reports under
	pub name: String,
	/// Validation message forwarded from the delegate control
	pub message: String,
	/// Id of the element validation UI should anchor to
	pub anchor: Option<String>,
}

/// Error type for form association operations
#[derive(Debug, Error)]
pub enum FormError {
	/// A host component does not satisfy the form participation contract
	#[error("Contract violation in `{component}`: {reason}")]
	ContractViolation {
		/// Type name of the offending component
		component: &'static str,
		/// What part of the contract is missing
		reason: String,
	},

	/// A `pattern` constraint could not be compiled
	#[error("Invalid pattern `{pattern}`: {source}")]
	InvalidPattern {
		/// Pattern as written by the caller
		pattern: String,
		/// Underlying regex error
		#[source]
		source: regex::Error,
	},

	/// Submission blocked because one or more fields are invalid
	#[error("Form has {} invalid field(s)", .fields.len())]
	Invalid {
		/// Every invalid field, in registration order
		fields: Vec<InvalidField>,
	},

	/// Form data could not be encoded
	#[error("Failed to encode form data: {0}")]
	Encoding(#[from] serde_urlencoded::ser::Error),
}

/// Result type for form association operations
pub type FormResult<T> = std::result::Result<T, FormError>;
