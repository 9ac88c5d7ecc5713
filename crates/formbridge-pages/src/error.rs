//! Error types for formbridge-pages

use formbridge_forms::FormError;
use thiserror::Error;

/// Error type for template and control operations
#[derive(Debug, Error)]
pub enum PagesError {
	/// Template settings could not be parsed
	#[error("Invalid template settings: {0}")]
	Config(#[from] toml::de::Error),

	/// A control could not be configured
	#[error(transparent)]
	Form(#[from] FormError),
}

/// Result type for template and control operations
pub type PagesResult<T> = std::result::Result<T, PagesError>;
