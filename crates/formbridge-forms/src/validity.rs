//! Constraint validity flags

/// Constraint validation flags reported by a delegate control
///
/// Mirrors the native `ValidityState`: every flag names one failed constraint and a
/// control is valid exactly when no flag is set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidityState {
	pub value_missing: bool,
	pub type_mismatch: bool,
	pub pattern_mismatch: bool,
	pub too_long: bool,
	pub too_short: bool,
	pub range_underflow: bool,
	pub range_overflow: bool,
	pub step_mismatch: bool,
	pub bad_input: bool,
	pub custom_error: bool,
}

impl ValidityState {
	/// A state with no failed constraint
	pub const VALID: Self = Self {
		value_missing: false,
		type_mismatch: false,
		pattern_mismatch: false,
		too_long: false,
		too_short: false,
		range_underflow: false,
		range_overflow: false,
		step_mismatch: false,
		bad_input: false,
		custom_error: false,
	};

	/// Whether no constraint failed
	///
	/// # Examples
	///
	/// ```
	/// use formbridge_forms::ValidityState;
	///
	/// assert!(ValidityState::VALID.is_valid());
	///
	/// let missing = ValidityState { value_missing: true, ..ValidityState::VALID };
	/// assert!(!missing.is_valid());
	/// ```
	pub fn is_valid(&self) -> bool {
		*self == Self::VALID
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_default_is_valid() {
		assert!(ValidityState::default().is_valid());
	}

	#[rstest]
	fn test_any_flag_invalidates() {
		let states = [
			ValidityState { type_mismatch: true, ..ValidityState::VALID },
			ValidityState { pattern_mismatch: true, ..ValidityState::VALID },
			ValidityState { too_long: true, ..ValidityState::VALID },
			ValidityState { too_short: true, ..ValidityState::VALID },
			ValidityState { range_underflow: true, ..ValidityState::VALID },
			ValidityState { range_overflow: true, ..ValidityState::VALID },
			ValidityState { step_mismatch: true, ..ValidityState::VALID },
			ValidityState { bad_input: true, ..ValidityState::VALID },
			ValidityState { custom_error: true, ..ValidityState::VALID },
		];

		for state in states {
			assert!(!state.is_valid(), "{state:?} should be invalid");
		}
	}
}
