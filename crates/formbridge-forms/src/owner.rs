//! The enclosing form
//!
//! [`FormOwner`] aggregates registered participants the way a `<form>` element does:
//! it collects their reported entries on submission, checks their reported validity,
//! and routes reset and state restoration to their callbacks.
//!
//! The owner only ever reads what participants last reported through their
//! association handles. Synchronizing before submission is the participants' job.

use crate::error::{FormError, FormResult, InvalidField};
use crate::participant::{FormParticipant, FormState, RestoreMode};
use crate::value::FormData;
use std::panic::{self, AssertUnwindSafe};

/// Index of a participant within its owner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParticipantId(usize);

impl ParticipantId {
	pub fn index(&self) -> usize {
		self.0
	}
}

/// State tokens captured from every participant, for later restoration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SavedState {
	states: Vec<(ParticipantId, FormState)>,
}

impl SavedState {
	pub fn get(&self, id: ParticipantId) -> Option<&FormState> {
		self.states
			.iter()
			.find(|(saved, _)| *saved == id)
			.map(|(_, state)| state)
	}

	pub fn len(&self) -> usize {
		self.states.len()
	}

	pub fn is_empty(&self) -> bool {
		self.states.is_empty()
	}
}

/// An enclosing form holding its form-associated components
#[derive(Default)]
pub struct FormOwner {
	participants: Vec<Box<dyn FormParticipant>>,
}

impl FormOwner {
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a participant, rejecting components that do not satisfy the contract.
	///
	/// A participant must declare form association and its delegate control must
	/// have an id for validation UI to anchor to. The participant is synchronized
	/// once on registration so the form never sees a stale value.
	pub fn register<P>(&mut self, participant: P) -> FormResult<ParticipantId>
	where
		P: FormParticipant + 'static,
	{
		let component = participant.component_name();

		if !participant.form_associated() {
			tracing::warn!(component, "rejected component without form association");
			return Err(FormError::ContractViolation {
				component,
				reason: "component does not declare form association".into(),
			});
		}

		if participant.input().id().is_empty() {
			tracing::warn!(component, "rejected component without delegate id");
			return Err(FormError::ContractViolation {
				component,
				reason: "delegate control has no id to anchor validation".into(),
			});
		}

		let mut participant: Box<dyn FormParticipant> = Box::new(participant);
		participant.update_internals();

		let id = ParticipantId(self.participants.len());
		tracing::debug!(component, name = participant.name(), index = id.0, "registered participant");
		self.participants.push(participant);
		Ok(id)
	}

	pub fn get(&self, id: ParticipantId) -> Option<&dyn FormParticipant> {
		self.participants.get(id.0).map(|p| p.as_ref())
	}

	pub fn get_mut(&mut self, id: ParticipantId) -> Option<&mut (dyn FormParticipant + 'static)> {
		self.participants.get_mut(id.0).map(|p| p.as_mut())
	}

	pub fn len(&self) -> usize {
		self.participants.len()
	}

	pub fn is_empty(&self) -> bool {
		self.participants.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (ParticipantId, &dyn FormParticipant)> {
		self.participants
			.iter()
			.enumerate()
			.map(|(i, p)| (ParticipantId(i), p.as_ref()))
	}

	// Disabled and unnamed participants never contribute to a submission.
	fn submittable(participant: &dyn FormParticipant) -> bool {
		!participant.form_association().disabled() && !participant.name().is_empty()
	}

	/// Entries reported by every enabled, named participant, in registration order
	pub fn form_data(&self) -> FormData {
		let mut data = FormData::new();
		for participant in &self.participants {
			if !Self::submittable(participant.as_ref()) {
				continue;
			}
			if let Some(entries) = participant.internals().form_value() {
				data.extend(entries.clone());
			}
		}
		data
	}

	/// Every enabled participant whose reported validity has a failed constraint
	pub fn invalid_fields(&self) -> Vec<InvalidField> {
		self.participants
			.iter()
			.filter(|p| !p.form_association().disabled())
			.filter(|p| !p.internals().check_validity())
			.map(|p| InvalidField {
				name: p.name().to_string(),
				message: p.internals().validation_message().to_string(),
				anchor: p.internals().validation_anchor().map(str::to_string),
			})
			.collect()
	}

	pub fn check_validity(&self) -> bool {
		self.invalid_fields().is_empty()
	}

	/// Checks validity and moves focus to the first invalid participant
	pub fn report_validity(&mut self) -> Option<InvalidField> {
		let first = self.invalid_fields().into_iter().next()?;
		if let Some(participant) = self
			.participants
			.iter_mut()
			.find(|p| !p.form_association().disabled() && !p.internals().check_validity())
		{
			participant.focus();
		}
		Some(first)
	}

	/// Collects the submission, or fails listing every invalid field
	pub fn submit(&self) -> FormResult<FormData> {
		let fields = self.invalid_fields();
		if !fields.is_empty() {
			tracing::debug!(invalid = fields.len(), "submission blocked");
			return Err(FormError::Invalid { fields });
		}
		Ok(self.form_data())
	}

	/// Resets every participant and returns the ones whose reset callback panicked.
	///
	/// A failing callback never stops the remaining participants from resetting.
	pub fn reset(&mut self) -> Vec<ParticipantId> {
		let mut failed = Vec::new();
		for (index, participant) in self.participants.iter_mut().enumerate() {
			let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
				participant.form_reset_callback();
				participant.update_internals();
			}));
			if outcome.is_err() {
				tracing::error!(
					component = participant.component_name(),
					name = participant.name(),
					"form reset callback panicked"
				);
				failed.push(ParticipantId(index));
			}
		}
		failed
	}

	/// Captures the restoration token each participant last reported
	pub fn save_state(&self) -> SavedState {
		let states = self
			.participants
			.iter()
			.enumerate()
			.filter_map(|(i, p)| p.internals().state().map(|s| (ParticipantId(i), s.clone())))
			.collect();
		SavedState { states }
	}

	/// Hands each saved token back to its participant
	pub fn restore_state(&mut self, saved: &SavedState, mode: RestoreMode) {
		for (id, state) in &saved.states {
			if let Some(participant) = self.participants.get_mut(id.0) {
				tracing::debug!(name = participant.name(), mode = mode.as_str(), "restoring state");
				participant.form_state_restore_callback(state, mode);
				participant.update_internals();
			}
		}
	}
}

impl std::fmt::Debug for FormOwner {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("FormOwner")
			.field(
				"participants",
				&self.participants.iter().map(|p| p.name()).collect::<Vec<_>>(),
			)
			.finish()
	}
}
