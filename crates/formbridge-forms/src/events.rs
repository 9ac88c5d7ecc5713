//! Focus and blur notifications
//!
//! Listeners attached to a component receive a [`ControlEvent`] each time the
//! component's focus handlers run. Listeners are invoked synchronously, in the order
//! they were attached.

use std::fmt;
use std::sync::Arc;

/// Kind of notification emitted by a form-associated component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlEventKind {
	Focus,
	Blur,
}

impl ControlEventKind {
	/// DOM event name
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Focus => "focus",
			Self::Blur => "blur",
		}
	}
}

/// A notification delivered to listeners
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlEvent {
	pub kind: ControlEventKind,
	/// Name of the component that emitted the event
	pub target: String,
}

/// Handle returned when attaching a listener, used to detach it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Arc<dyn Fn(&ControlEvent) + Send + Sync + 'static>;

/// Listeners attached to one component instance
#[derive(Default)]
pub struct EventListeners {
	next_id: u64,
	listeners: Vec<(ListenerId, ControlEventKind, Listener)>,
}

impl EventListeners {
	pub fn new() -> Self {
		Self::default()
	}

	/// Attaches `listener` to events of `kind`
	///
	/// # Examples
	///
	/// ```
	/// use formbridge_forms::{ControlEvent, ControlEventKind, EventListeners};
	/// use std::sync::Arc;
	/// use std::sync::atomic::{AtomicUsize, Ordering};
	///
	/// let seen = Arc::new(AtomicUsize::new(0));
	/// let mut listeners = EventListeners::new();
	/// let counter = Arc::clone(&seen);
	/// listeners.add(ControlEventKind::Focus, move |_| {
	///     counter.fetch_add(1, Ordering::SeqCst);
	/// });
	///
	/// listeners.emit(&ControlEvent { kind: ControlEventKind::Focus, target: "q".into() });
	/// listeners.emit(&ControlEvent { kind: ControlEventKind::Blur, target: "q".into() });
	/// assert_eq!(seen.load(Ordering::SeqCst), 1);
	/// ```
	pub fn add<F>(&mut self, kind: ControlEventKind, listener: F) -> ListenerId
	where
		F: Fn(&ControlEvent) + Send + Sync + 'static,
	{
		let id = ListenerId(self.next_id);
		self.next_id += 1;
		self.listeners.push((id, kind, Arc::new(listener)));
		id
	}

	/// Detaches a listener. Returns `false` if it was not attached.
	pub fn remove(&mut self, id: ListenerId) -> bool {
		let before = self.listeners.len();
		self.listeners.retain(|(listener_id, _, _)| *listener_id != id);
		self.listeners.len() != before
	}

	/// Delivers `event` to every listener of its kind and returns how many ran
	pub fn emit(&self, event: &ControlEvent) -> usize {
		let mut delivered = 0;
		for (_, kind, listener) in &self.listeners {
			if *kind == event.kind {
				listener(event);
				delivered += 1;
			}
		}
		delivered
	}

	pub fn count(&self, kind: ControlEventKind) -> usize {
		self.listeners.iter().filter(|(_, k, _)| *k == kind).count()
	}
}

impl fmt::Debug for EventListeners {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("EventListeners")
			.field("focus", &self.count(ControlEventKind::Focus))
			.field("blur", &self.count(ControlEventKind::Blur))
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::sync::Mutex;

	fn event(kind: ControlEventKind) -> ControlEvent {
		ControlEvent {
			kind,
			target: "field".into(),
		}
	}

	#[rstest]
	fn test_emit_runs_listeners_in_attach_order() {
		let log = Arc::new(Mutex::new(Vec::new()));
		let mut listeners = EventListeners::new();

		for tag in ["first", "second"] {
			let log = Arc::clone(&log);
			listeners.add(ControlEventKind::Blur, move |e| {
				log.lock().unwrap().push(format!("{tag}:{}", e.kind.as_str()));
			});
		}

		assert_eq!(listeners.emit(&event(ControlEventKind::Blur)), 2);
		assert_eq!(*log.lock().unwrap(), vec!["first:blur", "second:blur"]);
	}

	#[rstest]
	fn test_remove_detaches_only_that_listener() {
		let mut listeners = EventListeners::new();
		let a = listeners.add(ControlEventKind::Focus, |_| {});
		let _b = listeners.add(ControlEventKind::Focus, |_| {});

		assert!(listeners.remove(a));
		assert!(!listeners.remove(a));
		assert_eq!(listeners.count(ControlEventKind::Focus), 1);
		assert_eq!(listeners.emit(&event(ControlEventKind::Focus)), 1);
	}

	#[rstest]
	fn test_emit_without_listeners() {
		let listeners = EventListeners::new();
		assert_eq!(listeners.emit(&event(ControlEventKind::Focus)), 0);
	}
}
