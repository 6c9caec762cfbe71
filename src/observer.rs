// Observer Pattern - Subject with trait-object observers
// A Subject owns a string-keyed state map and notifies every attached
// observer, in attachment order, whenever the state changes.

use std::sync::{Arc, Mutex};

use serde_json::{Map, Value};

/// Observable state: an unordered mapping of string keys to arbitrary values.
pub type State = Map<String, Value>;

/// Reaction to a subject's state change.
///
/// The subject consumes no return value; what an observer does with the
/// snapshot (print, cache, re-render) is its own business.
pub trait Observer {
    /// Receives the full current state snapshot.
    fn update(&mut self, state: &State);
}

/// Shared handle to an observer.
///
/// The caller keeps a clone of the handle to detach later; identity is the
/// `Arc` allocation (`Arc::ptr_eq`), not the observer's contents.
pub type SharedObserver = Arc<Mutex<dyn Observer + Send>>;

/// Wraps an observer in a shared handle suitable for [`Subject::attach`].
pub fn shared(observer: impl Observer + Send + 'static) -> SharedObserver {
    Arc::new(Mutex::new(observer))
}

/// Entity holding observable state and the list of its observers.
///
/// The state is an immutable snapshot replaced wholesale on every
/// [`Subject::set_state`]; observers only ever see a read-only view, so no
/// observer can mutate the state out from under the others.
#[derive(Default)]
pub struct Subject {
    state: Arc<State>,
    observers: Vec<SharedObserver>,
}

impl Subject {
    /// Creates a subject with empty state and no observers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an observer to the notification list.
    ///
    /// No duplicate check: attaching the same handle twice means two
    /// notifications per state change.
    pub fn attach(&mut self, observer: SharedObserver) {
        self.observers.push(observer);
    }

    /// Removes every entry matching the handle by identity.
    ///
    /// Silent no-op when the observer was never attached.
    pub fn detach(&mut self, observer: &SharedObserver) {
        self.observers.retain(|o| !Arc::ptr_eq(o, observer));
    }

    /// Shallow-merges `partial` into the current state (later keys
    /// overwrite), swaps in the new snapshot, then notifies.
    pub fn set_state(&mut self, partial: State) {
        let mut next = State::clone(&self.state);
        for (key, value) in partial {
            next.insert(key, value);
        }
        self.state = Arc::new(next);
        self.notify();
    }

    /// Calls `update` on every attached observer, in attachment order.
    ///
    /// Synchronous, no error isolation: a panicking observer aborts the
    /// remaining notifications.
    pub fn notify(&self) {
        for observer in &self.observers {
            observer.lock().unwrap().update(&self.state);
        }
    }

    /// Read-only view of the current state.
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Cheap handle to the current snapshot. Later merges replace the
    /// subject's snapshot; handles taken earlier keep the old one.
    pub fn snapshot(&self) -> Arc<State> {
        Arc::clone(&self.state)
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

/// Prints each snapshot, prefixed with the display's name.
pub struct StateDisplay {
    name: String,
}

impl StateDisplay {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Observer for StateDisplay {
    fn update(&mut self, state: &State) {
        let entries: Vec<String> = state
            .iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect();
        println!("{} display: {}", self.name, entries.join(" "));
    }
}

/// Caches every snapshot it receives, in arrival order.
#[derive(Default)]
pub struct StateLogger {
    history: Vec<State>,
}

impl StateLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> &[State] {
        &self.history
    }

    pub fn last(&self) -> Option<&State> {
        self.history.last()
    }
}

impl Observer for StateLogger {
    fn update(&mut self, state: &State) {
        self.history.push(state.clone());
    }
}

/// Forwards every snapshot to the `tracing` crate at debug level.
pub struct TracingObserver;

impl Observer for TracingObserver {
    fn update(&mut self, state: &State) {
        tracing::debug!(target: "classic_patterns::observer", "state changed: {:?}", state);
    }
}

/// Adapts a closure into an observer.
pub struct FnObserver<F: FnMut(&State)> {
    callback: F,
}

impl<F: FnMut(&State)> FnObserver<F> {
    pub fn new(callback: F) -> Self {
        Self { callback }
    }
}

impl<F: FnMut(&State)> Observer for FnObserver<F> {
    fn update(&mut self, state: &State) {
        (self.callback)(state);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn partial(value: Value) -> State {
        value.as_object().cloned().expect("object literal")
    }

    #[test]
    fn test_set_state_notifies_in_attachment_order() {
        let calls = Arc::new(Mutex::new(Vec::new()));

        let mut subject = Subject::new();
        for name in ["first", "second", "third"] {
            let sink = calls.clone();
            subject.attach(shared(FnObserver::new(move |_: &State| {
                sink.lock().unwrap().push(name);
            })));
        }

        subject.set_state(partial(json!({"a": 1})));
        assert_eq!(*calls.lock().unwrap(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_update_receives_fully_merged_state() {
        let logger = Arc::new(Mutex::new(StateLogger::new()));

        let mut subject = Subject::new();
        subject.attach(logger.clone());

        subject.set_state(partial(json!({"a": 1})));
        subject.set_state(partial(json!({"b": 2})));

        let logger = logger.lock().unwrap();
        assert_eq!(logger.history().len(), 2);
        assert_eq!(logger.history()[0], partial(json!({"a": 1})));
        assert_eq!(logger.last(), Some(&partial(json!({"a": 1, "b": 2}))));
    }

    #[test]
    fn test_shallow_merge_later_keys_overwrite() {
        let mut subject = Subject::new();
        subject.set_state(partial(json!({"a": 1, "b": 1})));
        subject.set_state(partial(json!({"b": 2})));

        assert_eq!(*subject.state(), partial(json!({"a": 1, "b": 2})));
    }

    #[test]
    fn test_detach_stops_updates() {
        let logger = Arc::new(Mutex::new(StateLogger::new()));
        let handle: SharedObserver = logger.clone();

        let mut subject = Subject::new();
        subject.attach(handle.clone());
        subject.set_state(partial(json!({"a": 1})));

        subject.detach(&handle);
        subject.set_state(partial(json!({"b": 2})));

        assert_eq!(logger.lock().unwrap().history().len(), 1);
        assert_eq!(subject.observer_count(), 0);
    }

    #[test]
    fn test_detach_absent_observer_is_noop() {
        let mut subject = Subject::new();
        subject.attach(shared(StateLogger::new()));

        let never_attached = shared(StateLogger::new());
        subject.detach(&never_attached);

        assert_eq!(subject.observer_count(), 1);
    }

    #[test]
    fn test_duplicate_attach_notifies_twice_and_detach_removes_all() {
        let logger = Arc::new(Mutex::new(StateLogger::new()));
        let handle: SharedObserver = logger.clone();

        let mut subject = Subject::new();
        subject.attach(handle.clone());
        subject.attach(handle.clone());

        subject.set_state(partial(json!({"a": 1})));
        assert_eq!(logger.lock().unwrap().history().len(), 2);

        subject.detach(&handle);
        assert_eq!(subject.observer_count(), 0);
    }

    #[test]
    fn test_snapshot_is_immutable_across_merges() {
        let mut subject = Subject::new();
        subject.set_state(partial(json!({"a": 1})));

        let before = subject.snapshot();
        subject.set_state(partial(json!({"a": 2})));

        assert_eq!(*before, partial(json!({"a": 1})));
        assert_eq!(*subject.state(), partial(json!({"a": 2})));
    }

    #[test]
    fn test_panicking_observer_aborts_remaining_notifications() {
        let before = Arc::new(Mutex::new(StateLogger::new()));
        let after = Arc::new(Mutex::new(StateLogger::new()));

        let mut subject = Subject::new();
        subject.attach(before.clone());
        subject.attach(shared(FnObserver::new(|_: &State| {
            panic!("observer failure");
        })));
        subject.attach(after.clone());

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            subject.set_state(partial(json!({"a": 1})));
        }));
        assert!(result.is_err());

        // No error isolation: observers ahead of the failure were notified,
        // observers behind it were not.
        assert_eq!(before.lock().unwrap().history().len(), 1);
        assert_eq!(after.lock().unwrap().history().len(), 0);
    }

    #[test]
    fn test_new_subject_has_empty_state() {
        let subject = Subject::new();
        assert!(subject.state().is_empty());
        assert_eq!(subject.observer_count(), 0);
    }

    #[test]
    fn test_notify_without_observers_is_noop() {
        let mut subject = Subject::new();
        subject.set_state(partial(json!({"a": 1})));
        subject.notify();
    }
}
