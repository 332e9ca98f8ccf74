//! Reducer-driven state container.

use std::sync::RwLock;

use shopmate_core::Reducer;

use crate::subscription::{Subscribers, Subscription};

/// Process-wide container for one reducer-driven state tree.
///
/// `dispatch` runs the reducer synchronously, replaces the held state with
/// the result, and notifies all current subscribers with the new state.
/// Dispatch never fails: actions that do not apply are no-ops by the
/// reducer contract.
///
/// State handed out by [`Store::current`] and through subscriptions is a
/// clone; the UI must not mutate it in place — all mutation goes through
/// `dispatch`.
#[derive(Debug)]
pub struct Store<R: Reducer> {
    state: RwLock<R>,
    subscribers: Subscribers<R>,
}

impl<R: Reducer> Store<R> {
    /// Create a store holding `initial` state.
    pub fn new(initial: R) -> Self {
        Self {
            state: RwLock::new(initial),
            subscribers: Subscribers::new(),
        }
    }

    /// Snapshot of the current state.
    pub fn current(&self) -> R {
        match self.state.read() {
            Ok(state) => state.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Apply `action` through the reducer and notify subscribers.
    pub fn dispatch(&self, action: &R::Action) {
        let next = {
            let mut state = match self.state.write() {
                Ok(state) => state,
                Err(poisoned) => poisoned.into_inner(),
            };
            let next = state.reduce(action);
            *state = next.clone();
            next
        };

        tracing::debug!("store state replaced; notifying subscribers");
        self.subscribers.publish(&next);
    }

    /// Subscribe to state replacements.
    pub fn subscribe(&self) -> Subscription<R> {
        self.subscribers.subscribe()
    }
}
