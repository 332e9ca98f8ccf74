//! State-transition contract for the UI-facing state trees.

/// A pure state-transition function over an owned state tree.
///
/// `reduce` computes the next state from the current state and an action.
/// Implementations must be deterministic and perform no I/O; the store
/// provider replaces its state with the returned value and notifies
/// subscribers.
///
/// Reducers never fail: an action that does not apply to the current state
/// (removing an absent cart line, for example) returns a state equal to the
/// input rather than an error.
pub trait Reducer: Clone {
    /// Closed set of actions this reducer responds to.
    type Action;

    /// Compute the next state. Must not mutate `self`.
    fn reduce(&self, action: &Self::Action) -> Self;
}
