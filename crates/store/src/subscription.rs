//! State-change subscription mechanics.

use std::sync::mpsc::{self, Receiver};
use std::sync::Mutex;
use std::time::Duration;

/// A subscription to a store's state replacements.
///
/// Each subscription receives its own copy of every state published after
/// the subscription was created (broadcast semantics). Consumption is
/// single-threaded: one subscription belongs to one consumer.
#[derive(Debug)]
pub struct Subscription<S> {
    receiver: Receiver<S>,
}

impl<S> Subscription<S> {
    pub fn new(receiver: Receiver<S>) -> Self {
        Self { receiver }
    }

    /// Block until the next state is available.
    pub fn recv(&self) -> Result<S, mpsc::RecvError> {
        self.receiver.recv()
    }

    /// Try to receive a state without blocking.
    pub fn try_recv(&self) -> Result<S, mpsc::TryRecvError> {
        self.receiver.try_recv()
    }

    /// Block for up to `timeout` waiting for a state.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<S, mpsc::RecvTimeoutError> {
        self.receiver.recv_timeout(timeout)
    }
}

/// Fan-out list of live subscribers.
///
/// Used by [`crate::Store`] and by stores that perform their own state
/// transitions outside the reducer path (the session store). Publishing is
/// best-effort: a subscriber whose receiving end was dropped is pruned from
/// the list during the next publish.
#[derive(Debug, Default)]
pub struct Subscribers<S> {
    senders: Mutex<Vec<mpsc::Sender<S>>>,
}

impl<S: Clone> Subscribers<S> {
    pub fn new() -> Self {
        Self {
            senders: Mutex::new(Vec::new()),
        }
    }

    /// Register a new subscriber.
    pub fn subscribe(&self) -> Subscription<S> {
        let (tx, rx) = mpsc::channel();

        match self.senders.lock() {
            Ok(mut senders) => senders.push(tx),
            // A poisoned list means a publisher panicked mid-notify; recover
            // the inner state rather than losing the new subscriber.
            Err(poisoned) => poisoned.into_inner().push(tx),
        }

        Subscription::new(rx)
    }

    /// Deliver `state` to every live subscriber, dropping dead ones.
    pub fn publish(&self, state: &S) {
        let mut senders = match self.senders.lock() {
            Ok(senders) => senders,
            Err(poisoned) => poisoned.into_inner(),
        };

        senders.retain(|tx| tx.send(state.clone()).is_ok());
    }

    /// Number of currently registered subscribers (dead ones included until
    /// the next publish).
    pub fn len(&self) -> usize {
        match self.senders.lock() {
            Ok(senders) => senders.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
