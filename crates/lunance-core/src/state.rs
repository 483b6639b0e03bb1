// ── View state ──
//
// The contract between use cases and whatever renders their results. A
// screen starts `Initial`, goes `Loading` while a call is in flight, and
// settles on `Loaded` or `Error`. `LoadSequencer` guards against a slow
// earlier request overwriting the result of a newer one.

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::watch;
use tracing::debug;

use crate::outcome::Outcome;

/// Render state for one asynchronously loaded value.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ViewState<T> {
    #[default]
    Initial,
    Loading,
    /// May hold an empty collection; emptiness is not an error.
    Loaded(T),
    Error(String),
}

impl<T> ViewState<T> {
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Replace the state with the result of a finished call.
    pub fn apply(&mut self, outcome: Outcome<T>) {
        *self = outcome.into();
    }
}

impl<T> From<Outcome<T>> for ViewState<T> {
    fn from(outcome: Outcome<T>) -> Self {
        match outcome {
            Outcome::Success(value) => Self::Loaded(value),
            Outcome::Failure(message) => Self::Error(message),
        }
    }
}

// ── Sequencing ──

/// Identifies one load started through a [`LoadSequencer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

/// Latest-wins state holder for overlapping loads.
///
/// Every [`begin`](Self::begin) issues a newer ticket and flips the state to
/// `Loading`. [`settle`](Self::settle) only applies an outcome whose ticket is
/// still the newest; anything older is dropped. Subscribers are notified on
/// every accepted change.
#[derive(Debug)]
pub struct LoadSequencer<T> {
    state: watch::Sender<ViewState<T>>,
    // Only touched inside the channel's modify closures, which run under
    // its write lock.
    latest: AtomicU64,
}

impl<T: Clone> LoadSequencer<T> {
    pub fn new() -> Self {
        Self {
            state: watch::Sender::new(ViewState::Initial),
            latest: AtomicU64::new(0),
        }
    }

    pub fn begin(&self) -> Ticket {
        let mut issued = 0;
        self.state.send_modify(|state| {
            issued = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
            *state = ViewState::Loading;
        });
        Ticket(issued)
    }

    /// Apply `outcome` if `ticket` is the newest issued. Returns whether it
    /// was applied.
    pub fn settle(&self, ticket: Ticket, outcome: Outcome<T>) -> bool {
        let mut outcome = Some(outcome);
        let applied = self.state.send_if_modified(|state| {
            if self.latest.load(Ordering::SeqCst) != ticket.0 {
                return false;
            }
            match outcome.take() {
                Some(outcome) => {
                    *state = outcome.into();
                    true
                }
                None => false,
            }
        });
        if !applied {
            debug!(ticket = ticket.0, "dropping stale load result");
        }
        applied
    }

    pub fn state(&self) -> ViewState<T> {
        self.state.borrow().clone()
    }

    /// A receiver that observes every accepted state change.
    pub fn subscribe(&self) -> watch::Receiver<ViewState<T>> {
        self.state.subscribe()
    }
}

impl<T: Clone> Default for LoadSequencer<T> {
    fn default() -> Self {
        Self::new()
    }
}
