//! Stale-response guard for refetches
//!
//! The UI fires refetches without cancelling in-flight requests, so a slow
//! response can arrive after a newer one and clobber fresher state.
//! [`RequestSequence`] stamps each request with a generation; a response is
//! committed only if its ticket is still the newest issued.

use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;

/// A generation counter for one logical request stream (e.g. "candidate
/// roster refetch").
///
/// # Example
///
/// ```
/// use hireline_lib::api::RequestSequence;
///
/// let sequence = RequestSequence::new();
/// let first = sequence.begin();
/// let second = sequence.begin();
///
/// // The late response from the superseded request is discarded.
/// assert!(!sequence.commit(&first));
/// assert!(sequence.commit(&second));
/// ```
#[derive(Debug, Default)]
pub struct RequestSequence {
    generation: AtomicU64,
}

/// A ticket stamped by [`RequestSequence::begin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

impl RequestSequence {
    /// Creates a new sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new request, superseding all earlier tickets.
    pub fn begin(&self) -> RequestTicket {
        RequestTicket(self.generation.fetch_add(1, Ordering::Relaxed) + 1)
    }

    /// Returns `true` if the ticket is still the newest issued.
    pub fn is_current(&self, ticket: &RequestTicket) -> bool {
        self.generation.load(Ordering::Relaxed) == ticket.0
    }

    /// Whether a completed request's response may be applied. Same check as
    /// [`is_current`](RequestSequence::is_current), named for the call site.
    pub fn commit(&self, ticket: &RequestTicket) -> bool {
        self.is_current(ticket)
    }
}
