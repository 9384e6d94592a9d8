//! Tickets for the deferred advance that follows a correct pick.
//!
//! The session never sleeps. A correct selection hands the host an
//! [`AdvanceTicket`]; the host's event loop keeps it, waits until it is due
//! without blocking, and passes it back to
//! [`crate::session::Session::fire`]. Tickets carry the generation of the
//! session that issued them, so a ticket outliving a cancelled or torn-down
//! session fires as a no-op.

use std::time::{Duration, Instant};

/// Handle to one scheduled advance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdvanceTicket {
    due: Instant,
    generation: u64,
}

impl AdvanceTicket {
    pub(crate) fn new(due: Instant, generation: u64) -> Self {
        Self { due, generation }
    }

    pub fn due(&self) -> Instant {
        self.due
    }

    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.due
    }

    /// Time left until the ticket is due, zero once it is.
    #[inline]
    pub fn remaining(&self, now: Instant) -> Duration {
        self.due.saturating_duration_since(now)
    }
}
