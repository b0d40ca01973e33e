//! Time debounce as an explicit timer-reset state machine.
//!
//! Every trigger invalidates whatever was pending and hands out a new
//! [`Ticket`]. The host owns the actual timer: it arms a one-shot callback for
//! [`Debouncer::window_ms`] and passes the ticket back to [`Debouncer::fire`]
//! when it elapses. Only the newest ticket fires, so a burst of triggers
//! produces exactly one callback, a quiet window after the last one.

use log::trace;

/// Identifies one scheduled callback. Only the most recent ticket can fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Debouncer {
    window_ms: u32,
    generation: u64,
    pending: bool,
}

impl Debouncer {
    pub fn new(window_ms: u32) -> Self {
        Self {
            window_ms,
            generation: 0,
            pending: false,
        }
    }

    pub fn window_ms(&self) -> u32 {
        self.window_ms
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Registers a trigger, superseding any pending one.
    pub fn schedule(&mut self) -> Ticket {
        self.generation += 1;
        self.pending = true;
        trace!("debounce rearmed (generation {})", self.generation);
        Ticket(self.generation)
    }

    /// Called by the host timer. Succeeds only for the latest pending ticket;
    /// a stale ticket leaves the newer one pending.
    pub fn fire(&mut self, ticket: Ticket) -> bool {
        if self.pending && ticket.0 == self.generation {
            self.pending = false;
            true
        } else {
            false
        }
    }

    pub fn cancel(&mut self) {
        self.pending = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_latest_ticket_fires() {
        let mut debouncer = Debouncer::new(1000);
        let first = debouncer.schedule();
        let second = debouncer.schedule();
        assert!(!debouncer.fire(first));
        assert!(debouncer.is_pending());
        assert!(debouncer.fire(second));
        assert!(!debouncer.fire(second));
    }

    #[test]
    fn cancel_discards_pending_callback() {
        let mut debouncer = Debouncer::new(1000);
        let ticket = debouncer.schedule();
        debouncer.cancel();
        assert!(!debouncer.is_pending());
        assert!(!debouncer.fire(ticket));
    }
}
