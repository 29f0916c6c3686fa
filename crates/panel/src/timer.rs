use dock_core::{Scheduler, TimerId};
use std::time::Duration;

/// Holds at most one pending host timer.
///
/// Arming an armed slot replaces the old timer; [`TimerSlot::cancel`] is
/// always safe to call.
#[derive(Debug, Default)]
pub struct TimerSlot {
    pending: Option<TimerId>,
}

impl TimerSlot {
    pub fn arm(&mut self, host: &mut impl Scheduler, delay: Duration) -> TimerId {
        self.cancel(host);
        let id = host.schedule(delay);
        self.pending = Some(id);
        id
    }

    pub fn cancel(&mut self, host: &mut impl Scheduler) {
        if let Some(id) = self.pending.take() {
            host.cancel(id);
        }
    }

    /// Consume a fired timer.  Returns `true` if it belonged to this slot.
    pub fn fire(&mut self, id: TimerId) -> bool {
        if self.pending == Some(id) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::HeadlessShell;

    #[test]
    fn rearming_replaces_the_pending_timer() {
        let mut host = HeadlessShell::new();
        let mut slot = TimerSlot::default();
        let first = slot.arm(&mut host, Duration::from_millis(10));
        let second = slot.arm(&mut host, Duration::from_millis(10));

        assert_eq!(host.pending_timers(), 1);
        assert!(!slot.fire(first));
        assert!(slot.fire(second));
        assert!(!slot.is_armed());
    }

    #[test]
    fn cancel_is_idempotent() {
        let mut host = HeadlessShell::new();
        let mut slot = TimerSlot::default();
        slot.cancel(&mut host);
        slot.arm(&mut host, Duration::ZERO);
        slot.cancel(&mut host);
        slot.cancel(&mut host);
        assert_eq!(host.pending_timers(), 0);
        assert!(!slot.is_armed());
    }
}
