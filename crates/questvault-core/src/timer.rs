//! One-shot timers on the store's cooperative clock.
//!
//! The core never blocks or spawns threads; deferred work is a deadline
//! checked from `AppStore::tick`, the same run-to-completion model the rest
//! of the store uses.

/// A re-armable one-shot deadline.
///
/// Arming while already armed REPLACES the pending deadline and bumps the
/// generation counter, so a reset scheduled by an earlier trigger can never
/// fire early against a later one — only the latest arm matters.
#[derive(Debug, Clone, Copy, Default)]
pub struct PulseTimer {
    deadline_ms: Option<u64>,
    generation: u64,
}

impl PulseTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule (or reschedule) the deadline at `now_ms + duration_ms`.
    /// Returns the new generation.
    pub fn arm(&mut self, now_ms: u64, duration_ms: u64) -> u64 {
        self.generation += 1;
        self.deadline_ms = Some(now_ms.saturating_add(duration_ms));
        self.generation
    }

    /// True exactly once, on the first poll at or past the deadline;
    /// disarms itself when it fires.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => {
                self.deadline_ms = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.deadline_ms.is_some()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_at_deadline() {
        let mut timer = PulseTimer::new();
        timer.arm(0, 2_000);

        assert!(!timer.poll(1_999));
        assert!(timer.poll(2_000));
        assert!(!timer.is_armed());
        assert!(!timer.poll(5_000));
    }

    #[test]
    fn test_rearm_replaces_deadline() {
        let mut timer = PulseTimer::new();
        timer.arm(0, 2_000);
        timer.arm(1_500, 2_000);

        // The first deadline (2 000) no longer exists.
        assert!(!timer.poll(2_000));
        assert!(!timer.poll(3_499));
        assert!(timer.poll(3_500));
    }

    #[test]
    fn test_generation_increases_per_arm() {
        let mut timer = PulseTimer::new();
        let g1 = timer.arm(0, 10);
        let g2 = timer.arm(1, 10);
        assert!(g2 > g1);
        assert_eq!(timer.generation(), g2);
    }

    #[test]
    fn test_unarmed_never_fires() {
        let mut timer = PulseTimer::new();
        assert!(!timer.poll(u64::MAX));
    }
}
