//! Timed celebration shown before a legitimate verdict

use std::time::{Duration, Instant};

/// A fixed number of bursts separated by equal pauses.
///
/// The first burst fires at `started`; the sequence is finished once the last
/// burst has fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Celebration {
    started: Instant,
    bursts: u32,
    pause: Duration,
}

impl Celebration {
    pub fn new(started: Instant, bursts: u32, pause: Duration) -> Self {
        Self {
            started,
            bursts,
            pause,
        }
    }

    /// Bursts that have fired by `now`
    pub fn bursts_fired(&self, now: Instant) -> u32 {
        if self.bursts == 0 {
            return 0;
        }
        if self.pause.is_zero() {
            return self.bursts;
        }

        let elapsed = now.saturating_duration_since(self.started);
        let pauses_done = (elapsed.as_nanos() / self.pause.as_nanos()).min(u128::from(u32::MAX));
        let pauses_done = pauses_done as u32;
        pauses_done.saturating_add(1).min(self.bursts)
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.bursts_fired(now) == self.bursts
    }

    /// Time until the next burst, `None` once finished
    pub fn next_burst_in(&self, now: Instant) -> Option<Duration> {
        if self.is_finished(now) {
            return None;
        }
        let next_at = self.started + self.pause * self.bursts_fired(now);
        Some(next_at.saturating_duration_since(now))
    }

    pub fn total_bursts(&self) -> u32 {
        self.bursts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_bursts_two_pauses() {
        let start = Instant::now();
        let pause = Duration::from_secs(5);
        let celebration = Celebration::new(start, 3, pause);

        assert_eq!(celebration.bursts_fired(start), 1);
        assert_eq!(celebration.next_burst_in(start), Some(pause));
        assert_eq!(celebration.bursts_fired(start + Duration::from_millis(4999)), 1);
        assert_eq!(celebration.bursts_fired(start + pause), 2);
        assert!(!celebration.is_finished(start + pause));
        assert_eq!(
            celebration.next_burst_in(start + Duration::from_secs(7)),
            Some(Duration::from_secs(3))
        );
        assert!(celebration.is_finished(start + pause * 2));
        assert_eq!(celebration.bursts_fired(start + Duration::from_secs(60)), 3);
        assert_eq!(celebration.next_burst_in(start + pause * 2), None);
    }

    #[test]
    fn test_zero_pause_is_instant() {
        let start = Instant::now();
        let celebration = Celebration::new(start, 3, Duration::ZERO);

        assert!(celebration.is_finished(start));
        assert_eq!(celebration.bursts_fired(start), 3);
    }

    #[test]
    fn test_no_bursts() {
        let start = Instant::now();
        let celebration = Celebration::new(start, 0, Duration::from_secs(5));

        assert!(celebration.is_finished(start));
        assert_eq!(celebration.total_bursts(), 0);
    }
}
