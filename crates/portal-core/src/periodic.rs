//! Periodic Task
//!
//! Schedule bookkeeping for work that runs once immediately and then every
//! `period`. The browser timer only wakes the task up; whether it actually
//! runs is decided here against an injected clock.

use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::clock::Clock;

#[derive(Debug, Clone)]
pub struct PeriodicTask {
    period: Duration,
    last_run: Option<DateTime<Utc>>,
    runs: u64,
}

impl PeriodicTask {
    pub fn new(period: Duration) -> Self {
        Self { period, last_run: None, runs: 0 }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// When the next run becomes due; `None` until the first run or when
    /// the period overflows the calendar
    pub fn next_run(&self) -> Option<DateTime<Utc>> {
        let last = self.last_run?;
        chrono::Duration::from_std(self.period)
            .ok()
            .and_then(|period| last.checked_add_signed(period))
    }

    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        if self.last_run.is_none() {
            return true;
        }
        self.next_run().is_some_and(|next| now >= next)
    }

    /// Run `job` if the task is due at the clock's current time
    pub fn tick<C: Clock, F: FnOnce(DateTime<Utc>)>(&mut self, clock: &C, job: F) -> bool {
        let now = clock.now();
        if !self.is_due(now) {
            return false;
        }
        self.last_run = Some(now);
        self.runs += 1;
        job(now);
        true
    }

    pub fn runs(&self) -> u64 {
        self.runs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::TimeZone;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 9, 2, 8, 0, 0).unwrap()
    }

    #[test]
    fn test_runs_immediately_then_every_period() {
        let clock = FixedClock::new(start());
        let mut task = PeriodicTask::new(Duration::from_secs(60));
        let mut seen = Vec::new();

        assert!(task.tick(&clock, |now| seen.push(now)));
        clock.advance(chrono::Duration::seconds(30));
        assert!(!task.tick(&clock, |now| seen.push(now)));
        clock.advance(chrono::Duration::seconds(30));
        assert!(task.tick(&clock, |now| seen.push(now)));

        assert_eq!(task.runs(), 2);
        assert_eq!(seen, vec![start(), start() + chrono::Duration::seconds(60)]);
        assert_eq!(task.next_run(), Some(start() + chrono::Duration::seconds(120)));
    }

    #[test]
    fn test_late_wakeup_runs_once() {
        let clock = FixedClock::new(start());
        let mut task = PeriodicTask::new(Duration::from_secs(60));
        task.tick(&clock, |_| {});

        clock.advance(chrono::Duration::minutes(10));
        let mut count = 0;
        task.tick(&clock, |_| count += 1);
        task.tick(&clock, |_| count += 1);
        assert_eq!(count, 1);
    }
}
