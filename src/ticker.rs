//! Wall-clock ticking for countdowns.
//!
//! A short browser interval wakes a `PeriodicTask`, which decides against
//! the browser clock whether the refresh period has elapsed.

use std::time::Duration;

use chrono::{DateTime, Utc};
use gloo_timers::callback::Interval;
use leptos::prelude::*;
use portal_core::{Clock, PeriodicTask};

/// How often the timer wakes the task up
const POLL_MS: u32 = 1_000;

/// `Date.now()` as a clock
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(js_sys::Date::now() as i64).unwrap_or_default()
    }
}

/// Run `job` now and then once per `period` for the life of the page
pub fn run_periodically<F>(period: Duration, mut job: F)
where
    F: FnMut(DateTime<Utc>) + 'static,
{
    let mut task = PeriodicTask::new(period);
    task.tick(&BrowserClock, &mut job);
    Interval::new(POLL_MS, move || {
        task.tick(&BrowserClock, &mut job);
    })
    .forget();
}

/// Signal holding "now", refreshed once per `period`
pub fn use_wall_clock(period: Duration) -> ReadSignal<DateTime<Utc>> {
    let (now, set_now) = signal(BrowserClock.now());
    run_periodically(period, move |tick| set_now.set(tick));
    now
}
