//! Due-Date Countdown
//!
//! Pure mapping from (now, due date) to the status and label shown next to
//! an assignment, plus the render cycle that applies it to a set of targets.
//! A target whose due date cannot be parsed is skipped and left as it was.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::config::PortalConfig;
use crate::error::{PortalError, PortalResult};

/// Base class every countdown element carries
pub const COUNTDOWN_CLASS: &str = "due-date-countdown";

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Countdown status, one class per state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueStatus {
    PastDue,
    Urgent,
    Normal,
}

impl DueStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DueStatus::PastDue => "past-due",
            DueStatus::Urgent => "urgent",
            DueStatus::Normal => "normal",
        }
    }

    /// Font Awesome icon shown before the label
    pub fn icon_class(&self) -> &'static str {
        match self {
            DueStatus::PastDue => "fas fa-exclamation-circle me-2",
            DueStatus::Urgent | DueStatus::Normal => "fas fa-clock me-2",
        }
    }
}

/// Derived display state for one due item at one instant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownState {
    pub status: DueStatus,
    /// Absolute whole-day count shown in the label
    pub days: i64,
    pub label: String,
}

impl CountdownState {
    /// Full class attribute: base class plus exactly one status class
    pub fn class_name(&self) -> String {
        format!("{} {}", COUNTDOWN_CLASS, self.status.as_str())
    }

    pub fn icon_class(&self) -> &'static str {
        self.status.icon_class()
    }
}

/// Parse a due-date attribute. Zone-less values are taken as UTC.
pub fn parse_due_date(raw: &str) -> PortalResult<DateTime<Utc>> {
    let trimmed = raw.trim();
    let invalid = || PortalError::InvalidDueDate { raw: raw.to_string() };
    if trimmed.is_empty() {
        return Err(invalid());
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(invalid)
}

fn pluralize(count: i64) -> &'static str {
    if count == 1 { "day" } else { "days" }
}

/// Compute the countdown for `due` as seen at `now`.
///
/// Days are floored, so anything overdue by less than a day reads as
/// "1 day overdue" and anything due within the next 24 hours as
/// "0 days remaining".
pub fn compute_countdown(now: DateTime<Utc>, due: DateTime<Utc>, urgent_threshold_days: i64) -> CountdownState {
    let diff_ms = (due - now).num_milliseconds();
    let days = diff_ms.div_euclid(MILLIS_PER_DAY);

    if diff_ms < 0 {
        let overdue = days.abs();
        CountdownState {
            status: DueStatus::PastDue,
            days: overdue,
            label: format!("{} {} overdue", overdue, pluralize(overdue)),
        }
    } else {
        let status = if days < urgent_threshold_days {
            DueStatus::Urgent
        } else {
            DueStatus::Normal
        };
        CountdownState {
            status,
            days,
            label: format!("{} {} remaining", days, pluralize(days)),
        }
    }
}

/// Anything that carries a due date and can display a countdown
pub trait DueTarget {
    /// Raw due-date attribute, `None` when absent
    fn due_date(&self) -> Option<String>;

    /// Replace the rendered icon, label and status class
    fn apply(&mut self, state: &CountdownState) -> PortalResult<()>;
}

/// In-memory due item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DueItem {
    pub due_date: String,
    pub display: Option<CountdownState>,
}

impl DueItem {
    pub fn new(due_date: impl Into<String>) -> Self {
        Self { due_date: due_date.into(), display: None }
    }
}

impl DueTarget for DueItem {
    fn due_date(&self) -> Option<String> {
        Some(self.due_date.clone())
    }

    fn apply(&mut self, state: &CountdownState) -> PortalResult<()> {
        self.display = Some(state.clone());
        Ok(())
    }
}

/// Outcome of one render cycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleReport {
    pub rendered: usize,
    pub skipped: usize,
}

/// Applies countdown states to due targets
#[derive(Debug, Clone, Copy)]
pub struct CountdownRenderer {
    urgent_threshold_days: i64,
}

impl Default for CountdownRenderer {
    fn default() -> Self {
        Self::from_config(&PortalConfig::default())
    }
}

impl CountdownRenderer {
    pub fn new(urgent_threshold_days: i64) -> Self {
        Self { urgent_threshold_days }
    }

    pub fn from_config(config: &PortalConfig) -> Self {
        Self::new(config.urgent_threshold_days)
    }

    /// State for a single raw due date
    pub fn evaluate(&self, raw: &str, now: DateTime<Utc>) -> PortalResult<CountdownState> {
        let due = parse_due_date(raw)?;
        Ok(compute_countdown(now, due, self.urgent_threshold_days))
    }

    /// Render every target against the same `now`.
    /// Failures are logged per target and never stop the cycle.
    pub fn render_cycle<T: DueTarget>(&self, targets: &mut [T], now: DateTime<Utc>) -> CycleReport {
        let mut report = CycleReport::default();
        for target in targets.iter_mut() {
            let raw = target.due_date().unwrap_or_default();
            match self.evaluate(&raw, now).and_then(|state| target.apply(&state)) {
                Ok(()) => report.rendered += 1,
                Err(e) => {
                    log::warn!("Error processing due date: {}", e);
                    report.skipped += 1;
                }
            }
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap()
    }

    fn state_in(offset: Duration) -> CountdownState {
        compute_countdown(now(), now() + offset, 3)
    }

    #[test]
    fn test_future_is_remaining() {
        for hours in [0, 1, 23, 24, 47, 72, 500] {
            let state = state_in(Duration::hours(hours));
            assert!(state.days >= 0);
            assert!(state.label.ends_with("remaining"), "{}", state.label);
            let urgent = state.days < 3;
            assert_eq!(state.status == DueStatus::Urgent, urgent);
        }
    }

    #[test]
    fn test_urgent_boundary() {
        assert_eq!(state_in(Duration::days(2) + Duration::hours(23)).status, DueStatus::Urgent);
        assert_eq!(state_in(Duration::days(3)).status, DueStatus::Normal);
    }

    #[test]
    fn test_past_is_overdue() {
        let state = state_in(-Duration::days(4));
        assert_eq!(state.status, DueStatus::PastDue);
        assert_eq!(state.label, "4 days overdue");
        assert_eq!(state.class_name(), "due-date-countdown past-due");
        assert_eq!(state.icon_class(), "fas fa-exclamation-circle me-2");
    }

    #[test]
    fn test_floor_makes_fresh_overdue_one_day() {
        let state = state_in(-Duration::hours(1));
        assert_eq!(state.status, DueStatus::PastDue);
        assert_eq!(state.label, "1 day overdue");
    }

    #[test]
    fn test_pluralization() {
        assert_eq!(state_in(Duration::days(1)).label, "1 day remaining");
        assert_eq!(state_in(Duration::days(2)).label, "2 days remaining");
        assert_eq!(state_in(Duration::hours(5)).label, "0 days remaining");
        assert_eq!(state_in(-Duration::days(2)).label, "2 days overdue");
    }

    #[test]
    fn test_normal_state_classes() {
        let state = state_in(Duration::days(10));
        assert_eq!(state.status, DueStatus::Normal);
        assert_eq!(state.class_name(), "due-date-countdown normal");
        assert_eq!(state.icon_class(), "fas fa-clock me-2");
    }

    #[test]
    fn test_parse_formats() {
        let expected = Utc.with_ymd_and_hms(2024, 5, 12, 8, 30, 0).unwrap();
        assert_eq!(parse_due_date("2024-05-12T08:30:00Z").unwrap(), expected);
        assert_eq!(parse_due_date("2024-05-12T10:30:00+02:00").unwrap(), expected);
        assert_eq!(parse_due_date("2024-05-12T08:30").unwrap(), expected);
        assert_eq!(parse_due_date("2024-05-12 08:30:00").unwrap(), expected);
        assert_eq!(
            parse_due_date("2024-05-12").unwrap(),
            Utc.with_ymd_and_hms(2024, 5, 12, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(
            parse_due_date("not-a-date"),
            Err(PortalError::InvalidDueDate { raw: "not-a-date".to_string() })
        );
        assert!(parse_due_date("   ").is_err());
        assert!(parse_due_date("2024-13-40").is_err());
    }

    #[test]
    fn test_render_cycle_skips_invalid_items() {
        let renderer = CountdownRenderer::default();
        let prior = CountdownState {
            status: DueStatus::Normal,
            days: 9,
            label: "server text".to_string(),
        };
        let mut items = vec![
            DueItem::new("2024-05-11T12:00:00Z"),
            DueItem { due_date: "not-a-date".to_string(), display: Some(prior.clone()) },
            DueItem::new("2024-05-01T12:30:00Z"),
        ];

        for minute in 0..3 {
            let report = renderer.render_cycle(&mut items, now() + Duration::minutes(minute));
            assert_eq!(report, CycleReport { rendered: 2, skipped: 1 });
            assert_eq!(items[1].display.as_ref(), Some(&prior));
        }
        assert_eq!(items[0].display.as_ref().unwrap().label, "0 days remaining");
        assert_eq!(items[2].display.as_ref().unwrap().label, "9 days overdue");
    }

    /// Target whose display write always fails
    struct RejectingTarget {
        shown: String,
    }

    impl DueTarget for RejectingTarget {
        fn due_date(&self) -> Option<String> {
            Some("2024-05-20T12:00:00Z".to_string())
        }

        fn apply(&mut self, _state: &CountdownState) -> PortalResult<()> {
            Err(PortalError::Render("append failed".to_string()))
        }
    }

    #[test]
    fn test_failed_apply_is_skipped_and_untouched() {
        let renderer = CountdownRenderer::default();
        let mut targets = vec![RejectingTarget { shown: "server text".to_string() }];
        let report = renderer.render_cycle(&mut targets, now());
        assert_eq!(report, CycleReport { rendered: 0, skipped: 1 });
        assert_eq!(targets[0].shown, "server text");
    }

    #[test]
    fn test_renderer_uses_configured_threshold() {
        let config = PortalConfig { urgent_threshold_days: 7, ..PortalConfig::default() };
        let renderer = CountdownRenderer::from_config(&config);
        let state = renderer.evaluate("2024-05-15T12:00:00Z", now()).unwrap();
        assert_eq!(state.status, DueStatus::Urgent);
        assert_eq!(state.label, "5 days remaining");
    }
}
