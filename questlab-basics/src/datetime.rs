//! Dates and times with `chrono`: deadlines, resets, formatting.

use crate::{BasicsError, BasicsResult};
use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, TimeZone, Utc, Weekday};

/// Format used for timestamps shown to players.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// A quest that must be finished before `due`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deadline {
    pub quest: String,
    pub due: DateTime<Utc>,
}

impl Deadline {
    pub fn new(quest: impl Into<String>, due: DateTime<Utc>) -> Self {
        Self {
            quest: quest.into(),
            due,
        }
    }

    /// A deadline `hours` after `now`.
    pub fn in_hours(quest: impl Into<String>, now: DateTime<Utc>, hours: i64) -> Self {
        Self::new(quest, now + Duration::hours(hours))
    }

    /// Time left, or `None` once the deadline has passed.
    #[must_use]
    pub fn remaining(&self, now: DateTime<Utc>) -> Option<Duration> {
        let left = self.due - now;
        (left > Duration::zero()).then_some(left)
    }

    #[must_use]
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        self.remaining(now).is_none()
    }

    /// `"Rat Cellar: 1d 02h 30m left"` or `"Rat Cellar: overdue"`.
    #[must_use]
    pub fn describe(&self, now: DateTime<Utc>) -> String {
        match self.remaining(now) {
            Some(left) => format!("{}: {} left", self.quest, format_duration(left)),
            None => format!("{}: overdue", self.quest),
        }
    }
}

/// Renders a duration as `"1d 02h 30m"`, dropping leading zero units.
/// Durations under a minute render as seconds.
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let total = duration.num_seconds().max(0);
    let (days, hours, minutes) = (total / 86_400, (total % 86_400) / 3_600, (total % 3_600) / 60);
    if days > 0 {
        format!("{days}d {hours:02}h {minutes:02}m")
    } else if hours > 0 {
        format!("{hours}h {minutes:02}m")
    } else if minutes > 0 {
        format!("{minutes}m")
    } else {
        format!("{total}s")
    }
}

#[must_use]
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Parses a `YYYY-MM-DD HH:MM` timestamp as UTC.
pub fn parse_timestamp(input: &str) -> BasicsResult<DateTime<Utc>> {
    let naive = NaiveDateTime::parse_from_str(input.trim(), TIMESTAMP_FORMAT).map_err(|source| {
        BasicsError::Timestamp {
            input: input.to_string(),
            source,
        }
    })?;
    Ok(Utc.from_utc_datetime(&naive))
}

/// The next daily reset at `reset_hour` UTC strictly after `now`.
///
/// Hours above 23 wrap around the day.
#[must_use]
pub fn next_daily_reset(now: DateTime<Utc>, reset_hour: u32) -> DateTime<Utc> {
    let today = now.date_naive();
    let reset_today = today
        .and_hms_opt(reset_hour % 24, 0, 0)
        .map(|naive| Utc.from_utc_datetime(&naive))
        .unwrap_or(now);
    if reset_today > now {
        reset_today
    } else {
        reset_today + Duration::days(1)
    }
}

/// Whole days from `from` to `to`; negative if `to` is earlier.
#[must_use]
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// Weekend events give double xp.
#[must_use]
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// The xp multiplier in effect on `date`.
#[must_use]
pub fn xp_multiplier(date: NaiveDate) -> u32 {
    if is_weekend(date) { 2 } else { 1 }
}

/// Age of a save file in whole days, for "last played N days ago".
#[must_use]
pub fn days_since(then: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - then).num_days()
}
