//! Evaluation windows and workday arithmetic.

use super::ScoringError;
use chrono::{DateTime, Datelike, Days, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Serialize};

const DAYS_PER_WEEK: i64 = 7;
const WORKDAYS_PER_WEEK: i64 = 5;

/// Returns whether `day` falls on Monday to Friday.
#[must_use]
pub fn is_workday(day: NaiveDate) -> bool {
    !matches!(day.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Counts Monday-to-Friday dates in `[start, end]`, both ends inclusive.
///
/// Returns `0` when `start` is after `end`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use taskboard::scoring::domain::workday_count;
///
/// let monday = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap_or_default();
/// let friday = NaiveDate::from_ymd_opt(2024, 6, 7).unwrap_or_default();
/// assert_eq!(workday_count(monday, friday), 5);
/// ```
#[must_use]
pub fn workday_count(start: NaiveDate, end: NaiveDate) -> u32 {
    if start > end {
        return 0;
    }
    let span_days = end.signed_duration_since(start).num_days().saturating_add(1);
    let full_weeks = span_days.div_euclid(DAYS_PER_WEEK);
    let tail_workdays = u64::try_from(full_weeks.saturating_mul(DAYS_PER_WEEK))
        .ok()
        .and_then(|offset| start.checked_add_days(Days::new(offset)))
        .map_or(0, |tail_start| {
            tail_start
                .iter_days()
                .take_while(|day| *day <= end)
                .filter(|day| is_workday(*day))
                .count()
        });
    let total = full_weeks
        .saturating_mul(WORKDAYS_PER_WEEK)
        .saturating_add(i64::try_from(tail_workdays).unwrap_or(0));
    u32::try_from(total).unwrap_or(u32::MAX)
}

/// Inclusive range of calendar days a score is computed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl EvaluationWindow {
    /// Creates a window covering `start` through `end`.
    ///
    /// # Errors
    ///
    /// Returns [`ScoringError::InvertedWindow`] when `start` is after `end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, ScoringError> {
        if start > end {
            return Err(ScoringError::InvertedWindow { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates a window of `weeks` whole weeks ending on `end`.
    ///
    /// A zero week count is treated as one week.
    #[must_use]
    pub fn trailing_weeks(end: NaiveDate, weeks: u32) -> Self {
        let span = u64::from(weeks.max(1)).saturating_mul(7).saturating_sub(1);
        let start = end.checked_sub_days(Days::new(span)).unwrap_or(NaiveDate::MIN);
        Self { start, end }
    }

    /// Returns the first day of the window.
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Returns the last day of the window.
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Returns the number of workdays in the window.
    #[must_use]
    pub fn workdays(&self) -> u32 {
        workday_count(self.start, self.end)
    }

    /// Returns whether `day` lies inside the window.
    #[must_use]
    pub fn contains_date(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }

    /// Returns whether `instant` falls on a day inside the window (UTC).
    #[must_use]
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.contains_date(instant.date_naive())
    }

    /// Iterates over the workdays of the window in order.
    pub fn workday_dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start
            .iter_days()
            .take_while(|day| *day <= self.end)
            .filter(|day| is_workday(*day))
    }

    /// Maps a completion day to the workday it is credited to.
    ///
    /// Weekend days roll back to the preceding Friday, or forward to the
    /// following Monday when that Friday lies before the window. Returns
    /// `None` for days the window cannot credit.
    #[must_use]
    pub fn credited_workday(&self, day: NaiveDate) -> Option<NaiveDate> {
        if !self.contains_date(day) {
            return None;
        }
        let from_monday = u64::from(day.weekday().num_days_from_monday());
        if from_monday < 5 {
            return Some(day);
        }
        let friday = day.checked_sub_days(Days::new(from_monday.saturating_sub(4)));
        if let Some(previous) = friday.filter(|candidate| self.contains_date(*candidate)) {
            return Some(previous);
        }
        day.checked_add_days(Days::new(7_u64.saturating_sub(from_monday)))
            .filter(|candidate| self.contains_date(*candidate))
    }
}
