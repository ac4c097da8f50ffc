//! Schedule-domain models: the resolved year anchor, the date axis and
//! the per-cell schedule entry.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// The schedule-year anchor resolved from the grid's top-left cell.
///
/// The anchor is the year of January. Schedules run December-to-November,
/// so a date in month 12 belongs to the year before the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleYear(pub i32);

impl ScheduleYear {
    /// The inclusive range of anchor years accepted from the grid.
    pub const VALID_RANGE: std::ops::RangeInclusive<i32> = 2020..=2050;

    /// Returns the calendar year for a date falling in `month`.
    ///
    /// # Example
    ///
    /// ```
    /// use roster_engine::models::ScheduleYear;
    ///
    /// let year = ScheduleYear(2026);
    /// assert_eq!(year.year_for_month(12), 2025);
    /// assert_eq!(year.year_for_month(3), 2026);
    /// ```
    pub fn year_for_month(&self, month: u32) -> i32 {
        if month == 12 { self.0 - 1 } else { self.0 }
    }

    /// Re-anchors a raw parsed date onto this schedule year.
    ///
    /// The raw date's own year (often a placeholder for header cells
    /// written without one) is discarded. Returns `None` when the
    /// month/day combination does not exist in the target year
    /// (February 29 outside a leap year).
    pub fn apply_to(&self, raw: NaiveDate) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year_for_month(raw.month()), raw.month(), raw.day())
    }
}

/// One resolved date on the axis, tagged with its originating grid column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateAxisEntry {
    /// The calendar date, with its year already resolved.
    pub date: NaiveDate,
    /// The grid column the date was read from.
    pub column: usize,
}

/// The resolved date axis of a schedule grid.
///
/// Produced once per grid by the date-column locator and consumed uniformly
/// by every downstream stage: it canonicalizes where the data region starts
/// and which column carries which date, so no stage re-derives offsets.
#[derive(Debug, Clone)]
pub struct DateAxis {
    /// First row of the data region (1 when dates were in the header row,
    /// 2 when the first data row turned out to be the date row).
    pub data_start_row: usize,
    /// Month of the first date in encounter order, kept for traceability.
    pub first_month: u32,
    entries: Vec<DateAxisEntry>,
}

impl DateAxis {
    /// Builds an axis from already deduplicated, ascending entries.
    pub(crate) fn new(data_start_row: usize, first_month: u32, entries: Vec<DateAxisEntry>) -> Self {
        debug_assert!(entries.windows(2).all(|w| w[0].date < w[1].date));
        Self {
            data_start_row,
            first_month,
            entries,
        }
    }

    /// Returns the axis entries in ascending date order.
    pub fn entries(&self) -> &[DateAxisEntry] {
        &self.entries
    }

    /// Returns the earliest date on the axis.
    pub fn earliest(&self) -> NaiveDate {
        // The axis is never constructed empty (NoDateColumnsFound fires first).
        self.entries[0].date
    }

    /// Returns the number of dates on the axis.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when the axis holds no dates.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true when `column` is one of the date columns.
    pub fn is_date_column(&self, column: usize) -> bool {
        self.entries.iter().any(|e| e.column == column)
    }
}

/// One (date, shift-code) fact read from an employee's row.
///
/// Ephemeral: produced per extraction call and consumed by event synthesis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// The date of the entry.
    pub date: NaiveDate,
    /// The trimmed, uppercased shift code read from the cell.
    pub code: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_december_rolls_back_to_previous_year() {
        let year = ScheduleYear(2026);
        assert_eq!(year.year_for_month(12), 2025);
    }

    #[test]
    fn test_january_through_november_use_anchor() {
        let year = ScheduleYear(2026);
        for month in 1..=11 {
            assert_eq!(year.year_for_month(month), 2026);
        }
    }

    #[test]
    fn test_apply_to_replaces_placeholder_year() {
        let year = ScheduleYear(2026);
        assert_eq!(
            year.apply_to(date(2000, 12, 25)),
            Some(date(2025, 12, 25))
        );
        assert_eq!(year.apply_to(date(2000, 3, 1)), Some(date(2026, 3, 1)));
    }

    #[test]
    fn test_apply_to_rejects_impossible_leap_day() {
        // 2000 is a leap year, 2026 is not.
        let year = ScheduleYear(2026);
        assert_eq!(year.apply_to(date(2000, 2, 29)), None);
    }

    #[test]
    fn test_axis_lookups() {
        let axis = DateAxis::new(
            1,
            12,
            vec![
                DateAxisEntry {
                    date: date(2025, 12, 1),
                    column: 1,
                },
                DateAxisEntry {
                    date: date(2025, 12, 2),
                    column: 2,
                },
            ],
        );

        assert_eq!(axis.len(), 2);
        assert_eq!(axis.earliest(), date(2025, 12, 1));
        assert!(axis.is_date_column(1));
        assert!(axis.is_date_column(2));
        assert!(!axis.is_date_column(0));
    }
}
