//! Month-grid math for the festival calendar.
//!
//! The festivals page renders one month at a time as a Sunday-first
//! grid of weeks; all the date arithmetic lives here so the page only
//! deals in `NaiveDate`s.

use chrono::{Datelike, Days, NaiveDate};

/// One calendar month, navigable forwards and backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarMonth {
    year: i32,
    /// 1-based month number
    month: u32,
}

impl CalendarMonth {
    /// The month containing the given date.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn prev(self) -> Self {
        if self.month == 1 {
            Self { year: self.year - 1, month: 12 }
        } else {
            Self { year: self.year, month: self.month - 1 }
        }
    }

    pub fn next(self) -> Self {
        if self.month == 12 {
            Self { year: self.year + 1, month: 1 }
        } else {
            Self { year: self.year, month: self.month + 1 }
        }
    }

    /// Heading text, e.g. "February 2027".
    pub fn label(&self) -> String {
        self.first_day().format("%B %Y").to_string()
    }

    /// First day of the month.
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or_default()
    }

    /// Number of days in the month.
    pub fn day_count(&self) -> u32 {
        let next_first = self.next().first_day();
        next_first
            .pred_opt()
            .map(|d| d.day())
            .unwrap_or(28)
    }

    /// The grid rows, Sunday-first. Leading and trailing cells outside
    /// the month are `None`.
    pub fn weeks(&self) -> Vec<[Option<NaiveDate>; 7]> {
        let first = self.first_day();
        let leading = first.weekday().num_days_from_sunday() as usize;
        let day_count = self.day_count() as usize;

        let mut weeks = Vec::with_capacity(6);
        let mut week = [None; 7];
        let mut column = leading;

        for offset in 0..day_count {
            week[column] = first.checked_add_days(Days::new(offset as u64));
            column += 1;
            if column == 7 {
                weeks.push(week);
                week = [None; 7];
                column = 0;
            }
        }
        if column > 0 {
            weeks.push(week);
        }
        weeks
    }

    /// Column headings in grid order.
    pub fn weekday_labels() -> [&'static str; 7] {
        ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"]
    }
}

/// Weekday for a grid column index (0 = Sunday).
#[cfg(test)]
fn column_weekday(column: usize) -> chrono::Weekday {
    use chrono::Weekday;
    match column {
        0 => Weekday::Sun,
        1 => Weekday::Mon,
        2 => Weekday::Tue,
        3 => Weekday::Wed,
        4 => Weekday::Thu,
        5 => Weekday::Fri,
        _ => Weekday::Sat,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_day_appears_exactly_once() {
        let month = CalendarMonth { year: 2027, month: 2 };
        let days: Vec<_> = month
            .weeks()
            .iter()
            .flatten()
            .filter_map(|d| *d)
            .collect();
        assert_eq!(days.len(), 28);
        for (i, day) in days.iter().enumerate() {
            assert_eq!(day.day(), i as u32 + 1);
        }
    }

    #[test]
    fn cells_align_to_weekday_columns() {
        let month = CalendarMonth { year: 2026, month: 8 };
        for week in month.weeks() {
            for (column, cell) in week.iter().enumerate() {
                if let Some(date) = cell {
                    assert_eq!(date.weekday(), column_weekday(column));
                }
            }
        }
    }

    #[test]
    fn prev_next_round_trips() {
        let month = CalendarMonth { year: 2026, month: 8 };
        assert_eq!(month.prev().next(), month);
        assert_eq!(month.next().prev(), month);
    }

    #[test]
    fn navigation_crosses_year_boundaries() {
        let december = CalendarMonth { year: 2026, month: 12 };
        assert_eq!(december.next(), CalendarMonth { year: 2027, month: 1 });

        let january = CalendarMonth { year: 2026, month: 1 };
        assert_eq!(january.prev(), CalendarMonth { year: 2025, month: 12 });
    }

    #[test]
    fn day_counts() {
        assert_eq!(CalendarMonth { year: 2027, month: 2 }.day_count(), 28);
        assert_eq!(CalendarMonth { year: 2028, month: 2 }.day_count(), 29);
        assert_eq!(CalendarMonth { year: 2026, month: 8 }.day_count(), 31);
    }

    #[test]
    fn label_formats_month_and_year() {
        assert_eq!(CalendarMonth { year: 2027, month: 2 }.label(), "February 2027");
    }
}
