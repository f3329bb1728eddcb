//! Shared utility functions for the campsite demand crates.

/// Date utility functions
pub mod dates {
    use chrono::{Datelike, Months, NaiveDate};
    use std::mem::replace;

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    /// Parse a date string in "YYYY-MM-DD" format
    pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")?)
    }

    /// Abbreviated month name ("Jan", "Feb", ...), the label used on month axes.
    pub fn month_label(date: &NaiveDate) -> String {
        date.format("%b").to_string()
    }

    /// Continuous day number for a date, used as the linear time coordinate.
    pub fn day_number(date: &NaiveDate) -> f64 {
        f64::from(date.num_days_from_ce())
    }

    /// First day of the month containing `date`.
    pub fn month_floor(date: &NaiveDate) -> NaiveDate {
        date.with_day(1).unwrap_or(*date)
    }

    /// First day of the month on or after `date`.
    pub fn month_ceil(date: &NaiveDate) -> NaiveDate {
        let floor = month_floor(date);
        if floor == *date {
            floor
        } else {
            floor + Months::new(1)
        }
    }

    /// Iterator over month starts from the start date through the end
    /// date (inclusive), advancing `step` months at a time.
    ///
    /// The start is rounded up to the first month start on or after it.
    #[derive(Clone, Eq, PartialEq, Copy, Debug)]
    pub struct MonthStarts {
        next: NaiveDate,
        end: NaiveDate,
        step: u32,
    }

    impl MonthStarts {
        pub fn new(start: NaiveDate, end: NaiveDate, step: u32) -> Self {
            Self {
                next: month_ceil(&start),
                end,
                step: step.max(1),
            }
        }
    }

    impl Iterator for MonthStarts {
        type Item = NaiveDate;
        fn next(&mut self) -> Option<Self::Item> {
            if self.next <= self.end {
                let following = self.next + Months::new(self.step);
                Some(replace(&mut self.next, following))
            } else {
                None
            }
        }
    }

}
