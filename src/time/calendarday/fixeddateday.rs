use chrono::NaiveDate;

use super::calendarday::RecurringDay;
use super::calendardayerror::CalendarDayError;

/// Leap year used to validate month/day pairs, so 29 February is accepted.
const VALIDATION_YEAR: i32 = 2000;

/// A day fixed by month and day of month, e.g. 25 December.
///
/// When `year` is set the day only exists in that single year.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedDateDay {
    month: u32,
    day: u32,
    year: Option<i32>
}

impl FixedDateDay {
    pub fn new(month: u32, day: u32) -> Result<FixedDateDay, CalendarDayError> {
        NaiveDate::from_ymd_opt(VALIDATION_YEAR, month, day)
            .ok_or(CalendarDayError::InvalidDate { month, day })?;
        Ok(FixedDateDay { month, day, year: None })
    }

    /// A one-off day, e.g. a jubilee holiday.
    pub fn in_year(year: i32, month: u32, day: u32) -> Result<FixedDateDay, CalendarDayError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(CalendarDayError::InvalidDate { month, day })?;
        Ok(FixedDateDay { month, day, year: Some(year) })
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn year(&self) -> Option<i32> {
        self.year
    }

    fn not_in_year(&self, year: i32) -> CalendarDayError {
        CalendarDayError::DayNotInYear {
            description: format!("{:02}-{:02}", self.month, self.day),
            year
        }
    }
}

impl RecurringDay for FixedDateDay {
    fn day_in_year(&self, year: i32) -> Result<NaiveDate, CalendarDayError> {
        if self.year.is_some_and(|y| y != year) {
            return Err(self.not_in_year(year));
        }
        NaiveDate::from_ymd_opt(year, self.month, self.day).ok_or_else(|| self.not_in_year(year))
    }
}
