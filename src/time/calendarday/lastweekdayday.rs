use chrono::{Months, NaiveDate, Weekday};

use super::calendarday::{previous_weekday_before, RecurringDay};
use super::calendardayerror::CalendarDayError;
use crate::time::weekday::weekday_name;

/// The last given weekday of a month, e.g. the last Monday of May.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LastWeekdayDay {
    month: u32,
    weekday: Weekday
}

impl LastWeekdayDay {
    pub fn new(month: u32, weekday: Weekday) -> Result<LastWeekdayDay, CalendarDayError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarDayError::InvalidDate { month, day: 1 });
        }
        Ok(LastWeekdayDay { month, weekday })
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }
}

impl RecurringDay for LastWeekdayDay {
    fn day_in_year(&self, year: i32) -> Result<NaiveDate, CalendarDayError> {
        let first_of_next_month = NaiveDate::from_ymd_opt(year, self.month, 1)
            .and_then(|d| d.checked_add_months(Months::new(1)));

        first_of_next_month
            .and_then(|d| previous_weekday_before(d, self.weekday))
            .ok_or_else(|| CalendarDayError::DayNotInYear {
                description: format!("last {} of month {}", weekday_name(self.weekday), self.month),
                year
            })
    }
}
