use chrono::{Datelike, NaiveDate};
use tracing::trace;

use super::holiday::Holiday;
use super::holidayrule::HolidayRule;
use crate::time::calendarday::calendardayerror::CalendarDayError;

/// An ordered list of rules; the first rule matching a date names it.
#[derive(Clone, Debug, Default)]
pub struct HolidayChecker {
    rules: Vec<HolidayRule>
}

impl HolidayChecker {
    pub fn new(rules: Vec<HolidayRule>) -> HolidayChecker {
        HolidayChecker { rules }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// First rule matching `d`.
    ///
    /// A rule whose day does not exist in `d`'s year (29 February, a fifth
    /// weekday, a one-off day) is skipped; any other error is returned.
    pub fn check(&self, d: NaiveDate) -> Result<Option<Holiday>, CalendarDayError> {
        for rule in self.rules.iter() {
            match rule.matches(d) {
                Ok(true) => {
                    trace!(rule = rule.name(), date = %d, "rule matched");
                    return Ok(Some(Holiday::new(rule.name().to_owned(), rule.is_holiday(), d)));
                },
                Ok(false) => {},
                Err(CalendarDayError::DayNotInYear { .. }) => {
                    trace!(rule = rule.name(), year = d.year(), "rule has no day this year");
                },
                Err(error) => return Err(error)
            }
        }
        Ok(None)
    }

    /// Whether the first matching rule marks `d` as a holiday.
    pub fn is_holiday(&self, d: NaiveDate) -> Result<bool, CalendarDayError> {
        Ok(self.check(d)?.is_some_and(|h| h.is_holiday()))
    }

    /// Every date of `year` matched by some rule, in date order.
    pub fn holidays_in_year(&self, year: i32) -> Result<Vec<Holiday>, CalendarDayError> {
        let mut holidays = Vec::new();
        let Some(first) = NaiveDate::from_ymd_opt(year, 1, 1) else {
            return Ok(holidays);
        };
        for d in first.iter_days().take_while(|d| d.year() == year) {
            if let Some(holiday) = self.check(d)? {
                holidays.push(holiday);
            }
        }
        Ok(holidays)
    }
}
