use chrono::{NaiveDate, Weekday};

use super::calendarday::RecurringDay;
use super::calendardayerror::CalendarDayError;
use crate::time::weekday::weekday_name;

/// The `n`-th given weekday of a month, e.g. the first Monday of May.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NthWeekdayDay {
    month: u32,
    n: u8,
    weekday: Weekday
}

impl NthWeekdayDay {
    pub fn new(month: u32, n: u8, weekday: Weekday) -> Result<NthWeekdayDay, CalendarDayError> {
        if !(1..=12).contains(&month) || !(1..=5).contains(&n) {
            return Err(CalendarDayError::InvalidDate { month, day: n as u32 });
        }
        Ok(NthWeekdayDay { month, n, weekday })
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn n(&self) -> u8 {
        self.n
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }
}

impl RecurringDay for NthWeekdayDay {
    fn day_in_year(&self, year: i32) -> Result<NaiveDate, CalendarDayError> {
        NaiveDate::from_weekday_of_month_opt(year, self.month, self.weekday, self.n)
            .ok_or_else(|| CalendarDayError::DayNotInYear {
                description: format!("{} {} of month {}", self.n, weekday_name(self.weekday), self.month),
                year
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thanksgiving() {
        let thanksgiving = NthWeekdayDay::new(11, 4, Weekday::Thu).unwrap();
        assert_eq!(thanksgiving.day_in_year(2023), Ok(NaiveDate::from_ymd_opt(2023, 11, 23).unwrap()));
    }

    #[test]
    fn fifth_occurrence_may_be_missing() {
        // February 2023 has four Mondays
        let fifth_monday = NthWeekdayDay::new(2, 5, Weekday::Mon).unwrap();
        assert!(fifth_monday.day_in_year(2023).is_err());
    }

    #[test]
    fn rejects_bad_parameters() {
        assert!(NthWeekdayDay::new(0, 1, Weekday::Mon).is_err());
        assert!(NthWeekdayDay::new(5, 6, Weekday::Mon).is_err());
    }
}
