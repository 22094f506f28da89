use chrono::{Datelike, Days, NaiveDate, Weekday};

use super::calendardayerror::CalendarDayError;
use crate::time::weekday::weekday_from_name;

/// The questions a holiday rule asks about the day it is anchored to.
///
/// Implementations are shared read-only between rules and threads, hence the
/// `Send + Sync` supertrait.
pub trait CalendarDay: Send + Sync {
    /// Weekday the day falls on in the given Gregorian year.
    fn weekday_in_year(&self, year: i32) -> Result<Weekday, CalendarDayError>;

    /// Whether `d` is the first `target` weekday after the day (in `d`'s year).
    fn is_follow_up_day(&self, d: NaiveDate, target: &str) -> Result<bool, CalendarDayError>;

    /// Whether `d` is the last `target` weekday before the day (in `d`'s year).
    fn is_previous_day(&self, d: NaiveDate, target: &str) -> Result<bool, CalendarDayError>;

    /// Whether `d` is the day itself.
    fn is_same_day(&self, d: NaiveDate) -> Result<bool, CalendarDayError>;
}

/// A day that resolves to exactly one date per year.
///
/// Every `RecurringDay` is a `CalendarDay`; the redirection predicates are
/// derived from `day_in_year`.
pub trait RecurringDay: Send + Sync {
    fn day_in_year(&self, year: i32) -> Result<NaiveDate, CalendarDayError>;
}

impl<T: RecurringDay> CalendarDay for T {
    fn weekday_in_year(&self, year: i32) -> Result<Weekday, CalendarDayError> {
        Ok(self.day_in_year(year)?.weekday())
    }

    fn is_follow_up_day(&self, d: NaiveDate, target: &str) -> Result<bool, CalendarDayError> {
        let target = parse_target(target)?;
        let anchor = self.day_in_year(d.year())?;
        Ok(next_weekday_after(anchor, target) == Some(d))
    }

    fn is_previous_day(&self, d: NaiveDate, target: &str) -> Result<bool, CalendarDayError> {
        let target = parse_target(target)?;
        let anchor = self.day_in_year(d.year())?;
        Ok(previous_weekday_before(anchor, target) == Some(d))
    }

    fn is_same_day(&self, d: NaiveDate) -> Result<bool, CalendarDayError> {
        Ok(self.day_in_year(d.year())? == d)
    }
}

fn parse_target(target: &str) -> Result<Weekday, CalendarDayError> {
    if target.is_empty() {
        return Err(CalendarDayError::MissingTarget);
    }
    weekday_from_name(target).ok_or_else(|| CalendarDayError::UnknownWeekday(target.to_owned()))
}

/// First day strictly after `d` falling on `weekday`.
pub fn next_weekday_after(d: NaiveDate, weekday: Weekday) -> Option<NaiveDate> {
    let days_ahead = (weekday.num_days_from_monday() + 7 - d.weekday().num_days_from_monday()) % 7;
    let days_ahead = if days_ahead == 0 { 7 } else { days_ahead };
    d.checked_add_days(Days::new(days_ahead as u64))
}

/// Last day strictly before `d` falling on `weekday`.
pub fn previous_weekday_before(d: NaiveDate, weekday: Weekday) -> Option<NaiveDate> {
    let days_back = (d.weekday().num_days_from_monday() + 7 - weekday.num_days_from_monday()) % 7;
    let days_back = if days_back == 0 { 7 } else { days_back };
    d.checked_sub_days(Days::new(days_back as u64))
}
