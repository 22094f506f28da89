use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use super::calendarday::RecurringDay;
use super::calendardayerror::CalendarDayError;

#[derive(PartialEq, Eq, Clone, Copy, Debug, Serialize, Deserialize)]
pub enum EasterType {
    Western,
    Orthodox
}

/// A day at a fixed offset from Easter Sunday, e.g. Good Friday (-2) or
/// Whit Monday (+50).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EasterRelatedDay {
    easter_type: EasterType,
    shift_days: i32
}

impl EasterRelatedDay {
    pub fn new(easter_type: EasterType, shift_days: i32) -> EasterRelatedDay {
        EasterRelatedDay { easter_type, shift_days }
    }

    pub fn easter_type(&self) -> EasterType {
        self.easter_type
    }

    pub fn shift_days(&self) -> i32 {
        self.shift_days
    }
}

/// Easter Sunday as a Gregorian date.
pub fn easter_sunday(easter_type: EasterType, year: i32) -> Result<NaiveDate, CalendarDayError> {
    if !(1583..=4099).contains(&year) {
        return Err(CalendarDayError::EasterOutOfRange(year));
    }

    let g = year % 19;

    // Days from 21 March to Easter Sunday, minus one; may be negative.
    let p = match easter_type {
        EasterType::Orthodox => {
            let i = (19 * g + 15) % 30;
            let j = (year + year / 4 + i) % 7;
            let julian_offset = if year <= 1600 {
                10
            } else {
                10 + year / 100 - 16 - (year / 100 - 16) / 4
            };
            i - j + julian_offset
        },
        EasterType::Western => {
            let c = year / 100;
            let c_div_4 = c / 4;
            let h = (c - c_div_4 - (8 * c + 13) / 25 + 19 * g + 15) % 30;
            let h_div_28 = h / 28;
            let i = h - h_div_28 * (1 - h_div_28 * (29 / (h + 1)) * ((21 - g) / 11));
            let j = (year + year / 4 + i + 2 - c + c_div_4) % 7;
            i - j
        }
    };

    let day = 1 + (p + 27 + (p + 6) / 40) % 31;
    let month = 3 + (p + 26) / 30;

    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
        .ok_or(CalendarDayError::EasterOutOfRange(year))
}

impl RecurringDay for EasterRelatedDay {
    fn day_in_year(&self, year: i32) -> Result<NaiveDate, CalendarDayError> {
        let easter = easter_sunday(self.easter_type, year)?;
        let shifted = if self.shift_days >= 0 {
            easter.checked_add_days(Days::new(self.shift_days as u64))
        } else {
            easter.checked_sub_days(Days::new(self.shift_days.unsigned_abs() as u64))
        };
        shifted.ok_or(CalendarDayError::EasterOutOfRange(year))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Weekday};

    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn western_easter() {
        assert_eq!(easter_sunday(EasterType::Western, 2008), Ok(ymd(2008, 3, 23)));
        assert_eq!(easter_sunday(EasterType::Western, 2019), Ok(ymd(2019, 4, 21)));
        assert_eq!(easter_sunday(EasterType::Western, 2023), Ok(ymd(2023, 4, 9)));
        assert_eq!(easter_sunday(EasterType::Western, 2024), Ok(ymd(2024, 3, 31)));
        assert_eq!(easter_sunday(EasterType::Western, 2285), Ok(ymd(2285, 3, 22)));
    }

    #[test]
    fn orthodox_easter() {
        assert_eq!(easter_sunday(EasterType::Orthodox, 2023), Ok(ymd(2023, 4, 16)));
        assert_eq!(easter_sunday(EasterType::Orthodox, 2024), Ok(ymd(2024, 5, 5)));
    }

    #[test]
    fn orthodox_easter_before_1600() {
        let easter = easter_sunday(EasterType::Orthodox, 1590).unwrap();
        assert_eq!(easter, ymd(1590, 4, 29));
        assert_eq!(easter.weekday(), Weekday::Sun);
        assert_eq!(easter_sunday(EasterType::Orthodox, 1600), Ok(ymd(1600, 4, 2)));
    }

    #[test]
    fn out_of_range_years() {
        assert_eq!(easter_sunday(EasterType::Western, 1582), Err(CalendarDayError::EasterOutOfRange(1582)));
        assert_eq!(easter_sunday(EasterType::Western, 4100), Err(CalendarDayError::EasterOutOfRange(4100)));
    }

    #[test]
    fn shifted_days() {
        let good_friday = EasterRelatedDay::new(EasterType::Western, -2);
        let whit_monday = EasterRelatedDay::new(EasterType::Western, 50);
        assert_eq!(good_friday.day_in_year(2023), Ok(ymd(2023, 4, 7)));
        assert_eq!(whit_monday.day_in_year(2023), Ok(ymd(2023, 5, 29)));
    }
}
