use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarDayError {
    #[error("{month:02}-{day:02} is not a valid calendar day")]
    InvalidDate { month: u32, day: u32 },

    #[error("{description} does not exist in year {year}")]
    DayNotInYear { description: String, year: i32 },

    #[error("easter is only computed for years 1583 to 4099, got {0}")]
    EasterOutOfRange(i32),

    #[error("unknown weekday '{0}'")]
    UnknownWeekday(String),

    #[error("redirection fired without a target weekday")]
    MissingTarget
}
