use chrono::NaiveDate;
use serde::Serialize;

/// A date together with the observance it matched.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Holiday {
    name: String,
    is_holiday: bool,
    date: NaiveDate
}

impl Holiday {
    pub fn new(name: String, is_holiday: bool, date: NaiveDate) -> Holiday {
        Holiday { name, is_holiday, date }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_holiday(&self) -> bool {
        self.is_holiday
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}
