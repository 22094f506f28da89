use serde::Deserialize;
use thiserror::Error;

use crate::time::calendarday::calendardayerror::CalendarDayError;

#[derive(Error, Debug)]
pub enum ManagerError {
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    #[error(transparent)]
    JsonParseError(#[from] serde_json::Error),

    #[error("key '{0}' not found")]
    NameNotFoundError(String),

    #[error("invalid calendar day: {0}")]
    CalendarDayError(#[from] CalendarDayError)
}

/// Deserializes `json_value` into `T`, reporting failures as [`ManagerError::JsonParseError`].
pub fn parse_json_value<T>(json_value: serde_json::Value) -> Result<T, ManagerError>
where
    T: for<'a> Deserialize<'a>
{
    Ok(serde_json::from_value(json_value)?)
}
