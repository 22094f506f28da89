use std::sync::Arc;

use chrono::Weekday;
use serde::{Deserialize, Deserializer};
use serde::de::Error;
use tracing::{debug, warn};

use super::holidaychecker::HolidayChecker;
use super::holidayrule::HolidayRule;
use super::weekdaytriggers::WeekdayTriggers;
use crate::manager::manager::Manager;
use crate::manager::managererror::{ManagerError, parse_json_value};
use crate::time::calendarday::calendarday::CalendarDay;
use crate::time::calendarday::easterrelatedday::{EasterRelatedDay, EasterType};
use crate::time::calendarday::fixeddateday::FixedDateDay;
use crate::time::calendarday::lastweekdayday::LastWeekdayDay;
use crate::time::calendarday::nthweekdayday::NthWeekdayDay;
use crate::time::weekday::{weekday_from_name, weekday_name};

/// Reads a weekday spelled with the same lowercase names as the trigger lists.
fn canonical_weekday<'de, D>(deserializer: D) -> Result<Weekday, D::Error>
where
    D: Deserializer<'de>
{
    let name = String::deserialize(deserializer)?;
    weekday_from_name(&name).ok_or_else(|| D::Error::custom(format!("unknown weekday '{}'", name)))
}

#[derive(Deserialize)]
struct FixedDateDayJsonProp {
    month: u32,
    day: u32,
    #[serde(default)]
    year: Option<i32>
}

fn fixed_date_day_from_json(json: serde_json::Value) -> Result<Arc<dyn CalendarDay>, ManagerError> {
    let json_prop: FixedDateDayJsonProp = parse_json_value(json)?;
    let day = match json_prop.year {
        Some(year) => FixedDateDay::in_year(year, json_prop.month, json_prop.day)?,
        None => FixedDateDay::new(json_prop.month, json_prop.day)?
    };
    Ok(Arc::new(day))
}

#[derive(Deserialize)]
struct EasterRelatedDayJsonProp {
    easter_type: EasterType,
    #[serde(default)]
    shift_days: i32
}

fn easter_related_day_from_json(json: serde_json::Value) -> Result<Arc<dyn CalendarDay>, ManagerError> {
    let json_prop: EasterRelatedDayJsonProp = parse_json_value(json)?;
    Ok(Arc::new(EasterRelatedDay::new(json_prop.easter_type, json_prop.shift_days)))
}

#[derive(Deserialize)]
struct NthWeekdayDayJsonProp {
    month: u32,
    n: u8,
    #[serde(deserialize_with = "canonical_weekday")]
    weekday: Weekday
}

fn nth_weekday_day_from_json(json: serde_json::Value) -> Result<Arc<dyn CalendarDay>, ManagerError> {
    let json_prop: NthWeekdayDayJsonProp = parse_json_value(json)?;
    Ok(Arc::new(NthWeekdayDay::new(json_prop.month, json_prop.n, json_prop.weekday)?))
}

#[derive(Deserialize)]
struct LastWeekdayDayJsonProp {
    month: u32,
    #[serde(deserialize_with = "canonical_weekday")]
    weekday: Weekday
}

fn last_weekday_day_from_json(json: serde_json::Value) -> Result<Arc<dyn CalendarDay>, ManagerError> {
    let json_prop: LastWeekdayDayJsonProp = parse_json_value(json)?;
    Ok(Arc::new(LastWeekdayDay::new(json_prop.month, json_prop.weekday)?))
}

#[derive(Deserialize)]
enum DayType {
    FixedDate,
    EasterRelated,
    NthWeekday,
    LastWeekday
}

#[derive(Deserialize)]
struct DayTypedObject {
    day_type: DayType
}

fn calendar_day_from_json(json: serde_json::Value) -> Result<Arc<dyn CalendarDay>, ManagerError> {
    let typed_object: DayTypedObject = parse_json_value(json.clone())?;
    match typed_object.day_type {
        DayType::FixedDate     => fixed_date_day_from_json(json),
        DayType::EasterRelated => easter_related_day_from_json(json),
        DayType::NthWeekday    => nth_weekday_day_from_json(json),
        DayType::LastWeekday   => last_weekday_day_from_json(json)
    }
}

#[derive(Deserialize)]
struct HolidayRuleJsonProp {
    name: String,
    holiday: bool,
    calendar_day: serde_json::Value,
    #[serde(default)]
    forward_to: String,
    #[serde(default)]
    forward_when: Vec<String>,
    #[serde(default)]
    rewind_to: String,
    #[serde(default)]
    rewind_when: Vec<String>
}

fn log_triggers(rule_name: &str, direction: &str, triggers: &WeekdayTriggers, configured: &[String]) {
    if triggers.is_empty() {
        return;
    }
    let weekdays: Vec<&str> = triggers.weekdays().map(weekday_name).collect();
    debug!(rule = rule_name, direction, weekdays = ?weekdays, "shift triggers");
    if triggers.has_unrecognized() {
        warn!(rule = rule_name, direction, configured = ?configured, "unrecognized weekday name never triggers a shift");
    }
}

pub fn holiday_rule_from_json(json: serde_json::Value) -> Result<HolidayRule, ManagerError> {
    let json_prop: HolidayRuleJsonProp = parse_json_value(json)?;
    let anchor = calendar_day_from_json(json_prop.calendar_day)?;

    let rule = HolidayRule::with_shifts(
        json_prop.name,
        json_prop.holiday,
        anchor,
        json_prop.forward_to,
        &json_prop.forward_when,
        json_prop.rewind_to,
        &json_prop.rewind_when
    );

    log_triggers(rule.name(), "forward", rule.forward_triggers(), &json_prop.forward_when);
    log_triggers(rule.name(), "rewind", rule.rewind_triggers(), &json_prop.rewind_when);
    Ok(rule)
}

#[derive(Deserialize)]
struct HolidayCheckerJsonProp {
    name: String,
    rules: Vec<serde_json::Value>
}

fn holiday_checker_from_json(json: serde_json::Value) -> Result<(String, Arc<HolidayChecker>), ManagerError> {
    let json_prop: HolidayCheckerJsonProp = parse_json_value(json)?;
    let rules = json_prop.rules
        .into_iter()
        .map(holiday_rule_from_json)
        .collect::<Result<Vec<HolidayRule>, ManagerError>>()?;
    debug!(checker = %json_prop.name, rules = rules.len(), "loaded holiday checker");
    Ok((json_prop.name, Arc::new(HolidayChecker::new(rules))))
}

pub struct HolidayCheckerManager;

impl HolidayCheckerManager {
    pub fn new() -> Manager<Arc<HolidayChecker>> {
        Manager::new(holiday_checker_from_json)
    }
}
