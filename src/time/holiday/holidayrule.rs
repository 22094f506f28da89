use std::fmt;
use std::sync::Arc;

use chrono::{Datelike, NaiveDate};

use super::weekdaytriggers::WeekdayTriggers;
use crate::time::calendarday::calendarday::CalendarDay;
use crate::time::calendarday::calendardayerror::CalendarDayError;

/// A named observance anchored to a [`CalendarDay`], optionally moved to
/// another day when the anchor falls on given weekdays.
///
/// ```text
/// anchor weekday in forward triggers  ->  anchor.is_follow_up_day(d, forward_target)
/// anchor weekday in rewind triggers   ->  anchor.is_previous_day(d, rewind_target)
/// otherwise                           ->  anchor.is_same_day(d)
/// ```
///
/// The forward check runs first, so a weekday listed in both sets moves the
/// observance forward.
#[derive(Clone)]
pub struct HolidayRule {
    name: String,
    is_holiday: bool,
    anchor: Arc<dyn CalendarDay>,
    forward_target: String,
    forward_triggers: WeekdayTriggers,
    rewind_target: String,
    rewind_triggers: WeekdayTriggers
}

impl HolidayRule {
    /// A rule without any redirection.
    pub fn new(name: impl Into<String>, is_holiday: bool, anchor: Arc<dyn CalendarDay>) -> HolidayRule {
        HolidayRule {
            name: name.into(),
            is_holiday,
            anchor,
            forward_target: String::new(),
            forward_triggers: WeekdayTriggers::default(),
            rewind_target: String::new(),
            rewind_triggers: WeekdayTriggers::default()
        }
    }

    pub fn with_shifts<F, R>(
        name: impl Into<String>,
        is_holiday: bool,
        anchor: Arc<dyn CalendarDay>,
        forward_target: impl Into<String>,
        forward_when: F,
        rewind_target: impl Into<String>,
        rewind_when: R
    ) -> HolidayRule
    where
        F: IntoIterator,
        F::Item: AsRef<str>,
        R: IntoIterator,
        R::Item: AsRef<str>
    {
        HolidayRule::new(name, is_holiday, anchor)
            .forward(forward_target, forward_when)
            .rewind(rewind_target, rewind_when)
    }

    /// Moves the observance to `target` when the anchor falls on one of `when`.
    pub fn forward<I>(mut self, target: impl Into<String>, when: I) -> HolidayRule
    where
        I: IntoIterator,
        I::Item: AsRef<str>
    {
        self.forward_target = target.into();
        self.forward_triggers = WeekdayTriggers::from_names(when);
        self
    }

    /// Moves the observance back to `target` when the anchor falls on one of `when`.
    pub fn rewind<I>(mut self, target: impl Into<String>, when: I) -> HolidayRule
    where
        I: IntoIterator,
        I::Item: AsRef<str>
    {
        self.rewind_target = target.into();
        self.rewind_triggers = WeekdayTriggers::from_names(when);
        self
    }

    pub fn matches(&self, d: NaiveDate) -> Result<bool, CalendarDayError> {
        let weekday = self.anchor.weekday_in_year(d.year())?;

        if self.forward_triggers.contains(weekday) {
            return self.anchor.is_follow_up_day(d, &self.forward_target);
        }

        if self.rewind_triggers.contains(weekday) {
            return self.anchor.is_previous_day(d, &self.rewind_target);
        }

        self.anchor.is_same_day(d)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_holiday(&self) -> bool {
        self.is_holiday
    }

    pub fn anchor(&self) -> &Arc<dyn CalendarDay> {
        &self.anchor
    }

    pub fn forward_target(&self) -> &str {
        &self.forward_target
    }

    pub fn forward_triggers(&self) -> &WeekdayTriggers {
        &self.forward_triggers
    }

    pub fn rewind_target(&self) -> &str {
        &self.rewind_target
    }

    pub fn rewind_triggers(&self) -> &WeekdayTriggers {
        &self.rewind_triggers
    }
}

impl fmt::Debug for HolidayRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HolidayRule")
            .field("name", &self.name)
            .field("is_holiday", &self.is_holiday)
            .field("forward_target", &self.forward_target)
            .field("forward_triggers", &self.forward_triggers)
            .field("rewind_target", &self.rewind_target)
            .field("rewind_triggers", &self.rewind_triggers)
            .finish_non_exhaustive()
    }
}
