//! Behaviour of `HolidayRule` against the concrete calendar days.

use std::sync::Arc;

use chrono::{Datelike, NaiveDate, Weekday};
use proptest::prelude::*;

use holidaycheck::time::calendarday::calendarday::CalendarDay;
use holidaycheck::time::calendarday::fixeddateday::FixedDateDay;
use holidaycheck::time::holiday::holidayrule::HolidayRule;
use holidaycheck::time::weekday::{weekday_from_name, weekday_name};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn fixed(month: u32, day: u32) -> Arc<FixedDateDay> {
    Arc::new(FixedDateDay::new(month, day).unwrap())
}

#[test]
fn sunday_anchor_moves_to_monday() {
    // 2023-01-01 is a Sunday
    let anchor = fixed(1, 1);
    assert_eq!(anchor.weekday_in_year(2023), Ok(Weekday::Sun));

    let rule = HolidayRule::new("New Year's Day", true, anchor).forward("monday", ["sunday"]);
    assert_eq!(rule.matches(ymd(2023, 1, 2)), Ok(true));
    assert_eq!(rule.matches(ymd(2023, 1, 1)), Ok(false));
    // 2024-01-01 is a Monday, no shift
    assert_eq!(rule.matches(ymd(2024, 1, 1)), Ok(true));
    assert_eq!(rule.matches(ymd(2024, 1, 2)), Ok(false));
}

#[test]
fn saturday_anchor_moves_back_to_friday() {
    // 2021-12-25 is a Saturday
    let rule = HolidayRule::new("Christmas Day", true, fixed(12, 25)).rewind("friday", ["saturday"]);
    assert_eq!(rule.matches(ymd(2021, 12, 24)), Ok(true));
    assert_eq!(rule.matches(ymd(2021, 12, 25)), Ok(false));
}

#[test]
fn rewind_stays_within_the_queried_year() {
    // 2022-01-01 is a Saturday; the Friday before is in 2021, where the
    // anchor falls on a Friday and is not shifted.
    let rule = HolidayRule::new("New Year's Day", true, fixed(1, 1)).rewind("friday", ["saturday"]);
    assert_eq!(rule.matches(ymd(2021, 12, 31)), Ok(false));
    assert_eq!(rule.matches(ymd(2021, 1, 1)), Ok(true));
    assert_eq!(rule.matches(ymd(2022, 1, 1)), Ok(false));
}

#[test]
fn funday_rewind_is_ignored() {
    // 2022-12-25 is a Sunday
    let plain = HolidayRule::new("Christmas Day", true, fixed(12, 25));
    let funday = HolidayRule::new("Christmas Day", true, fixed(12, 25)).rewind("friday", ["funday"]);
    for d in ymd(2022, 12, 20).iter_days().take(10) {
        assert_eq!(funday.matches(d), plain.matches(d));
    }
}

#[test]
fn rules_are_shareable_between_threads() {
    let rule = Arc::new(HolidayRule::new("Christmas Day", true, fixed(12, 25)).forward("monday", ["sunday"]));
    let handles: Vec<_> = (2020..2030)
        .map(|year| {
            let rule = Arc::clone(&rule);
            std::thread::spawn(move || rule.matches(ymd(year, 12, 25)))
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap().is_ok());
    }
}

fn any_date() -> impl Strategy<Value = NaiveDate> {
    (1900i32..2200, 1u32..=365).prop_map(|(year, ordinal)| NaiveDate::from_yo_opt(year, ordinal).unwrap())
}

fn any_anchor() -> impl Strategy<Value = Arc<FixedDateDay>> {
    (1u32..=12, 1u32..=28).prop_map(|(month, day)| fixed(month, day))
}

fn any_weekday() -> impl Strategy<Value = Weekday> {
    (0u8..7).prop_map(|n| Weekday::try_from(n).unwrap())
}

proptest! {
    #[test]
    fn unknown_names_never_redirect(
        name in "[A-Za-z]{0,10}".prop_filter("canonical", |n| weekday_from_name(n).is_none()),
        anchor in any_anchor(),
        d in any_date()
    ) {
        let rule = HolidayRule::with_shifts(
            "Rule", true, anchor.clone(),
            "monday", [name.as_str()],
            "friday", [name.as_str()]
        );
        prop_assert_eq!(rule.matches(d), anchor.is_same_day(d));
    }

    #[test]
    fn untriggered_weekdays_match_the_same_day(
        anchor in any_anchor(),
        trigger in any_weekday(),
        d in any_date()
    ) {
        let weekday = anchor.weekday_in_year(d.year()).unwrap();
        prop_assume!(weekday != trigger);

        let rule = HolidayRule::new("Rule", true, anchor.clone())
            .forward("monday", [weekday_name(trigger)])
            .rewind("friday", [weekday_name(trigger)]);
        prop_assert_eq!(rule.matches(d), anchor.is_same_day(d));
    }

    #[test]
    fn without_triggers_only_the_same_day_matches(anchor in any_anchor(), d in any_date()) {
        let rule = HolidayRule::new("Rule", true, anchor.clone());
        prop_assert_eq!(rule.matches(d), anchor.is_same_day(d));
    }

    #[test]
    fn forward_takes_precedence(anchor in any_anchor(), d in any_date()) {
        let weekday = anchor.weekday_in_year(d.year()).unwrap();
        let name = weekday_name(weekday);

        let rule = HolidayRule::with_shifts(
            "Rule", true, anchor.clone(),
            "monday", [name],
            "friday", [name]
        );
        prop_assert_eq!(rule.matches(d), anchor.is_follow_up_day(d, "monday"));
    }

    #[test]
    fn matching_is_idempotent(anchor in any_anchor(), d in any_date()) {
        let rule = HolidayRule::new("Rule", true, anchor)
            .forward("monday", ["saturday", "sunday"]);
        prop_assert_eq!(rule.matches(d), rule.matches(d));
    }
}
