use chrono::Weekday;

/// Canonical, case-sensitive weekday names used in rule configuration.
const WEEKDAY_NAMES: [(&str, Weekday); 7] = [
    ("sunday", Weekday::Sun),
    ("monday", Weekday::Mon),
    ("tuesday", Weekday::Tue),
    ("wednesday", Weekday::Wed),
    ("thursday", Weekday::Thu),
    ("friday", Weekday::Fri),
    ("saturday", Weekday::Sat)
];

/// Looks a weekday up by its canonical name.
///
/// Only the lowercase English names are recognized; `"Monday"` or `"mon"`
/// return `None`.
pub fn weekday_from_name(name: &str) -> Option<Weekday> {
    WEEKDAY_NAMES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|&(_, weekday)| weekday)
}

pub fn weekday_name(weekday: Weekday) -> &'static str {
    WEEKDAY_NAMES[weekday.num_days_from_sunday() as usize].0
}
