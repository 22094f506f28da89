use std::collections::HashSet;

use chrono::Weekday;

use crate::time::weekday::weekday_from_name;

/// Weekdays on which a rule redirects to another day.
///
/// Names are resolved once, at construction. A name outside the canonical
/// table is kept as `None`, which no queried weekday can ever equal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WeekdayTriggers {
    triggers: HashSet<Option<Weekday>>
}

impl WeekdayTriggers {
    pub fn from_names<I, S>(names: I) -> WeekdayTriggers
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>
    {
        WeekdayTriggers {
            triggers: names
                .into_iter()
                .map(|name| weekday_from_name(name.as_ref()))
                .collect()
        }
    }

    #[inline]
    pub fn contains(&self, weekday: Weekday) -> bool {
        self.triggers.contains(&Some(weekday))
    }

    pub fn is_empty(&self) -> bool {
        self.triggers.is_empty()
    }

    /// Whether at least one configured name was not recognized.
    pub fn has_unrecognized(&self) -> bool {
        self.triggers.contains(&None)
    }

    pub fn weekdays(&self) -> impl Iterator<Item = Weekday> + '_ {
        self.triggers.iter().flatten().copied()
    }
}
