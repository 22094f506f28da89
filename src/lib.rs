pub mod manager {
    pub mod managererror;
    pub mod manager;
}

pub mod time {
    pub mod weekday;

    pub mod calendarday {
        pub mod calendardayerror;
        pub mod calendarday;
        pub mod fixeddateday;
        pub mod easterrelatedday;
        pub mod nthweekdayday;
        pub mod lastweekdayday;
    }

    pub mod holiday {
        pub mod weekdaytriggers;
        pub mod holidayrule;
        pub mod holiday;
        pub mod holidaychecker;
        pub mod holidaycheckermanager;
    }
}
