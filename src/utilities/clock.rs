// src/utilities/clock.rs
//
// Wall-clock date and time, read from the local system clock.

use chrono::{Datelike, Local, Timelike};

/// Current second of the minute [0-59].
pub fn second() -> u32 {
    Local::now().second()
}

/// Current minute of the hour [0-59].
pub fn minute() -> u32 {
    Local::now().minute()
}

/// Current hour of the day [0-23].
pub fn hour() -> u32 {
    Local::now().hour()
}

/// Current day of the month [1-31].
pub fn day() -> u32 {
    Local::now().day()
}

/// Current month of the year [1-12].
pub fn month() -> u32 {
    Local::now().month()
}

/// Current year.
pub fn year() -> i32 {
    Local::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_values_stay_in_range() {
        assert!(second() < 60);
        assert!(minute() < 60);
        assert!(hour() < 24);
        assert!((1..=31).contains(&day()));
        assert!((1..=12).contains(&month()));
        assert!(year() >= 2024);
    }
}
