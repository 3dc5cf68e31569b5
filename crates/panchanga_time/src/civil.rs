//! Local civil date/time and its conversion to Julian Day UT.

use crate::error::TimeError;
use crate::julian::calendar_to_jd;

/// A local wall-clock date and time, minute precision.
///
/// This is raw request input: it carries no timezone of its own. Pair it
/// with a fractional offset (e.g. 5.5 for IST) when converting to UT.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CivilDateTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

impl CivilDateTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
        }
    }

    /// Check that the date/time is calendrically possible.
    pub fn validate(&self) -> Result<(), TimeError> {
        if self.month < 1 || self.month > 12 {
            return Err(TimeError::InvalidDate("month must be 1-12"));
        }
        if self.day < 1 || self.day > days_in_month(self.year, self.month) {
            return Err(TimeError::InvalidDate("day out of range for month"));
        }
        if self.hour > 23 {
            return Err(TimeError::InvalidDate("hour must be 0-23"));
        }
        if self.minute > 59 {
            return Err(TimeError::InvalidDate("minute must be 0-59"));
        }
        Ok(())
    }

    /// Convert to a Julian Day in UT.
    ///
    /// `tz_offset_hours` is the local clock's offset from UT in hours,
    /// east positive, fractional offsets allowed (IST = 5.5). Subtracting
    /// `offset / 24` from the local-clock Julian Day lands on the UT
    /// instant without any calendar rollover handling.
    pub fn to_jd_ut(&self, tz_offset_hours: f64) -> Result<f64, TimeError> {
        self.validate()?;
        if !tz_offset_hours.is_finite() {
            return Err(TimeError::InvalidTimezone(
                "timezone offset must be finite",
            ));
        }
        if tz_offset_hours.abs() > 14.0 {
            return Err(TimeError::InvalidTimezone(
                "timezone offset must be within ±14 h",
            ));
        }
        let day_frac =
            self.day as f64 + self.hour as f64 / 24.0 + self.minute as f64 / 1440.0;
        Ok(calendar_to_jd(self.year, self.month, day_frac) - tz_offset_hours / 24.0)
    }
}

impl std::fmt::Display for CivilDateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute
        )
    }
}

/// Gregorian month length, leap-year aware.
fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Gregorian leap rule: divisible by 4, except centuries not divisible by 400.
fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
