//! Julian Day conversion on the proleptic Gregorian calendar.
//!
//! Standard Meeus formulae (Astronomical Algorithms ch. 7), applied with
//! the Gregorian leap rule for all epochs. The fractional part of
//! `day_frac` carries the time of day.

/// Julian Day of the J2000.0 epoch (2000-01-01 12:00 UT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Convert a proleptic-Gregorian calendar date to a Julian Day.
///
/// `day_frac` is the day of month plus the fractional day
/// (e.g. 1.5 = the 1st at 12:00).
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let a = (y as f64 / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y as f64 + 4716.0)).floor() + (30.6001 * (m as f64 + 1.0)).floor() + day_frac + b
        - 1524.5
}

/// Convert a Julian Day back to a proleptic-Gregorian calendar date.
///
/// Returns `(year, month, day_frac)` where the fractional part of
/// `day_frac` carries the time of day.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let z = (jd + 0.5).floor();
    let f = jd + 0.5 - z;
    let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
    let a = z + 1.0 + alpha - (alpha / 4.0).floor();
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day_frac = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };
    (year as i32, month as u32, day_frac)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_epoch() {
        // 2000-01-01 12:00 UT is the J2000.0 epoch
        let jd = calendar_to_jd(2000, 1, 1.5);
        assert!((jd - J2000_JD).abs() < 1e-9, "jd = {jd}");
    }

    #[test]
    fn meeus_sputnik_epoch() {
        // Meeus example 7.a: 1957 Oct 4.81 = JD 2436116.31
        let jd = calendar_to_jd(1957, 10, 4.81);
        assert!((jd - 2_436_116.31).abs() < 1e-6, "jd = {jd}");
    }

    #[test]
    fn midnight_half_day_offset() {
        // Civil midnight falls on a half-integer JD
        let jd = calendar_to_jd(2024, 3, 15.0);
        assert!((jd.fract() - 0.5).abs() < 1e-9, "jd = {jd}");
    }

    #[test]
    fn round_trip_dates() {
        let cases = [
            (2024, 2, 29.25),
            (1900, 1, 1.0),
            (2100, 12, 31.75),
            (1600, 6, 15.5),
        ];
        for (y, m, d) in cases {
            let jd = calendar_to_jd(y, m, d);
            let (ry, rm, rd) = jd_to_calendar(jd);
            assert_eq!((ry, rm), (y, m), "round trip of {y}-{m}");
            assert!((rd - d).abs() < 1e-8, "day_frac {rd} vs {d}");
        }
    }

    #[test]
    fn consecutive_days_differ_by_one() {
        let a = calendar_to_jd(2024, 12, 31.0);
        let b = calendar_to_jd(2025, 1, 1.0);
        assert!((b - a - 1.0).abs() < 1e-9);
    }
}
