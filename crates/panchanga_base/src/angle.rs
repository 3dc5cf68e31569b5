//! Circular angle arithmetic over degrees.
//!
//! Every discretization in this workspace runs through these helpers:
//! angles are normalized into [0, 360) first, and division indices carry
//! a trailing `mod n` so a float that rounds to exactly 360.0 can never
//! index one past the end of a table.

/// Normalize an angle to [0, 360) degrees.
///
/// The second `% 360.0` catches tiny negatives where `r + 360.0` rounds
/// to exactly 360.0.
pub fn normalize_360(deg: f64) -> f64 {
    ((deg % 360.0) + 360.0) % 360.0
}

/// Directed angular difference `a - b`, normalized to [0, 360).
pub fn angular_difference(a: f64, b: f64) -> f64 {
    normalize_360(a - b)
}

/// Which of `n` equal divisions of the circle the angle falls in.
///
/// Returns an index in [0, n). The `% n` guards the case where the
/// normalized angle lands on 360.0 exactly through float rounding.
pub fn division_index(angle_deg: f64, n: u8) -> u8 {
    let segment = 360.0 / n as f64;
    ((normalize_360(angle_deg) / segment).floor() as u32 % n as u32) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_identity_in_range() {
        assert!((normalize_360(0.0)).abs() < 1e-15);
        assert!((normalize_360(45.0) - 45.0).abs() < 1e-15);
        assert!((normalize_360(359.999) - 359.999).abs() < 1e-12);
    }

    #[test]
    fn normalize_wraps_360() {
        assert!((normalize_360(360.0)).abs() < 1e-15);
        assert!((normalize_360(730.0) - 10.0).abs() < 1e-10);
    }

    #[test]
    fn normalize_negative() {
        assert!((normalize_360(-10.0) - 350.0).abs() < 1e-12);
        assert!((normalize_360(-370.0) - 350.0).abs() < 1e-10);
    }

    #[test]
    fn normalize_tiny_negative_stays_below_360() {
        // -1e-14 + 360.0 rounds to exactly 360.0 in f64; the result must
        // still land in [0, 360)
        let r = normalize_360(-1e-14);
        assert!((0.0..360.0).contains(&r), "r = {r}");
        assert!(normalize_360(-f64::EPSILON) < 360.0);
    }

    #[test]
    fn normalize_idempotent() {
        for a in [-721.3, -1.0, -1e-14, 0.0, 12.0, 359.9, 360.0, 1000.5] {
            let once = normalize_360(a);
            let twice = normalize_360(once);
            assert!((once - twice).abs() < 1e-15, "a = {a}");
            assert!((0.0..360.0).contains(&once), "a = {a}");
        }
    }

    #[test]
    fn difference_wraps() {
        // 10 - 350 wraps forward to 20
        assert!((angular_difference(10.0, 350.0) - 20.0).abs() < 1e-12);
        assert!((angular_difference(350.0, 10.0) - 340.0).abs() < 1e-12);
        assert!(angular_difference(100.0, 100.0).abs() < 1e-15);
    }

    #[test]
    fn division_index_basic() {
        assert_eq!(division_index(0.0, 12), 0);
        assert_eq!(division_index(29.999, 12), 0);
        assert_eq!(division_index(30.0, 12), 1);
        assert_eq!(division_index(359.999, 12), 11);
    }

    #[test]
    fn division_index_guards_full_circle() {
        // A value that normalizes to exactly 360.0 must map to index 0,
        // not one past the table end.
        assert_eq!(division_index(360.0, 27), 0);
        assert_eq!(division_index(720.0, 30), 0);
    }

    #[test]
    fn division_index_27_scheme() {
        let span = 360.0 / 27.0;
        for i in 0..27u8 {
            assert_eq!(division_index(i as f64 * span + 0.001, 27), i);
        }
    }
}
