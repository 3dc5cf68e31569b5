//! Zodiac mode and Lahiri ayanamsha.
//!
//! The ayanamsha is the angular offset between the tropical zodiac
//! (anchored to the precessing equinox) and a sidereal zodiac (anchored
//! to the fixed stars). Sidereal longitude = tropical − ayanamsha.
//!
//! Only the Lahiri (Chitrapaksha) system is carried here: its J2000.0
//! reference value plus the IAU 2006 general precession in ecliptic
//! longitude. The elongation-based elements (tithi, karana) are
//! mode-independent because the offset cancels in the difference.

use panchanga_time::J2000_JD;

/// Lahiri ayanamsha at J2000.0 in degrees (Indian Calendar Reform
/// Committee anchor: Spica at 0 deg Libra sidereal).
const LAHIRI_REFERENCE_J2000_DEG: f64 = 23.853;

/// Zodiac convention for longitude-anchored elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ZodiacMode {
    /// Tropical longitudes used as-is (the ephemeris default).
    #[default]
    Tropical,
    /// Lahiri sidereal: tropical minus the Lahiri ayanamsha.
    LahiriSidereal,
}

impl ZodiacMode {
    /// Ayanamsha in degrees at the given instant; zero in tropical mode.
    pub fn ayanamsha_deg(self, jd_ut: f64) -> f64 {
        match self {
            Self::Tropical => 0.0,
            Self::LahiriSidereal => {
                LAHIRI_REFERENCE_J2000_DEG
                    + general_precession_longitude_arcsec(jd_ut_to_centuries(jd_ut)) / 3600.0
            }
        }
    }
}

/// Julian centuries since J2000.0 for a JD UT.
pub fn jd_ut_to_centuries(jd_ut: f64) -> f64 {
    (jd_ut - J2000_JD) / 36525.0
}

/// IAU 2006 general precession in ecliptic longitude, arcseconds.
///
/// `t` is Julian centuries since J2000.0.
fn general_precession_longitude_arcsec(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;
    5028.796195 * t + 1.1054348 * t2 + 0.00007964 * t3 - 0.000023857 * t4 - 0.0000000383 * t5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tropical_mode_is_zero() {
        assert_eq!(ZodiacMode::Tropical.ayanamsha_deg(2_460_000.5), 0.0);
    }

    #[test]
    fn lahiri_at_j2000() {
        let aya = ZodiacMode::LahiriSidereal.ayanamsha_deg(J2000_JD);
        assert!((aya - LAHIRI_REFERENCE_J2000_DEG).abs() < 1e-12, "aya = {aya}");
    }

    #[test]
    fn lahiri_drifts_forward() {
        // ~1.397 deg per century of precession
        let at_j2000 = ZodiacMode::LahiriSidereal.ayanamsha_deg(J2000_JD);
        let a_century_on = ZodiacMode::LahiriSidereal.ayanamsha_deg(J2000_JD + 36525.0);
        let drift = a_century_on - at_j2000;
        assert!((drift - 1.397).abs() < 0.01, "drift = {drift}");
    }

    #[test]
    fn centuries_conversion() {
        assert_eq!(jd_ut_to_centuries(J2000_JD), 0.0);
        assert!((jd_ut_to_centuries(J2000_JD + 36525.0) - 1.0).abs() < 1e-15);
    }
}
