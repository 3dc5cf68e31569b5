//! Solar and lunisolar month (masa) determination from a single instant.
//!
//! The solar month is simply the rashi the Sun occupies. The lunisolar
//! month is named after the rashi *following* the Sun's; when Sun and
//! Moon share a rashi the month is flagged adhika (intercalary), the
//! single-instant analogue of the amanta rule where the Sun fails to
//! change rashi between two new moons.

use crate::rashi::{Rashi, rashi_from_longitude};

/// Lunisolar month result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MasaInfo {
    /// Rashi the month is named after.
    pub rashi: Rashi,
    /// Whether the month is adhika (intercalary).
    pub adhika: bool,
}

/// Solar month: the rashi the Sun occupies.
pub fn solar_masa_from_longitude(sun_lon_deg: f64) -> Rashi {
    rashi_from_longitude(sun_lon_deg).rashi
}

/// Lunisolar month from Sun and Moon longitudes at one instant.
///
/// The month is always named after the rashi following the Sun's;
/// `adhika` is set when Sun and Moon occupy the same rashi.
pub fn lunisolar_masa_from_longitudes(sun_lon_deg: f64, moon_lon_deg: f64) -> MasaInfo {
    let sun_rashi = rashi_from_longitude(sun_lon_deg).rashi;
    let moon_rashi = rashi_from_longitude(moon_lon_deg).rashi;
    MasaInfo {
        rashi: sun_rashi.next(),
        adhika: sun_rashi == moon_rashi,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solar_month_is_sun_rashi() {
        assert_eq!(solar_masa_from_longitude(0.0), Rashi::Mesha);
        assert_eq!(solar_masa_from_longitude(100.0), Rashi::Karka);
        assert_eq!(solar_masa_from_longitude(359.0), Rashi::Meena);
    }

    #[test]
    fn lunisolar_month_follows_sun() {
        // Sun in Karka (100), Moon in Dhanu (250): month = Simha, not adhika
        let info = lunisolar_masa_from_longitudes(100.0, 250.0);
        assert_eq!(info.rashi, Rashi::Simha);
        assert!(!info.adhika);
    }

    #[test]
    fn shared_rashi_is_adhika() {
        // Sun and Moon both in Karka
        let info = lunisolar_masa_from_longitudes(100.0, 112.0);
        assert_eq!(info.rashi, Rashi::Simha);
        assert!(info.adhika);
    }

    #[test]
    fn lunisolar_wraps_meena_to_mesha() {
        let info = lunisolar_masa_from_longitudes(350.0, 10.0);
        assert_eq!(info.rashi, Rashi::Mesha);
        assert!(!info.adhika);
    }
}
