//! Request and result types for panchanga derivation.

use panchanga_base::{
    Karana, MasaInfo, Nakshatra, NakshatraLord, Paksha, Rashi, Tithi, Yoga, ZodiacMode,
    normalize_360,
};

use crate::ephemeris::HouseSystem;
use crate::error::PanchangError;

/// Geographic location of the request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
}

impl GeoLocation {
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
        }
    }

    /// Range-check the coordinates.
    pub fn validate(&self) -> Result<(), PanchangError> {
        if !self.latitude_deg.is_finite() || self.latitude_deg.abs() > 90.0 {
            return Err(PanchangError::InvalidLocation(
                "latitude must be within [-90, 90]",
            ));
        }
        if !self.longitude_deg.is_finite() || self.longitude_deg.abs() > 180.0 {
            return Err(PanchangError::InvalidLocation(
                "longitude must be within [-180, 180]",
            ));
        }
        Ok(())
    }
}

/// Month naming convention reported in the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MonthConvention {
    /// Month = the rashi the Sun occupies.
    #[default]
    Solar,
    /// Month = the rashi following the Sun's; adhika when Sun and Moon
    /// share a rashi.
    Lunisolar,
}

/// Tithi behavior across consecutive civil days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TithiTrend {
    /// The tithi advances normally.
    Normal,
    /// The same tithi spans two sunrises (elongated).
    Vriddhi,
    /// A tithi is skipped (shortened).
    Kshay,
}

impl TithiTrend {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Vriddhi => "Vriddhi",
            Self::Kshay => "Kshay",
        }
    }
}

/// Per-request derivation options.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PanchangOptions {
    /// House system handed to the ascendant query.
    pub house_system: HouseSystem,
    /// Zodiac the longitude-anchored elements are expressed in.
    pub zodiac: ZodiacMode,
    /// Which month variant the result reports.
    pub month_convention: MonthConvention,
    /// Whether to classify the tithi trend (doubles the ephemeris cost).
    pub include_tithi_trend: bool,
}

/// Sun, Moon and ascendant longitudes for one instant, each normalized
/// to [0, 360). Computed once per request; never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CelestialLongitudes {
    pub sun: f64,
    pub moon: f64,
    pub ascendant: f64,
}

impl CelestialLongitudes {
    /// Build from raw degree values, normalizing each into [0, 360).
    pub fn new(sun: f64, moon: f64, ascendant: f64) -> Self {
        Self {
            sun: normalize_360(sun),
            moon: normalize_360(moon),
            ascendant: normalize_360(ascendant),
        }
    }
}

/// Complete panchanga derivation for one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanchangResult {
    /// Tithi name (15-entry table shared by both pakshas).
    pub tithi: Tithi,
    /// 0-based tithi index within the synodic month (0..29).
    pub tithi_index: u8,
    /// 1-based tithi number within the paksha (1..15).
    pub tithi_number: u8,
    /// Waxing or waning fortnight.
    pub paksha: Paksha,
    /// Trend classification; present only when requested.
    pub tithi_trend: Option<TithiTrend>,
    /// The Moon's nakshatra.
    pub nakshatra: Nakshatra,
    /// 0-based nakshatra index (0..26).
    pub nakshatra_index: u8,
    /// Presiding lord of the nakshatra.
    pub nakshatra_lord: NakshatraLord,
    /// Pada (quarter) within the nakshatra, 1-4.
    pub nakshatra_pada: u8,
    /// The yoga.
    pub yoga: Yoga,
    /// 0-based yoga index (0..26).
    pub yoga_index: u8,
    /// The karana.
    pub karana: Karana,
    /// Karana slot within the synodic month (0..59).
    pub karana_number: u8,
    /// Moon sign.
    pub chandra_rashi: Rashi,
    /// Ascendant sign.
    pub lagna_rashi: Rashi,
    /// The month, per the requested convention.
    pub masa: MasaInfo,
    /// Convention the `masa` field was derived under.
    pub month_convention: MonthConvention,
    /// Vikram Samvat era year (civil year + 57).
    pub vikram_samvat: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_bounds() {
        assert!(GeoLocation::new(23.03, 72.58).validate().is_ok());
        assert!(GeoLocation::new(90.0, -180.0).validate().is_ok());
        assert!(GeoLocation::new(90.1, 0.0).validate().is_err());
        assert!(GeoLocation::new(0.0, 180.1).validate().is_err());
        assert!(GeoLocation::new(f64::NAN, 0.0).validate().is_err());
    }

    #[test]
    fn longitudes_normalized_on_construction() {
        let lons = CelestialLongitudes::new(-10.0, 370.0, 360.0);
        assert!((lons.sun - 350.0).abs() < 1e-12);
        assert!((lons.moon - 10.0).abs() < 1e-12);
        assert!(lons.ascendant.abs() < 1e-12);
    }

    #[test]
    fn default_options() {
        let opts = PanchangOptions::default();
        assert_eq!(opts.house_system, HouseSystem::Placidus);
        assert_eq!(opts.zodiac, ZodiacMode::Tropical);
        assert_eq!(opts.month_convention, MonthConvention::Solar);
        assert!(!opts.include_tithi_trend);
    }
}
