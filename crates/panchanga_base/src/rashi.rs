//! Rashi (zodiac sign) classification.
//!
//! The ecliptic is divided into 12 equal signs of 30 degrees, starting
//! from Mesha (Aries) at 0. The same table serves the Moon sign
//! (chandra rashi), the ascendant sign (lagna rashi), and the solar
//! month.

use crate::angle::{division_index, normalize_360};

/// Span of one rashi: 360/12 = 30 degrees.
pub const RASHI_SPAN_DEG: f64 = 30.0;

/// The 12 rashis starting from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in order (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

impl Rashi {
    /// Sanskrit name of the rashi.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Western (English) name of the rashi.
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// 0-based index (Mesha=0 .. Meena=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Lookup by 0-based index.
    pub fn from_index(index: u8) -> Option<Self> {
        ALL_RASHIS.get(index as usize).copied()
    }

    /// The next rashi in zodiacal order, wrapping Meena back to Mesha.
    pub const fn next(self) -> Rashi {
        ALL_RASHIS[(self as usize + 1) % 12]
    }
}

/// Result of rashi classification from a longitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RashiInfo {
    /// The rashi.
    pub rashi: Rashi,
    /// 0-based index (0 = Mesha).
    pub rashi_index: u8,
    /// Degrees elapsed within this rashi [0, 30).
    pub degrees_in_rashi: f64,
}

/// Classify the rashi from an ecliptic longitude in degrees.
pub fn rashi_from_longitude(lon_deg: f64) -> RashiInfo {
    let lon = normalize_360(lon_deg);
    let rashi_index = division_index(lon, 12);
    RashiInfo {
        rashi: ALL_RASHIS[rashi_index as usize],
        rashi_index,
        degrees_in_rashi: lon - rashi_index as f64 * RASHI_SPAN_DEG,
    }
}
