//! Nakshatra (lunar mansion) classification, 27-fold scheme.
//!
//! The ecliptic is divided into 27 equal nakshatras of 13 deg 20'
//! (13.3333... deg), each with 4 padas of 3 deg 20'. Every nakshatra has
//! a presiding lord; the nine lords repeat in a fixed cycle three times
//! over the 27 mansions, so indices 0, 9 and 18 all belong to Ketu.

use crate::angle::{division_index, normalize_360};

/// Span of one nakshatra: 360/27 = 13.3333... degrees.
pub const NAKSHATRA_SPAN_DEG: f64 = 360.0 / 27.0;

/// Span of one pada: a quarter nakshatra, 3.3333... degrees.
pub const PADA_SPAN_DEG: f64 = NAKSHATRA_SPAN_DEG / 4.0;

/// The 27 nakshatras from Ashwini to Revati.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishtha,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in order (0 = Ashwini, 26 = Revati).
pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishtha,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

impl Nakshatra {
    /// Sanskrit name of the nakshatra.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishtha => "Dhanishtha",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// 0-based index (Ashwini=0 .. Revati=26).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Lookup by 0-based index.
    pub fn from_index(index: u8) -> Option<Self> {
        ALL_NAKSHATRAS.get(index as usize).copied()
    }

    /// Presiding lord of this nakshatra.
    pub const fn lord(self) -> NakshatraLord {
        NAKSHATRA_LORD_CYCLE[self as usize % 9]
    }
}

/// The nine presiding lords, in their repeating order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NakshatraLord {
    Ketu,
    Venus,
    Sun,
    Moon,
    Mars,
    Rahu,
    Jupiter,
    Saturn,
    Mercury,
}

/// Lord sequence; cycles three times over the 27 nakshatras.
pub const NAKSHATRA_LORD_CYCLE: [NakshatraLord; 9] = [
    NakshatraLord::Ketu,
    NakshatraLord::Venus,
    NakshatraLord::Sun,
    NakshatraLord::Moon,
    NakshatraLord::Mars,
    NakshatraLord::Rahu,
    NakshatraLord::Jupiter,
    NakshatraLord::Saturn,
    NakshatraLord::Mercury,
];

impl NakshatraLord {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ketu => "Ketu",
            Self::Venus => "Venus",
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mars => "Mars",
            Self::Rahu => "Rahu",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Mercury => "Mercury",
        }
    }
}

/// Result of nakshatra classification from a longitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NakshatraInfo {
    /// The nakshatra.
    pub nakshatra: Nakshatra,
    /// 0-based index (0 = Ashwini).
    pub nakshatra_index: u8,
    /// Presiding lord.
    pub lord: NakshatraLord,
    /// Pada (quarter) within the nakshatra, 1-4.
    pub pada: u8,
    /// Degrees elapsed within this nakshatra [0, 13.333...).
    pub degrees_in_nakshatra: f64,
}

/// Classify the nakshatra from the Moon's ecliptic longitude in degrees.
pub fn nakshatra_from_longitude(moon_lon_deg: f64) -> NakshatraInfo {
    let lon = normalize_360(moon_lon_deg);
    let nakshatra_index = division_index(lon, 27);
    let nakshatra = ALL_NAKSHATRAS[nakshatra_index as usize];
    let degrees_in_nakshatra = lon - nakshatra_index as f64 * NAKSHATRA_SPAN_DEG;
    let pada = (degrees_in_nakshatra / PADA_SPAN_DEG).floor() as u8;
    NakshatraInfo {
        nakshatra,
        nakshatra_index,
        lord: nakshatra.lord(),
        pada: pada.min(3) + 1,
        degrees_in_nakshatra,
    }
}
