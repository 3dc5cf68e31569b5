//! Pure panchanga element tables and discretization.
//!
//! This crate provides:
//! - Circular (mod-360) angle helpers
//! - The five element tables (tithi, nakshatra, yoga, karana, rashi) as
//!   enums with stable 0-based indices
//! - Classification functions from ecliptic longitudes to elements
//! - Solar/lunisolar month determination and Vikram Samvat era year
//! - Lahiri ayanamsha for the sidereal zodiac mode
//!
//! Everything here is stateless arithmetic over degree values; ephemeris
//! queries and request plumbing live in `panchanga_engine`.

pub mod angle;
pub mod ayanamsha;
pub mod karana;
pub mod masa;
pub mod nakshatra;
pub mod rashi;
pub mod samvat;
pub mod tithi;
pub mod yoga;

pub use angle::{angular_difference, division_index, normalize_360};
pub use ayanamsha::{ZodiacMode, jd_ut_to_centuries};
pub use karana::{
    ALL_KARANAS, KARANA_SEGMENT_DEG, Karana, KaranaInfo, MOVABLE_KARANAS, karana_from_elongation,
    karana_from_number,
};
pub use masa::{MasaInfo, lunisolar_masa_from_longitudes, solar_masa_from_longitude};
pub use nakshatra::{
    ALL_NAKSHATRAS, NAKSHATRA_LORD_CYCLE, NAKSHATRA_SPAN_DEG, Nakshatra, NakshatraInfo,
    NakshatraLord, PADA_SPAN_DEG, nakshatra_from_longitude,
};
pub use rashi::{ALL_RASHIS, RASHI_SPAN_DEG, Rashi, RashiInfo, rashi_from_longitude};
pub use samvat::vikram_samvat_from_civil_year;
pub use tithi::{
    ALL_TITHIS, Paksha, TITHI_SEGMENT_DEG, Tithi, TithiInfo, tithi_from_elongation,
};
pub use yoga::{ALL_YOGAS, YOGA_SEGMENT_DEG, Yoga, YogaInfo, yoga_from_sum};
