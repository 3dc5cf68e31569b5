//! The panchanga calculator: longitudes in, calendar elements out.
//!
//! [`panchang_from_longitudes`] is the pure discretization core;
//! [`compute_panchang`] wraps it with validation, time conversion and
//! the ephemeris queries. The pipeline is all-or-nothing: no partial
//! result is ever returned.

use panchanga_base::{
    angular_difference, division_index, karana_from_number, lunisolar_masa_from_longitudes,
    nakshatra_from_longitude, rashi_from_longitude, solar_masa_from_longitude,
    tithi_from_elongation, vikram_samvat_from_civil_year, yoga_from_sum, MasaInfo,
};
use panchanga_time::CivilDateTime;

use crate::ephemeris::{Body, Ephemeris};
use crate::error::PanchangError;
use crate::trend::tithi_trend;
use crate::types::{
    CelestialLongitudes, GeoLocation, MonthConvention, PanchangOptions, PanchangResult,
};

/// Derive every panchanga element from one set of longitudes.
///
/// The longitudes must already be expressed in the zodiac the caller
/// wants (the ephemeris pipeline handles that); `civil_year` feeds the
/// era-year offset. Pure and deterministic: identical inputs always
/// produce an identical result.
pub fn panchang_from_longitudes(
    longitudes: &CelestialLongitudes,
    civil_year: i32,
    options: &PanchangOptions,
) -> Result<PanchangResult, PanchangError> {
    let elongation = angular_difference(longitudes.moon, longitudes.sun);

    let tithi = tithi_from_elongation(elongation);

    // Two karanas per tithi; the slot-to-name lookup is the one table
    // access a bad index could slip through, so it stays checked.
    let karana_number = division_index(elongation, 60);
    let karana = karana_from_number(karana_number).ok_or(PanchangError::TableIndex {
        table: "karana",
        index: karana_number,
    })?;

    let nakshatra = nakshatra_from_longitude(longitudes.moon);
    let yoga = yoga_from_sum(longitudes.sun + longitudes.moon);
    let chandra = rashi_from_longitude(longitudes.moon);
    let lagna = rashi_from_longitude(longitudes.ascendant);

    let masa = match options.month_convention {
        MonthConvention::Solar => MasaInfo {
            rashi: solar_masa_from_longitude(longitudes.sun),
            adhika: false,
        },
        MonthConvention::Lunisolar => {
            lunisolar_masa_from_longitudes(longitudes.sun, longitudes.moon)
        }
    };

    Ok(PanchangResult {
        tithi: tithi.tithi,
        tithi_index: tithi.tithi_index,
        tithi_number: tithi.tithi_number,
        paksha: tithi.paksha,
        tithi_trend: None,
        nakshatra: nakshatra.nakshatra,
        nakshatra_index: nakshatra.nakshatra_index,
        nakshatra_lord: nakshatra.lord,
        nakshatra_pada: nakshatra.pada,
        yoga: yoga.yoga,
        yoga_index: yoga.yoga_index,
        karana,
        karana_number,
        chandra_rashi: chandra.rashi,
        lagna_rashi: lagna.rashi,
        masa,
        month_convention: options.month_convention,
        vikram_samvat: vikram_samvat_from_civil_year(civil_year),
    })
}

/// Full pipeline: civil input → validation → ephemeris → elements.
///
/// Validation runs before any ephemeris query. The trend detector is
/// invoked only when requested, since it doubles the ephemeris cost.
pub fn compute_panchang<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    date: &CivilDateTime,
    tz_offset_hours: f64,
    location: &GeoLocation,
    options: &PanchangOptions,
) -> Result<PanchangResult, PanchangError> {
    location.validate()?;
    let jd_ut = date.to_jd_ut(tz_offset_hours)?;

    let longitudes = longitudes_at(ephemeris, jd_ut, location, options)?;

    // Era year from the request's local civil year
    let mut result = panchang_from_longitudes(&longitudes, date.year, options)?;
    if options.include_tithi_trend {
        result.tithi_trend = Some(tithi_trend(ephemeris, jd_ut)?);
    }
    Ok(result)
}

/// Query the port once per body, then shift into the requested zodiac.
///
/// The ayanamsha is subtracted uniformly from all three longitudes; it
/// cancels in the Moon−Sun elongation, so tithi and karana come out the
/// same in either mode.
fn longitudes_at<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    jd_ut: f64,
    location: &GeoLocation,
    options: &PanchangOptions,
) -> Result<CelestialLongitudes, PanchangError> {
    let sun = ephemeris.longitude(Body::Sun, jd_ut)?;
    let moon = ephemeris.longitude(Body::Moon, jd_ut)?;
    let ascendant = ephemeris.ascendant(jd_ut, location, options.house_system)?;
    let ayanamsha = options.zodiac.ayanamsha_deg(jd_ut);
    Ok(CelestialLongitudes::new(
        sun - ayanamsha,
        moon - ayanamsha,
        ascendant - ayanamsha,
    ))
}
