//! Tithi trend detection across consecutive civil days.
//!
//! Samples the tithi index at the request instant and again 24 civil
//! hours later (same clock time, next calendar day), each via a fresh
//! ephemeris query. The same index on both days means the tithi spans
//! two sunrises (vriddhi); a decreased index means one was skipped
//! (kshay).

use panchanga_base::{angular_difference, tithi_from_elongation};

use crate::ephemeris::{Body, Ephemeris};
use crate::error::PanchangError;
use crate::types::TithiTrend;

/// Tithi index (0..29) at a given instant, straight from the port.
pub fn tithi_index_at<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    jd_ut: f64,
) -> Result<u8, PanchangError> {
    let sun = ephemeris.longitude(Body::Sun, jd_ut)?;
    let moon = ephemeris.longitude(Body::Moon, jd_ut)?;
    Ok(tithi_from_elongation(angular_difference(moon, sun)).tithi_index)
}

/// Classify the tithi trend at an instant.
pub fn tithi_trend<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    jd_ut: f64,
) -> Result<TithiTrend, PanchangError> {
    let today = tithi_index_at(ephemeris, jd_ut)?;
    let next_day = tithi_index_at(ephemeris, jd_ut + 1.0)?;
    Ok(if next_day == today {
        TithiTrend::Vriddhi
    } else if next_day < today {
        TithiTrend::Kshay
    } else {
        TithiTrend::Normal
    })
}
