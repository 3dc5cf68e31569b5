//! Panchanga derivation engine.
//!
//! This crate turns a civil date/time, timezone offset and geographic
//! location into the five panchanga elements (tithi, nakshatra, yoga,
//! karana, rashi/lagna) plus the month and era year. It owns:
//! - The [`Ephemeris`] port: the contract an external ephemeris provider
//!   must satisfy (Sun/Moon longitude and ascendant degree)
//! - The all-or-nothing [`compute_panchang`] pipeline
//! - The tithi trend detector (vriddhi/kshay classification)
//!
//! All discretization is delegated to `panchanga_base`; this crate adds
//! validation, the port seam, and request/result plumbing.

pub mod calculator;
pub mod ephemeris;
pub mod error;
pub mod trend;
pub mod types;

pub use calculator::{compute_panchang, panchang_from_longitudes};
pub use ephemeris::{Body, Ephemeris, EphemerisConfig, EphemerisError, HouseSystem};
pub use error::PanchangError;
pub use trend::{tithi_index_at, tithi_trend};
pub use types::{
    CelestialLongitudes, GeoLocation, MonthConvention, PanchangOptions, PanchangResult,
    TithiTrend,
};
