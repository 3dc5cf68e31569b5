//! Ephemeris port: the contract the core requires from an external
//! ephemeris provider.
//!
//! The core performs no orbital mechanics itself. It asks the provider
//! for two things — apparent geocentric ecliptic longitudes of Sun and
//! Moon, and the ascendant degree for an instant and location — and
//! treats the calls as an opaque, potentially slow, synchronous oracle
//! (real providers read data files from disk).

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

use crate::types::GeoLocation;

/// Bodies the core queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Body {
    Sun,
    Moon,
}

impl Body {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
        }
    }
}

/// House system used for the ascendant computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HouseSystem {
    #[default]
    Placidus,
    Equal,
}

impl HouseSystem {
    /// Single-letter code in the Swiss Ephemeris convention.
    pub const fn code(self) -> u8 {
        match self {
            Self::Placidus => b'P',
            Self::Equal => b'E',
        }
    }
}

/// Process-wide ephemeris provider configuration.
///
/// Constructed exactly once at process initialization and injected into
/// the provider; never mutated per request, so concurrent requests read
/// it without synchronization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EphemerisConfig {
    /// Directory holding the provider's ephemeris data files.
    pub data_path: PathBuf,
    /// Whether positions are topocentric (default geocentric).
    pub topocentric: bool,
}

impl EphemerisConfig {
    pub fn new(data_path: PathBuf) -> Self {
        Self {
            data_path,
            topocentric: false,
        }
    }
}

/// Failures surfaced by an ephemeris provider.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EphemerisError {
    /// Ephemeris data files missing or unreadable.
    DataUnavailable(String),
    /// Instant falls outside the provider's supported range.
    OutOfRange { jd_ut: f64 },
    /// The underlying computation failed.
    Computation(String),
}

impl Display for EphemerisError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DataUnavailable(msg) => write!(f, "ephemeris data unavailable: {msg}"),
            Self::OutOfRange { jd_ut } => {
                write!(f, "JD {jd_ut} outside supported ephemeris range")
            }
            Self::Computation(msg) => write!(f, "ephemeris computation failed: {msg}"),
        }
    }
}

impl Error for EphemerisError {}

/// The ephemeris oracle the core computes against.
///
/// Longitudes are tropical; the core applies the ayanamsha itself when a
/// sidereal zodiac is requested. Implementations must be shareable
/// across request threads (`Send + Sync`); the blocking call should be
/// kept off any single request-serializing thread by the caller.
pub trait Ephemeris: Send + Sync {
    /// Apparent geocentric ecliptic longitude of a body, degrees.
    fn longitude(&self, body: Body, jd_ut: f64) -> Result<f64, EphemerisError>;

    /// Ecliptic longitude of the rising point, degrees.
    fn ascendant(
        &self,
        jd_ut: f64,
        location: &GeoLocation,
        house_system: HouseSystem,
    ) -> Result<f64, EphemerisError>;
}
