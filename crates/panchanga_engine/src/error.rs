//! Error taxonomy for panchanga derivation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use panchanga_time::TimeError;

use crate::ephemeris::EphemerisError;

/// Errors from the panchanga pipeline.
///
/// Input validation (`InvalidDate`, `InvalidLocation`) happens before any
/// ephemeris query. `TableIndex` is defensive: it signals an internal
/// normalization bug and must never occur in practice.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum PanchangError {
    /// Malformed or calendrically impossible civil date/time.
    InvalidDate(&'static str),
    /// Latitude or longitude outside its valid range.
    InvalidLocation(&'static str),
    /// The ephemeris provider failed; carries the underlying cause.
    Ephemeris(EphemerisError),
    /// A derived index landed outside its table's bounds.
    TableIndex { table: &'static str, index: u8 },
}

impl Display for PanchangError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate(msg) => write!(f, "invalid date: {msg}"),
            Self::InvalidLocation(msg) => write!(f, "invalid location: {msg}"),
            Self::Ephemeris(e) => write!(f, "ephemeris unavailable: {e}"),
            Self::TableIndex { table, index } => {
                write!(f, "internal error: index {index} out of bounds for {table} table")
            }
        }
    }
}

impl Error for PanchangError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Ephemeris(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TimeError> for PanchangError {
    fn from(e: TimeError) -> Self {
        match e {
            TimeError::InvalidDate(msg) => Self::InvalidDate(msg),
            TimeError::InvalidTimezone(msg) => Self::InvalidDate(msg),
            _ => Self::InvalidDate("unrepresentable civil time"),
        }
    }
}

impl From<EphemerisError> for PanchangError {
    fn from(e: EphemerisError) -> Self {
        Self::Ephemeris(e)
    }
}
