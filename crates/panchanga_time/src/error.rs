//! Error types for civil time conversion.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from civil date/time validation and conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TimeError {
    /// Calendrically impossible or malformed date/time (e.g. Feb 30, hour 24).
    InvalidDate(&'static str),
    /// Timezone offset outside the plausible range or not finite.
    InvalidTimezone(&'static str),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate(msg) => write!(f, "invalid date: {msg}"),
            Self::InvalidTimezone(msg) => write!(f, "{msg}"),
        }
    }
}

impl Error for TimeError {}
