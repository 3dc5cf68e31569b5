//! Civil time handling for panchanga derivation.
//!
//! This crate provides:
//! - Proleptic-Gregorian Julian Day conversion (`calendar_to_jd`,
//!   `jd_to_calendar`)
//! - [`CivilDateTime`], a local wall-clock date/time that converts to a
//!   Julian Day in UT given a fractional timezone offset
//!
//! All Julian Days in this workspace are UT; no leap-second or TDB
//! handling is performed (panchanga discretization is insensitive at
//! that scale).

pub mod civil;
pub mod error;
pub mod julian;

pub use civil::CivilDateTime;
pub use error::TimeError;
pub use julian::{J2000_JD, calendar_to_jd, jd_to_calendar};
