//! Measurement normalization for the mining-games scorekeeper.
//!
//! The store keeps every result in a canonical unit (seconds for timed
//! events, centimeters for linear ones). This crate owns both sides of
//! that boundary: rendering canonical values for display in whatever
//! unit and format the operator configured, and parsing free-form text
//! (mixed units, clock-style times, disqualification markers) back into
//! canonical values.

pub mod config;
pub mod error;
pub mod factors;
pub mod length;
pub mod measurement;
pub mod time;
pub mod validate;

pub use config::{DisplayConfig, DisplaySystem, LengthUnits, TimeFormat, UnitSelection};
pub use error::{Result, UnitsError};
pub use factors::{Unit, reasonable_unit};
pub use measurement::{Division, EventFamily, EventKind, Measurement, SortOrder};
pub use validate::Admissibility;
