use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::DisplayConfig;
use crate::error::{Result, UnitsError};
use crate::validate::Admissibility;
use crate::{length, time, validate};

/// Disqualification sentinel for timed events: 180 hours, in seconds.
pub const DQ_TIME: f64 = 180.0 * 60.0 * 60.0;
/// Disqualification sentinel for Hand Steel and Jackleg, in centimeters.
/// A recorded zero length is physically meaningless for those events, so
/// the store reuses it.
pub const DQ_MIN_LENGTH: f64 = 0.0;
/// Disqualification sentinel for Survey, in centimeters. Large enough to
/// sort past any real measurement in an ascending order.
pub const DQ_MAX_LENGTH: f64 = 99_999_999.0;

/// A single event result as the rest of the system sees it.
///
/// The store keeps raw floats and reserves one value per event family to
/// mean "disqualified"; this type keeps the three outcomes apart so a
/// legitimate measurement can never be confused with a sentinel while the
/// value is in flight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Measurement {
    Recorded(f64),
    Disqualified,
    Unset,
}

impl Measurement {
    /// Decode a raw store value, mapping the event's sentinel back to
    /// [`Measurement::Disqualified`].
    pub fn from_raw(raw: Option<f64>, event: EventKind) -> Self {
        match raw {
            None => Measurement::Unset,
            Some(v) if v == event.dq_sentinel() => Measurement::Disqualified,
            Some(v) => Measurement::Recorded(v),
        }
    }

    /// Encode for storage. Inverse of [`Measurement::from_raw`] for the
    /// same event.
    pub fn to_raw(self, event: EventKind) -> Option<f64> {
        match self {
            Measurement::Recorded(v) => Some(v),
            Measurement::Disqualified => Some(event.dq_sentinel()),
            Measurement::Unset => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventFamily {
    Time,
    Length,
}

/// Ranking direction for an event's raw values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// The seven scored events.
///
/// Each kind knows how to display, parse, and validate its own values,
/// which lets callers drive every result column through one interface
/// instead of dispatching per event themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    Mucking,
    #[serde(rename = "Swede Saw")]
    SwedeSaw,
    #[serde(rename = "Track Stand")]
    TrackStand,
    #[serde(rename = "Gold Pan")]
    GoldPan,
    #[serde(rename = "Hand Steel")]
    HandSteel,
    Jackleg,
    Survey,
}

impl EventKind {
    pub const ALL: [EventKind; 7] = [
        EventKind::Mucking,
        EventKind::SwedeSaw,
        EventKind::TrackStand,
        EventKind::GoldPan,
        EventKind::HandSteel,
        EventKind::Jackleg,
        EventKind::Survey,
    ];

    /// Column name in the teams and ranks tables.
    pub fn column(&self) -> &'static str {
        match self {
            EventKind::Mucking => "Mucking",
            EventKind::SwedeSaw => "Swede Saw",
            EventKind::TrackStand => "Track Stand",
            EventKind::GoldPan => "Gold Pan",
            EventKind::HandSteel => "Hand Steel",
            EventKind::Jackleg => "Jackleg",
            EventKind::Survey => "Survey",
        }
    }

    pub fn family(&self) -> EventFamily {
        match self {
            EventKind::HandSteel | EventKind::Jackleg | EventKind::Survey => EventFamily::Length,
            _ => EventFamily::Time,
        }
    }

    /// Lower raw values place better for every event except the two
    /// drilling events, where reach is what counts.
    pub fn sort_order(&self) -> SortOrder {
        match self {
            EventKind::HandSteel | EventKind::Jackleg => SortOrder::Descending,
            _ => SortOrder::Ascending,
        }
    }

    /// The raw value the store reserves to mean "disqualified" for this
    /// event.
    pub fn dq_sentinel(&self) -> f64 {
        match self {
            EventKind::HandSteel | EventKind::Jackleg => DQ_MIN_LENGTH,
            EventKind::Survey => DQ_MAX_LENGTH,
            _ => DQ_TIME,
        }
    }

    /// Render a result for this event under the given configuration.
    pub fn display(&self, value: Measurement, config: &DisplayConfig) -> Result<String> {
        match self.family() {
            EventFamily::Time => Ok(time::format_time(value, config)),
            EventFamily::Length => length::format_length(value, *self, config),
        }
    }

    /// Parse operator input for this event back into a canonical value.
    pub fn parse(&self, input: &str) -> Result<Measurement> {
        match self.family() {
            EventFamily::Time => time::parse_time(input),
            EventFamily::Length => length::parse_length(input),
        }
    }

    /// Judge a partially typed input for this event.
    pub fn admissibility(&self, input: &str) -> Admissibility {
        match self.family() {
            EventFamily::Time => validate::time_admissibility(input),
            EventFamily::Length => validate::length_admissibility(input),
        }
    }

    pub fn from_column(text: &str) -> Option<EventKind> {
        EventKind::ALL
            .into_iter()
            .find(|e| e.column().eq_ignore_ascii_case(text.trim()))
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

impl FromStr for EventKind {
    type Err = UnitsError;

    fn from_str(s: &str) -> Result<Self> {
        EventKind::from_column(s).ok_or_else(|| UnitsError::InvalidFormat(s.to_string()))
    }
}

impl TryFrom<String> for EventKind {
    type Error = UnitsError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

/// Competition divisions, stored as single-letter codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Division {
    #[serde(rename = "M")]
    Mens,
    #[serde(rename = "W")]
    Womens,
    #[serde(rename = "C")]
    CoEd,
    #[serde(rename = "A")]
    Alumni,
}

impl Division {
    pub const ALL: [Division; 4] = [
        Division::Alumni,
        Division::CoEd,
        Division::Mens,
        Division::Womens,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Division::Mens => "M",
            Division::Womens => "W",
            Division::CoEd => "C",
            Division::Alumni => "A",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Division::Mens => "Men's",
            Division::Womens => "Women's",
            Division::CoEd => "Co-Ed",
            Division::Alumni => "Alumni",
        }
    }

    /// Accepts either the store code or the display name, in any case.
    pub fn parse(text: &str) -> Option<Division> {
        match text.trim().to_lowercase().as_str() {
            "m" | "men's" | "mens" => Some(Division::Mens),
            "w" | "women's" | "womens" => Some(Division::Womens),
            "c" | "co-ed" | "coed" => Some(Division::CoEd),
            "a" | "alumni" => Some(Division::Alumni),
            _ => None,
        }
    }
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Division {
    type Err = UnitsError;

    fn from_str(s: &str) -> Result<Self> {
        Division::parse(s).ok_or_else(|| UnitsError::InvalidFormat(s.to_string()))
    }
}

impl TryFrom<String> for Division {
    type Error = UnitsError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_round_trip() {
        for event in EventKind::ALL {
            let raw = Measurement::Disqualified.to_raw(event);
            assert_eq!(raw, Some(event.dq_sentinel()));
            assert_eq!(Measurement::from_raw(raw, event), Measurement::Disqualified);
        }
    }

    #[test]
    fn test_recorded_and_unset_round_trip() {
        let m = Measurement::from_raw(Some(12.5), EventKind::Mucking);
        assert_eq!(m, Measurement::Recorded(12.5));
        assert_eq!(m.to_raw(EventKind::Mucking), Some(12.5));

        let m = Measurement::from_raw(None, EventKind::Survey);
        assert_eq!(m, Measurement::Unset);
        assert_eq!(m.to_raw(EventKind::Survey), None);
    }

    #[test]
    fn test_sentinels_differ_per_event_family() {
        assert_eq!(EventKind::Mucking.dq_sentinel(), 648_000.0);
        assert_eq!(EventKind::HandSteel.dq_sentinel(), 0.0);
        assert_eq!(EventKind::Jackleg.dq_sentinel(), 0.0);
        assert_eq!(EventKind::Survey.dq_sentinel(), 99_999_999.0);
    }

    #[test]
    fn test_sort_order() {
        assert_eq!(EventKind::Mucking.sort_order(), SortOrder::Ascending);
        assert_eq!(EventKind::Survey.sort_order(), SortOrder::Ascending);
        assert_eq!(EventKind::HandSteel.sort_order(), SortOrder::Descending);
        assert_eq!(EventKind::Jackleg.sort_order(), SortOrder::Descending);
    }

    #[test]
    fn test_event_from_column() {
        assert_eq!(
            EventKind::from_column("Swede Saw"),
            Some(EventKind::SwedeSaw)
        );
        assert_eq!(
            EventKind::from_column("gold pan"),
            Some(EventKind::GoldPan)
        );
        assert_eq!(EventKind::from_column("Sawing"), None);
    }

    #[test]
    fn test_division_lexicon_is_bidirectional() {
        for division in Division::ALL {
            assert_eq!(Division::parse(division.code()), Some(division));
            assert_eq!(Division::parse(division.display_name()), Some(division));
        }
        assert_eq!(Division::parse("co-ed"), Some(Division::CoEd));
        assert_eq!(Division::parse("X"), None);
    }
}
