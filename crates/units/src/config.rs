use serde::Deserialize;

use crate::factors::Unit;

/// Which view of the data the presentation layer is showing. `Rank`
/// bypasses unit formatting entirely and renders integer placings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplaySystem {
    #[default]
    Metric,
    Imperial,
    Rank,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum TimeFormat {
    #[serde(rename = "seconds")]
    Seconds,
    #[default]
    #[serde(rename = "h:m:s")]
    MinSec,
}

/// A concrete display unit, or let the engine pick one per value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSelection {
    Dynamic,
    #[serde(untagged)]
    Fixed(Unit),
}

/// Display unit for one event, one selection per measurement system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct LengthUnits {
    pub metric: UnitSelection,
    pub imperial: UnitSelection,
}

impl LengthUnits {
    pub const DYNAMIC: LengthUnits = LengthUnits {
        metric: UnitSelection::Dynamic,
        imperial: UnitSelection::Dynamic,
    };

    pub const fn fixed(metric: Unit, imperial: Unit) -> Self {
        Self {
            metric: UnitSelection::Fixed(metric),
            imperial: UnitSelection::Fixed(imperial),
        }
    }

    pub fn for_system(&self, system: DisplaySystem) -> UnitSelection {
        match system {
            DisplaySystem::Imperial => self.imperial,
            _ => self.metric,
        }
    }
}

/// Display settings, owned by the external settings layer and handed into
/// every formatting call. Nothing in this crate reads ambient state, so
/// the same value and config always produce the same text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub system: DisplaySystem,
    pub time_format: TimeFormat,
    pub hand_steel: LengthUnits,
    pub jackleg: LengthUnits,
    pub survey: LengthUnits,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            system: DisplaySystem::Metric,
            time_format: TimeFormat::MinSec,
            hand_steel: LengthUnits::fixed(Unit::Mm, Unit::In),
            jackleg: LengthUnits::fixed(Unit::Cm, Unit::Ft),
            survey: LengthUnits::DYNAMIC,
        }
    }
}

impl DisplayConfig {
    pub fn is_metric(&self) -> bool {
        self.system != DisplaySystem::Imperial
    }

    pub fn with_system(mut self, system: DisplaySystem) -> Self {
        self.system = system;
        self
    }

    pub fn with_time_format(mut self, time_format: TimeFormat) -> Self {
        self.time_format = time_format;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_initial_app_settings() {
        let config = DisplayConfig::default();
        assert_eq!(config.system, DisplaySystem::Metric);
        assert_eq!(config.time_format, TimeFormat::MinSec);
        assert_eq!(config.hand_steel.metric, UnitSelection::Fixed(Unit::Mm));
        assert_eq!(config.hand_steel.imperial, UnitSelection::Fixed(Unit::In));
        assert_eq!(config.jackleg.imperial, UnitSelection::Fixed(Unit::Ft));
        assert_eq!(config.survey.metric, UnitSelection::Dynamic);
    }

    #[test]
    fn test_deserializes_from_settings_tokens() {
        let config: DisplayConfig = serde_json::from_str(
            r#"{
                "system": "imperial",
                "time_format": "seconds",
                "survey": { "metric": "cm", "imperial": "dynamic" }
            }"#,
        )
        .unwrap();

        assert_eq!(config.system, DisplaySystem::Imperial);
        assert_eq!(config.time_format, TimeFormat::Seconds);
        assert_eq!(config.survey.metric, UnitSelection::Fixed(Unit::Cm));
        assert_eq!(config.survey.imperial, UnitSelection::Dynamic);
        // Unmentioned events keep their defaults.
        assert_eq!(config.jackleg.metric, UnitSelection::Fixed(Unit::Cm));
    }

    #[test]
    fn test_rank_system_token() {
        let config: DisplayConfig = serde_json::from_str(r#"{ "system": "rank" }"#).unwrap();
        assert_eq!(config.system, DisplaySystem::Rank);
        assert!(config.is_metric());
    }
}
