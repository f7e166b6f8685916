use tracing::debug;

use crate::config::{DisplayConfig, DisplaySystem, UnitSelection};
use crate::error::{Result, UnitsError};
use crate::factors::{Unit, reasonable_unit};
use crate::measurement::{EventKind, Measurement};

/// Render a stored centimeter value for one of the length events.
///
/// The display unit comes from the configuration for the event and the
/// active measurement system; a `dynamic` selection resolves to the most
/// legible unit for the magnitude. Survey gets an extra decimal and an
/// aligned unit column, matching the precision that event is judged at.
pub fn format_length(
    value: Measurement,
    event: EventKind,
    config: &DisplayConfig,
) -> Result<String> {
    let cms = match value {
        Measurement::Unset => return Ok(String::new()),
        Measurement::Disqualified => return Ok("DQ".to_string()),
        Measurement::Recorded(v) => v,
    };

    if config.system == DisplaySystem::Rank {
        return Ok(format!("{}", cms as i64));
    }

    let selection = match event {
        EventKind::HandSteel => config.hand_steel,
        EventKind::Jackleg => config.jackleg,
        _ => config.survey,
    }
    .for_system(config.system);

    let unit = match selection {
        UnitSelection::Fixed(unit) => unit,
        UnitSelection::Dynamic => reasonable_unit(cms, config.is_metric())?,
    };

    let converted = cms * unit.factor();
    Ok(match event {
        EventKind::Survey => format!("{:.3} {:>2}", converted, unit.code()),
        _ => format!("{:.2} {}", converted, unit.code()),
    })
}

/// Parse free-form length input into canonical centimeters.
///
/// The text must end with one of the known unit codes; the scan walks
/// [`Unit::ORDERED`] so that longer codes win over codes they contain.
/// A suffix match whose numeric remainder fails to parse does not stop
/// the scan, since a shorter code may still fit.
pub fn parse_length(input: &str) -> Result<Measurement> {
    let text = input.trim().to_lowercase();
    if text.is_empty() {
        return Ok(Measurement::Unset);
    }
    if text == "dq" {
        return Ok(Measurement::Disqualified);
    }

    for unit in Unit::ORDERED {
        let Some(stripped) = text.strip_suffix(unit.code()) else {
            continue;
        };
        match stripped.trim().parse::<f64>() {
            Ok(magnitude) => {
                debug!("detected units {}: {}", unit.code(), stripped.trim());
                let cms = magnitude / unit.factor();
                if cms < 0.0 {
                    return Err(UnitsError::NegativeValue(cms));
                }
                return Ok(Measurement::Recorded(cms));
            }
            Err(_) => {
                debug!("partial unit match of input: {text}");
            }
        }
    }

    Err(UnitsError::InvalidFormat(text))
}
