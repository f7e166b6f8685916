use serde::{Deserialize, Serialize};

use crate::error::{Result, UnitsError};

/// Linear units the engine can display and parse. Each carries a fixed
/// multiplier from the canonical storage unit (centimeters).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Mm,
    Cm,
    Km,
    M,
    In,
    Ft,
    Mi,
}

impl Unit {
    /// Suffix-scan order for parsing. The order is load-bearing: a code
    /// must be tested before any code that is a suffix of it, or "5km"
    /// would match `m` with the unparseable remainder "5k".
    pub const ORDERED: [Unit; 7] = [
        Unit::Mm,
        Unit::Cm,
        Unit::Km,
        Unit::M,
        Unit::In,
        Unit::Ft,
        Unit::Mi,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Unit::Mm => "mm",
            Unit::Cm => "cm",
            Unit::Km => "km",
            Unit::M => "m",
            Unit::In => "in",
            Unit::Ft => "ft",
            Unit::Mi => "mi",
        }
    }

    /// Multiplier converting a centimeter value into this unit.
    pub fn factor(&self) -> f64 {
        match self {
            Unit::Mm => 10.0,
            Unit::Cm => 1.0,
            Unit::Km => 1.0 / 100.0 / 1000.0,
            Unit::M => 1.0 / 100.0,
            Unit::In => 1.0 / 2.54,
            Unit::Ft => 1.0 / 2.54 / 12.0,
            Unit::Mi => 1.0 / 2.54 / 12.0 / 5280.0,
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Pick the most legible unit for a centimeter magnitude.
///
/// Only defined for positive values; callers must guard before asking
/// for a unit to show a zero or negative measurement in.
pub fn reasonable_unit(value_cm: f64, is_metric: bool) -> Result<Unit> {
    if value_cm <= 0.0 {
        return Err(UnitsError::UnresolvableUnit(value_cm));
    }

    if is_metric {
        let power = value_cm.log10();
        Ok(if power <= 0.0 {
            Unit::Mm
        } else if power < 2.0 {
            Unit::Cm
        } else if power >= 5.0 {
            Unit::Km
        } else {
            Unit::M
        })
    } else {
        let inches = value_cm / 2.54;
        if inches < 12.0 {
            return Ok(Unit::In);
        }
        let feet = inches / 12.0;
        Ok(if feet < 5280.0 { Unit::Ft } else { Unit::Mi })
    }
}
