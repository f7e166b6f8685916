use crate::config::{DisplayConfig, DisplaySystem, TimeFormat};
use crate::error::{Result, UnitsError};
use crate::measurement::Measurement;

/// Render a stored seconds value (or, in rank mode, an integer placing).
pub fn format_time(value: Measurement, config: &DisplayConfig) -> String {
    let seconds = match value {
        Measurement::Unset => return String::new(),
        Measurement::Disqualified => return "DQ".to_string(),
        Measurement::Recorded(v) => v,
    };

    if config.system == DisplaySystem::Rank {
        return format!("{}", seconds as i64);
    }

    match config.time_format {
        TimeFormat::Seconds => format!("{seconds:.2}"),
        TimeFormat::MinSec => {
            let hours = (seconds / 3600.0).floor() as i64;
            let minutes = ((seconds - hours as f64 * 3600.0) / 60.0).floor() as i64;
            let secs = seconds - hours as f64 * 3600.0 - minutes as f64 * 60.0;

            if hours > 0 {
                format!("{hours}:{minutes:02}:{secs:05.2}")
            } else {
                format!("{minutes}:{secs:05.2}")
            }
        }
    }
}

/// Parse free-form time input into canonical seconds.
///
/// Accepts an empty string (clears the field), a case-insensitive "DQ",
/// `H:MM:SS[.ff]`, `M:SS[.ff]`, or a bare seconds numeral.
pub fn parse_time(input: &str) -> Result<Measurement> {
    let text = input.trim();
    if text.is_empty() {
        return Ok(Measurement::Unset);
    }
    if text.eq_ignore_ascii_case("dq") {
        return Ok(Measurement::Disqualified);
    }

    let invalid = || UnitsError::InvalidFormat(text.to_string());
    let whole = |segment: &str| -> Result<f64> {
        segment
            .trim()
            .parse::<i64>()
            .map(|v| v as f64)
            .map_err(|_| invalid())
    };
    let fractional = |segment: &str| -> Result<f64> {
        segment.trim().parse::<f64>().map_err(|_| invalid())
    };

    let segments: Vec<&str> = text.split(':').collect();
    let seconds = match segments.as_slice() {
        [s] => fractional(s)?,
        [m, s] => whole(m)? * 60.0 + fractional(s)?,
        [h, m, s] => whole(h)? * 3600.0 + whole(m)? * 60.0 + fractional(s)?,
        _ => return Err(invalid()),
    };

    if seconds < 0.0 {
        return Err(UnitsError::NegativeValue(seconds));
    }
    Ok(Measurement::Recorded(seconds))
}
