use crate::factors::Unit;

/// Verdict on a partially typed field, evaluated on every keystroke.
///
/// `Accepted` means the text is a legal final value, `Intermediate` that
/// it is a prefix of one, and `Invalid` that the edit should be rejected
/// outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admissibility {
    Accepted,
    Intermediate,
    Invalid,
}

use Admissibility::{Accepted, Intermediate, Invalid};

/// Judge a partially typed time value.
///
/// Once a colon commits the field to clock-style input, every component
/// after a colon is a minutes or seconds field and caps at 59. Negative
/// values can never be typed at all.
pub fn time_admissibility(input: &str) -> Admissibility {
    if input.is_empty() {
        return Accepted; // clears the field
    }
    if input.starts_with('-') {
        return Invalid;
    }

    let lower = input.to_lowercase();
    if lower == "dq" {
        return Accepted;
    }
    if "dq".starts_with(&lower) {
        return Intermediate;
    }
    if lower.chars().any(|c| c.is_alphabetic()) {
        return Invalid;
    }

    let segments: Vec<&str> = input.split(':').collect();
    if segments.len() > 3 {
        return Invalid;
    }

    let mut complete = true;
    for (i, segment) in segments.iter().enumerate() {
        if segment.is_empty() {
            // A trailing colon, or a hole the user can still fill in.
            complete = false;
            continue;
        }

        let last = i == segments.len() - 1;
        let verdict = if last {
            decimal_segment(segment)
        } else {
            integer_segment(segment)
        };
        match verdict {
            Invalid => return Invalid,
            Intermediate => complete = false,
            Accepted => {}
        }

        if i > 0 {
            let mut whole = segment.split('.');
            let capped = whole
                .next()
                .and_then(|text| text.parse::<u32>().ok())
                .is_none_or(|v| v <= 59);
            if !capped {
                return Invalid;
            }
        }
    }

    if complete { Accepted } else { Intermediate }
}

/// Judge a partially typed length value: a numeral followed by (part of)
/// one of the known unit codes.
pub fn length_admissibility(input: &str) -> Admissibility {
    if input.is_empty() {
        return Accepted;
    }
    if input.trim_start().starts_with('-') {
        return Invalid;
    }

    let lower = input.trim().to_lowercase();
    if lower == "dq" {
        return Accepted;
    }
    if "dq".starts_with(&lower) {
        return Intermediate;
    }

    let split = lower
        .find(|c: char| c.is_alphabetic())
        .unwrap_or(lower.len());
    let (number, suffix) = lower.split_at(split);
    let number = number.trim();

    if suffix.chars().any(|c| !c.is_alphabetic()) {
        return Invalid;
    }

    let number_verdict = if number.is_empty() {
        Intermediate // a magnitude is still required
    } else {
        decimal_segment(number)
    };
    if number_verdict == Invalid {
        return Invalid;
    }

    let suffix_verdict = if suffix.is_empty() {
        Intermediate // a unit code is still required
    } else if Unit::ORDERED.iter().any(|u| u.code() == suffix) {
        Accepted
    } else if Unit::ORDERED.iter().any(|u| u.code().starts_with(suffix)) {
        Intermediate
    } else {
        return Invalid;
    };

    if number_verdict == Accepted && suffix_verdict == Accepted {
        Accepted
    } else {
        Intermediate
    }
}

fn integer_segment(segment: &str) -> Admissibility {
    if segment.chars().all(|c| c.is_ascii_digit()) {
        Accepted
    } else {
        Invalid
    }
}

fn decimal_segment(segment: &str) -> Admissibility {
    let mut dots = 0;
    for c in segment.chars() {
        if c == '.' {
            dots += 1;
        } else if !c.is_ascii_digit() {
            return Invalid;
        }
    }
    if dots > 1 {
        return Invalid;
    }
    if segment == "." {
        return Intermediate;
    }
    Accepted
}
