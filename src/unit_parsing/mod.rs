// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code to parse strings into plain numbers, some quantity with a unit, or
//! sexagesimal angles.

mod error;

pub use error::UnitParseError;

use strum::IntoEnumIterator;
use strum_macros::{EnumIter, EnumString, IntoStaticStr};

#[derive(Debug, Clone, Copy, PartialEq, EnumIter, EnumString, IntoStaticStr)]
pub(crate) enum TimeFormat {
    /// Seconds
    #[strum(serialize = "s")]
    S,

    /// Minutes
    #[strum(serialize = "min")]
    Min,

    /// Hours
    #[strum(serialize = "h")]
    H,

    NoUnit,
}

impl TimeFormat {
    /// The number of seconds in one of this unit. Unitless values are seconds.
    fn to_seconds(self) -> f64 {
        match self {
            TimeFormat::S | TimeFormat::NoUnit => 1.0,
            TimeFormat::Min => 60.0,
            TimeFormat::H => 3600.0,
        }
    }
}

/// Parse a string that may have a unit of time attached to it.
pub(crate) fn parse_time(s: &str) -> Result<(f64, TimeFormat), UnitParseError> {
    // Try to parse a naked number.
    let maybe_number: Option<f64> = s.trim().parse().ok();
    if let Some(number) = maybe_number {
        return Ok((number, TimeFormat::NoUnit));
    };

    // That didn't work; let's search over our supported formats.
    let suffix = unit_suffix(s);
    for time_format in TimeFormat::iter().filter(|&tf| tf != TimeFormat::NoUnit) {
        let time_format_str: &'static str = time_format.into();
        if suffix.to_uppercase() == time_format_str.to_uppercase() {
            let number: f64 = match numeric_prefix(s).parse() {
                Ok(n) => n,
                Err(_) => {
                    return Err(UnitParseError::GotTimeUnitButCantParse {
                        input: s.to_string(),
                        unit: time_format_str,
                    })
                }
            };
            return Ok((number, time_format));
        }
    }

    // If we made it this far, we don't know how to parse the string.
    Err(UnitParseError::Unknown {
        input: s.to_string(),
        unit_type: "time",
    })
}

/// Parse a string that may have a unit of time attached to it, returning
/// seconds.
pub(crate) fn parse_time_seconds(s: &str) -> Result<f64, UnitParseError> {
    let (number, format) = parse_time(s)?;
    Ok(number * format.to_seconds())
}

#[derive(Debug, Clone, Copy, PartialEq, EnumIter, EnumString, IntoStaticStr)]
#[allow(non_camel_case_types)]
pub(crate) enum FreqFormat {
    /// Hertz
    Hz,

    /// kiloHertz
    kHz,

    /// MegaHertz
    MHz,

    /// GigaHertz
    GHz,

    NoUnit,
}

impl FreqFormat {
    /// The number of Hz in one of this unit. Unitless values are Hz.
    fn to_hz(self) -> f64 {
        match self {
            FreqFormat::Hz | FreqFormat::NoUnit => 1.0,
            FreqFormat::kHz => 1e3,
            FreqFormat::MHz => 1e6,
            FreqFormat::GHz => 1e9,
        }
    }
}

/// Parse a string that may have a unit of frequency attached to it.
pub(crate) fn parse_freq(s: &str) -> Result<(f64, FreqFormat), UnitParseError> {
    // Try to parse a naked number.
    let maybe_number: Option<f64> = s.trim().parse().ok();
    if let Some(number) = maybe_number {
        return Ok((number, FreqFormat::NoUnit));
    };

    // That didn't work; let's search over our supported formats.
    let suffix = unit_suffix(s);
    for freq_format in FreqFormat::iter().filter(|&ff| ff != FreqFormat::NoUnit) {
        let freq_format_str: &'static str = freq_format.into();
        if suffix.to_uppercase() == freq_format_str.to_uppercase() {
            let number: f64 = match numeric_prefix(s).parse() {
                Ok(n) => n,
                Err(_) => {
                    return Err(UnitParseError::GotFreqUnitButCantParse {
                        input: s.to_string(),
                        unit: freq_format_str,
                    })
                }
            };
            return Ok((number, freq_format));
        }
    }

    // If we made it this far, we don't know how to parse the string.
    Err(UnitParseError::Unknown {
        input: s.to_string(),
        unit_type: "frequency",
    })
}

/// Parse a string that may have a unit of frequency attached to it, returning
/// Hz.
pub(crate) fn parse_freq_hz(s: &str) -> Result<f64, UnitParseError> {
    let (number, format) = parse_freq(s)?;
    Ok(number * format.to_hz())
}

/// The byte index where the unit starts, e.g. 7 in "1.4e9 Hz". An "e" or "E"
/// directly between a number and exponent digits belongs to the number.
fn unit_start(s: &str) -> usize {
    let chars: Vec<(usize, char)> = s.char_indices().collect();
    for (n, &(i, c)) in chars.iter().enumerate() {
        if c.is_numeric() || c == '.' || c == '-' || c == '+' {
            continue;
        }
        if c == 'e' || c == 'E' {
            let after_mantissa = n > 0 && matches!(chars[n - 1].1, '0'..='9' | '.');
            let exponent_follows = match chars.get(n + 1).map(|&(_, c)| c) {
                Some('0'..='9') => true,
                Some('-' | '+') => matches!(chars.get(n + 2), Some((_, '0'..='9'))),
                _ => false,
            };
            if after_mantissa && exponent_follows {
                continue;
            }
        }
        return i;
    }
    s.len()
}

/// Everything after the number, e.g. "MHz" in " 610.5 MHz ".
fn unit_suffix(s: &str) -> &str {
    let s = s.trim();
    s[unit_start(s)..].trim()
}

/// Everything before the unit, e.g. "610.5" in " 610.5 MHz ".
fn numeric_prefix(s: &str) -> &str {
    let s = s.trim();
    s[..unit_start(s)].trim()
}

/// Parse a right ascension. Plain numbers are decimal degrees; anything else
/// must be sexagesimal hours, e.g. "08:35:20.6", "8h35m20.6s" or "8 35 20.6".
/// Returns degrees.
pub(crate) fn parse_ra_deg(s: &str) -> Result<f64, UnitParseError> {
    if let Ok(number) = s.trim().parse::<f64>() {
        return Ok(number);
    }
    parse_sexagesimal(s, &[':', 'h', 'H', 'm', 's'])
        .map(|hours| hours * 15.0)
        .ok_or_else(|| UnitParseError::Angle {
            input: s.to_string(),
            form: "hours (e.g. 08:35:20.6 or 8h35m20.6s)",
        })
}

/// Parse a declination, latitude or longitude. Plain numbers are decimal
/// degrees; anything else must be sexagesimal degrees, e.g. "-45:10:34.8",
/// "53d 14m 10.5s" or "-45°10'34.8\"". Returns degrees.
pub(crate) fn parse_dms_deg(s: &str) -> Result<f64, UnitParseError> {
    if let Ok(number) = s.trim().parse::<f64>() {
        return Ok(number);
    }
    parse_sexagesimal(s, &[':', 'd', 'D', '°', 'm', '\'', 's', '"']).ok_or_else(|| {
        UnitParseError::Angle {
            input: s.to_string(),
            form: "degrees (e.g. -45:10:34.8 or 53d 14m 10.5s)",
        }
    })
}

/// Parse up to three sexagesimal fields (units, minutes, seconds) separated by
/// any of the separators or whitespace. The sign applies to the whole value,
/// so "-0:30:00" is -0.5. Minutes and seconds must be in `[0, 60)`.
fn parse_sexagesimal(s: &str, separators: &[char]) -> Option<f64> {
    let s = s.trim();
    let (negative, body) = match s.strip_prefix('-') {
        Some(body) => (true, body),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };

    let fields: Vec<&str> = body
        .split(|c: char| separators.contains(&c) || c.is_whitespace())
        .filter(|f| !f.is_empty())
        .collect();
    if fields.is_empty() || fields.len() > 3 {
        return None;
    }

    let mut value = 0.0;
    let mut scale = 1.0;
    for (i, field) in fields.into_iter().enumerate() {
        let v: f64 = field.parse().ok()?;
        if !v.is_finite() || v < 0.0 || (i > 0 && v >= 60.0) {
            return None;
        }
        value += v / scale;
        scale *= 60.0;
    }

    Some(if negative { -value } else { value })
}
