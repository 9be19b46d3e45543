// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors raised when constructing the values that drive a calculation.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidParameter {
    #[error("{name} must be a finite number, but got {value}")]
    NotFinite { name: &'static str, value: f64 },

    #[error("{name} must be positive, but got {value}")]
    NotPositive { name: &'static str, value: f64 },

    #[error("{name} ({value}) is outside of the allowed range [{min}, {max}]")]
    OutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("The number of polarisations must be 1 or 2, but got {0}")]
    NumPols(u8),

    #[error("Couldn't parse '{0}' as a date; expected the format YYYY-MM-DD")]
    Date(String),
}

/// Ensure that a value is finite and lies within `[min, max]`.
pub(crate) fn check_range(
    name: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<f64, InvalidParameter> {
    if !value.is_finite() {
        return Err(InvalidParameter::NotFinite { name, value });
    }
    if value < min || value > max {
        return Err(InvalidParameter::OutOfRange {
            name,
            value,
            min,
            max,
        });
    }
    Ok(value)
}

/// Ensure that a value is finite and strictly greater than 0.
pub(crate) fn check_positive(name: &'static str, value: f64) -> Result<f64, InvalidParameter> {
    if !value.is_finite() {
        return Err(InvalidParameter::NotFinite { name, value });
    }
    if value <= 0.0 {
        return Err(InvalidParameter::NotPositive { name, value });
    }
    Ok(value)
}
