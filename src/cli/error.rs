// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Error type for all obsplan-related errors. This should be the *only* error
//! enum that is publicly visible.

use thiserror::Error;

use crate::{
    error::InvalidParameter,
    params::{AltitudeError, PlanError},
    unit_parsing::UnitParseError,
};

/// The *only* publicly visible error from obsplan.
#[derive(Error, Debug)]
pub enum ObsplanError {
    /// A numeric or textual input that doesn't make sense.
    #[error("{0}")]
    InvalidParameter(String),

    /// A required argument wasn't given on the command line or in the
    /// arguments file.
    #[error("No {0} was specified. Supply it on the command line or in an arguments file.")]
    MissingArgument(&'static str),

    /// An error related to argument files.
    #[error("{0}")]
    ArgFile(String),

    /// An error related to plotting.
    #[error("{0}\n\nIf this is a font problem, try installing fontconfig and a sans-serif font, or use --no-plot.")]
    Plot(String),

    /// A generic error that can't be clarified further, e.g. IO errors.
    #[error("{0}")]
    Generic(String),
}

// When changing the error propagation below, ensure `Self::from(e)` uses the
// correct `e`!

impl From<AltitudeError> for ObsplanError {
    fn from(e: AltitudeError) -> Self {
        let s = e.to_string();
        match e {
            #[cfg(not(feature = "plotting"))]
            AltitudeError::NoPlottingFeature => Self::Generic(s),
            #[cfg(feature = "plotting")]
            AltitudeError::Draw(_) => Self::Plot(s),
            #[cfg(feature = "plotting")]
            AltitudeError::IO(_) => Self::Generic(s),
        }
    }
}

impl From<PlanError> for ObsplanError {
    fn from(e: PlanError) -> Self {
        match e {
            PlanError::Altitude(e) => Self::from(e),
            PlanError::InvalidParameter(e) => Self::from(e),
        }
    }
}

// Library code errors.

impl From<InvalidParameter> for ObsplanError {
    fn from(e: InvalidParameter) -> Self {
        Self::InvalidParameter(e.to_string())
    }
}

impl From<UnitParseError> for ObsplanError {
    fn from(e: UnitParseError) -> Self {
        Self::InvalidParameter(e.to_string())
    }
}

impl From<std::io::Error> for ObsplanError {
    fn from(e: std::io::Error) -> Self {
        Self::Generic(e.to_string())
    }
}
