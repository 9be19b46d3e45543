// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Positions on the sky and on the Earth, and the altitude of a fixed source
//! as seen from a site over the course of a day.
//!
//! No precession, nutation, aberration or refraction corrections are applied;
//! source coordinates are used as given.

mod altitude;
mod sidereal;

pub use altitude::{altitude_over_day, AltitudeCurve, AltitudeSample, ObservationWindow};
pub use sidereal::{gmst_rad, lmst_rad};

use marlu::RADec;

use crate::error::{check_positive, check_range, InvalidParameter};

/// A fixed celestial source.
#[derive(Debug, Clone)]
pub struct Source {
    name: String,
    radec: RADec,
    /// \[Jy\]
    flux_density: Option<f64>,
}

impl Source {
    /// Create a new source. The right ascension must be in `[0, 360)` degrees
    /// and the declination in `[-90, 90]` degrees. If a flux density is given,
    /// it must be positive.
    pub fn new<S: Into<String>>(
        name: S,
        ra_deg: f64,
        dec_deg: f64,
        flux_density_jy: Option<f64>,
    ) -> Result<Source, InvalidParameter> {
        let ra_deg = check_range("Right ascension", ra_deg, 0.0, 360.0)?;
        if ra_deg >= 360.0 {
            return Err(InvalidParameter::OutOfRange {
                name: "Right ascension",
                value: ra_deg,
                min: 0.0,
                max: 360.0,
            });
        }
        let dec_deg = check_range("Declination", dec_deg, -90.0, 90.0)?;
        let flux_density = flux_density_jy
            .map(|s| check_positive("Flux density", s))
            .transpose()?;

        Ok(Source {
            name: name.into(),
            radec: RADec::from_degrees(ra_deg, dec_deg),
            flux_density,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn radec(&self) -> RADec {
        self.radec
    }

    pub fn ra_deg(&self) -> f64 {
        self.radec.ra.to_degrees()
    }

    pub fn dec_deg(&self) -> f64 {
        self.radec.dec.to_degrees()
    }

    /// The flux density at the observing frequency \[Jy\], if known.
    pub fn flux_density(&self) -> Option<f64> {
        self.flux_density
    }
}

/// The location of a telescope on the Earth. Longitudes are east-positive.
#[derive(Debug, Clone, PartialEq)]
pub struct Site {
    name: String,
    latitude_rad: f64,
    longitude_rad: f64,
}

impl Site {
    /// Create a new site. The latitude must be in `[-90, 90]` degrees and the
    /// longitude in `[-180, 180]` degrees.
    pub fn new<S: Into<String>>(
        name: S,
        latitude_deg: f64,
        longitude_deg: f64,
    ) -> Result<Site, InvalidParameter> {
        let latitude_deg = check_range("Latitude", latitude_deg, -90.0, 90.0)?;
        let longitude_deg = check_range("Longitude", longitude_deg, -180.0, 180.0)?;
        Ok(Site {
            name: name.into(),
            latitude_rad: latitude_deg.to_radians(),
            longitude_rad: longitude_deg.to_radians(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn latitude_rad(&self) -> f64 {
        self.latitude_rad
    }

    pub fn longitude_rad(&self) -> f64 {
        self.longitude_rad
    }

    pub fn latitude_deg(&self) -> f64 {
        self.latitude_rad.to_degrees()
    }

    pub fn longitude_deg(&self) -> f64 {
        self.longitude_rad.to_degrees()
    }
}
