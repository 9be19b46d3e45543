// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Useful constants.

All constants *must* be double precision.
 */

pub use std::f64::consts::{PI, TAU};

/// Boltzmann's constant \[J/K\].
pub const BOLTZMANN: f64 = 1.380_649e-23;

/// One Jansky \[W/m^2/Hz\].
pub const JANSKY: f64 = 1e-26;

/// The speed of light in a vacuum \[m/s\].
pub const VEL_C: f64 = 299_792_458.0;

/// The number of seconds in a (solar) day.
pub const DAYSEC: f64 = 86400.0;

/// The length of a mean sidereal day in solar seconds.
pub const SIDEREAL_DAYSEC: f64 = 86164.0905;

/// The Julian date of the J2000.0 epoch (2000-01-01 12:00 TT, treated as UT1
/// for sidereal time purposes).
pub const J2000_JD: f64 = 2451545.0;

/// The offset between a Julian date and a modified Julian date.
pub const MJD_TO_JD: f64 = 2400000.5;

/// The number of days in a Julian century.
pub const JULIAN_CENTURY_DAYS: f64 = 36525.0;

/// The default time between altitude samples \[seconds\].
pub const DEFAULT_SAMPLE_INTERVAL_S: f64 = 30.0 * 60.0;

/// Sources at or above this elevation are considered observable \[degrees\].
pub const DEFAULT_ELEVATION_LIMIT_DEG: f64 = 10.0;

/// The default number of polarisations summed by the receiver.
pub const DEFAULT_NUM_POLS: u8 = 2;

/// The factor relating lambda/D to the half-power beam width of a uniformly
/// illuminated circular aperture (approximate).
pub const HPBW_FACTOR: f64 = 1.22;
