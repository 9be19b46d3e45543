// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Sidereal time.
//!
//! Greenwich mean sidereal time is computed with the IAU 1982 expression as
//! given by Meeus (Astronomical Algorithms, 2nd ed., eq. 12.4):
//!
//! GMST = 280.46061837° + 360.98564736629° D + 0.000387933° T² − T³ / 38710000
//!
//! where D is the number of UT1 days since J2000.0 and T = D / 36525. UT1 is
//! UTC + DUT1.
//!
//! `marlu::precession::get_lmst` is the IAU 2006 alternative; the tests check
//! that the two stay close.

use hifitime::{Duration, Epoch};

use crate::constants::{J2000_JD, JULIAN_CENTURY_DAYS, MJD_TO_JD, TAU};

/// Get the Greenwich mean sidereal time \[radians, `[0, 2π)`\] at a UTC epoch.
pub fn gmst_rad(epoch: Epoch, dut1: Duration) -> f64 {
    let jd_ut1 = (epoch + dut1).to_mjd_utc_days() + MJD_TO_JD;
    let d = jd_ut1 - J2000_JD;
    let t = d / JULIAN_CENTURY_DAYS;
    // Do the large term modulo a full turn first to keep precision.
    let rotation = (360.98564736629 * d).rem_euclid(360.0);
    let gmst_deg = 280.46061837 + rotation + 0.000387933 * t * t - t * t * t / 38710000.0;
    gmst_deg.to_radians().rem_euclid(TAU)
}

/// Get the local mean sidereal time \[radians, `[0, 2π)`\] at a UTC epoch for
/// an (east-positive) longitude.
pub fn lmst_rad(longitude_rad: f64, epoch: Epoch, dut1: Duration) -> f64 {
    (gmst_rad(epoch, dut1) + longitude_rad).rem_euclid(TAU)
}
