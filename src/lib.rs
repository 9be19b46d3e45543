// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Observation planning for single-dish radio telescopes: the altitude of a fixed
source over a day, and the integration time needed to detect it.
 */

mod cli;
pub mod constants;
pub mod coord;
mod error;
pub(crate) mod params;
pub mod radiometer;
pub(crate) mod unit_parsing;

// Re-exports.
pub use cli::{Obsplan, ObsplanError};
pub use coord::{
    altitude_over_day, AltitudeCurve, AltitudeSample, ObservationWindow, Site, Source,
};
pub use error::InvalidParameter;
pub use radiometer::{integration_time, TelescopeParams};
