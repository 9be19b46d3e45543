// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Parameters for each of the `obsplan` calculations.
//!
//! The code here is kind of "mirroring" the code within the `cli` module; the
//! idea is that `cli` is unparsed, user-facing code, whereas parameters have
//! been parsed and validated, and are ready to be used directly.

mod altitude;
mod integration_time;
mod plan;

pub(crate) use altitude::{AltitudeError, AltitudeParams};
pub(crate) use integration_time::IntegrationTimeParams;
pub(crate) use plan::{PlanError, PlanParams};

/// Format a duration in seconds for humans, e.g. "1h 46m 40.0s".
pub(crate) fn pretty_seconds(seconds: f64) -> String {
    let hours = (seconds / 3600.0).floor();
    let minutes = ((seconds - hours * 3600.0) / 60.0).floor();
    let secs = seconds - hours * 3600.0 - minutes * 60.0;
    match (hours > 0.0, minutes > 0.0) {
        (true, _) => format!("{hours}h {minutes}m {secs:.1}s"),
        (false, true) => format!("{minutes}m {secs:.1}s"),
        (false, false) => format!("{secs:.1}s"),
    }
}
