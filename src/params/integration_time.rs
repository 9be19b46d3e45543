// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use hifitime::Duration;
use log::info;

use super::pretty_seconds;
use crate::{
    error::InvalidParameter,
    radiometer::{integration_time, TelescopeParams},
};

pub(crate) struct IntegrationTimeParams {
    pub(crate) telescope: TelescopeParams,

    /// The name of the source being observed.
    pub(crate) source_name: String,

    /// \[Jy\]
    pub(crate) flux_density: f64,

    /// The signal-to-noise ratio to reach.
    pub(crate) snr: f64,
}

impl IntegrationTimeParams {
    pub(crate) fn run(&self) -> Result<Duration, InvalidParameter> {
        let time = integration_time(&self.telescope, self.flux_density, self.snr)?;
        info!(
            "Integration time to detect {} ({} Jy) with SNR {} using {}: {} ({:.3} s)",
            self.source_name,
            self.flux_density,
            self.snr,
            self.telescope.name(),
            pretty_seconds(time.to_seconds()),
            time.to_seconds()
        );
        Ok(time)
    }
}
