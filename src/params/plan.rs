// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use log::info;
use thiserror::Error;

use super::{pretty_seconds, AltitudeError, AltitudeParams, IntegrationTimeParams};
use crate::{cli::Warn, error::InvalidParameter};

pub(crate) struct PlanParams {
    pub(crate) altitude_params: AltitudeParams,
    pub(crate) integration_time_params: IntegrationTimeParams,
}

impl PlanParams {
    pub(crate) fn run(&self) -> Result<(), PlanError> {
        let Self {
            altitude_params,
            integration_time_params,
        } = self;

        let curve = altitude_params.run()?;
        let needed = integration_time_params.run()?;

        let available = curve.time_above(altitude_params.elevation_limit_deg);
        if needed <= available {
            info!(
                "The integration time ({}) fits within the {} spent above {}°",
                pretty_seconds(needed.to_seconds()),
                pretty_seconds(available.to_seconds()),
                altitude_params.elevation_limit_deg,
            );
        } else {
            format!(
                "{} needs {} above {}° on {}, but is only up for {}; integrate over multiple days",
                altitude_params.source.name(),
                pretty_seconds(needed.to_seconds()),
                altitude_params.elevation_limit_deg,
                altitude_params.window.date(),
                pretty_seconds(available.to_seconds()),
            )
            .warn();
        }
        crate::cli::display_warnings();

        Ok(())
    }
}

#[derive(Error, Debug)]
pub(crate) enum PlanError {
    #[error(transparent)]
    Altitude(#[from] AltitudeError),

    #[error(transparent)]
    InvalidParameter(#[from] InvalidParameter),
}
