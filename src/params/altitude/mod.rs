// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

#[cfg(feature = "plotting")]
mod plotting;

use std::path::PathBuf;

use log::info;
use thiserror::Error;

use super::pretty_seconds;
use crate::coord::{altitude_over_day, AltitudeCurve, ObservationWindow, Site, Source};

pub(crate) struct AltitudeParams {
    pub(crate) source: Source,
    pub(crate) site: Site,
    pub(crate) window: ObservationWindow,

    /// The altitude a source must reach before it is considered observable
    /// \[degrees\].
    pub(crate) elevation_limit_deg: f64,

    /// Where to write the altitude plot. If this is `None`, no plot is made.
    pub(crate) plot_file: Option<PathBuf>,
}

impl AltitudeParams {
    pub(crate) fn run(&self) -> Result<AltitudeCurve, AltitudeError> {
        let curve = altitude_over_day(&self.source, &self.site, &self.window);

        let culmination = curve.culmination();
        info!(
            "{} culminates at {:.2}° (azimuth {:.2}°) at {}",
            self.source.name(),
            culmination.altitude_deg,
            culmination.azimuth_deg,
            culmination.epoch
        );
        let time_above = curve.time_above(self.elevation_limit_deg);
        if time_above.to_seconds() > 0.0 {
            info!(
                "Time above {}° elevation: {} ({} of {} samples)",
                self.elevation_limit_deg,
                pretty_seconds(time_above.to_seconds()),
                curve
                    .samples()
                    .iter()
                    .filter(|s| s.altitude_deg >= self.elevation_limit_deg)
                    .count(),
                curve.samples().len()
            );
        } else {
            info!(
                "{} never reaches {}° elevation from {} on {}",
                self.source.name(),
                self.elevation_limit_deg,
                self.site.name(),
                self.window.date()
            );
        }

        if let Some(plot_file) = &self.plot_file {
            self.plot(&curve, plot_file)?;
        }

        Ok(curve)
    }

    #[cfg(feature = "plotting")]
    fn plot(&self, curve: &AltitudeCurve, plot_file: &std::path::Path) -> Result<(), AltitudeError> {
        if let Some(parent) = plot_file.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        plotting::plot_altitude(
            curve,
            self.source.name(),
            self.site.name(),
            self.window.date(),
            self.elevation_limit_deg,
            plot_file,
        )?;
        info!("Wrote altitude plot to {}", plot_file.display());
        Ok(())
    }

    #[cfg(not(feature = "plotting"))]
    fn plot(
        &self,
        _curve: &AltitudeCurve,
        _plot_file: &std::path::Path,
    ) -> Result<(), AltitudeError> {
        // Plotting is an optional feature. This is because it doesn't look
        // possible to statically compile the C dependencies needed for
        // plotting.
        Err(AltitudeError::NoPlottingFeature)
    }
}

#[derive(Error, Debug)]
pub(crate) enum AltitudeError {
    #[cfg(not(feature = "plotting"))]
    #[error("obsplan was not compiled with the \"plotting\" feature.\nYou need to compile obsplan from source with this feature to plot altitudes.")]
    NoPlottingFeature,

    #[cfg(feature = "plotting")]
    #[error("Error from the plotters library: {0}")]
    Draw(#[from] plotting::DrawError),

    #[cfg(feature = "plotting")]
    #[error("Couldn't create the directory for the altitude plot: {0}")]
    IO(#[from] std::io::Error),
}
