// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Single-dish sensitivity and the radiometer equation.
//!
//! For a source of flux density S observed with a telescope of gain G \[K/Jy\]
//! and system temperature T_sys, summing n_pol polarisations over a bandwidth
//! Δν for a time t,
//!
//! SNR = (G S / T_sys) √(n_pol Δν t)
//!
//! so the time needed to reach a signal-to-noise ratio is
//!
//! t = SNR² T_sys² / ((G S)² n_pol Δν)

#[cfg(test)]
mod tests;

use hifitime::Duration;

use crate::{
    constants::{BOLTZMANN, DEFAULT_NUM_POLS, HPBW_FACTOR, JANSKY, PI, VEL_C},
    error::{check_positive, check_range, InvalidParameter},
};

/// The properties of a single-dish radio telescope relevant to sensitivity.
#[derive(Debug, Clone, PartialEq)]
pub struct TelescopeParams {
    name: String,
    /// \[metres\]
    diameter: f64,
    /// \[Hz\]
    frequency: f64,
    /// \[Hz\]
    bandwidth: f64,
    aperture_efficiency: f64,
    /// \[K\]
    system_temperature: f64,
    num_pols: u8,
}

impl TelescopeParams {
    /// Create a new set of telescope parameters. All quantities must be
    /// positive and the aperture efficiency must be in `(0, 1]`. The number of
    /// polarisations summed (`None` means 2) must be 1 or 2.
    pub fn new<S: Into<String>>(
        name: S,
        diameter_m: f64,
        frequency_hz: f64,
        bandwidth_hz: f64,
        aperture_efficiency: f64,
        system_temperature_k: f64,
        num_pols: Option<u8>,
    ) -> Result<TelescopeParams, InvalidParameter> {
        let diameter = check_positive("Diameter [m]", diameter_m)?;
        let frequency = check_positive("Frequency [Hz]", frequency_hz)?;
        let bandwidth = check_positive("Bandwidth [Hz]", bandwidth_hz)?;
        let aperture_efficiency = check_positive("Aperture efficiency", aperture_efficiency)?;
        let aperture_efficiency = check_range("Aperture efficiency", aperture_efficiency, 0.0, 1.0)?;
        let system_temperature = check_positive("System temperature [K]", system_temperature_k)?;
        let num_pols = match num_pols.unwrap_or(DEFAULT_NUM_POLS) {
            n @ (1 | 2) => n,
            n => return Err(InvalidParameter::NumPols(n)),
        };

        Ok(TelescopeParams {
            name: name.into(),
            diameter,
            frequency,
            bandwidth,
            aperture_efficiency,
            system_temperature,
            num_pols,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    pub fn aperture_efficiency(&self) -> f64 {
        self.aperture_efficiency
    }

    pub fn system_temperature(&self) -> f64 {
        self.system_temperature
    }

    pub fn num_pols(&self) -> u8 {
        self.num_pols
    }

    /// The collecting area of the dish scaled by the aperture efficiency
    /// \[m^2\].
    pub fn effective_area(&self) -> f64 {
        self.aperture_efficiency * PI * (self.diameter / 2.0).powi(2)
    }

    /// The telescope gain \[K/Jy\].
    pub fn gain(&self) -> f64 {
        self.effective_area() / (2.0 * BOLTZMANN) * JANSKY
    }

    /// The system-equivalent flux density \[Jy\].
    pub fn sefd(&self) -> f64 {
        self.system_temperature / self.gain()
    }

    /// The approximate half-power beam width at the observing frequency
    /// \[radians\].
    pub fn half_power_beam_width(&self) -> f64 {
        HPBW_FACTOR * VEL_C / (self.frequency * self.diameter)
    }

    /// The signal-to-noise ratio reached on a source after integrating for
    /// some time.
    pub fn snr(&self, flux_density_jy: f64, integration_time: Duration) -> f64 {
        self.gain() * flux_density_jy / self.system_temperature
            * (self.num_pols as f64 * self.bandwidth * integration_time.to_seconds()).sqrt()
    }
}

/// Get the integration time needed to detect a source of the given flux
/// density with the target signal-to-noise ratio. Both must be positive.
pub fn integration_time(
    telescope: &TelescopeParams,
    flux_density_jy: f64,
    snr: f64,
) -> Result<Duration, InvalidParameter> {
    let flux_density = check_positive("Flux density [Jy]", flux_density_jy)?;
    let snr = check_positive("Signal-to-noise ratio", snr)?;

    let signal = telescope.gain() * flux_density;
    let seconds = (snr * telescope.system_temperature).powi(2)
        / (signal.powi(2) * telescope.num_pols as f64 * telescope.bandwidth);
    Ok(Duration::from_seconds(seconds))
}
