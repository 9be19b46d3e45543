// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use hifitime::Duration;

use super::*;

/// The 42-ft telescope at Jodrell Bank, observing at 610 MHz.
fn forty_two_ft(bandwidth_hz: f64, system_temperature: f64) -> TelescopeParams {
    TelescopeParams::new(
        "42-ft",
        12.8,
        610e6,
        bandwidth_hz,
        0.55,
        system_temperature,
        None,
    )
    .unwrap()
}

fn seconds(t: &TelescopeParams, flux: f64, snr: f64) -> f64 {
    integration_time(t, flux, snr).unwrap().to_seconds()
}

#[test]
fn test_sensitivity_of_42ft() {
    let t = forty_two_ft(10e6, 130.0);
    assert_eq!(t.num_pols(), 2);
    assert_relative_eq!(t.effective_area(), 70.7738, max_relative = 1e-5);
    assert_relative_eq!(t.gain(), 0.025630, max_relative = 1e-4);
    assert_relative_eq!(t.sefd(), 130.0 / t.gain(), max_relative = 1e-12);
    // 1.22 λ/D with λ ≈ 0.49 m.
    assert_relative_eq!(
        t.half_power_beam_width().to_degrees(),
        2.6839,
        max_relative = 1e-4
    );
}

#[test]
fn test_integration_time_for_vela_pulsar() {
    let t = forty_two_ft(10e6, 130.0);
    // t = SNR² Tsys² / ((G S)² n_pol Δν)
    let g = t.gain();
    let expected = (10.0_f64 * 130.0).powi(2) / ((g * 1.1).powi(2) * 2.0 * 10e6);
    assert_relative_eq!(seconds(&t, 1.1, 10.0), expected, max_relative = 1e-9);
    assert_relative_eq!(seconds(&t, 1.1, 10.0), 106.305, max_relative = 1e-4);
}

#[test]
fn test_integration_time_reaches_target_snr() {
    let t = forty_two_ft(10e6, 130.0);
    let time = integration_time(&t, 0.25, 7.5).unwrap();
    assert_relative_eq!(t.snr(0.25, time), 7.5, max_relative = 1e-6);
}

#[test]
fn test_halving_bandwidth_doubles_integration_time() {
    let full = seconds(&forty_two_ft(10e6, 130.0), 1.1, 10.0);
    let half = seconds(&forty_two_ft(5e6, 130.0), 1.1, 10.0);
    assert_relative_eq!(half / full, 2.0, max_relative = 1e-9);
}

#[test]
fn test_doubling_tsys_quadruples_integration_time() {
    let cold = seconds(&forty_two_ft(10e6, 130.0), 1.1, 10.0);
    let hot = seconds(&forty_two_ft(10e6, 260.0), 1.1, 10.0);
    assert_relative_eq!(hot / cold, 4.0, max_relative = 1e-9);
}

#[test]
fn test_doubling_snr_quadruples_integration_time() {
    let t = forty_two_ft(10e6, 130.0);
    let ratio = seconds(&t, 1.1, 20.0) / seconds(&t, 1.1, 10.0);
    assert_relative_eq!(ratio, 4.0, max_relative = 1e-9);
}

#[test]
fn test_single_pol_doubles_integration_time() {
    let dual = forty_two_ft(10e6, 130.0);
    let single = TelescopeParams::new("42-ft", 12.8, 610e6, 10e6, 0.55, 130.0, Some(1)).unwrap();
    let ratio = seconds(&single, 1.1, 10.0) / seconds(&dual, 1.1, 10.0);
    assert_relative_eq!(ratio, 2.0, max_relative = 1e-9);
}

#[test]
fn test_snr_grows_with_root_time() {
    let t = forty_two_ft(10e6, 130.0);
    let one = t.snr(1.0, Duration::from_seconds(100.0));
    let four = t.snr(1.0, Duration::from_seconds(400.0));
    assert_relative_eq!(four / one, 2.0, max_relative = 1e-9);
    assert_abs_diff_eq!(t.snr(1.0, Duration::from_seconds(0.0)), 0.0);
}

#[test]
fn test_invalid_telescope_params() {
    let new = |d, f, bw, eta, tsys, npol| TelescopeParams::new("t", d, f, bw, eta, tsys, npol);

    assert!(matches!(
        new(-12.8, 610e6, 10e6, 0.55, 130.0, None),
        Err(InvalidParameter::NotPositive { .. })
    ));
    assert!(matches!(
        new(0.0, 610e6, 10e6, 0.55, 130.0, None),
        Err(InvalidParameter::NotPositive { .. })
    ));
    assert!(matches!(
        new(12.8, 0.0, 10e6, 0.55, 130.0, None),
        Err(InvalidParameter::NotPositive { .. })
    ));
    assert!(matches!(
        new(12.8, 610e6, 0.0, 0.55, 130.0, None),
        Err(InvalidParameter::NotPositive { .. })
    ));
    assert!(matches!(
        new(12.8, 610e6, 10e6, 0.0, 130.0, None),
        Err(InvalidParameter::NotPositive { .. })
    ));
    assert!(matches!(
        new(12.8, 610e6, 10e6, 1.2, 130.0, None),
        Err(InvalidParameter::OutOfRange { .. })
    ));
    assert!(matches!(
        new(12.8, 610e6, 10e6, 0.55, -4.0, None),
        Err(InvalidParameter::NotPositive { .. })
    ));
    assert!(matches!(
        new(12.8, 610e6, f64::NAN, 0.55, 130.0, None),
        Err(InvalidParameter::NotFinite { .. })
    ));
    assert!(matches!(
        new(12.8, 610e6, 10e6, 0.55, 130.0, Some(0)),
        Err(InvalidParameter::NumPols(0))
    ));
    assert!(matches!(
        new(12.8, 610e6, 10e6, 0.55, 130.0, Some(4)),
        Err(InvalidParameter::NumPols(4))
    ));
    assert!(new(12.8, 610e6, 10e6, 1.0, 130.0, Some(1)).is_ok());
}

#[test]
fn test_invalid_integration_inputs() {
    let t = forty_two_ft(10e6, 130.0);
    assert!(matches!(
        integration_time(&t, 1.1, 0.0),
        Err(InvalidParameter::NotPositive { .. })
    ));
    assert!(matches!(
        integration_time(&t, 1.1, -3.0),
        Err(InvalidParameter::NotPositive { .. })
    ));
    assert!(matches!(
        integration_time(&t, 0.0, 10.0),
        Err(InvalidParameter::NotPositive { .. })
    ));
    assert!(matches!(
        integration_time(&t, f64::INFINITY, 10.0),
        Err(InvalidParameter::NotFinite { .. })
    ));
}
