// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::io::Write;

use approx::assert_abs_diff_eq;
use clap::Parser;
use indoc::indoc;
use tempfile::Builder;

use super::*;

/// The full set of arguments, as they'd be kept in a file.
const FORTY_TWO_FT_TOML: &str = indoc! {r#"
    snr = 10.0
    no_plot = true

    [source]
    name = "B0833-45"
    ra = "08:35:20.6"
    dec = "-45:10:34.8"
    flux_density = 1.1

    [site]
    name = "42-ft"
    latitude = "53d 14m 10.5s"
    longitude = "-2d 18m 25.7s"

    [window]
    date = "2024-02-10"
    interval = "30min"

    [telescope]
    name = "42-ft"
    diameter = 12.8
    freq = "610MHz"
    bandwidth = "10MHz"
    aperture_efficiency = 0.55
    tsys = 130.0
"#};

fn args_from_file(contents: &str) -> PlanArgs {
    let mut file = Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    PlanArgs {
        args_file: Some(file.path().to_path_buf()),
        ..Default::default()
    }
    .merge()
    .unwrap()
}

#[test]
fn test_plan_from_args_file() {
    let args = args_from_file(FORTY_TWO_FT_TOML);
    let params = args.parse().unwrap();
    assert_eq!(params.altitude_params.source.name(), "B0833-45");
    assert_eq!(params.altitude_params.site.name(), "42-ft");
    assert!(params.altitude_params.plot_file.is_none());
    assert_eq!(params.integration_time_params.source_name, "B0833-45");
    assert_abs_diff_eq!(params.integration_time_params.flux_density, 1.1);
    assert!(params.run().is_ok());
}

#[test]
fn test_cli_overrides_file() {
    let file_args = args_from_file(FORTY_TWO_FT_TOML);
    #[rustfmt::skip]
    let cli_args = PlanArgs::parse_from([
        "plan",
        "--snr", "5",
        "--tsys", "65",
        "--elevation-limit", "0",
    ]);
    let merged = PlanArgs {
        args_file: None,
        snr: cli_args.snr.or(file_args.snr),
        elevation_limit: cli_args.elevation_limit.or(file_args.elevation_limit),
        output: cli_args.output.or(file_args.output),
        no_plot: cli_args.no_plot || file_args.no_plot,
        source_args: cli_args.source_args.merge(file_args.source_args),
        site_args: cli_args.site_args.merge(file_args.site_args),
        window_args: cli_args.window_args.merge(file_args.window_args),
        telescope_args: cli_args.telescope_args.merge(file_args.telescope_args),
    };
    let params = merged.parse().unwrap();
    assert_abs_diff_eq!(params.integration_time_params.snr, 5.0);
    assert_abs_diff_eq!(params.integration_time_params.telescope.system_temperature(), 65.0);
    assert_abs_diff_eq!(params.altitude_params.elevation_limit_deg, 0.0);
    assert_abs_diff_eq!(params.integration_time_params.telescope.diameter(), 12.8);
}

#[test]
fn test_plan_needs_a_position_and_a_telescope() {
    let mut args = args_from_file(FORTY_TWO_FT_TOML);
    args.source_args.dec = None;
    assert!(matches!(
        args.parse(),
        Err(ObsplanError::MissingArgument(_))
    ));

    let mut args = args_from_file(FORTY_TWO_FT_TOML);
    args.telescope_args.diameter = None;
    assert!(matches!(
        args.parse(),
        Err(ObsplanError::MissingArgument(_))
    ));
}

#[test]
fn test_saved_args_reproduce_the_run() {
    let args = args_from_file(FORTY_TWO_FT_TOML);
    let saved = toml::to_string(&args).unwrap();
    let reloaded = args_from_file(&saved);
    assert_eq!(reloaded.snr, args.snr);
    assert_eq!(reloaded.source_args.ra, args.source_args.ra);
    assert_eq!(reloaded.site_args.longitude, args.site_args.longitude);
    assert_eq!(reloaded.window_args.interval, args.window_args.interval);
    assert_eq!(reloaded.telescope_args.freq, args.telescope_args.freq);
    assert!(reloaded.no_plot);
}
