// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Integration tests.
//!
//! Some help for laying out these tests was taken from:
//! https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Output;
use std::str::from_utf8;

use assert_cmd::{output::OutputError, Command};
use indoc::indoc;
use tempfile::TempDir;

fn obsplan() -> Command {
    Command::cargo_bin("obsplan").unwrap()
}

fn get_cmd_output(result: Result<Output, OutputError>) -> (String, String) {
    let output = match result {
        Ok(o) => o,
        Err(o) => o.as_output().unwrap().clone(),
    };
    (
        from_utf8(&output.stdout).unwrap().to_string(),
        from_utf8(&output.stderr).unwrap().to_string(),
    )
}

fn make_file_in_dir<T: AsRef<Path>, U: AsRef<Path>>(filename: T, dir: U) -> (PathBuf, File) {
    let path = dir.as_ref().join(filename);
    let f = File::create(&path).expect("couldn't make file");
    (path, f)
}

#[rustfmt::skip]
const TELESCOPE_42_FT: [&str; 12] = [
    "--telescope-name", "42-ft",
    "--diameter", "12.8",
    "--freq", "610MHz",
    "--bandwidth", "10MHz",
    "--aperture-efficiency", "0.55",
    "--tsys", "130",
];

#[rustfmt::skip]
const VELA_FROM_JODRELL: [&str; 12] = [
    "--source-name", "B0833-45",
    "--ra", "08:35:20.6",
    "--dec", "-45:10:34.8",
    "--latitude", "53d14m10.5s",
    "--longitude", "-2d18m25.7s",
    "--date", "2024-02-10",
];

#[test]
fn test_help() {
    let cmd = obsplan().arg("--help").ok();
    assert!(cmd.is_ok(), "{:?}", get_cmd_output(cmd));
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("altitude"));
    assert!(stdout.contains("integration-time"));
    assert!(stdout.contains("plan"));

    for sub_command in ["altitude", "integration-time", "plan"] {
        let cmd = obsplan().args([sub_command, "--help"]).ok();
        assert!(cmd.is_ok(), "{:?}", get_cmd_output(cmd));
    }
}

#[test]
fn test_integration_time() {
    let cmd = obsplan()
        .arg("integration-time")
        .args(TELESCOPE_42_FT)
        .args(["--flux-density", "1.1", "--snr", "10"])
        .ok();
    assert!(cmd.is_ok(), "{:?}", get_cmd_output(cmd));
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("1m 46.3s"), "{stdout}");
}

#[test]
fn test_subcommand_alias() {
    let cmd = obsplan()
        .arg("time")
        .args(TELESCOPE_42_FT)
        .args(["--flux-density", "1.1", "--snr", "10"])
        .ok();
    assert!(cmd.is_ok(), "{:?}", get_cmd_output(cmd));
}

#[test]
fn test_invalid_declination_fails() {
    let cmd = obsplan()
        .arg("altitude")
        .args(["--ra", "08:35:20.6", "--dec", "-95"])
        .args(["--latitude", "53.2", "--longitude", "-2.3"])
        .args(["--date", "2024-02-10", "--no-plot"])
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("Error:"), "{stderr}");
}

#[test]
fn test_missing_argument_fails() {
    let cmd = obsplan()
        .arg("integration-time")
        .args(TELESCOPE_42_FT)
        .args(["--flux-density", "1.1"])
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("--snr"), "{stderr}");
}

#[test]
fn test_altitude_without_a_plot() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let cmd = obsplan()
        .current_dir(tmp_dir.path())
        .arg("altitude")
        .args(VELA_FROM_JODRELL)
        .arg("--no-plot")
        .ok();
    assert!(cmd.is_ok(), "{:?}", get_cmd_output(cmd));
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("B0833-45 culminates at"), "{stdout}");
    assert!(!tmp_dir.path().join("B0833-45_altitude.png").exists());
}

#[cfg(feature = "plotting")]
#[test]
fn test_altitude_writes_a_plot() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let plot = tmp_dir.path().join("plots").join("vela.png");
    let cmd = obsplan()
        .arg("altitude")
        .args(VELA_FROM_JODRELL)
        .arg("-o")
        .arg(&plot)
        .ok();
    assert!(cmd.is_ok(), "{:?}", get_cmd_output(cmd));
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("Wrote altitude plot to"), "{stdout}");
    let bytes = std::fs::read(&plot).unwrap();
    assert_eq!(&bytes[..4], b"\x89PNG");
}

#[test]
fn test_dry_run_does_nothing() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let plot = tmp_dir.path().join("vela.png");
    let cmd = obsplan()
        .arg("altitude")
        .args(VELA_FROM_JODRELL)
        .arg("-o")
        .arg(&plot)
        .arg("--dry-run")
        .ok();
    assert!(cmd.is_ok(), "{:?}", get_cmd_output(cmd));
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("Dry run -- exiting now."), "{stdout}");
    assert!(!stdout.contains("culminates"), "{stdout}");
    assert!(!plot.exists());
}

#[test]
fn test_plan_from_args_file_and_save_toml() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let (args_file, mut f) = make_file_in_dir("plan.toml", tmp_dir.path());
    f.write_all(
        indoc! {r#"
            snr = 10.0
            no_plot = true

            [source]
            name = "B0833-45"
            ra = "08:35:20.6"
            dec = "-45:10:34.8"
            flux_density = 1.1

            [site]
            latitude = "53d 14m 10.5s"
            longitude = "-2d 18m 25.7s"

            [window]
            date = "2024-02-10"

            [telescope]
            diameter = 12.8
            freq = "610MHz"
            bandwidth = "10MHz"
            aperture_efficiency = 0.55
            tsys = 130.0
        "#}
        .as_bytes(),
    )
    .unwrap();
    drop(f);

    let saved = tmp_dir.path().join("saved.toml");
    let cmd = obsplan()
        .arg("plan")
        .arg(&args_file)
        .args(["--elevation-limit", "-90"])
        .arg("--save-toml")
        .arg(&saved)
        .ok();
    assert!(cmd.is_ok(), "{:?}", get_cmd_output(cmd));
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("1m 46.3s"), "{stdout}");
    assert!(stdout.contains("B0833-45 culminates at"), "{stdout}");

    // The saved file reproduces the run, including the CLI override.
    let saved_contents = std::fs::read_to_string(&saved).unwrap();
    assert!(saved_contents.contains("elevation_limit = -90.0"));
    let cmd = obsplan().arg("plan").arg(&saved).ok();
    assert!(cmd.is_ok(), "{:?}", get_cmd_output(cmd));
}

#[test]
fn test_args_file_with_plain_numbers() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let (args_file, mut f) = make_file_in_dir("vela.toml", tmp_dir.path());
    f.write_all(
        indoc! {r#"
            no_plot = true

            [source]
            name = "B0833-45"
            ra = 128.8
            dec = -45.17

            [site]
            latitude = 53.24
            longitude = -2.31

            [window]
            date = "2024-02-10"
            interval = 3600
        "#}
        .as_bytes(),
    )
    .unwrap();
    drop(f);

    let cmd = obsplan().arg("altitude").arg(&args_file).ok();
    assert!(cmd.is_ok(), "{:?}", get_cmd_output(cmd));
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("B0833-45 culminates at"), "{stdout}");
}

#[test]
fn test_bad_args_file_extension() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let (args_file, _) = make_file_in_dir("plan.yaml", tmp_dir.path());
    let cmd = obsplan().arg("plan").arg(&args_file).ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("recognised file extension"), "{stderr}");
}
