// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.


use std::path::PathBuf;

use clap::Parser;
use log::{debug, info, trace};
use serde::{Deserialize, Serialize};

use super::common::{SiteArgs, SourceArgs, WindowArgs, ARG_FILE_HELP};
use crate::{
    cli::common::{display_warnings, Warn},
    constants::DEFAULT_ELEVATION_LIMIT_DEG,
    error::check_range,
    params::AltitudeParams,
    ObsplanError,
};

lazy_static::lazy_static! {
    pub(super) static ref ELEVATION_LIMIT_HELP: String =
        format!("The minimum altitude at which the source is considered observable [degrees]. Default: {DEFAULT_ELEVATION_LIMIT_DEG}");
}

#[derive(Parser, Debug, Clone, Default, Serialize, Deserialize)]
pub(super) struct AltitudeArgs {
    #[clap(name = "ARGUMENTS_FILE", help = ARG_FILE_HELP.as_str(), parse(from_os_str))]
    pub(super) args_file: Option<PathBuf>,

    #[clap(long, allow_hyphen_values = true, help = ELEVATION_LIMIT_HELP.as_str())]
    pub(super) elevation_limit: Option<f64>,

    /// The path to the altitude plot (PNG). The default is
    /// "<source name>_altitude.png".
    #[clap(short = 'o', long, parse(from_os_str), help_heading = "OUTPUT FILES")]
    pub(super) output: Option<PathBuf>,

    /// Don't plot the altitudes; only report them.
    #[clap(long, help_heading = "OUTPUT FILES")]
    #[serde(default)]
    pub(super) no_plot: bool,

    #[clap(flatten)]
    #[serde(rename = "source")]
    #[serde(default)]
    pub(super) source_args: SourceArgs,

    #[clap(flatten)]
    #[serde(rename = "site")]
    #[serde(default)]
    pub(super) site_args: SiteArgs,

    #[clap(flatten)]
    #[serde(rename = "window")]
    #[serde(default)]
    pub(super) window_args: WindowArgs,
}

impl AltitudeArgs {
    /// Both command-line and file arguments overlap in terms of what is
    /// available; this function consolidates everything that was specified into
    /// a single struct. Where applicable, it will prefer CLI parameters over
    /// those in the file.
    ///
    /// This function should only ever merge arguments, and not try to make
    /// sense of them.
    pub(super) fn merge(self) -> Result<AltitudeArgs, ObsplanError> {
        debug!("Merging command-line arguments with the argument file");

        let cli_args = self;

        if let Some(arg_file) = cli_args.args_file {
            // Read in the file arguments. Ensure all of the file args are
            // accounted for by pattern matching.
            let AltitudeArgs {
                args_file: _,
                elevation_limit,
                output,
                no_plot,
                source_args,
                site_args,
                window_args,
            } = unpack_arg_file!(arg_file);

            // Merge all the arguments, preferring the CLI args when available.
            Ok(AltitudeArgs {
                args_file: None,
                elevation_limit: cli_args.elevation_limit.or(elevation_limit),
                output: cli_args.output.or(output),
                no_plot: cli_args.no_plot || no_plot,
                source_args: cli_args.source_args.merge(source_args),
                site_args: cli_args.site_args.merge(site_args),
                window_args: cli_args.window_args.merge(window_args),
            })
        } else {
            Ok(cli_args)
        }
    }

    pub(super) fn parse(self) -> Result<AltitudeParams, ObsplanError> {
        debug!("{:#?}", self);

        let Self {
            args_file: _,
            elevation_limit,
            output,
            no_plot,
            source_args,
            site_args,
            window_args,
        } = self;

        let elevation_limit_deg = check_range(
            "Elevation limit",
            elevation_limit.unwrap_or(DEFAULT_ELEVATION_LIMIT_DEG),
            -90.0,
            90.0,
        )?;
        let plot_file = parse_plot_file(&source_args.name(), output, no_plot)?;
        let source = source_args.parse()?;
        let site = site_args.parse()?;
        let window = window_args.parse()?;

        display_warnings();

        Ok(AltitudeParams {
            source,
            site,
            window,
            elevation_limit_deg,
            plot_file,
        })
    }

    pub(super) fn run(self, dry_run: bool) -> Result<(), ObsplanError> {
        debug!("Converting arguments into parameters");
        trace!("{:#?}", self);
        let params = self.parse()?;

        if dry_run {
            info!("Dry run -- exiting now.");
            return Ok(());
        }

        params.run()?;
        Ok(())
    }
}

/// Work out where the altitude plot goes, if anywhere. Without the "plotting"
/// feature, no plot is ever made.
pub(super) fn parse_plot_file(
    source_name: &str,
    output: Option<PathBuf>,
    no_plot: bool,
) -> Result<Option<PathBuf>, ObsplanError> {
    if no_plot {
        return Ok(None);
    }

    let output = output.unwrap_or_else(|| default_plot_file(source_name));
    match output.extension().and_then(|e| e.to_str()) {
        Some(e) if e.eq_ignore_ascii_case("png") => (),
        _ => {
            return Err(ObsplanError::InvalidParameter(format!(
                "The altitude plot must be a PNG file, but got '{}'",
                output.display()
            )))
        }
    }

    if cfg!(feature = "plotting") {
        Ok(Some(output))
    } else {
        format!(
            "obsplan was not compiled with the \"plotting\" feature; {} won't be written",
            output.display()
        )
        .warn();
        Ok(None)
    }
}

/// "<source name>_altitude.png", with characters that are awkward in
/// filenames replaced.
fn default_plot_file(source_name: &str) -> PathBuf {
    let stem: String = source_name
        .chars()
        .map(|c| {
            if c.is_whitespace() || matches!(c, '/' | '\\' | ':') {
                '_'
            } else {
                c
            }
        })
        .collect();
    PathBuf::from(format!("{stem}_altitude.png"))
}
