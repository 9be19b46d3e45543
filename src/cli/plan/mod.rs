// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

#[cfg(test)]
mod tests;

use std::path::PathBuf;

use clap::Parser;
use log::{debug, info, trace};
use serde::{Deserialize, Serialize};

use super::{
    altitude::{parse_plot_file, ELEVATION_LIMIT_HELP},
    common::{SiteArgs, SourceArgs, TelescopeArgs, WindowArgs, ARG_FILE_HELP},
    integration_time::parse_integration_time_args,
};
use crate::{
    cli::common::display_warnings,
    constants::DEFAULT_ELEVATION_LIMIT_DEG,
    error::check_range,
    params::{AltitudeParams, PlanParams},
    ObsplanError,
};

#[derive(Parser, Debug, Clone, Default, Serialize, Deserialize)]
pub(super) struct PlanArgs {
    #[clap(name = "ARGUMENTS_FILE", help = ARG_FILE_HELP.as_str(), parse(from_os_str))]
    pub(super) args_file: Option<PathBuf>,

    /// The signal-to-noise ratio to reach.
    #[clap(long)]
    pub(super) snr: Option<f64>,

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

    #[clap(flatten)]
    #[serde(rename = "telescope")]
    #[serde(default)]
    pub(super) telescope_args: TelescopeArgs,
}

impl PlanArgs {
    /// Both command-line and file arguments overlap in terms of what is
    /// available; this function consolidates everything that was specified into
    /// a single struct. Where applicable, it will prefer CLI parameters over
    /// those in the file.
    pub(super) fn merge(self) -> Result<PlanArgs, ObsplanError> {
        debug!("Merging command-line arguments with the argument file");

        let cli_args = self;

        if let Some(arg_file) = cli_args.args_file {
            // Read in the file arguments. Ensure all of the file args are
            // accounted for by pattern matching.
            let PlanArgs {
                args_file: _,
                snr,
                elevation_limit,
                output,
                no_plot,
                source_args,
                site_args,
                window_args,
                telescope_args,
            } = unpack_arg_file!(arg_file);

            // Merge all the arguments, preferring the CLI args when available.
            Ok(PlanArgs {
                args_file: None,
                snr: cli_args.snr.or(snr),
                elevation_limit: cli_args.elevation_limit.or(elevation_limit),
                output: cli_args.output.or(output),
                no_plot: cli_args.no_plot || no_plot,
                source_args: cli_args.source_args.merge(source_args),
                site_args: cli_args.site_args.merge(site_args),
                window_args: cli_args.window_args.merge(window_args),
                telescope_args: cli_args.telescope_args.merge(telescope_args),
            })
        } else {
            Ok(cli_args)
        }
    }

    pub(super) fn parse(self) -> Result<PlanParams, ObsplanError> {
        debug!("{:#?}", self);

        let Self {
            args_file: _,
            snr,
            elevation_limit,
            output,
            no_plot,
            source_args,
            site_args,
            window_args,
            telescope_args,
        } = self;

        let elevation_limit_deg = check_range(
            "Elevation limit",
            elevation_limit.unwrap_or(DEFAULT_ELEVATION_LIMIT_DEG),
            -90.0,
            90.0,
        )?;
        let plot_file = parse_plot_file(&source_args.name(), output, no_plot)?;
        let integration_time_params =
            parse_integration_time_args(snr, &source_args, telescope_args)?;
        let source = source_args.parse()?;
        let site = site_args.parse()?;
        let window = window_args.parse()?;

        display_warnings();

        Ok(PlanParams {
            altitude_params: AltitudeParams {
                source,
                site,
                window,
                elevation_limit_deg,
                plot_file,
            },
            integration_time_params,
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
