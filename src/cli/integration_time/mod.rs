// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.


use std::path::PathBuf;

use clap::Parser;
use log::{debug, info, trace};
use serde::{Deserialize, Serialize};

use super::common::{SourceArgs, TelescopeArgs, ARG_FILE_HELP};
use crate::{
    cli::common::display_warnings, error::check_positive, params::IntegrationTimeParams,
    ObsplanError,
};

#[derive(Parser, Debug, Clone, Default, Serialize, Deserialize)]
pub(super) struct IntegrationTimeArgs {
    #[clap(name = "ARGUMENTS_FILE", help = ARG_FILE_HELP.as_str(), parse(from_os_str))]
    pub(super) args_file: Option<PathBuf>,

    /// The signal-to-noise ratio to reach.
    #[clap(long)]
    pub(super) snr: Option<f64>,

    #[clap(flatten)]
    #[serde(rename = "source")]
    #[serde(default)]
    pub(super) source_args: SourceArgs,

    #[clap(flatten)]
    #[serde(rename = "telescope")]
    #[serde(default)]
    pub(super) telescope_args: TelescopeArgs,
}

impl IntegrationTimeArgs {
    /// Both command-line and file arguments overlap in terms of what is
    /// available; this function consolidates everything that was specified into
    /// a single struct. Where applicable, it will prefer CLI parameters over
    /// those in the file.
    pub(super) fn merge(self) -> Result<IntegrationTimeArgs, ObsplanError> {
        debug!("Merging command-line arguments with the argument file");

        let cli_args = self;

        if let Some(arg_file) = cli_args.args_file {
            let IntegrationTimeArgs {
                args_file: _,
                snr,
                source_args,
                telescope_args,
            } = unpack_arg_file!(arg_file);

            Ok(IntegrationTimeArgs {
                args_file: None,
                snr: cli_args.snr.or(snr),
                source_args: cli_args.source_args.merge(source_args),
                telescope_args: cli_args.telescope_args.merge(telescope_args),
            })
        } else {
            Ok(cli_args)
        }
    }

    pub(super) fn parse(self) -> Result<IntegrationTimeParams, ObsplanError> {
        debug!("{:#?}", self);

        let Self {
            args_file: _,
            snr,
            source_args,
            telescope_args,
        } = self;

        // Only the flux density of the source matters here, so the position
        // isn't required.
        let params = parse_integration_time_args(snr, &source_args, telescope_args)?;

        display_warnings();

        Ok(params)
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

/// Validate everything needed for an integration time. Shared with `plan`.
pub(super) fn parse_integration_time_args(
    snr: Option<f64>,
    source_args: &SourceArgs,
    telescope_args: TelescopeArgs,
) -> Result<IntegrationTimeParams, ObsplanError> {
    let flux_density = source_args.flux_density.ok_or(ObsplanError::MissingArgument(
        "source flux density (--flux-density)",
    ))?;
    let flux_density = check_positive("Flux density [Jy]", flux_density)?;
    let snr = snr.ok_or(ObsplanError::MissingArgument("signal-to-noise ratio (--snr)"))?;
    let snr = check_positive("Signal-to-noise ratio", snr)?;
    let telescope = telescope_args.parse()?;

    Ok(IntegrationTimeParams {
        telescope,
        source_name: source_args.name(),
        flux_density,
        snr,
    })
}
