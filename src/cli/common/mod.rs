// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Common arguments for command-line interfaces. Here, we abstract many aspects
//! of `obsplan`, e.g. the `altitude` and `plan` subcommands both take a source
//! and a site as input, so the same arguments are shared between them.

mod printers;

pub(super) use printers::InfoPrinter;
pub(crate) use printers::{display_warnings, Warn};

use clap::Parser;
use itertools::Itertools;
use serde::{Deserialize, Deserializer, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

use super::ObsplanError;
use crate::{
    constants::DEFAULT_SAMPLE_INTERVAL_S,
    coord::{ObservationWindow, Site, Source},
    radiometer::TelescopeParams,
    unit_parsing::{parse_dms_deg, parse_freq_hz, parse_ra_deg, parse_time_seconds},
};

const DEFAULT_SOURCE_NAME: &str = "source";
const DEFAULT_SITE_NAME: &str = "site";
const DEFAULT_TELESCOPE_NAME: &str = "telescope";

lazy_static::lazy_static! {
    pub(super) static ref ARG_FILE_TYPES_COMMA_SEPARATED: String = ArgFileTypes::iter().join(", ");

    pub(super) static ref ARG_FILE_HELP: String =
        format!("All arguments may be specified in a file. Any CLI arguments override arguments set in the file. Supported formats: {}", *ARG_FILE_TYPES_COMMA_SEPARATED);

    static ref INTERVAL_HELP: String =
        format!("The time between altitude samples. Supported units: s, min, h; plain numbers are seconds. Default: {}min", DEFAULT_SAMPLE_INTERVAL_S / 60.0);
}

#[derive(Debug, Display, EnumIter, EnumString)]
pub(super) enum ArgFileTypes {
    #[strum(serialize = "toml")]
    Toml,
    #[strum(serialize = "json")]
    Json,
}

macro_rules! unpack_arg_file {
    ($arg_file:expr) => ({
        use std::{fs::File, io::Read, str::FromStr};

        use crate::cli::common::{ArgFileTypes, ARG_FILE_TYPES_COMMA_SEPARATED};

        debug!("Attempting to parse argument file {}", $arg_file.display());

        let mut contents = String::new();
        let arg_file_type = $arg_file
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .and_then(|e| ArgFileTypes::from_str(&e).ok());

        match arg_file_type {
            Some(ArgFileTypes::Toml) => {
                debug!("Parsing toml file...");
                let mut fh = File::open(&$arg_file)?;
                fh.read_to_string(&mut contents)?;
                match toml::from_str(&contents) {
                    Ok(p) => p,
                    Err(err) => {
                        return Err(ObsplanError::ArgFile(format!(
                            "Couldn't decode toml structure from {:?}:\n{err}",
                            $arg_file
                        )))
                    }
                }
            }
            Some(ArgFileTypes::Json) => {
                debug!("Parsing json file...");
                let mut fh = File::open(&$arg_file)?;
                fh.read_to_string(&mut contents)?;
                match serde_json::from_str(&contents) {
                    Ok(p) => p,
                    Err(err) => {
                        return Err(ObsplanError::ArgFile(format!(
                            "Couldn't decode json structure from {:?}:\n{err}",
                            $arg_file
                        )))
                    }
                }
            }

            _ => {
                return Err(ObsplanError::ArgFile(format!(
                    "Argument file '{:?}' doesn't have a recognised file extension! Valid extensions are: {}", $arg_file, *ARG_FILE_TYPES_COMMA_SEPARATED)
                ))
            }
        }
    });
}

/// Values that take a unit or a sexagesimal form are kept as strings, but
/// arguments files may also give them as plain numbers.
fn string_or_number<'de, D>(d: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Int(i64),
        Float(f64),
    }

    let value: Option<StringOrNumber> = Deserialize::deserialize(d)?;
    Ok(value.map(|v| match v {
        StringOrNumber::String(s) => s,
        StringOrNumber::Int(i) => i.to_string(),
        StringOrNumber::Float(f) => f.to_string(),
    }))
}

/// Arguments describing a fixed celestial source.
#[derive(Parser, Debug, Clone, Default, Serialize, Deserialize)]
pub(super) struct SourceArgs {
    /// The name of the source. This is used in messages, the plot title and
    /// the default plot filename.
    #[clap(long, help_heading = "SOURCE")]
    #[serde(rename = "name")]
    pub(super) source_name: Option<String>,

    /// The right ascension of the source. Sexagesimal values are hours (e.g.
    /// 08:35:20.6 or 8h35m20.6s); plain numbers are degrees.
    #[clap(long, allow_hyphen_values = true, help_heading = "SOURCE")]
    #[serde(default, deserialize_with = "string_or_number")]
    pub(super) ra: Option<String>,

    /// The declination of the source. Sexagesimal values (e.g. -45:10:34.8 or
    /// -45d10m34.8s) and plain numbers are degrees.
    #[clap(long, allow_hyphen_values = true, help_heading = "SOURCE")]
    #[serde(default, deserialize_with = "string_or_number")]
    pub(super) dec: Option<String>,

    /// The flux density of the source at the observing frequency [Jy].
    #[clap(long, help_heading = "SOURCE")]
    pub(super) flux_density: Option<f64>,
}

impl SourceArgs {
    pub(super) fn merge(self, other: Self) -> Self {
        Self {
            source_name: self.source_name.or(other.source_name),
            ra: self.ra.or(other.ra),
            dec: self.dec.or(other.dec),
            flux_density: self.flux_density.or(other.flux_density),
        }
    }

    pub(super) fn name(&self) -> String {
        self.source_name
            .clone()
            .unwrap_or_else(|| DEFAULT_SOURCE_NAME.to_string())
    }

    pub(super) fn parse(self) -> Result<Source, ObsplanError> {
        let name = self.name();
        let Self {
            source_name: _,
            ra,
            dec,
            flux_density,
        } = self;

        let ra = ra.ok_or(ObsplanError::MissingArgument("source right ascension (--ra)"))?;
        let dec = dec.ok_or(ObsplanError::MissingArgument("source declination (--dec)"))?;
        let source = Source::new(name, parse_ra_deg(&ra)?, parse_dms_deg(&dec)?, flux_density)?;

        let mut printer = InfoPrinter::new(format!("Source: {}", source.name()).into());
        printer.push_block(vec![
            format!("RA:  {:>10.4}° ({ra})", source.ra_deg()).into(),
            format!("Dec: {:>10.4}° ({dec})", source.dec_deg()).into(),
        ]);
        if let Some(s) = source.flux_density() {
            printer.push_line(format!("Flux density: {s} Jy").into());
        }
        printer.display();

        Ok(source)
    }
}

/// Arguments describing the location of a telescope.
#[derive(Parser, Debug, Clone, Default, Serialize, Deserialize)]
pub(super) struct SiteArgs {
    /// The name of the telescope site.
    #[clap(long, help_heading = "SITE")]
    #[serde(rename = "name")]
    pub(super) site_name: Option<String>,

    /// The latitude of the site, north positive [degrees]. Sexagesimal values
    /// are accepted (e.g. 53d14m10.5s or 53:14:10.5).
    #[clap(long, allow_hyphen_values = true, help_heading = "SITE")]
    #[serde(default, deserialize_with = "string_or_number")]
    pub(super) latitude: Option<String>,

    /// The longitude of the site, east positive [degrees]. Sexagesimal values
    /// are accepted (e.g. -2d18m25.7s or -2:18:25.7).
    #[clap(long, allow_hyphen_values = true, help_heading = "SITE")]
    #[serde(default, deserialize_with = "string_or_number")]
    pub(super) longitude: Option<String>,
}

impl SiteArgs {
    pub(super) fn merge(self, other: Self) -> Self {
        Self {
            site_name: self.site_name.or(other.site_name),
            latitude: self.latitude.or(other.latitude),
            longitude: self.longitude.or(other.longitude),
        }
    }

    pub(super) fn parse(self) -> Result<Site, ObsplanError> {
        let Self {
            site_name,
            latitude,
            longitude,
        } = self;

        let latitude = latitude.ok_or(ObsplanError::MissingArgument("site latitude (--latitude)"))?;
        let longitude =
            longitude.ok_or(ObsplanError::MissingArgument("site longitude (--longitude)"))?;
        let site = Site::new(
            site_name.unwrap_or_else(|| DEFAULT_SITE_NAME.to_string()),
            parse_dms_deg(&latitude)?,
            parse_dms_deg(&longitude)?,
        )?;

        let mut printer = InfoPrinter::new(format!("Site: {}", site.name()).into());
        printer.push_block(vec![
            format!("Latitude:  {:>10.4}°", site.latitude_deg()).into(),
            format!("Longitude: {:>10.4}°", site.longitude_deg()).into(),
        ]);
        printer.display();

        Ok(site)
    }
}

/// Arguments describing the day over which altitudes are sampled.
#[derive(Parser, Debug, Clone, Default, Serialize, Deserialize)]
pub(super) struct WindowArgs {
    /// The UTC date to calculate altitudes for (YYYY-MM-DD). The default is
    /// today.
    #[clap(long, help_heading = "OBSERVATION WINDOW")]
    pub(super) date: Option<String>,

    #[clap(long, help = INTERVAL_HELP.as_str(), help_heading = "OBSERVATION WINDOW")]
    #[serde(default, deserialize_with = "string_or_number")]
    pub(super) interval: Option<String>,

    /// The difference UT1 - UTC [seconds]. It must be within [-1, 1]. Default:
    /// 0
    #[clap(long, allow_hyphen_values = true, help_heading = "OBSERVATION WINDOW")]
    pub(super) dut1: Option<f64>,
}

impl WindowArgs {
    pub(super) fn merge(self, other: Self) -> Self {
        Self {
            date: self.date.or(other.date),
            interval: self.interval.or(other.interval),
            dut1: self.dut1.or(other.dut1),
        }
    }

    pub(super) fn parse(self) -> Result<ObservationWindow, ObsplanError> {
        let Self {
            date,
            interval,
            dut1,
        } = self;

        let date = match date {
            Some(d) => d,
            None => {
                let today = chrono::Utc::now().naive_utc().date().to_string();
                format!("No date was specified; using today's UTC date ({today})").warn();
                today
            }
        };
        let interval_s = match interval {
            Some(i) => parse_time_seconds(&i)?,
            None => DEFAULT_SAMPLE_INTERVAL_S,
        };
        let window = ObservationWindow::from_date_str(&date, interval_s, dut1.unwrap_or(0.0))?;

        let mut printer = InfoPrinter::new("Observation window".into());
        printer.push_line(format!("Date: {} (UTC)", window.date()).into());
        printer.push_block(vec![
            format!(
                "{} samples every {} s",
                window.num_samples(),
                window.interval().to_seconds()
            )
            .into(),
            format!("DUT1: {} s", window.dut1().to_seconds()).into(),
        ]);
        printer.display();

        Ok(window)
    }
}

/// Arguments describing a single-dish radio telescope.
#[derive(Parser, Debug, Clone, Default, Serialize, Deserialize)]
pub(super) struct TelescopeArgs {
    /// The name of the telescope.
    #[clap(long, help_heading = "TELESCOPE")]
    #[serde(rename = "name")]
    pub(super) telescope_name: Option<String>,

    /// The diameter of the dish [metres].
    #[clap(long, help_heading = "TELESCOPE")]
    pub(super) diameter: Option<f64>,

    /// The observing frequency. Supported units: Hz, kHz, MHz, GHz; plain
    /// numbers are Hz.
    #[clap(long, help_heading = "TELESCOPE")]
    #[serde(default, deserialize_with = "string_or_number")]
    pub(super) freq: Option<String>,

    /// The observing bandwidth. Supported units: Hz, kHz, MHz, GHz; plain
    /// numbers are Hz.
    #[clap(long, help_heading = "TELESCOPE")]
    #[serde(default, deserialize_with = "string_or_number")]
    pub(super) bandwidth: Option<String>,

    /// The aperture efficiency of the dish, in (0, 1].
    #[clap(long, help_heading = "TELESCOPE")]
    pub(super) aperture_efficiency: Option<f64>,

    /// The system temperature [K].
    #[clap(long, help_heading = "TELESCOPE")]
    pub(super) tsys: Option<f64>,

    /// The number of polarisations summed (1 or 2). Default: 2
    #[clap(long, help_heading = "TELESCOPE")]
    pub(super) num_pols: Option<u8>,
}

impl TelescopeArgs {
    pub(super) fn merge(self, other: Self) -> Self {
        Self {
            telescope_name: self.telescope_name.or(other.telescope_name),
            diameter: self.diameter.or(other.diameter),
            freq: self.freq.or(other.freq),
            bandwidth: self.bandwidth.or(other.bandwidth),
            aperture_efficiency: self.aperture_efficiency.or(other.aperture_efficiency),
            tsys: self.tsys.or(other.tsys),
            num_pols: self.num_pols.or(other.num_pols),
        }
    }

    pub(super) fn parse(self) -> Result<TelescopeParams, ObsplanError> {
        let Self {
            telescope_name,
            diameter,
            freq,
            bandwidth,
            aperture_efficiency,
            tsys,
            num_pols,
        } = self;

        let diameter =
            diameter.ok_or(ObsplanError::MissingArgument("telescope diameter (--diameter)"))?;
        let freq = freq.ok_or(ObsplanError::MissingArgument("observing frequency (--freq)"))?;
        let bandwidth =
            bandwidth.ok_or(ObsplanError::MissingArgument("observing bandwidth (--bandwidth)"))?;
        let aperture_efficiency = aperture_efficiency.ok_or(ObsplanError::MissingArgument(
            "aperture efficiency (--aperture-efficiency)",
        ))?;
        let tsys = tsys.ok_or(ObsplanError::MissingArgument("system temperature (--tsys)"))?;

        let telescope = TelescopeParams::new(
            telescope_name.unwrap_or_else(|| DEFAULT_TELESCOPE_NAME.to_string()),
            diameter,
            parse_freq_hz(&freq)?,
            parse_freq_hz(&bandwidth)?,
            aperture_efficiency,
            tsys,
            num_pols,
        )?;

        let mut printer = InfoPrinter::new(format!("Telescope: {}", telescope.name()).into());
        printer.push_block(vec![
            format!("Diameter: {} m", telescope.diameter()).into(),
            format!("Aperture efficiency: {}", telescope.aperture_efficiency()).into(),
            format!("System temperature: {} K", telescope.system_temperature()).into(),
        ]);
        printer.push_block(vec![
            format!("Frequency: {} MHz", telescope.frequency() / 1e6).into(),
            format!(
                "Bandwidth: {} MHz, {} polarisation(s)",
                telescope.bandwidth() / 1e6,
                telescope.num_pols()
            )
            .into(),
        ]);
        printer.push_block(vec![
            format!("Effective area: {:.3} m²", telescope.effective_area()).into(),
            format!("Gain: {:.5} K/Jy", telescope.gain()).into(),
            format!("SEFD: {:.1} Jy", telescope.sefd()).into(),
            format!(
                "Half-power beam width: {:.4}°",
                telescope.half_power_beam_width().to_degrees()
            )
            .into(),
        ]);
        printer.display();

        Ok(telescope)
    }
}
