// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The altitude of a source sampled over a UTC day.

use chrono::{Datelike, NaiveDate};
use hifitime::{Duration, Epoch};
use log::trace;
use vec1::Vec1;

use super::{lmst_rad, Site, Source};
use crate::{
    constants::DAYSEC,
    error::{check_range, InvalidParameter},
};

/// A UTC calendar day, sampled at a fixed interval starting from midnight. The
/// last sample is strictly before the following midnight.
#[derive(Debug, Clone)]
pub struct ObservationWindow {
    date: NaiveDate,
    start: Epoch,
    interval_s: f64,
    num_samples: usize,
    dut1: Duration,
}

impl ObservationWindow {
    /// Create a new window. The sample interval must be in `[1, 86400]`
    /// seconds and DUT1 (UT1 - UTC) in `[-1, 1]` seconds.
    pub fn new(
        date: NaiveDate,
        interval_s: f64,
        dut1_s: f64,
    ) -> Result<ObservationWindow, InvalidParameter> {
        let interval_s = check_range("Sample interval [s]", interval_s, 1.0, DAYSEC)?;
        let dut1_s = check_range("DUT1 [s]", dut1_s, -1.0, 1.0)?;
        let start = Epoch::from_gregorian_utc_at_midnight(
            date.year(),
            date.month() as u8,
            date.day() as u8,
        );
        // Samples must fall strictly before the next midnight. The small
        // tolerance stops float error from adding a sample at 24:00.
        let num_samples = (DAYSEC / interval_s - 1e-9).ceil() as usize;

        Ok(ObservationWindow {
            date,
            start,
            interval_s,
            num_samples,
            dut1: Duration::from_seconds(dut1_s),
        })
    }

    /// Parse a "YYYY-MM-DD" date and create a new window.
    pub fn from_date_str(
        date: &str,
        interval_s: f64,
        dut1_s: f64,
    ) -> Result<ObservationWindow, InvalidParameter> {
        let parsed = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
            .map_err(|_| InvalidParameter::Date(date.to_string()))?;
        Self::new(parsed, interval_s, dut1_s)
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// UTC midnight at the start of the day.
    pub fn start(&self) -> Epoch {
        self.start
    }

    pub fn interval(&self) -> Duration {
        Duration::from_seconds(self.interval_s)
    }

    pub fn num_samples(&self) -> usize {
        self.num_samples
    }

    pub fn dut1(&self) -> Duration {
        self.dut1
    }

    /// The seconds since midnight of each sample.
    fn offsets_s(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.num_samples).map(|i| i as f64 * self.interval_s)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AltitudeSample {
    /// The UTC time of this sample.
    pub epoch: Epoch,
    /// The hours elapsed since the start of the window (UTC midnight).
    pub hours: f64,
    /// The local mean sidereal time at the site \[radians\].
    pub lmst_rad: f64,
    /// \[degrees\]
    pub altitude_deg: f64,
    /// East of north \[degrees\].
    pub azimuth_deg: f64,
}

/// The samples of a source's altitude over a window.
#[derive(Debug, Clone)]
pub struct AltitudeCurve {
    samples: Vec1<AltitudeSample>,
    interval: Duration,
}

impl AltitudeCurve {
    pub fn samples(&self) -> &Vec1<AltitudeSample> {
        &self.samples
    }

    /// The sample with the greatest altitude. If several samples share it, the
    /// earliest is returned.
    pub fn culmination(&self) -> &AltitudeSample {
        self.samples.iter().fold(self.samples.first(), |best, s| {
            if s.altitude_deg > best.altitude_deg {
                s
            } else {
                best
            }
        })
    }

    /// The amount of time the source spends at or above the elevation limit.
    /// Each sample stands for one interval, except that no sample counts past
    /// the end of the day; the result never exceeds 24 hours.
    pub fn time_above(&self, limit_deg: f64) -> Duration {
        let interval_s = self.interval.to_seconds();
        let seconds: f64 = self
            .samples
            .iter()
            .filter(|s| s.altitude_deg >= limit_deg)
            .map(|s| interval_s.min(DAYSEC - s.hours * 3600.0))
            .sum();
        Duration::from_seconds(seconds)
    }
}

/// Compute the altitude (and azimuth) of a source from a site at every sample
/// time of an observation window.
pub fn altitude_over_day(
    source: &Source,
    site: &Site,
    window: &ObservationWindow,
) -> AltitudeCurve {
    let radec = source.radec();
    let sample = |offset_s: f64| {
        let epoch = window.start + Duration::from_seconds(offset_s);
        let lmst = lmst_rad(site.longitude_rad(), epoch, window.dut1);
        let azel = radec.to_hadec(lmst).to_azel(site.latitude_rad());
        trace!(
            "{epoch}: LMST {:.6} rad, alt {:.4}°, az {:.4}°",
            lmst,
            azel.el.to_degrees(),
            azel.az.to_degrees()
        );
        AltitudeSample {
            epoch,
            hours: offset_s / 3600.0,
            lmst_rad: lmst,
            altitude_deg: azel.el.to_degrees(),
            azimuth_deg: azel.az.to_degrees(),
        }
    };

    let mut offsets = window.offsets_s();
    // There's always at least one sample, because the interval is never
    // longer than a day.
    let mut samples = Vec1::new(sample(offsets.next().unwrap_or(0.0)));
    for offset_s in offsets {
        samples.push(sample(offset_s));
    }

    AltitudeCurve {
        samples,
        interval: window.interval(),
    }
}
