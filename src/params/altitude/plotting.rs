// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code to plot the altitude of a source over a day.

use std::path::Path;

use chrono::NaiveDate;
use log::debug;
use plotters::prelude::*;
use thiserror::Error;

use crate::coord::AltitudeCurve;

/// The number of X pixels on the plots.
const X_PIXELS: u32 = 1600;
/// The number of Y pixels on the plots.
const Y_PIXELS: u32 = 900;

pub(super) fn plot_altitude(
    curve: &AltitudeCurve,
    source_name: &str,
    site_name: &str,
    date: NaiveDate,
    elevation_limit_deg: f64,
    output: &Path,
) -> Result<(), DrawError> {
    debug!("Plotting {} samples to {}", curve.samples().len(), output.display());

    let root_area = BitMapBackend::new(output, (X_PIXELS, Y_PIXELS)).into_drawing_area();
    root_area
        .fill(&WHITE)
        .map_err(|e| DrawError::Plotters(Box::new(e)))?;

    let mut cc = ChartBuilder::on(&root_area)
        .caption(
            format!("Altitude of {source_name} on {date}"),
            ("sans-serif", 40),
        )
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(80)
        .build_cartesian_2d(0.0..24.0, -90.0..90.0)
        .map_err(|e| DrawError::Plotters(Box::new(e)))?;

    cc.configure_mesh()
        .x_labels(13)
        .y_labels(13)
        .x_desc("Time [hours UTC]")
        .y_desc("Altitude [degrees]")
        .axis_desc_style(("sans-serif", 28))
        .label_style(("sans-serif", 22))
        .draw()
        .map_err(|e| DrawError::Plotters(Box::new(e)))?;

    cc.draw_series(LineSeries::new(
        [(0.0, 0.0), (24.0, 0.0)],
        BLACK.stroke_width(2),
    ))
    .map_err(|e| DrawError::Plotters(Box::new(e)))?
    .label("Horizon")
    .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLACK.stroke_width(2)));

    cc.draw_series(LineSeries::new(
        [(0.0, elevation_limit_deg), (24.0, elevation_limit_deg)],
        RED.stroke_width(2),
    ))
    .map_err(|e| DrawError::Plotters(Box::new(e)))?
    .label(format!("Elevation limit ({elevation_limit_deg}°)"))
    .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.stroke_width(2)));

    let points: Vec<(f64, f64)> = curve
        .samples()
        .iter()
        .map(|s| (s.hours, s.altitude_deg))
        .collect();
    cc.draw_series(LineSeries::new(points.iter().copied(), BLUE.stroke_width(3)))
        .map_err(|e| DrawError::Plotters(Box::new(e)))?
        .label(format!("{source_name} from {site_name}"))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE.stroke_width(3)));
    cc.draw_series(PointSeries::of_element(
        points,
        4,
        BLUE.filled(),
        &|coord, size, style| EmptyElement::at(coord) + Circle::new((0, 0), size, style),
    ))
    .map_err(|e| DrawError::Plotters(Box::new(e)))?;

    cc.configure_series_labels()
        .position(SeriesLabelPosition::LowerRight)
        .label_font(("sans-serif", 22))
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(|e| DrawError::Plotters(Box::new(e)))?;

    root_area
        .present()
        .map_err(|e| DrawError::Plotters(Box::new(e)))?;

    Ok(())
}

#[derive(Error, Debug)]
pub(crate) enum DrawError {
    #[error("{0}")]
    Plotters(Box<dyn std::error::Error>),
}
