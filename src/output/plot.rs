// Renders labeled price curves as an SVG line chart: one line per maturity,
// legend keyed by the curve label.

use std::path::Path;

use anyhow::{anyhow, Result};
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::config::OutputConfig;
use crate::models::curve::LabeledCurve;

/// Size and text of the chart
#[derive(Debug, Clone)]
pub struct ChartOptions {
    pub width: u32,
    pub height: u32,
    pub caption: String,
    pub x_desc: String,
    pub y_desc: String,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            caption: "Black-Scholes value by maturity".to_string(),
            x_desc: "Spot".to_string(),
            y_desc: "Option value".to_string(),
        }
    }
}

impl From<&OutputConfig> for ChartOptions {
    fn from(output: &OutputConfig) -> Self {
        Self {
            width: output.width,
            height: output.height,
            caption: output.caption.clone(),
            ..Self::default()
        }
    }
}

/// Draw the curves into an SVG file at `path`.
pub fn render_svg<P: AsRef<Path>>(
    curves: &[LabeledCurve],
    options: &ChartOptions,
    path: P,
) -> Result<()> {
    let root =
        SVGBackend::new(path.as_ref(), (options.width, options.height)).into_drawing_area();
    draw_curves(&root, curves, options)
}

/// Draw the curves and return the SVG document as a string.
pub fn render_svg_string(curves: &[LabeledCurve], options: &ChartOptions) -> Result<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (options.width, options.height))
            .into_drawing_area();
        draw_curves(&root, curves, options)?;
    }
    Ok(svg)
}

fn draw_curves<DB>(
    root: &DrawingArea<DB, Shift>,
    curves: &[LabeledCurve],
    options: &ChartOptions,
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let ((x_min, x_max), (y_min, y_max)) =
        plot_bounds(curves).ok_or_else(|| anyhow!("no curve points to plot"))?;

    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(root)
        .margin(20)
        .caption(&options.caption, ("sans-serif", 30))
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc(options.x_desc.as_str())
        .y_desc(options.y_desc.as_str())
        .draw()?;

    for (idx, labeled) in curves.iter().enumerate() {
        let color = Palette99::pick(idx).to_rgba();
        chart
            .draw_series(std::iter::once(PathElement::new(
                labeled.curve.points.clone(),
                color.stroke_width(2),
            )))?
            .label(labeled.label.as_str())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

/// Axis ranges over every point with 5% vertical padding. `None` when there
/// is nothing to draw.
fn plot_bounds(curves: &[LabeledCurve]) -> Option<((f64, f64), (f64, f64))> {
    let mut points = curves
        .iter()
        .flat_map(|c| c.curve.points.iter().copied())
        .peekable();
    points.peek()?;

    let (mut x_min, mut x_max) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut y_min, mut y_max) = (f64::INFINITY, f64::NEG_INFINITY);
    for (x, y) in points {
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }

    if x_max <= x_min {
        x_min -= 0.5;
        x_max += 0.5;
    }

    let padding = ((y_max - y_min) * 0.05).max(1e-6);
    // Don't dip below zero when every value is non-negative
    let y_lo = if y_min >= 0.0 {
        (y_min - padding).max(0.0)
    } else {
        y_min - padding
    };

    Some(((x_min, x_max), (y_lo, y_max + padding)))
}
