//! SVG rendering of a sampled orbit with plotters.
//!
//! The figure shows the orbit as a connected line, the central body as a
//! filled marker at the origin, labelled axes in metres, grid lines and a
//! legend. Both axes share the same metres-per-pixel scale so ellipses keep
//! their true shape.

use std::fs;
use std::ops::Range;
use std::path::Path;

use kepler_orbits::{Bounds, OrbitPath};
use plotters::coord::Shift;
use plotters::prelude::*;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Title used when the caller does not supply one.
pub const DEFAULT_TITLE: &str = "Keplerian Orbit";

const MARGIN: u32 = 20;
const X_LABEL_AREA: u32 = 50;
const Y_LABEL_AREA: u32 = 90;
const CAPTION_FONT_SIZE: u32 = 24;
const LABEL_FONT_SIZE: u32 = 14;
const STAR_RADIUS: u32 = 8;
const ORBIT_COLOR: RGBColor = RGBColor(31, 119, 180);
const STAR_COLOR: RGBColor = RGBColor(255, 200, 0);

/// Canvas and legend settings.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotStyle {
    pub width: u32,
    pub height: u32,
    /// Blank margin around the orbit as a fraction of its extent.
    pub padding_fraction: f64,
    /// Legend entry for the marker at the origin.
    pub star_label: String,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            padding_fraction: 0.05,
            star_label: "Star (Sun)".to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to prepare output: {0}")]
    Io(#[from] std::io::Error),
    #[error("drawing failed: {0}")]
    Drawing(String),
    #[error("orbit path has no finite points to draw")]
    EmptyPath,
    #[error("coordinate sequences differ in length: {xs} x values, {ys} y values")]
    LengthMismatch { xs: usize, ys: usize },
}

impl<E> From<DrawingAreaErrorKind<E>> for RenderError
where
    E: std::error::Error + Send + Sync,
{
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        RenderError::Drawing(err.to_string())
    }
}

/// Render `path` to an SVG file at `output`, creating parent directories.
pub fn render_orbit(
    path: &OrbitPath,
    title: &str,
    output: &Path,
    style: &PlotStyle,
) -> Result<(), RenderError> {
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let root = SVGBackend::new(output, (style.width, style.height)).into_drawing_area();
    draw_orbit(&root, path, title, style)?;
    info!(points = path.len(), "rendered orbit to {}", output.display());
    Ok(())
}

/// Render `path` and return the SVG document.
pub fn render_orbit_to_string(
    path: &OrbitPath,
    title: &str,
    style: &PlotStyle,
) -> Result<String, RenderError> {
    let mut buffer = String::new();
    {
        let root = SVGBackend::with_string(&mut buffer, (style.width, style.height))
            .into_drawing_area();
        draw_orbit(&root, path, title, style)?;
    }
    Ok(buffer)
}

/// Render separate x and y coordinate sequences.
pub fn render_xy(
    xs: &[f64],
    ys: &[f64],
    title: &str,
    output: &Path,
    style: &PlotStyle,
) -> Result<(), RenderError> {
    if xs.len() != ys.len() {
        return Err(RenderError::LengthMismatch {
            xs: xs.len(),
            ys: ys.len(),
        });
    }
    render_orbit(&OrbitPath::from_xy(xs, ys), title, output, style)
}

/// Axis ranges that cover `bounds` (plus padding) with the same data-units
/// per pixel on both axes for a plotting area of `plot_pixels`.
///
/// The tighter axis is widened around its centre; the other keeps its padded
/// extent.
pub fn equal_aspect_ranges(
    bounds: &Bounds,
    plot_pixels: (u32, u32),
    padding_fraction: f64,
) -> (Range<f64>, Range<f64>) {
    let cx = 0.5 * (bounds.x_min + bounds.x_max);
    let cy = 0.5 * (bounds.y_min + bounds.y_max);

    let fallback = bounds.width().max(bounds.height());
    let fallback = if fallback > 0.0 { fallback } else { 1.0 };
    let span = |s: f64| if s > 0.0 { s } else { fallback };
    let pad = 1.0 + 2.0 * padding_fraction.max(0.0);
    let span_x = span(bounds.width()) * pad;
    let span_y = span(bounds.height()) * pad;

    let px = plot_pixels.0.max(1) as f64;
    let py = plot_pixels.1.max(1) as f64;
    let units_per_pixel = (span_x / px).max(span_y / py);
    let half_x = 0.5 * units_per_pixel * px;
    let half_y = 0.5 * units_per_pixel * py;

    (cx - half_x..cx + half_x, cy - half_y..cy + half_y)
}

fn draw_orbit<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    path: &OrbitPath,
    title: &str,
    style: &PlotStyle,
) -> Result<(), RenderError> {
    let mut bounds = path.bounds().ok_or(RenderError::EmptyPath)?;
    bounds.include(0.0, 0.0);

    let finite: Vec<(f64, f64)> = path
        .points()
        .iter()
        .filter(|p| p.x_m.is_finite() && p.y_m.is_finite())
        .map(|p| (p.x_m, p.y_m))
        .collect();
    if finite.len() < path.len() {
        warn!(
            dropped = path.len() - finite.len(),
            "skipping non-finite orbit samples; eccentricity is probably >= 1"
        );
    }

    root.fill(&WHITE)?;
    let area = root.titled(title, ("sans-serif", CAPTION_FONT_SIZE))?;
    let (width, height) = area.dim_in_pixel();
    let plot_pixels = (
        width.saturating_sub(2 * MARGIN + Y_LABEL_AREA),
        height.saturating_sub(2 * MARGIN + X_LABEL_AREA),
    );
    let (x_range, y_range) = equal_aspect_ranges(&bounds, plot_pixels, style.padding_fraction);
    debug!(?x_range, ?y_range, ?plot_pixels, "orbit view");

    let mut chart = ChartBuilder::on(&area)
        .margin(MARGIN)
        .x_label_area_size(X_LABEL_AREA)
        .y_label_area_size(Y_LABEL_AREA)
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .x_desc("x (m)")
        .y_desc("y (m)")
        .label_style(("sans-serif", LABEL_FONT_SIZE))
        .x_labels(7)
        .y_labels(7)
        .x_label_formatter(&|v| format!("{v:.2e}"))
        .y_label_formatter(&|v| format!("{v:.2e}"))
        .draw()?;

    chart
        .draw_series(LineSeries::new(finite, ORBIT_COLOR.stroke_width(2)))?
        .label("Orbit")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], ORBIT_COLOR.stroke_width(2)));

    chart
        .draw_series(std::iter::once(Circle::new(
            (0.0, 0.0),
            STAR_RADIUS,
            STAR_COLOR.filled(),
        )))?
        .label(style.star_label.as_str())
        .legend(|(x, y)| Circle::new((x + 10, y), STAR_RADIUS / 2 + 1, STAR_COLOR.filled()));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .label_font(("sans-serif", LABEL_FONT_SIZE))
        .draw()?;

    root.present()?;
    Ok(())
}
