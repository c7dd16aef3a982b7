use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use plotters::coord::Shift;
use plotters::prelude::*;

use super::{image_kind, ImageKind, RenderOptions};

const GRADIENT_STEPS: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

/// Render a standalone colorbar legend for the configured scale and
/// colormap.  Vertical bars are 2in x 8in, horizontal ones 8in x 2in,
/// both at the configured DPI.
pub fn save_colorbar(path: &Path, opts: &RenderOptions, orientation: Orientation) -> Result<()> {
    let (w_in, h_in) = match orientation {
        Orientation::Vertical => (2.0, 8.0),
        Orientation::Horizontal => (8.0, 2.0),
    };
    let size = (
        (w_in * opts.dpi as f64).round() as u32,
        (h_in * opts.dpi as f64).round() as u32,
    );

    match image_kind(path)? {
        ImageKind::Svg => draw(SVGBackend::new(path, size).into_drawing_area(), opts, orientation),
        ImageKind::Bitmap => draw(
            BitMapBackend::new(path, size).into_drawing_area(),
            opts,
            orientation,
        ),
    }
    .with_context(|| format!("rendering colorbar to {}", path.display()))
}

fn draw<DB>(root: DrawingArea<DB, Shift>, opts: &RenderOptions, orientation: Orientation) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;

    match orientation {
        Orientation::Vertical => draw_vertical(&root, opts)?,
        Orientation::Horizontal => draw_horizontal(&root, opts)?,
    }

    root.present().context("writing image file")?;
    Ok(())
}

/// Vertical gradient strip with the scale along the right edge.  Also
/// drawn into the strip reserved inside the heatmap figure.
pub(crate) fn draw_vertical<DB>(area: &DrawingArea<DB, Shift>, opts: &RenderOptions) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let (lo, hi) = opts.scale.padded();

    let mut chart = ChartBuilder::on(area)
        .margin(opts.font_px(8.0))
        .set_label_area_size(LabelAreaPosition::Right, opts.font_px(36.0))
        .build_cartesian_2d(0.0..1.0, lo..hi)?;

    chart
        .configure_mesh()
        .disable_x_axis()
        .disable_x_mesh()
        .disable_y_mesh()
        .y_desc("Z-score")
        .label_style(("sans-serif", opts.font_px(11.0)))
        .axis_desc_style(("sans-serif", opts.font_px(12.0)))
        .y_label_formatter(&|v| format!("{v:.2}"))
        .draw()?;

    let delta = (hi - lo) / GRADIENT_STEPS as f64;
    chart.draw_series((0..GRADIENT_STEPS).map(|i| {
        let v0 = lo + delta * i as f64;
        let v1 = v0 + delta;
        let color = opts.colormap.sample(opts.scale.position((v0 + v1) * 0.5));
        Rectangle::new([(0.0, v0), (1.0, v1)], color.filled())
    }))?;

    Ok(())
}

fn draw_horizontal<DB>(area: &DrawingArea<DB, Shift>, opts: &RenderOptions) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let (lo, hi) = opts.scale.padded();

    let mut chart = ChartBuilder::on(area)
        .margin(opts.font_px(8.0))
        .set_label_area_size(LabelAreaPosition::Bottom, opts.font_px(30.0))
        .build_cartesian_2d(lo..hi, 0.0..1.0)?;

    chart
        .configure_mesh()
        .disable_y_axis()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_desc("Z-score")
        .label_style(("sans-serif", opts.font_px(11.0)))
        .axis_desc_style(("sans-serif", opts.font_px(12.0)))
        .x_label_formatter(&|v| format!("{v:.2}"))
        .draw()?;

    let delta = (hi - lo) / GRADIENT_STEPS as f64;
    chart.draw_series((0..GRADIENT_STEPS).map(|i| {
        let v0 = lo + delta * i as f64;
        let v1 = v0 + delta;
        let color = opts.colormap.sample(opts.scale.position((v0 + v1) * 0.5));
        Rectangle::new([(v0, 0.0), (v1, 1.0)], color.filled())
    }))?;

    Ok(())
}
