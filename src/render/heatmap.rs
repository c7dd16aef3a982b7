use std::path::Path;

use anyhow::{Context, Result};
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::data::model::ZscoreMatrix;

use super::{colorbar, image_kind, ImageKind, RenderOptions};

/// Render the z-score matrix to an image file.  The backend follows the
/// output extension: `.svg` vectors, anything else a bitmap.  Writes
/// exactly one file.
pub fn save_heatmap(
    path: &Path,
    matrix: &ZscoreMatrix,
    time: &[f64],
    opts: &RenderOptions,
) -> Result<()> {
    let size = opts.canvas_size()?;
    match image_kind(path)? {
        ImageKind::Svg => draw(
            SVGBackend::new(path, size).into_drawing_area(),
            matrix,
            time,
            opts,
        ),
        ImageKind::Bitmap => draw(
            BitMapBackend::new(path, size).into_drawing_area(),
            matrix,
            time,
            opts,
        ),
    }
    .with_context(|| format!("rendering heatmap to {}", path.display()))
}

fn draw<DB>(
    root: DrawingArea<DB, Shift>,
    matrix: &ZscoreMatrix,
    time: &[f64],
    opts: &RenderOptions,
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let (width_px, height_px) = opts.canvas_size()?;
    let n_rows = matrix.n_rows() as i32;
    let n_cols = matrix.n_cols() as i32;

    root.fill(&WHITE)?;

    // Colorbar strip along the right edge, like the in-figure legend of
    // the source plots.
    let cbar_px = (width_px / 10).clamp(80, 260).min(width_px / 2).max(1) as i32;
    let (plot_area, cbar_area) = root.split_horizontally(width_px as i32 - cbar_px);

    let mut chart = ChartBuilder::on(&plot_area)
        .caption(&opts.title, ("sans-serif", opts.font_px(16.0)))
        .margin(opts.font_px(8.0))
        .x_label_area_size(opts.font_px(28.0))
        .y_label_area_size(opts.font_px(44.0))
        .build_cartesian_2d(0..n_cols, n_rows..0)?;

    // One tick every `xtick_interval` samples.
    let x_label_count = (matrix.n_cols() / opts.xtick_interval + 1).max(2);
    // Nudge subject names toward their row centers.
    let y_offset = (height_px as i32 / n_rows.max(1) / 2).min(opts.font_px(20.0));

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_labels(x_label_count)
        .y_labels(matrix.n_rows() + 1)
        .y_label_offset(y_offset)
        .x_desc(opts.time_label.as_str())
        .y_desc(opts.subject_label.as_str())
        .label_style(("sans-serif", opts.font_px(11.0)))
        .axis_desc_style(("sans-serif", opts.font_px(12.0)))
        .x_label_formatter(&|x| time_tick(time, *x))
        .y_label_formatter(&|y| subject_tick(&matrix.subjects, *y))
        .draw()?;

    chart.draw_series(matrix.rows.iter().zip(0..).flat_map(|(row, y)| {
        let scale = &opts.scale;
        let cmap = &opts.colormap;
        // Non-finite cells are left unpainted.
        row.iter().zip(0..).filter_map(move |(&v, x)| {
            v.is_finite().then(|| {
                let color = cmap.sample(scale.position(v));
                Rectangle::new([(x, y), (x + 1, y + 1)], color.filled())
            })
        })
    }))?;

    colorbar::draw_vertical(&cbar_area, opts)?;

    root.present().context("writing image file")?;
    Ok(())
}

fn time_tick(time: &[f64], idx: i32) -> String {
    let Some(&t) = time.get(idx as usize) else {
        return String::new();
    };
    if (t - t.round()).abs() < 1e-9 {
        format!("{t:.0}")
    } else {
        format!("{t:.2}")
    }
}

fn subject_tick(subjects: &[String], idx: i32) -> String {
    subjects.get(idx as usize).cloned().unwrap_or_default()
}
