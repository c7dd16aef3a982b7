//! zheat – render z-score heatmaps from per-subject time-series CSV files.
//!
//! The pipeline is a straight line: parse arguments → load the CSV into a
//! [`data::model::TimeSeriesTable`] → standardize each subject column →
//! render the matrix as a colour-scaled figure (plus an optional
//! standalone colorbar legend).

pub mod cli;
pub mod color;
pub mod data;
pub mod render;

use std::path::{Path, PathBuf};

use anyhow::Result;
use log::info;

use crate::cli::Cli;
use crate::color::{ColorScale, Colormap};
use crate::render::RenderOptions;

/// Run the full pipeline for one parsed command line.
pub fn run(cli: &Cli) -> Result<()> {
    let colormap = Colormap::by_name(&cli.cmap)?;

    let table = data::loader::load_csv(&cli.input, &cli.time_column, &cli.subject_prefix)?;
    let matrix = data::zscore::standardize(&table);

    let scale = ColorScale::resolve(cli.vmin, cli.vmax, matrix.value_range());

    let out_path = cli
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&cli.input));
    let title = cli
        .title
        .clone()
        .unwrap_or_else(|| format!("Z-score Heatmap (n={})", matrix.n_rows()));

    let opts = RenderOptions {
        title,
        colormap,
        scale,
        width_in: cli.width,
        height_in: cli.height,
        dpi: cli.dpi,
        xtick_interval: cli.xtick_interval,
        time_label: cli.time_column.clone(),
        subject_label: cli.subject_prefix.clone(),
    };

    render::save_heatmap(&out_path, &matrix, &table.time, &opts)?;
    info!("heatmap written to {}", out_path.display());

    if cli.colorbar {
        let cb_path = colorbar_path(&out_path);
        render::colorbar::save_colorbar(&cb_path, &opts, cli.colorbar_orientation)?;
        info!("colorbar written to {}", cb_path.display());
    }

    Ok(())
}

/// Default output lands next to the input as `<stem>_heatmap.png`.
fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("heatmap");
    input.with_file_name(format!("{stem}_heatmap.png"))
}

/// The standalone colorbar shares the heatmap's directory and extension.
fn colorbar_path(output: &Path) -> PathBuf {
    let stem = output
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("heatmap");
    let ext = output
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("png");
    output.with_file_name(format!("{stem}_colorbar.{ext}"))
}
