use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

use crate::render::colorbar::Orientation;

#[derive(Parser, Debug)]
#[command(author, version, about = "Render a z-score heatmap from a time-series CSV", long_about = None)]
#[command(allow_negative_numbers = true)]
pub struct Cli {
    /// Input CSV file
    #[arg(value_hint = ValueHint::FilePath)]
    pub input: PathBuf,

    /// Output image path (defaults to `<input stem>_heatmap.png`)
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Heatmap title (defaults to `Z-score Heatmap (n=<subjects>)`)
    #[arg(short, long)]
    pub title: Option<String>,

    /// Lower bound of the colour scale (defaults to the data minimum)
    #[arg(long)]
    pub vmin: Option<f64>,

    /// Upper bound of the colour scale (defaults to the data maximum)
    #[arg(long)]
    pub vmax: Option<f64>,

    /// Colour map name
    #[arg(long, default_value = "YlOrRd")]
    pub cmap: String,

    /// Figure width in inches
    #[arg(long, default_value_t = 20.0)]
    pub width: f64,

    /// Figure height in inches
    #[arg(long, default_value_t = 6.0)]
    pub height: f64,

    /// Raster resolution in dots per inch
    #[arg(long, default_value_t = 300)]
    pub dpi: u32,

    /// Name of the time column
    #[arg(long, default_value = "Time (s)")]
    pub time_column: String,

    /// Column-name prefix identifying subject columns
    #[arg(long, default_value = "Mouse")]
    pub subject_prefix: String,

    /// Spacing between x-axis tick labels, in samples
    #[arg(long, default_value_t = 500)]
    pub xtick_interval: usize,

    /// Also write a standalone colorbar image next to the heatmap
    #[arg(long, action = ArgAction::SetTrue)]
    pub colorbar: bool,

    /// Orientation of the standalone colorbar
    #[arg(long, value_enum, default_value_t = Orientation::Vertical)]
    pub colorbar_orientation: Orientation,
}
