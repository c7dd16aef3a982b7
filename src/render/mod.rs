//! Rendering layer: heatmap and colorbar figures drawn with plotters.

pub mod colorbar;
pub mod heatmap;

use std::path::Path;

use anyhow::bail;
use thiserror::Error;

use crate::color::{ColorScale, Colormap};

pub use heatmap::save_heatmap;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("figure dimensions must be positive, got {width}in x {height}in")]
    NonPositiveFigure { width: f64, height: f64 },
    #[error("dpi must be positive")]
    ZeroDpi,
    #[error("x-tick interval must be positive")]
    ZeroTickInterval,
}

/// Display options shared by the heatmap and the standalone colorbar.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub title: String,
    pub colormap: Colormap,
    pub scale: ColorScale,
    /// Figure width in inches.
    pub width_in: f64,
    /// Figure height in inches.
    pub height_in: f64,
    pub dpi: u32,
    /// Spacing between x-axis tick labels, in samples.
    pub xtick_interval: usize,
    /// x-axis description (the time column name).
    pub time_label: String,
    /// y-axis description (the subject prefix).
    pub subject_label: String,
}

impl RenderOptions {
    /// Pixel canvas for the heatmap figure.
    pub fn canvas_size(&self) -> Result<(u32, u32), LayoutError> {
        if !(self.width_in > 0.0) || !(self.height_in > 0.0) {
            return Err(LayoutError::NonPositiveFigure {
                width: self.width_in,
                height: self.height_in,
            });
        }
        if self.dpi == 0 {
            return Err(LayoutError::ZeroDpi);
        }
        if self.xtick_interval == 0 {
            return Err(LayoutError::ZeroTickInterval);
        }
        Ok((
            (self.width_in * self.dpi as f64).round().max(1.0) as u32,
            (self.height_in * self.dpi as f64).round().max(1.0) as u32,
        ))
    }

    /// Convert a point size to pixels at the configured DPI, so text
    /// keeps its physical size across resolutions.
    pub(crate) fn font_px(&self, points: f64) -> i32 {
        (points * self.dpi as f64 / 72.0).round().max(1.0) as i32
    }
}

pub(crate) enum ImageKind {
    Bitmap,
    Svg,
}

/// Pick the plotters backend from the output extension.
pub(crate) fn image_kind(path: &Path) -> anyhow::Result<ImageKind> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "svg" => Ok(ImageKind::Svg),
        "png" | "jpg" | "jpeg" | "bmp" => Ok(ImageKind::Bitmap),
        "" => bail!("output path {} has no file extension", path.display()),
        other => bail!("unsupported image extension '.{other}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> RenderOptions {
        RenderOptions {
            title: "t".into(),
            colormap: Colormap::by_name("YlOrRd").unwrap(),
            scale: ColorScale { vmin: 0.0, vmax: 1.0 },
            width_in: 20.0,
            height_in: 6.0,
            dpi: 300,
            xtick_interval: 500,
            time_label: "Time (s)".into(),
            subject_label: "Mouse".into(),
        }
    }

    #[test]
    fn canvas_is_inches_times_dpi() {
        assert_eq!(options().canvas_size().unwrap(), (6000, 1800));
    }

    #[test]
    fn non_positive_figure_is_rejected() {
        let mut opts = options();
        opts.width_in = 0.0;
        assert!(matches!(
            opts.canvas_size(),
            Err(LayoutError::NonPositiveFigure { .. })
        ));

        let mut opts = options();
        opts.height_in = -2.0;
        assert!(opts.canvas_size().is_err());
    }

    #[test]
    fn zero_dpi_and_zero_interval_are_rejected() {
        let mut opts = options();
        opts.dpi = 0;
        assert!(matches!(opts.canvas_size(), Err(LayoutError::ZeroDpi)));

        let mut opts = options();
        opts.xtick_interval = 0;
        assert!(matches!(
            opts.canvas_size(),
            Err(LayoutError::ZeroTickInterval)
        ));
    }

    #[test]
    fn backend_dispatch_follows_extension() {
        assert!(matches!(
            image_kind(Path::new("out.png")).unwrap(),
            ImageKind::Bitmap
        ));
        assert!(matches!(
            image_kind(Path::new("out.SVG")).unwrap(),
            ImageKind::Svg
        ));
        assert!(image_kind(Path::new("out.webp")).is_err());
        assert!(image_kind(Path::new("out")).is_err());
    }
}
