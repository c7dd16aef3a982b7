use log::info;
use palette::{LinSrgb, Mix, Srgb};
use plotters::style::RGBColor;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("unknown colormap '{0}'")]
pub struct UnknownColormap(pub String);

// ---------------------------------------------------------------------------
// Named colormaps
// ---------------------------------------------------------------------------

/// A named colormap defined by evenly spaced sRGB control stops.
#[derive(Debug, Clone, Copy)]
pub struct Colormap {
    pub name: &'static str,
    stops: &'static [(u8, u8, u8)],
}

const YLORRD: &[(u8, u8, u8)] = &[
    (255, 255, 204),
    (255, 237, 160),
    (254, 217, 118),
    (254, 178, 76),
    (253, 141, 60),
    (252, 78, 42),
    (227, 26, 28),
    (189, 0, 38),
    (128, 0, 38),
];

const VIRIDIS: &[(u8, u8, u8)] = &[
    (68, 1, 84),
    (71, 44, 122),
    (59, 81, 139),
    (44, 113, 142),
    (33, 144, 141),
    (39, 173, 129),
    (92, 200, 99),
    (170, 220, 50),
    (253, 231, 37),
];

const PLASMA: &[(u8, u8, u8)] = &[
    (13, 8, 135),
    (84, 2, 163),
    (139, 10, 165),
    (185, 50, 137),
    (219, 92, 104),
    (244, 136, 73),
    (254, 188, 43),
    (240, 249, 33),
];

const COOLWARM: &[(u8, u8, u8)] = &[
    (59, 76, 192),
    (144, 178, 254),
    (220, 220, 220),
    (245, 156, 125),
    (180, 4, 38),
];

const JET: &[(u8, u8, u8)] = &[
    (0, 0, 131),
    (0, 60, 170),
    (5, 255, 255),
    (255, 255, 0),
    (250, 0, 0),
    (128, 0, 0),
];

const GREYS: &[(u8, u8, u8)] = &[(255, 255, 255), (0, 0, 0)];

pub const COLORMAPS: &[Colormap] = &[
    Colormap { name: "YlOrRd", stops: YLORRD },
    Colormap { name: "Viridis", stops: VIRIDIS },
    Colormap { name: "Plasma", stops: PLASMA },
    Colormap { name: "Coolwarm", stops: COOLWARM },
    Colormap { name: "Jet", stops: JET },
    Colormap { name: "Greys", stops: GREYS },
];

impl Colormap {
    /// Look up a colormap by name, case-insensitively.
    pub fn by_name(name: &str) -> Result<Self, UnknownColormap> {
        COLORMAPS
            .iter()
            .copied()
            .find(|c| c.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| UnknownColormap(name.to_string()))
    }

    /// Sample the map at `t ∈ [0, 1]`.  Values outside the range clamp to
    /// the end stops; between stops the colour is interpolated in linear
    /// RGB.
    pub fn sample(&self, t: f64) -> RGBColor {
        let last = self.stops.len() - 1;
        let pos = t.clamp(0.0, 1.0) as f32 * last as f32;
        let lo = (pos.floor() as usize).min(last);
        let hi = (lo + 1).min(last);
        let frac = pos - lo as f32;

        let mixed = linear(self.stops[lo]).mix(linear(self.stops[hi]), frac);
        let srgb: Srgb<f32> = Srgb::from_linear(mixed);
        let out = srgb.into_format::<u8>();
        RGBColor(out.red, out.green, out.blue)
    }
}

fn linear(stop: (u8, u8, u8)) -> LinSrgb<f32> {
    Srgb::new(stop.0, stop.1, stop.2)
        .into_format::<f32>()
        .into_linear()
}

// ---------------------------------------------------------------------------
// Color scale: value → position in [0, 1]
// ---------------------------------------------------------------------------

/// The numeric range mapped onto a colormap.  Explicit bounds are honored
/// exactly; they are never rescaled to the data.
#[derive(Debug, Clone, Copy)]
pub struct ColorScale {
    pub vmin: f64,
    pub vmax: f64,
}

impl ColorScale {
    /// Fill unset bounds from the data range.  Auto-derived bounds are
    /// logged so a run's effective scale is visible.
    pub fn resolve(vmin: Option<f64>, vmax: Option<f64>, data_range: Option<(f64, f64)>) -> Self {
        let (dmin, dmax) = data_range.unwrap_or((0.0, 1.0));
        let vmin = vmin.unwrap_or_else(|| {
            info!("auto-derived vmin: {dmin:.4}");
            dmin
        });
        let vmax = vmax.unwrap_or_else(|| {
            info!("auto-derived vmax: {dmax:.4}");
            dmax
        });
        ColorScale { vmin, vmax }
    }

    /// Normalised position of `v` on the scale, clamped to `[0, 1]`.
    /// A degenerate span maps everything to the middle of the map.
    pub fn position(&self, v: f64) -> f64 {
        let span = self.vmax - self.vmin;
        if span.abs() < f64::EPSILON {
            return 0.5;
        }
        ((v - self.vmin) / span).clamp(0.0, 1.0)
    }

    /// A non-degenerate `(lo, hi)` pair usable as an axis range.
    pub fn padded(&self) -> (f64, f64) {
        let span = (self.vmax - self.vmin).max(1.0e-12);
        (self.vmin, self.vmin + span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(Colormap::by_name("ylorrd").unwrap().name, "YlOrRd");
        assert_eq!(Colormap::by_name("VIRIDIS").unwrap().name, "Viridis");
    }

    #[test]
    fn unknown_name_is_an_error() {
        let err = Colormap::by_name("sunburst").unwrap_err();
        assert!(err.to_string().contains("sunburst"));
    }

    #[test]
    fn sample_endpoints_hit_the_end_stops() {
        let cmap = Colormap::by_name("YlOrRd").unwrap();
        assert_eq!(cmap.sample(0.0), RGBColor(255, 255, 204));
        assert_eq!(cmap.sample(1.0), RGBColor(128, 0, 38));
    }

    #[test]
    fn sample_clamps_out_of_range() {
        let cmap = Colormap::by_name("Greys").unwrap();
        assert_eq!(cmap.sample(-3.0), cmap.sample(0.0));
        assert_eq!(cmap.sample(7.5), cmap.sample(1.0));
    }

    #[test]
    fn explicit_bounds_are_not_rescaled_to_data() {
        let scale = ColorScale::resolve(Some(-1.7), Some(2.0), Some((-40.0, 55.0)));
        assert_eq!(scale.vmin, -1.7);
        assert_eq!(scale.vmax, 2.0);
        // -1.7 is the bottom of the scale even though the data dips lower.
        assert_abs_diff_eq!(scale.position(-1.7), 0.0);
        assert_abs_diff_eq!(scale.position(-40.0), 0.0);
        assert_abs_diff_eq!(scale.position(2.0), 1.0);
    }

    #[test]
    fn unset_bounds_fall_back_to_data_range() {
        let scale = ColorScale::resolve(None, Some(2.0), Some((-3.0, 5.0)));
        assert_eq!(scale.vmin, -3.0);
        assert_eq!(scale.vmax, 2.0);
    }

    #[test]
    fn degenerate_span_maps_to_middle() {
        let scale = ColorScale { vmin: 1.0, vmax: 1.0 };
        assert_abs_diff_eq!(scale.position(1.0), 0.5);
        assert_abs_diff_eq!(scale.position(99.0), 0.5);
    }

    #[test]
    fn position_is_linear_between_bounds() {
        let scale = ColorScale { vmin: -2.0, vmax: 2.0 };
        assert_abs_diff_eq!(scale.position(0.0), 0.5);
        assert_abs_diff_eq!(scale.position(1.0), 0.75);
    }
}
