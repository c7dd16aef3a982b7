// ---------------------------------------------------------------------------
// SubjectSeries – one subject column of the source CSV
// ---------------------------------------------------------------------------

/// A single subject's trace.  `values` holds one sample per time point;
/// missing cells are `NaN`.
#[derive(Debug, Clone)]
pub struct SubjectSeries {
    pub name: String,
    pub values: Vec<f64>,
}

// ---------------------------------------------------------------------------
// TimeSeriesTable – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed table: the designated time column plus every column
/// whose header starts with the subject prefix.
#[derive(Debug, Clone)]
pub struct TimeSeriesTable {
    /// The time axis, one entry per data row.
    pub time: Vec<f64>,
    /// Subject columns in header order.  Every `values` vector has the
    /// same length as `time`.
    pub subjects: Vec<SubjectSeries>,
}

impl TimeSeriesTable {
    /// Number of time samples (rows).
    pub fn n_samples(&self) -> usize {
        self.time.len()
    }

    /// Number of subject columns.
    pub fn n_subjects(&self) -> usize {
        self.subjects.len()
    }
}

// ---------------------------------------------------------------------------
// ZscoreMatrix – the standardized matrix handed to the renderer
// ---------------------------------------------------------------------------

/// Row-major standardized values: one row per subject, one column per
/// time sample (the transpose of the source table, so subjects stack
/// vertically in the rendered figure).
#[derive(Debug, Clone)]
pub struct ZscoreMatrix {
    pub subjects: Vec<String>,
    pub rows: Vec<Vec<f64>>,
}

impl ZscoreMatrix {
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_cols(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Finite (min, max) over the whole matrix, or `None` when no cell
    /// is finite.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for v in self.rows.iter().flatten().copied() {
            if v.is_finite() {
                min = min.min(v);
                max = max.max(v);
            }
        }
        (min <= max).then_some((min, max))
    }
}
