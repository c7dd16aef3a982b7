use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};
use log::info;

use super::model::{SubjectSeries, TimeSeriesTable};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a time-series table from a CSV file.
///
/// Expected layout: a header row naming one time column (`time_column`,
/// matched exactly) and any number of subject columns whose headers start
/// with `subject_prefix`.  Other columns are ignored.
pub fn load_csv(path: &Path, time_column: &str, subject_prefix: &str) -> Result<TimeSeriesTable> {
    info!("reading CSV file: {}", path.display());
    let reader = csv::Reader::from_path(path)
        .with_context(|| format!("opening CSV file {}", path.display()))?;
    read_table(reader, time_column, subject_prefix)
}

fn read_table<R: Read>(
    mut reader: csv::Reader<R>,
    time_column: &str,
    subject_prefix: &str,
) -> Result<TimeSeriesTable> {
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(str::to_string)
        .collect();

    let time_idx = headers
        .iter()
        .position(|h| h == time_column)
        .with_context(|| format!("CSV missing time column '{time_column}'"))?;

    let subject_cols: Vec<(usize, String)> = headers
        .iter()
        .enumerate()
        .filter(|(i, h)| *i != time_idx && h.starts_with(subject_prefix))
        .map(|(i, h)| (i, h.clone()))
        .collect();

    if subject_cols.is_empty() {
        bail!("no columns starting with '{subject_prefix}' found");
    }

    let mut time = Vec::new();
    let mut columns: Vec<Vec<f64>> = vec![Vec::new(); subject_cols.len()];

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;

        time.push(parse_cell(record.get(time_idx).unwrap_or(""), row_no, time_column)?);
        for (slot, (col_idx, name)) in columns.iter_mut().zip(&subject_cols) {
            slot.push(parse_cell(record.get(*col_idx).unwrap_or(""), row_no, name)?);
        }
    }

    if time.is_empty() {
        bail!("CSV contains no data rows");
    }

    let subjects: Vec<SubjectSeries> = subject_cols
        .into_iter()
        .zip(columns)
        .map(|((_, name), values)| SubjectSeries { name, values })
        .collect();

    let names: Vec<&str> = subjects.iter().map(|s| s.name.as_str()).collect();
    info!("detected subject columns: {names:?}");
    info!(
        "data shape: {} samples x {} subjects",
        time.len(),
        subjects.len()
    );

    Ok(TimeSeriesTable { time, subjects })
}

/// Empty cells are missing values and come back as `NaN`.
fn parse_cell(s: &str, row: usize, col: &str) -> Result<f64> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(f64::NAN);
    }
    s.parse::<f64>()
        .with_context(|| format!("row {row}, column '{col}': '{s}' is not a number"))
}
