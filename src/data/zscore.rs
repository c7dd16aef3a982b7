use log::warn;

use super::model::{TimeSeriesTable, ZscoreMatrix};

/// Standardize each subject column independently: subtract the column
/// mean, divide by the population standard deviation.  Statistics run
/// over finite values only, so missing cells neither poison the column
/// nor get filled in; they stay `NaN` in the output.
pub fn standardize(table: &TimeSeriesTable) -> ZscoreMatrix {
    let mut subjects = Vec::with_capacity(table.n_subjects());
    let mut rows = Vec::with_capacity(table.n_subjects());

    for series in &table.subjects {
        subjects.push(series.name.clone());
        rows.push(standardize_column(&series.name, &series.values));
    }

    ZscoreMatrix { subjects, rows }
}

fn standardize_column(name: &str, values: &[f64]) -> Vec<f64> {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() {
        warn!("column '{name}' has no finite values");
        return values.to_vec();
    }

    let n = finite.len() as f64;
    let mean = finite.iter().sum::<f64>() / n;
    let var = finite.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    let std = var.sqrt();

    // A column with no spread has no meaningful z-scores.  Map its
    // finite entries to 0 instead of dividing by (near-)zero.
    if std < f64::EPSILON * mean.abs().max(1.0) {
        warn!("column '{name}' has zero variance, emitting zeros");
        return values
            .iter()
            .map(|v| if v.is_finite() { 0.0 } else { *v })
            .collect();
    }

    values
        .iter()
        .map(|v| if v.is_finite() { (v - mean) / std } else { *v })
        .collect()
}
