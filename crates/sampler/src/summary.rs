//! Per-column summary statistics.

use barracks_core::Stat;

use crate::matrix::SampleMatrix;

/// Count, mean, population standard deviation and range of one column.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ColumnSummary {
    pub count: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

impl ColumnSummary {
    /// Summarize a column. Returns `None` for an empty column.
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        let mut count = 0usize;
        let mut mean = 0.0;
        let mut m2 = 0.0;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;

        // Welford's online update
        for value in values {
            count += 1;
            let delta = value - mean;
            mean += delta / count as f64;
            m2 += delta * (value - mean);
            min = min.min(value);
            max = max.max(value);
        }

        if count == 0 {
            return None;
        }

        Some(Self {
            count,
            mean,
            std_dev: (m2 / count as f64).sqrt(),
            min,
            max,
        })
    }

    pub fn of_stat(matrix: &SampleMatrix, stat: Stat) -> Option<Self> {
        Self::from_values(matrix.column(stat).map(f64::from))
    }

    pub fn of_totals(matrix: &SampleMatrix) -> Option<Self> {
        Self::from_values(matrix.totals()?.iter().copied())
    }

    /// Summaries keyed by column header, stats first, totals last if present.
    pub fn all(matrix: &SampleMatrix) -> Vec<(&'static str, Self)> {
        let mut summaries: Vec<(&'static str, Self)> = Stat::all()
            .into_iter()
            .filter_map(|stat| Some((stat.name(), Self::of_stat(matrix, stat)?)))
            .collect();
        if let Some(totals) = Self::of_totals(matrix) {
            summaries.push((SampleMatrix::TOTALS_HEADER, totals));
        }
        summaries
    }
}
