//! Fixed-shape result of a sampling run.

use barracks_core::{GenerationReport, Stat, StatBlock};

/// One row per generated entity, one column per stat in [`Stat::all`] order,
/// plus an optional weighted-total column.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SampleMatrix {
    rows: Vec<StatBlock>,
    totals: Option<Vec<f64>>,
    report: GenerationReport,
}

impl SampleMatrix {
    /// Header of the weighted-total column.
    pub const TOTALS_HEADER: &'static str = "WeightedTotal";

    pub fn new(rows: Vec<StatBlock>, totals: Option<Vec<f64>>, report: GenerationReport) -> Self {
        debug_assert!(totals.as_ref().is_none_or(|t| t.len() == rows.len()));
        Self {
            rows,
            totals,
            report,
        }
    }

    pub fn rows(&self) -> &[StatBlock] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&StatBlock> {
        self.rows.get(index)
    }

    /// Values of one stat across all entities, in row order.
    pub fn column(&self, stat: Stat) -> impl ExactSizeIterator<Item = i32> + '_ {
        self.rows.iter().map(move |row| row.get(stat))
    }

    /// Weighted totals, if the run collected them.
    pub fn totals(&self) -> Option<&[f64]> {
        self.totals.as_deref()
    }

    /// Generation counters summed over every entity.
    pub fn report(&self) -> GenerationReport {
        self.report
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column headers: the stat names, then the totals header if present.
    pub fn headers(&self) -> Vec<&'static str> {
        let mut headers: Vec<&'static str> = Stat::all().iter().map(|stat| stat.name()).collect();
        if self.totals.is_some() {
            headers.push(Self::TOTALS_HEADER);
        }
        headers
    }
}
