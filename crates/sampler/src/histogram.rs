//! Value distributions over a sample.

use barracks_core::{Stat, StatSchema};

use crate::matrix::SampleMatrix;

/// Count of entities at each legal value of one stat.
///
/// Bucket `i` holds the value `min_value + i`, so there is one bucket per
/// value in `min_value..=max_value`, including values nobody rolled.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StatHistogram {
    pub stat: Stat,
    pub min_value: i32,
    pub counts: Vec<u64>,
    pub total: u64,
}

impl StatHistogram {
    /// Histogram of one matrix column.
    ///
    /// Values outside the schema range cannot come out of the engine; any
    /// that do are left uncounted.
    pub fn from_matrix(matrix: &SampleMatrix, schema: &StatSchema, stat: Stat) -> Self {
        let spec = schema.spec(stat);
        let min_value = spec.min_value();
        let mut counts = vec![0u64; spec.span()];
        let mut total = 0;

        for value in matrix.column(stat) {
            if let Some(slot) = usize::try_from(value - min_value)
                .ok()
                .and_then(|offset| counts.get_mut(offset))
            {
                *slot += 1;
                total += 1;
            }
        }

        Self {
            stat,
            min_value,
            counts,
            total,
        }
    }

    /// One histogram per stat, in [`Stat::all`] order.
    pub fn all(matrix: &SampleMatrix, schema: &StatSchema) -> Vec<Self> {
        Stat::all()
            .into_iter()
            .map(|stat| Self::from_matrix(matrix, schema, stat))
            .collect()
    }

    pub fn max_value(&self) -> i32 {
        self.min_value + self.counts.len() as i32 - 1
    }

    pub fn count(&self, value: i32) -> u64 {
        usize::try_from(value - self.min_value)
            .ok()
            .and_then(|offset| self.counts.get(offset))
            .copied()
            .unwrap_or(0)
    }

    /// `(value, count)` for every bucket.
    pub fn buckets(&self) -> impl Iterator<Item = (i32, u64)> + '_ {
        (self.min_value..).zip(self.counts.iter().copied())
    }

    /// Fraction of the sample in each bucket. All zero for an empty sample.
    pub fn frequencies(&self) -> Vec<f64> {
        if self.total == 0 {
            return vec![0.0; self.counts.len()];
        }
        self.counts
            .iter()
            .map(|&count| count as f64 / self.total as f64)
            .collect()
    }

    /// Most common value; the lowest one on ties.
    pub fn mode(&self) -> Option<i32> {
        if self.total == 0 {
            return None;
        }
        self.buckets()
            .fold(None, |best: Option<(i32, u64)>, (value, count)| match best {
                Some((_, best_count)) if best_count >= count => best,
                _ => Some((value, count)),
            })
            .map(|(value, _)| value)
    }
}

/// Equal-width bins over the observed range of weighted totals.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TotalsHistogram {
    pub min: f64,
    pub max: f64,
    pub counts: Vec<u64>,
}

impl TotalsHistogram {
    pub const DEFAULT_BINS: usize = 10;

    /// Bin `totals` into `bins` equal-width bins spanning `[min, max]`.
    ///
    /// The last bin is closed on the right. When every total is equal the
    /// range is zero and everything lands in the first bin. Returns `None`
    /// for an empty input or zero bins.
    pub fn new(totals: &[f64], bins: usize) -> Option<Self> {
        if totals.is_empty() || bins == 0 {
            return None;
        }

        let min = totals.iter().copied().fold(f64::INFINITY, f64::min);
        let max = totals.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let width = (max - min) / bins as f64;

        let mut counts = vec![0u64; bins];
        for &total in totals {
            let bin = if width > 0.0 {
                (((total - min) / width) as usize).min(bins - 1)
            } else {
                0
            };
            counts[bin] += 1;
        }

        Some(Self { min, max, counts })
    }

    pub fn width(&self) -> f64 {
        (self.max - self.min) / self.counts.len() as f64
    }

    /// `(lower, upper, count)` for every bin.
    pub fn bins(&self) -> impl Iterator<Item = (f64, f64, u64)> + '_ {
        let width = self.width();
        self.counts.iter().enumerate().map(move |(i, &count)| {
            let lower = self.min + width * i as f64;
            (lower, lower + width, count)
        })
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }
}
