//! Per-entity stat values.

use core::ops::Index;

use super::{Stat, StatSchema};

/// Current value of every stat for one generated entity.
///
/// Starts at the schema defaults. Only the swap engine mutates a block; once
/// generation returns, the block is a plain value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatBlock {
    values: [i32; Stat::COUNT],
}

impl StatBlock {
    /// A block with every stat at its schema default.
    pub fn defaults(schema: &StatSchema) -> Self {
        let mut values = [0; Stat::COUNT];
        for (stat, spec) in schema.iter() {
            values[stat.as_index()] = spec.default;
        }
        Self { values }
    }

    /// Create a block from raw values in [`Stat::all`] order.
    pub const fn from_values(values: [i32; Stat::COUNT]) -> Self {
        Self { values }
    }

    #[inline]
    pub fn get(&self, stat: Stat) -> i32 {
        self.values[stat.as_index()]
    }

    /// Raw values in stat order.
    #[inline]
    pub fn values(&self) -> &[i32; Stat::COUNT] {
        &self.values
    }

    #[inline]
    pub(crate) fn set(&mut self, stat: Stat, value: i32) {
        self.values[stat.as_index()] = value;
    }

    /// Adds `amount` (possibly negative) to a stat.
    #[cfg(test)]
    pub(crate) fn adjust(&mut self, stat: Stat, amount: i32) {
        self.values[stat.as_index()] += amount;
    }

    /// Current value minus the schema default.
    pub fn delta(&self, stat: Stat, schema: &StatSchema) -> i32 {
        self.get(stat) - schema.spec(stat).default
    }

    /// Iterates `(stat, value)` pairs in stat order.
    pub fn iter(&self) -> impl Iterator<Item = (Stat, i32)> + '_ {
        Stat::all().into_iter().map(move |stat| (stat, self.get(stat)))
    }

    /// `Σ (current − default) × weight` over all stats.
    ///
    /// A rough score of how well the soldier rolled. Under the reference swap
    /// table it stays near zero; it becomes informative when a table or the
    /// algorithm is skewed.
    pub fn weighted_total(&self, schema: &StatSchema) -> f64 {
        schema
            .iter()
            .map(|(stat, spec)| f64::from(self.get(stat) - spec.default) * spec.weight)
            .sum()
    }

    /// Returns true if every stat lies within its schema range.
    pub fn within_bounds(&self, schema: &StatSchema) -> bool {
        schema
            .iter()
            .all(|(stat, spec)| spec.contains(self.get(stat)))
    }
}

impl Index<Stat> for StatBlock {
    type Output = i32;

    fn index(&self, stat: Stat) -> &i32 {
        &self.values[stat.as_index()]
    }
}
