//! Stat schema: per-stat defaults, legal ranges and scoring weights.

use super::Stat;
use crate::error::ConfigError;

/// Range and weight definition for a single stat.
///
/// A stat may move `min_delta` below and `max_delta` above its default.
/// `weight` only affects the weighted stat total, never generation.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatSpec {
    pub default: i32,
    pub min_delta: i32,
    pub max_delta: i32,
    #[cfg_attr(feature = "serde", serde(default = "default_weight"))]
    pub weight: f64,
}

#[cfg(feature = "serde")]
fn default_weight() -> f64 {
    StatSpec::DEFAULT_WEIGHT
}

impl StatSpec {
    pub const DEFAULT_WEIGHT: f64 = 1.0;

    /// Create a spec with the default weight of 1.
    pub const fn new(default: i32, min_delta: i32, max_delta: i32) -> Self {
        Self {
            default,
            min_delta,
            max_delta,
            weight: Self::DEFAULT_WEIGHT,
        }
    }

    /// Replace the scoring weight (builder pattern).
    #[must_use]
    pub const fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Lowest legal value.
    #[inline]
    pub const fn min_value(&self) -> i32 {
        self.default + self.min_delta
    }

    /// Highest legal value.
    #[inline]
    pub const fn max_value(&self) -> i32 {
        self.default + self.max_delta
    }

    /// Number of distinct legal values.
    #[inline]
    pub const fn span(&self) -> usize {
        (self.max_delta - self.min_delta) as usize + 1
    }

    /// Returns true if `value` lies within the legal range.
    #[inline]
    pub const fn contains(&self, value: i32) -> bool {
        value >= self.min_value() && value <= self.max_value()
    }

    fn validate(&self, stat: Stat) -> Result<(), ConfigError> {
        if self.min_delta > 0 || self.max_delta < 0 {
            return Err(ConfigError::InvalidStatRange {
                stat,
                min_delta: self.min_delta,
                max_delta: self.max_delta,
            });
        }
        if !self.weight.is_finite() {
            return Err(ConfigError::InvalidStatWeight {
                stat,
                weight: self.weight,
            });
        }
        Ok(())
    }
}

/// One [`StatSpec`] per [`Stat`], validated at construction.
#[derive(Clone, Debug, PartialEq)]
pub struct StatSchema {
    specs: [StatSpec; Stat::COUNT],
}

impl StatSchema {
    /// Create a schema from specs in [`Stat::all`] order.
    pub fn new(specs: [StatSpec; Stat::COUNT]) -> Result<Self, ConfigError> {
        for stat in Stat::all() {
            specs[stat.as_index()].validate(stat)?;
        }
        Ok(Self { specs })
    }

    /// Create a schema from `(stat, spec)` pairs.
    ///
    /// Every stat must appear exactly once.
    pub fn from_entries(
        entries: impl IntoIterator<Item = (Stat, StatSpec)>,
    ) -> Result<Self, ConfigError> {
        let mut slots: [Option<StatSpec>; Stat::COUNT] = [None; Stat::COUNT];
        for (stat, spec) in entries {
            if slots[stat.as_index()].replace(spec).is_some() {
                return Err(ConfigError::DuplicateStat(stat));
            }
        }

        let mut specs = [StatSpec::new(0, 0, 0); Stat::COUNT];
        for stat in Stat::all() {
            specs[stat.as_index()] = slots[stat.as_index()].ok_or(ConfigError::MissingStat(stat))?;
        }
        Self::new(specs)
    }

    /// Gets the spec for a stat.
    #[inline]
    pub fn spec(&self, stat: Stat) -> &StatSpec {
        &self.specs[stat.as_index()]
    }

    /// Iterates `(stat, spec)` pairs in stat order.
    pub fn iter(&self) -> impl Iterator<Item = (Stat, &StatSpec)> + '_ {
        Stat::all().into_iter().map(move |stat| (stat, self.spec(stat)))
    }

    /// Weighted total of an entity that received no swaps.
    ///
    /// Zero under the linear weighting used today, but computed so that a
    /// different total formula stays correct.
    pub fn default_weighted_total(&self) -> f64 {
        super::StatBlock::defaults(self).weighted_total(self)
    }
}
