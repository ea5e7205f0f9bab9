//! Weighted categorical draws over swap rules.

use rand::Rng;
use rand::distributions::{Distribution, WeightedError, WeightedIndex};

/// Draws an index with probability proportional to its weight.
///
/// Backed by a cumulative-weight table searched with a uniform sample, built
/// once and reused for every draw.
#[derive(Clone, Debug)]
pub struct WeightedSelector {
    index: WeightedIndex<f64>,
}

impl WeightedSelector {
    /// Fails if there are no weights, or any weight is negative or non-finite,
    /// or all weights are zero.
    pub fn new<I>(weights: I) -> Result<Self, WeightedError>
    where
        I: IntoIterator<Item = f64>,
    {
        Ok(Self {
            index: WeightedIndex::new(weights)?,
        })
    }

    #[inline]
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        self.index.sample(rng)
    }
}
