//! Sampler configuration and environment loading.

use std::env;

use barracks_core::EngineConfig;

/// Batch sampling settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SamplerConfig {
    /// Base seed for the batch. `None` draws a fresh seed per run.
    pub seed: Option<u64>,
    /// Batches larger than this run on the rayon pool.
    pub parallel_threshold: usize,
    pub engine: EngineConfig,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            seed: None,
            parallel_threshold: Self::DEFAULT_PARALLEL_THRESHOLD,
            engine: EngineConfig::default(),
        }
    }
}

impl SamplerConfig {
    pub const DEFAULT_PARALLEL_THRESHOLD: usize = 256;

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `BARRACKS_SEED` - Base seed for reproducible batches (default: random)
    /// - `BARRACKS_PARALLEL_THRESHOLD` - Smallest batch run in parallel (default: 256)
    /// - `BARRACKS_RETRY_CEILING` - Draws per roll before abandoning it (default: 1000)
    ///
    /// Unparsable values are ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(seed) = read_env::<u64>("BARRACKS_SEED") {
            config.seed = Some(seed);
        }
        if let Some(threshold) = read_env::<usize>("BARRACKS_PARALLEL_THRESHOLD") {
            config.parallel_threshold = threshold;
        }
        if let Some(ceiling) = read_env::<u32>("BARRACKS_RETRY_CEILING") {
            config.engine.retry_ceiling = ceiling.max(1);
        }

        config
    }

    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// The configured seed, or a fresh one from OS entropy.
    ///
    /// A drawn seed is logged so the run can be repeated with `--seed`.
    pub fn resolve_seed(&self) -> u64 {
        match self.seed {
            Some(seed) => seed,
            None => {
                let seed = rand::random::<u64>();
                tracing::info!(seed, "no seed given, drew one from entropy");
                seed
            }
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SamplerConfig::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.parallel_threshold, 256);
        assert_eq!(config.engine.retry_ceiling, 1000);
    }

    #[test]
    fn explicit_seed_wins() {
        let config = SamplerConfig::default().with_seed(Some(7));
        assert_eq!(config.resolve_seed(), 7);

        let kept = config.clone().with_seed(None);
        assert_eq!(kept.seed, Some(7));
    }

    #[test]
    fn missing_env_keys_read_as_none() {
        assert_eq!(read_env::<u64>("BARRACKS_TEST_KEY_THAT_IS_NEVER_SET"), None);
    }
}
