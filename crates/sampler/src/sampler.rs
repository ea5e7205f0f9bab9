//! Batch generation.

use barracks_core::{GenerationReport, StatBlock, SwapEngine, entity_rng};
use rayon::prelude::*;

use crate::config::SamplerConfig;
use crate::matrix::SampleMatrix;

/// Generates batches of entities from one engine.
#[derive(Clone, Debug)]
pub struct Sampler<'a> {
    engine: SwapEngine<'a>,
    base_seed: u64,
    parallel_threshold: usize,
    with_totals: bool,
}

impl<'a> Sampler<'a> {
    pub fn new(engine: SwapEngine<'a>, base_seed: u64) -> Self {
        Self {
            engine,
            base_seed,
            parallel_threshold: SamplerConfig::DEFAULT_PARALLEL_THRESHOLD,
            with_totals: false,
        }
    }

    /// Build a sampler from config, resolving (and logging) a random seed if
    /// none is set.
    pub fn from_config(engine: SwapEngine<'a>, config: &SamplerConfig) -> Self {
        Self::new(engine, config.resolve_seed()).with_parallel_threshold(config.parallel_threshold)
    }

    #[must_use]
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Also collect each entity's weighted stat total.
    #[must_use]
    pub fn with_totals(mut self, with_totals: bool) -> Self {
        self.with_totals = with_totals;
        self
    }

    pub fn base_seed(&self) -> u64 {
        self.base_seed
    }

    pub fn engine(&self) -> &SwapEngine<'a> {
        &self.engine
    }

    /// Generate `count` entities.
    ///
    /// Row `i` depends only on the base seed and `i`, so the matrix is the
    /// same whether the batch ran sequentially or in parallel.
    pub fn sample(&self, count: usize) -> SampleMatrix {
        let generated: Vec<(StatBlock, GenerationReport)> = if count > self.parallel_threshold {
            (0..count)
                .into_par_iter()
                .map(|index| self.generate_one(index))
                .collect()
        } else {
            (0..count).map(|index| self.generate_one(index)).collect()
        };

        let mut report = GenerationReport::default();
        let mut rows = Vec::with_capacity(count);
        for (block, entity_report) in generated {
            report += entity_report;
            rows.push(block);
        }

        let schema = self.engine.schema();
        let totals = self
            .with_totals
            .then(|| rows.iter().map(|row| row.weighted_total(schema)).collect());

        tracing::debug!(
            entities = count,
            table = self.engine.table().name(),
            seed = self.base_seed,
            applied = report.applied,
            abandoned = report.abandoned,
            "sampled batch"
        );

        SampleMatrix::new(rows, totals, report)
    }

    fn generate_one(&self, index: usize) -> (StatBlock, GenerationReport) {
        let mut rng = entity_rng(self.base_seed, index as u64);
        self.engine.generate_with_report(&mut rng)
    }
}
