//! Batch sampling and distribution analysis on top of the swap engine.
//!
//! A [`Sampler`] drives one [`SwapEngine`](barracks_core::SwapEngine) over
//! many entities and collects the results into a [`SampleMatrix`]. Entity
//! `i` always draws from its own RNG seeded with
//! [`entity_seed(base_seed, i)`](barracks_core::entity_seed), so a batch is
//! reproducible whether it runs on one thread or many.
//!
//! [`StatHistogram`], [`TotalsHistogram`] and [`ColumnSummary`] turn a
//! matrix into the distributions the CLI renders.

pub mod config;
pub mod histogram;
pub mod matrix;
pub mod sampler;
pub mod summary;

pub use config::SamplerConfig;
pub use histogram::{StatHistogram, TotalsHistogram};
pub use matrix::SampleMatrix;
pub use sampler::Sampler;
pub use summary::ColumnSummary;
