//! Constrained random stat-swap generation for soldier rosters.
//!
//! `barracks-core` defines the canonical generation rules (stat schema, swap
//! tables, dice budgets and the swap engine) and exposes pure APIs that the
//! sampler and offline tools build on. Schema and swap tables are immutable
//! values passed into [`engine::SwapEngine`]; nothing here holds global state.
pub mod config;
pub mod dice;
pub mod engine;
pub mod error;
pub mod rng;
pub mod stats;
pub mod swap;

pub use config::EngineConfig;
pub use dice::DiceSpec;
pub use engine::{GenerationReport, SwapEngine, WeightedSelector};
pub use error::ConfigError;
pub use rng::{EntityRng, entity_rng, entity_seed};
pub use stats::{Stat, StatBlock, StatSchema, StatSpec};
pub use swap::{SwapRule, SwapTable, is_valid_swap, try_swap};
