//! Seeding for reproducible batch generation.
//!
//! Each generated entity draws from its own generator, seeded from the batch
//! seed and the entity's index. A batch is therefore identical no matter how
//! its entities are spread across worker threads, and any single entity can be
//! regenerated in isolation.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Generator type used for one entity.
pub type EntityRng = ChaCha8Rng;

/// Compute a deterministic seed for the entity at `index` within a batch.
///
/// Consecutive indices map to well-separated seeds; the mixing constants are
/// the SplitMix64 / Murmur3 finalizer multipliers.
pub fn entity_seed(base_seed: u64, index: u64) -> u64 {
    let mut hash = base_seed;

    // Mix in the entity index
    hash ^= index.wrapping_add(1).wrapping_mul(0x9e3779b97f4a7c15);

    // Final avalanche step
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xc4ceb9fe1a85ec53);
    hash ^= hash >> 33;

    hash
}

/// Build the generator for the entity at `index` within a batch.
pub fn entity_rng(base_seed: u64, index: u64) -> EntityRng {
    ChaCha8Rng::seed_from_u64(entity_seed(base_seed, index))
}
