//! Stat definitions.
//!
//! ```text
//! [ Stat ]        closed set of soldier stats, used as array index
//!      ↓
//! [ StatSpec ]    default value, legal delta range, scoring weight
//!      ↓
//! [ StatSchema ]  one spec per stat, shared read-only by every entity
//!      ↓
//! [ StatBlock ]   one entity's current values
//! ```

pub mod block;
pub mod kind;
pub mod schema;

pub use block::StatBlock;
pub use kind::Stat;
pub use schema::{StatSchema, StatSpec};
