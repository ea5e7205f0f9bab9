//! Reference content and data loaders for soldier generation.
//!
//! This crate houses the static generation content and provides loaders for
//! RON/TOML data files:
//! - The reference stat schema (seven LWOTC soldier stats)
//! - Swap tables for unmodded LWOTC and for "Actually Not Created Equal"
//! - Named generation profiles (swap table + default dice)
//! - Custom schemas, swap tables and profiles (data-driven via TOML/RON)
//!
//! Content is plain data handed to the engine; nothing here is global state.
//! Every constructor validates through barracks-core and returns its
//! [`ConfigError`](barracks_core::ConfigError) on bad data.

pub mod profiles;
pub mod schema;
pub mod tables;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use profiles::{BuiltinProfile, GenerationProfile, resolve_profile};
pub use schema::reference_schema;
pub use tables::{ANCE_SWAPS, LWOTC_SWAPS, ance_table, lwotc_table};

#[cfg(feature = "loaders")]
pub use loaders::{ContentFactory, ProfileLoader, SchemaLoader, TableLoader};
