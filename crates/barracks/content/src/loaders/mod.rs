//! Content loaders for reading generation data from files.
//!
//! Schemas and profile lists are TOML; swap tables are RON. Every loaded
//! value goes through the same barracks-core constructors as the built-in
//! content, so a file cannot produce an engine input the code would reject.

pub mod config;
pub mod factory;
pub mod profile;
pub mod schema;
pub mod table;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use profile::{ProfileLoader, ProfileSpec};
pub use schema::SchemaLoader;
pub use table::TableLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
