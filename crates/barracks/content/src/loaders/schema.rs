//! Stat schema loader.

use std::collections::BTreeMap;
use std::path::Path;

use barracks_core::{ConfigError, Stat, StatSchema, StatSpec};

use crate::loaders::{LoadResult, read_file};

/// Loader for stat schemas from TOML files.
///
/// One table per stat, keyed by stat name (`eStat_` prefixes accepted):
///
/// ```toml
/// [Offense]
/// default = 65
/// min_delta = -10
/// max_delta = 10
/// weight = 3
/// ```
pub struct SchemaLoader;

impl SchemaLoader {
    /// Load a schema from a TOML file.
    ///
    /// Fails if a key is not a stat name or any stat is missing.
    pub fn load(path: &Path) -> LoadResult<StatSchema> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid schema {}: {}", path.display(), e))
    }

    /// Parse schema TOML from a string.
    pub fn parse(content: &str) -> LoadResult<StatSchema> {
        let raw: BTreeMap<String, StatSpec> = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse schema TOML: {}", e))?;

        let entries = raw
            .into_iter()
            .map(|(name, spec)| {
                let stat: Stat = name.parse().map_err(|_| ConfigError::UnknownStat(name))?;
                Ok((stat, spec))
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        Ok(StatSchema::from_entries(entries)?)
    }
}
