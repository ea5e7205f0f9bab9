//! Content factory for building generation inputs from a data directory.

use std::path::{Path, PathBuf};

use barracks_core::{EngineConfig, StatSchema, SwapTable};

use crate::loaders::{ConfigLoader, LoadResult, ProfileLoader, ProfileSpec, SchemaLoader, TableLoader};
use crate::profiles::{GenerationProfile, resolve_profile};

/// Content factory that loads generation content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml      (optional, engine tunables)
/// ├── schema.toml      (optional, falls back to the reference schema)
/// ├── profiles.toml    (optional, extra named profiles)
/// └── tables/
///     ├── lwotc.ron
///     └── ancev1.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load engine configuration from `config.toml`, or the defaults if absent.
    pub fn load_engine_config(&self) -> LoadResult<EngineConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            return Ok(EngineConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the stat schema from `schema.toml`, or the reference schema if absent.
    pub fn load_schema(&self) -> LoadResult<StatSchema> {
        let path = self.data_dir.join("schema.toml");
        if !path.exists() {
            tracing::debug!("no schema.toml in {}, using reference schema", self.data_dir.display());
            return Ok(crate::reference_schema()?);
        }
        SchemaLoader::load(&path)
    }

    /// Load a swap table from `tables/{name}.ron`.
    pub fn load_table(&self, name: &str) -> LoadResult<SwapTable> {
        let path = self.data_dir.join("tables").join(format!("{}.ron", name));
        TableLoader::load(&path)
    }

    /// Load profile entries from `profiles.toml` (empty if absent).
    pub fn load_profile_specs(&self) -> LoadResult<Vec<ProfileSpec>> {
        let path = self.data_dir.join("profiles.toml");
        if !path.exists() {
            return Ok(Vec::new());
        }
        ProfileLoader::load(&path)
    }

    /// Resolve a profile by name.
    ///
    /// Entries in `profiles.toml` take precedence over built-in profiles of
    /// the same name. Unknown names fail with the built-in profile list.
    pub fn load_profile(&self, name: &str) -> LoadResult<GenerationProfile> {
        let specs = self.load_profile_specs()?;
        if let Some(spec) = specs.into_iter().find(|spec| spec.name.eq_ignore_ascii_case(name)) {
            let table = self.load_table(&spec.table)?;
            return Ok(GenerationProfile::new(spec.name, table, spec.dice));
        }

        Ok(resolve_profile(name)?.profile()?)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn empty_directory_falls_back_to_builtins() {
        let dir = tempfile::tempdir().unwrap();
        let factory = ContentFactory::new(dir.path());

        assert_eq!(factory.load_schema().unwrap(), crate::reference_schema().unwrap());
        assert_eq!(factory.load_engine_config().unwrap(), EngineConfig::default());

        let profile = factory.load_profile("indep").unwrap();
        assert_eq!(profile.name, "ancev1");
    }

    #[test]
    fn custom_profile_loads_its_table() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("tables")).unwrap();
        fs::write(
            dir.path().join("tables").join("aim_only.ron"),
            "[(stat_up: Offense, amount_up: 1, stat_down: Offense, amount_down: 0, weight: 1.0)]",
        )
        .unwrap();
        fs::write(
            dir.path().join("profiles.toml"),
            "[[profile]]\nname = \"aim\"\ntable = \"aim_only\"\ndice = \"3d6\"\n",
        )
        .unwrap();

        let factory = ContentFactory::new(dir.path());
        let profile = factory.load_profile("aim").unwrap();
        assert_eq!(profile.table.name(), "aim_only");
        assert_eq!(profile.dice.max_budget(), 18);
    }

    #[test]
    fn unknown_profile_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let factory = ContentFactory::new(dir.path());

        let err = factory.load_profile("vanilla").unwrap_err();
        assert!(err.to_string().contains("lwotc, ancev1"), "{err}");
    }
}
