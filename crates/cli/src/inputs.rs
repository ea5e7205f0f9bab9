//! Resolving command-line content options into engine inputs.

use std::path::PathBuf;

use anyhow::{Context, Result};
use barracks_content::{
    ContentFactory, GenerationProfile, SchemaLoader, TableLoader, reference_schema, resolve_profile,
};
use barracks_core::StatSchema;
use barracks_sampler::SamplerConfig;
use clap::Args;

/// Where schema, profiles and engine settings come from.
#[derive(Args, Debug, Default)]
pub struct ContentArgs {
    /// Data directory holding schema.toml, profiles.toml, config.toml and tables/
    #[arg(long, value_name = "DIR")]
    pub data: Option<PathBuf>,

    /// Stat schema TOML file (takes precedence over the data directory)
    #[arg(long, value_name = "FILE")]
    pub schema: Option<PathBuf>,
}

impl ContentArgs {
    fn factory(&self) -> Option<ContentFactory> {
        self.data.as_ref().map(ContentFactory::new)
    }

    pub fn load_schema(&self) -> Result<StatSchema> {
        if let Some(path) = &self.schema {
            return SchemaLoader::load(path);
        }
        match self.factory() {
            Some(factory) => factory.load_schema(),
            None => Ok(reference_schema()?),
        }
    }

    /// Resolve a profile by name, from the data directory if one is given.
    pub fn load_profile(&self, name: &str) -> Result<GenerationProfile> {
        match self.factory() {
            Some(factory) => factory.load_profile(name),
            None => Ok(resolve_profile(name)?.profile()?),
        }
    }

    /// Environment settings, with the data directory's `config.toml` and
    /// an explicit seed layered on top.
    pub fn sampler_config(&self, seed: Option<u64>) -> Result<SamplerConfig> {
        let mut config = SamplerConfig::from_env().with_seed(seed);
        if let Some(factory) = self.factory() {
            let path = factory.data_dir().join("config.toml");
            if path.exists() {
                config.engine = factory
                    .load_engine_config()
                    .with_context(|| format!("loading {}", path.display()))?;
            }
        }
        Ok(config)
    }
}

/// Load a swap table override from a RON file.
pub fn load_table_override(
    profile: GenerationProfile,
    table: Option<&PathBuf>,
) -> Result<GenerationProfile> {
    match table {
        Some(path) => Ok(profile.with_table(TableLoader::load(path)?)),
        None => Ok(profile),
    }
}
