//! Generation profile list loader.

use std::path::Path;

use barracks_core::DiceSpec;

use crate::loaders::{LoadResult, read_file};

/// A profile entry as written in `profiles.toml`.
///
/// `table` names a RON file under the data directory's `tables/` folder
/// (without extension).
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct ProfileSpec {
    pub name: String,
    pub table: String,
    pub dice: DiceSpec,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(serde::Deserialize)]
struct ProfileFile {
    #[serde(default, rename = "profile")]
    profiles: Vec<ProfileSpec>,
}

/// Loader for profile lists from TOML files.
///
/// ```toml
/// [[profile]]
/// name = "lwotc"
/// table = "lwotc"
/// dice = "5d4"
/// ```
pub struct ProfileLoader;

impl ProfileLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<ProfileSpec>> {
        let content = read_file(path)?;
        let file: ProfileFile = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse profiles TOML: {}", e))?;

        Ok(file.profiles)
    }
}
