//! Swap table loader.

use std::path::Path;

use barracks_core::{SwapRule, SwapTable};

use crate::loaders::{LoadResult, read_file};

/// Loader for swap tables from RON files.
///
/// RON format: `Vec<SwapRule>`, e.g.
///
/// ```ron
/// [
///     (stat_up: Offense, amount_up: 1, stat_down: Will, amount_down: 3, weight: 1.0),
///     (stat_up: Dodge, amount_up: 2, stat_down: Dodge, amount_down: 0, weight: 1.0),
/// ]
/// ```
pub struct TableLoader;

impl TableLoader {
    /// Load a swap table from a RON file, named after the file stem.
    pub fn load(path: &Path) -> LoadResult<SwapTable> {
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "custom".to_string());

        let content = read_file(path)?;
        Self::parse(name, &content)
            .map_err(|e| anyhow::anyhow!("Invalid swap table {}: {}", path.display(), e))
    }

    /// Parse a swap table from RON text.
    pub fn parse(name: impl Into<String>, content: &str) -> LoadResult<SwapTable> {
        let rules: Vec<SwapRule> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse swap table RON: {}", e))?;

        let table = SwapTable::new(name, rules)?;
        tracing::debug!(table = table.name(), rules = table.len(), "loaded swap table");
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use barracks_core::Stat;
    use std::io::Write;

    #[test]
    fn parses_rules() {
        let table = TableLoader::parse(
            "mini",
            r#"[
                (stat_up: Offense, amount_up: 1, stat_down: Will, amount_down: 3, weight: 1.0),
                (stat_up: eStat_Dodge, amount_up: 2, stat_down: Dodge, amount_down: 0, selection_weight: 0.5),
            ]"#,
        )
        .unwrap();

        assert_eq!(table.name(), "mini");
        assert_eq!(
            table.rules()[0],
            SwapRule::new(Stat::Offense, 1, Stat::Will, 3, 1.0)
        );
        assert!(table.rules()[1].is_self_swap());
    }

    #[test]
    fn rejects_non_positive_weight() {
        let err = TableLoader::parse(
            "bad",
            "[(stat_up: HP, amount_up: 1, stat_down: Mobility, amount_down: 1, weight: 0.0)]",
        )
        .unwrap_err();
        assert!(err.to_string().contains("non-positive selection weight"), "{err}");
    }

    #[test]
    fn rejects_amount_that_would_wrap() {
        let err = TableLoader::parse(
            "huge",
            "[(stat_up: Offense, amount_up: 4294967295, stat_down: Will, amount_down: 0, weight: 1.0)]",
        )
        .unwrap_err();
        let config = err.downcast_ref::<barracks_core::ConfigError>().unwrap();
        assert_eq!(config.error_code(), "swap_amount_too_large");
    }

    #[test]
    fn rejects_unknown_stat() {
        let result = TableLoader::parse(
            "bad",
            "[(stat_up: Strength, amount_up: 1, stat_down: Will, amount_down: 1, weight: 1.0)]",
        );
        assert!(result.is_err());
    }

    #[test]
    fn names_table_after_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("second_wave.ron");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "[(stat_up: Hacking, amount_up: 2, stat_down: Hacking, amount_down: 0, weight: 1.0)]"
        )
        .unwrap();

        let table = TableLoader::load(&path).unwrap();
        assert_eq!(table.name(), "second_wave");
        assert_eq!(table.len(), 1);
    }
}
