//! Reference stat schema.

use barracks_core::{ConfigError, StatSchema, StatSpec};

/// The seven randomized LWOTC soldier stats.
///
/// Weights score how much a point of each stat is worth: Mobility and HP
/// are valued at four points of Offense.
///
/// | Stat       | default | min_delta | max_delta | weight |
/// |------------|---------|-----------|-----------|--------|
/// | Offense    | 65      | -10       | 10        | 3      |
/// | Mobility   | 15      | -2        | 3         | 12     |
/// | HP         | 4       | -1        | 3         | 12     |
/// | Will       | 30      | -15       | 15        | 1      |
/// | Dodge      | 5       | -15       | 15        | 1      |
/// | Hacking    | 5       | -4        | 15        | 1      |
/// | PsiOffense | 20      | -15       | 15        | 1      |
pub fn reference_schema() -> Result<StatSchema, ConfigError> {
    StatSchema::new([
        StatSpec::new(65, -10, 10).with_weight(3.0),
        StatSpec::new(15, -2, 3).with_weight(12.0),
        StatSpec::new(4, -1, 3).with_weight(12.0),
        StatSpec::new(30, -15, 15),
        StatSpec::new(5, -15, 15),
        StatSpec::new(5, -4, 15),
        StatSpec::new(20, -15, 15),
    ])
}
