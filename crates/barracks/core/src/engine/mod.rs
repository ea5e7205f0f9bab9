//! The stat-swap engine.
//!
//! [`SwapEngine`] turns a schema, a swap table and a dice spec into one
//! fully resolved [`StatBlock`] per call:
//!
//! 1. Start every stat at its default.
//! 2. Roll the dice; the sum is the number of swap attempts.
//! 3. For each attempt, draw a rule by weight, flip it on a coin toss and
//!    apply it if it keeps both stats in range. An invalid candidate is
//!    redrawn, up to the retry ceiling; after that the attempt is dropped
//!    without changing anything.
//!
//! All configuration is validated in [`SwapEngine::new`]; generation itself
//! cannot fail.

mod selection;

pub use selection::WeightedSelector;

use core::ops::AddAssign;

use rand::Rng;

use crate::config::EngineConfig;
use crate::dice::DiceSpec;
use crate::error::ConfigError;
use crate::stats::{StatBlock, StatSchema};
use crate::swap::{SwapTable, try_swap};

/// Per-entity generation counters.
///
/// Dropped attempts are silent in the generated values; this report is the
/// only place they show up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationReport {
    /// Swap attempts granted by the dice.
    pub roll_budget: u32,
    /// Attempts that applied a swap.
    pub applied: u32,
    /// Attempts dropped after reaching the retry ceiling.
    pub abandoned: u32,
    /// Candidate draws rejected by the bounds check, across all attempts.
    pub rejected: u64,
}

impl AddAssign for GenerationReport {
    fn add_assign(&mut self, other: Self) {
        self.roll_budget += other.roll_budget;
        self.applied += other.applied;
        self.abandoned += other.abandoned;
        self.rejected += other.rejected;
    }
}

/// Generates stat blocks from a fixed, validated configuration.
///
/// The engine only borrows its inputs and holds no mutable state, so a
/// single engine can be shared across threads; each call owns the block it
/// builds.
#[derive(Clone, Debug)]
pub struct SwapEngine<'a> {
    schema: &'a StatSchema,
    table: &'a SwapTable,
    dice: &'a DiceSpec,
    config: EngineConfig,
    /// `None` only when the dice can never produce a roll.
    selector: Option<WeightedSelector>,
}

impl<'a> SwapEngine<'a> {
    /// Validate the inputs and build an engine.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::ZeroRetryCeiling`] if `config` allows no draws
    /// - [`ConfigError::EmptySwapTable`] if the table is empty but the dice
    ///   can yield a positive roll budget
    /// - [`ConfigError::InvalidSelectionWeights`] if the weights cannot form
    ///   a distribution (e.g. their sum overflows)
    pub fn new(
        schema: &'a StatSchema,
        table: &'a SwapTable,
        dice: &'a DiceSpec,
        config: EngineConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let selector = if table.is_empty() {
            if dice.max_budget() > 0 {
                return Err(ConfigError::EmptySwapTable(table.name().to_string()));
            }
            None
        } else {
            let weights = table.rules().iter().map(|rule| rule.selection_weight);
            let selector = WeightedSelector::new(weights).map_err(|e| {
                ConfigError::InvalidSelectionWeights {
                    table: table.name().to_string(),
                    reason: e.to_string(),
                }
            })?;
            Some(selector)
        };

        tracing::debug!(
            table = table.name(),
            rules = table.len(),
            dice = %dice,
            retry_ceiling = config.retry_ceiling,
            "swap engine ready"
        );

        Ok(Self {
            schema,
            table,
            dice,
            config,
            selector,
        })
    }

    pub fn schema(&self) -> &'a StatSchema {
        self.schema
    }

    pub fn table(&self) -> &'a SwapTable {
        self.table
    }

    pub fn dice(&self) -> &'a DiceSpec {
        self.dice
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Generate one entity.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> StatBlock {
        self.generate_with_report(rng).0
    }

    /// Generate one entity and report how its roll budget was spent.
    pub fn generate_with_report<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> (StatBlock, GenerationReport) {
        let mut values = StatBlock::defaults(self.schema);
        let mut report = GenerationReport {
            roll_budget: self.dice.roll_budget(rng),
            ..GenerationReport::default()
        };

        // Without a selector the dice are empty and the budget is zero
        let Some(selector) = &self.selector else {
            return (values, report);
        };

        for attempt in 0..report.roll_budget {
            if self.attempt_swap(selector, &mut values, &mut report, rng) {
                report.applied += 1;
            } else {
                report.abandoned += 1;
                tracing::trace!(
                    attempt,
                    retry_ceiling = self.config.retry_ceiling,
                    "no valid swap found, roll abandoned"
                );
            }
        }

        (values, report)
    }

    /// Draw candidates until one applies or the retry ceiling is reached.
    fn attempt_swap<R: Rng + ?Sized>(
        &self,
        selector: &WeightedSelector,
        values: &mut StatBlock,
        report: &mut GenerationReport,
        rng: &mut R,
    ) -> bool {
        let rules = self.table.rules();
        for _ in 0..self.config.retry_ceiling {
            let mut rule = rules[selector.sample(rng)];
            if rng.gen_bool(0.5) {
                rule = rule.flipped();
            }
            if try_swap(values, &rule, self.schema) {
                return true;
            }
            report.rejected += 1;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::{Stat, StatSpec};
    use crate::swap::SwapRule;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn schema() -> StatSchema {
        StatSchema::new([
            StatSpec::new(65, -10, 10).with_weight(3.0),
            StatSpec::new(15, -2, 3).with_weight(12.0),
            StatSpec::new(4, -1, 3).with_weight(12.0),
            StatSpec::new(30, -15, 15),
            StatSpec::new(5, -15, 15),
            StatSpec::new(5, -4, 15),
            StatSpec::new(20, -15, 15),
        ])
        .unwrap()
    }

    fn small_table() -> SwapTable {
        SwapTable::new(
            "small",
            vec![
                SwapRule::new(Stat::Offense, 1, Stat::Will, 3, 1.0),
                SwapRule::new(Stat::Offense, 4, Stat::Mobility, 1, 1.5),
                SwapRule::new(Stat::Dodge, 2, Stat::Hacking, 2, 0.5),
            ],
        )
        .unwrap()
    }

    #[test]
    fn zero_dice_yields_defaults() {
        let schema = schema();
        let table = small_table();
        let dice = DiceSpec::none();
        let engine = SwapEngine::new(&schema, &table, &dice, EngineConfig::default()).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        for _ in 0..100 {
            let (block, report) = engine.generate_with_report(&mut rng);
            assert_eq!(block, StatBlock::defaults(&schema));
            assert_eq!(block.weighted_total(&schema), schema.default_weighted_total());
            assert_eq!(report, GenerationReport::default());
        }
    }

    #[test]
    fn empty_table_with_dice_is_rejected() {
        let schema = schema();
        let table = SwapTable::new("empty", Vec::new()).unwrap();
        let dice = DiceSpec::uniform(5, 4).unwrap();

        let err = SwapEngine::new(&schema, &table, &dice, EngineConfig::default()).unwrap_err();
        assert_eq!(err, ConfigError::EmptySwapTable("empty".into()));
    }

    #[test]
    fn empty_table_without_dice_is_a_no_op() {
        let schema = schema();
        let table = SwapTable::new("empty", Vec::new()).unwrap();
        let dice = DiceSpec::none();
        let engine = SwapEngine::new(&schema, &table, &dice, EngineConfig::default()).unwrap();

        let block = engine.generate(&mut ChaCha8Rng::seed_from_u64(3));
        assert_eq!(block, StatBlock::defaults(&schema));
    }

    #[test]
    fn zero_retry_ceiling_is_rejected() {
        let schema = schema();
        let table = small_table();
        let dice = DiceSpec::uniform(1, 4).unwrap();

        let err = SwapEngine::new(&schema, &table, &dice, EngineConfig::with_retry_ceiling(0))
            .unwrap_err();
        assert_eq!(err, ConfigError::ZeroRetryCeiling);
    }

    #[test]
    fn report_accounts_for_every_roll() {
        let schema = schema();
        let table = small_table();
        let dice = DiceSpec::uniform(8, 8).unwrap();
        let engine = SwapEngine::new(&schema, &table, &dice, EngineConfig::default()).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(11);

        for _ in 0..500 {
            let (block, report) = engine.generate_with_report(&mut rng);
            assert!((8..=64).contains(&report.roll_budget));
            assert_eq!(report.applied + report.abandoned, report.roll_budget);
            assert!(block.within_bounds(&schema));
        }
    }

    #[test]
    fn unsatisfiable_rule_abandons_every_roll() {
        // Offense may move at most 4 either way, so +5 and -5 both fail
        let mut specs = [StatSpec::new(10, -10, 10); Stat::COUNT];
        specs[Stat::Offense.as_index()] = StatSpec::new(65, -4, 4);
        let schema = StatSchema::new(specs).unwrap();
        let table = SwapTable::new(
            "stuck",
            vec![SwapRule::new(Stat::Offense, 5, Stat::Will, 1, 1.0)],
        )
        .unwrap();
        let dice = DiceSpec::uniform(5, 4).unwrap();
        let engine = SwapEngine::new(&schema, &table, &dice, EngineConfig::default()).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(5);

        for _ in 0..20 {
            let (block, report) = engine.generate_with_report(&mut rng);
            assert_eq!(block, StatBlock::defaults(&schema));
            assert_eq!(report.applied, 0);
            assert_eq!(report.abandoned, report.roll_budget);
            assert_eq!(
                report.rejected,
                u64::from(report.roll_budget) * u64::from(EngineConfig::DEFAULT_RETRY_CEILING)
            );
        }
    }

    #[test]
    fn one_sided_rule_only_moves_in_valid_direction() {
        // Offense cannot rise by 5 but can fall by 5; Will can rise by 1
        let mut specs = [StatSpec::new(10, -10, 10); Stat::COUNT];
        specs[Stat::Offense.as_index()] = StatSpec::new(65, -10, 4);
        let schema = StatSchema::new(specs).unwrap();
        let table = SwapTable::new(
            "one-sided",
            vec![SwapRule::new(Stat::Offense, 5, Stat::Will, 1, 1.0)],
        )
        .unwrap();
        let dice = DiceSpec::uniform(1, 1).unwrap();
        let engine = SwapEngine::new(&schema, &table, &dice, EngineConfig::default()).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(9);

        for _ in 0..50 {
            let block = engine.generate(&mut rng);
            assert_eq!(block[Stat::Offense], 60);
            assert_eq!(block[Stat::Will], 11);
        }
    }

    #[test]
    fn same_seed_same_entity() {
        let schema = schema();
        let table = small_table();
        let dice = DiceSpec::uniform(5, 4).unwrap();
        let engine = SwapEngine::new(&schema, &table, &dice, EngineConfig::default()).unwrap();

        let a = engine.generate(&mut ChaCha8Rng::seed_from_u64(77));
        let b = engine.generate(&mut ChaCha8Rng::seed_from_u64(77));
        assert_eq!(a, b);
    }
}
