use barracks_core::{
    DiceSpec, EngineConfig, Stat, StatBlock, StatSchema, StatSpec, SwapEngine, SwapRule, SwapTable,
    entity_rng,
};
use proptest::prelude::*;

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
    .expect("schema should be valid")
}

/// Mix of paired trades and self-swaps, including lopsided amounts that
/// run into the narrow Mobility/HP ranges quickly.
fn mixed_table() -> SwapTable {
    SwapTable::new(
        "mixed",
        vec![
            SwapRule::new(Stat::Offense, 4, Stat::Mobility, 1, 1.5),
            SwapRule::new(Stat::Offense, 4, Stat::HP, 1, 1.5),
            SwapRule::new(Stat::HP, 1, Stat::PsiOffense, 12, 1.0),
            SwapRule::new(Stat::Mobility, 1, Stat::PsiOffense, 12, 1.0),
            SwapRule::new(Stat::Dodge, 7, Stat::PsiOffense, 7, 1.0),
            SwapRule::new(Stat::Will, 2, Stat::Hacking, 2, 0.5),
            SwapRule::new(Stat::Dodge, 3, Stat::Dodge, 0, 0.75),
            SwapRule::new(Stat::Hacking, 5, Stat::Hacking, 2, 0.5),
        ],
    )
    .expect("table should be valid")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: every generated stat stays inside its schema range
    #[test]
    fn prop_generated_stats_within_bounds(
        seed in any::<u64>(),
        count in 0u32..12,
        sides in 1u32..12,
    ) {
        let schema = schema();
        let table = mixed_table();
        let dice = DiceSpec::uniform(count, sides).unwrap();
        let engine = SwapEngine::new(&schema, &table, &dice, EngineConfig::default()).unwrap();

        for index in 0..50 {
            let (block, report) = engine.generate_with_report(&mut entity_rng(seed, index));
            for (stat, spec) in schema.iter() {
                prop_assert!(spec.contains(block[stat]), "{stat} = {}", block[stat]);
            }
            prop_assert_eq!(report.applied + report.abandoned, report.roll_budget);
            prop_assert!(report.roll_budget >= dice.min_budget());
            prop_assert!(report.roll_budget <= dice.max_budget());
        }
    }

    /// Property: with no dice nothing moves and the total matches the default total
    #[test]
    fn prop_zero_dice_keeps_defaults(seed in any::<u64>()) {
        let schema = schema();
        let table = mixed_table();
        let dice = DiceSpec::none();
        let engine = SwapEngine::new(&schema, &table, &dice, EngineConfig::default()).unwrap();

        let block = engine.generate(&mut entity_rng(seed, 0));
        prop_assert_eq!(block, StatBlock::defaults(&schema));
        prop_assert_eq!(block.weighted_total(&schema), schema.default_weighted_total());
    }
}

#[test]
fn balanced_self_swaps_never_move_stats() {
    let schema = schema();
    let table = SwapTable::new(
        "balanced",
        vec![
            SwapRule::new(Stat::Will, 2, Stat::Will, 2, 1.0),
            SwapRule::new(Stat::Offense, 5, Stat::Offense, 5, 1.0),
        ],
    )
    .unwrap();
    let dice = DiceSpec::uniform(8, 8).unwrap();
    let engine = SwapEngine::new(&schema, &table, &dice, EngineConfig::default()).unwrap();

    for index in 0..200 {
        let (block, report) = engine.generate_with_report(&mut entity_rng(17, index));
        assert_eq!(block, StatBlock::defaults(&schema));
        // Every roll applies since a zero net change is always in range
        assert_eq!(report.applied, report.roll_budget);
    }
}

#[test]
fn one_directional_self_swap_moves_both_ways() {
    let schema = schema();
    let table = SwapTable::new(
        "indep-dodge",
        vec![SwapRule::new(Stat::Dodge, 1, Stat::Dodge, 0, 1.0)],
    )
    .unwrap();
    let dice = DiceSpec::uniform(4, 4).unwrap();
    let engine = SwapEngine::new(&schema, &table, &dice, EngineConfig::default()).unwrap();

    let mut raised = false;
    let mut lowered = false;
    for index in 0..500 {
        let block = engine.generate(&mut entity_rng(23, index));
        let delta = block.delta(Stat::Dodge, &schema);
        raised |= delta > 0;
        lowered |= delta < 0;
        for stat in Stat::all().into_iter().filter(|&s| s != Stat::Dodge) {
            assert_eq!(block.delta(stat, &schema), 0);
        }
    }
    assert!(raised && lowered);
}
