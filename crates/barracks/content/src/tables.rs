//! Reference swap tables.
//!
//! Each entry is `(up, amount, down, amount, weight)`. The engine flips rules
//! at random, so every trade is listed in one direction only.

use barracks_core::Stat::{Dodge, HP, Hacking, Mobility, Offense, PsiOffense, Will};
use barracks_core::{ConfigError, Stat, SwapRule, SwapTable};

const fn swap(up: Stat, up_by: u32, down: Stat, down_by: u32, weight: f64) -> SwapRule {
    SwapRule::new(up, up_by, down, down_by, weight)
}

/// Swap table shipped with unmodded LWOTC.
pub const LWOTC_SWAPS: [SwapRule; 30] = [
    swap(Offense, 1, Will, 3, 1.0),
    swap(Offense, 2, Will, 6, 1.0),
    swap(Offense, 4, Mobility, 1, 1.5),
    swap(Offense, 4, HP, 1, 1.5),
    swap(Offense, 1, Hacking, 3, 0.5),
    swap(Offense, 1, PsiOffense, 3, 1.0),
    swap(Offense, 2, PsiOffense, 6, 1.0),
    swap(Offense, 1, Dodge, 3, 1.0),
    swap(Offense, 2, Dodge, 6, 0.5),
    swap(HP, 1, Mobility, 1, 2.0),
    swap(HP, 1, PsiOffense, 12, 1.0),
    swap(Mobility, 1, PsiOffense, 12, 1.0),
    swap(Dodge, 1, Will, 1, 1.0),
    swap(Dodge, 2, Will, 2, 1.0),
    swap(Dodge, 3, Will, 3, 1.0),
    swap(Dodge, 4, Will, 4, 1.0),
    swap(Dodge, 1, Hacking, 1, 0.5),
    swap(Dodge, 2, Hacking, 2, 0.5),
    swap(Dodge, 3, Hacking, 3, 0.5),
    swap(Dodge, 4, Hacking, 4, 0.5),
    swap(Dodge, 4, PsiOffense, 4, 1.0),
    swap(Dodge, 5, PsiOffense, 5, 1.0),
    swap(Dodge, 6, PsiOffense, 6, 1.0),
    swap(Dodge, 7, PsiOffense, 7, 1.0),
    swap(Will, 1, Hacking, 1, 0.5),
    swap(Will, 2, Hacking, 2, 0.5),
    swap(Will, 4, PsiOffense, 4, 0.5),
    swap(Will, 5, PsiOffense, 5, 1.0),
    swap(Will, 6, PsiOffense, 6, 1.0),
    swap(Will, 7, PsiOffense, 7, 1.0),
];

/// Swap table from the "Actually Not Created Equal" mod.
///
/// Every rule is a self-swap with no down leg, so each stat varies
/// independently: a drawn rule raises its stat, the flipped rule lowers it.
pub const ANCE_SWAPS: [SwapRule; 15] = [
    swap(Offense, 1, Offense, 0, 2.0),
    swap(Offense, 2, Offense, 0, 1.0),
    swap(HP, 1, HP, 0, 0.75),
    swap(Mobility, 1, Mobility, 0, 0.75),
    swap(Dodge, 1, Dodge, 0, 1.25),
    swap(Dodge, 2, Dodge, 0, 1.0),
    swap(Dodge, 3, Dodge, 0, 0.75),
    swap(Will, 1, Will, 0, 1.25),
    swap(Will, 2, Will, 0, 1.0),
    swap(Will, 3, Will, 0, 0.75),
    swap(Hacking, 1, Hacking, 0, 2.0),
    swap(Hacking, 2, Hacking, 0, 1.0),
    swap(PsiOffense, 1, PsiOffense, 0, 1.25),
    swap(PsiOffense, 2, PsiOffense, 0, 1.0),
    swap(PsiOffense, 3, PsiOffense, 0, 0.75),
];

pub fn lwotc_table() -> Result<SwapTable, ConfigError> {
    SwapTable::new("lwotc", LWOTC_SWAPS.to_vec())
}

pub fn ance_table() -> Result<SwapTable, ConfigError> {
    SwapTable::new("ancev1", ANCE_SWAPS.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_tables_build() {
        let lwotc = lwotc_table().unwrap();
        assert_eq!(lwotc.len(), 30);
        assert_eq!(lwotc.total_weight(), 27.5);

        let ance = ance_table().unwrap();
        assert_eq!(ance.len(), 15);
        assert!(ance.rules().iter().all(|rule| rule.is_self_swap()));
        assert!(ance.rules().iter().all(|rule| rule.amount_down == 0));
    }

    #[test]
    fn lwotc_has_no_self_swaps() {
        assert!(LWOTC_SWAPS.iter().all(|rule| !rule.is_self_swap()));
    }
}
