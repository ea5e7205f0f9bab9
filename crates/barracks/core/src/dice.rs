//! Dice specifications for the per-entity roll budget.
//!
//! A [`DiceSpec`] is an ordered list of die sizes. Rolling every die and
//! summing the faces gives the number of swap attempts an entity receives.
//! Specs are written in `NdX` shorthand (`5d4` is five four-sided dice);
//! mixed pools join terms with `+` (`2d4+1d6`).

use core::fmt;
use core::str::FromStr;

use rand::Rng;

use crate::error::ConfigError;

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct DiceSpec {
    sides: Vec<u32>,
}

impl DiceSpec {
    /// Most dice a single pool may hold.
    pub const MAX_DICE: usize = 10_000;

    /// Create a spec from explicit die sizes.
    ///
    /// The pool may hold at most [`Self::MAX_DICE`] dice whose faces sum to
    /// at most `u32::MAX`, so budgets never overflow.
    pub fn new(sides: Vec<u32>) -> Result<Self, ConfigError> {
        if sides.contains(&0) {
            return Err(ConfigError::ZeroSidedDie);
        }
        let total = sides.iter().try_fold(0u32, |total, &size| total.checked_add(size));
        if sides.len() > Self::MAX_DICE || total.is_none() {
            return Err(too_large());
        }
        Ok(Self { sides })
    }

    /// `count` dice of `sides` faces each.
    pub fn uniform(count: u32, sides: u32) -> Result<Self, ConfigError> {
        if count as usize > Self::MAX_DICE {
            return Err(too_large());
        }
        Self::new(vec![sides; count as usize])
    }

    /// No dice: the roll budget is always zero.
    pub const fn none() -> Self {
        Self { sides: Vec::new() }
    }

    pub fn sides(&self) -> &[u32] {
        &self.sides
    }

    pub fn count(&self) -> usize {
        self.sides.len()
    }

    /// Smallest possible roll budget (every die shows 1).
    pub fn min_budget(&self) -> u32 {
        self.sides.len() as u32
    }

    /// Largest possible roll budget (every die shows its top face).
    pub fn max_budget(&self) -> u32 {
        self.sides.iter().sum()
    }

    /// Roll every die once and sum the faces.
    pub fn roll_budget<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        self.sides.iter().map(|&sides| rng.gen_range(1..=sides)).sum()
    }
}

impl FromStr for DiceSpec {
    type Err = ConfigError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let malformed = || ConfigError::MalformedDice(text.to_string());

        let mut sides: Vec<u32> = Vec::new();
        for term in text.split('+') {
            let (count, size) = term
                .trim()
                .split_once(['d', 'D'])
                .ok_or_else(malformed)?;
            let count: u32 = count.trim().parse().map_err(|_| malformed())?;
            let size: u32 = size.trim().parse().map_err(|_| malformed())?;
            if count > 0 && size == 0 {
                return Err(ConfigError::ZeroSidedDie);
            }
            if sides.len() + count as usize > Self::MAX_DICE {
                return Err(too_large());
            }
            sides.extend(core::iter::repeat_n(size, count as usize));
        }
        Self::new(sides)
    }
}

fn too_large() -> ConfigError {
    ConfigError::DicePoolTooLarge {
        max_dice: DiceSpec::MAX_DICE,
    }
}

impl TryFrom<String> for DiceSpec {
    type Error = ConfigError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        text.parse()
    }
}

impl From<DiceSpec> for String {
    fn from(dice: DiceSpec) -> Self {
        dice.to_string()
    }
}

impl fmt::Display for DiceSpec {
    /// Groups runs of equal dice, e.g. `[4, 4, 6]` prints as `2d4+1d6`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sides.is_empty() {
            return f.write_str("0d0");
        }

        let mut first = true;
        for run in self.sides.chunk_by(|a, b| a == b) {
            if !first {
                f.write_str("+")?;
            }
            write!(f, "{}d{}", run.len(), run[0])?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn parses_shorthand() {
        let dice: DiceSpec = "5d4".parse().unwrap();
        assert_eq!(dice.sides(), &[4, 4, 4, 4, 4]);
        assert_eq!(dice.min_budget(), 5);
        assert_eq!(dice.max_budget(), 20);
    }

    #[test]
    fn parses_mixed_pool() {
        let dice: DiceSpec = " 2d4 + 1D6 ".parse().unwrap();
        assert_eq!(dice.sides(), &[4, 4, 6]);
        assert_eq!(dice.to_string(), "2d4+1d6");
    }

    #[test]
    fn zero_dice_is_empty() {
        let dice: DiceSpec = "0d4".parse().unwrap();
        assert_eq!(dice.count(), 0);
        assert_eq!(dice.max_budget(), 0);
        assert_eq!(dice, DiceSpec::none());
    }

    #[test]
    fn rejects_malformed_text() {
        for text in ["", "5", "d4", "5d", "5x4", "-1d4", "5d4+"] {
            let err = text.parse::<DiceSpec>().unwrap_err();
            assert_eq!(err.error_code(), "malformed_dice", "input {text:?}");
        }
    }

    #[test]
    fn rejects_zero_sided_die() {
        assert_eq!("3d0".parse::<DiceSpec>(), Err(ConfigError::ZeroSidedDie));
        assert_eq!(DiceSpec::new(vec![4, 0]), Err(ConfigError::ZeroSidedDie));
    }

    #[test]
    fn rejects_oversized_pools() {
        for text in ["4000000000d4", "10001d6", "5000d4+5001d4", "2d4294967295"] {
            let err = text.parse::<DiceSpec>().unwrap_err();
            assert_eq!(err.error_code(), "dice_pool_too_large", "input {text:?}");
        }
        assert!(DiceSpec::uniform(u32::MAX, 4).is_err());
        assert!(DiceSpec::new(vec![u32::MAX, 1]).is_err());

        let largest = DiceSpec::uniform(10_000, 4).unwrap();
        assert_eq!(largest.max_budget(), 40_000);
        let widest: DiceSpec = "1d4294967295".parse().unwrap();
        assert_eq!(widest.max_budget(), u32::MAX);
    }

    #[test]
    fn roll_budget_stays_in_range() {
        let dice = DiceSpec::uniform(5, 4).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        let mut seen_min = false;
        let mut seen_max = false;
        for _ in 0..20_000 {
            let budget = dice.roll_budget(&mut rng);
            assert!((5..=20).contains(&budget));
            seen_min |= budget == 5;
            seen_max |= budget == 20;
        }
        // Each extreme has probability 1/1024 per roll
        assert!(seen_min && seen_max);
    }

    #[test]
    fn display_round_trips() {
        let dice = DiceSpec::uniform(8, 8).unwrap();
        assert_eq!(dice.to_string(), "8d8");
        assert_eq!(dice.to_string().parse::<DiceSpec>().unwrap(), dice);
    }
}
