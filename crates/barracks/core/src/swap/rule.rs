use crate::stats::Stat;

/// Raise one stat and lower another by paired amounts.
///
/// The engine flips every drawn rule with probability one half, so a table
/// only lists each trade in one direction.
///
/// `stat_up == stat_down` is a self-swap. With `amount_down = 0` it gives a
/// single stat symmetric variance of `±amount_up`, since the flipped rule
/// lowers the same stat by the same amount.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwapRule {
    pub stat_up: Stat,
    pub amount_up: u32,
    pub stat_down: Stat,
    pub amount_down: u32,
    /// Relative selection weight; must be positive.
    #[cfg_attr(feature = "serde", serde(alias = "weight"))]
    pub selection_weight: f64,
}

impl SwapRule {
    pub const fn new(
        stat_up: Stat,
        amount_up: u32,
        stat_down: Stat,
        amount_down: u32,
        selection_weight: f64,
    ) -> Self {
        Self {
            stat_up,
            amount_up,
            stat_down,
            amount_down,
            selection_weight,
        }
    }

    /// The same trade in the opposite direction.
    #[must_use]
    pub const fn flipped(self) -> Self {
        Self {
            stat_up: self.stat_down,
            amount_up: self.amount_down,
            stat_down: self.stat_up,
            amount_down: self.amount_up,
            selection_weight: self.selection_weight,
        }
    }

    #[inline]
    pub fn is_self_swap(&self) -> bool {
        self.stat_up == self.stat_down
    }

    /// Signed change this rule makes to `stat` when applied.
    ///
    /// Widened to `i64` so any pair of `u32` amounts is exact.
    pub fn net_delta(&self, stat: Stat) -> i64 {
        let mut delta = 0;
        if self.stat_up == stat {
            delta += i64::from(self.amount_up);
        }
        if self.stat_down == stat {
            delta -= i64::from(self.amount_down);
        }
        delta
    }
}
