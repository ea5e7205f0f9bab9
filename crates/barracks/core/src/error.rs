//! Configuration errors for barracks-core.
//!
//! Every error in this crate is a configuration error: it is raised while a
//! schema, swap table, dice specification or engine is being built, never
//! during generation. A swap that would push a stat out of bounds is ordinary
//! control flow inside the engine and does not surface here.
//!
//! # Design Principles
//!
//! - **Fail before generating**: an engine cannot exist in a partially
//!   configured state, so `SwapEngine::generate` is infallible
//! - **Rich Context**: variants carry the offending stat, table or input text
//! - **Stable codes**: [`ConfigError::error_code`] gives a static identifier
//!   for logs and tests

use crate::stats::Stat;

/// Error raised while assembling generation inputs.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A generation profile (swap table + dice) was requested by an unknown name.
    #[error("unknown generation profile '{name}' (available: {available})")]
    UnknownProfile { name: String, available: String },

    /// Dice text did not match `NdX` (optionally joined with `+`).
    #[error("malformed dice specification '{0}': expected NdX, e.g. 5d4")]
    MalformedDice(String),

    /// A die with zero sides cannot be rolled.
    #[error("dice specification contains a zero-sided die")]
    ZeroSidedDie,

    /// Too many dice, or faces summing past `u32::MAX`.
    #[error("dice pool too large: at most {max_dice} dice with at most 4294967295 faces in total")]
    DicePoolTooLarge { max_dice: usize },

    /// A stat's delta range does not contain zero.
    #[error(
        "stat {stat} has invalid delta range [{min_delta}, {max_delta}]: \
         expected min_delta <= 0 <= max_delta"
    )]
    InvalidStatRange {
        stat: Stat,
        min_delta: i32,
        max_delta: i32,
    },

    /// A stat's scoring weight is NaN or infinite.
    #[error("stat {stat} has non-finite weight {weight}")]
    InvalidStatWeight { stat: Stat, weight: f64 },

    /// A swap rule's selection weight is zero, negative or not finite.
    #[error("swap table '{table}' rule #{index} has non-positive selection weight {weight}")]
    NonPositiveWeight {
        table: String,
        index: usize,
        weight: f64,
    },

    /// A swap rule moves a stat by more than any stat range can hold.
    #[error("swap table '{table}' rule #{index} has amount {amount}, above the maximum of 2147483647")]
    SwapAmountTooLarge {
        table: String,
        index: usize,
        amount: u32,
    },

    /// The weighted distribution over a table's rules could not be built.
    #[error("swap table '{table}' has unusable selection weights: {reason}")]
    InvalidSelectionWeights { table: String, reason: String },

    /// A stat name did not match any known stat.
    #[error("unknown stat '{0}'")]
    UnknownStat(String),

    /// A schema omitted one of the stats.
    #[error("schema has no entry for stat {0}")]
    MissingStat(Stat),

    /// A schema listed the same stat twice, e.g. as `Offense` and `eStat_Offense`.
    #[error("schema has more than one entry for stat {0}")]
    DuplicateStat(Stat),

    /// The dice can produce rolls but the table has nothing to roll on.
    #[error("swap table '{0}' is empty but the dice can yield a positive roll budget")]
    EmptySwapTable(String),

    /// A retry ceiling of zero would abandon every roll.
    #[error("retry ceiling must be at least 1")]
    ZeroRetryCeiling,
}

impl ConfigError {
    /// Returns a static string identifier for this error variant.
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownProfile { .. } => "unknown_profile",
            Self::MalformedDice(_) => "malformed_dice",
            Self::ZeroSidedDie => "zero_sided_die",
            Self::DicePoolTooLarge { .. } => "dice_pool_too_large",
            Self::InvalidStatRange { .. } => "invalid_stat_range",
            Self::InvalidStatWeight { .. } => "invalid_stat_weight",
            Self::NonPositiveWeight { .. } => "non_positive_weight",
            Self::SwapAmountTooLarge { .. } => "swap_amount_too_large",
            Self::InvalidSelectionWeights { .. } => "invalid_selection_weights",
            Self::UnknownStat(_) => "unknown_stat",
            Self::MissingStat(_) => "missing_stat",
            Self::DuplicateStat(_) => "duplicate_stat",
            Self::EmptySwapTable(_) => "empty_swap_table",
            Self::ZeroRetryCeiling => "zero_retry_ceiling",
        }
    }
}
