//! Swap rules, swap tables and the bounds validator.

pub mod rule;
pub mod table;
pub mod validate;

pub use rule::SwapRule;
pub use table::SwapTable;
pub use validate::{is_valid_swap, try_swap};
