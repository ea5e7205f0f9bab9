//! Bounds validation for candidate swaps.
//!
//! A candidate is checked against the values it would produce with both legs
//! applied. For a self-swap both legs land on the same stat, so only the net
//! change `amount_up − amount_down` is compared to the range.

use super::SwapRule;
use crate::stats::{Stat, StatBlock, StatSchema};

/// Value of `stat` after applying both legs of `rule`, without any bounds
/// check. Computed in `i64` so no amount can wrap.
fn post_value(values: &StatBlock, rule: &SwapRule, stat: Stat) -> i64 {
    i64::from(values.get(stat)) + rule.net_delta(stat)
}

/// Returns true if `rule` keeps `stat_up` at or below its maximum and
/// `stat_down` at or above its minimum.
pub fn is_valid_swap(values: &StatBlock, rule: &SwapRule, schema: &StatSchema) -> bool {
    post_value(values, rule, rule.stat_up) <= i64::from(schema.spec(rule.stat_up).max_value())
        && post_value(values, rule, rule.stat_down)
            >= i64::from(schema.spec(rule.stat_down).min_value())
}

/// Applies `rule` if it is valid. Returns whether it was applied; on `false`
/// the values are untouched.
pub fn try_swap(values: &mut StatBlock, rule: &SwapRule, schema: &StatSchema) -> bool {
    if !is_valid_swap(values, rule, schema) {
        return false;
    }

    // A valid swap leaves both stats inside their ranges, so both fit in i32
    let up = i32::try_from(post_value(values, rule, rule.stat_up));
    let down = i32::try_from(post_value(values, rule, rule.stat_down));
    let (Ok(up), Ok(down)) = (up, down) else {
        return false;
    };

    values.set(rule.stat_up, up);
    values.set(rule.stat_down, down);
    true
}
