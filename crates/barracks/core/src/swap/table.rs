use super::SwapRule;
use crate::error::ConfigError;

/// A named collection of swap rules.
///
/// Rule order has no meaning; only membership and weights matter. Every
/// weight is checked to be positive and finite, and every amount to fit in
/// an `i32`, when the table is built.
#[derive(Clone, Debug, PartialEq)]
pub struct SwapTable {
    name: String,
    rules: Vec<SwapRule>,
}

impl SwapTable {
    pub fn new(name: impl Into<String>, rules: Vec<SwapRule>) -> Result<Self, ConfigError> {
        let name = name.into();
        for (index, rule) in rules.iter().enumerate() {
            let weight = rule.selection_weight;
            if !(weight.is_finite() && weight > 0.0) {
                return Err(ConfigError::NonPositiveWeight {
                    table: name,
                    index,
                    weight,
                });
            }

            let amount = rule.amount_up.max(rule.amount_down);
            if i32::try_from(amount).is_err() {
                return Err(ConfigError::SwapAmountTooLarge {
                    table: name,
                    index,
                    amount,
                });
            }
        }
        Ok(Self { name, rules })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rules(&self) -> &[SwapRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn total_weight(&self) -> f64 {
        self.rules.iter().map(|rule| rule.selection_weight).sum()
    }

    /// Probability that a single draw selects the rule at `index`.
    pub fn probability(&self, index: usize) -> Option<f64> {
        let rule = self.rules.get(index)?;
        Some(rule.selection_weight / self.total_weight())
    }
}
