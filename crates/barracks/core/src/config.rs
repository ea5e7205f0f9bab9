use crate::error::ConfigError;

/// Engine tunables.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// Candidate draws allowed for a single roll before it is abandoned.
    pub retry_ceiling: u32,
}

impl EngineConfig {
    /// Retry ceiling used by the reference generator. Downstream distributions
    /// depend on this value; do not change it casually.
    pub const DEFAULT_RETRY_CEILING: u32 = 1000;

    pub const fn new() -> Self {
        Self {
            retry_ceiling: Self::DEFAULT_RETRY_CEILING,
        }
    }

    pub const fn with_retry_ceiling(retry_ceiling: u32) -> Self {
        Self { retry_ceiling }
    }

    /// Rejects a zero ceiling, which would abandon every roll.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.retry_ceiling == 0 {
            return Err(ConfigError::ZeroRetryCeiling);
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}
