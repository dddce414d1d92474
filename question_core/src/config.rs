//! Engine configuration.

use serde::{Deserialize, Serialize};

/// Questions allowed per game in the classic rules.
pub const DEFAULT_QUESTION_BUDGET: u32 = 20;

/// Tunables for a game session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Maximum questions per game, router questions included.
    pub question_budget: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            question_budget: DEFAULT_QUESTION_BUDGET,
        }
    }
}

impl EngineConfig {
    /// Check the configuration can drive a game.
    pub fn validate(&self) -> Result<(), String> {
        if self.question_budget == 0 {
            return Err("question_budget must be at least 1".to_string());
        }
        Ok(())
    }
}
