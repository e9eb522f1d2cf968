//! Battle rule configuration.
//!
//! `BattleConfig` carries the constants of the simplified rule set. The
//! defaults are the values every generated dataset uses; tests shrink them
//! to reach edge cases quickly.

use serde::{Deserialize, Serialize};

use crate::cards::Level;

/// Rule constants for one battle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleConfig {
    /// Life each side starts with.
    pub starting_life: i64,

    /// Pills each side starts with.
    pub starting_pills: u32,

    /// Most pills a side may commit in a single round.
    pub max_pills_per_round: u32,

    /// Upper bound on rounds played.
    pub max_rounds: usize,

    /// Level at which card power and damage are read.
    pub stat_level: Level,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            starting_life: 12,
            starting_pills: 12,
            max_pills_per_round: 5,
            max_rounds: 4,
            stat_level: Level::MAX,
        }
    }
}

impl BattleConfig {
    /// Create the default rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set starting life.
    #[must_use]
    pub fn with_starting_life(mut self, life: i64) -> Self {
        self.starting_life = life;
        self
    }

    /// Set starting pills.
    #[must_use]
    pub fn with_starting_pills(mut self, pills: u32) -> Self {
        self.starting_pills = pills;
        self
    }

    /// Set the per-round pill cap.
    #[must_use]
    pub fn with_max_pills_per_round(mut self, cap: u32) -> Self {
        self.max_pills_per_round = cap;
        self
    }

    /// Set the round limit.
    #[must_use]
    pub fn with_max_rounds(mut self, rounds: usize) -> Self {
        self.max_rounds = rounds;
        self
    }

    /// Set the level stats are read at.
    #[must_use]
    pub fn with_stat_level(mut self, level: Level) -> Self {
        self.stat_level = level;
        self
    }
}
