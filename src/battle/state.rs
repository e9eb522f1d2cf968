//! Per-battle mutable state.
//!
//! One `BattleState` belongs to exactly one orchestrator. It is never shared
//! between battles, which is what lets battles run on any thread without
//! locking.

use serde::{Deserialize, Serialize};

use crate::core::{BattleConfig, Side, Winner};

/// Orchestrator lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattlePhase {
    /// No round played yet.
    Initialized,
    /// At least one round played, battle not over.
    RoundInProgress,
    /// No further rounds will be played.
    Terminated,
}

/// Life and pill counters for both sides.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleState {
    pub player_life: i64,
    pub opponent_life: i64,
    pub player_pills: u32,
    pub opponent_pills: u32,
}

impl BattleState {
    /// Starting counters from the rule set.
    #[must_use]
    pub fn new(config: &BattleConfig) -> Self {
        Self {
            player_life: config.starting_life,
            opponent_life: config.starting_life,
            player_pills: config.starting_pills,
            opponent_pills: config.starting_pills,
        }
    }

    #[must_use]
    pub fn life(&self, side: Side) -> i64 {
        match side {
            Side::Player => self.player_life,
            Side::Opponent => self.opponent_life,
        }
    }

    #[must_use]
    pub fn pills(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player_pills,
            Side::Opponent => self.opponent_pills,
        }
    }

    /// Subtract damage from a side. Negative damage is ignored.
    pub fn apply_damage(&mut self, side: Side, damage: i64) {
        let damage = damage.max(0);
        match side {
            Side::Player => self.player_life = self.player_life.saturating_sub(damage),
            Side::Opponent => self.opponent_life = self.opponent_life.saturating_sub(damage),
        }
    }

    /// Remove spent pills, never going below zero.
    pub fn spend_pills(&mut self, side: Side, pills: u32) {
        let pool = match side {
            Side::Player => &mut self.player_pills,
            Side::Opponent => &mut self.opponent_pills,
        };
        *pool = pool.saturating_sub(pills);
    }

    /// True once either side is at or below zero life.
    #[must_use]
    pub fn is_decided(&self) -> bool {
        self.player_life <= 0 || self.opponent_life <= 0
    }

    /// Life comparison: more life wins, equal life draws.
    #[must_use]
    pub fn leader(&self) -> Winner {
        Winner::compare(self.player_life, self.opponent_life)
    }
}
