//! Battle records: the exported shape of a simulated battle.
//!
//! Field names and value domains here are the contract downstream feature
//! extraction and dataset export are built against. `winner` fields are
//! `"player"`, `"opponent"` or `"draw"`; card ids are `"card_<n>"`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{CardId, DECK_SIZE};
use crate::core::{Side, Winner};

use super::state::BattleState;

/// Round records of one battle. A battle never exceeds `DECK_SIZE` rounds
/// under the default rules, so these stay inline.
pub type Rounds = SmallVec<[RoundRecord; DECK_SIZE]>;

/// One resolved round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// 1-based round number.
    pub round: usize,
    pub player_card: CardId,
    pub opponent_card: CardId,
    pub player_pills_used: u32,
    pub opponent_pills_used: u32,
    pub player_attack: i64,
    pub opponent_attack: i64,
    pub winner: Winner,
    pub damage_dealt: i64,
    pub player_life_after: i64,
    pub opponent_life_after: i64,
}

impl RoundRecord {
    /// Pills committed by a side.
    #[must_use]
    pub fn pills_used(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player_pills_used,
            Side::Opponent => self.opponent_pills_used,
        }
    }

    /// Life of a side after the round.
    #[must_use]
    pub fn life_after(&self, side: Side) -> i64 {
        match side {
            Side::Player => self.player_life_after,
            Side::Opponent => self.opponent_life_after,
        }
    }
}

/// Final life totals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalScore {
    pub player: i64,
    pub opponent: i64,
}

/// A complete battle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleRecord {
    /// Side with more life at the end, or draw on equal life.
    pub winner: Winner,
    pub rounds: Rounds,
    pub final_score: FinalScore,
}

impl BattleRecord {
    /// Package terminal state and rounds into a record.
    ///
    /// The winner is the life comparison at termination, not the count of
    /// rounds won.
    #[must_use]
    pub fn assemble(state: &BattleState, rounds: Rounds) -> Self {
        Self {
            winner: state.leader(),
            rounds,
            final_score: FinalScore {
                player: state.player_life,
                opponent: state.opponent_life,
            },
        }
    }

    /// Rounds won by a side.
    #[must_use]
    pub fn rounds_won(&self, side: Side) -> usize {
        let target = Winner::from(side);
        self.rounds.iter().filter(|r| r.winner == target).count()
    }

    /// First round, if any were played.
    #[must_use]
    pub fn first_round(&self) -> Option<&RoundRecord> {
        self.rounds.first()
    }

    /// Total pills a side spent over the battle.
    #[must_use]
    pub fn pills_spent(&self, side: Side) -> u32 {
        self.rounds.iter().map(|r| r.pills_used(side)).sum()
    }
}
