//! Single-round resolution.
//!
//! Pure function of two cards, two pill commitments, and the stat level.
//! Nothing here touches battle state; the orchestrator applies the outcome.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Level};
use crate::core::{Side, Winner};

/// Result of one round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub winner: Winner,
    /// Damage dealt to the losing side; 0 on a draw.
    pub damage: i64,
    pub player_attack: i64,
    pub opponent_attack: i64,
}

impl RoundOutcome {
    /// Side that takes the damage, if any.
    #[must_use]
    pub fn damaged_side(&self) -> Option<Side> {
        self.winner.side().map(Side::opposite)
    }
}

/// Resolve a round.
///
/// Attack is `power[level] + pills`. The higher attack wins and deals its
/// card's `damage[level]`; equal attacks draw with no damage. Negative card
/// damage is treated as 0 so life never increases.
#[must_use]
pub fn resolve_round(
    player_card: &Card,
    opponent_card: &Card,
    player_pills: u32,
    opponent_pills: u32,
    level: Level,
) -> RoundOutcome {
    let player_attack = player_card.power(level).saturating_add(i64::from(player_pills));
    let opponent_attack = opponent_card.power(level).saturating_add(i64::from(opponent_pills));

    let winner = Winner::compare(player_attack, opponent_attack);
    let damage = match winner {
        Winner::Player => player_card.damage(level).max(0),
        Winner::Opponent => opponent_card.damage(level).max(0),
        Winner::Draw => 0,
    };

    RoundOutcome {
        winner,
        damage,
        player_attack,
        opponent_attack,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardId;

    fn card(id: u32, power: i64, damage: i64) -> Card {
        Card::new(CardId::new(id), format!("Card {id}")).with_flat_stats(power, damage)
    }

    #[test]
    fn test_player_wins_with_pills() {
        let a = card(1, 8, 3);
        let b = card(2, 7, 5);

        let outcome = resolve_round(&a, &b, 2, 0, Level::MAX);

        assert_eq!(outcome.player_attack, 10);
        assert_eq!(outcome.opponent_attack, 7);
        assert_eq!(outcome.winner, Winner::Player);
        assert_eq!(outcome.damage, 3);
        assert_eq!(outcome.damaged_side(), Some(Side::Opponent));
    }

    #[test]
    fn test_opponent_wins() {
        let a = card(1, 8, 3);
        let b = card(2, 7, 5);

        let outcome = resolve_round(&a, &b, 0, 4, Level::MAX);

        assert_eq!(outcome.winner, Winner::Opponent);
        assert_eq!(outcome.damage, 5);
        assert_eq!(outcome.damaged_side(), Some(Side::Player));
    }

    #[test]
    fn test_tie_is_draw() {
        let a = card(1, 6, 4);
        let b = card(2, 6, 9);

        let outcome = resolve_round(&a, &b, 0, 0, Level::MAX);

        assert_eq!(outcome.winner, Winner::Draw);
        assert_eq!(outcome.damage, 0);
        assert_eq!(outcome.damaged_side(), None);
    }

    #[test]
    fn test_reads_requested_level() {
        let a = Card::new(CardId::new(1), "A")
            .with_flat_stats(5, 1)
            .with_level_stats(Level::MAX, 9, 6);
        let b = card(2, 7, 2);

        assert_eq!(resolve_round(&a, &b, 0, 0, Level::MIN).winner, Winner::Opponent);

        let at_max = resolve_round(&a, &b, 0, 0, Level::MAX);
        assert_eq!(at_max.winner, Winner::Player);
        assert_eq!(at_max.damage, 6);
    }

    #[test]
    fn test_negative_damage_clamped() {
        let a = card(1, 9, -3);
        let b = card(2, 1, 1);
        assert_eq!(resolve_round(&a, &b, 0, 0, Level::MAX).damage, 0);
    }

    #[test]
    fn test_extreme_stats_saturate() {
        let a = card(1, i64::MAX, i64::MAX);
        let b = card(2, i64::MAX - 2, 1);

        let outcome = resolve_round(&a, &b, 5, 5, Level::MAX);
        assert_eq!(outcome.player_attack, i64::MAX);
        assert_eq!(outcome.opponent_attack, i64::MAX);
        assert_eq!(outcome.winner, Winner::Draw);

        let outcome = resolve_round(&a, &b, 0, 1, Level::MAX);
        assert_eq!(outcome.winner, Winner::Player);
        assert_eq!(outcome.damage, i64::MAX);
    }
}
