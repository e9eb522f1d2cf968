//! Battle orchestration: the round loop.
//!
//! ## Lifecycle
//!
//! `Initialized → RoundInProgress → Terminated`
//!
//! Each `step` plays one round: ask the strategy for both commitments,
//! resolve the round, apply damage to the loser, spend pills, record the
//! round. The battle terminates once either side is at or below zero life,
//! once the round limit is reached, or once a deck runs out of cards.

use tracing::{debug, trace};

use crate::cards::Deck;
use crate::core::{BattleConfig, Side};

use super::record::{BattleRecord, RoundRecord, Rounds};
use super::resolver::resolve_round;
use super::state::{BattlePhase, BattleState};
use super::strategy::{PillRequest, PillStrategy};

/// Drives one battle to completion.
///
/// Owns its `BattleState` outright; two orchestrators never share anything
/// but borrowed, immutable card data.
pub struct BattleOrchestrator<'d, S> {
    config: BattleConfig,
    player_deck: Deck<'d>,
    opponent_deck: Deck<'d>,
    strategy: S,
    state: BattleState,
    rounds: Rounds,
    phase: BattlePhase,
}

impl<'d, S: PillStrategy> BattleOrchestrator<'d, S> {
    /// Create a battle under the default rules.
    pub fn new(player_deck: Deck<'d>, opponent_deck: Deck<'d>, strategy: S) -> Self {
        Self::with_config(BattleConfig::default(), player_deck, opponent_deck, strategy)
    }

    /// Create a battle under custom rules.
    pub fn with_config(
        config: BattleConfig,
        player_deck: Deck<'d>,
        opponent_deck: Deck<'d>,
        strategy: S,
    ) -> Self {
        let state = BattleState::new(&config);
        Self {
            config,
            player_deck,
            opponent_deck,
            strategy,
            state,
            rounds: Rounds::new(),
            phase: BattlePhase::Initialized,
        }
    }

    pub fn state(&self) -> &BattleState {
        &self.state
    }

    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    pub fn rounds(&self) -> &[RoundRecord] {
        &self.rounds
    }

    pub fn is_terminated(&self) -> bool {
        self.phase == BattlePhase::Terminated
    }

    /// Play the next round.
    ///
    /// Returns the new round record, or `None` if the battle is over.
    pub fn step(&mut self) -> Option<&RoundRecord> {
        if self.should_stop() {
            self.phase = BattlePhase::Terminated;
            return None;
        }

        let index = self.rounds.len();
        let (Some(player_card), Some(opponent_card)) =
            (self.player_deck.get(index), self.opponent_deck.get(index))
        else {
            // A deck shorter than the round limit just ends the battle early.
            self.phase = BattlePhase::Terminated;
            return None;
        };

        let round = index + 1;
        let player_pills = self.commit(Side::Player, round);
        let opponent_pills = self.commit(Side::Opponent, round);

        let outcome = resolve_round(
            player_card,
            opponent_card,
            player_pills,
            opponent_pills,
            self.config.stat_level,
        );

        if let Some(loser) = outcome.damaged_side() {
            self.state.apply_damage(loser, outcome.damage);
        }
        self.state.spend_pills(Side::Player, player_pills);
        self.state.spend_pills(Side::Opponent, opponent_pills);

        debug!(
            round,
            player_card = %player_card.id,
            opponent_card = %opponent_card.id,
            player_attack = outcome.player_attack,
            opponent_attack = outcome.opponent_attack,
            winner = %outcome.winner,
            damage = outcome.damage,
            player_life = self.state.player_life,
            opponent_life = self.state.opponent_life,
            "round resolved"
        );

        self.rounds.push(RoundRecord {
            round,
            player_card: player_card.id,
            opponent_card: opponent_card.id,
            player_pills_used: player_pills,
            opponent_pills_used: opponent_pills,
            player_attack: outcome.player_attack,
            opponent_attack: outcome.opponent_attack,
            winner: outcome.winner,
            damage_dealt: outcome.damage,
            player_life_after: self.state.player_life,
            opponent_life_after: self.state.opponent_life,
        });

        self.phase = if self.should_stop() {
            BattlePhase::Terminated
        } else {
            BattlePhase::RoundInProgress
        };

        self.rounds.last()
    }

    /// Play every remaining round and assemble the record.
    pub fn run(mut self) -> BattleRecord {
        while self.step().is_some() {}
        BattleRecord::assemble(&self.state, self.rounds)
    }

    fn should_stop(&self) -> bool {
        self.phase == BattlePhase::Terminated
            || self.state.is_decided()
            || self.rounds.len() >= self.config.max_rounds
    }

    fn commit(&mut self, side: Side, round: usize) -> u32 {
        let request = PillRequest {
            side,
            round,
            available: self.state.pills(side),
            cap: self.config.max_pills_per_round,
        };
        let wanted = self.strategy.allocate(&request);
        let pills = wanted.min(request.limit());
        if pills != wanted {
            trace!(%side, round, wanted, pills, "pill commitment clamped");
        }
        pills
    }
}

/// Simulate one battle under the default rules.
pub fn simulate<S: PillStrategy>(
    player_deck: &Deck<'_>,
    opponent_deck: &Deck<'_>,
    strategy: S,
) -> BattleRecord {
    simulate_with_config(BattleConfig::default(), player_deck, opponent_deck, strategy)
}

/// Simulate one battle under custom rules.
pub fn simulate_with_config<S: PillStrategy>(
    config: BattleConfig,
    player_deck: &Deck<'_>,
    opponent_deck: &Deck<'_>,
    strategy: S,
) -> BattleRecord {
    BattleOrchestrator::with_config(config, *player_deck, *opponent_deck, strategy).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::strategy::{FixedPills, MaxPills};
    use crate::cards::{Card, CardId};
    use crate::core::Winner;

    fn card(id: u32, power: i64, damage: i64) -> Card {
        Card::new(CardId::new(id), format!("Card {id}")).with_flat_stats(power, damage)
    }

    fn deck_of(card: &Card) -> Deck<'_> {
        Deck::new(&[card, card, card, card]).unwrap()
    }

    #[test]
    fn test_initial_state() {
        let a = card(1, 5, 1);
        let battle = BattleOrchestrator::new(deck_of(&a), deck_of(&a), MaxPills);

        assert_eq!(battle.phase(), BattlePhase::Initialized);
        assert_eq!(battle.state().player_life, 12);
        assert_eq!(battle.state().opponent_pills, 12);
        assert!(battle.rounds().is_empty());
    }

    #[test]
    fn test_first_round_determinism() {
        let a = card(1, 8, 3);
        let b = card(2, 7, 5);
        let mut battle =
            BattleOrchestrator::new(deck_of(&a), deck_of(&b), FixedPills::new([2], [0]));

        let round = battle.step().unwrap().clone();

        assert_eq!(round.round, 1);
        assert_eq!(round.player_attack, 10);
        assert_eq!(round.opponent_attack, 7);
        assert_eq!(round.winner, Winner::Player);
        assert_eq!(round.damage_dealt, 3);
        assert_eq!(round.opponent_life_after, 9);
        assert_eq!(round.player_life_after, 12);
        assert_eq!(battle.phase(), BattlePhase::RoundInProgress);
        assert_eq!(battle.state().player_pills, 10);
        assert_eq!(battle.state().opponent_pills, 12);
    }

    #[test]
    fn test_all_draws_play_four_rounds() {
        let a = card(1, 6, 4);
        let b = card(2, 6, 9);
        let record = simulate(&deck_of(&a), &deck_of(&b), FixedPills::default());

        assert_eq!(record.rounds.len(), 4);
        assert!(record.rounds.iter().all(|r| r.winner == Winner::Draw && r.damage_dealt == 0));
        assert_eq!(record.winner, Winner::Draw);
        assert_eq!(record.final_score.player, 12);
        assert_eq!(record.final_score.opponent, 12);
    }

    #[test]
    fn test_early_termination() {
        let strong = card(1, 9, 7);
        let weak = card(2, 3, 1);
        let mut battle =
            BattleOrchestrator::new(deck_of(&strong), deck_of(&weak), FixedPills::default());

        battle.step();
        assert!(!battle.is_terminated());
        battle.step();
        assert!(battle.is_terminated());
        assert!(battle.step().is_none());

        let record = battle.run();
        assert_eq!(record.rounds.len(), 2);
        assert_eq!(record.final_score.opponent, -2);
        assert_eq!(record.winner, Winner::Player);
    }

    #[test]
    fn test_overcommit_is_clamped() {
        let a = card(1, 5, 1);
        let b = card(2, 5, 1);
        let greedy = FixedPills::new([9, 9, 9, 9], [0, 0, 0, 0]);
        let record = simulate(&deck_of(&a), &deck_of(&b), greedy);

        let used: Vec<u32> = record.rounds.iter().map(|r| r.player_pills_used).collect();
        assert_eq!(used, vec![5, 5, 2, 0]);
    }

    #[test]
    fn test_round_limit_from_config() {
        let a = card(1, 6, 1);
        let config = BattleConfig::default().with_max_rounds(2);
        let record = simulate_with_config(config, &deck_of(&a), &deck_of(&a), MaxPills);
        assert_eq!(record.rounds.len(), 2);
    }

    #[test]
    fn test_round_limit_beyond_deck_truncates() {
        let a = card(1, 6, 1);
        let config = BattleConfig::default().with_max_rounds(10);
        let record = simulate_with_config(config, &deck_of(&a), &deck_of(&a), MaxPills);
        assert_eq!(record.rounds.len(), 4);
    }

    #[test]
    fn test_strategy_by_reference() {
        let a = card(1, 6, 1);
        let mut strategy = FixedPills::constant(1, 4);
        let record = simulate(&deck_of(&a), &deck_of(&a), &mut strategy);
        assert!(record.rounds.iter().all(|r| r.player_pills_used == 1));
    }
}
