//! Feature extraction for the card and battle models.
//!
//! Turns catalog cards and battle samples into flat rows. Stats are read at
//! `Level::MAX`, the level battles are played at.

use serde::{Deserialize, Serialize};

use crate::cards::{clan_index, Card, CardId, CardRegistry, Level};
use crate::core::Winner;

use super::dataset::BattleSample;

/// Features of one card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardFeatures {
    pub card_id: CardId,
    /// Index into `CLANS`; `None` for clans outside the known list.
    pub clan_encoded: Option<usize>,
    pub rarity_encoded: u8,
    pub max_power: i64,
    pub max_damage: i64,
    pub has_ability: u8,
    /// `max_power / max(max_damage, 1)`.
    pub power_damage_ratio: f64,
    pub total_stats: i64,
}

impl CardFeatures {
    pub fn from_card(card: &Card) -> Self {
        let max_power = card.power(Level::MAX);
        let max_damage = card.damage(Level::MAX);
        Self {
            card_id: card.id,
            clan_encoded: clan_index(&card.clan),
            rarity_encoded: card.rarity.ordinal(),
            max_power,
            max_damage,
            has_ability: u8::from(card.has_ability()),
            power_damage_ratio: max_power as f64 / max_damage.max(1) as f64,
            total_stats: max_power.saturating_add(max_damage),
        }
    }

    /// Numeric vector in field order. Unknown clans encode as -1.
    pub fn to_vec(&self) -> Vec<f32> {
        vec![
            self.clan_encoded.map_or(-1.0, |c| c as f32),
            f32::from(self.rarity_encoded),
            self.max_power as f32,
            self.max_damage as f32,
            f32::from(self.has_ability),
            self.power_damage_ratio as f32,
            self.total_stats as f32,
        ]
    }
}

/// Features of one battle, taken from its first round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleFeatures {
    pub battle_id: String,
    pub player_total_attack: i64,
    pub opponent_total_attack: i64,
    pub attack_difference: i64,
    pub player_pills_used: u32,
    pub opponent_pills_used: u32,
    /// Battle winner; the training label.
    pub winner: Winner,
}

impl BattleFeatures {
    /// `None` if the battle has no rounds.
    pub fn from_sample(sample: &BattleSample) -> Option<Self> {
        let first = sample.record.first_round()?;
        Some(Self {
            battle_id: sample.battle_id.clone(),
            player_total_attack: first.player_attack,
            opponent_total_attack: first.opponent_attack,
            attack_difference: first.player_attack.saturating_sub(first.opponent_attack),
            player_pills_used: first.player_pills_used,
            opponent_pills_used: first.opponent_pills_used,
            winner: sample.record.winner,
        })
    }
}

/// Features for every card, in registry order.
pub fn card_features(registry: &CardRegistry) -> Vec<CardFeatures> {
    registry.iter().map(CardFeatures::from_card).collect()
}

/// Features for every battle that played at least one round.
pub fn battle_features(samples: &[BattleSample]) -> Vec<BattleFeatures> {
    samples.iter().filter_map(BattleFeatures::from_sample).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::{BattleRecord, BattleState, RoundRecord, Rounds};
    use crate::cards::Rarity;
    use crate::core::BattleConfig;

    #[test]
    fn test_card_features() {
        let card = Card::new(CardId::new(3), "Fighter")
            .with_clan("Bangers")
            .with_rarity(Rarity::Rare)
            .with_flat_stats(8, 5)
            .with_ability("+2 Power", Level::MIN);

        let features = CardFeatures::from_card(&card);

        assert_eq!(features.card_id, CardId::new(3));
        assert_eq!(features.clan_encoded, Some(1));
        assert_eq!(features.rarity_encoded, 2);
        assert_eq!(features.max_power, 8);
        assert_eq!(features.max_damage, 5);
        assert_eq!(features.has_ability, 1);
        assert!((features.power_damage_ratio - 1.6).abs() < 1e-9);
        assert_eq!(features.total_stats, 13);
        assert_eq!(features.to_vec().len(), 7);
    }

    #[test]
    fn test_zero_damage_ratio() {
        let card = Card::new(CardId::new(1), "Wall").with_flat_stats(6, 0);
        let features = CardFeatures::from_card(&card);
        assert!((features.power_damage_ratio - 6.0).abs() < 1e-9);
        assert_eq!(features.clan_encoded, None);
        assert_eq!(features.to_vec()[0], -1.0);
    }

    fn sample(rounds: Rounds) -> BattleSample {
        let state = BattleState::new(&BattleConfig::default());
        BattleSample {
            battle_id: "battle_0".to_string(),
            seed: 0,
            player_deck: vec![],
            opponent_deck: vec![],
            record: BattleRecord::assemble(&state, rounds),
        }
    }

    #[test]
    fn test_battle_features_from_first_round() {
        let first = RoundRecord {
            round: 1,
            player_card: CardId::new(1),
            opponent_card: CardId::new(2),
            player_pills_used: 2,
            opponent_pills_used: 0,
            player_attack: 10,
            opponent_attack: 7,
            winner: Winner::Player,
            damage_dealt: 3,
            player_life_after: 12,
            opponent_life_after: 9,
        };
        let features = BattleFeatures::from_sample(&sample(std::iter::once(first).collect())).unwrap();

        assert_eq!(features.player_total_attack, 10);
        assert_eq!(features.opponent_total_attack, 7);
        assert_eq!(features.attack_difference, 3);
        assert_eq!(features.player_pills_used, 2);
        // Winner comes from the battle record, not the round.
        assert_eq!(features.winner, Winner::Draw);
    }

    #[test]
    fn test_battle_without_rounds_is_skipped() {
        assert!(BattleFeatures::from_sample(&sample(Rounds::new())).is_none());
        assert!(battle_features(&[sample(Rounds::new())]).is_empty());
    }
}
