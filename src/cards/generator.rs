//! Seeded synthetic card catalog.
//!
//! Produces a catalog with the shape of the real game's card pool: a set of
//! clans, a handful of cards per clan, rarity-dependent base stats that grow
//! unevenly with level, and an optional ability on most cards.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::{BattleError, BattleRng};

use super::definition::{Card, CardId, Level, Rarity};
use super::registry::CardRegistry;

/// Clan names and their bonus text, in encoding order.
pub const CLANS: [(&str, &str); 18] = [
    ("All Stars", "+2 Life"),
    ("Bangers", "+2 Power"),
    ("Fang Pi Clang", "+2 Damage"),
    ("Freaks", "+2 Poison"),
    ("Ulu Watu", "+2 Power"),
    ("Montana", "-12 Opp Attack"),
    ("Uppers", "-10 Opp Attack"),
    ("Sakrohm", "-8 Opp Attack"),
    ("Nightmare", "-2 Opp Life"),
    ("Piranas", "-2 Opp Power"),
    ("Skeelz", "Protection: Ability"),
    ("Roots", "Stop: Ability"),
    ("GHEIST", "Stop: Ability"),
    ("Pussycats", "Damage = 1"),
    ("Rescue", "+1 Life per Damage"),
    ("Sentinels", "+8 Attack"),
    ("La Junta", "+2 Damage"),
    ("Junkz", "+8 Attack"),
];

/// Abilities a generated card may carry.
pub const ABILITIES: [&str; 7] = [
    "+2 Power",
    "+2 Damage",
    "+1 Life",
    "Stop Opp Ability",
    "Protection: Ability",
    "-2 Opp Power",
    "-2 Opp Damage",
];

/// Position of a clan in `CLANS`, used as its encoded feature value.
#[must_use]
pub fn clan_index(clan: &str) -> Option<usize> {
    CLANS.iter().position(|(name, _)| *name == clan)
}

/// Catalog generation settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Cards generated for each clan.
    pub cards_per_clan: u32,

    /// Rarity weights in `Rarity::ALL` order.
    pub rarity_weights: [f32; 4],

    /// Probability that a card has an ability.
    pub ability_chance: f64,

    /// RNG seed.
    pub seed: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            cards_per_clan: 11,
            rarity_weights: [0.5, 0.3, 0.15, 0.05],
            ability_chance: 0.7,
            seed: 0,
        }
    }
}

impl CatalogConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_cards_per_clan(mut self, count: u32) -> Self {
        self.cards_per_clan = count;
        self
    }

    /// Clamped to `[0, 1]`; NaN means never.
    #[must_use]
    pub fn with_ability_chance(mut self, chance: f64) -> Self {
        self.ability_chance = if chance.is_nan() { 0.0 } else { chance.clamp(0.0, 1.0) };
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Generates card catalogs from a `CatalogConfig`.
#[derive(Clone, Debug, Default)]
pub struct CatalogGenerator {
    config: CatalogConfig,
}

impl CatalogGenerator {
    pub fn new(config: CatalogConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Generate every card. Ids are sequential from 1 in clan order.
    pub fn generate_cards(&self) -> Vec<Card> {
        let mut rng = BattleRng::new(self.config.seed);
        let mut cards = Vec::with_capacity(CLANS.len() * self.config.cards_per_clan as usize);
        let mut next_id = 1u32;

        for (clan, _) in CLANS {
            for i in 0..self.config.cards_per_clan {
                cards.push(self.generate_card(&mut rng, CardId::new(next_id), clan, i + 1));
                next_id += 1;
            }
        }

        cards
    }

    /// Generate the catalog straight into a registry.
    pub fn generate(&self) -> Result<CardRegistry, BattleError> {
        let registry = CardRegistry::from_cards(self.generate_cards())?;
        info!(cards = registry.len(), clans = CLANS.len(), "generated card catalog");
        Ok(registry)
    }

    fn generate_card(&self, rng: &mut BattleRng, id: CardId, clan: &str, number: u32) -> Card {
        let rarity = rng
            .choose_weighted(&self.config.rarity_weights)
            .map_or(Rarity::Common, |i| Rarity::ALL[i]);

        let (power_range, damage_range) = match rarity {
            Rarity::Common => (4..=6, 2..=4),
            Rarity::Uncommon => (6..=7, 4..=5),
            Rarity::Rare => (7..=8, 5..=7),
            Rarity::Legendary => (8..=9, 7..=9),
        };
        let base_power = i64::from(rng.gen_range_inclusive(power_range));
        let base_damage = i64::from(rng.gen_range_inclusive(damage_range));

        let mut card = Card::new(id, format!("{clan} Fighter {number}"))
            .with_clan(clan)
            .with_rarity(rarity);

        // Each level draws its own 0/1 step, so growth is uneven across levels.
        for level in Level::all() {
            let steps = i64::from(level.get() - 1);
            let power_bonus = steps * i64::from(rng.gen_range_inclusive(0..=1));
            let damage_bonus = steps * i64::from(rng.gen_range_inclusive(0..=1));
            card = card.with_level_stats(level, base_power + power_bonus, base_damage + damage_bonus);
        }

        if rng.gen_bool(self.config.ability_chance) {
            let description = rng.choose(&ABILITIES).copied().unwrap_or(ABILITIES[0]);
            let unlock = Level::new(rng.gen_range_inclusive(2..=4) as u8).unwrap_or(Level::MAX);
            card = card.with_ability(description, unlock);
        }

        card
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_size() {
        let registry = CatalogGenerator::default().generate().unwrap();
        assert_eq!(registry.len(), CLANS.len() * 11);
        assert!(registry.contains(CardId::new(1)));
        assert!(registry.contains(CardId::new(198)));
    }

    #[test]
    fn test_catalog_is_deterministic() {
        let a = CatalogGenerator::new(CatalogConfig::new().with_seed(9)).generate_cards();
        let b = CatalogGenerator::new(CatalogConfig::new().with_seed(9)).generate_cards();
        let c = CatalogGenerator::new(CatalogConfig::new().with_seed(10)).generate_cards();

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_out_of_range_ability_chance() {
        let config: CatalogConfig = serde_json::from_str(
            r#"{"cards_per_clan":2,"rarity_weights":[0.5,0.3,0.15,0.05],"ability_chance":1.5,"seed":1}"#,
        )
        .unwrap();
        let cards = CatalogGenerator::new(config).generate_cards();
        assert!(cards.iter().all(Card::has_ability));

        let config = CatalogConfig::new().with_cards_per_clan(2).with_ability_chance(f64::NAN);
        assert_eq!(config.ability_chance, 0.0);
        let cards = CatalogGenerator::new(config).generate_cards();
        assert!(cards.iter().all(|c| !c.has_ability()));

        let mut config = CatalogConfig::new().with_cards_per_clan(2);
        config.ability_chance = f64::NAN;
        let cards = CatalogGenerator::new(config).generate_cards();
        assert!(cards.iter().all(|c| !c.has_ability()));
    }

    #[test]
    fn test_stats_follow_rarity_bands() {
        let cards = CatalogGenerator::new(CatalogConfig::new().with_seed(3)).generate_cards();

        for card in &cards {
            let (lo_p, hi_p, lo_d, hi_d) = match card.rarity {
                Rarity::Common => (4, 6, 2, 4),
                Rarity::Uncommon => (6, 7, 4, 5),
                Rarity::Rare => (7, 8, 5, 7),
                Rarity::Legendary => (8, 9, 7, 9),
            };
            let base = card.stats(Level::MIN);
            assert!((lo_p..=hi_p).contains(&base.power), "{:?}", card);
            assert!((lo_d..=hi_d).contains(&base.damage), "{:?}", card);

            for level in Level::all() {
                let steps = i64::from(level.get() - 1);
                let stats = card.stats(level);
                assert!(stats.power == base.power || stats.power == base.power + steps);
                assert!(stats.damage == base.damage || stats.damage == base.damage + steps);
            }
        }
    }

    #[test]
    fn test_ability_chance_extremes() {
        let none = CatalogGenerator::new(CatalogConfig::new().with_ability_chance(0.0)).generate_cards();
        assert!(none.iter().all(|c| !c.has_ability()));

        let all = CatalogGenerator::new(CatalogConfig::new().with_ability_chance(1.0)).generate_cards();
        for card in &all {
            let ability = card.ability.as_ref().unwrap();
            assert!(ABILITIES.contains(&ability.description.as_str()));
            assert!((2..=4).contains(&ability.unlock_level.get()));
        }
    }

    #[test]
    fn test_clan_index() {
        assert_eq!(clan_index("All Stars"), Some(0));
        assert_eq!(clan_index("Junkz"), Some(17));
        assert_eq!(clan_index("Nobody"), None);
    }
}
