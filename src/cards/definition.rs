//! Card definitions - static card data.
//!
//! A `Card` holds the immutable properties of one card: identity, clan,
//! rarity, and its power/damage table for levels 1 through 5. Battles only
//! ever look stats up by `Level`; clan, rarity and ability exist for feature
//! extraction.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Unique identifier for a card.
///
/// Rendered and serialized as `card_<n>`, the form used in exported records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "card_{}", self.0)
    }
}

/// Error parsing a `card_<n>` identifier.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("malformed card id {0:?}")]
pub struct ParseCardIdError(String);

impl FromStr for CardId {
    type Err = ParseCardIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix("card_")
            .and_then(|n| n.parse().ok())
            .map(CardId)
            .ok_or_else(|| ParseCardIdError(s.to_string()))
    }
}

impl TryFrom<String> for CardId {
    type Error = ParseCardIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CardId> for String {
    fn from(id: CardId) -> Self {
        id.to_string()
    }
}

/// Card level, always in `1..=5`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Level(u8);

impl Level {
    /// Lowest level.
    pub const MIN: Level = Level(1);
    /// Highest level; battles read stats here.
    pub const MAX: Level = Level(5);
    /// Number of levels in a stat table.
    pub const COUNT: usize = 5;

    /// Create a level, or `None` if outside `1..=5`.
    #[must_use]
    pub const fn new(level: u8) -> Option<Self> {
        if level >= Self::MIN.0 && level <= Self::MAX.0 {
            Some(Self(level))
        } else {
            None
        }
    }

    /// The 1-based level number.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// 0-based position in a stat table.
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// All levels, lowest first.
    pub fn all() -> impl Iterator<Item = Level> {
        (Self::MIN.0..=Self::MAX.0).map(Level)
    }
}

impl TryFrom<u8> for Level {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Level::new(value).ok_or_else(|| format!("level {value} outside 1..=5"))
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.0
    }
}

/// Rarity tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Legendary,
}

impl Rarity {
    /// All tiers, most common first.
    pub const ALL: [Rarity; 4] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Legendary,
    ];

    /// Ordinal used as the encoded feature value.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        match self {
            Rarity::Common => 0,
            Rarity::Uncommon => 1,
            Rarity::Rare => 2,
            Rarity::Legendary => 3,
        }
    }
}

/// Power and damage at one level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelStats {
    pub power: i64,
    pub damage: i64,
}

/// Card ability. Descriptive only; battles never resolve abilities.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ability {
    /// Text such as `"+2 Power"`.
    pub description: String,
    /// Level from which the ability is active.
    pub unlock_level: Level,
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use rivals_datagen::cards::{Card, CardId, Level, Rarity};
///
/// let card = Card::new(CardId::new(1), "Bangers Fighter 1")
///     .with_clan("Bangers")
///     .with_rarity(Rarity::Rare)
///     .with_flat_stats(8, 3);
///
/// assert_eq!(card.power(Level::MAX), 8);
/// assert_eq!(card.damage(Level::MAX), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Unique identifier.
    pub id: CardId,

    /// Display name.
    pub name: String,

    /// Clan label.
    pub clan: String,

    /// Rarity tier.
    pub rarity: Rarity,

    /// Stats indexed by `Level::index()`.
    pub levels: [LevelStats; Level::COUNT],

    /// Optional ability.
    pub ability: Option<Ability>,
}

impl Card {
    /// Create a card with zeroed stats, no clan, `Common` rarity.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            clan: String::new(),
            rarity: Rarity::Common,
            levels: [LevelStats::default(); Level::COUNT],
            ability: None,
        }
    }

    /// Set the clan (builder pattern).
    #[must_use]
    pub fn with_clan(mut self, clan: impl Into<String>) -> Self {
        self.clan = clan.into();
        self
    }

    /// Set the rarity.
    #[must_use]
    pub fn with_rarity(mut self, rarity: Rarity) -> Self {
        self.rarity = rarity;
        self
    }

    /// Set power and damage at a single level.
    #[must_use]
    pub fn with_level_stats(mut self, level: Level, power: i64, damage: i64) -> Self {
        self.levels[level.index()] = LevelStats { power, damage };
        self
    }

    /// Use the same power and damage at every level.
    #[must_use]
    pub fn with_flat_stats(mut self, power: i64, damage: i64) -> Self {
        self.levels = [LevelStats { power, damage }; Level::COUNT];
        self
    }

    /// Attach an ability.
    #[must_use]
    pub fn with_ability(mut self, description: impl Into<String>, unlock_level: Level) -> Self {
        self.ability = Some(Ability {
            description: description.into(),
            unlock_level,
        });
        self
    }

    /// Stats at a level.
    #[must_use]
    pub fn stats(&self, level: Level) -> LevelStats {
        self.levels[level.index()]
    }

    /// Power at a level.
    #[must_use]
    pub fn power(&self, level: Level) -> i64 {
        self.stats(level).power
    }

    /// Damage at a level.
    #[must_use]
    pub fn damage(&self, level: Level) -> i64 {
        self.stats(level).damage
    }

    /// Whether the card carries an ability.
    #[must_use]
    pub fn has_ability(&self) -> bool {
        self.ability.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id() {
        let id = CardId::new(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(format!("{}", id), "card_42");
        assert_eq!("card_42".parse::<CardId>(), Ok(id));
        assert!("card_x".parse::<CardId>().is_err());
        assert!("42".parse::<CardId>().is_err());
    }

    #[test]
    fn test_card_id_serializes_as_label() {
        let json = serde_json::to_string(&CardId::new(7)).unwrap();
        assert_eq!(json, "\"card_7\"");

        let back: CardId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, CardId::new(7));
        assert!(serde_json::from_str::<CardId>("\"seven\"").is_err());
    }

    #[test]
    fn test_level_bounds() {
        assert_eq!(Level::new(0), None);
        assert_eq!(Level::new(6), None);
        assert_eq!(Level::new(1), Some(Level::MIN));
        assert_eq!(Level::new(5), Some(Level::MAX));
        assert_eq!(Level::MAX.index(), 4);
        assert_eq!(Level::all().count(), Level::COUNT);
        assert!(serde_json::from_str::<Level>("9").is_err());
    }

    #[test]
    fn test_card_builder() {
        let card = Card::new(CardId::new(1), "Test Card")
            .with_clan("Montana")
            .with_rarity(Rarity::Legendary)
            .with_flat_stats(4, 2)
            .with_level_stats(Level::MAX, 9, 8)
            .with_ability("+2 Power", Level::new(3).unwrap());

        assert_eq!(card.name, "Test Card");
        assert_eq!(card.clan, "Montana");
        assert_eq!(card.power(Level::MIN), 4);
        assert_eq!(card.damage(Level::MIN), 2);
        assert_eq!(card.power(Level::MAX), 9);
        assert_eq!(card.damage(Level::MAX), 8);
        assert!(card.has_ability());
    }

    #[test]
    fn test_rarity_ordinal() {
        let ordinals: Vec<_> = Rarity::ALL.iter().map(|r| r.ordinal()).collect();
        assert_eq!(ordinals, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_card_serialization() {
        let card = Card::new(CardId::new(1), "Test").with_flat_stats(6, 3);

        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();

        assert_eq!(card, deserialized);
    }
}
