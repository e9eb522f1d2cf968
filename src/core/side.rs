//! Battle sides and outcomes.
//!
//! A battle always has exactly two sides. `Winner` is the value domain of the
//! `winner` fields in the exported records and serializes as
//! `"player"`, `"opponent"` or `"draw"`.

use serde::{Deserialize, Serialize};

/// One of the two sides of a battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Player,
    Opponent,
}

impl Side {
    /// Both sides, player first.
    pub const BOTH: [Side; 2] = [Side::Player, Side::Opponent];

    /// The other side.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Player => f.write_str("player"),
            Side::Opponent => f.write_str("opponent"),
        }
    }
}

/// Winner of a round or of a whole battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    Player,
    Opponent,
    Draw,
}

impl Winner {
    /// Compare two scores: strictly greater wins, equal is a draw.
    ///
    /// Used both for attack values (round winner) and for final life
    /// totals (battle winner).
    #[must_use]
    pub fn compare(player: i64, opponent: i64) -> Self {
        match player.cmp(&opponent) {
            std::cmp::Ordering::Greater => Winner::Player,
            std::cmp::Ordering::Less => Winner::Opponent,
            std::cmp::Ordering::Equal => Winner::Draw,
        }
    }

    /// The winning side, if any.
    #[must_use]
    pub const fn side(self) -> Option<Side> {
        match self {
            Winner::Player => Some(Side::Player),
            Winner::Opponent => Some(Side::Opponent),
            Winner::Draw => None,
        }
    }

    /// Stable label used in exported features.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Winner::Player => "player",
            Winner::Opponent => "opponent",
            Winner::Draw => "draw",
        }
    }
}

impl From<Side> for Winner {
    fn from(side: Side) -> Self {
        match side {
            Side::Player => Winner::Player,
            Side::Opponent => Winner::Opponent,
        }
    }
}

impl std::fmt::Display for Winner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
