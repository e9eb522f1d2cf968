//! Pill allocation strategies.
//!
//! A strategy answers one question per side per round: how many pills to
//! commit. It sees only the `PillRequest`, never the battle state, and any
//! randomness comes from an RNG it owns. The orchestrator clamps every answer
//! into `0..=request.limit()`, so a strategy cannot break the pill bound.

use crate::core::{BattleRng, Side};

/// What a strategy is told before committing pills.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PillRequest {
    /// Side being asked.
    pub side: Side,
    /// 1-based round number.
    pub round: usize,
    /// Pills left in this side's pool.
    pub available: u32,
    /// Per-round commitment cap.
    pub cap: u32,
}

impl PillRequest {
    /// Largest legal commitment: `min(cap, available)`.
    #[must_use]
    pub fn limit(&self) -> u32 {
        self.cap.min(self.available)
    }
}

/// Decides pill commitments.
pub trait PillStrategy {
    /// Pills to commit for this request.
    fn allocate(&mut self, request: &PillRequest) -> u32;
}

impl<S: PillStrategy + ?Sized> PillStrategy for &mut S {
    fn allocate(&mut self, request: &PillRequest) -> u32 {
        (**self).allocate(request)
    }
}

impl<S: PillStrategy + ?Sized> PillStrategy for Box<S> {
    fn allocate(&mut self, request: &PillRequest) -> u32 {
        (**self).allocate(request)
    }
}

/// Uniform choice in `0..=limit`. The default strategy for dataset generation.
#[derive(Clone, Debug)]
pub struct UniformPills {
    rng: BattleRng,
}

impl UniformPills {
    pub fn new(rng: BattleRng) -> Self {
        Self { rng }
    }

    /// Shorthand for `UniformPills::new(BattleRng::new(seed))`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(BattleRng::new(seed))
    }
}

impl PillStrategy for UniformPills {
    fn allocate(&mut self, request: &PillRequest) -> u32 {
        self.rng.gen_range_inclusive(0..=request.limit())
    }
}

/// Replays fixed per-side sequences, one entry per round.
///
/// Rounds past the end of a sequence commit nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FixedPills {
    player: Vec<u32>,
    opponent: Vec<u32>,
}

impl FixedPills {
    pub fn new(player: impl Into<Vec<u32>>, opponent: impl Into<Vec<u32>>) -> Self {
        Self {
            player: player.into(),
            opponent: opponent.into(),
        }
    }

    /// Same commitment for both sides in every round.
    pub fn constant(pills: u32, rounds: usize) -> Self {
        Self::new(vec![pills; rounds], vec![pills; rounds])
    }
}

impl PillStrategy for FixedPills {
    fn allocate(&mut self, request: &PillRequest) -> u32 {
        let sequence = match request.side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        };
        request
            .round
            .checked_sub(1)
            .and_then(|i| sequence.get(i))
            .copied()
            .unwrap_or(0)
    }
}

/// Always commits as much as allowed.
#[derive(Clone, Copy, Debug, Default)]
pub struct MaxPills;

impl PillStrategy for MaxPills {
    fn allocate(&mut self, request: &PillRequest) -> u32 {
        request.limit()
    }
}
