//! Battle simulation engine.
//!
//! - `strategy`: pill allocation (`PillStrategy` and implementations)
//! - `resolver`: pure single-round resolution
//! - `state`: per-battle counters and lifecycle phase
//! - `orchestrator`: the round loop and `simulate` entry points
//! - `record`: exported round and battle records

pub mod orchestrator;
pub mod record;
pub mod resolver;
pub mod state;
pub mod strategy;

pub use orchestrator::{simulate, simulate_with_config, BattleOrchestrator};
pub use record::{BattleRecord, FinalScore, RoundRecord, Rounds};
pub use resolver::{resolve_round, RoundOutcome};
pub use state::{BattlePhase, BattleState};
pub use strategy::{FixedPills, MaxPills, PillRequest, PillStrategy, UniformPills};
