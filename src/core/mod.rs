//! Core types shared by every module: sides, RNG, rule configuration, errors.

pub mod config;
pub mod error;
pub mod rng;
pub mod side;

pub use config::BattleConfig;
pub use error::BattleError;
pub use rng::BattleRng;
pub use side::{Side, Winner};
