// Allow unwrap in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Conquest: a console territory-conquest game.
//!
//! One player registers a handful of territories, receives a secret
//! mission, and fights dice battles between territories until the mission
//! is met or they quit.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │     Session (menu & attack flow)    │
//! ├──────────────────┬──────────────────┤
//! │  Combat (dice)   │ Mission (victory)│
//! ├──────────────────┴──────────────────┤
//! │   Registry          Console input   │
//! └─────────────────────────────────────┘
//! ```
//!
//! All randomness flows through one caller-supplied [`rand::Rng`], so a
//! seeded generator replays a session exactly.

pub mod error;
pub mod game;

pub use error::{AttackError, ChoiceError, GameError, InputError, InputResult, SetupError};

// Re-export key game types at crate root for convenience
pub use game::{
    BattleOutcome, BattleReport, Console, Mission, MissionKind, Registry, Session, SessionOutcome,
    SessionSummary, Territory,
};
