//! Game layer for conquest.
//!
//! Implements the rules of a single-player session:
//! - Territory registry (names, army colors, troops)
//! - Console input validation
//! - Dice combat resolution
//! - Mission assignment and victory checks
//! - The menu-driven game loop

mod combat;
mod input;
mod mission;
mod session;
mod territory;

pub use combat::{BattleOutcome, BattleReport, DIE_FACES, resolve_battle, roll_die, validate_attack};
pub use input::{Console, clamp_troops, classify_choice};
pub use mission::{CONQUER_COUNT_TARGET, Mission, MissionKind};
pub use session::{MenuChoice, Session, SessionOutcome, SessionSummary, TERRITORY_COUNT};
pub use territory::{NAME_MAX_CHARS, OWNER_MAX_CHARS, Registry, Territory};
