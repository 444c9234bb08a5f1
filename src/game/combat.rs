//! Dice battle resolution.
//!
//! Each side rolls one six-sided die. The strictly higher roll wins and the
//! loser gives up exactly one troop; a tie changes nothing. Territories are
//! never removed and never change hands.

use std::cmp::Ordering;
use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::AttackError;
use crate::game::Registry;

/// Number of faces on a battle die.
pub const DIE_FACES: u8 = 6;

/// Which side won a single battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BattleOutcome {
    /// Attacker rolled higher; the defender loses a troop.
    AttackerWins,
    /// Defender rolled higher; the attacker loses a troop.
    DefenderWins,
    /// Equal rolls; nobody loses anything.
    Tie,
}

impl BattleOutcome {
    /// Compare the two rolls.
    #[must_use]
    pub fn from_rolls(attacker_roll: u8, defender_roll: u8) -> Self {
        match attacker_roll.cmp(&defender_roll) {
            Ordering::Greater => Self::AttackerWins,
            Ordering::Less => Self::DefenderWins,
            Ordering::Equal => Self::Tie,
        }
    }
}

/// Everything that happened in one battle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleReport {
    /// 0-based index of the attacking territory.
    pub attacker: usize,
    /// 0-based index of the defending territory.
    pub defender: usize,
    /// Attacker's name at the time of battle.
    pub attacker_name: String,
    /// Defender's name at the time of battle.
    pub defender_name: String,
    /// Attacker's die.
    pub attacker_roll: u8,
    /// Defender's die.
    pub defender_roll: u8,
    /// Result of comparing the dice.
    pub outcome: BattleOutcome,
}

impl BattleReport {
    /// Index of the territory that lost a troop, if any.
    #[must_use]
    pub fn loser(&self) -> Option<usize> {
        match self.outcome {
            BattleOutcome::AttackerWins => Some(self.defender),
            BattleOutcome::DefenderWins => Some(self.attacker),
            BattleOutcome::Tie => None,
        }
    }
}

impl fmt::Display for BattleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n=== BATTLE ===")?;
        writeln!(f, "{} (Attacker) rolled: {}", self.attacker_name, self.attacker_roll)?;
        writeln!(f, "{} (Defender) rolled: {}", self.defender_name, self.defender_roll)?;
        match self.outcome {
            BattleOutcome::AttackerWins => write!(f, "Attack wins! Defense loses 1 troop."),
            BattleOutcome::DefenderWins => write!(f, "Defense wins! Attack loses 1 troop."),
            BattleOutcome::Tie => write!(f, "Tie! Nobody loses troops."),
        }
    }
}

/// Roll one die, uniform in `1..=DIE_FACES`.
pub fn roll_die<G: Rng + ?Sized>(rng: &mut G) -> u8 {
    rng.gen_range(1..=DIE_FACES)
}

/// Check that `attacker` may attack `defender`.
///
/// # Errors
///
/// Checked in order: either index out of bounds, a self-attack, an attacker
/// with no troops, a defender with no troops.
pub fn validate_attack(
    registry: &Registry,
    attacker: usize,
    defender: usize,
) -> Result<(), AttackError> {
    let attacking = registry
        .get(attacker)
        .ok_or(AttackError::NoSuchTerritory(attacker))?;
    let defending = registry
        .get(defender)
        .ok_or(AttackError::NoSuchTerritory(defender))?;

    if attacker == defender {
        return Err(AttackError::SelfAttack);
    }
    if !attacking.has_troops() {
        return Err(AttackError::AttackerHasNoTroops);
    }
    if !defending.has_troops() {
        return Err(AttackError::DefenderHasNoTroops);
    }
    Ok(())
}

/// Fight one battle between two territories.
///
/// The attacker's die is rolled before the defender's. On error nothing is
/// rolled and the registry is untouched.
///
/// # Errors
///
/// Returns the [`AttackError`] from [`validate_attack`].
pub fn resolve_battle<G: Rng + ?Sized>(
    registry: &mut Registry,
    attacker: usize,
    defender: usize,
    rng: &mut G,
) -> Result<BattleReport, AttackError> {
    validate_attack(registry, attacker, defender)?;

    let attacker_roll = roll_die(rng);
    let defender_roll = roll_die(rng);
    let outcome = BattleOutcome::from_rolls(attacker_roll, defender_roll);

    let name_of = |index: usize| {
        registry
            .get(index)
            .map(|territory| territory.name.clone())
            .unwrap_or_default()
    };
    let report = BattleReport {
        attacker,
        defender,
        attacker_name: name_of(attacker),
        defender_name: name_of(defender),
        attacker_roll,
        defender_roll,
        outcome,
    };

    if let Some(territory) = report.loser().and_then(|loser| registry.get_mut(loser)) {
        territory.lose_troop();
    }

    debug!(
        attacker,
        defender,
        attacker_roll,
        defender_roll,
        ?outcome,
        "battle resolved"
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Territory;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn registry(troops: &[u32]) -> Registry {
        let territories = troops
            .iter()
            .enumerate()
            .map(|(i, &t)| Territory::new(&format!("T{}", i + 1), "Red", t))
            .collect();
        Registry::from_territories(territories).unwrap()
    }

    #[test]
    fn test_outcome_from_rolls() {
        assert_eq!(BattleOutcome::from_rolls(6, 1), BattleOutcome::AttackerWins);
        assert_eq!(BattleOutcome::from_rolls(2, 5), BattleOutcome::DefenderWins);
        assert_eq!(BattleOutcome::from_rolls(4, 4), BattleOutcome::Tie);
    }

    #[test]
    fn test_roll_die_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut seen = [false; DIE_FACES as usize];
        for _ in 0..1000 {
            let roll = roll_die(&mut rng);
            assert!((1..=DIE_FACES).contains(&roll));
            seen[usize::from(roll - 1)] = true;
        }
        assert!(seen.iter().all(|&s| s), "every face should come up");
    }

    #[test]
    fn test_validate_attack_rejections() {
        let registry = registry(&[3, 0, 2]);
        assert_eq!(
            validate_attack(&registry, 0, 9),
            Err(AttackError::NoSuchTerritory(9))
        );
        assert_eq!(validate_attack(&registry, 0, 0), Err(AttackError::SelfAttack));
        assert_eq!(
            validate_attack(&registry, 1, 0),
            Err(AttackError::AttackerHasNoTroops)
        );
        assert_eq!(
            validate_attack(&registry, 0, 1),
            Err(AttackError::DefenderHasNoTroops)
        );
        assert_eq!(validate_attack(&registry, 0, 2), Ok(()));
    }

    #[test]
    fn test_rejected_battle_leaves_registry_untouched() {
        let mut registry = registry(&[3, 0]);
        let before = registry.clone();
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let result = resolve_battle(&mut registry, 0, 1, &mut rng);
        assert_eq!(result, Err(AttackError::DefenderHasNoTroops));
        assert_eq!(registry, before);
    }

    #[test]
    fn test_battle_changes_at_most_one_side() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..200 {
            let mut registry = registry(&[5, 5]);
            let report = resolve_battle(&mut registry, 0, 1, &mut rng).unwrap();

            let attacker = registry.get(0).unwrap().troops;
            let defender = registry.get(1).unwrap().troops;
            match report.outcome {
                BattleOutcome::AttackerWins => assert_eq!((attacker, defender), (5, 4)),
                BattleOutcome::DefenderWins => assert_eq!((attacker, defender), (4, 5)),
                BattleOutcome::Tie => assert_eq!((attacker, defender), (5, 5)),
            }
        }
    }

    #[test]
    fn test_report_display() {
        let report = BattleReport {
            attacker: 0,
            defender: 1,
            attacker_name: "Alpha".to_string(),
            defender_name: "Beta".to_string(),
            attacker_roll: 6,
            defender_roll: 2,
            outcome: BattleOutcome::AttackerWins,
        };
        let text = report.to_string();
        assert!(text.contains("=== BATTLE ==="));
        assert!(text.contains("Alpha (Attacker) rolled: 6"));
        assert!(text.contains("Beta (Defender) rolled: 2"));
        assert!(text.contains("Defense loses 1 troop."));
        assert_eq!(report.loser(), Some(1));
    }
}
