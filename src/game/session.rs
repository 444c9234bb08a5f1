//! The interactive game loop.

use std::io::{BufRead, Write};

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{AttackError, GameError, InputResult};
use crate::game::{BattleReport, Console, Mission, Registry, Territory, resolve_battle};

/// Number of territories in a standard game.
pub const TERRITORY_COUNT: usize = 5;

const MAIN_MENU: &str = "\n\n===== MAIN MENU =====\n1. Attack\n2. View mission\n3. View map\n0. Quit";

/// An option from the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Leave the game.
    Quit,
    /// Pick two territories and fight.
    Attack,
    /// Show the mission again.
    ViewMission,
    /// Show the world map.
    ViewMap,
}

impl MenuChoice {
    /// Highest menu number.
    pub const MAX: u32 = 3;

    /// Map a menu number to its choice.
    #[must_use]
    pub const fn from_number(number: u32) -> Option<Self> {
        match number {
            0 => Some(Self::Quit),
            1 => Some(Self::Attack),
            2 => Some(Self::ViewMission),
            3 => Some(Self::ViewMap),
            _ => None,
        }
    }
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionOutcome {
    /// The player chose to quit.
    Quit,
    /// A battle left the mission satisfied.
    MissionComplete,
}

/// End-of-session snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    /// How the session ended.
    pub outcome: SessionOutcome,
    /// Battles actually fought (rejected attacks are not counted).
    pub battles: u32,
    /// The mission that was assigned.
    pub mission: Mission,
    /// Whether the mission holds for the final map.
    pub mission_satisfied: bool,
    /// Territories as they stood at the end.
    pub territories: Vec<Territory>,
}

/// One player's game: the world, the secret mission and the dice.
#[derive(Debug)]
pub struct Session<G> {
    registry: Registry,
    mission: Mission,
    rng: G,
    battles: u32,
}

impl<G: Rng> Session<G> {
    /// Start a session from an already populated registry and mission.
    #[must_use]
    pub fn new(registry: Registry, mission: Mission, rng: G) -> Self {
        Self {
            registry,
            mission,
            rng,
            battles: 0,
        }
    }

    /// Register `territories` territories, draw a mission and show it.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Setup`] if the registry cannot be allocated and
    /// [`GameError::Input`] if the console closes or fails.
    pub fn setup<R: BufRead, W: Write>(
        console: &mut Console<R, W>,
        territories: usize,
        mut rng: G,
    ) -> Result<Self, GameError> {
        let mut registry = Registry::create(territories)?;
        registry.populate(console)?;

        let mission = Mission::assign(&registry, &mut rng);
        console.write_line(mission.briefing())?;

        Ok(Self::new(registry, mission, rng))
    }

    /// Run the menu loop until the player quits or completes the mission.
    ///
    /// # Errors
    ///
    /// Returns an error only if the console closes or fails.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> InputResult<SessionOutcome> {
        loop {
            console.write_line(MAIN_MENU)?;
            let number = console.read_bounded_integer("Choice: ", MenuChoice::MAX, true)?;

            let Some(choice) = MenuChoice::from_number(number) else {
                continue;
            };

            match choice {
                MenuChoice::Quit => {
                    info!(battles = self.battles, "player quit");
                    return Ok(SessionOutcome::Quit);
                }
                MenuChoice::ViewMission => console.write_line(self.mission.briefing())?,
                MenuChoice::ViewMap => console.write_line(&self.registry)?,
                MenuChoice::Attack => {
                    if self.attack(console)?.is_some() && self.mission.is_satisfied(&self.registry) {
                        info!(battles = self.battles, "mission complete");
                        console.write_line("\n>>> MISSION COMPLETE! <<<")?;
                        console.write_line(self.mission.briefing())?;
                        return Ok(SessionOutcome::MissionComplete);
                    }
                }
            }
        }
    }

    /// Run one attack flow. Returns the report if a battle was fought.
    ///
    /// Cancelling or choosing an invalid pair prints a message and returns
    /// `None` without touching the map.
    ///
    /// # Errors
    ///
    /// Returns an error only if the console closes or fails.
    pub fn attack<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> InputResult<Option<BattleReport>> {
        console.write_line(&self.registry)?;

        let count = self.registry.len();
        let Some(attacker) = self.select_territory(
            console,
            &format!("Choose the ATTACKER (1 to {count}) or 0 to cancel: "),
        )?
        else {
            return Ok(None);
        };
        if self
            .registry
            .get(attacker)
            .is_some_and(|territory| !territory.has_troops())
        {
            console.write_line(AttackError::AttackerHasNoTroops)?;
            return Ok(None);
        }

        let Some(defender) = self.select_territory(
            console,
            &format!("Choose the DEFENDER (1 to {count}) or 0 to cancel: "),
        )?
        else {
            return Ok(None);
        };

        match resolve_battle(&mut self.registry, attacker, defender, &mut self.rng) {
            Ok(report) => {
                self.battles += 1;
                console.write_line(&report)?;
                Ok(Some(report))
            }
            Err(rejection) => {
                debug!(attacker, defender, %rejection, "attack rejected");
                console.write_line(rejection)?;
                Ok(None)
            }
        }
    }

    /// The world as it stands.
    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// The assigned mission.
    #[must_use]
    pub fn mission(&self) -> &Mission {
        &self.mission
    }

    /// Battles fought so far.
    #[must_use]
    pub fn battles(&self) -> u32 {
        self.battles
    }

    /// Snapshot of the session for reporting.
    #[must_use]
    pub fn summary(&self, outcome: SessionOutcome) -> SessionSummary {
        SessionSummary {
            outcome,
            battles: self.battles,
            mission: self.mission.clone(),
            mission_satisfied: self.mission.is_satisfied(&self.registry),
            territories: self.registry.territories().to_vec(),
        }
    }

    /// Ask for a 1-based territory number; `0` cancels.
    fn select_territory<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
        prompt: &str,
    ) -> InputResult<Option<usize>> {
        let max = u32::try_from(self.registry.len()).unwrap_or(u32::MAX);
        let choice = console.read_bounded_integer(prompt, max, true)?;
        Ok(usize::try_from(choice).ok().and_then(|c| c.checked_sub(1)))
    }
}
