//! Secret missions and victory checks.
//!
//! A mission is drawn once, right after the territories are registered, and
//! never changes. It is then checked against the live registry after every
//! battle and whenever the player asks to see it.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::game::{Registry, Territory};

/// Number of zero-troop territories a [`Mission::ConquerCount`] requires.
pub const CONQUER_COUNT_TARGET: usize = 2;

/// The three kinds of mission, without their targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissionKind {
    /// Wipe out every troop of one army color.
    EliminateOwner,
    /// Bring one named territory down to zero troops.
    ConquerTerritory,
    /// Bring a number of territories down to zero troops.
    ConquerCount,
}

impl MissionKind {
    /// Every kind, in draw order.
    pub const ALL: [MissionKind; 3] = [
        MissionKind::EliminateOwner,
        MissionKind::ConquerTerritory,
        MissionKind::ConquerCount,
    ];

    /// Short headline shown above the mission details.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            MissionKind::EliminateOwner => "Destroy the enemy army",
            MissionKind::ConquerTerritory => "Conquer a specific territory",
            MissionKind::ConquerCount => "Conquer N territories",
        }
    }
}

/// A victory objective together with its target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Mission {
    /// No territory of this color may keep any troops.
    EliminateOwner {
        /// Army color to wipe out.
        owner: String,
    },
    /// This territory must be reduced to zero troops.
    ConquerTerritory {
        /// Name of the territory to take.
        name: String,
    },
    /// At least `required` territories must be at zero troops.
    ConquerCount {
        /// How many empty territories are needed.
        required: usize,
    },
}

impl Mission {
    /// Draw a random mission for the current registry.
    ///
    /// The kind is drawn first, uniformly. Color and territory missions then
    /// draw a second, independent index to pick their target.
    pub fn assign<G: Rng + ?Sized>(registry: &Registry, rng: &mut G) -> Self {
        let kind = MissionKind::ALL[rng.gen_range(0..MissionKind::ALL.len())];

        let mission = match kind {
            MissionKind::EliminateOwner => Mission::EliminateOwner {
                owner: pick_target(registry, rng).owner.clone(),
            },
            MissionKind::ConquerTerritory => Mission::ConquerTerritory {
                name: pick_target(registry, rng).name.clone(),
            },
            MissionKind::ConquerCount => Mission::ConquerCount {
                required: CONQUER_COUNT_TARGET,
            },
        };

        info!(mission = %mission, "mission assigned");
        mission
    }

    /// Which kind of mission this is.
    #[must_use]
    pub const fn kind(&self) -> MissionKind {
        match self {
            Mission::EliminateOwner { .. } => MissionKind::EliminateOwner,
            Mission::ConquerTerritory { .. } => MissionKind::ConquerTerritory,
            Mission::ConquerCount { .. } => MissionKind::ConquerCount,
        }
    }

    /// Whether the registry currently meets this mission. Pure.
    #[must_use]
    pub fn is_satisfied(&self, registry: &Registry) -> bool {
        match self {
            Mission::EliminateOwner { owner } => !registry
                .iter()
                .any(|territory| territory.owner == *owner && territory.has_troops()),
            Mission::ConquerTerritory { name } => registry
                .iter()
                .find(|territory| territory.name == *name)
                .is_some_and(|territory| territory.troops == 0),
            Mission::ConquerCount { required } => {
                registry.iter().filter(|territory| territory.troops == 0).count() >= *required
            }
        }
    }

    /// Framed mission block, as shown at start, on request, and on victory.
    #[must_use]
    pub fn briefing(&self) -> String {
        format!(
            "\n===== YOUR MISSION =====\n{}\n{self}\n========================",
            self.kind().title()
        )
    }
}

/// Describes the mission as one sentence.
impl fmt::Display for Mission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mission::EliminateOwner { owner } => {
                write!(f, "Destroy every troop of the color: {owner}")
            }
            Mission::ConquerTerritory { name } => write!(f, "Conquer the territory: {name}"),
            Mission::ConquerCount { required } => write!(f, "Conquer {required} territories"),
        }
    }
}

fn pick_target<'a, G: Rng + ?Sized>(registry: &'a Registry, rng: &mut G) -> &'a Territory {
    let territories = registry.territories();
    &territories[rng.gen_range(0..territories.len())]
}
