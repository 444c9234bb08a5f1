//! Territory records and the fixed-size registry that holds them.

use std::fmt;
use std::io::{BufRead, Write};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{InputResult, SetupError};
use crate::game::input::{Console, truncate_chars};

/// Maximum length of a territory name, in characters.
pub const NAME_MAX_CHARS: usize = 49;

/// Maximum length of an owner tag (army color), in characters.
pub const OWNER_MAX_CHARS: usize = 19;

/// A single territory on the world map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Territory {
    /// Display name, at most [`NAME_MAX_CHARS`] characters.
    pub name: String,
    /// Tag of the faction holding the territory, at most [`OWNER_MAX_CHARS`] characters.
    pub owner: String,
    /// Troops stationed here.
    pub troops: u32,
}

impl Territory {
    /// Create a territory, truncating name and owner to their bounds.
    #[must_use]
    pub fn new(name: &str, owner: &str, troops: u32) -> Self {
        Self {
            name: truncate_chars(name, NAME_MAX_CHARS),
            owner: truncate_chars(owner, OWNER_MAX_CHARS),
            troops,
        }
    }

    /// Whether any troops remain to attack or defend with.
    #[must_use]
    pub const fn has_troops(&self) -> bool {
        self.troops > 0
    }

    /// Remove one troop after a lost battle.
    ///
    /// Callers validate `has_troops` first; the floor at zero only keeps the
    /// count well-defined if that ever slips.
    pub(crate) fn lose_troop(&mut self) {
        self.troops = self.troops.saturating_sub(1);
    }
}

/// Ordered, fixed-size collection of territories for one session.
///
/// Indices are 0-based internally and shown 1-based to the player. The
/// registry is never empty and never changes length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    territories: Vec<Territory>,
}

impl Registry {
    /// Allocate `count` blank territory slots.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::EmptyRegistry`] for `count == 0` and
    /// [`SetupError::Allocation`] if the storage cannot be reserved.
    pub fn create(count: usize) -> Result<Self, SetupError> {
        if count == 0 {
            return Err(SetupError::EmptyRegistry);
        }

        let mut territories = Vec::new();
        territories
            .try_reserve_exact(count)
            .map_err(|_| SetupError::Allocation { requested: count })?;
        territories.resize_with(count, Territory::default);

        Ok(Self { territories })
    }

    /// Build a registry from already-known territories.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::EmptyRegistry`] if `territories` is empty.
    pub fn from_territories(territories: Vec<Territory>) -> Result<Self, SetupError> {
        if territories.is_empty() {
            return Err(SetupError::EmptyRegistry);
        }
        Ok(Self { territories })
    }

    /// Prompt for the name, owner and troop count of every slot, in order.
    ///
    /// # Errors
    ///
    /// Returns an error if the console input closes or fails.
    pub fn populate<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> InputResult<()> {
        for (index, territory) in self.territories.iter_mut().enumerate() {
            console.write_line(format_args!("\n--- Registering territory {} ---", index + 1))?;
            territory.name = console.read_text("Territory name: ", NAME_MAX_CHARS)?;
            territory.owner = console.read_text("Army color: ", OWNER_MAX_CHARS)?;
            territory.troops = console.read_troops("Number of troops: ")?;

            debug!(
                index,
                name = %territory.name,
                owner = %territory.owner,
                troops = territory.troops,
                "territory registered"
            );
        }
        Ok(())
    }

    /// Number of territories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.territories.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.territories.is_empty()
    }

    /// Territory at a 0-based index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Territory> {
        self.territories.get(index)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Territory> {
        self.territories.get_mut(index)
    }

    /// Iterate territories in registry order.
    pub fn iter(&self) -> std::slice::Iter<'_, Territory> {
        self.territories.iter()
    }

    /// All territories as a slice.
    #[must_use]
    pub fn territories(&self) -> &[Territory] {
        &self.territories
    }

    /// Render the world map table.
    #[must_use]
    pub fn display(&self) -> String {
        self.to_string()
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a Territory;
    type IntoIter = std::slice::Iter<'a, Territory>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "================= WORLD MAP =================")?;
        for (index, territory) in self.territories.iter().enumerate() {
            writeln!(
                f,
                "{}. {:<10} (Army: {:<10} | Troops: {})",
                index + 1,
                territory.name,
                territory.owner,
                territory.troops
            )?;
        }
        write!(f, "=============================================")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_create_blank_slots() {
        let registry = Registry::create(5).unwrap();
        assert_eq!(registry.len(), 5);
        for territory in registry.iter() {
            assert!(territory.name.is_empty());
            assert!(territory.owner.is_empty());
            assert_eq!(territory.troops, 0);
        }
    }

    #[test]
    fn test_create_rejects_zero() {
        assert_eq!(Registry::create(0), Err(SetupError::EmptyRegistry));
        assert_eq!(
            Registry::from_territories(Vec::new()),
            Err(SetupError::EmptyRegistry)
        );
    }

    #[test]
    fn test_create_reports_allocation_failure() {
        let result = Registry::create(usize::MAX);
        assert_eq!(
            result,
            Err(SetupError::Allocation {
                requested: usize::MAX
            })
        );
    }

    #[test]
    fn test_territory_new_truncates() {
        let long_name = "n".repeat(80);
        let long_owner = "o".repeat(30);
        let territory = Territory::new(&long_name, &long_owner, 3);
        assert_eq!(territory.name.chars().count(), NAME_MAX_CHARS);
        assert_eq!(territory.owner.chars().count(), OWNER_MAX_CHARS);
    }

    #[test]
    fn test_lose_troop_floors_at_zero() {
        let mut territory = Territory::new("Alpha", "Red", 1);
        territory.lose_troop();
        assert_eq!(territory.troops, 0);
        territory.lose_troop();
        assert_eq!(territory.troops, 0);
    }

    #[test]
    fn test_populate_reads_three_fields_per_slot() {
        let script = "Brazil\nGreen\n4\nChile\nRed\nabc\n-3\n";
        let mut console = Console::new(Cursor::new(script), Vec::new());
        let mut registry = Registry::create(2).unwrap();

        registry.populate(&mut console).unwrap();

        assert_eq!(registry.get(0), Some(&Territory::new("Brazil", "Green", 4)));
        // Non-numeric troops are re-asked; negative ones become zero.
        assert_eq!(registry.get(1), Some(&Territory::new("Chile", "Red", 0)));

        let output = String::from_utf8(console.into_output()).unwrap();
        assert!(output.contains("--- Registering territory 2 ---"));
        assert!(output.contains("Invalid entry. Type again: "));
    }

    #[test]
    fn test_display_lists_one_based() {
        let registry = Registry::from_territories(vec![
            Territory::new("Alpha", "Red", 3),
            Territory::new("Beta", "Blue", 0),
        ])
        .unwrap();

        let map = registry.display();
        assert!(map.contains("1. Alpha"));
        assert!(map.contains("2. Beta"));
        assert!(map.contains("Army: Blue"));
        assert!(map.contains("Troops: 0"));
    }
}
