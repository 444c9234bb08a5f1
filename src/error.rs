//! Error types for the conquest engine.

use std::fmt;
use std::io;

/// Failures while building the territory registry, before play begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupError {
    /// Storage for the requested number of territories could not be reserved.
    Allocation {
        /// Number of territory slots requested.
        requested: usize,
    },
    /// A registry must hold at least one territory.
    EmptyRegistry,
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::Allocation { requested } => {
                write!(f, "allocation error: could not reserve {requested} territories")
            }
            SetupError::EmptyRegistry => write!(f, "a registry needs at least one territory"),
        }
    }
}

impl std::error::Error for SetupError {}

/// Failures reading from or writing to the console.
///
/// Malformed entries are never errors; they are re-prompted. Only a closed
/// input stream or an I/O failure ends a session this way.
#[derive(Debug)]
pub enum InputError {
    /// The input stream reached end-of-file while a value was still expected.
    Closed,
    /// The underlying reader or writer failed.
    Io(io::Error),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Closed => write!(f, "input closed before the game finished"),
            InputError::Io(e) => write!(f, "console I/O failed: {e}"),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::Closed => None,
            InputError::Io(e) => Some(e),
        }
    }
}

impl From<io::Error> for InputError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Reasons an attack is refused. None of them mutate the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackError {
    /// The index does not name a territory in the registry (0-based).
    NoSuchTerritory(usize),
    /// Attacker and defender are the same territory.
    SelfAttack,
    /// The attacking territory has no troops left.
    AttackerHasNoTroops,
    /// The defending territory has no troops left.
    DefenderHasNoTroops,
}

impl fmt::Display for AttackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttackError::NoSuchTerritory(index) => {
                write!(f, "There is no territory number {}!", index + 1)
            }
            AttackError::SelfAttack => write!(f, "You cannot attack yourself!"),
            AttackError::AttackerHasNoTroops => write!(f, "That territory has no troops!"),
            AttackError::DefenderHasNoTroops => {
                write!(f, "That territory has no troops to defend!")
            }
        }
    }
}

impl std::error::Error for AttackError {}

/// Why a numeric menu or index entry was not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceError {
    /// The entry was not an integer at all.
    NotANumber,
    /// The entry parsed but lies outside the allowed choices.
    OutOfRange(i64),
}

impl fmt::Display for ChoiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChoiceError::NotANumber => write!(f, "Invalid entry!"),
            ChoiceError::OutOfRange(_) => write!(f, "Invalid choice! Try again."),
        }
    }
}

impl std::error::Error for ChoiceError {}

/// Anything that stops a session from being set up.
#[derive(Debug)]
pub enum GameError {
    /// The registry could not be built.
    Setup(SetupError),
    /// The console failed or closed during setup.
    Input(InputError),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Setup(e) => write!(f, "{e}"),
            GameError::Input(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Setup(e) => Some(e),
            GameError::Input(e) => Some(e),
        }
    }
}

impl From<SetupError> for GameError {
    fn from(e: SetupError) -> Self {
        Self::Setup(e)
    }
}

impl From<InputError> for GameError {
    fn from(e: InputError) -> Self {
        Self::Input(e)
    }
}

/// Result type for console interaction.
pub type InputResult<T> = Result<T, InputError>;
