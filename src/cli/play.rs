//! Play command implementation.

use super::output::{JsonSessionReport, format_text};
use super::{CliError, SummaryFormat};
use conquest::game::TERRITORY_COUNT;
use conquest::{Console, Session};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::io;
use tracing::info;

/// Execute an interactive game on stdin/stdout.
///
/// # Errors
///
/// Returns an error if setup fails or the console closes mid-game.
pub(crate) fn execute(
    seed: Option<u64>,
    format: SummaryFormat,
    quiet: bool,
) -> Result<(), CliError> {
    // Generate seed if not provided
    let seed = seed.unwrap_or_else(|| {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(42)
    });
    info!(seed, "starting game");

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());

    let mut session = Session::setup(
        &mut console,
        TERRITORY_COUNT,
        ChaCha8Rng::seed_from_u64(seed),
    )?;
    let outcome = session.run(&mut console)?;

    if quiet {
        return Ok(());
    }

    let summary = session.summary(outcome);
    match format {
        SummaryFormat::Text => {
            print!("{}", format_text(seed, &summary));
        }
        SummaryFormat::Json => {
            let report = JsonSessionReport { seed, summary };
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| CliError::new(format!("JSON serialization failed: {e}")))?;
            println!("{json}");
        }
    }

    Ok(())
}
