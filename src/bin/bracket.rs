//! Runs one elimination bracket update over files on disk.
//! Run with: cargo run --bin bracket
//! Reads alliances from BRACKET_ALLIANCES (CSV) and matches from BRACKET_MATCHES (JSON, rewritten
//! in place). See `elimination_bracket::config` for the other variables.

use elimination_bracket::config::Config;
use elimination_bracket::{
    update_bracket_with_spacing, AllianceTable, InMemoryMatchStore, MatchStore, MatchType,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::process::ExitCode;

fn run(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let alliances = AllianceTable::from_csv_path(&config.alliances_path)?;
    let mut store = InMemoryMatchStore::load_json(&config.matches_path)?;
    log::info!(
        "Loaded {} alliances and {} matches",
        alliances.len(),
        store.len()
    );

    let mut rng = match config.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let winner =
        update_bracket_with_spacing(&alliances, &mut store, &mut rng, config.start, config.spacing)?;
    store.save_json(&config.matches_path)?;

    match winner {
        Some(roster) => log::info!("Elimination bracket won by {:?}", roster.teams()),
        None => {
            for m in store
                .matches_by_type(MatchType::Elimination)?
                .iter()
                .filter(|m| !m.is_complete())
            {
                let time = m.time.map(|t| t.to_rfc3339()).unwrap_or_default();
                log::info!("{} {} red {:?} blue {:?}", time, m.display_name, m.red, m.blue);
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Bracket update failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
