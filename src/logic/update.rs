//! Entry point run after every recorded result and when the bracket is first set up.

use crate::logic::resolver::resolve;
use crate::logic::schedule::{assign_times, MATCH_SPACING_SECS};
use crate::models::{BracketError, BracketNode, Roster};
use crate::store::{MatchStore, SeedSource};
use chrono::{DateTime, Duration, Utc};
use rand::Rng;

/// Create any elimination matches that can be created from alliance selection and prior
/// results, then reschedule the unplayed ones from `start`.
///
/// Returns the overall winner once the final is decided.
pub fn update_bracket<S, M, R>(
    seeds: &S,
    store: &mut M,
    rng: &mut R,
    start: DateTime<Utc>,
) -> Result<Option<Roster>, BracketError>
where
    S: SeedSource + ?Sized,
    M: MatchStore + ?Sized,
    R: Rng + ?Sized,
{
    update_bracket_with_spacing(seeds, store, rng, start, Duration::seconds(MATCH_SPACING_SECS))
}

/// [`update_bracket`] with a custom gap between matches.
pub fn update_bracket_with_spacing<S, M, R>(
    seeds: &S,
    store: &mut M,
    rng: &mut R,
    start: DateTime<Utc>,
    spacing: Duration,
) -> Result<Option<Roster>, BracketError>
where
    S: SeedSource + ?Sized,
    M: MatchStore + ?Sized,
    R: Rng + ?Sized,
{
    let alliances = seeds.list_alliances()?;
    let winner = resolve(seeds, store, rng, BracketNode::FINAL, alliances.len())?;
    let scheduled = assign_times(store, start, spacing)?;
    log::debug!("{} elimination matches scheduled from {}", scheduled, start);
    Ok(winner)
}
