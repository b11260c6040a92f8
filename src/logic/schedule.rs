//! Kickoff times for the elimination matches still to be played.

use crate::models::{MatchType, StoreError};
use crate::store::MatchStore;
use chrono::{DateTime, Duration, Utc};

/// Seconds between consecutive elimination matches.
pub const MATCH_SPACING_SECS: i64 = 600;

/// Give every incomplete elimination match a slot `spacing` apart, starting at `start`, in store
/// order. Completed matches keep their time. Returns how many matches are scheduled.
pub fn assign_times<M>(
    store: &mut M,
    start: DateTime<Utc>,
    spacing: Duration,
) -> Result<usize, StoreError>
where
    M: MatchStore + ?Sized,
{
    let pending = store
        .matches_by_type(MatchType::Elimination)?
        .into_iter()
        .filter(|m| !m.is_complete());

    let mut scheduled = 0;
    let mut time = start;
    for mut m in pending {
        if m.time != Some(time) {
            m.time = Some(time);
            store.save(&m)?;
        }
        time += spacing;
        scheduled += 1;
    }
    Ok(scheduled)
}
