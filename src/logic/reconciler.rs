//! Per-node reconciliation of persisted matches against the node's known rosters.

use crate::models::{
    shuffled_slots, slots_for, BracketError, BracketNode, Match, Roster, Winner,
};
use crate::store::MatchStore;
use rand::Rng;

/// Matches in a best-of-3 before any tie replays.
pub const PRIMARY_INSTANCES: u32 = 3;

/// Wins needed to take a node.
pub const WINS_REQUIRED: usize = 2;

/// Tally of a node's matches after slot correction.
#[derive(Debug, Default)]
struct NodeTally {
    red_wins: usize,
    blue_wins: usize,
    /// Completed ties, in instance order.
    ties: Vec<Match>,
    incomplete: Vec<Match>,
}

/// Bring the persisted match set of `node` in line with its rosters.
///
/// Returns the winning roster once a side has two wins, `None` while the node is undecided.
pub fn reconcile<M, R>(
    store: &mut M,
    rng: &mut R,
    node: BracketNode,
    red: Option<&Roster>,
    blue: Option<&Roster>,
) -> Result<Option<Roster>, BracketError>
where
    M: MatchStore + ?Sized,
    R: Rng + ?Sized,
{
    let matches = store.matches_by_node(node)?;
    let total = matches.len();
    let instances: Vec<u32> = matches.iter().map(|m| m.elim_instance).collect();
    let mut tally = NodeTally::default();

    for mut m in matches {
        if correct_slots(&mut m, red, blue, rng) {
            store.save(&m)?;
        }

        if !m.is_complete() {
            tally.incomplete.push(m);
            continue;
        }
        let result = m.winner;
        match result {
            Some(Winner::Red) => tally.red_wins += 1,
            Some(Winner::Blue) => tally.blue_wins += 1,
            Some(Winner::Tie) => tally.ties.push(m),
            None => {
                return Err(BracketError::InvalidWinner {
                    id: m.id,
                    display_name: m.display_name,
                })
            }
        }
    }

    let winner = if tally.red_wins >= WINS_REQUIRED {
        Some(red)
    } else if tally.blue_wins >= WINS_REQUIRED {
        Some(blue)
    } else {
        None
    };
    if let Some(roster) = winner {
        for m in &tally.incomplete {
            log::info!("Deleting superfluous match {}", m.display_name);
            store.delete(m)?;
        }
        log::info!("{} won by {:?}", node, roster.map(Roster::teams));
        return Ok(roster.copied());
    }

    // Ties beyond the replays already present still need one.
    let replays = total.saturating_sub(PRIMARY_INSTANCES as usize);
    let pending_ties = tally.ties.get(replays..).unwrap_or_default();

    // Primaries go missing only when deleted after a since-revised win, or when an earlier
    // update failed partway through creating them.
    let mut created = 0;
    if total == 0 || pending_ties.is_empty() {
        for instance in (1..=PRIMARY_INSTANCES).filter(|i| !instances.contains(i)) {
            let mut m = Match::elimination(node, instance);
            m.red = slots_for(red, rng);
            m.blue = slots_for(blue, rng);
            log::info!("Creating match {}", m.display_name);
            store.create(m)?;
            created += 1;
        }
    }

    // Replays keep the tied match's positions so printed schedules stay valid.
    if created == 0 && tally.incomplete.is_empty() && !pending_ties.is_empty() {
        let mut next_instance = instances.iter().copied().max().unwrap_or(0);
        for tie in pending_ties {
            next_instance += 1;
            let mut m = Match::elimination(node, next_instance);
            m.red = tie.red;
            m.blue = tie.blue;
            log::info!("Creating match {} to replay tied {}", m.display_name, tie.display_name);
            store.create(m)?;
        }
    }

    Ok(None)
}

/// Reshuffle each side whose slots no longer hold its roster. Returns true if anything changed.
fn correct_slots<R: Rng + ?Sized>(
    m: &mut Match,
    red: Option<&Roster>,
    blue: Option<&Roster>,
    rng: &mut R,
) -> bool {
    let mut changed = false;
    if let Some(roster) = red.filter(|r| !r.matches_slots(&m.red)) {
        if m.red.iter().any(Option::is_some) {
            log::warn!("Red alliance changed for {}, reassigning slots", m.display_name);
        }
        m.red = shuffled_slots(roster, rng);
        changed = true;
    }
    if let Some(roster) = blue.filter(|r| !r.matches_slots(&m.blue)) {
        if m.blue.iter().any(Option::is_some) {
            log::warn!("Blue alliance changed for {}, reassigning slots", m.display_name);
        }
        m.blue = shuffled_slots(roster, rng);
        changed = true;
    }
    changed
}
