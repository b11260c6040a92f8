//! Recursive descent through the bracket: who plays at each node, and who won it.

use crate::logic::reconciler::reconcile;
use crate::logic::seeding::direct_seeds;
use crate::models::{BracketError, BracketNode, Roster};
use crate::store::{MatchStore, SeedSource};
use rand::Rng;

/// Resolve `node`, creating and updating matches below and at it as results allow.
///
/// 1. Seed sides directly from alliance selection where this is an alliance's first round.
/// 2. Recurse into the child node for each side still unknown.
/// 3. With at least one side known, reconcile the node's matches.
///
/// Returns the node's winning roster once decided.
pub fn resolve<S, M, R>(
    seeds: &S,
    store: &mut M,
    rng: &mut R,
    node: BracketNode,
    num_alliances: usize,
) -> Result<Option<Roster>, BracketError>
where
    S: SeedSource + ?Sized,
    M: MatchStore + ?Sized,
    R: Rng + ?Sized,
{
    if num_alliances < 2 {
        return Err(BracketError::NotEnoughAlliances(num_alliances));
    }

    let (red_seed, blue_seed) = direct_seeds(node, num_alliances);
    let mut red = red_seed.map(|seed| seeded_roster(seeds, seed)).transpose()?;
    let mut blue = blue_seed.map(|seed| seeded_roster(seeds, seed)).transpose()?;

    if red.is_none() {
        red = resolve(seeds, store, rng, node.red_child()?, num_alliances)?;
    }
    if blue.is_none() {
        blue = resolve(seeds, store, rng, node.blue_child()?, num_alliances)?;
    }

    if red.is_none() && blue.is_none() {
        log::debug!("{}: no alliances known yet", node);
        return Ok(None);
    }
    log::debug!(
        "{}: red {:?} vs blue {:?}",
        node,
        red.as_ref().map(Roster::teams),
        blue.as_ref().map(Roster::teams)
    );
    reconcile(store, rng, node, red.as_ref(), blue.as_ref())
}

fn seeded_roster<S: SeedSource + ?Sized>(seeds: &S, alliance: u32) -> Result<Roster, BracketError> {
    let teams = seeds.teams_of(alliance)?;
    Roster::new(alliance, &teams)
}
