//! Integration tests for error classification and propagation.

use chrono::{TimeZone, Utc};
use elimination_bracket::{
    update_bracket, Alliance, AllianceTable, BracketError, BracketNode, ErrorKind,
    InMemoryMatchStore, Match, MatchId, MatchStatus, MatchStore, MatchType, StoreError,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn alliances(n: u32) -> AllianceTable {
    AllianceTable::new((1..=n).map(|a| Alliance::new(a, vec![a * 10, a * 10 + 1, a * 10 + 2])))
}

fn run(seeds: &AllianceTable, store: &mut impl MatchStore) -> Result<(), BracketError> {
    let mut rng = StdRng::seed_from_u64(21);
    let start = Utc.with_ymd_and_hms(2014, 4, 26, 9, 0, 0).unwrap();
    update_bracket(seeds, store, &mut rng, start).map(|_| ())
}

/// Store whose writes start failing after a number of creates.
struct FlakyStore {
    inner: InMemoryMatchStore,
    creates_left: usize,
}

impl MatchStore for FlakyStore {
    fn matches_by_type(&self, match_type: MatchType) -> Result<Vec<Match>, StoreError> {
        self.inner.matches_by_type(match_type)
    }

    fn matches_by_node(&self, node: BracketNode) -> Result<Vec<Match>, StoreError> {
        self.inner.matches_by_node(node)
    }

    fn create(&mut self, m: Match) -> Result<MatchId, StoreError> {
        if self.creates_left == 0 {
            return Err(StoreError::Write("disk full".to_string()));
        }
        self.creates_left -= 1;
        self.inner.create(m)
    }

    fn save(&mut self, m: &Match) -> Result<(), StoreError> {
        self.inner.save(m)
    }

    fn delete(&mut self, m: &Match) -> Result<(), StoreError> {
        self.inner.delete(m)
    }
}

#[test]
fn fewer_than_two_alliances_is_rejected() {
    for n in [0, 1] {
        let err = run(&alliances(n), &mut InMemoryMatchStore::new()).unwrap_err();
        assert!(matches!(err, BracketError::NotEnoughAlliances(found) if found == n as usize));
        assert_eq!(err.kind(), ErrorKind::Validation);
    }
}

#[test]
fn more_than_sixteen_alliances_is_too_deep() {
    let err = run(&alliances(17), &mut InMemoryMatchStore::new()).unwrap_err();
    assert!(matches!(err, BracketError::UnsupportedDepth(16)));
    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[test]
fn alliances_must_have_exactly_three_teams() {
    let mut seeds = alliances(2);
    seeds.set_teams(2, vec![20, 21]);
    let err = run(&seeds, &mut InMemoryMatchStore::new()).unwrap_err();
    assert!(matches!(
        err,
        BracketError::InsufficientRoster { alliance: 2, found: 2 }
    ));

    seeds.set_teams(2, vec![20, 21, 22, 23]);
    let err = run(&seeds, &mut InMemoryMatchStore::new()).unwrap_err();
    assert!(matches!(
        err,
        BracketError::OversizedRoster { alliance: 2, found: 4 }
    ));
    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[test]
fn complete_match_without_winner_is_inconsistent() {
    let seeds = alliances(2);
    let mut store = InMemoryMatchStore::new();
    run(&seeds, &mut store).unwrap();

    let mut broken = store.by_name("F-1").unwrap().clone();
    broken.status = MatchStatus::Complete;
    broken.winner = None;
    store.save(&broken).unwrap();

    let err = run(&seeds, &mut store).unwrap_err();
    assert!(matches!(&err, BracketError::InvalidWinner { id, .. } if *id == broken.id));
    assert_eq!(err.kind(), ErrorKind::DataInconsistency);
}

#[test]
fn unknown_winner_marker_fails_to_load() {
    let seeds = alliances(2);
    let mut store = InMemoryMatchStore::new();
    run(&seeds, &mut store).unwrap();

    let mut json = Vec::new();
    store.to_json_writer(&mut json).unwrap();
    let json = String::from_utf8(json)
        .unwrap()
        .replacen("\"winner\": null", "\"winner\": \"X\"", 1);
    assert!(matches!(
        InMemoryMatchStore::from_json_reader(json.as_bytes()),
        Err(StoreError::Json(_))
    ));
}

#[test]
fn store_failure_aborts_and_a_retry_resumes() {
    let seeds = alliances(8);
    let mut store = FlakyStore {
        inner: InMemoryMatchStore::new(),
        creates_left: 5,
    };

    let err = run(&seeds, &mut store).unwrap_err();
    assert!(matches!(err, BracketError::Store(StoreError::Write(_))));
    assert_eq!(err.kind(), ErrorKind::Persistence);
    // QF1 finished before the failure; QF2 got two of its three matches.
    assert_eq!(store.inner.len(), 5);

    store.creates_left = usize::MAX;
    run(&seeds, &mut store).unwrap();
    assert_eq!(store.inner.len(), 12);
    let mut names: Vec<_> = store.inner.all().iter().map(|m| m.display_name.clone()).collect();
    names.sort();
    names.dedup();
    assert_eq!(names.len(), 12);
}

#[test]
fn unknown_alliance_surfaces_as_persistence_error() {
    let seeds = AllianceTable::new([
        Alliance::new(1, vec![10, 11, 12]),
        Alliance::new(3, vec![30, 31, 32]),
    ]);
    let err = run(&seeds, &mut InMemoryMatchStore::new()).unwrap_err();
    assert!(matches!(
        err,
        BracketError::Store(StoreError::AllianceNotFound(2))
    ));
    assert_eq!(err.kind(), ErrorKind::Persistence);
}
