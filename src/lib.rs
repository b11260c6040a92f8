//! Elimination bracket builder: models, bracket logic and the stores it runs against.

pub mod config;
pub mod logic;
pub mod models;
pub mod store;

pub use logic::{
    assign_times, direct_seeds, reconcile, resolve, update_bracket, update_bracket_with_spacing,
    MATCH_SPACING_SECS, PRIMARY_INSTANCES, SEED_ORDER, WINS_REQUIRED,
};
pub use models::{
    Alliance, BracketError, BracketNode, ErrorKind, Match, MatchId, MatchStatus, MatchType,
    Roster, Round, Slots, StoreError, TeamId, Winner, ALLIANCE_SIZE, EMPTY_SLOTS,
};
pub use store::{AllianceTable, InMemoryMatchStore, MatchStore, SeedSource};
