//! Data structures for the elimination bracket: alliances, bracket nodes, matches, errors.

mod alliance;
mod error;
mod game;
mod node;

pub use alliance::{Alliance, Roster, TeamId, ALLIANCE_SIZE};
pub use error::{BracketError, ErrorKind, StoreError};
pub use game::{
    shuffled_slots, slots_for, Match, MatchId, MatchStatus, MatchType, Slots, Winner, EMPTY_SLOTS,
};
pub use node::{BracketNode, Round};
