//! Collaborator contracts consumed by the bracket logic, plus the bundled implementations.

mod alliances;
mod memory;

pub use alliances::AllianceTable;
pub use memory::InMemoryMatchStore;

use crate::models::{Alliance, BracketNode, Match, MatchId, MatchType, StoreError, TeamId};

/// Source of alliance-selection results.
pub trait SeedSource {
    /// All alliances, ordered by alliance number. An empty list is not an error.
    fn list_alliances(&self) -> Result<Vec<Alliance>, StoreError>;

    /// Teams of one alliance in pick order. Fails `AllianceNotFound` for an unknown number.
    fn teams_of(&self, alliance: u32) -> Result<Vec<TeamId>, StoreError>;
}

/// Persisted match records.
pub trait MatchStore {
    /// Matches of one type, in schedule order.
    fn matches_by_type(&self, match_type: MatchType) -> Result<Vec<Match>, StoreError>;

    /// Elimination matches of one bracket node, ordered by instance.
    fn matches_by_node(&self, node: BracketNode) -> Result<Vec<Match>, StoreError>;

    fn create(&mut self, m: Match) -> Result<MatchId, StoreError>;

    fn save(&mut self, m: &Match) -> Result<(), StoreError>;

    fn delete(&mut self, m: &Match) -> Result<(), StoreError>;
}
