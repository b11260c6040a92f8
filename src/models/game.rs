//! Match records: three red and three blue team slots, status and result.

use crate::models::alliance::{Roster, TeamId, ALLIANCE_SIZE};
use crate::models::node::{BracketNode, Round};
use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// Team slots for one side of a match; `None` is a placeholder until the alliance is known.
pub type Slots = [Option<TeamId>; ALLIANCE_SIZE];

/// Placeholder slots for a side whose alliance is not known yet.
pub const EMPTY_SLOTS: Slots = [None; ALLIANCE_SIZE];

/// Phase of the event this match belongs to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    Practice,
    Qualification,
    Elimination,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    #[default]
    Scheduled,
    Complete,
}

/// Result of a completed match.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Winner {
    #[serde(rename = "R")]
    Red,
    #[serde(rename = "B")]
    Blue,
    #[serde(rename = "T")]
    Tie,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    pub match_type: MatchType,
    pub display_name: String,
    pub elim_round: Round,
    pub elim_group: u32,
    /// Ordinal within the node: 1..=3 for the best-of-3, then tie replays.
    pub elim_instance: u32,
    pub red: Slots,
    pub blue: Slots,
    pub status: MatchStatus,
    /// Set once the match is complete.
    pub winner: Option<Winner>,
    pub time: Option<DateTime<Utc>>,
}

impl Match {
    /// New unscheduled elimination match with empty slots.
    pub fn elimination(node: BracketNode, instance: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            match_type: MatchType::Elimination,
            display_name: format!("{}-{}", node.name(), instance),
            elim_round: node.round,
            elim_group: node.group,
            elim_instance: instance,
            red: EMPTY_SLOTS,
            blue: EMPTY_SLOTS,
            status: MatchStatus::Scheduled,
            winner: None,
            time: None,
        }
    }

    pub fn node(&self) -> BracketNode {
        BracketNode::new(self.elim_round, self.elim_group)
    }

    pub fn is_complete(&self) -> bool {
        self.status == MatchStatus::Complete
    }

    /// Mark the match complete with the given result.
    pub fn complete(&mut self, winner: Winner) {
        self.status = MatchStatus::Complete;
        self.winner = Some(winner);
    }
}

/// Random assignment of a roster's three teams to a side's slots.
pub fn shuffled_slots<R: Rng + ?Sized>(roster: &Roster, rng: &mut R) -> Slots {
    let mut teams = *roster.teams();
    teams.shuffle(rng);
    teams.map(Some)
}

/// Slots for a side: shuffled roster if known, placeholders otherwise.
pub fn slots_for<R: Rng + ?Sized>(roster: Option<&Roster>, rng: &mut R) -> Slots {
    roster.map_or(EMPTY_SLOTS, |r| shuffled_slots(r, rng))
}
