//! Alliance and Roster: the three-team sides of an elimination match.

use crate::models::error::BracketError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Identifier of a single team (its team number).
pub type TeamId = u32;

/// Number of teams on one side of a match.
pub const ALLIANCE_SIZE: usize = 3;

/// An alliance as produced by alliance selection: its seed number and teams in pick order.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Alliance {
    pub number: u32,
    pub teams: Vec<TeamId>,
}

impl Alliance {
    pub fn new(number: u32, teams: Vec<TeamId>) -> Self {
        Self { number, teams }
    }
}

/// The exactly-three teams playing one side of a bracket node.
///
/// A side whose alliance is not yet known is `Option<Roster>::None`; a `Roster` always holds
/// three real teams.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    teams: [TeamId; ALLIANCE_SIZE],
}

impl Roster {
    /// Validate a team list into a roster. Fewer or more than three teams is rejected.
    pub fn new(alliance: u32, teams: &[TeamId]) -> Result<Self, BracketError> {
        match teams {
            [a, b, c] => Ok(Self { teams: [*a, *b, *c] }),
            _ if teams.len() < ALLIANCE_SIZE => Err(BracketError::InsufficientRoster {
                alliance,
                found: teams.len(),
            }),
            _ => Err(BracketError::OversizedRoster {
                alliance,
                found: teams.len(),
            }),
        }
    }

    pub fn teams(&self) -> &[TeamId; ALLIANCE_SIZE] {
        &self.teams
    }

    /// True if the slots hold exactly this roster's teams, in any order.
    pub fn matches_slots(&self, slots: &[Option<TeamId>; ALLIANCE_SIZE]) -> bool {
        let filled: Option<BTreeSet<TeamId>> = slots.iter().copied().collect();
        filled.is_some_and(|set| set == self.teams.iter().copied().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_short_and_long_rosters() {
        assert!(matches!(
            Roster::new(4, &[254, 1114]),
            Err(BracketError::InsufficientRoster { alliance: 4, found: 2 })
        ));
        assert!(matches!(
            Roster::new(4, &[254, 1114, 2056, 469]),
            Err(BracketError::OversizedRoster { alliance: 4, found: 4 })
        ));
    }

    #[test]
    fn slot_comparison_ignores_order_but_not_placeholders() {
        let roster = Roster::new(1, &[254, 1114, 2056]).unwrap();
        assert!(roster.matches_slots(&[Some(2056), Some(254), Some(1114)]));
        assert!(!roster.matches_slots(&[Some(2056), Some(254), None]));
        assert!(!roster.matches_slots(&[Some(2056), Some(254), Some(254)]));
        assert!(!roster.matches_slots(&[Some(2056), Some(254), Some(469)]));
    }
}
