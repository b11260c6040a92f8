//! Alliance-selection results loaded from CSV.

use crate::models::{Alliance, StoreError, TeamId};
use crate::store::SeedSource;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

/// One team's place in an alliance.
#[derive(Debug, Deserialize)]
struct AllianceTeamRow {
    alliance: u32,
    pick_position: u32,
    team: TeamId,
}

/// Alliances keyed by number.
#[derive(Clone, Debug, Default)]
pub struct AllianceTable {
    alliances: BTreeMap<u32, Vec<TeamId>>,
}

impl AllianceTable {
    pub fn new(alliances: impl IntoIterator<Item = Alliance>) -> Self {
        Self {
            alliances: alliances.into_iter().map(|a| (a.number, a.teams)).collect(),
        }
    }

    /// Parse `alliance,pick_position,team` rows (with header). Teams are ordered by pick position.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, StoreError> {
        let mut rows: Vec<AllianceTeamRow> = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader)
            .deserialize()
            .collect::<Result<_, _>>()?;
        rows.sort_by_key(|r| (r.alliance, r.pick_position));

        let mut alliances: BTreeMap<u32, Vec<TeamId>> = BTreeMap::new();
        for row in rows {
            alliances.entry(row.alliance).or_default().push(row.team);
        }
        Ok(Self { alliances })
    }

    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let file = std::fs::File::open(path)?;
        Self::from_csv_reader(file)
    }

    pub fn len(&self) -> usize {
        self.alliances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alliances.is_empty()
    }

    /// Replace an alliance's teams (e.g. a backup team called in).
    pub fn set_teams(&mut self, alliance: u32, teams: Vec<TeamId>) {
        self.alliances.insert(alliance, teams);
    }
}

impl SeedSource for AllianceTable {
    fn list_alliances(&self) -> Result<Vec<Alliance>, StoreError> {
        Ok(self
            .alliances
            .iter()
            .map(|(&number, teams)| Alliance::new(number, teams.clone()))
            .collect())
    }

    fn teams_of(&self, alliance: u32) -> Result<Vec<TeamId>, StoreError> {
        self.alliances
            .get(&alliance)
            .cloned()
            .ok_or(StoreError::AllianceNotFound(alliance))
    }
}
