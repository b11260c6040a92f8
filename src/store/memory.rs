//! Match store kept in memory and snapshotted to JSON.

use crate::models::{BracketNode, Match, MatchId, MatchType, StoreError};
use crate::store::MatchStore;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Matches in creation order.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct InMemoryMatchStore {
    matches: Vec<Match>,
}

impl InMemoryMatchStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_matches(matches: Vec<Match>) -> Self {
        Self { matches }
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn all(&self) -> &[Match] {
        &self.matches
    }

    pub fn get(&self, id: MatchId) -> Option<&Match> {
        self.matches.iter().find(|m| m.id == id)
    }

    pub fn get_mut(&mut self, id: MatchId) -> Option<&mut Match> {
        self.matches.iter_mut().find(|m| m.id == id)
    }

    /// Look up a match by display name (e.g. `QF2-1`).
    pub fn by_name(&self, display_name: &str) -> Option<&Match> {
        self.matches.iter().find(|m| m.display_name == display_name)
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, StoreError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn to_json_writer<W: Write>(&self, writer: W) -> Result<(), StoreError> {
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Load a snapshot; a missing file yields an empty store.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("No match file at {}, starting empty", path.display());
            return Ok(Self::new());
        }
        Self::from_json_reader(BufReader::new(File::open(path)?))
    }

    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<(), StoreError> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.to_json_writer(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

impl MatchStore for InMemoryMatchStore {
    fn matches_by_type(&self, match_type: MatchType) -> Result<Vec<Match>, StoreError> {
        let mut found: Vec<Match> = self
            .matches
            .iter()
            .filter(|m| m.match_type == match_type)
            .cloned()
            .collect();
        if match_type == MatchType::Elimination {
            // Stable sort keeps creation order within equal keys.
            found.sort_by_key(|m| (Reverse(m.elim_round), m.elim_instance, m.elim_group));
        }
        Ok(found)
    }

    fn matches_by_node(&self, node: BracketNode) -> Result<Vec<Match>, StoreError> {
        let mut found: Vec<Match> = self
            .matches
            .iter()
            .filter(|m| m.match_type == MatchType::Elimination && m.node() == node)
            .cloned()
            .collect();
        found.sort_by_key(|m| m.elim_instance);
        Ok(found)
    }

    fn create(&mut self, m: Match) -> Result<MatchId, StoreError> {
        let id = m.id;
        self.matches.push(m);
        Ok(id)
    }

    fn save(&mut self, m: &Match) -> Result<(), StoreError> {
        let existing = self.get_mut(m.id).ok_or(StoreError::MatchNotFound(m.id))?;
        *existing = m.clone();
        Ok(())
    }

    fn delete(&mut self, m: &Match) -> Result<(), StoreError> {
        let idx = self
            .matches
            .iter()
            .position(|x| x.id == m.id)
            .ok_or(StoreError::MatchNotFound(m.id))?;
        self.matches.remove(idx);
        Ok(())
    }
}
