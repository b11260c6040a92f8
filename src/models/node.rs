//! Bracket positions: the supported round depths and `(round, group)` nodes.

use crate::models::error::BracketError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Depth of a bracket level. The discriminant is the number of groups in that level.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum Round {
    Final = 1,
    Semifinal = 2,
    Quarterfinal = 4,
    Eighthfinal = 8,
}

impl Round {
    pub fn from_depth(depth: u32) -> Result<Self, BracketError> {
        match depth {
            1 => Ok(Round::Final),
            2 => Ok(Round::Semifinal),
            4 => Ok(Round::Quarterfinal),
            8 => Ok(Round::Eighthfinal),
            _ => Err(BracketError::UnsupportedDepth(depth)),
        }
    }

    pub fn depth(self) -> u32 {
        self as u32
    }

    /// Short name used in match display names.
    pub fn short_name(self) -> &'static str {
        match self {
            Round::Final => "F",
            Round::Semifinal => "SF",
            Round::Quarterfinal => "QF",
            Round::Eighthfinal => "EF",
        }
    }
}

impl TryFrom<u32> for Round {
    type Error = BracketError;

    fn try_from(depth: u32) -> Result<Self, Self::Error> {
        Round::from_depth(depth)
    }
}

impl From<Round> for u32 {
    fn from(round: Round) -> Self {
        round.depth()
    }
}

/// One position in the elimination tree.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct BracketNode {
    pub round: Round,
    /// 1-based position within the round, `1..=round.depth()`.
    pub group: u32,
}

impl BracketNode {
    pub const FINAL: BracketNode = BracketNode {
        round: Round::Final,
        group: 1,
    };

    pub fn new(round: Round, group: u32) -> Self {
        Self { round, group }
    }

    /// Node whose winner plays the red side here. Fails below the deepest supported round.
    pub fn red_child(self) -> Result<Self, BracketError> {
        let round = Round::from_depth(self.round.depth() * 2)?;
        Ok(Self::new(round, self.group * 2 - 1))
    }

    /// Node whose winner plays the blue side here.
    pub fn blue_child(self) -> Result<Self, BracketError> {
        let round = Round::from_depth(self.round.depth() * 2)?;
        Ok(Self::new(round, self.group * 2))
    }

    /// Prefix of match display names: `F` for the final, otherwise round name plus group (`QF3`).
    pub fn name(self) -> String {
        match self.round {
            Round::Final => Round::Final.short_name().to_string(),
            round => format!("{}{}", round.short_name(), self.group),
        }
    }
}

impl fmt::Display for BracketNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}
