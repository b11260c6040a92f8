//! Errors raised while building the elimination bracket.

use crate::models::game::MatchId;
use thiserror::Error;

/// Broad classification of a [`BracketError`], for callers deciding whether to fix data or retry.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// Bad input: alliance count, bracket depth or roster size.
    Validation,
    /// Persisted matches contradict themselves.
    DataInconsistency,
    /// The seed source or match store failed.
    Persistence,
}

/// Failure from a [`SeedSource`](crate::SeedSource) or [`MatchStore`](crate::MatchStore).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("alliance {0} not found")]
    AllianceNotFound(u32),
    #[error("match {0} not found")]
    MatchNotFound(MatchId),
    #[error("write failed: {0}")]
    Write(String),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid match data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid alliance data: {0}")]
    Csv(#[from] csv::Error),
}

/// Errors that abort an elimination bracket update.
#[derive(Debug, Error)]
pub enum BracketError {
    #[error("must have at least 2 alliances, found {0}")]
    NotEnoughAlliances(usize),
    #[error("round of depth {0} is not supported")]
    UnsupportedDepth(u32),
    #[error("alliance {alliance} has {found} teams; alliances must consist of at least 3 teams")]
    InsufficientRoster { alliance: u32, found: usize },
    #[error("alliance {alliance} has {found} teams; alliances must consist of exactly 3 teams")]
    OversizedRoster { alliance: u32, found: usize },
    #[error("completed match {display_name} ({id}) has no valid winner")]
    InvalidWinner { id: MatchId, display_name: String },
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl BracketError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BracketError::NotEnoughAlliances(_)
            | BracketError::UnsupportedDepth(_)
            | BracketError::InsufficientRoster { .. }
            | BracketError::OversizedRoster { .. } => ErrorKind::Validation,
            BracketError::InvalidWinner { .. } => ErrorKind::DataInconsistency,
            BracketError::Store(_) => ErrorKind::Persistence,
        }
    }
}
