//! Runtime settings for the `bracket` binary, read from the environment.

use crate::logic::MATCH_SPACING_SECS;
use chrono::{DateTime, Duration, Utc};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, Eq, PartialEq)]
pub enum ConfigError {
    #[error("{var}: invalid value '{value}'")]
    Invalid { var: &'static str, value: String },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// CSV of `alliance,pick_position,team` rows.
    pub alliances_path: PathBuf,
    /// JSON match snapshot, read and rewritten in place.
    pub matches_path: PathBuf,
    pub start: DateTime<Utc>,
    pub spacing: Duration,
    /// Fixed RNG seed for reproducible slot assignments.
    pub rng_seed: Option<u64>,
}

fn default_alliances_path() -> PathBuf {
    PathBuf::from("alliances.csv")
}

fn default_matches_path() -> PathBuf {
    PathBuf::from("matches.json")
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from an arbitrary variable lookup; unset variables take their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let alliances_path = lookup("BRACKET_ALLIANCES")
            .map(PathBuf::from)
            .unwrap_or_else(default_alliances_path);
        let matches_path = lookup("BRACKET_MATCHES")
            .map(PathBuf::from)
            .unwrap_or_else(default_matches_path);
        let start = match lookup("BRACKET_START") {
            Some(value) => DateTime::parse_from_rfc3339(&value)
                .map(|t| t.with_timezone(&Utc))
                .map_err(|_| ConfigError::Invalid {
                    var: "BRACKET_START",
                    value,
                })?,
            None => Utc::now(),
        };
        let spacing_secs = match lookup("BRACKET_SPACING_SECS") {
            Some(value) => value
                .parse::<i64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::Invalid {
                    var: "BRACKET_SPACING_SECS",
                    value,
                })?,
            None => MATCH_SPACING_SECS,
        };
        let rng_seed = lookup("BRACKET_SEED")
            .map(|value| {
                value.parse::<u64>().map_err(|_| ConfigError::Invalid {
                    var: "BRACKET_SEED",
                    value,
                })
            })
            .transpose()?;

        Ok(Self {
            alliances_path,
            matches_path,
            start,
            spacing: Duration::seconds(spacing_secs),
            rng_seed,
        })
    }
}
