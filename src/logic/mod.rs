//! Elimination bracket logic: seeding, per-node reconciliation, recursion, scheduling.

mod reconciler;
mod resolver;
mod schedule;
mod seeding;
mod update;

pub use reconciler::{reconcile, PRIMARY_INSTANCES, WINS_REQUIRED};
pub use resolver::resolve;
pub use schedule::{assign_times, MATCH_SPACING_SECS};
pub use seeding::{direct_seeds, SEED_ORDER};
pub use update::{update_bracket, update_bracket_with_spacing};
