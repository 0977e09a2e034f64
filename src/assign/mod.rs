//! Seeded team assignment and composition reporting.
//!
//! Provides the greedy cross/same team assigner and a summary of the
//! teams it produced.
//!
//! # Algorithm
//!
//! `TeamAssigner` forms cross-disciplinary teams first by scanning a seeded
//! permutation in fixed windows, packs the rest into single-group teams,
//! and spreads leftovers round-robin. It is best-effort, not optimal: the
//! cross-team target may be missed on small or homogeneous rosters.
//!
//! # Reproducibility
//!
//! All randomness comes from generators seeded inside each call. The same
//! roster (in the same order) and the same `AssignmentConfig` always give
//! the same assignment. Permutations follow NumPy's legacy `RandomState`
//! stream (see [`shuffle`]), so tables produced by pandas-based tooling
//! with the same seed are reproduced.

mod config;
mod engine;
pub mod shuffle;
mod summary;

pub use config::{AssignmentConfig, DEFAULT_SEED, DEFAULT_TEAM_SIZE};
pub use engine::{assign_teams, TeamAssigner};
pub use summary::{TeamBreakdown, TeamSummary};
