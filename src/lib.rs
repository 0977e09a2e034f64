//! Reproducible team formation for cohort studies.
//!
//! Classifies students by academic programme and partitions a roster into
//! fixed-size teams, some deliberately mixing programme groups (`cross`)
//! and the rest drawn from a single group (`same`). The outcome is a pure
//! function of the roster order, team size, cross-team target and seed.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Student`, `ProgrammeGroup`, `Condition`,
//!   `Team`, `AssignedRoster`, `RosterRow`
//! - **`classify`**: Programme label → `ProgrammeGroup`
//! - **`validation`**: Roster integrity checks (empty roster, duplicate IDs)
//! - **`assign`**: The seeded greedy assigner and its composition summary
//! - **`error`**: Error and result types
//!
//! # Example
//!
//! ```
//! use u_team::assign::{assign_teams, TeamSummary};
//! use u_team::classify::classify_roster;
//!
//! let roster = classify_roster(vec![
//!     ("S1", Some("B Tech Computer")),
//!     ("S2", Some("B Tech AI")),
//!     ("S3", Some("B Tech IT")),
//!     ("S4", Some("B Tech Mechanical")),
//!     ("S5", None),
//! ]);
//! let assigned = assign_teams(&roster, 2, Some(1), 42).unwrap();
//! let summary = TeamSummary::calculate(&assigned);
//! assert_eq!(summary.total_students, 5);
//! ```
//!
//! Loading rosters and analysing outcomes are left to the caller; the
//! crate performs no I/O.

pub mod assign;
pub mod classify;
pub mod error;
pub mod models;
pub mod validation;

pub use error::{Error, Result};
