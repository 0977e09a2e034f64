//! Team formation domain models.
//!
//! Provides the core data types for describing a cohort and the teams
//! formed from it.
//!
//! # Domain Mappings
//!
//! | u-team | Study design | Course delivery |
//! |--------|--------------|-----------------|
//! | Student | Participant | Enrolled learner |
//! | ProgrammeGroup | Stratum | Department cluster |
//! | Condition | Treatment arm | Team type |
//! | Team | Experimental unit | Project group |
//! | AssignedRoster | Allocation table | Class list |

mod group;
mod roster;
mod student;
mod team;

pub use group::{Condition, ProgrammeGroup};
pub use roster::{AssignedRoster, AssignedStudent, RosterRow};
pub use student::Student;
pub use team::Team;
