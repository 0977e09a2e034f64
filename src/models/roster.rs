//! Assigned roster (solution) model.
//!
//! An assigned roster is the complete output of one assignment run: the
//! teams in formation order and every input student stamped with a team
//! and condition. Its flat form (`RosterRow`) is the table handed to the
//! downstream analysis pipeline and kept for audit.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{Condition, ProgrammeGroup, Student, Team};

/// A student with its team assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignedStudent {
    /// The input student, unchanged.
    pub student: Student,
    /// Assigned team label.
    pub team_id: String,
    /// Condition of the assigned team.
    pub condition: Condition,
}

/// One row of the flat audit table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterRow {
    /// Student identifier.
    pub student_id: String,
    /// Raw programme label.
    pub programme: Option<String>,
    /// Programme group.
    pub category: ProgrammeGroup,
    /// Team label.
    pub team_id: String,
    /// Team condition.
    pub condition: Condition,
    /// Pass-through columns.
    pub attributes: BTreeMap<String, String>,
}

/// Complete result of a team assignment run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignedRoster {
    /// Teams in formation order (cross teams first, then same teams).
    pub teams: Vec<Team>,
    /// Students in original roster order.
    pub students: Vec<AssignedStudent>,
    /// Cross-team count the run aimed for.
    pub requested_cross_teams: usize,
    /// Cross-team count actually formed.
    pub achieved_cross_teams: usize,
}

impl AssignedRoster {
    /// Finds a team by label.
    pub fn team(&self, team_id: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == team_id)
    }

    /// Finds a student's assignment by student ID.
    pub fn student(&self, student_id: &str) -> Option<&AssignedStudent> {
        self.students.iter().find(|s| s.student.id == student_id)
    }

    /// Returns the programme group of a student, if present.
    pub fn category_of(&self, student_id: &str) -> Option<ProgrammeGroup> {
        self.student(student_id).map(|s| s.student.category)
    }

    /// Returns all teams with the given condition.
    pub fn teams_with_condition(&self, condition: Condition) -> Vec<&Team> {
        self.teams
            .iter()
            .filter(|t| t.condition == condition)
            .collect()
    }

    /// Programme groups of a team's members, in member order.
    ///
    /// With `founding_only`, redistributed members are left out.
    pub fn team_categories(&self, team: &Team, founding_only: bool) -> Vec<ProgrammeGroup> {
        let members = if founding_only {
            team.founding_members()
        } else {
            &team.members[..]
        };
        members
            .iter()
            .filter_map(|id| self.category_of(id))
            .collect()
    }

    /// Flattens the assignment into one row per student (roster order).
    pub fn rows(&self) -> Vec<RosterRow> {
        self.students
            .iter()
            .map(|s| RosterRow {
                student_id: s.student.id.clone(),
                programme: s.student.programme.clone(),
                category: s.student.category,
                team_id: s.team_id.clone(),
                condition: s.condition,
                attributes: s.student.attributes.clone(),
            })
            .collect()
    }

    /// Number of teams.
    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    /// Number of assigned students.
    pub fn student_count(&self) -> usize {
        self.students.len()
    }
}
