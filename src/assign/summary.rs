//! Team composition report.
//!
//! Summarizes an assigned roster for the study log: how many teams of each
//! condition were formed, how large they are, and how leftover
//! redistribution affected them.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Cross / same teams | Team count per condition |
//! | Min / max size | Smallest and largest team |
//! | Redistributed | Students appended after formation |
//! | Contaminated same teams | `same` teams holding a redistributed member of another group |

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::models::{AssignedRoster, Condition, ProgrammeGroup};

/// Per-team breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamBreakdown {
    /// Team label.
    pub team_id: String,
    /// Team condition.
    pub condition: Condition,
    /// Member count.
    pub size: usize,
    /// Member count per programme group.
    pub group_counts: BTreeMap<ProgrammeGroup, usize>,
}

/// Summary of an assignment run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSummary {
    /// Number of students placed.
    pub total_students: usize,
    /// Number of teams.
    pub team_count: usize,
    /// Teams with condition `cross`.
    pub cross_teams: usize,
    /// Teams with condition `same`.
    pub same_teams: usize,
    /// Cross-team target of the run.
    pub requested_cross_teams: usize,
    /// Smallest team size (0 if there are no teams).
    pub min_team_size: usize,
    /// Largest team size (0 if there are no teams).
    pub max_team_size: usize,
    /// Students appended by leftover redistribution.
    pub redistributed_students: usize,
    /// `same` teams with a redistributed member from another programme group.
    pub contaminated_same_teams: usize,
    /// Breakdown per team, in formation order.
    pub teams: Vec<TeamBreakdown>,
}

impl TeamSummary {
    /// Computes the summary of an assigned roster.
    pub fn calculate(roster: &AssignedRoster) -> Self {
        let mut teams = Vec::with_capacity(roster.teams.len());
        let mut redistributed = 0;
        let mut contaminated = 0;

        for team in &roster.teams {
            let mut group_counts: BTreeMap<ProgrammeGroup, usize> = BTreeMap::new();
            for group in roster.team_categories(team, false) {
                *group_counts.entry(group).or_insert(0) += 1;
            }

            redistributed += team.redistributed_members().len();

            if team.condition == Condition::Same {
                let founding: BTreeSet<ProgrammeGroup> =
                    roster.team_categories(team, true).into_iter().collect();
                let foreign = team
                    .redistributed_members()
                    .iter()
                    .filter_map(|id| roster.category_of(id))
                    .any(|g| !founding.contains(&g));
                if foreign {
                    contaminated += 1;
                }
            }

            teams.push(TeamBreakdown {
                team_id: team.id.clone(),
                condition: team.condition,
                size: team.size(),
                group_counts,
            });
        }

        let cross_teams = teams
            .iter()
            .filter(|t| t.condition == Condition::Cross)
            .count();

        Self {
            total_students: roster.student_count(),
            team_count: teams.len(),
            cross_teams,
            same_teams: teams.len() - cross_teams,
            requested_cross_teams: roster.requested_cross_teams,
            min_team_size: teams.iter().map(|t| t.size).min().unwrap_or(0),
            max_team_size: teams.iter().map(|t| t.size).max().unwrap_or(0),
            redistributed_students: redistributed,
            contaminated_same_teams: contaminated,
            teams,
        }
    }

    /// Whether the requested number of cross teams was formed.
    pub fn target_met(&self) -> bool {
        self.cross_teams >= self.requested_cross_teams
    }

    /// Whether team sizes differ by at most one.
    pub fn is_balanced(&self) -> bool {
        self.max_team_size - self.min_team_size <= 1
    }
}
