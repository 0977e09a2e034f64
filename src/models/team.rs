//! Team model.

use serde::{Deserialize, Serialize};

use super::Condition;

/// A formed team.
///
/// The first `founding_size` members were committed together when the
/// team was formed; any members after that were appended during leftover
/// redistribution. The condition is fixed at formation and never changes,
/// even if a redistributed member comes from another programme group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// Sequential label (`T01`, `T02`, ...).
    pub id: String,
    /// Condition fixed at formation time.
    pub condition: Condition,
    /// Member student IDs in commit order.
    pub members: Vec<String>,
    /// Number of members at formation time.
    pub founding_size: usize,
}

impl Team {
    /// Formats the label for the team at `index` (0-based formation order).
    pub fn label(index: usize) -> String {
        format!("T{:02}", index + 1)
    }

    /// Total member count.
    #[inline]
    pub fn size(&self) -> usize {
        self.members.len()
    }

    /// Members committed at formation.
    pub fn founding_members(&self) -> &[String] {
        &self.members[..self.founding_size.min(self.members.len())]
    }

    /// Members appended by leftover redistribution.
    pub fn redistributed_members(&self) -> &[String] {
        &self.members[self.founding_size.min(self.members.len())..]
    }

    /// Whether the team holds the given student.
    pub fn contains(&self, student_id: &str) -> bool {
        self.members.iter().any(|m| m == student_id)
    }
}
