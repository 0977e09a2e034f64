//! Programme group and team condition.
//!
//! A programme group is the coarse academic bucket used to judge team
//! diversity. A condition records whether a team was formed to mix
//! groups (`cross`) or from a single group (`same`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Programme group (category) of a student.
///
/// Variants are declared in label order so that `Ord` sorts groups by
/// label ascending (`AIAGroup < CompGroup < OtherGroup < Unknown`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ProgrammeGroup {
    /// AI, cyber-security and related mixed-technology programmes.
    #[serde(rename = "AIAGroup")]
    Aia,
    /// Computer, IT and data-science programmes.
    #[serde(rename = "CompGroup")]
    Comp,
    /// Any other recognised or unrecognised programme label.
    #[serde(rename = "OtherGroup")]
    Other,
    /// No programme label available.
    #[serde(rename = "Unknown")]
    Unknown,
}

impl ProgrammeGroup {
    /// All groups in label order.
    pub const ALL: [ProgrammeGroup; 4] = [Self::Aia, Self::Comp, Self::Other, Self::Unknown];

    /// Classifies a raw programme label. See [`crate::classify`].
    pub fn classify(programme: Option<&str>) -> Self {
        crate::classify::programme_group(programme)
    }

    /// Stable label used in serialized output.
    pub fn label(self) -> &'static str {
        match self {
            Self::Aia => "AIAGroup",
            Self::Comp => "CompGroup",
            Self::Other => "OtherGroup",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for ProgrammeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ProgrammeGroup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|g| g.label() == s.trim())
            .ok_or_else(|| format!("unknown programme group label: '{s}'"))
    }
}

/// Experimental condition of a team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    /// Formed from members of at least two programme groups.
    Cross,
    /// Formed from members of a single programme group.
    Same,
}

impl Condition {
    /// Stable label used in serialized output.
    pub fn label(self) -> &'static str {
        match self {
            Self::Cross => "cross",
            Self::Same => "same",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
