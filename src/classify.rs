//! Programme classification.
//!
//! Maps a free-text programme label to a [`ProgrammeGroup`] using static
//! membership tables. Labels are matched exactly after trimming
//! surrounding whitespace.
//!
//! | Input | Result |
//! |-------|--------|
//! | label in comp table | `CompGroup` |
//! | label in AIA table | `AIAGroup` |
//! | label in other table | `OtherGroup` |
//! | any other string (including empty) | `OtherGroup` |
//! | missing | `Unknown` |

use crate::models::{ProgrammeGroup, Student};

/// Computer, IT and data-science programmes.
pub const COMP_PROGRAMMES: &[&str] = &[
    "B Tech Computer",
    "MBA Tech Computer",
    "B Tech IT",
    "MBA Tech IT",
    "B Tech Data Science",
];

/// AI and cyber-security programmes.
pub const AIA_PROGRAMMES: &[&str] = &["B Tech AI", "MBA Tech AI", "B Tech Cyber Security"];

/// Explicitly listed non-computing programmes.
pub const OTHER_PROGRAMMES: &[&str] = &["B Tech EXTC", "B Tech Mechanical"];

/// Classifies a raw programme label.
///
/// Pure; never fails. Unrecognised labels fall back to `OtherGroup`,
/// a missing label yields `Unknown`.
pub fn programme_group(programme: Option<&str>) -> ProgrammeGroup {
    let Some(label) = programme else {
        return ProgrammeGroup::Unknown;
    };
    let label = label.trim();

    if COMP_PROGRAMMES.contains(&label) {
        ProgrammeGroup::Comp
    } else if AIA_PROGRAMMES.contains(&label) {
        ProgrammeGroup::Aia
    } else if OTHER_PROGRAMMES.contains(&label) {
        ProgrammeGroup::Other
    } else {
        // Present but unrecognised.
        ProgrammeGroup::Other
    }
}

/// Builds classified students from `(id, programme)` pairs, keeping order.
pub fn classify_roster<I, S, P>(entries: I) -> Vec<Student>
where
    I: IntoIterator<Item = (S, Option<P>)>,
    S: Into<String>,
    P: AsRef<str>,
{
    entries
        .into_iter()
        .map(|(id, programme)| Student::from_programme(id, programme.as_ref().map(|p| p.as_ref())))
        .collect()
}
