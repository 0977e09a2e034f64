//! Student model.
//!
//! A student is one roster entry: a stable identifier, the raw programme
//! label supplied by the roster loader, and the programme group derived
//! from it. Extra columns (demographics, test scores) travel along in
//! `attributes` and are copied verbatim into the output table.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::ProgrammeGroup;
use crate::classify::programme_group;

/// A student to be placed in a team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Unique student identifier.
    pub id: String,
    /// Raw programme label as supplied by the roster loader.
    pub programme: Option<String>,
    /// Programme group (immutable once assigned).
    pub category: ProgrammeGroup,
    /// Pass-through columns, ordered by key.
    pub attributes: BTreeMap<String, String>,
}

impl Student {
    /// Creates a student with an already-known programme group.
    pub fn new(id: impl Into<String>, category: ProgrammeGroup) -> Self {
        Self {
            id: id.into(),
            programme: None,
            category,
            attributes: BTreeMap::new(),
        }
    }

    /// Creates a student from a raw programme label, classifying it.
    pub fn from_programme(id: impl Into<String>, programme: Option<&str>) -> Self {
        Self {
            id: id.into(),
            programme: programme.map(str::to_string),
            category: programme_group(programme),
            attributes: BTreeMap::new(),
        }
    }

    /// Adds a pass-through attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}
