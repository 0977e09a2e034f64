//! Assignment configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default nominal team size.
pub const DEFAULT_TEAM_SIZE: usize = 4;

/// Default seed.
pub const DEFAULT_SEED: u32 = 42;

/// Parameters of one assignment run.
///
/// Deserializable so a study can keep its parameters next to its data;
/// omitted fields take the defaults.
///
/// # Example
///
/// ```
/// use u_team::assign::AssignmentConfig;
///
/// let config = AssignmentConfig::new()
///     .with_team_size(4)
///     .with_target_cross_teams(7)
///     .with_seed(42);
/// assert_eq!(config.effective_target(60), 7);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssignmentConfig {
    /// Nominal team size.
    pub team_size: usize,
    /// Cross teams to aim for. `None` = half the whole teams, at least 1.
    pub target_cross_teams: Option<usize>,
    /// Seed of the first permutation; the second uses `seed + 1`.
    pub seed: u32,
}

impl Default for AssignmentConfig {
    fn default() -> Self {
        Self {
            team_size: DEFAULT_TEAM_SIZE,
            target_cross_teams: None,
            seed: DEFAULT_SEED,
        }
    }
}

impl AssignmentConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the nominal team size.
    pub fn with_team_size(mut self, team_size: usize) -> Self {
        self.team_size = team_size;
        self
    }

    /// Sets the cross-team target.
    pub fn with_target_cross_teams(mut self, target: usize) -> Self {
        self.target_cross_teams = Some(target);
        self
    }

    /// Sets the seed.
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Checks the configuration on its own, before any roster is supplied.
    ///
    /// # Errors
    /// [`Error::InvalidConfiguration`] if the team size is zero, or the seed
    /// is `u32::MAX` (the second permutation needs `seed + 1`).
    pub fn validate(&self) -> Result<()> {
        if self.team_size == 0 {
            return Err(Error::InvalidConfiguration(
                "Team size must be at least 1".into(),
            ));
        }
        if self.seed == u32::MAX {
            return Err(Error::InvalidConfiguration(format!(
                "Seed must be below {}",
                u32::MAX
            )));
        }
        Ok(())
    }

    /// Cross-team target for a roster of `roster_len` students.
    ///
    /// An explicit target is returned as-is. Otherwise
    /// `max(1, (roster_len / team_size) / 2)`.
    pub fn effective_target(&self, roster_len: usize) -> usize {
        if let Some(target) = self.target_cross_teams {
            return target;
        }
        let whole_teams = roster_len.checked_div(self.team_size).unwrap_or(0);
        (whole_teams / 2).max(1)
    }
}
