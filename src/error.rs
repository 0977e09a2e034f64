//! Error types for team assignment.

use thiserror::Error;

/// Result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Team assignment errors.
///
/// Both variants are terminal: the engine returns before producing any
/// assignment, and retrying with the same inputs yields the same error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Team size is zero, the roster is empty, or the roster fails
    /// integrity checks.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Not a single team could be formed, so leftovers have nowhere to go.
    #[error(
        "No teams formed: {students} student(s) could not fill a team of {team_size}; \
         lower the team size or enlarge the roster"
    )]
    NoTeamsFormed {
        /// Roster size.
        students: usize,
        /// Configured team size.
        team_size: usize,
    },
}
