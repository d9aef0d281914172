use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::course::{Course, ParMap};
use super::tournament::Tournament;
use crate::error::StandingsError;

/// One read-only view of tournament state, as supplied by the tournament service.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Snapshot {
    pub course: Course,
    pub tournament: Tournament,
}

impl Snapshot {
    /// # Errors
    ///
    /// Will return `Err` if the json does not describe a course and tournament
    pub fn from_json_str(json: &str) -> Result<Self, StandingsError> {
        let snapshot: Snapshot = serde_json::from_str(json)?;
        let missing = snapshot.course.missing_holes();
        if !missing.is_empty() {
            tracing::warn!(?missing, course = %snapshot.course.name, "course has holes without par, defaulting to 4");
        }
        Ok(snapshot)
    }

    /// # Errors
    ///
    /// Will return `Err` if the file cannot be read or is not a valid snapshot
    pub fn from_path(path: &Path) -> Result<Self, StandingsError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    #[must_use]
    pub fn par_map(&self) -> ParMap {
        self.course.par_map()
    }
}
