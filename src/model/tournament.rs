use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::entry::{Team, TournamentEntry};
use super::group::Group;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum TournamentFormat {
    #[default]
    Stroke,
    Match,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum TournamentStatus {
    #[default]
    Setup,
    InProgress,
    Finished,
    Playoff,
}

/// Cut-line figures computed by the tournament service. Passed through for display only.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectedCut {
    pub cut_to_par: i32,
    pub cut_position: i32,
    pub players_inside: i32,
    pub players_at_line: i32,
}

/// A finalized match from an earlier session. `winner` is `None` for a halved match.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SessionResult {
    #[serde(default)]
    pub winner: Option<Team>,
    #[serde(default)]
    pub usa_names: Vec<String>,
    #[serde(default)]
    pub eur_names: Vec<String>,
    #[serde(default)]
    pub score: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Tournament {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub format: TournamentFormat,
    #[serde(default = "first_round")]
    pub current_round: i32,
    #[serde(default)]
    pub current_time: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub status: TournamentStatus,
    #[serde(default)]
    pub entries: Vec<TournamentEntry>,
    #[serde(default)]
    pub groups: Vec<Group>,
    #[serde(default)]
    pub projected_cut: Option<ProjectedCut>,
    #[serde(default)]
    pub session_history: BTreeMap<String, Vec<SessionResult>>,
}

fn first_round() -> i32 {
    1
}

impl Tournament {
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.status == TournamentStatus::Finished
    }

    #[must_use]
    pub fn entry(&self, entry_id: i64) -> Option<&TournamentEntry> {
        self.entries.iter().find(|e| e.id == entry_id)
    }
}
