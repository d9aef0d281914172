use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::entry::TournamentEntry;

fn default_start_hole() -> i32 {
    1
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GroupMember {
    pub entry: TournamentEntry,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Group {
    pub id: i64,
    pub tee_time: Option<DateTime<FixedOffset>>,
    #[serde(default = "default_start_hole")]
    pub start_hole: i32,
    #[serde(default)]
    pub holes_completed: i32,
    #[serde(default)]
    pub is_finished: bool,
    #[serde(default)]
    pub members: Vec<GroupMember>,
}

impl Group {
    pub fn entries(&self) -> impl Iterator<Item = &TournamentEntry> {
        self.members.iter().map(|m| &m.entry)
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.members.len()
    }
}

/// Groups ordered by tee time, groups without one last, ties by id.
#[must_use]
pub fn groups_by_tee_time(groups: &[Group]) -> Vec<&Group> {
    let mut sorted: Vec<&Group> = groups.iter().collect();
    sorted.sort_by(|a, b| match (a.tee_time, b.tee_time) {
        (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.id.cmp(&b.id)),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => a.id.cmp(&b.id),
    });
    sorted
}
