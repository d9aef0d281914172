use ahash::RandomState;
use std::collections::HashMap;

use crate::model::{Group, Tournament};

/// Entry id to the group that entry is playing in, for one snapshot.
/// An entry listed in more than one group maps to the last of them.
#[derive(Debug, Default)]
pub struct EntryGroupIndex<'a> {
    by_entry: HashMap<i64, &'a Group, RandomState>,
}

impl<'a> EntryGroupIndex<'a> {
    #[must_use]
    pub fn from_groups(groups: &'a [Group]) -> Self {
        let mut by_entry: HashMap<i64, &'a Group, RandomState> = HashMap::default();
        for group in groups {
            for entry in group.entries() {
                by_entry.insert(entry.id, group);
            }
        }
        Self { by_entry }
    }

    #[must_use]
    pub fn from_tournament(tournament: &'a Tournament) -> Self {
        Self::from_groups(&tournament.groups)
    }

    #[must_use]
    pub fn group_of(&self, entry_id: i64) -> Option<&'a Group> {
        self.by_entry.get(&entry_id).copied()
    }
}
