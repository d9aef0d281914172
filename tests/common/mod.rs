#![allow(dead_code)]

use chrono::{DateTime, FixedOffset};
use golf_standings::model::{
    Course, Group, GroupMember, Hole, HoleResult, HoleStats, ParMap, Team, Tournament,
    TournamentEntry, TournamentFormat, TournamentStatus,
};
use std::collections::BTreeMap;

pub fn par72() -> Course {
    // front: 4 4 3 5 4 4 3 4 5, back the same
    let pars = [4, 4, 3, 5, 4, 4, 3, 4, 5];
    Course {
        id: 1,
        name: "Test National".to_string(),
        holes: (1..=18)
            .map(|number| Hole {
                number,
                par: pars[((number - 1) % 9) as usize],
            })
            .collect(),
    }
}

pub fn all_par4() -> ParMap {
    (1..=18).map(|n| (n, 4)).collect()
}

pub fn entry(id: i64, name: &str, team: Option<Team>) -> TournamentEntry {
    let mut e = TournamentEntry::new(id, name);
    e.team = team;
    e
}

/// Adds results for consecutive holes starting at `first_hole`.
pub fn with_scores(mut e: TournamentEntry, round: i32, first_hole: i32, strokes: &[i32]) -> TournamentEntry {
    for (i, s) in strokes.iter().enumerate() {
        e.hole_results.push(HoleResult {
            round_number: round,
            hole_number: first_hole + i as i32,
            strokes: *s,
            stats: None,
        });
    }
    e
}

pub fn result_with_stats(round: i32, hole: i32, strokes: i32, stats: HoleStats) -> HoleResult {
    HoleResult {
        round_number: round,
        hole_number: hole,
        strokes,
        stats: Some(stats),
    }
}

pub fn tee(s: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(s).expect("valid rfc3339 in test")
}

pub fn group(id: i64, tee_time: &str, start_hole: i32, members: Vec<TournamentEntry>) -> Group {
    Group {
        id,
        tee_time: Some(tee(tee_time)),
        start_hole,
        holes_completed: 0,
        is_finished: false,
        members: members.into_iter().map(|entry| GroupMember { entry }).collect(),
    }
}

pub fn match_tournament(groups: Vec<Group>) -> Tournament {
    Tournament {
        id: 99,
        name: "Cup".to_string(),
        format: TournamentFormat::Match,
        current_round: 1,
        current_time: None,
        status: TournamentStatus::InProgress,
        entries: groups.iter().flat_map(|g| g.entries().cloned()).collect(),
        groups,
        projected_cut: None,
        session_history: BTreeMap::new(),
    }
}
