use serde::{Deserialize, Serialize};

use crate::model::{
    Group, HOLES_PER_ROUND, ParMap, Team, Tournament, TournamentEntry, groups_by_tee_time,
};

use super::sequencer::{group_status, hole_sequence};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    Singles,
    FourBall,
}

/// One pairing derived from a group. Side 1 is always USA, side 2 always EUR.
/// Built fresh from each snapshot and never kept across snapshots.
#[derive(Debug, Clone)]
pub struct Match<'a> {
    pub group: &'a Group,
    pub kind: MatchKind,
    pub usa: Vec<&'a TournamentEntry>,
    pub eur: Vec<&'a TournamentEntry>,
}

impl Match<'_> {
    #[must_use]
    pub fn is_human_match(&self) -> bool {
        self.usa.iter().chain(self.eur.iter()).any(|e| e.is_human)
    }

    #[must_use]
    pub fn usa_names(&self) -> Vec<String> {
        self.usa.iter().map(|e| e.display_name.clone()).collect()
    }

    #[must_use]
    pub fn eur_names(&self) -> Vec<String> {
        self.eur.iter().map(|e| e.display_name.clone()).collect()
    }

    /// Display label for one side: the full name in singles, last names in a four-ball.
    #[must_use]
    pub fn side_label(&self, team: Team) -> String {
        let side = match team {
            Team::Usa => &self.usa,
            Team::Eur => &self.eur,
        };
        match self.kind {
            MatchKind::Singles => side.iter().map(|e| e.display_name.clone()).collect(),
            MatchKind::FourBall => side.iter().map(|e| e.last_name()).collect::<Vec<_>>().join(" / "),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MatchStatus {
    pub side1_wins: i32,
    pub side2_wins: i32,
    pub thru: i32,
    pub status_text: String,
    pub leader_team: Option<Team>,
    pub is_finished: bool,
    pub is_dormie: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ScorecardRow {
    pub hole: i32,
    pub par: i32,
    pub usa: Option<i32>,
    pub eur: Option<i32>,
    pub winner: Option<Team>,
    /// Running state after this hole, empty until both sides have a score.
    pub status: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MatchSummary {
    pub group_id: i64,
    pub kind: MatchKind,
    pub usa_names: Vec<String>,
    pub eur_names: Vec<String>,
    /// Last names joined with " / ", e.g. "Scheffler / Schauffele".
    pub usa_label: String,
    pub eur_label: String,
    pub status: MatchStatus,
    pub is_human_match: bool,
    pub group_status: String,
}

/// Pairs a group into a match by team tag. Two members make singles, four make a
/// four-ball; anything else, or a team split other than one-a-side / two-a-side,
/// means the group is not paired yet and yields `None`.
#[must_use]
pub fn build_match(group: &Group) -> Option<Match<'_>> {
    let kind = match group.size() {
        2 => MatchKind::Singles,
        4 => MatchKind::FourBall,
        other => {
            tracing::debug!(group_id = group.id, members = other, "group is not a match pairing");
            return None;
        }
    };

    let usa: Vec<&TournamentEntry> = group.entries().filter(|e| e.team == Some(Team::Usa)).collect();
    let eur: Vec<&TournamentEntry> = group.entries().filter(|e| e.team == Some(Team::Eur)).collect();

    let per_side = group.size() / 2;
    if usa.len() != per_side || eur.len() != per_side {
        tracing::debug!(
            group_id = group.id,
            usa = usa.len(),
            eur = eur.len(),
            "group does not split evenly by team"
        );
        return None;
    }

    Some(Match {
        group,
        kind,
        usa,
        eur,
    })
}

/// Every paired group of the tournament, in tee-time order.
#[must_use]
pub fn build_matches(tournament: &Tournament) -> Vec<Match<'_>> {
    groups_by_tee_time(&tournament.groups)
        .into_iter()
        .filter_map(build_match)
        .collect()
}

/// Best ball of a side on one hole: the lowest recorded score among its members.
#[must_use]
pub fn side_best_score(side: &[&TournamentEntry], round_number: i32, hole_number: i32) -> Option<i32> {
    side.iter()
        .filter_map(|e| e.result_for(round_number, hole_number))
        .map(|r| r.strokes)
        .min()
}

fn leader_of(usa_wins: i32, eur_wins: i32) -> Option<Team> {
    match usa_wins.cmp(&eur_wins) {
        std::cmp::Ordering::Greater => Some(Team::Usa),
        std::cmp::Ordering::Less => Some(Team::Eur),
        std::cmp::Ordering::Equal => None,
    }
}

/// Status text and flags after `thru` holes with the given hole-win counts.
#[must_use]
pub fn derive_status(side1_wins: i32, side2_wins: i32, thru: i32) -> MatchStatus {
    let diff = (side1_wins - side2_wins).abs();
    let holes_remaining = HOLES_PER_ROUND - thru;
    let leader_team = leader_of(side1_wins, side2_wins);

    let mut is_finished = false;
    let mut is_dormie = false;

    let status_text = match leader_team {
        Some(leader) if diff > holes_remaining => {
            is_finished = true;
            format!("{leader} wins {diff} & {holes_remaining}")
        }
        Some(_) if diff == holes_remaining => {
            is_dormie = true;
            "Dormie".to_string()
        }
        Some(leader) => format!("{leader} {diff} UP"),
        None if holes_remaining == 0 => {
            is_finished = true;
            "Halved".to_string()
        }
        None => "All Square".to_string(),
    };

    MatchStatus {
        side1_wins,
        side2_wins,
        thru,
        status_text,
        leader_team,
        is_finished,
        is_dormie,
    }
}

/// Live status of a match from the hole results of `round_number`.
/// A hole counts only once both sides have a score on it.
#[must_use]
pub fn match_status(m: &Match<'_>, round_number: i32) -> MatchStatus {
    let mut usa_wins = 0;
    let mut eur_wins = 0;
    let mut thru = 0;

    for hole in hole_sequence(m.group.start_hole) {
        let (Some(usa), Some(eur)) = (
            side_best_score(&m.usa, round_number, hole),
            side_best_score(&m.eur, round_number, hole),
        ) else {
            continue;
        };
        thru += 1;
        if usa < eur {
            usa_wins += 1;
        } else if eur < usa {
            eur_wins += 1;
        }
    }

    derive_status(usa_wins, eur_wins, thru)
}

/// Hole-by-hole card with the running match state. The state accumulates in the
/// group's play order; rows come back sorted by hole number for the front/back nine.
#[must_use]
pub fn match_scorecard(m: &Match<'_>, par_map: &ParMap, round_number: i32) -> Vec<ScorecardRow> {
    let mut usa_wins: i32 = 0;
    let mut eur_wins: i32 = 0;

    let mut rows: Vec<ScorecardRow> = hole_sequence(m.group.start_hole)
        .into_iter()
        .map(|hole| {
            let usa = side_best_score(&m.usa, round_number, hole);
            let eur = side_best_score(&m.eur, round_number, hole);
            let mut winner = None;
            let mut status = String::new();

            if let (Some(u), Some(e)) = (usa, eur) {
                if u < e {
                    usa_wins += 1;
                    winner = Some(Team::Usa);
                } else if e < u {
                    eur_wins += 1;
                    winner = Some(Team::Eur);
                }
                status = match leader_of(usa_wins, eur_wins) {
                    Some(leader) => format!("{leader} {} UP", (usa_wins - eur_wins).abs()),
                    None => "AS".to_string(),
                };
            }

            ScorecardRow {
                hole,
                par: par_map.par_of(hole),
                usa,
                eur,
                winner,
                status,
            }
        })
        .collect();

    rows.sort_by_key(|row| row.hole);
    rows
}

#[must_use]
pub fn summarize_match(m: &Match<'_>, round_number: i32) -> MatchSummary {
    MatchSummary {
        group_id: m.group.id,
        kind: m.kind,
        usa_names: m.usa_names(),
        eur_names: m.eur_names(),
        usa_label: m.side_label(Team::Usa),
        eur_label: m.side_label(Team::Eur),
        status: match_status(m, round_number),
        is_human_match: m.is_human_match(),
        group_status: group_status(m.group),
    }
}

#[must_use]
pub fn summarize_matches(tournament: &Tournament, round_number: i32) -> Vec<MatchSummary> {
    build_matches(tournament)
        .iter()
        .map(|m| summarize_match(m, round_number))
        .collect()
}

#[must_use]
pub fn matches_not_started(summaries: &[MatchSummary]) -> bool {
    summaries.iter().all(|s| s.status.thru == 0)
}
