//! Team points for the Ryder Cup format.
//!
//! Everything here is a live projection rebuilt from the current snapshot: a match
//! in progress counts as a full point for whoever leads it and half a point each
//! when it is all square. Nothing is accumulated between calls.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::model::{SessionResult, Team, Tournament};

use super::match_play::{MatchStatus, build_matches, match_status};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct CupScore {
    pub usa: f64,
    pub eur: f64,
}

impl CupScore {
    fn award(&mut self, winner: Option<Team>) {
        match winner {
            Some(Team::Usa) => self.usa += 1.0,
            Some(Team::Eur) => self.eur += 1.0,
            None => {
                self.usa += 0.5;
                self.eur += 0.5;
            }
        }
    }

    #[must_use]
    pub fn of(&self, team: Team) -> f64 {
        match team {
            Team::Usa => self.usa,
            Team::Eur => self.eur,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CupOutcome {
    Winner(Team),
    /// Drawn cup, the holders retain it.
    Retained,
}

/// Points from finalized sessions only, round keys in sorted order.
#[must_use]
pub fn history_points(session_history: &BTreeMap<String, Vec<SessionResult>>) -> CupScore {
    let mut score = CupScore::default();
    for result in session_history.values().flatten() {
        score.award(result.winner);
    }
    score
}

/// Finalized history plus one projected point per live match.
#[must_use]
pub fn project_cup_score(
    session_history: &BTreeMap<String, Vec<SessionResult>>,
    live: &[MatchStatus],
) -> CupScore {
    let mut score = history_points(session_history);
    for status in live {
        score.award(status.leader_team);
    }
    score
}

/// Live projection for every paired group of the tournament in `round_number`.
#[must_use]
pub fn live_cup_score(tournament: &Tournament, round_number: i32) -> CupScore {
    let live: Vec<MatchStatus> = build_matches(tournament)
        .iter()
        .map(|m| match_status(m, round_number))
        .collect();
    project_cup_score(&tournament.session_history, &live)
}

/// Points on offer for the event: 18 once earlier sessions exist, 12 for a singles-only day.
#[must_use]
pub fn default_total_points(tournament: &Tournament) -> f64 {
    if tournament.session_history.is_empty() {
        12.0
    } else {
        18.0
    }
}

/// Points needed for outright possession of the cup.
#[must_use]
pub fn clinch_threshold(total_points: f64) -> f64 {
    total_points / 2.0 + 0.5
}

/// Declares a result once the event is finished, or early when a projected score
/// reaches the clinch threshold. The early path can revert on a later snapshot
/// if the projection drops back.
#[must_use]
pub fn cup_outcome(score: &CupScore, total_points: f64, finished: bool) -> Option<CupOutcome> {
    if finished {
        return Some(if score.usa > score.eur {
            CupOutcome::Winner(Team::Usa)
        } else if score.eur > score.usa {
            CupOutcome::Winner(Team::Eur)
        } else {
            CupOutcome::Retained
        });
    }

    let threshold = clinch_threshold(total_points);
    if score.usa >= threshold {
        Some(CupOutcome::Winner(Team::Usa))
    } else if score.eur >= threshold {
        Some(CupOutcome::Winner(Team::Eur))
    } else {
        None
    }
}
