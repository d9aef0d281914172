use serde::{Deserialize, Serialize};

use crate::model::{
    Snapshot, TournamentFormat, format_cut_line, format_tee_time, format_to_par, groups_by_tee_time,
};

use super::cup::{CupOutcome, CupScore, clinch_threshold, cup_outcome, default_total_points, project_cup_score};
use super::index::EntryGroupIndex;
use super::match_play::{MatchSummary, matches_not_started, summarize_matches};
use super::sequencer::group_status;
use super::standings::{DEFAULT_PAGE_SIZE, LeaderboardRow, Page, build_leaderboard, paginate, thru_display};
use super::stats::{StatSummary, player_stats};

#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// 0-based leaderboard page.
    pub page: usize,
    pub page_size: usize,
    /// Round to score; the tournament's current round when `None`.
    pub round: Option<i32>,
    /// Cup points on offer; derived from the session history when `None`.
    pub total_points: Option<f64>,
    pub include_stats: bool,
    /// Restrict player stats to one round; all rounds when `None`.
    pub stats_round: Option<i32>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
            round: None,
            total_points: None,
            include_stats: false,
            stats_round: None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ReportRow {
    #[serde(flatten)]
    pub row: LeaderboardRow,
    pub thru: String,
    pub today_display: String,
    pub total_display: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GroupLine {
    pub group_id: i64,
    pub tee_time: Option<String>,
    pub status: String,
    pub members: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CupView {
    pub score: CupScore,
    pub total_points: f64,
    pub clinch_threshold: f64,
    pub outcome: Option<CupOutcome>,
    pub matches_not_started: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PlayerStats {
    pub entry_id: i64,
    pub display_name: String,
    #[serde(flatten)]
    pub stats: StatSummary,
}

/// Everything the presentation layer needs for one snapshot.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StandingsReport {
    pub tournament_id: i64,
    pub tournament_name: String,
    pub format: TournamentFormat,
    pub round: i32,
    pub leaderboard: Page<ReportRow>,
    pub cut_line: Option<String>,
    pub groups: Vec<GroupLine>,
    pub matches: Vec<MatchSummary>,
    pub cup: Option<CupView>,
    pub stats: Vec<PlayerStats>,
}

/// Builds the full standings view from one snapshot. Pure: identical input gives
/// identical output and nothing is carried over to the next call.
#[must_use]
pub fn build_report(snapshot: &Snapshot, config: &EngineConfig) -> StandingsReport {
    let tournament = &snapshot.tournament;
    let par_map = snapshot.par_map();
    let round = config.round.unwrap_or(tournament.current_round);

    let rows = build_leaderboard(&tournament.entries, &par_map, round);
    let page = paginate(&rows, config.page_size, config.page);
    let index = EntryGroupIndex::from_tournament(tournament);
    let leaderboard = Page {
        rows: page
            .rows
            .into_iter()
            .map(|row| ReportRow {
                thru: thru_display(&row.entry, index.group_of(row.entry.id)),
                today_display: format_to_par(row.today_to_par),
                total_display: format_to_par(row.total_to_par),
                row,
            })
            .collect(),
        page: page.page,
        page_size: page.page_size,
        total_pages: page.total_pages,
        total_rows: page.total_rows,
    };

    let groups = groups_by_tee_time(&tournament.groups)
        .into_iter()
        .map(|g| GroupLine {
            group_id: g.id,
            tee_time: g.tee_time.as_ref().map(format_tee_time),
            status: group_status(g),
            members: g.entries().map(|e| e.display_name.clone()).collect(),
        })
        .collect();

    let (matches, cup) = if tournament.format == TournamentFormat::Match {
        let matches = summarize_matches(tournament, round);
        let live: Vec<_> = matches.iter().map(|m| m.status.clone()).collect();
        let score = project_cup_score(&tournament.session_history, &live);
        let total_points = config
            .total_points
            .unwrap_or_else(|| default_total_points(tournament));
        let cup = CupView {
            score,
            total_points,
            clinch_threshold: clinch_threshold(total_points),
            outcome: cup_outcome(&score, total_points, tournament.is_finished()),
            matches_not_started: matches_not_started(&matches),
        };
        (matches, Some(cup))
    } else {
        (Vec::new(), None)
    };

    let stats = if config.include_stats {
        tournament
            .entries
            .iter()
            .map(|e| PlayerStats {
                entry_id: e.id,
                display_name: e.display_name.clone(),
                stats: player_stats(e, &par_map, config.stats_round),
            })
            .collect()
    } else {
        Vec::new()
    };

    tracing::info!(
        tournament_id = tournament.id,
        round,
        entries = tournament.entries.len(),
        matches = matches.len(),
        "built standings report"
    );

    StandingsReport {
        tournament_id: tournament.id,
        tournament_name: tournament.name.clone(),
        format: tournament.format,
        round,
        leaderboard,
        cut_line: tournament.projected_cut.as_ref().map(format_cut_line),
        groups,
        matches,
        cup,
        stats,
    }
}
