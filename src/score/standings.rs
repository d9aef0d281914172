use serde::{Deserialize, Serialize};

use crate::model::{Group, HOLES_PER_ROUND, ParMap, TournamentEntry, format_tee_time};

use super::sort_utils::sort_leaderboard;

pub const DEFAULT_PAGE_SIZE: usize = 50;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LeaderboardRow {
    #[serde(flatten)]
    pub entry: TournamentEntry,
    pub today_to_par: i32,
    pub total_to_par: i32,
    pub rank: usize,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Page<T> {
    pub rows: Vec<T>,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_rows: usize,
}

/// Strokes minus par over the entry's recorded holes, optionally for one round only.
/// Holes without a result contribute nothing.
#[must_use]
pub fn to_par(entry: &TournamentEntry, par_map: &ParMap, round_filter: Option<i32>) -> i32 {
    entry
        .results_in(round_filter)
        .fold(0i32, |acc, r| {
            acc.saturating_add(r.strokes.saturating_sub(par_map.par_of(r.hole_number)))
        })
}

#[must_use]
pub fn build_leaderboard(
    entries: &[TournamentEntry],
    par_map: &ParMap,
    current_round: i32,
) -> Vec<LeaderboardRow> {
    let mut rows: Vec<LeaderboardRow> = entries
        .iter()
        .map(|entry| LeaderboardRow {
            entry: entry.clone(),
            today_to_par: to_par(entry, par_map, Some(current_round)),
            total_to_par: to_par(entry, par_map, None),
            rank: 0,
        })
        .collect();

    sort_leaderboard(&mut rows);
    rows
}

/// 0-based page of `rows`. A zero page size or a page past the end yields no rows.
#[must_use]
pub fn paginate<T: Clone>(rows: &[T], page_size: usize, page: usize) -> Page<T> {
    let total_rows = rows.len();
    if page_size == 0 {
        return Page {
            rows: Vec::new(),
            page,
            page_size,
            total_pages: 0,
            total_rows,
        };
    }

    let total_pages = total_rows.div_ceil(page_size);
    let start = page.saturating_mul(page_size).min(total_rows);
    let end = start.saturating_add(page_size).min(total_rows);

    Page {
        rows: rows[start..end].to_vec(),
        page,
        page_size,
        total_pages,
        total_rows,
    }
}

/// "F" once the entry has finished 18, the group's tee time before it starts,
/// otherwise the count of holes played.
#[must_use]
pub fn thru_display(entry: &TournamentEntry, group: Option<&Group>) -> String {
    let thru = entry.thru_hole;
    if thru >= HOLES_PER_ROUND {
        return "F".to_string();
    }
    if thru == 0 {
        if let Some(tee_time) = group.and_then(|g| g.tee_time.as_ref()) {
            return format_tee_time(tee_time);
        }
    }
    thru.to_string()
}
