use std::cmp::Ordering;

use super::standings::LeaderboardRow;

/// Total order for the stroke-play board: total to par, then today's to par,
/// then entry id so equal scores never swap between snapshots.
#[must_use]
pub fn leaderboard_order(a: &LeaderboardRow, b: &LeaderboardRow) -> Ordering {
    a.total_to_par
        .cmp(&b.total_to_par)
        .then_with(|| a.today_to_par.cmp(&b.today_to_par))
        .then_with(|| a.entry.id.cmp(&b.entry.id))
}

/// Sorts rows and rewrites their 1-based positional rank. Equal scores still get distinct ranks.
pub fn sort_leaderboard(rows: &mut [LeaderboardRow]) {
    rows.sort_by(leaderboard_order);
    for (i, row) in rows.iter_mut().enumerate() {
        row.rank = i + 1;
    }
}
