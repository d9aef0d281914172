use chrono::{DateTime, FixedOffset};

use super::tournament::ProjectedCut;

/// `0 -> "E"`, `3 -> "+3"`, `-2 -> "-2"`.
#[must_use]
pub fn format_to_par(to_par: i32) -> String {
    match to_par {
        0 => "E".to_string(),
        n if n > 0 => format!("+{n}"),
        n => n.to_string(),
    }
}

/// Tee time as `HH:MM` in the offset it was published with.
#[must_use]
pub fn format_tee_time(tee_time: &DateTime<FixedOffset>) -> String {
    tee_time.format("%H:%M").to_string()
}

#[must_use]
pub fn format_cut_line(cut: &ProjectedCut) -> String {
    format!(
        "Projected cut: {} (Top {} + ties), {} inside, {} at the line",
        format_to_par(cut.cut_to_par),
        cut.cut_position,
        cut.players_inside,
        cut.players_at_line
    )
}
