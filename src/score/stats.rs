use serde::{Deserialize, Serialize};

use crate::model::{ParMap, ScoreClass, TournamentEntry};

/// Scoring distribution and rate stats for one player. A rate whose denominator
/// is zero is `None` and serializes as `null`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatSummary {
    pub holes_played: u32,
    pub eagles: u32,
    pub birdies: u32,
    pub pars: u32,
    pub bogeys: u32,
    pub doubles_plus: u32,
    pub fir_pct: Option<f64>,
    pub gir_pct: Option<f64>,
    pub avg_putts: Option<f64>,
    pub avg_drive: Option<f64>,
}

fn ratio(numerator: f64, denominator: u32) -> Option<f64> {
    (denominator > 0).then(|| numerator / f64::from(denominator))
}

#[must_use]
pub fn player_stats(entry: &TournamentEntry, par_map: &ParMap, round_filter: Option<i32>) -> StatSummary {
    let mut summary = StatSummary::default();

    let mut fir_hit = 0u32;
    let mut fir_holes = 0u32;
    let mut gir_hit = 0u32;
    let mut putts_total = 0i32;
    let mut putts_holes = 0u32;
    let mut drive_total = 0.0f64;
    let mut drive_holes = 0u32;

    for result in entry.results_in(round_filter) {
        summary.holes_played += 1;
        match ScoreClass::from_to_par(result.strokes.saturating_sub(par_map.par_of(result.hole_number))) {
            ScoreClass::EagleOrBetter => summary.eagles += 1,
            ScoreClass::Birdie => summary.birdies += 1,
            ScoreClass::Par => summary.pars += 1,
            ScoreClass::Bogey => summary.bogeys += 1,
            ScoreClass::DoubleOrWorse => summary.doubles_plus += 1,
        }

        let Some(stats) = &result.stats else {
            continue;
        };
        // par 3s carry no fairway stat and stay out of the denominator
        if let Some(fir) = stats.fir {
            fir_holes += 1;
            if fir {
                fir_hit += 1;
            }
        }
        if stats.gir == Some(true) {
            gir_hit += 1;
        }
        if let Some(putts) = stats.putts {
            putts_total = putts_total.saturating_add(putts);
            putts_holes += 1;
        }
        if let Some(drive) = stats.drive_distance {
            drive_total += drive;
            drive_holes += 1;
        }
    }

    summary.fir_pct = ratio(f64::from(fir_hit) * 100.0, fir_holes);
    summary.gir_pct = ratio(f64::from(gir_hit) * 100.0, summary.holes_played);
    summary.avg_putts = ratio(f64::from(putts_total), putts_holes);
    summary.avg_drive = ratio(drive_total, drive_holes);
    summary
}
