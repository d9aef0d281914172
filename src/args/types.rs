use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::score::{DEFAULT_PAGE_SIZE, EngineConfig};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Standings and match status from a tournament snapshot", long_about = None)]
pub struct Args {
    /// JSON file holding the course and tournament snapshot.
    #[arg(
        short = 's',
        long,
        value_name = "SNAPSHOT_JSON",
        value_parser = crate::args::validation::check_readable_json_file
    )]
    pub snapshot: PathBuf,
    /// Leaderboard page, starting at 0.
    #[arg(long, value_name = "PAGE", default_value_t = 0)]
    pub page: usize,
    #[arg(long, value_name = "PAGE_SIZE", default_value_t = DEFAULT_PAGE_SIZE,
        value_parser = crate::args::validation::check_page_size)]
    pub page_size: usize,
    /// Round to score. Defaults to the tournament's current round.
    #[arg(short = 'r', long, value_name = "ROUND", value_parser = crate::args::validation::check_round)]
    pub round: Option<i32>,
    /// Cup points on offer. Defaults to 18 with earlier sessions, 12 without.
    #[arg(long, value_name = "TOTAL_POINTS", value_parser = crate::args::validation::check_total_points)]
    pub total_points: Option<f64>,
    /// Include per-player scoring stats.
    #[arg(long)]
    pub stats: bool,
    /// Restrict stats to one round.
    #[arg(long, value_name = "STATS_ROUND", value_parser = crate::args::validation::check_round)]
    pub stats_round: Option<i32>,
    /// Pretty-print the json output.
    #[arg(long)]
    pub pretty: bool,
    /// Log more (-v debug, -vv trace).
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    #[must_use]
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            page: self.page,
            page_size: self.page_size,
            round: self.round,
            total_points: self.total_points,
            include_stats: self.stats || self.stats_round.is_some(),
            stats_round: self.stats_round,
        }
    }
}

#[must_use]
pub fn args_checks() -> Args {
    Args::parse()
}
