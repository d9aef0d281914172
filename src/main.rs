use golf_standings::args;
use golf_standings::error::StandingsError;
use golf_standings::model::Snapshot;
use golf_standings::score::build_report;
use tracing::Level;

fn main() {
    let args = args::args_checks();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(args: &args::Args) -> Result<(), StandingsError> {
    let snapshot = Snapshot::from_path(&args.snapshot)?;
    let report = build_report(&snapshot, &args.engine_config());

    let out = if args.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{out}");
    Ok(())
}
