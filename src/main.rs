//! mirror-check
//!
//! Validates the solution pieces of every challenge in a challenge file.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use mirror_match::GameArea;
use mirror_match::challenge::{ChallengeReport, check_all, load_challenges_file};

/// Check challenge solutions against the placement rules
#[derive(Parser, Debug)]
#[command(name = "mirror-check")]
#[command(about = "Validate challenge solutions against the mirror placement rules")]
struct Args {
    /// Challenge definition file (JSON array)
    file: PathBuf,

    /// Game area JSON file ({width, height, mirrorLineX, pieceUnit}); defaults to 700x600
    #[arg(long)]
    area: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn load_area(path: Option<&PathBuf>) -> Result<GameArea, Box<dyn std::error::Error>> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)?;
            Ok(GameArea::from_json(&json)?)
        }
        None => Ok(GameArea::default()),
    }
}

fn print_text(reports: &[ChallengeReport]) {
    for report in reports {
        let status = if report.is_ok() { "ok" } else { "FAIL" };
        println!("challenge {:>3}: {}", report.index, status);
        for rule in report.validation.failing_rules() {
            println!("    - {}", rule.message());
        }
        if !report.piece_count_matches {
            println!("    - piece count differs from piecesNeeded ({})", report.pieces_needed);
        }
    }
}

fn run(args: &Args) -> Result<bool, Box<dyn std::error::Error>> {
    let area = load_area(args.area.as_ref())?;
    log::info!(
        "Area {}x{}, mirror at x={}, unit {}",
        area.width(),
        area.height(),
        area.mirror_line_x(),
        area.piece_unit()
    );

    let challenges = load_challenges_file(&args.file)?;
    let reports = check_all(&challenges, &area);

    match args.format {
        Format::Text => print_text(&reports),
        Format::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
    }

    let failed = reports.iter().filter(|r| !r.is_ok()).count();
    log::info!("{} of {} challenges passed", reports.len() - failed, reports.len());
    Ok(failed == 0)
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::from(2)
        }
    }
}
