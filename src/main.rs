use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::info;

use pitch_scorecard::error::Result;
use pitch_scorecard::input::{load_leaderboard, load_score_result};
use pitch_scorecard::logging;
use pitch_scorecard::model::leaderboard::LeaderboardFilter;
use pitch_scorecard::model::thresholds::ThresholdProfile;
use pitch_scorecard::pipeline::stage6_report::{
    ReportFormat, build_leaderboard_view, build_scoring_view, write_leaderboard_reports,
    write_scoring_reports,
};
use pitch_scorecard::report::{json, text};

#[derive(Debug, Parser)]
#[command(
    name = "pitch-scorecard",
    version,
    about = "Render pitch scoring results and leaderboards"
)]
struct Cli {
    /// Enable debug logging.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render the report for a single scoring result.
    Scoring(ScoringArgs),
    /// Rank a set of scored startups.
    Leaderboard(LeaderboardArgs),
}

#[derive(Debug, Args)]
struct OutputArgs {
    /// Output directory. Reports go to stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,
}

#[derive(Debug, Args)]
struct ScoringArgs {
    /// JSON file holding one scoring result.
    #[arg(long)]
    input: PathBuf,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Debug, Args)]
struct LeaderboardArgs {
    /// JSON file holding an array of leaderboard entries.
    #[arg(long)]
    input: PathBuf,

    #[arg(long)]
    industry: Option<String>,

    #[arg(long)]
    stage: Option<String>,

    #[arg(long)]
    geography: Option<String>,

    #[arg(long, default_value_t = 50)]
    limit: usize,

    #[command(flatten)]
    output: OutputArgs,
}

impl LeaderboardArgs {
    fn filter(&self) -> LeaderboardFilter {
        LeaderboardFilter {
            industry: self.industry.clone(),
            stage: self.stage.clone(),
            geography: self.geography.clone(),
        }
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    if let Err(err) = run(&cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let thresholds = ThresholdProfile::default_v1();
    match &cli.command {
        Command::Scoring(args) => {
            let result = load_score_result(&args.input)?;
            let view = build_scoring_view(&result, &thresholds);
            info!(
                score = %view.score_display,
                status = view.status.label,
                "scoring result classified"
            );
            match &args.output.out {
                Some(dir) => {
                    write_scoring_reports(&view, dir, args.output.format)?;
                }
                None => emit_stdout(
                    args.output.format,
                    || text::render_scoring_text(&view),
                    || json::render_json(&view),
                )?,
            }
        }
        Command::Leaderboard(args) => {
            let entries = load_leaderboard(&args.input)?;
            let view =
                build_leaderboard_view(&entries, &args.filter(), Some(args.limit), &thresholds);
            info!(
                ranked = view.rows.len(),
                total = view.total_entries,
                "leaderboard ranked"
            );
            match &args.output.out {
                Some(dir) => {
                    write_leaderboard_reports(&view, dir, args.output.format)?;
                }
                None => emit_stdout(
                    args.output.format,
                    || text::render_leaderboard_text(&view),
                    || json::render_json(&view),
                )?,
            }
        }
    }
    Ok(())
}

fn emit_stdout(
    format: ReportFormat,
    render_text: impl FnOnce() -> String,
    render_json: impl FnOnce() -> Result<String>,
) -> Result<()> {
    if matches!(format, ReportFormat::Text | ReportFormat::Both) {
        print!("{}", render_text());
    }
    if matches!(format, ReportFormat::Json | ReportFormat::Both) {
        print!("{}", render_json()?);
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
