use crate::commands;
use clap::{Args, Parser, Subcommand};
use rubrica::config::AppConfig;
use rubrica::error::AppError;
use rubrica::rubric::{CriteriaMap, DraftSnapshot, EvaluationRecord, RubricCatalog, ScoringEngine};
use rubrica::telemetry;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "rubrica",
    about = "Score project evaluations against the weighted academic rubric",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score a criteria map and report section scores, final grade and verdict
    Score(ScoreArgs),
    /// Lock a complete evaluation and print the record to persist
    Finalize(InputArgs),
    /// Rebuild an editable criteria map from saved drafts or a persisted record
    Restore(RestoreArgs),
    /// Print the rubric sections, groups and criteria with their weights
    Catalog,
    /// Print the qualitative scale with numeric values and colors
    Scale,
}

#[derive(Args, Debug)]
pub(crate) struct InputArgs {
    /// JSON criteria map as submitted by the scoring form ("-" reads stdin)
    #[arg(long, short)]
    pub(crate) input: PathBuf,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    #[command(flatten)]
    pub(crate) input: InputArgs,
    /// Emit the full evaluation as JSON instead of a text summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct RestoreArgs {
    /// Persisted evaluation record (section scores, grade and verdict)
    #[arg(long)]
    pub(crate) record: Option<PathBuf>,
    /// Saved per-criterion draft; may be repeated
    #[arg(long = "draft")]
    pub(crate) drafts: Vec<PathBuf>,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let engine = ScoringEngine::new(RubricCatalog::standard(), config.scoring);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Score(args) => {
            let criteria: CriteriaMap = read_json(&args.input.input)?;
            commands::score(&engine, &criteria, args.json, &mut out)?;
            info!(graded = criteria.graded_count(), "evaluation scored");
        }
        Command::Finalize(args) => {
            let criteria: CriteriaMap = read_json(&args.input)?;
            commands::finalize(&engine, &criteria, &mut out)?;
            info!("evaluation finalized");
        }
        Command::Restore(args) => {
            let record = args
                .record
                .as_deref()
                .map(read_json::<EvaluationRecord>)
                .transpose()?;
            let drafts = args
                .drafts
                .iter()
                .map(|path| read_json::<DraftSnapshot>(path))
                .collect::<Result<Vec<_>, _>>()?;
            commands::restore(&engine, &drafts, record.as_ref(), &mut out)?;
        }
        Command::Catalog => commands::catalog(engine.catalog(), &mut out)?,
        Command::Scale => commands::scale(&mut out)?,
    }

    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let raw = if path == Path::new("-") {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(path)?
    };
    Ok(serde_json::from_str(&raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn restore_accepts_repeated_drafts() {
        let cli = Cli::try_parse_from([
            "rubrica",
            "restore",
            "--record",
            "record.json",
            "--draft",
            "a.json",
            "--draft",
            "b.json",
        ])
        .expect("arguments parse");

        match cli.command {
            Command::Restore(args) => {
                assert_eq!(args.record, Some(PathBuf::from("record.json")));
                assert_eq!(args.drafts.len(), 2);
            }
            other => panic!("expected restore, got {other:?}"),
        }
    }

    #[test]
    fn score_requires_input() {
        assert!(Cli::try_parse_from(["rubrica", "score"]).is_err());
        let cli = Cli::try_parse_from(["rubrica", "score", "-i", "-", "--json"])
            .expect("arguments parse");
        assert!(matches!(cli.command, Command::Score(ScoreArgs { json: true, .. })));
    }
}
