mod display;
mod narrative;
mod report;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use loyalscope_ai::{LoyaltyPipeline, ModelManifest, OnnxClassifier};
use loyalscope_core::{CustomerProfile, Submission, SurveyResponses, encode};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::report::Report;

#[derive(Parser)]
#[command(name = "loyalscope")]
#[command(version, about = "Bank customer loyalty diagnostic")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify submissions and print the risk tier with its action plan
    Diagnose {
        /// Submission JSON file (repeatable)
        #[arg(short, long = "input", required = true)]
        inputs: Vec<PathBuf>,

        /// Directory holding model.onnx and manifest.json
        #[arg(long, env = "LOYALSCOPE_MODEL_DIR", default_value = "models/loyalty")]
        model_dir: PathBuf,

        /// Treat unanswered Likert items as neutral (4)
        #[arg(long)]
        neutral_default: bool,

        /// Emit JSON reports instead of text cards
        #[arg(long)]
        json: bool,
    },

    /// Print the encoded model input row for a submission
    Encode {
        /// Submission JSON file
        #[arg(short, long)]
        input: PathBuf,

        /// Treat unanswered Likert items as neutral (4)
        #[arg(long)]
        neutral_default: bool,

        /// Vertical card instead of a table
        #[arg(long)]
        card: bool,
    },

    /// Print the model input column contract
    Schema {
        /// Emit a manifest skeleton for the current column order
        #[arg(long)]
        json: bool,

        /// Version recorded in the manifest skeleton
        #[arg(long, default_value = "unversioned")]
        model_version: String,
    },

    /// Print the demographic option tables and survey items
    Options,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
    info!("loyalscope v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    match cli.command {
        Commands::Diagnose {
            inputs,
            model_dir,
            neutral_default,
            json,
        } => cmd_diagnose(&inputs, &model_dir, neutral_default, json),
        Commands::Encode {
            input,
            neutral_default,
            card,
        } => cmd_encode(&input, neutral_default, card),
        Commands::Schema {
            json,
            model_version,
        } => cmd_schema(json, &model_version),
        Commands::Options => {
            display::print_options();
            Ok(())
        }
    }
}

// ── Commands ──

fn cmd_diagnose(
    inputs: &[PathBuf],
    model_dir: &Path,
    neutral_default: bool,
    json: bool,
) -> anyhow::Result<()> {
    let classifier = OnnxClassifier::load(model_dir)
        .with_context(|| format!("loading classifier from {}", model_dir.display()))?;
    let pipeline = LoyaltyPipeline::new(Arc::new(classifier));
    info!(model = pipeline.model_version(), inputs = inputs.len(), "classifier ready");

    let mut reports = Vec::new();
    let mut failed = 0usize;

    for path in inputs {
        let result = read_submission(path, neutral_default).and_then(|(sub, profile, responses)| {
            let diagnosis = pipeline
                .diagnose(&profile, &responses)
                .with_context(|| format!("diagnosing {}", path.display()))?;
            Ok((sub, diagnosis))
        });

        let (sub, diagnosis) = match result {
            Ok(ok) => ok,
            Err(e) => {
                error!(input = %path.display(), "{e:#}");
                failed += 1;
                continue;
            }
        };

        if json {
            reports.push(Report::new(
                path.display().to_string(),
                sub.id,
                diagnosis,
                chrono::Utc::now(),
            ));
        } else {
            let label = sub.id.unwrap_or_else(|| path.display().to_string());
            display::print_diagnosis(&label, &diagnosis);
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else if failed < inputs.len() {
        display::print_methodology();
    }

    anyhow::ensure!(
        failed == 0,
        "{failed} of {} submissions could not be diagnosed",
        inputs.len()
    );
    Ok(())
}

fn cmd_encode(input: &Path, neutral_default: bool, card: bool) -> anyhow::Result<()> {
    let (_, profile, responses) = read_submission(input, neutral_default)?;
    let features = encode(&profile, &responses).context("encoding submission")?;
    let batch = features.to_record_batch()?;

    if card {
        display::print_feature_card(&batch);
    } else {
        arrow::util::pretty::print_batches(&[batch])?;
    }
    Ok(())
}

fn cmd_schema(json: bool, model_version: &str) -> anyhow::Result<()> {
    if json {
        let manifest = ModelManifest::for_current_schema(model_version);
        println!("{}", serde_json::to_string_pretty(&manifest)?);
    } else {
        display::print_schema();
    }
    Ok(())
}

// ── Helpers ──

fn read_submission(
    path: &Path,
    neutral_default: bool,
) -> anyhow::Result<(Submission, CustomerProfile, SurveyResponses)> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let sub =
        Submission::from_json(&text).with_context(|| format!("parsing {}", path.display()))?;
    let profile = sub
        .profile()
        .with_context(|| format!("resolving profile in {}", path.display()))?;
    let mut responses = sub
        .responses()
        .with_context(|| format!("reading responses in {}", path.display()))?;

    if neutral_default {
        let unanswered = responses.missing();
        if !unanswered.is_empty() {
            warn!(
                input = %path.display(),
                items = %unanswered.join(", "),
                "unanswered items set to neutral"
            );
        }
        responses.fill_neutral();
    }
    Ok((sub, profile, responses))
}
