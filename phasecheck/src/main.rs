use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use clap::error::ErrorKind;
use serde_json::json;

use phasecheck::error::EvaluateError;
use phasecheck::evaluate::{EvaluationResult, evaluate_feature};
use phasecheck::exit_codes;
use phasecheck::io::config::resolve_config;
use phasecheck::io::paths::{FeaturePaths, validate_feature_id};
use phasecheck::logging;

const USAGE: &str = "Usage: phasecheck [OPTIONS] <FEATURE_ID>";

#[derive(Parser, Debug)]
#[command(
    name = "phasecheck",
    version,
    about = "Report the active build phase and what the orchestrator should do next"
)]
struct Cli {
    /// Feature id: a directory under the features root.
    feature_id: Option<String>,

    /// Directory holding feature directories (overrides config).
    #[arg(long, value_name = "DIR")]
    features_root: Option<PathBuf>,

    /// TOML config file (default: ./phasecheck.toml when present).
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the result as a single JSON object.
    #[arg(long)]
    json: bool,
}

fn main() {
    logging::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            print!("{err}");
            process::exit(exit_codes::HALT);
        }
    };

    let json = cli.json;
    let code = match run(cli).and_then(|result| emit(&result, json).map(|()| result.exit_code)) {
        Ok(code) => code,
        Err(err) => {
            emit_error(&err, json);
            exit_codes::HALT
        }
    };
    process::exit(code);
}

fn run(cli: Cli) -> Result<EvaluationResult> {
    let feature_id = cli
        .feature_id
        .ok_or_else(|| EvaluateError::usage("feature id required"))?;
    validate_feature_id(&feature_id)?;

    let mut config = resolve_config(cli.config.as_deref()).context("load config")?;
    if let Some(root) = cli.features_root {
        config.features_root = root;
        config.validate().context("validate --features-root")?;
    }

    let paths = FeaturePaths::new(&config, &feature_id);
    Ok(evaluate_feature(&paths)?)
}

fn emit(result: &EvaluationResult, json: bool) -> Result<()> {
    if json {
        let payload = serde_json::to_string_pretty(result).context("serialize result")?;
        println!("{payload}");
    } else {
        println!("{}", result.message);
    }
    Ok(())
}

/// Diagnostics go to stdout so the orchestrator sees them inline.
fn emit_error(err: &anyhow::Error, json: bool) {
    if json {
        let payload = json!({ "error": format!("{err:#}"), "exit_code": exit_codes::HALT });
        println!("{payload}");
        return;
    }
    println!("error: {err:#}");
    if let Some(EvaluateError::Usage(_)) = err.downcast_ref::<EvaluateError>() {
        println!("{USAGE}");
    }
}
