// ─────────────────────────────────────────────────────────────────────
// ForceLab — Command Line
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! ForceLab command-line front end.
//!
//! # Usage
//!
//! ```bash
//! # Check a request without computing it
//! forcelab validate request.json
//!
//! # Compute and print a rounded summary
//! forcelab compute request.json --format text
//!
//! # Same request under lunar gravity, read from stdin
//! echo '{"kind":"freeFall","mass":5,"height":20}' | forcelab compute - --gravity 1.62
//!
//! # Print the prompt that would be sent to the explanation service
//! forcelab prompt request.json
//!
//! # Rope tension for a 12 kg hanging mass
//! forcelab suspended --mass 12 --format text
//! ```

use std::io::Read;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use forcelab_core::explanation::{build_prompt, explain_or_fallback, Unconfigured};
use forcelab_core::report::report;
use forcelab_core::{compute, validate};
use forcelab_types::config::EngineConfig;
use forcelab_types::error::ValidationError;
use forcelab_types::scenario::{ScenarioRequest, SuspendedObjectRequest};
use forcelab_types::state::ScenarioResult;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

/// ForceLab classroom mechanics calculator
#[derive(Parser, Debug)]
#[command(name = "forcelab")]
#[command(author, version, about = "Classroom mechanics calculator", long_about = None)]
struct Cli {
    /// Logging verbosity level
    #[arg(short, long, global = true, default_value = "warn")]
    log_level: String,

    /// Engine configuration JSON (gravity, tolerances, limits)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Override gravitational acceleration (m/s²)
    #[arg(short, long, global = true)]
    gravity: Option<f64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a request and list field errors
    Validate {
        /// Request JSON file, or '-' for stdin
        input: String,
    },

    /// Validate, then compute a request
    Compute {
        /// Request JSON file, or '-' for stdin
        input: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: OutputFormat,

        /// Append an explanation (falls back when no service is configured)
        #[arg(long)]
        explain: bool,
    },

    /// Compute a request and print the explanation prompt for it
    Prompt {
        /// Request JSON file, or '-' for stdin
        input: String,
    },

    /// Weight and rope tension of a hanging mass
    Suspended {
        /// Mass (kg)
        #[arg(short, long)]
        mass: f64,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("ForceLab v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config(cli.config.as_deref(), cli.gravity)?;

    match cli.command {
        Commands::Validate { input } => {
            let request = read_request(&input)?;
            let errors = validate(&request, &config);
            println!("{}", serde_json::to_string_pretty(&errors)?);
            if !errors.is_empty() {
                anyhow::bail!("{} validation error(s)", errors.len());
            }
        }
        Commands::Compute {
            input,
            format,
            explain,
        } => {
            let request = read_request(&input)?;
            let result = validated_compute(&request, &config)?;
            print_result(&result, format)?;
            if explain {
                println!();
                println!("{}", explain_or_fallback(&Unconfigured, &result));
            }
        }
        Commands::Prompt { input } => {
            let request = read_request(&input)?;
            let result = validated_compute(&request, &config)?;
            println!("{}", build_prompt(&result)?);
        }
        Commands::Suspended { mass, format } => {
            let request = ScenarioRequest::SuspendedObject(SuspendedObjectRequest {
                mass: Some(mass),
            });
            let result = validated_compute(&request, &config)?;
            print_result(&result, format)?;
        }
    }

    Ok(())
}

fn load_config(path: Option<&str>, gravity: Option<f64>) -> anyhow::Result<EngineConfig> {
    let mut config = match path {
        Some(path) => EngineConfig::from_file(path)
            .with_context(|| format!("failed to load engine config '{path}'"))?,
        None => EngineConfig::default(),
    };
    if let Some(g) = gravity {
        config.gravity = g;
        config.validate()?;
    }
    debug!(gravity = config.gravity, "engine configuration ready");
    Ok(config)
}

fn read_request(input: &str) -> anyhow::Result<ScenarioRequest> {
    let json = if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read request from stdin")?;
        buf
    } else {
        std::fs::read_to_string(input).with_context(|| format!("failed to read '{input}'"))?
    };
    ScenarioRequest::from_json(&json).context("request is not a valid scenario")
}

/// Refuse to compute while any validation error exists.
fn validated_compute(
    request: &ScenarioRequest,
    config: &EngineConfig,
) -> anyhow::Result<ScenarioResult> {
    let errors = validate(request, config);
    if !errors.is_empty() {
        eprintln!("{}", format_errors(&errors));
        anyhow::bail!("{} validation error(s)", errors.len());
    }
    compute(request, config).context("calculation failed")
}

fn print_result(result: &ScenarioResult, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(result)?),
        OutputFormat::Text => print!("{}", report(result)),
    }
    Ok(())
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| format!("  {e}"))
        .collect::<Vec<_>>()
        .join("\n")
}
