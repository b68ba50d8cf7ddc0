//! TripWeaver - trip planning and travel Q&A
//!
//! CLI entry point: generate a plan, then optionally chat about it.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use eyre::{Context, Result};
use tracing::{debug, info};

use tripweaver::cli::{Cli, Command};
use tripweaver::config::Config;
use tripweaver::llm::create_client;
use tripweaver::pipeline::{PlanState, Planner};
use tripweaver::prompts::PromptLoader;
use tripweaver::repl::ChatSession;

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tripweaver")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    // Level priority: CLI --log-level > config file > INFO
    let level = match cli_log_level.or(config_log_level) {
        Some(s) => match s.to_uppercase().as_str() {
            "TRACE" => tracing::Level::TRACE,
            "DEBUG" => tracing::Level::DEBUG,
            "INFO" => tracing::Level::INFO,
            "WARN" | "WARNING" => tracing::Level::WARN,
            "ERROR" => tracing::Level::ERROR,
            _ => {
                eprintln!("Warning: Unknown log-level '{}', defaulting to INFO", s);
                tracing::Level::INFO
            }
        },
        None => tracing::Level::INFO,
    };

    let log_file = fs::File::create(log_dir.join("tripweaver.log")).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (level: {:?})", level);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Config is loaded before logging only to read the log level; the full
    // load below happens after logging is up so its messages are captured.
    let config_log_level = Config::load(cli.config.as_ref()).ok().and_then(|c| c.log_level);
    setup_logging(cli.log_level.as_deref(), config_log_level.as_deref()).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    config.validate()?;

    info!(provider = %config.llm.provider, model = %config.llm.model, "main: config loaded");

    let llm = create_client(&config.llm)?;
    let prompt_root = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let max_tokens = config.llm.max_tokens;

    debug!(command = ?cli.command, "main: dispatching command");
    match cli.command {
        Command::Plan { trip } => {
            let trip = trip.to_trip();
            let planner = Planner::new(llm, PromptLoader::new(&prompt_root), max_tokens);
            let plan = planner.run_plan(&trip).await;
            print_plan(&plan);
            Ok(())
        }
        Command::Chat { trip, skip_plan } => {
            let trip = trip.to_trip();

            let itinerary = if skip_plan {
                None
            } else {
                let planner = Planner::new(llm.clone(), PromptLoader::new(&prompt_root), max_tokens);
                let plan = planner.run_plan(&trip).await;
                print_plan(&plan);
                if plan.itinerary.is_empty() { None } else { Some(plan.itinerary) }
            };

            let mut session =
                ChatSession::new(llm, PromptLoader::new(&prompt_root), trip, itinerary, max_tokens);
            session.run().await
        }
    }
}

/// Print the plan sections that were produced, then any warnings
fn print_plan(plan: &PlanState) {
    let sections = [
        ("Itinerary", &plan.itinerary),
        ("Activity Suggestions", &plan.activity_suggestions),
        ("Weather Outlook", &plan.weather_forecast),
        ("Packing List", &plan.packing_list),
        ("Food & Culture", &plan.food_culture),
    ];

    for (title, body) in sections {
        if body.is_empty() {
            continue;
        }
        println!();
        println!("{}", title.bright_cyan().bold());
        println!("{}", "=".repeat(title.len()).bright_cyan());
        println!("{}", body);
    }

    if !plan.warnings.is_empty() {
        println!();
        for warning in &plan.warnings {
            println!("{} {}", "!".yellow(), warning.yellow());
        }
    }
    println!();
}
