use clap::Parser;
use colored::*;
use eyre::{Context, Result, bail};
use log::info;
use std::fs;
use std::path::PathBuf;
use tokio::runtime::Runtime;

mod cli;

use cli::Cli;
use cli::commands::Commands;
use cli::render;
use osintr::LookupEngine;
use osintr::config::Config;
use osintr::registry::Registry;

fn setup_logging() -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("osintr")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("osintr.log");

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    // Without RUST_LOG only this crate reaches the logger; the config level is applied once loaded
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter()))
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn default_filter() -> String {
    format!("{}=trace", env!("CARGO_PKG_NAME"))
}

fn apply_log_level(config: &Config) {
    if std::env::var_os("RUST_LOG").is_some() {
        return;
    }
    let level = config.log_level.as_deref().unwrap_or("info");
    match level.parse::<log::LevelFilter>() {
        Ok(filter) => log::set_max_level(filter),
        Err(_) => {
            log::warn!("Unknown log_level '{}' in config, using info", level);
            log::set_max_level(log::LevelFilter::Info);
        }
    }
}

fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
    }

    match &cli.command {
        None | Some(Commands::Categories) => handle_categories_command(),
        Some(Commands::Tools { category }) => handle_tools_command(category.as_deref()),
        Some(Commands::Lookup {
            tool,
            query,
            category,
            json,
        }) => handle_lookup_command(tool, query.as_deref(), category.as_deref(), *json, config),
        Some(Commands::Batch { tool, queries, json }) => handle_batch_command(tool, queries, *json, config),
        Some(Commands::Sites) => handle_sites_command(),
        Some(Commands::Check) => handle_check_command(cli, config),
    }
}

fn handle_categories_command() -> Result<()> {
    info!("Listing categories");
    for line in render::category_lines(Registry::builtin()) {
        println!("{}", line);
    }
    Ok(())
}

fn handle_tools_command(category: Option<&str>) -> Result<()> {
    info!("Listing tools for category: {:?}", category);
    let registry = Registry::builtin();
    match category {
        Some(id) => {
            let Some(category) = registry.category(id) else {
                bail!("Unknown category: {}", id);
            };
            for line in render::tool_lines(category) {
                println!("{}", line);
            }
        }
        None => {
            for category in registry.categories() {
                for line in render::tool_lines(category) {
                    println!("{}", line);
                }
                println!();
            }
        }
    }
    Ok(())
}

fn handle_lookup_command(
    tool_id: &str,
    query: Option<&str>,
    category: Option<&str>,
    json: bool,
    config: &Config,
) -> Result<()> {
    let query = query.unwrap_or("").trim();
    info!("Lookup {} (category: {:?}, {} byte query)", tool_id, category, query.len());

    let engine = LookupEngine::from_config(config).context("Failed to build lookup engine")?;
    let tool = match category {
        Some(category) => engine.registry().lookup(category, tool_id)?,
        None => engine
            .registry()
            .find(tool_id)
            .ok_or_else(|| osintr::OsintError::UnknownTool(tool_id.to_string()))?,
    };
    if !tool.accepts(query) {
        return Err(osintr::OsintError::EmptyQuery(tool_id.to_string()).into());
    }

    let runtime = Runtime::new().context("Failed to start async runtime")?;
    let result = runtime.block_on(engine.execute(tool_id, query));

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        for line in render::result_lines(&tool.name, &result) {
            println!("{}", line);
        }
    }
    Ok(())
}

fn handle_batch_command(tool_id: &str, queries: &[String], json: bool, config: &Config) -> Result<()> {
    info!("Batch lookup {} for {} queries", tool_id, queries.len());

    let engine = LookupEngine::from_config(config).context("Failed to build lookup engine")?;
    let tool = engine
        .registry()
        .find(tool_id)
        .ok_or_else(|| osintr::OsintError::UnknownTool(tool_id.to_string()))?;
    let queries: Vec<&str> = queries.iter().map(|q| q.trim()).collect();
    if let Some(rejected) = queries.iter().find(|q| !tool.accepts(q)) {
        bail!("Input cannot be empty for tool {} (got {:?})", tool_id, rejected);
    }

    let runtime = Runtime::new().context("Failed to start async runtime")?;
    let results = runtime.block_on(engine.execute_batch(tool_id, &queries));

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        for result in &results {
            for line in render::result_lines(&tool.name, result) {
                println!("{}", line);
            }
            println!();
        }
    }
    Ok(())
}

fn handle_sites_command() -> Result<()> {
    info!("Listing OSINT websites");
    for line in render::site_lines() {
        println!("{}", line);
    }
    Ok(())
}

fn handle_check_command(cli: &Cli, config: &Config) -> Result<()> {
    info!("Checking tool wiring");
    let engine = LookupEngine::from_config(config).context("Registry wiring is inconsistent")?;

    let registry = engine.registry();
    let dispatch = engine.dispatch();
    println!(
        "{} {} categories, {} tools, {} simulation rules",
        "Registry:".green(),
        registry.categories().len(),
        registry.len(),
        engine.simulator().len()
    );

    for tool_id in dispatch.integrated_tools() {
        let credential = dispatch.credential_for(tool_id).unwrap_or("?");
        let status = if dispatch.has_credential(tool_id) {
            "live".green()
        } else {
            "simulated (credential not set)".yellow()
        };
        println!("  {:<24} {:<24} {}", tool_id, credential, status);
    }

    let gaps = engine.completeness_gaps();
    if gaps.is_empty() {
        println!("{}", "Every tool has a provider or simulation rule".green());
    } else {
        println!("{} {}", "Tools using the default template:".yellow(), gaps.join(", "));
    }

    if cli.is_verbose() {
        println!("Config: {:?}", cli.config);
    }
    Ok(())
}

fn main() -> Result<()> {
    // Setup logging first
    setup_logging().context("Failed to setup logging")?;

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    apply_log_level(&config);

    info!("Starting with config from: {:?}", cli.config);

    // Run the main application logic
    run_application(&cli, &config).context("Application failed")?;

    Ok(())
}
