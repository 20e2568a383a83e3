use clap::Parser;
use colored::*;
use eyre::{Context, Result, bail};
use log::info;
use std::fs;
use std::path::PathBuf;

mod cli;

use cli::Cli;
use cli::commands::Commands;
use refltools::config::Config;
use refltools::registry::{DataCategory, Registry};
use refltools::report::{self, DataInventory, DataOrganization};

fn setup_logging(default_level: &str) -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("refltools")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("refltools.log");

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    // RUST_LOG wins over the configured level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn run_application(cli: &Cli, registry: &Registry, data_org: &DataOrganization) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
    }

    match &cli.command {
        None | Some(Commands::Overview) => {
            print!("{}", report::render_overview(registry, data_org));
            Ok(())
        }
        Some(Commands::Welcome) => {
            print!("{}", report::render_welcome(registry, data_org));
            Ok(())
        }
        Some(Commands::Tools { data_type }) => handle_tools_command(data_type.as_deref(), cli.json, registry),
        Some(Commands::Tool { key }) => handle_tool_command(key, cli.json, registry),
        Some(Commands::Workflows) => handle_workflows_command(cli.json, registry),
        Some(Commands::Workflow { key }) => handle_workflow_command(key, cli.json, registry),
        Some(Commands::Validate) => handle_validate_command(registry),
        Some(Commands::QuickStart { data_type }) => {
            let category = DataCategory::parse(data_type)?;
            print!("{}", report::render_quick_start(registry, data_org, category));
            Ok(())
        }
        Some(Commands::Choose) => {
            print!("{}", report::render_tool_chooser(registry));
            Ok(())
        }
        Some(Commands::Data) => handle_data_command(data_org),
    }
}

fn handle_tools_command(data_type: Option<&str>, json: bool, registry: &Registry) -> Result<()> {
    info!("Listing tools - data type: {:?}", data_type);
    let tools = match data_type {
        Some(s) => registry.tools_by_category(DataCategory::parse(s)?),
        None => registry.all_tools().iter().collect(),
    };

    if json {
        println!("{}", report::tools_json(tools)?);
    } else if tools.is_empty() {
        println!("{}", "No tools match".yellow());
    } else {
        print!("{}", report::render_tool_list(tools));
    }
    Ok(())
}

fn handle_tool_command(key: &str, json: bool, registry: &Registry) -> Result<()> {
    info!("Describing tool: {}", key);
    let tool = match registry.require_tool(key) {
        Ok(tool) => tool,
        Err(e) => {
            eprintln!("{} {}", "Available tools:".yellow(), registry.tool_keys().join(", "));
            return Err(e.into());
        }
    };
    if json {
        println!("{}", serde_json::to_string_pretty(tool)?);
    } else {
        print!("{}", report::render_tool_detail(registry, tool));
    }
    Ok(())
}

fn handle_workflows_command(json: bool, registry: &Registry) -> Result<()> {
    info!("Listing workflows");
    if json {
        println!("{}", report::workflows_json(registry.all_workflows())?);
    } else {
        print!("{}", report::render_workflows(registry));
    }
    Ok(())
}

fn handle_workflow_command(key: &str, json: bool, registry: &Registry) -> Result<()> {
    info!("Describing workflow: {}", key);
    let workflow = registry.require_workflow(key)?;
    if json {
        println!("{}", serde_json::to_string_pretty(workflow)?);
    } else {
        print!("{}", report::render_workflow_detail(registry, workflow));
    }
    Ok(())
}

fn handle_validate_command(registry: &Registry) -> Result<()> {
    let issues = registry.validate();
    let summary = report::render_validation(&issues);
    if issues.is_empty() {
        print!("{}", summary.green());
        Ok(())
    } else {
        print!("{}", summary.red());
        bail!("{} dangling workflow reference(s)", issues.len())
    }
}

fn handle_data_command(data_org: &DataOrganization) -> Result<()> {
    info!(
        "Scanning data directories: {} and {}",
        data_org.combined_data_dir, data_org.partial_data_dir
    );
    let inventory = DataInventory::scan(data_org).context("Failed to scan data directories")?;
    print!("{}", inventory.render());
    Ok(())
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Reports fall back to default paths when configuration is unavailable
    let config = Config::load(cli.config.as_ref());
    let log_level = config
        .as_ref()
        .ok()
        .and_then(|c| c.log_level.clone())
        .unwrap_or_else(|| "info".to_string());

    setup_logging(&log_level).context("Failed to setup logging")?;
    let data_org = DataOrganization::resolve(&config);

    info!("Starting with config from: {:?}", cli.config);

    let registry = Registry::builtin().context("Failed to build tool registry")?;

    // Run the main application logic
    run_application(&cli, &registry, &data_org).context("Application failed")?;

    Ok(())
}
