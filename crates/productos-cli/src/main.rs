//! Productos CLI - Products catalogue front-end
//!
//! Form and table for the products REST resource, in the terminal.

mod api;
mod app;
mod config;
mod prompt;
mod screen;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use api::{HttpProductApi, RESOURCE_PATH};
use config::{Config, BASE_URL_ENV};
use productos::{ProductListController, ScreenView};
use prompt::TerminalPrompt;

#[derive(Parser)]
#[command(name = "productos")]
#[command(about = "Productos CLI - Create, edit and delete catalogue products", long_about = None)]
#[command(version)]
struct Cli {
    /// API base URL (overrides config and PRODUCTOS_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive form and table (default)
    Interactive,

    /// Print the product table once
    List,

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration
    Show,
    /// Persist a new API base URL
    SetUrl {
        /// Base URL, e.g. http://127.0.0.1:8000
        url: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Interactive => cmd_interactive(cli.base_url).await,
        Commands::List => cmd_list(cli.base_url).await,
        Commands::Config { action } => cmd_config(action.unwrap_or(ConfigAction::Show)),
    }
}

// ============================================
// Command Implementations
// ============================================

fn load_config(base_url: Option<String>) -> Result<Config> {
    let config = Config::load()?.with_overrides(std::env::var(BASE_URL_ENV).ok(), base_url);
    tracing::info!(base_url = %config.base_url, "configuration loaded");
    Ok(config)
}

fn build_controller(config: &Config) -> ProductListController<HttpProductApi, TerminalPrompt> {
    let api = HttpProductApi::new(&config.base_url);
    ProductListController::new(Arc::new(api), Arc::new(TerminalPrompt))
}

async fn cmd_interactive(base_url: Option<String>) -> Result<()> {
    let config = load_config(base_url)?;
    let mut controller = build_controller(&config);

    app::run(&mut controller).await
}

async fn cmd_list(base_url: Option<String>) -> Result<()> {
    let config = load_config(base_url)?;
    let mut controller = build_controller(&config);

    controller.start().await;

    let view = ScreenView::from_state(controller.state());
    print!("{}", screen::paint_table(&view));

    if let Some(banner) = view.error_banner {
        bail!("{} ({})", banner, config.base_url);
    }

    Ok(())
}

fn cmd_config(action: ConfigAction) -> Result<()> {
    let mut config = Config::load()?;

    match action {
        ConfigAction::Show => {
            println!("{}", "Configuration:".bold());
            println!("  Path: {:?}", Config::config_path()?);
            println!("  Base URL: {}", config.base_url.cyan());
            println!("  Resource path: {}", RESOURCE_PATH.dimmed());
            if let Ok(env_url) = std::env::var(BASE_URL_ENV) {
                println!("  {} overrides base URL: {}", BASE_URL_ENV, env_url.yellow());
            }
        }

        ConfigAction::SetUrl { url } => {
            config.base_url = url.trim_end_matches('/').to_string();
            config.save()?;
            println!("{} Base URL set to {}", "✓".green(), config.base_url);
        }
    }

    Ok(())
}
