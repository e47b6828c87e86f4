use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::info;

use crate::catalog::{CatalogSource, Fetcher, HttpCatalog};
use crate::config::{
    self, ConfigFile, Overrides, Settings, default_config_path, ensure_default_config_file,
    load_config,
};
use crate::logging;
use crate::models::Artwork;
use crate::state::{LoadStatus, SelectionMode, ViewState};
use crate::tui::{paginator_text, run_interactive};
use crate::utils::cell_text;

#[derive(Parser)]
#[command(name = "artwork-browser")]
#[command(version = "0.1.0")]
#[command(
    about = "Browse the Art Institute of Chicago collection page by page and collect a selection",
    long_about = None
)]
pub struct Cli {
    /// Config file (default: <config dir>/artwork-browser/config.yml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Catalog listing endpoint
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Rows per page (1-100)
    #[arg(long, global = true)]
    pub rows: Option<u32>,

    /// How unchecking a row updates the selection
    #[arg(long, value_enum, global = true)]
    pub selection_mode: Option<SelectionMode>,

    /// HTTP timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print one page of the catalog and exit
    Page {
        /// Zero-based page index, as the paginator counts
        index: u32,

        /// Print the records as JSON
        #[arg(long)]
        json: bool,
    },
    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the config file location
    Path,
    /// Print the effective settings as YAML
    Show,
    /// Write a commented default config file if none exists
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        None => browse(&cli),
        Some(Commands::Page { index, json }) => {
            logging::init_stderr()?;
            print_page(&cli, *index, *json)
        }
        Some(Commands::Config { action }) => {
            logging::init_stderr()?;
            run_config(&cli, action)
        }
    }
}

fn config_path(cli: &Cli) -> Option<PathBuf> {
    cli.config.clone().or_else(default_config_path)
}

fn load_settings(cli: &Cli) -> Result<Settings> {
    // An explicit --config must exist; the default location may not
    let file = match config_path(cli) {
        Some(path) => load_config(&path, cli.config.is_none())?,
        None => ConfigFile::default(),
    };
    let overrides = Overrides {
        endpoint: cli.endpoint.clone(),
        rows_per_page: cli.rows,
        selection_mode: cli.selection_mode,
        timeout_secs: cli.timeout,
    };
    config::resolve(file, overrides)
}

fn build_catalog(settings: &Settings) -> Result<Arc<dyn CatalogSource>> {
    let catalog = HttpCatalog::new(&settings.endpoint, settings.timeout(), &settings.user_agent)
        .context("Failed to set up catalog client")?;
    info!(endpoint = %catalog.endpoint(), timeout_secs = settings.timeout_secs, "catalog client ready");
    Ok(Arc::new(catalog))
}

fn browse(cli: &Cli) -> Result<()> {
    if let Some(log_path) = logging::default_log_path()
        && let Err(e) = logging::init_file(&log_path)
    {
        eprintln!("Warning: logging disabled: {:#}", e);
    }

    let settings = load_settings(cli)?;
    info!(endpoint = %settings.endpoint, rows = settings.rows_per_page, mode = %settings.selection_mode, "starting browser");
    let catalog = build_catalog(&settings)?;

    run_interactive(&settings, catalog)
}

fn print_page(cli: &Cli, index: u32, json: bool) -> Result<()> {
    let settings = load_settings(cli)?;
    let fetcher = Fetcher::new(build_catalog(&settings)?);
    let mut view = ViewState::new(settings.rows_per_page, settings.selection_mode);

    let ticket = view.go_to_page(index);
    view.apply_outcome(fetcher.fetch_now(ticket));

    if let LoadStatus::Failed { message, .. } = view.page().status() {
        bail!("{}", message);
    }

    let page = view.page();
    if json {
        let body = serde_json::json!({
            "page": page.page(),
            "total": page.total(),
            "total_pages": page.total_pages(),
            "records": page.records(),
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    println!("{}", paginator_text(page));
    println!();
    println!("{:>8}  {:<40}  {:<28}  {}", "ID", "Artwork Title", "Artist", "Date");
    for artwork in page.records() {
        println!("{}", format_row(artwork));
    }

    Ok(())
}

fn format_row(artwork: &Artwork) -> String {
    format!(
        "{:>8}  {:<40}  {:<28}  {}",
        artwork.id,
        cell_text(&artwork.title, 40),
        cell_text(&artwork.artist_title, 28),
        cell_text(&artwork.date_display, 24)
    )
}

fn run_config(cli: &Cli, action: &ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Path => {
            let path = config_path(cli).context("Could not determine a config directory")?;
            println!("{}", path.display());
        }
        ConfigAction::Show => {
            let settings = load_settings(cli)?;
            print!("{}", serde_yaml::to_string(&settings)?);
        }
        ConfigAction::Init => {
            let path = config_path(cli).context("Could not determine a config directory")?;
            if ensure_default_config_file(&path)? {
                println!("Created config at {}", path.display());
            } else {
                println!("Config already exists at {}", path.display());
            }
        }
    }
    Ok(())
}
