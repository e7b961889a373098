//! # sitecraft
//!
//! Fetch a site's stored content, normalize it, apply its theme and write
//! the page as static HTML.
//!
//! ## Usage
//!
//! ```bash
//! # Render the site configured via SITECRAFT_PROJECT_ID
//! sitecraft render --out index.html
//!
//! # Render from a raw record on disk, no network
//! sitecraft render --from-json site.json
//!
//! # Show the normalized snapshot
//! sitecraft inspect --from-json site.json
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use sitecraft::{RawSiteRecord, SiteConfig, SiteSnapshot, load_site, normalize};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "sitecraft")]
#[command(about = "Render a remotely configured marketing site to static HTML")]
#[command(version)]
struct Args {
    /// Config file (default: ./sitecraft.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Site identifier, overriding config and SITECRAFT_PROJECT_ID
    #[arg(long, global = true)]
    project_id: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch, normalize and render the site to HTML
    Render {
        /// Write HTML here instead of stdout
        #[arg(long, short)]
        out: Option<PathBuf>,

        /// Read the raw site record from a JSON file instead of fetching it
        #[arg(long)]
        from_json: Option<PathBuf>,
    },
    /// Print the normalized snapshot as JSON
    Inspect {
        /// Read the raw site record from a JSON file instead of fetching it
        #[arg(long)]
        from_json: Option<PathBuf>,
    },
}

// ============================================================================
// Commands
// ============================================================================

fn load_config(args: &Args) -> SiteConfig {
    let mut config = match &args.config {
        Some(path) => SiteConfig::load_from_path(path),
        None => SiteConfig::load(Path::new(".")),
    }
    .with_env();

    if let Some(id) = &args.project_id {
        config.project_id = Some(id.clone());
    }
    config
}

fn read_raw_record(path: &Path) -> Result<SiteSnapshot> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {} as JSON", path.display()))?;
    let raw = RawSiteRecord::from_value(value)
        .with_context(|| format!("{} is not a site record", path.display()))?;
    Ok(normalize(&raw))
}

fn write_output(out: Option<&Path>, content: &str) -> Result<()> {
    match out {
        Some(path) => {
            fs::write(path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        None => println!("{}", content),
    }
    Ok(())
}

async fn render(config: &SiteConfig, out: Option<&Path>, from_json: Option<&Path>) -> Result<()> {
    let site = match from_json {
        Some(path) => read_raw_record(path)?,
        None => match load_site(config).await {
            Ok(site) => site,
            Err(err) => {
                write_output(out, &page_leptos::render_error(&err.to_string()))?;
                bail!(err);
            }
        },
    };

    debug!(
        services = site.services.len(),
        slides = site.homepage.hero_slides.len(),
        "Rendering {}",
        site.settings.business_name
    );
    write_output(out, &page_leptos::render_site(&site))
}

async fn inspect(config: &SiteConfig, from_json: Option<&Path>) -> Result<()> {
    let site = match from_json {
        Some(path) => read_raw_record(path)?,
        None => load_site(config).await?,
    };
    let json = serde_json::to_string_pretty(&site).context("Failed to serialize snapshot")?;
    println!("{}", json);
    Ok(())
}

async fn run() -> Result<()> {
    let args = Args::parse();

    // stdout carries the page or the snapshot; logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    let config = load_config(&args);
    debug!(site_id = ?config.site_id(), "Configuration loaded");

    match &args.command {
        Command::Render { out, from_json } => {
            render(&config, out.as_deref(), from_json.as_deref()).await
        }
        Command::Inspect { from_json } => inspect(&config, from_json.as_deref()).await,
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[sitecraft] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
