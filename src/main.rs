//! Sketchbook - runs sketches named by URL-fragment command strings.

use sketchbook::cli::{Cli, OutputFormat};
use sketchbook::config::Config;
use sketchbook::dispatcher::Dispatcher;
use sketchbook::error::{Result, SketchbookError};
use sketchbook::module::builtin_module;
use sketchbook::page::{HeadlessPage, Page, TerminalPage};
use sketchbook::registry::SketchRegistry;
use std::collections::BTreeMap;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Logs go to stderr so that --list and --plain output stay clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        error!("{}: {}", e.category(), e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let config_path = cli.config_path();
    info!("Loading config from: {}", config_path.display());
    let config = Config::load_from_file(&config_path)?;
    let registry = config.registry();

    if cli.list {
        return list_sketches(&registry, &cli);
    }

    // clap guarantees an input unless --list was given.
    let fragment = cli
        .fragment()
        .ok_or_else(|| SketchbookError::invalid_command("no input to read a command from"))?;

    let (page, view): (Box<dyn Page>, Option<HeadlessPage>) = if cli.plain {
        let page = HeadlessPage::new();
        let view = page.clone();
        (Box::new(page), Some(view))
    } else {
        (Box::new(TerminalPage::new()), None)
    };

    let mut dispatcher = Dispatcher::new(registry, Box::new(builtin_module()), page);
    dispatcher.run(&fragment).await?;

    if let Some(view) = view {
        if let Some(title) = view.last_title() {
            println!("{title}");
        }
    }

    Ok(())
}

/// Prints the registry contents in the requested format.
fn list_sketches(registry: &SketchRegistry, cli: &Cli) -> Result<()> {
    let format = cli.parse_output_format().map_err(SketchbookError::config)?;

    match format {
        OutputFormat::Text => {
            for name in registry.names() {
                if let Some(sketch) = registry.get(name) {
                    println!("{name}\t{}", sketch.title);
                }
            }
        }
        OutputFormat::Json => {
            // BTreeMap keeps the listing sorted by name.
            let entries: BTreeMap<_, _> = registry.iter().collect();
            let rendered = serde_json::to_string_pretty(&entries)
                .map_err(|e| SketchbookError::config(format!("Failed to render registry: {e}")))?;
            println!("{rendered}");
        }
    }

    Ok(())
}
