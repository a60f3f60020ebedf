//! Command-line interface for vidkeys.
//!
//! Subcommands check binding descriptors, print the effective binding
//! table, replay scripted page events through the dispatcher, and enrich a
//! live listing page.

use crate::hotkeys::build_registry;
use crate::replay::ReplayScript;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use vidkeys_config::{Config, LogLevel};
use vidkeys_keybindings::parse_key_combo;
use vidkeys_listing::{
    Fetcher, UreqFetcher, enrich_listings, is_listing_page, listing_card_hrefs,
};

/// vidkeys - video hotkeys and wheel gestures for web pages
#[derive(Parser)]
#[command(name = "vidkeys")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file to use instead of ~/.config/vidkeys/config.yaml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse key descriptors and print their canonical form
    Check {
        /// Descriptors such as "Alt+ArrowUp" or "Shift+Digit3"
        #[arg(required = true)]
        descriptors: Vec<String>,
    },

    /// Print the effective binding table in match order
    Bindings,

    /// Run a scripted event sequence against an in-memory page
    Replay {
        /// YAML replay script
        script: PathBuf,
    },

    /// Fetch seller ratings for every card of a listing page
    Enrich {
        /// Listing (search results) page URL
        url: String,
    },
}

impl Commands {
    /// `check` only parses its arguments, so it never touches the config file.
    pub fn needs_config(&self) -> bool {
        !matches!(self, Commands::Check { .. })
    }
}

impl Cli {
    /// Load the config from `--config` or the default location.
    pub fn load_config(&self) -> Result<Config> {
        match &self.config {
            Some(path) => Config::load_from(path),
            None => Config::load(),
        }
    }
}

/// Run a parsed command. Returns the process exit code.
pub fn run(command: Commands, config: &Config) -> Result<i32> {
    match command {
        Commands::Check { descriptors } => Ok(check(&descriptors)),
        Commands::Bindings => {
            print_bindings(config);
            Ok(0)
        }
        Commands::Replay { script } => replay(&script, config),
        Commands::Enrich { url } => enrich(&UreqFetcher::new(), &url, config),
    }
}

fn check(descriptors: &[String]) -> i32 {
    let mut code = 0;
    for descriptor in descriptors {
        match parse_key_combo(descriptor) {
            Ok(combo) => println!("{descriptor:?} => {combo}"),
            Err(e) => {
                println!("{descriptor:?}: {e}");
                code = 1;
            }
        }
    }
    code
}

fn print_bindings(config: &Config) {
    let registry = build_registry(&config.keybindings);
    for (combo, action) in registry.iter() {
        println!("{:<20} {}", combo.to_string(), action);
    }
}

fn replay(path: &std::path::Path, config: &Config) -> Result<i32> {
    let report = ReplayScript::load(path)?.run(config);

    for step in &report.steps {
        println!("{:>6}ms  {:<32} {}", step.at_ms, step.event, step.outcome);
    }
    println!();
    print!(
        "{}",
        serde_yaml_ng::to_string(&report.page).context("Failed to serialize page state")?
    );
    Ok(0)
}

fn enrich<F: Fetcher>(fetcher: &F, url: &str, config: &Config) -> Result<i32> {
    let html = fetcher
        .fetch_text(url, None)
        .with_context(|| format!("Failed to fetch listing page {url}"))?;
    if !is_listing_page(&html) {
        eprintln!("{url} does not look like a listing page");
        return Ok(1);
    }

    let hrefs = listing_card_hrefs(&html);
    log::info!("Enriching {} listing cards from {}", hrefs.len(), url);
    let now = chrono::Utc::now();

    let mut code = 0;
    for listing in enrich_listings(fetcher, &config.listing, &hrefs) {
        println!("{}", listing.href);
        match listing
            .result
            .and_then(|summary| summary.render(now, &config.listing.date_format))
        {
            Ok(line) => println!("  {line}"),
            Err(e) => {
                println!("  error: {e}");
                code = 1;
            }
        }
    }
    Ok(code)
}
