mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use workshop_catalog::Config;

#[derive(Parser)]
#[command(name = "catalog", version, about = "Browse the workshop catalog sheets")]
struct Cli {
    /// Base URL or directory holding the CSV sheets (overrides CATALOG_BASE)
    #[arg(long, global = true)]
    base: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List collection categories
    Categories {
        #[arg(long)]
        json: bool,
    },
    /// List products, optionally filtered by category
    Products {
        /// Category name, or "All"
        #[arg(short, long)]
        category: Option<String>,
        /// Page number (12 products per page)
        #[arg(short, long, default_value = "1")]
        page: usize,
        #[arg(long)]
        json: bool,
    },
    /// List signature pieces
    Pieces {
        #[arg(long)]
        json: bool,
    },
    /// Show products in the same category as the named product
    Related {
        /// Product name
        name: String,
        #[arg(long)]
        json: bool,
    },
    /// Fetch every sheet strictly and report problems
    Check,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match cli.base {
        Some(base) => Config::from_env().with_base(base),
        None => Config::from_env(),
    };

    match cli.command {
        Command::Categories { json } => commands::categories::run(&config, json),
        Command::Products { category, page, json } => {
            commands::products::run(&config, category.as_deref(), page, json)
        }
        Command::Pieces { json } => commands::pieces::run(&config, json),
        Command::Related { name, json } => commands::related::run(&config, &name, json),
        Command::Check => commands::check::run(&config),
    }
}
