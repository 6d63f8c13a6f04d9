use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tutanak_cli::{Config, RenderOutcome, logger, render};

#[derive(Parser, Debug)]
#[command(name = "tutanak", version, about = "Teslim tutanağı oluşturucu")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the delivery receipt for a draft
    Render {
        /// Draft JSON (product, form, payments, confirmed, date)
        #[arg(long)]
        draft: PathBuf,

        /// Catalog JSON (default data/catalog.json)
        #[arg(long, env = "TUTANAK_CATALOG")]
        catalog: Option<PathBuf>,

        /// Print sentences and totals as JSON instead of the document
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let config = Config::from_env();
    logger::init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    tracing::debug!(environment = %config.environment, "Configuration loaded");
    if config.is_production() && config.log_dir.is_none() {
        tracing::warn!("LOG_DIR is not set, logging to stderr");
    }

    match cli.command {
        Command::Render {
            draft,
            catalog,
            json,
        } => {
            let catalog = catalog.unwrap_or_else(|| config.catalog_path.clone());
            match render(&config, &draft, &catalog, json)? {
                RenderOutcome::Blocked(issues) => {
                    eprintln!("Tutanak oluşturulamadı:");
                    for issue in issues {
                        eprintln!("  - {}", issue);
                    }
                    Ok(ExitCode::FAILURE)
                }
                RenderOutcome::Document(doc) => {
                    print!("{}", doc);
                    Ok(ExitCode::SUCCESS)
                }
                RenderOutcome::Json(value) => {
                    println!("{}", serde_json::to_string_pretty(&value)?);
                    Ok(ExitCode::SUCCESS)
                }
            }
        }
    }
}
