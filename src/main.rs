use clap::{Parser, Subcommand};
use std::path::PathBuf;
use team_builder::config::load_config_or_default;
use team_builder::notice::NoticeLevel;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "team-builder", about = "Import, export and inspect Showdown teams")]
struct Cli {
    /// Optional JSON config file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a Showdown team file and print the roster as JSON
    Import { file: PathBuf },

    /// Render a JSON roster back to Showdown text
    Export { file: PathBuf },

    /// Print final stats for every member of a Showdown team file
    Stats { file: PathBuf },

    /// Try to make a species tera captain
    TeraCaptain { name: String },
}

fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let config = load_config_or_default(cli.config.as_deref())?;

    match cli.command {
        Commands::Import { file } => {
            let (roster, notices) = team_builder::import_file(&file, config)?;
            for notice in notices {
                match notice.level {
                    NoticeLevel::Info => tracing::info!("{}", notice.message),
                    NoticeLevel::Warning => tracing::warn!("{}", notice.message),
                    NoticeLevel::Error => tracing::error!("{}", notice.message),
                }
            }
            println!("{}", serde_json::to_string_pretty(&roster)?);
        }
        Commands::Export { file } => {
            print!("{}", team_builder::export_file(&file)?);
        }
        Commands::Stats { file } => {
            print!("{}", team_builder::stats_report(&file)?);
        }
        Commands::TeraCaptain { name } => {
            let state = team_builder::tera_captain(&name, config)?;
            println!(
                "{name} is {} tera captain",
                if state.active { "now" } else { "no longer" }
            );
        }
    }
    Ok(())
}
