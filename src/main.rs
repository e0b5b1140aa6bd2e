use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use matchforge::config::Config;
use matchforge::error::MfResult;
use matchforge::model::persist::DEFAULT_MODEL_PATH;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with forest/training/pipeline settings
    #[arg(global = true, long)]
    config: Option<String>,

    #[arg(global = true, short, long, default_value = DEFAULT_MODEL_PATH)]
    model: String,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Cross-validate, fit and save a model from labeled pairs
    Train(cmd::train::TrainArgs),
    /// Export the feature table of labeled pairs as CSV
    Features(cmd::features::FeaturesArgs),
    /// Predict one talent against one job
    Match(cmd::pair::MatchArgs),
    /// Predict every talent against every job and rank the results
    Bulk(cmd::bulk::BulkArgs),
}

/// Embedded defaults, then the JSON file, then flags typed on the command line.
fn resolve_config(
    config_path: Option<&str>,
    cli_config: &Config,
    sub_matches: &clap::ArgMatches,
) -> MfResult<Config> {
    let Some(path) = config_path else {
        return Ok(cli_config.clone());
    };
    info!("⚙️  Loading config from: {}", path);
    let mut config = Config::load_from_file(path)?;
    config.merge_from_cli(cli_config, sub_matches);
    Ok(config)
}

fn run(cli: Cli, matches: &clap::ArgMatches) -> MfResult<()> {
    // Needed to tell typed flags from clap defaults when merging the config file.
    let sub = matches
        .subcommand()
        .map(|(_, m)| m.clone())
        .unwrap_or_default();

    match cli.command {
        Commands::Train(args) => {
            let config = resolve_config(cli.config.as_deref(), &args.config, &sub)?;
            cmd::train::run(args, config, &cli.model)
        }
        Commands::Features(args) => {
            let config = resolve_config(cli.config.as_deref(), &args.config, &sub)?;
            cmd::features::run(args, config)
        }
        Commands::Match(args) => cmd::pair::run(args, &cli.model),
        Commands::Bulk(args) => cmd::bulk::run(args, &cli.model),
    }
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        // stdout carries command output (tables, --json).
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli, &matches) {
        error!("❌ {}", e);
        process::exit(1);
    }
}
