use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use classroom_env_core::Config;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "classroom-env", version, about = "Classroom Climate CLI")]
struct Cli {
    /// Config file (defaults to ~/.config/classroom-env/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the preset values for a season and time of day
    Preset(commands::preset::PresetArgs),
    /// Check control values against the recommended ranges
    Check(commands::check::CheckArgs),
    /// Show the learning tips for a season and time of day
    Tips(commands::tips::TipsArgs),
    /// Print the full recommendation table
    Table(commands::table::TableArgs),
    /// Configuration inspection
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> Result<Config, Box<dyn std::error::Error>> {
    let config = match path {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    Ok(config)
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    tracing::debug!(config = ?cli.config, "starting");

    let result = match cli.command {
        Commands::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "classroom-env",
                &mut std::io::stdout(),
            );
            Ok(())
        }
        Commands::Config { action } => commands::config::run(action, cli.config.as_ref()),
        Commands::Preset(args) => {
            load_config(cli.config.as_ref()).and_then(|c| commands::preset::run(args, &c))
        }
        Commands::Check(args) => {
            load_config(cli.config.as_ref()).and_then(|c| commands::check::run(args, &c))
        }
        Commands::Tips(args) => {
            load_config(cli.config.as_ref()).and_then(|c| commands::tips::run(args, &c))
        }
        Commands::Table(args) => {
            load_config(cli.config.as_ref()).and_then(|c| commands::table::run(args, &c))
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
