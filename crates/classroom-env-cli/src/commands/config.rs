use std::path::PathBuf;

use clap::Subcommand;
use classroom_env_core::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Config key (e.g. "selection.season", "controls.lighting")
        key: String,
    },
    /// List all config values
    List,
    /// Print the config file location
    Path,
}

pub fn run(action: ConfigAction, path: Option<&PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let path = match path {
        Some(path) => path.clone(),
        None => Config::default_path()?,
    };

    match action {
        ConfigAction::Get { key } => {
            let config = Config::load_from(&path)?;
            println!("{}", config.get(&key)?);
        }
        ConfigAction::List => {
            let config = Config::load_from(&path)?;
            let json = serde_json::to_string_pretty(&config)?;
            println!("{json}");
        }
        ConfigAction::Path => {
            println!("{}", path.display());
        }
    }
    Ok(())
}
