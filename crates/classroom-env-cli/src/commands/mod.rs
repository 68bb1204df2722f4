pub mod check;
pub mod config;
pub mod preset;
pub mod table;
pub mod tips;

use clap::Args;
use classroom_env_core::{Config, Season, TimeOfDay};

/// Season and time of day; each falls back to the configured selection.
#[derive(Args, Debug, Clone)]
pub struct SelectionArgs {
    /// Season (spring, summer, autumn, winter)
    #[arg(long, short)]
    pub season: Option<Season>,
    /// Time of day (morning, noon, evening)
    #[arg(long, short)]
    pub time: Option<TimeOfDay>,
}

impl SelectionArgs {
    pub fn resolve(&self, config: &Config) -> (Season, TimeOfDay) {
        (
            self.season.unwrap_or(config.selection.season),
            self.time.unwrap_or(config.selection.time),
        )
    }
}

/// `--json` on the command line wins; otherwise the config decides.
pub fn wants_json(flag: bool, config: &Config) -> bool {
    flag || config.output.json
}

pub fn print_json<T: serde::Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
