//! The full recommendation table.

use clap::Args;
use serde::Serialize;

use classroom_env_core::feedback::format_range;
use classroom_env_core::{lookup, Config, RangeSet, Season, TimeOfDay};

use super::{print_json, wants_json};

#[derive(Args)]
pub struct TableArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct TableRow {
    season: Season,
    time: TimeOfDay,
    ranges: RangeSet,
}

pub fn run(args: TableArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let rows: Vec<TableRow> = Season::ALL
        .into_iter()
        .flat_map(|season| {
            TimeOfDay::ALL.into_iter().map(move |time| TableRow {
                season,
                time,
                ranges: *lookup(season, time),
            })
        })
        .collect();

    if wants_json(args.json, config) {
        return print_json(&rows);
    }

    for row in &rows {
        let cells: Vec<String> = row
            .ranges
            .iter()
            .map(|(attr, range)| format!("{} {}", attr.label(), format_range(range, attr.unit())))
            .collect();
        println!("{:<7} {:<8} {}", row.season, row.time, cells.join(" | "));
    }
    Ok(())
}
