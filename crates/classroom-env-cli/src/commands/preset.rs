//! Preset values: the midpoint of every recommended range.

use clap::Args;
use serde::Serialize;

use classroom_env_core::feedback::{format_range, value_label};
use classroom_env_core::{compute_preset, lookup, Attribute, Config, Range, Season, TimeOfDay};

use super::{print_json, wants_json, SelectionArgs};

#[derive(Args)]
pub struct PresetArgs {
    #[command(flatten)]
    selection: SelectionArgs,
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct PresetEntry {
    attribute: Attribute,
    value: f64,
    range: Range,
}

#[derive(Serialize)]
struct PresetOutput {
    season: Season,
    time: TimeOfDay,
    values: Vec<PresetEntry>,
}

pub fn run(args: PresetArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let (season, time) = args.selection.resolve(config);
    let ranges = lookup(season, time);
    let preset = compute_preset(season, time);

    if wants_json(args.json, config) {
        let values = preset
            .iter()
            .map(|(attribute, value)| PresetEntry {
                attribute,
                value: *value,
                range: ranges[attribute],
            })
            .collect();
        return print_json(&PresetOutput {
            season,
            time,
            values,
        });
    }

    println!("{} {} 추천 값", season.display_name(), time.display_name());
    for (attr, value) in preset.iter() {
        println!(
            "  {}: {} ({})",
            attr.label(),
            value_label(attr, *value),
            format_range(&ranges[attr], attr.unit())
        );
    }
    Ok(())
}
