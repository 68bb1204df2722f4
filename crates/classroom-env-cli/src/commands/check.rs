//! Check control values against the recommended ranges.

use clap::Args;

use classroom_env_core::{Attribute, ClassroomPanel, Config, Feedback};

use super::{print_json, wants_json, SelectionArgs};

#[derive(Args)]
pub struct CheckArgs {
    #[command(flatten)]
    selection: SelectionArgs,
    /// Temperature in °C
    #[arg(long, allow_negative_numbers = true)]
    temperature: Option<f64>,
    /// Relative humidity in %
    #[arg(long)]
    humidity: Option<f64>,
    /// Air changes per hour
    #[arg(long)]
    ventilation: Option<f64>,
    /// Illuminance in lux
    #[arg(long)]
    lighting: Option<f64>,
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

impl CheckArgs {
    fn overrides(&self) -> [(Attribute, Option<f64>); 4] {
        [
            (Attribute::Temperature, self.temperature),
            (Attribute::Humidity, self.humidity),
            (Attribute::Ventilation, self.ventilation),
            (Attribute::Lighting, self.lighting),
        ]
    }
}

pub fn run(args: CheckArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let (season, time) = args.selection.resolve(config);
    let mut panel = ClassroomPanel::new(season, time, config.controls.settings());
    for (attr, value) in args.overrides() {
        if let Some(value) = value {
            panel.set_value(attr, value);
        }
    }

    let feedback = panel.check_settings().clone();
    if wants_json(args.json, config) {
        return match feedback {
            Feedback::Report(report) => print_json(&report),
            other => print_json(&other),
        };
    }

    print!("{}", feedback.text());
    println!();
    println!("{}", panel.tips());
    Ok(())
}
