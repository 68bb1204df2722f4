use clap::Args;

use classroom_env_core::advisory::render_tips;
use classroom_env_core::Config;

use super::SelectionArgs;

#[derive(Args)]
pub struct TipsArgs {
    #[command(flatten)]
    selection: SelectionArgs,
}

pub fn run(args: TipsArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let (season, time) = args.selection.resolve(config);
    println!("{}", render_tips(season, time));
    Ok(())
}
