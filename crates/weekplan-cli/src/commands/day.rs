use clap::Args;
use weekplan_core::{ActivityLegend, DayOfWeek, TimeBlock};

use super::{CmdResult, Context};

#[derive(Args)]
pub struct DayArgs {
    /// Day of week, 1 = Monday .. 7 = Sunday
    #[arg(value_parser = clap::value_parser!(u8).range(1..=7))]
    day: u8,
    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

pub fn run(args: DayArgs) -> CmdResult {
    let ctx = Context::load()?;
    let day = DayOfWeek::new(args.day)?;
    let blocks = ctx.session.compile_day(day);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&blocks)?);
    } else {
        println!("{}", day.name());
        print_blocks(&blocks, &ctx.config.legend);
    }
    Ok(())
}

pub fn print_blocks(blocks: &[TimeBlock], legend: &ActivityLegend) {
    if blocks.is_empty() {
        println!("  (libre)");
        return;
    }
    for block in blocks {
        println!(
            "  {}-{}  {}",
            block.start,
            block.end,
            legend.style(block.kind).label
        );
    }
}
