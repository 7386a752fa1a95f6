use chrono::NaiveDate;
use clap::Args;
use weekplan_core::{ActivityLegend, DayCard, WeekRange, WeekView};

use super::{today, CmdResult, Context};

#[derive(Args)]
pub struct WeekArgs {
    /// Any date in the week to show (default: today)
    #[arg(long)]
    date: Option<NaiveDate>,
    /// Include Saturday and Sunday
    #[arg(long)]
    weekend: bool,
    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

pub fn run(args: WeekArgs) -> CmdResult {
    let ctx = Context::load()?;
    let week = WeekRange::containing(args.date.unwrap_or_else(today));
    let show_weekend = args.weekend || ctx.config.display.show_weekend;
    let view = ctx.session.week_view(week, show_weekend);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print_week(&view, &ctx.config.legend, ctx.config.display.show_percentages);
    }
    Ok(())
}

pub fn print_week(view: &WeekView, legend: &ActivityLegend, show_percentages: bool) {
    println!("Semaine du {} ({} - {})", view.label, view.day_start, view.day_end);
    for card in &view.days {
        println!();
        print_day_card(card, legend, show_percentages);
    }
}

fn print_day_card(card: &DayCard, legend: &ActivityLegend, show_percentages: bool) {
    if show_percentages {
        println!("{} {}  [{}%]", card.name, card.short_date, card.load_percentage);
    } else {
        println!("{} {}", card.name, card.short_date);
    }

    if card.blocks.is_empty() {
        println!("  (libre)");
    }
    for placed in &card.blocks {
        let label = &legend.style(placed.block.kind).label;
        if show_percentages {
            println!(
                "  {}-{}  {:<14}{:>4}%",
                placed.block.start, placed.block.end, label, placed.percentage
            );
        } else {
            println!("  {}-{}  {}", placed.block.start, placed.block.end, label);
        }
    }

    for placed in &card.tasks {
        let task = &placed.task;
        println!(
            "  * {}-{}  [{}] {}",
            task.time_start,
            task.time_end,
            task.task_type.label(),
            task.title
        );
    }
}
