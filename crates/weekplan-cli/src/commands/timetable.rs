use clap::Args;
use weekplan_core::DayOfWeek;

use super::{CmdResult, Context};

#[derive(Args)]
pub struct TimetableArgs {
    /// Only show this day (1 = Monday .. 7 = Sunday)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=7))]
    day: Option<u8>,
}

pub fn run(args: TimetableArgs) -> CmdResult {
    let ctx = Context::load()?;
    let timetable = ctx.session.timetable();

    let days: Vec<DayOfWeek> = match args.day {
        Some(n) => vec![DayOfWeek::new(n)?],
        None => DayOfWeek::all().collect(),
    };

    for day in days {
        let count = timetable.count_for_day(day);
        if args.day.is_none() && count == 0 {
            continue;
        }
        println!("{} ({} cours)", day.name(), count);
        for lesson in timetable.for_day(day) {
            println!(
                "  {}-{}  {:<20} {}",
                lesson.time_start,
                lesson.time_end,
                lesson.title,
                lesson.display_color()
            );
        }
    }
    Ok(())
}
