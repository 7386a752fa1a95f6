use clap::Args;
use weekplan_core::MonthGrid;

use super::{today, CmdResult};

#[derive(Args)]
pub struct CalendarArgs {
    /// Month to show as YYYY-MM (default: current month)
    #[arg(long, value_parser = parse_month)]
    month: Option<MonthGrid>,
}

fn parse_month(value: &str) -> Result<MonthGrid, String> {
    let invalid = || format!("invalid month {value:?} (expected YYYY-MM)");
    let (year, month) = value.split_once('-').ok_or_else(invalid)?;
    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;
    MonthGrid::for_month(year, month).ok_or_else(invalid)
}

pub fn run(args: CalendarArgs) -> CmdResult {
    let today = today();
    let grid = args.month.unwrap_or_else(|| MonthGrid::containing(today));

    println!("{}", grid.title());
    println!(" Lun Mar Mer Jeu Ven Sam Dim");
    for row in grid.rows() {
        let line: String = row
            .iter()
            .map(|cell| match cell {
                Some(day) if grid.is_today(*day, today) => format!(" {day:>2}*"),
                Some(day) => format!(" {day:>3}"),
                None => "    ".to_string(),
            })
            .collect();
        println!("{}", line.trim_end());
    }
    Ok(())
}
