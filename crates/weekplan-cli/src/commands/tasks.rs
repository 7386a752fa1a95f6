use chrono::NaiveDate;
use clap::Args;
use serde::Serialize;
use weekplan_core::{Task, WeekRange};

use super::{today, CmdResult, Context};

#[derive(Args)]
pub struct TasksArgs {
    /// Any date in the week to show (default: today)
    #[arg(long)]
    date: Option<NaiveDate>,
    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct DayTasks<'a> {
    date: NaiveDate,
    day: &'static str,
    tasks: Vec<&'a Task>,
}

pub fn run(args: TasksArgs) -> CmdResult {
    let ctx = Context::load()?;
    let week = WeekRange::containing(args.date.unwrap_or_else(today));
    let student = ctx.session.student();

    let days: Vec<_> = week
        .days(ctx.config.display.show_weekend)
        .into_iter()
        .map(|(day, date)| DayTasks {
            date,
            day: day.name(),
            tasks: ctx.session.tasks().for_date(date),
        })
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&days)?);
        return Ok(());
    }

    println!(
        "{} ({}, {}) - semaine du {}",
        student.full_name(),
        student.class_name,
        student.school,
        week.label()
    );
    for entry in &days {
        println!("{} {}", entry.day, entry.date.format("%d/%m"));
        if entry.tasks.is_empty() {
            println!("  -");
        }
        for task in &entry.tasks {
            println!(
                "  {}-{}  {:<11} {}",
                task.time_start,
                task.time_end,
                task.task_type.label(),
                task.title
            );
        }
    }
    Ok(())
}
