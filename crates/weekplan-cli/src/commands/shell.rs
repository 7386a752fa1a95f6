//! Line-oriented editing session.
//!
//! Edits live in a [`PlannerSession`](weekplan_core::PlannerSession) and
//! are lost when the shell exits.

use std::io::{BufRead, IsTerminal, Write};

use chrono::NaiveDate;
use tracing::debug;
use weekplan_core::schedule::{ACTIVITY_PALETTE, REVISION_PALETTE};
use weekplan_core::{
    DayOfWeek, NewRecurringActivity, NewSchoolLesson, NewTask, TaskType, WeekRange,
};

use super::day::print_blocks;
use super::revisions::print_revisions;
use super::week::print_week;
use super::{today, CmdResult, Context};

const HELP: &str = "\
commands:
  day <1-7>                                  compiled blocks of a day
  week [YYYY-MM-DD]                          week grid
  lesson <1-7> <HH:MM> <HH:MM> [#color] <title>
                                             add a school lesson
  activity <1-7> <HH:MM> <HH:MM> [#color] <title>
                                             add a recurring activity
  remove <id>                                remove a lesson or activity
  task <date> <type> <HH:MM> <HH:MM> <title> add a task (evaluation|devoir|autre)
  remove-task <id>                           remove a task
  revisions <date>                           subjects to revise
  audio <date> <lesson id> <url> <seconds>   attach a voice note
  delete-audio <date> <lesson id>
  photo <date> <lesson id> <url>             attach a notebook photo
  remove-photo <date> <lesson id> <photo id>
  done <date> <lesson id> | undo <date> <lesson id>
  reset                                      drop every edit
  quit";

#[derive(Debug, PartialEq)]
enum ShellCommand {
    Help,
    Quit,
    Reset,
    Day(DayOfWeek),
    Week(Option<NaiveDate>),
    Revisions(NaiveDate),
    Lesson {
        day: DayOfWeek,
        start: String,
        end: String,
        revision_color: Option<String>,
        title: String,
    },
    Activity {
        day: DayOfWeek,
        start: String,
        end: String,
        color: Option<String>,
        title: String,
    },
    Remove(String),
    Task {
        date: NaiveDate,
        task_type: TaskType,
        start: String,
        end: String,
        title: String,
    },
    RemoveTask(String),
    Audio {
        date: NaiveDate,
        lesson: String,
        url: String,
        seconds: u64,
    },
    DeleteAudio {
        date: NaiveDate,
        lesson: String,
    },
    Photo {
        date: NaiveDate,
        lesson: String,
        url: String,
    },
    RemovePhoto {
        date: NaiveDate,
        lesson: String,
        photo: String,
    },
    Completed {
        date: NaiveDate,
        lesson: String,
        completed: bool,
    },
}

struct Words<'a> {
    command: &'a str,
    rest: std::str::SplitWhitespace<'a>,
}

impl<'a> Words<'a> {
    fn next(&mut self, what: &str) -> Result<&'a str, String> {
        self.rest
            .next()
            .ok_or_else(|| format!("{}: missing {what}", self.command))
    }

    fn day(&mut self) -> Result<DayOfWeek, String> {
        let raw = self.next("day")?;
        raw.parse::<u8>()
            .map_err(|_| format!("invalid day {raw:?}"))
            .and_then(|n| DayOfWeek::new(n).map_err(|e| e.to_string()))
    }

    fn date(&mut self) -> Result<NaiveDate, String> {
        let raw = self.next("date")?;
        raw.parse()
            .map_err(|_| format!("invalid date {raw:?} (expected YYYY-MM-DD)"))
    }

    fn owned(&mut self, what: &str) -> Result<String, String> {
        self.next(what).map(str::to_string)
    }

    /// Everything left, joined by single spaces.
    fn title(&mut self) -> Result<String, String> {
        let title = self.rest.by_ref().collect::<Vec<_>>().join(" ");
        if title.is_empty() {
            return Err(format!("{}: missing title", self.command));
        }
        Ok(title)
    }

    fn done(mut self) -> Result<(), String> {
        match self.rest.next() {
            Some(extra) => Err(format!("{}: unexpected {extra:?}", self.command)),
            None => Ok(()),
        }
    }
}

impl ShellCommand {
    /// Parse one input line; blank lines and `#` comments yield `None`.
    fn parse(line: &str) -> Result<Option<Self>, String> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let mut parts = line.split_whitespace();
        let command = parts.next().unwrap_or_default();
        let mut w = Words { command, rest: parts };

        let parsed = match command {
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            "reset" => Self::Reset,
            "day" => Self::Day(w.day()?),
            "week" => Self::Week(match w.rest.next() {
                Some(raw) => Some(
                    raw.parse()
                        .map_err(|_| format!("invalid date {raw:?} (expected YYYY-MM-DD)"))?,
                ),
                None => None,
            }),
            "revisions" => Self::Revisions(w.date()?),
            "lesson" => {
                let day = w.day()?;
                let start = w.owned("start time")?;
                let end = w.owned("end time")?;
                let (revision_color, title) = split_color(w.title()?);
                Self::Lesson {
                    day,
                    start,
                    end,
                    revision_color,
                    title,
                }
            }
            "activity" => {
                let day = w.day()?;
                let start = w.owned("start time")?;
                let end = w.owned("end time")?;
                let (color, title) = split_color(w.title()?);
                Self::Activity {
                    day,
                    start,
                    end,
                    color,
                    title,
                }
            }
            "remove" => Self::Remove(w.owned("id")?),
            "task" => Self::Task {
                date: w.date()?,
                task_type: {
                    let raw = w.next("type")?;
                    raw.parse().map_err(|_| format!("unknown task type {raw:?}"))?
                },
                start: w.owned("start time")?,
                end: w.owned("end time")?,
                title: w.title()?,
            },
            "remove-task" => Self::RemoveTask(w.owned("id")?),
            "audio" => Self::Audio {
                date: w.date()?,
                lesson: w.owned("lesson id")?,
                url: w.owned("url")?,
                seconds: {
                    let raw = w.next("duration")?;
                    raw.parse()
                        .map_err(|_| format!("invalid duration {raw:?}"))?
                },
            },
            "delete-audio" => Self::DeleteAudio {
                date: w.date()?,
                lesson: w.owned("lesson id")?,
            },
            "photo" => Self::Photo {
                date: w.date()?,
                lesson: w.owned("lesson id")?,
                url: w.owned("url")?,
            },
            "remove-photo" => Self::RemovePhoto {
                date: w.date()?,
                lesson: w.owned("lesson id")?,
                photo: w.owned("photo id")?,
            },
            "done" | "undo" => Self::Completed {
                date: w.date()?,
                lesson: w.owned("lesson id")?,
                completed: command == "done",
            },
            other => return Err(format!("unknown command {other:?} (try \"help\")")),
        };

        w.done()?;
        Ok(Some(parsed))
    }
}

/// Peel a leading `#color` word off a title.
fn split_color(title: String) -> (Option<String>, String) {
    match title.split_once(' ') {
        Some((first, rest)) if first.starts_with('#') => {
            (Some(first.to_string()), rest.to_string())
        }
        _ => (None, title),
    }
}

fn print_help() {
    println!("{HELP}");
    println!("revision colours: {}", REVISION_PALETTE.join(" "));
    println!("activity colours: {}", ACTIVITY_PALETTE.join(" "));
}

/// Apply one command. Returns `false` once the session should end.
fn execute(ctx: &mut Context, command: ShellCommand) -> Result<bool, Box<dyn std::error::Error>> {
    let session = &mut ctx.session;
    match command {
        ShellCommand::Help => print_help(),
        ShellCommand::Quit => return Ok(false),
        ShellCommand::Reset => {
            session.reset();
            println!("session reset");
        }
        ShellCommand::Day(day) => {
            println!("{}", day.name());
            print_blocks(&session.compile_day(day), &ctx.config.legend);
        }
        ShellCommand::Week(date) => {
            let week = WeekRange::containing(date.unwrap_or_else(today));
            let view = session.week_view(week, ctx.config.display.show_weekend);
            print_week(&view, &ctx.config.legend, ctx.config.display.show_percentages);
        }
        ShellCommand::Revisions(date) => print_revisions(session, date),
        ShellCommand::Lesson {
            day,
            start,
            end,
            revision_color,
            title,
        } => {
            let mut lesson = NewSchoolLesson::new(day, title, start, end);
            if let Some(color) = revision_color {
                lesson = lesson.with_revision_color(color);
            }
            println!("{}", session.add_lesson(lesson)?);
        }
        ShellCommand::Activity {
            day,
            start,
            end,
            color,
            title,
        } => {
            let mut activity = NewRecurringActivity::new(day, title, start, end);
            if let Some(color) = color {
                activity = activity.with_color(color);
            }
            println!("{}", session.add_activity(activity)?);
        }
        ShellCommand::Remove(id) => {
            let removed = session.remove_activity(&id)?;
            println!("removed {}", removed.title);
        }
        ShellCommand::Task {
            date,
            task_type,
            start,
            end,
            title,
        } => {
            let task = NewTask::new(date, title, start, end).with_type(task_type);
            println!("{}", session.add_task(task)?);
        }
        ShellCommand::RemoveTask(id) => {
            let removed = session.remove_task(&id)?;
            println!("removed {}", removed.title);
        }
        ShellCommand::Audio {
            date,
            lesson,
            url,
            seconds,
        } => {
            session.save_audio(date, &lesson, url, seconds)?;
            println!("ok");
        }
        ShellCommand::DeleteAudio { date, lesson } => {
            session.delete_audio(date, &lesson)?;
            println!("ok");
        }
        ShellCommand::Photo { date, lesson, url } => {
            println!("{}", session.add_photo(date, &lesson, url)?);
        }
        ShellCommand::RemovePhoto {
            date,
            lesson,
            photo,
        } => {
            session.remove_photo(date, &lesson, &photo)?;
            println!("ok");
        }
        ShellCommand::Completed {
            date,
            lesson,
            completed,
        } => {
            session.set_revision_completed(date, &lesson, completed)?;
            println!("ok");
        }
    }
    Ok(true)
}

pub fn run() -> CmdResult {
    let mut ctx = Context::load()?;
    let stdin = std::io::stdin();
    let interactive = stdin.is_terminal();

    if interactive {
        println!(
            "weekplan shell for {} ({}). Edits are not saved; type \"help\".",
            ctx.session.student().full_name(),
            ctx.source
        );
    }

    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            print!("> ");
            std::io::stdout().flush()?;
        }
        let Some(line) = lines.next() else { break };
        let line = line?;

        let command = match ShellCommand::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                eprintln!("error: {e}");
                continue;
            }
        };
        debug!(?command, "shell command");

        match execute(&mut ctx, command) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => eprintln!("error: {e}"),
        }
    }
    Ok(())
}
