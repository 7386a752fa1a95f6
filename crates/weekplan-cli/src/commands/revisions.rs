use chrono::NaiveDate;
use clap::Args;
use weekplan_core::revision::format_duration;
use weekplan_core::week::format_long_date;
use weekplan_core::PlannerSession;

use super::{today, CmdResult, Context};

#[derive(Args)]
pub struct RevisionsArgs {
    /// Date to revise for (default: today)
    #[arg(long)]
    date: Option<NaiveDate>,
}

pub fn run(args: RevisionsArgs) -> CmdResult {
    let ctx = Context::load()?;
    print_revisions(&ctx.session, args.date.unwrap_or_else(today));
    Ok(())
}

pub fn print_revisions(session: &PlannerSession, date: NaiveDate) {
    println!("Révisions du {}", format_long_date(date));

    let subjects = session.subjects_for_date(date);
    if subjects.is_empty() {
        println!("  pas de cours ce jour-là");
        return;
    }

    for subject in subjects {
        let revision = session.revisions().get(date, &subject.id);
        let mark = if revision.is_some_and(|r| r.completed) { "x" } else { " " };
        println!(
            "  [{mark}] {}-{}  {}  ({})",
            subject.time_start, subject.time_end, subject.title, subject.id
        );

        let Some(revision) = revision else { continue };
        if let Some(audio) = &revision.audio {
            println!("        audio {} ({})", audio.url, format_duration(audio.duration_secs));
        }
        for photo in &revision.photos {
            println!("        photo {} ({})", photo.url, photo.id);
        }
    }
}
