use super::{CmdResult, Context};

pub fn run() -> CmdResult {
    let ctx = Context::load()?;
    let subjects = ctx.session.subjects();
    if subjects.is_empty() {
        println!("no subjects in the timetable");
        return Ok(());
    }
    for (title, color) in subjects.iter() {
        println!("{color}  {title}");
    }
    Ok(())
}
