pub mod calendar;
pub mod completions;
pub mod config;
pub mod data;
pub mod day;
pub mod revisions;
pub mod shell;
pub mod subjects;
pub mod tasks;
pub mod timetable;
pub mod week;

use chrono::{Local, NaiveDate};
use tracing::debug;
use weekplan_core::{Config, FixtureSource, Fixtures, PlannerSession};

pub type CmdResult = Result<(), Box<dyn std::error::Error>>;

/// Everything a command needs: the config and a fresh session.
pub struct Context {
    pub config: Config,
    pub session: PlannerSession,
    pub source: FixtureSource,
}

impl Context {
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        let config = Config::load()?;
        let (fixtures, source) = Fixtures::resolve(&config)?;
        debug!(%source, "fixtures resolved");
        Ok(Self {
            config,
            session: PlannerSession::new(fixtures),
            source,
        })
    }
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
