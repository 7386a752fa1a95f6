//! Static planner data: the student, the timetables and the week's tasks.
//!
//! Fixtures are read once at startup and never written back. Edits made
//! during a session live in [`crate::session::PlannerSession`] only.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{data_dir, Config};
use crate::error::{CoreError, Result};
use crate::schedule::RecurringActivity;
use crate::task::Task;

const BUILTIN_FIXTURES: &str = include_str!("../../data/fixtures.json");

/// The student whose week is planned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(rename = "class")]
    pub class_name: String,
    pub school: String,
    /// Top of the day column, "HH:MM".
    pub day_start: String,
    /// Bottom of the day column, "HH:MM".
    pub day_end: String,
}

impl Student {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Where the fixtures of a run came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixtureSource {
    Builtin,
    File(PathBuf),
}

impl fmt::Display for FixtureSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin => f.write_str("built-in"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fixtures {
    pub student: Student,
    /// School lessons, all carrying the school marker colour.
    #[serde(default)]
    pub school_schedule: Vec<RecurringActivity>,
    /// Reinforcement, tutoring and other out-of-school activities.
    #[serde(default)]
    pub recurring_schedule: Vec<RecurringActivity>,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Fixtures {
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_FIXTURES)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| CoreError::Fixture(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| CoreError::Fixture(format!("{}: {e}", path.display())))?;
        let fixtures: Self = serde_json::from_str(&content)
            .map_err(|e| CoreError::Fixture(format!("{}: {e}", path.display())))?;
        debug!(
            path = %path.display(),
            lessons = fixtures.school_schedule.len(),
            activities = fixtures.recurring_schedule.len(),
            tasks = fixtures.tasks.len(),
            "loaded fixtures"
        );
        Ok(fixtures)
    }

    /// Default location of the fixture file.
    pub fn default_path() -> Result<PathBuf> {
        Ok(data_dir()?.join("fixtures.json"))
    }

    /// Pick the fixtures for this run.
    ///
    /// An explicit `data.fixtures_path` must load. Otherwise the data
    /// directory's `fixtures.json` is used when present, then the built-in set.
    pub fn resolve(config: &Config) -> Result<(Self, FixtureSource)> {
        let explicit = config.data.fixtures_path.as_deref().filter(|p| !p.is_empty());
        if let Some(path) = explicit {
            let path = PathBuf::from(path);
            return Ok((Self::load(&path)?, FixtureSource::File(path)));
        }

        let path = Self::default_path()?;
        if path.exists() {
            return Ok((Self::load(&path)?, FixtureSource::File(path)));
        }

        info!("no fixture file found, using built-in data");
        Ok((Self::builtin()?, FixtureSource::Builtin))
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
