//! # Weekplan Core Library
//!
//! This library provides the core logic for a student's weekly planner:
//! the school timetable, recurring out-of-school activities, dated homework
//! and per-subject revision notes. The `weekplan-cli` binary is a thin
//! layer over the same library.
//!
//! ## Architecture
//!
//! - **Timeline**: compiles a day's recurring activities into ordered,
//!   classified display blocks and places them in the day column
//! - **Schedule / Task / Revision**: the data model with copy-on-write
//!   collections for session edits
//! - **Storage**: TOML configuration and load-once JSON fixtures
//! - **Session**: the in-memory state a planner run works on
//!
//! ## Key Components
//!
//! - [`compile_day_schedule`]: the timeline compiler
//! - [`WeekView`]: the assembled week grid
//! - [`PlannerSession`]: session-held edits over the fixtures
//! - [`Config`]: application configuration management

pub mod dashboard;
pub mod error;
pub mod revision;
pub mod schedule;
pub mod session;
pub mod storage;
pub mod task;
pub mod timeline;
pub mod week;

pub use dashboard::{DayCard, PlacedBlock, PlacedTask, WeekView};
pub use error::{ConfigError, CoreError, ValidationError};
pub use revision::{AudioNote, RevisionBook, RevisionUpdate, SubjectPhoto, SubjectRevision};
pub use schedule::{
    ActivityLegend, ActivityList, ActivityStyle, DayOfWeek, NewRecurringActivity, NewSchoolLesson,
    RecurringActivity, SubjectIndex,
};
pub use session::PlannerSession;
pub use storage::{Config, FixtureSource, Fixtures, Student};
pub use task::{NewTask, Task, TaskList, TaskType};
pub use timeline::{compile_day_schedule, BlockKind, BlockPosition, TimeBlock};
pub use week::{MonthGrid, WeekRange};
