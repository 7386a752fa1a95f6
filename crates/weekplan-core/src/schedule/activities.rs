//! Session-held activity collections and the builders that feed them.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{activities_for_day, DayOfWeek, RecurringActivity, ACTIVITY_PALETTE};
use crate::error::ValidationError;
use crate::timeline::{is_valid_time, SCHOOL_MARKER_COLOR};

/// An owned list of recurring activities.
///
/// Updates never touch `self`; `add` and `remove` hand back a new list so a
/// caller can keep compiling from the previous snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityList {
    activities: Vec<RecurringActivity>,
}

impl ActivityList {
    pub fn new(activities: Vec<RecurringActivity>) -> Self {
        Self { activities }
    }

    pub fn as_slice(&self) -> &[RecurringActivity] {
        &self.activities
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&RecurringActivity> {
        self.activities.iter().find(|a| a.id == id)
    }

    #[must_use]
    pub fn add(&self, activity: RecurringActivity) -> Self {
        let mut activities = self.activities.clone();
        activities.push(activity);
        Self { activities }
    }

    /// Drop every activity with `id`; unknown ids leave the list unchanged.
    #[must_use]
    pub fn remove(&self, id: &str) -> Self {
        Self {
            activities: self
                .activities
                .iter()
                .filter(|a| a.id != id)
                .cloned()
                .collect(),
        }
    }

    /// The day's activities sorted by start time.
    pub fn for_day(&self, day: DayOfWeek) -> Vec<&RecurringActivity> {
        activities_for_day(day, &self.activities)
    }

    pub fn count_for_day(&self, day: DayOfWeek) -> usize {
        self.activities.iter().filter(|a| a.is_on(day)).count()
    }

    pub fn subjects(&self) -> SubjectIndex {
        SubjectIndex::from_activities(&self.activities)
    }
}

impl From<Vec<RecurringActivity>> for ActivityList {
    fn from(activities: Vec<RecurringActivity>) -> Self {
        Self::new(activities)
    }
}

/// Known subject titles with the revision colour of their first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubjectIndex {
    subjects: IndexMap<String, String>,
}

impl SubjectIndex {
    pub fn from_activities(activities: &[RecurringActivity]) -> Self {
        let mut subjects = IndexMap::new();
        for activity in activities {
            subjects
                .entry(activity.title.clone())
                .or_insert_with(|| activity.display_color().to_string());
        }
        Self { subjects }
    }

    pub fn color_of(&self, title: &str) -> Option<&str> {
        self.subjects.get(title).map(String::as_str)
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.subjects.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.subjects.iter().map(|(t, c)| (t.as_str(), c.as_str()))
    }

    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }
}

/// Form data for a school timetable lesson.
#[derive(Debug, Clone, Default)]
pub struct NewSchoolLesson {
    pub day: Option<DayOfWeek>,
    pub title: String,
    pub time_start: String,
    pub time_end: String,
    pub revision_color: Option<String>,
}

impl NewSchoolLesson {
    pub fn new(
        day: DayOfWeek,
        title: impl Into<String>,
        time_start: impl Into<String>,
        time_end: impl Into<String>,
    ) -> Self {
        Self {
            day: Some(day),
            title: title.into(),
            time_start: time_start.into(),
            time_end: time_end.into(),
            revision_color: None,
        }
    }

    pub fn with_revision_color(mut self, color: impl Into<String>) -> Self {
        self.revision_color = Some(color.into());
        self
    }

    /// Build the lesson, carrying the school marker colour.
    ///
    /// Without an explicit revision colour, a known subject keeps its
    /// colour and a new one gets the marker colour.
    pub fn build(self, known: &SubjectIndex) -> Result<RecurringActivity, ValidationError> {
        let day = self.day.ok_or(ValidationError::MissingField("day"))?;
        let title = required("title", &self.title)?;
        check_times(&self.time_start, &self.time_end)?;

        let revision_color = match self.revision_color {
            Some(color) => check_color("revision_color", color)?,
            None => known
                .color_of(&title)
                .unwrap_or(SCHOOL_MARKER_COLOR)
                .to_string(),
        };

        Ok(RecurringActivity {
            id: format!("sch_{}", Uuid::new_v4()),
            day_of_week: day.number(),
            title,
            time_start: self.time_start,
            time_end: self.time_end,
            color: SCHOOL_MARKER_COLOR.to_string(),
            revision_color: Some(revision_color),
        })
    }
}

/// Form data for an extracurricular recurring activity.
#[derive(Debug, Clone)]
pub struct NewRecurringActivity {
    pub day: DayOfWeek,
    pub title: String,
    pub time_start: String,
    pub time_end: String,
    pub color: String,
}

impl NewRecurringActivity {
    pub fn new(
        day: DayOfWeek,
        title: impl Into<String>,
        time_start: impl Into<String>,
        time_end: impl Into<String>,
    ) -> Self {
        Self {
            day,
            title: title.into(),
            time_start: time_start.into(),
            time_end: time_end.into(),
            color: ACTIVITY_PALETTE[0].to_string(),
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn build(self) -> Result<RecurringActivity, ValidationError> {
        let title = required("title", &self.title)?;
        check_times(&self.time_start, &self.time_end)?;
        let color = check_color("color", self.color)?;

        Ok(RecurringActivity {
            id: format!("act_{}", Uuid::new_v4()),
            day_of_week: self.day.number(),
            title,
            time_start: self.time_start,
            time_end: self.time_end,
            color,
            revision_color: None,
        })
    }
}

pub(crate) fn required(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(value.to_string())
    }
}

pub(crate) fn check_times(start: &str, end: &str) -> Result<(), ValidationError> {
    for (field, value) in [("time_start", start), ("time_end", end)] {
        if value.trim().is_empty() {
            return Err(ValidationError::MissingField(field));
        }
        if !is_valid_time(value) {
            return Err(ValidationError::InvalidTime {
                field,
                value: value.to_string(),
            });
        }
    }
    Ok(())
}

pub(crate) fn check_color(field: &'static str, value: String) -> Result<String, ValidationError> {
    let hex = value.strip_prefix('#').unwrap_or("");
    if matches!(hex.len(), 3 | 6) && hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        Ok(value)
    } else {
        Err(ValidationError::InvalidColor { field, value })
    }
}
