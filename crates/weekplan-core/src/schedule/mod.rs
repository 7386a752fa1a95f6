//! Weekly recurring activities: school lessons and extracurriculars.
//!
//! Activities are keyed by day of week rather than date; the same list
//! produces every week of the year.

pub(crate) mod activities;

pub use activities::{ActivityList, NewRecurringActivity, NewSchoolLesson, SubjectIndex};

use std::cmp::Ordering;
use std::fmt;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::timeline::{time_to_minutes, BlockKind};

/// Colours offered for a subject's revision cards.
pub const REVISION_PALETTE: [&str; 8] = [
    "#F5C842", "#E84C3D", "#3498DB", "#9B59B6", "#E67E22", "#2ECC71", "#1ABC9C", "#F39C12",
];

/// Colours offered for extracurricular activities.
pub const ACTIVITY_PALETTE: [&str; 8] = [
    "#F5C842", "#E84C3D", "#ffffff", "#3B82F6", "#8B5CF6", "#EC4899", "#10B981", "#06B6D4",
];

const DAY_NAMES: [&str; 7] = [
    "Lundi", "Mardi", "Mercredi", "Jeudi", "Vendredi", "Samedi", "Dimanche",
];

/// Day of the week, 1 = Monday through 7 = Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DayOfWeek(u8);

impl DayOfWeek {
    pub const MONDAY: DayOfWeek = DayOfWeek(1);
    pub const TUESDAY: DayOfWeek = DayOfWeek(2);
    pub const WEDNESDAY: DayOfWeek = DayOfWeek(3);
    pub const THURSDAY: DayOfWeek = DayOfWeek(4);
    pub const FRIDAY: DayOfWeek = DayOfWeek(5);
    pub const SATURDAY: DayOfWeek = DayOfWeek(6);
    pub const SUNDAY: DayOfWeek = DayOfWeek(7);

    pub fn new(number: u8) -> Result<Self, ValidationError> {
        if (1..=7).contains(&number) {
            Ok(Self(number))
        } else {
            Err(ValidationError::InvalidDayOfWeek(number))
        }
    }

    pub fn number(&self) -> u8 {
        self.0
    }

    /// All seven days, Monday first.
    pub fn all() -> impl Iterator<Item = DayOfWeek> {
        (1..=7).map(DayOfWeek)
    }

    /// French day name ("Lundi").
    pub fn name(&self) -> &'static str {
        DAY_NAMES[usize::from(self.0 - 1)]
    }

    /// Three-letter French abbreviation ("Lun").
    pub fn short_name(&self) -> &'static str {
        &self.name()[..3]
    }

    pub fn is_weekend(&self) -> bool {
        self.0 >= 6
    }

    pub fn of_date(date: NaiveDate) -> Self {
        Self::from(date.weekday())
    }
}

impl From<Weekday> for DayOfWeek {
    fn from(weekday: Weekday) -> Self {
        Self(weekday.number_from_monday() as u8)
    }
}

impl TryFrom<u8> for DayOfWeek {
    type Error = ValidationError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Self::new(number)
    }
}

impl From<DayOfWeek> for u8 {
    fn from(day: DayOfWeek) -> Self {
        day.0
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A weekly-repeating activity on one day of the week.
///
/// `day_of_week` is kept as the raw number from the data source; values
/// outside 1..=7 simply never match a day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurringActivity {
    pub id: String,
    pub day_of_week: u8,
    pub title: String,
    pub time_start: String,
    pub time_end: String,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision_color: Option<String>,
}

impl RecurringActivity {
    pub fn is_on(&self, day: DayOfWeek) -> bool {
        self.day_of_week == day.number()
    }

    /// Colour used on revision cards: the revision colour when set.
    pub fn display_color(&self) -> &str {
        self.revision_color.as_deref().unwrap_or(&self.color)
    }
}

/// Activities of `day`, sorted by start time.
///
/// Ordering is by clock value, with malformed times last. Ties are broken
/// on end time and then on the remaining fields, so the result does not
/// depend on the order of `activities`.
pub fn activities_for_day(day: DayOfWeek, activities: &[RecurringActivity]) -> Vec<&RecurringActivity> {
    let mut filtered: Vec<_> = activities.iter().filter(|a| a.is_on(day)).collect();
    filtered.sort_by(|a, b| compare_by_time(a, b));
    filtered
}

fn compare_by_time(a: &RecurringActivity, b: &RecurringActivity) -> Ordering {
    sort_key(&a.time_start)
        .total_cmp(&sort_key(&b.time_start))
        .then_with(|| sort_key(&a.time_end).total_cmp(&sort_key(&b.time_end)))
        .then_with(|| a.title.cmp(&b.title))
        .then_with(|| a.color.cmp(&b.color))
        .then_with(|| a.id.cmp(&b.id))
}

fn sort_key(time: &str) -> f64 {
    let minutes = time_to_minutes(time);
    if minutes.is_nan() {
        f64::INFINITY
    } else {
        minutes
    }
}

/// Label and colours used to draw one kind of block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityStyle {
    pub label: String,
    pub color: String,
    pub text_color: String,
}

impl ActivityStyle {
    fn new(label: &str, color: &str, text_color: &str) -> Self {
        Self {
            label: label.to_string(),
            color: color.to_string(),
            text_color: text_color.to_string(),
        }
    }
}

/// Legend of block styles, one entry per [`BlockKind`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityLegend {
    #[serde(default = "default_school_style")]
    pub school: ActivityStyle,
    #[serde(default = "default_reinforcement_style")]
    pub reinforcement: ActivityStyle,
    #[serde(default = "default_tutor_style")]
    pub tutor: ActivityStyle,
    #[serde(default = "default_other_style")]
    pub other: ActivityStyle,
}

fn default_school_style() -> ActivityStyle {
    ActivityStyle::new("École", "#F5C842", "#000000")
}
fn default_reinforcement_style() -> ActivityStyle {
    ActivityStyle::new("Renforcement", "#FFFFFF", "#000000")
}
fn default_tutor_style() -> ActivityStyle {
    ActivityStyle::new("Répétiteur", "#E84C3D", "#FFFFFF")
}
fn default_other_style() -> ActivityStyle {
    ActivityStyle::new("Autre", "#3B82F6", "#FFFFFF")
}

impl Default for ActivityLegend {
    fn default() -> Self {
        Self {
            school: default_school_style(),
            reinforcement: default_reinforcement_style(),
            tutor: default_tutor_style(),
            other: default_other_style(),
        }
    }
}

impl ActivityLegend {
    pub fn style(&self, kind: BlockKind) -> &ActivityStyle {
        match kind {
            BlockKind::School => &self.school,
            BlockKind::Reinforcement => &self.reinforcement,
            BlockKind::Tutor => &self.tutor,
            BlockKind::Other => &self.other,
        }
    }

    /// Entries in display order.
    pub fn entries(&self) -> impl Iterator<Item = (BlockKind, &ActivityStyle)> {
        BlockKind::ALL.into_iter().map(move |kind| (kind, self.style(kind)))
    }
}
