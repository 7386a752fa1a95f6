//! Recurring activities to display blocks.
//!
//! A day's activities are sorted by start time and walked once. Runs of
//! school lessons separated by short breaks collapse into one `school`
//! block; everything else becomes one block classified by its title.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::clock::time_to_minutes;
use crate::schedule::{activities_for_day, DayOfWeek, RecurringActivity};

/// Colour reserved for school timetable lessons.
pub const SCHOOL_MARKER_COLOR: &str = "#F5C842";

/// Title of a reinforcement session.
pub const REINFORCEMENT_TITLE: &str = "Renforcement";

/// Title of a tutoring session.
pub const TUTOR_TITLE: &str = "Répétiteur";

/// Largest break (minutes) between two lessons that still joins them.
pub const MAX_SCHOOL_GAP_MINUTES: f64 = 30.0;

/// Semantic category of a display block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    School,
    Reinforcement,
    Tutor,
    Other,
}

impl BlockKind {
    pub const ALL: [BlockKind; 4] = [
        BlockKind::School,
        BlockKind::Reinforcement,
        BlockKind::Tutor,
        BlockKind::Other,
    ];

    /// Classify a non-school activity by its exact title.
    pub fn from_title(title: &str) -> Self {
        match title {
            REINFORCEMENT_TITLE => Self::Reinforcement,
            TUTOR_TITLE => Self::Tutor,
            _ => Self::Other,
        }
    }
}

/// A classified interval ready for layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeBlock {
    pub start: String,
    pub end: String,
    #[serde(rename = "type")]
    pub kind: BlockKind,
}

impl TimeBlock {
    pub fn new(start: impl Into<String>, end: impl Into<String>, kind: BlockKind) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            kind,
        }
    }
}

impl RecurringActivity {
    /// Whether this activity carries the school marker colour.
    pub fn is_school_lesson(&self) -> bool {
        self.color == SCHOOL_MARKER_COLOR
    }
}

/// Compile one day of the week into ordered display blocks.
///
/// Activities for other days are ignored. A day without activities yields an
/// empty vector. Times are expected to be "HH:MM"; malformed values are not
/// rejected, they sort last and never join a school run. Overlapping
/// intervals are passed through as-is.
pub fn compile_day_schedule(day: DayOfWeek, activities: &[RecurringActivity]) -> Vec<TimeBlock> {
    let sorted = activities_for_day(day, activities);
    let mut blocks = Vec::with_capacity(sorted.len());
    let mut iter = sorted.into_iter().peekable();

    while let Some(activity) = iter.next() {
        if !activity.is_school_lesson() {
            blocks.push(TimeBlock::new(
                activity.time_start.as_str(),
                activity.time_end.as_str(),
                BlockKind::from_title(&activity.title),
            ));
            continue;
        }

        let mut end = activity.time_end.as_str();
        while let Some(next) =
            iter.next_if(|next| next.is_school_lesson() && joins_run(end, &next.time_start))
        {
            // A lesson nested in the run never pulls its edge back.
            if time_to_minutes(&next.time_end) > time_to_minutes(end) {
                end = next.time_end.as_str();
            }
        }
        blocks.push(TimeBlock::new(
            activity.time_start.as_str(),
            end,
            BlockKind::School,
        ));
    }

    trace!(day = day.number(), blocks = blocks.len(), "compiled day schedule");
    blocks
}

/// The gap is measured from the run's current right edge.
fn joins_run(run_end: &str, next_start: &str) -> bool {
    time_to_minutes(next_start) - time_to_minutes(run_end) <= MAX_SCHOOL_GAP_MINUTES
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activity(day: u8, start: &str, end: &str, title: &str, color: &str) -> RecurringActivity {
        RecurringActivity {
            id: format!("{day}-{start}-{title}"),
            day_of_week: day,
            title: title.to_string(),
            time_start: start.to_string(),
            time_end: end.to_string(),
            color: color.to_string(),
            revision_color: None,
        }
    }

    fn lesson(start: &str, end: &str) -> RecurringActivity {
        activity(1, start, end, "Maths", SCHOOL_MARKER_COLOR)
    }

    fn monday() -> DayOfWeek {
        DayOfWeek::MONDAY
    }

    #[test]
    fn empty_day_yields_no_blocks() {
        let activities = vec![activity(2, "09:00", "10:00", "Maths", SCHOOL_MARKER_COLOR)];
        assert!(compile_day_schedule(monday(), &activities).is_empty());
        assert!(compile_day_schedule(monday(), &[]).is_empty());
    }

    #[test]
    fn splits_school_run_on_long_break() {
        let activities = vec![
            lesson("09:00", "10:00"),
            lesson("10:15", "11:00"),
            lesson("11:40", "12:00"),
        ];
        let blocks = compile_day_schedule(monday(), &activities);
        assert_eq!(
            blocks,
            vec![
                TimeBlock::new("09:00", "11:00", BlockKind::School),
                TimeBlock::new("11:40", "12:00", BlockKind::School),
            ]
        );
    }

    #[test]
    fn gap_is_measured_from_running_end() {
        let activities = vec![
            lesson("08:00", "08:40"),
            lesson("09:00", "09:40"),
            lesson("10:00", "10:40"),
        ];
        let blocks = compile_day_schedule(monday(), &activities);
        assert_eq!(blocks, vec![TimeBlock::new("08:00", "10:40", BlockKind::School)]);
    }

    #[test]
    fn exactly_thirty_minutes_still_joins() {
        let activities = vec![lesson("08:00", "09:00"), lesson("09:30", "10:00")];
        let blocks = compile_day_schedule(monday(), &activities);
        assert_eq!(blocks, vec![TimeBlock::new("08:00", "10:00", BlockKind::School)]);
    }

    #[test]
    fn thirty_one_minutes_splits() {
        let activities = vec![lesson("08:00", "09:00"), lesson("09:31", "10:00")];
        assert_eq!(compile_day_schedule(monday(), &activities).len(), 2);
    }

    #[test]
    fn classifies_by_exact_title() {
        let activities = vec![
            activity(3, "14:00", "15:00", "Renforcement", "#FFFFFF"),
            activity(3, "16:00", "17:00", "Musique", "#3498DB"),
            activity(3, "17:00", "18:00", "Répétiteur", "#E84C3D"),
            activity(3, "18:00", "19:00", "renforcement", "#FFFFFF"),
        ];
        let kinds: Vec<_> = compile_day_schedule(DayOfWeek::WEDNESDAY, &activities)
            .into_iter()
            .map(|b| b.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                BlockKind::Reinforcement,
                BlockKind::Other,
                BlockKind::Tutor,
                BlockKind::Other,
            ]
        );
    }

    #[test]
    fn school_colour_wins_over_title() {
        let activities = vec![activity(1, "09:00", "10:00", "Renforcement", SCHOOL_MARKER_COLOR)];
        let blocks = compile_day_schedule(monday(), &activities);
        assert_eq!(blocks[0].kind, BlockKind::School);
    }

    #[test]
    fn colour_match_is_exact() {
        let activities = vec![
            lesson("09:00", "10:00"),
            activity(1, "10:00", "11:00", "Maths", "#f5c842"),
        ];
        let blocks = compile_day_schedule(monday(), &activities);
        assert_eq!(
            blocks,
            vec![
                TimeBlock::new("09:00", "10:00", BlockKind::School),
                TimeBlock::new("10:00", "11:00", BlockKind::Other),
            ]
        );
    }

    #[test]
    fn other_activity_breaks_school_run() {
        let activities = vec![
            lesson("09:00", "10:00"),
            activity(1, "10:00", "10:15", "Musique", "#3498DB"),
            lesson("10:15", "11:00"),
        ];
        let kinds: Vec<_> = compile_day_schedule(monday(), &activities)
            .into_iter()
            .map(|b| b.kind)
            .collect();
        assert_eq!(kinds, vec![BlockKind::School, BlockKind::Other, BlockKind::School]);
    }

    #[test]
    fn sorts_unordered_input() {
        let activities = vec![
            activity(1, "16:00", "17:00", "Répétiteur", "#E84C3D"),
            lesson("10:00", "11:00"),
            lesson("08:00", "09:50"),
        ];
        let blocks = compile_day_schedule(monday(), &activities);
        assert_eq!(
            blocks,
            vec![
                TimeBlock::new("08:00", "11:00", BlockKind::School),
                TimeBlock::new("16:00", "17:00", BlockKind::Tutor),
            ]
        );
    }

    #[test]
    fn nested_lesson_keeps_latest_end() {
        let activities = vec![lesson("09:00", "12:00"), lesson("10:00", "10:30")];
        assert_eq!(
            compile_day_schedule(monday(), &activities),
            vec![TimeBlock::new("09:00", "12:00", BlockKind::School)]
        );
    }

    #[test]
    fn gap_after_nested_lesson_uses_outer_end() {
        // 12:20 is 20 minutes after the run's real edge, not 110 after 10:30.
        let activities = vec![
            lesson("09:00", "12:00"),
            lesson("10:00", "10:30"),
            lesson("12:20", "13:00"),
        ];
        assert_eq!(
            compile_day_schedule(monday(), &activities),
            vec![TimeBlock::new("09:00", "13:00", BlockKind::School)]
        );
    }

    #[test]
    fn overlapping_activities_pass_through() {
        let activities = vec![
            activity(1, "17:00", "18:00", "Musique", "#3498DB"),
            activity(1, "17:30", "18:30", "Judo", "#10B981"),
        ];
        let blocks = compile_day_schedule(monday(), &activities);
        assert_eq!(
            blocks,
            vec![
                TimeBlock::new("17:00", "18:00", BlockKind::Other),
                TimeBlock::new("17:30", "18:30", BlockKind::Other),
            ]
        );
    }

    #[test]
    fn malformed_time_sorts_last_and_stays_alone() {
        let activities = vec![lesson("nope", "10:00"), lesson("08:00", "09:00")];
        let blocks = compile_day_schedule(monday(), &activities);
        assert_eq!(
            blocks,
            vec![
                TimeBlock::new("08:00", "09:00", BlockKind::School),
                TimeBlock::new("nope", "10:00", BlockKind::School),
            ]
        );
    }

    #[test]
    fn block_kind_serializes_as_type() {
        let json = serde_json::to_value(TimeBlock::new("09:00", "10:00", BlockKind::Tutor)).unwrap();
        assert_eq!(json["type"], "tutor");
        assert_eq!(json["start"], "09:00");
    }
}
