//! Week grid assembly.
//!
//! Compiles each visible day and attaches the geometry the grid needs:
//! block positions, per-block share of the day and the day's total load.

use chrono::NaiveDate;
use serde::Serialize;

use crate::schedule::{DayOfWeek, RecurringActivity};
use crate::storage::Student;
use crate::task::{Task, TaskList};
use crate::timeline::{
    calculate_block_position, calculate_percentage, compile_day_schedule, day_load_percentage,
    BlockPosition, TimeBlock,
};
use crate::week::{format_short_date, WeekRange};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedBlock {
    #[serde(flatten)]
    pub block: TimeBlock,
    pub position: BlockPosition,
    pub percentage: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedTask {
    #[serde(flatten)]
    pub task: Task,
    pub position: BlockPosition,
}

/// One column of the week grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayCard {
    pub day_of_week: DayOfWeek,
    pub name: &'static str,
    pub date: NaiveDate,
    pub short_date: String,
    pub blocks: Vec<PlacedBlock>,
    /// Sum of the rounded block percentages.
    pub load_percentage: i64,
    pub tasks: Vec<PlacedTask>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekView {
    pub week: WeekRange,
    pub label: String,
    pub day_start: String,
    pub day_end: String,
    pub days: Vec<DayCard>,
}

impl WeekView {
    pub fn build(
        week: WeekRange,
        activities: &[RecurringActivity],
        tasks: &TaskList,
        student: &Student,
        show_weekend: bool,
    ) -> Self {
        let (day_start, day_end) = (student.day_start.as_str(), student.day_end.as_str());

        let days = week
            .days(show_weekend)
            .into_iter()
            .map(|(day, date)| {
                let compiled = compile_day_schedule(day, activities);
                let load_percentage = day_load_percentage(&compiled, day_start, day_end);
                let blocks: Vec<_> = compiled
                    .into_iter()
                    .map(|block| PlacedBlock {
                        position: calculate_block_position(&block.start, &block.end, day_start, day_end),
                        percentage: calculate_percentage(&block.start, &block.end, day_start, day_end),
                        block,
                    })
                    .collect();

                let tasks = tasks
                    .for_date(date)
                    .into_iter()
                    .map(|task| PlacedTask {
                        position: calculate_block_position(
                            &task.time_start,
                            &task.time_end,
                            day_start,
                            day_end,
                        ),
                        task: task.clone(),
                    })
                    .collect();

                DayCard {
                    day_of_week: day,
                    name: day.name(),
                    date,
                    short_date: format_short_date(date),
                    blocks,
                    load_percentage,
                    tasks,
                }
            })
            .collect();

        Self {
            week,
            label: week.label(),
            day_start: student.day_start.clone(),
            day_end: student.day_end.clone(),
            days,
        }
    }

    pub fn day(&self, day: DayOfWeek) -> Option<&DayCard> {
        self.days.iter().find(|card| card.day_of_week == day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Fixtures;
    use crate::timeline::BlockKind;

    fn week() -> WeekRange {
        WeekRange::containing(NaiveDate::from_ymd_opt(2025, 11, 3).unwrap())
    }

    #[test]
    fn builds_weekday_columns() {
        let fixtures = Fixtures::builtin().unwrap();
        let activities: Vec<_> = fixtures
            .school_schedule
            .iter()
            .chain(&fixtures.recurring_schedule)
            .cloned()
            .collect();
        let view = WeekView::build(
            week(),
            &activities,
            &TaskList::new(fixtures.tasks.clone()),
            &fixtures.student,
            false,
        );

        assert_eq!(view.days.len(), 5);
        assert_eq!(view.label, "3 - 9 novembre 2025");

        let monday = view.day(DayOfWeek::MONDAY).unwrap();
        assert_eq!(monday.name, "Lundi");
        let kinds: Vec<_> = monday.blocks.iter().map(|b| b.block.kind).collect();
        assert_eq!(
            kinds,
            vec![BlockKind::School, BlockKind::School, BlockKind::Reinforcement]
        );
        assert_eq!(monday.tasks.len(), 1);
        assert_eq!(
            monday.load_percentage,
            monday.blocks.iter().map(|b| b.percentage).sum::<i64>()
        );
    }

    #[test]
    fn block_geometry_uses_student_window() {
        let student = Fixtures::builtin().unwrap().student;
        let activities = vec![RecurringActivity {
            id: "r".to_string(),
            day_of_week: 2,
            title: "Répétiteur".to_string(),
            time_start: "14:00".to_string(),
            time_end: "17:00".to_string(),
            color: "#E84C3D".to_string(),
            revision_color: None,
        }];
        let view = WeekView::build(week(), &activities, &TaskList::default(), &student, true);
        let tuesday = view.day(DayOfWeek::TUESDAY).unwrap();
        // 08:00-20:00 window: 14:00 is halfway, 3h is a quarter.
        assert_eq!(tuesday.blocks[0].position.top_percent, 50.0);
        assert_eq!(tuesday.blocks[0].percentage, 25);
        assert_eq!(tuesday.load_percentage, 25);
        assert!(view.day(DayOfWeek::MONDAY).unwrap().blocks.is_empty());
        assert_eq!(view.days.len(), 7);
    }

    #[test]
    fn serializes_block_type_inline() {
        let student = Fixtures::builtin().unwrap().student;
        let view = WeekView::build(week(), &[], &TaskList::default(), &student, false);
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["days"][0]["name"], "Lundi");
        assert_eq!(json["days"][0]["dayOfWeek"], 1);
        assert_eq!(json["days"][0]["loadPercentage"], 0);
    }
}
