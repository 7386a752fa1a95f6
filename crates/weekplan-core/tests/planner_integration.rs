//! Integration tests: fixtures through session to the week grid.

use chrono::NaiveDate;
use indoc::indoc;
use tempfile::TempDir;
use weekplan_core::{
    compile_day_schedule, BlockKind, Config, DayOfWeek, FixtureSource, Fixtures,
    NewRecurringActivity, NewSchoolLesson, NewTask, PlannerSession, TimeBlock, WeekRange,
};

const SMALL_FIXTURES: &str = indoc! {r##"
    {
      "student": {
        "id": "stu_test",
        "firstName": "Tom",
        "lastName": "Durand",
        "class": "6eB",
        "school": "Collège Test",
        "dayStart": "08:00",
        "dayEnd": "18:00"
      },
      "schoolSchedule": [
        {"id": "s1", "dayOfWeek": 1, "title": "Maths", "timeStart": "09:00", "timeEnd": "10:00", "color": "#F5C842"},
        {"id": "s2", "dayOfWeek": 1, "title": "Français", "timeStart": "10:15", "timeEnd": "11:00", "color": "#F5C842"},
        {"id": "s3", "dayOfWeek": 1, "title": "Anglais", "timeStart": "11:40", "timeEnd": "12:00", "color": "#F5C842"}
      ],
      "recurringSchedule": [
        {"id": "r1", "dayOfWeek": 2, "title": "Renforcement", "timeStart": "14:00", "timeEnd": "15:00", "color": "#FFFFFF"},
        {"id": "r2", "dayOfWeek": 2, "title": "Musique", "timeStart": "16:00", "timeEnd": "17:00", "color": "#3498DB"}
      ],
      "tasks": [
        {"id": "t1", "date": "2025-11-04", "type": "evaluation", "title": "Contrôle", "timeStart": "17:00", "timeEnd": "18:00", "color": "#EF4444"}
      ]
    }
"##};

fn fixtures() -> Fixtures {
    Fixtures::from_json(SMALL_FIXTURES).unwrap()
}

fn week() -> WeekRange {
    WeekRange::containing(NaiveDate::from_ymd_opt(2025, 11, 5).unwrap())
}

#[test]
fn school_run_splits_on_forty_minute_break() {
    let session = PlannerSession::new(fixtures());
    assert_eq!(
        session.compile_day(DayOfWeek::MONDAY),
        vec![
            TimeBlock::new("09:00", "11:00", BlockKind::School),
            TimeBlock::new("11:40", "12:00", BlockKind::School),
        ]
    );
}

#[test]
fn tuesday_classification() {
    let session = PlannerSession::new(fixtures());
    assert_eq!(
        session.compile_day(DayOfWeek::TUESDAY),
        vec![
            TimeBlock::new("14:00", "15:00", BlockKind::Reinforcement),
            TimeBlock::new("16:00", "17:00", BlockKind::Other),
        ]
    );
    assert!(session.compile_day(DayOfWeek::SUNDAY).is_empty());
}

#[test]
fn twenty_minute_breaks_chain_into_one_block() {
    let activities: Vec<_> = ["08:00", "09:00", "10:00"]
        .iter()
        .enumerate()
        .map(|(i, start)| weekplan_core::RecurringActivity {
            id: format!("l{i}"),
            day_of_week: 4,
            title: "Maths".to_string(),
            time_start: start.to_string(),
            time_end: format!("{}:40", &start[..2]),
            color: "#F5C842".to_string(),
            revision_color: None,
        })
        .collect();
    assert_eq!(
        compile_day_schedule(DayOfWeek::THURSDAY, &activities),
        vec![TimeBlock::new("08:00", "10:40", BlockKind::School)]
    );
}

#[test]
fn session_edits_flow_into_week_view() {
    let mut session = PlannerSession::new(fixtures());

    session
        .add_lesson(NewSchoolLesson::new(DayOfWeek::MONDAY, "SVT", "11:00", "11:30"))
        .unwrap();
    session
        .add_activity(
            NewRecurringActivity::new(DayOfWeek::WEDNESDAY, "Répétiteur", "15:00", "16:00")
                .with_color("#E84C3D"),
        )
        .unwrap();
    session
        .add_task(NewTask::new(
            NaiveDate::from_ymd_opt(2025, 11, 5).unwrap(),
            "Exposé",
            "17:00",
            "18:00",
        ))
        .unwrap();

    let view = session.week_view(week(), false);
    let monday = view.day(DayOfWeek::MONDAY).unwrap();
    // The new lesson bridges the 40 minute break.
    assert_eq!(monday.blocks.len(), 1);
    assert_eq!(monday.blocks[0].block, TimeBlock::new("09:00", "12:00", BlockKind::School));
    assert_eq!(monday.load_percentage, 30);

    let wednesday = view.day(DayOfWeek::WEDNESDAY).unwrap();
    assert_eq!(wednesday.blocks[0].block.kind, BlockKind::Tutor);
    assert_eq!(wednesday.tasks.len(), 1);

    let tuesday = view.day(DayOfWeek::TUESDAY).unwrap();
    assert_eq!(tuesday.tasks[0].task.title, "Contrôle");
}

#[test]
fn known_subject_keeps_revision_colour() {
    let mut fixtures = fixtures();
    fixtures.school_schedule[0].revision_color = Some("#3498DB".to_string());
    let mut session = PlannerSession::new(fixtures);
    let id = session
        .add_lesson(NewSchoolLesson::new(DayOfWeek::FRIDAY, "Maths", "08:00", "09:00"))
        .unwrap();
    let lesson = session.timetable().get(&id).unwrap();
    assert_eq!(lesson.revision_color.as_deref(), Some("#3498DB"));
}

#[test]
fn fixtures_resolve_from_configured_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("planner.json");
    std::fs::write(&path, SMALL_FIXTURES).unwrap();

    let mut config = Config::default();
    config.data.fixtures_path = Some(path.to_string_lossy().into_owned());

    let (loaded, source) = Fixtures::resolve(&config).unwrap();
    assert_eq!(loaded.student.first_name, "Tom");
    assert_eq!(source, FixtureSource::File(path));
}

#[test]
fn edits_do_not_touch_fixture_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("planner.json");
    std::fs::write(&path, SMALL_FIXTURES).unwrap();

    let mut session = PlannerSession::new(Fixtures::load(&path).unwrap());
    session.remove_activity("s1").unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), SMALL_FIXTURES);
    assert_eq!(Fixtures::load(&path).unwrap().school_schedule.len(), 3);
}
