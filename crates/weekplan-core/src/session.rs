//! In-memory planner session.
//!
//! A session starts from the loaded fixtures and accumulates the parent's
//! and student's edits. Every edit swaps a collection for the new one
//! returned by its copy-on-write update; nothing is written to disk.

use chrono::NaiveDate;
use tracing::debug;

use crate::dashboard::WeekView;
use crate::error::ValidationError;
use crate::revision::{subjects_for_date, RevisionBook, SubjectPhoto};
use crate::schedule::{
    ActivityList, DayOfWeek, NewRecurringActivity, NewSchoolLesson, RecurringActivity, SubjectIndex,
};
use crate::storage::{Fixtures, Student};
use crate::task::{NewTask, Task, TaskList};
use crate::timeline::{compile_day_schedule, TimeBlock};
use crate::week::WeekRange;

pub struct PlannerSession {
    fixtures: Fixtures,
    timetable: ActivityList,
    extracurricular: ActivityList,
    tasks: TaskList,
    revisions: RevisionBook,
}

impl PlannerSession {
    pub fn new(fixtures: Fixtures) -> Self {
        Self {
            timetable: ActivityList::new(fixtures.school_schedule.clone()),
            extracurricular: ActivityList::new(fixtures.recurring_schedule.clone()),
            tasks: TaskList::new(fixtures.tasks.clone()),
            revisions: RevisionBook::new(),
            fixtures,
        }
    }

    pub fn student(&self) -> &Student {
        &self.fixtures.student
    }

    pub fn timetable(&self) -> &ActivityList {
        &self.timetable
    }

    pub fn extracurricular(&self) -> &ActivityList {
        &self.extracurricular
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub fn revisions(&self) -> &RevisionBook {
        &self.revisions
    }

    pub fn subjects(&self) -> SubjectIndex {
        self.timetable.subjects()
    }

    /// School lessons followed by extracurricular activities.
    pub fn all_activities(&self) -> Vec<RecurringActivity> {
        self.timetable
            .as_slice()
            .iter()
            .chain(self.extracurricular.as_slice())
            .cloned()
            .collect()
    }

    pub fn compile_day(&self, day: DayOfWeek) -> Vec<TimeBlock> {
        compile_day_schedule(day, &self.all_activities())
    }

    pub fn week_view(&self, week: WeekRange, show_weekend: bool) -> WeekView {
        WeekView::build(
            week,
            &self.all_activities(),
            &self.tasks,
            self.student(),
            show_weekend,
        )
    }

    pub fn subjects_for_date(&self, date: NaiveDate) -> Vec<&RecurringActivity> {
        subjects_for_date(date, self.timetable.as_slice())
    }

    /// Add a school lesson; returns its id.
    pub fn add_lesson(&mut self, lesson: NewSchoolLesson) -> Result<String, ValidationError> {
        let activity = lesson.build(&self.subjects())?;
        let id = activity.id.clone();
        debug!(%id, title = %activity.title, day = activity.day_of_week, "lesson added");
        self.timetable = self.timetable.add(activity);
        Ok(id)
    }

    /// Add an extracurricular activity; returns its id.
    pub fn add_activity(&mut self, activity: NewRecurringActivity) -> Result<String, ValidationError> {
        let activity = activity.build()?;
        let id = activity.id.clone();
        debug!(%id, title = %activity.title, day = activity.day_of_week, "activity added");
        self.extracurricular = self.extracurricular.add(activity);
        Ok(id)
    }

    /// Remove a lesson or extracurricular activity by id.
    pub fn remove_activity(&mut self, id: &str) -> Result<RecurringActivity, ValidationError> {
        if let Some(found) = self.timetable.get(id).cloned() {
            self.timetable = self.timetable.remove(id);
            debug!(id, "lesson removed");
            return Ok(found);
        }
        if let Some(found) = self.extracurricular.get(id).cloned() {
            self.extracurricular = self.extracurricular.remove(id);
            debug!(id, "activity removed");
            return Ok(found);
        }
        Err(ValidationError::NotFound {
            kind: "activity",
            id: id.to_string(),
        })
    }

    pub fn add_task(&mut self, task: NewTask) -> Result<String, ValidationError> {
        let task = task.build()?;
        let id = task.id.clone();
        debug!(%id, date = %task.date, "task added");
        self.tasks = self.tasks.add(task);
        Ok(id)
    }

    pub fn remove_task(&mut self, id: &str) -> Result<Task, ValidationError> {
        let found = self
            .tasks
            .get(id)
            .cloned()
            .ok_or_else(|| ValidationError::NotFound {
                kind: "task",
                id: id.to_string(),
            })?;
        self.tasks = self.tasks.remove(id);
        debug!(id, "task removed");
        Ok(found)
    }

    pub fn save_audio(
        &mut self,
        date: NaiveDate,
        activity_id: &str,
        url: impl Into<String>,
        duration_secs: u64,
    ) -> Result<(), ValidationError> {
        self.revisions = self.revisions.save_audio(
            date,
            activity_id,
            self.timetable.as_slice(),
            url,
            duration_secs,
        )?;
        Ok(())
    }

    pub fn delete_audio(&mut self, date: NaiveDate, activity_id: &str) -> Result<(), ValidationError> {
        self.revisions = self
            .revisions
            .delete_audio(date, activity_id, self.timetable.as_slice())?;
        Ok(())
    }

    /// Attach a notebook photo; returns the photo id.
    pub fn add_photo(
        &mut self,
        date: NaiveDate,
        activity_id: &str,
        url: impl Into<String>,
    ) -> Result<String, ValidationError> {
        let photo = SubjectPhoto::new(url);
        let photo_id = photo.id.clone();
        self.revisions = self
            .revisions
            .add_photo(date, activity_id, self.timetable.as_slice(), photo)?;
        Ok(photo_id)
    }

    pub fn remove_photo(
        &mut self,
        date: NaiveDate,
        activity_id: &str,
        photo_id: &str,
    ) -> Result<(), ValidationError> {
        self.revisions =
            self.revisions
                .remove_photo(date, activity_id, self.timetable.as_slice(), photo_id)?;
        Ok(())
    }

    pub fn set_revision_completed(
        &mut self,
        date: NaiveDate,
        activity_id: &str,
        completed: bool,
    ) -> Result<(), ValidationError> {
        self.revisions = self.revisions.set_completed(
            date,
            activity_id,
            self.timetable.as_slice(),
            completed,
        )?;
        Ok(())
    }

    /// Drop every edit and start over from the fixtures.
    pub fn reset(&mut self) {
        *self = Self::new(self.fixtures.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::BlockKind;

    fn session() -> PlannerSession {
        PlannerSession::new(Fixtures::builtin().unwrap())
    }

    #[test]
    fn lesson_edits_change_compiled_day() {
        let mut session = session();
        let before = session.compile_day(DayOfWeek::SATURDAY);
        assert!(before.iter().all(|b| b.kind != BlockKind::School));

        let id = session
            .add_lesson(NewSchoolLesson::new(DayOfWeek::SATURDAY, "Mathématiques", "08:00", "09:00"))
            .unwrap();
        let after = session.compile_day(DayOfWeek::SATURDAY);
        assert_eq!(after[0], TimeBlock::new("08:00", "09:00", BlockKind::School));

        session.remove_activity(&id).unwrap();
        assert_eq!(session.compile_day(DayOfWeek::SATURDAY), before);
    }

    #[test]
    fn removing_unknown_activity_fails() {
        let mut session = session();
        assert!(matches!(
            session.remove_activity("nope"),
            Err(ValidationError::NotFound { kind: "activity", .. })
        ));
    }

    #[test]
    fn task_edits() {
        let mut session = session();
        let date = NaiveDate::from_ymd_opt(2025, 11, 8).unwrap();
        let id = session
            .add_task(NewTask::new(date, "Fiche de lecture", "10:00", "11:00"))
            .unwrap();
        assert_eq!(session.tasks().for_date(date).len(), 1);
        assert_eq!(session.remove_task(&id).unwrap().title, "Fiche de lecture");
        assert!(session.remove_task(&id).is_err());
    }

    #[test]
    fn revision_workflow() {
        let mut session = session();
        let monday = NaiveDate::from_ymd_opt(2025, 11, 3).unwrap();
        let subject_id = session.subjects_for_date(monday)[0].id.clone();

        session.save_audio(monday, &subject_id, "/tmp/note.webm", 42).unwrap();
        let photo_id = session.add_photo(monday, &subject_id, "/tmp/p1.jpg").unwrap();
        session.set_revision_completed(monday, &subject_id, true).unwrap();

        let revision = session.revisions().get(monday, &subject_id).unwrap();
        assert!(revision.completed);
        assert_eq!(revision.photos[0].id, photo_id);

        session.remove_photo(monday, &subject_id, &photo_id).unwrap();
        session.delete_audio(monday, &subject_id).unwrap();
        let revision = session.revisions().get(monday, &subject_id).unwrap();
        assert!(revision.photos.is_empty());
        assert!(revision.audio.is_none());
    }

    #[test]
    fn reset_restores_fixtures() {
        let mut session = session();
        let lessons = session.timetable().len();
        session
            .add_lesson(NewSchoolLesson::new(DayOfWeek::SUNDAY, "Latin", "10:00", "11:00"))
            .unwrap();
        session.reset();
        assert_eq!(session.timetable().len(), lessons);
        assert!(session.revisions().is_empty());
    }
}
