//! Per-subject revision notes: a voice note and notebook photos.
//!
//! Media are referenced by URL or path only. Nothing here owns the bytes,
//! and a revision book lives only as long as the session holding it.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::error::ValidationError;
use crate::schedule::{activities_for_day, DayOfWeek, RecurringActivity};

/// A photo of a notebook page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectPhoto {
    pub id: String,
    pub url: String,
    pub timestamp: DateTime<Utc>,
}

impl SubjectPhoto {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            id: format!("photo_{}", Uuid::new_v4()),
            url: url.into(),
            timestamp: Utc::now(),
        }
    }
}

/// A recorded voice note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioNote {
    pub url: String,
    pub duration_secs: u64,
}

/// Revision material for one subject on one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectRevision {
    pub id: String,
    pub date: NaiveDate,
    pub subject_title: String,
    pub activity_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<AudioNote>,
    #[serde(default)]
    pub photos: Vec<SubjectPhoto>,
    #[serde(default)]
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update applied to a revision.
///
/// `audio: Some(None)` clears the voice note; `None` leaves it alone.
#[derive(Debug, Clone, Default)]
pub struct RevisionUpdate {
    pub audio: Option<Option<AudioNote>>,
    pub photos: Option<Vec<SubjectPhoto>>,
    pub completed: Option<bool>,
}

impl RevisionUpdate {
    fn apply(self, revision: &mut SubjectRevision) {
        if let Some(audio) = self.audio {
            revision.audio = audio;
        }
        if let Some(photos) = self.photos {
            revision.photos = photos;
        }
        if let Some(completed) = self.completed {
            revision.completed = completed;
        }
    }
}

/// All revisions of the session, keyed by date and timetable activity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevisionBook {
    revisions: BTreeMap<(NaiveDate, String), SubjectRevision>,
}

impl RevisionBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, date: NaiveDate, activity_id: &str) -> Option<&SubjectRevision> {
        self.revisions.get(&(date, activity_id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.revisions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revisions.is_empty()
    }

    /// Revisions recorded on `date`, in activity id order.
    pub fn for_date(&self, date: NaiveDate) -> impl Iterator<Item = &SubjectRevision> {
        self.revisions
            .range((date, String::new())..)
            .take_while(move |((d, _), _)| *d == date)
            .map(|(_, revision)| revision)
    }

    /// Apply `update` to the revision of `activity_id` on `date`, creating it
    /// when missing. The activity must be one of the day's subjects.
    pub fn update(
        &self,
        date: NaiveDate,
        activity_id: &str,
        timetable: &[RecurringActivity],
        update: RevisionUpdate,
    ) -> Result<Self, ValidationError> {
        let subject = subjects_for_date(date, timetable)
            .into_iter()
            .find(|s| s.id == activity_id)
            .ok_or_else(|| ValidationError::NotFound {
                kind: "subject",
                id: activity_id.to_string(),
            })?;

        let now = Utc::now();
        let mut revisions = self.revisions.clone();
        let revision = revisions
            .entry((date, activity_id.to_string()))
            .or_insert_with(|| SubjectRevision {
                id: format!("rev_{}", Uuid::new_v4()),
                date,
                subject_title: subject.title.clone(),
                activity_id: activity_id.to_string(),
                audio: None,
                photos: Vec::new(),
                completed: false,
                created_at: now,
                updated_at: now,
            });
        update.apply(revision);
        revision.updated_at = now;

        debug!(%date, activity_id, "revision updated");
        Ok(Self { revisions })
    }

    pub fn save_audio(
        &self,
        date: NaiveDate,
        activity_id: &str,
        timetable: &[RecurringActivity],
        url: impl Into<String>,
        duration_secs: u64,
    ) -> Result<Self, ValidationError> {
        let note = AudioNote {
            url: url.into(),
            duration_secs,
        };
        self.update(
            date,
            activity_id,
            timetable,
            RevisionUpdate {
                audio: Some(Some(note)),
                ..Default::default()
            },
        )
    }

    pub fn delete_audio(
        &self,
        date: NaiveDate,
        activity_id: &str,
        timetable: &[RecurringActivity],
    ) -> Result<Self, ValidationError> {
        self.update(
            date,
            activity_id,
            timetable,
            RevisionUpdate {
                audio: Some(None),
                ..Default::default()
            },
        )
    }

    pub fn add_photo(
        &self,
        date: NaiveDate,
        activity_id: &str,
        timetable: &[RecurringActivity],
        photo: SubjectPhoto,
    ) -> Result<Self, ValidationError> {
        let mut photos = self
            .get(date, activity_id)
            .map(|r| r.photos.clone())
            .unwrap_or_default();
        photos.push(photo);
        self.update(
            date,
            activity_id,
            timetable,
            RevisionUpdate {
                photos: Some(photos),
                ..Default::default()
            },
        )
    }

    pub fn remove_photo(
        &self,
        date: NaiveDate,
        activity_id: &str,
        timetable: &[RecurringActivity],
        photo_id: &str,
    ) -> Result<Self, ValidationError> {
        let photos = self
            .get(date, activity_id)
            .map(|r| r.photos.iter().filter(|p| p.id != photo_id).cloned().collect())
            .unwrap_or_default();
        self.update(
            date,
            activity_id,
            timetable,
            RevisionUpdate {
                photos: Some(photos),
                ..Default::default()
            },
        )
    }

    pub fn set_completed(
        &self,
        date: NaiveDate,
        activity_id: &str,
        timetable: &[RecurringActivity],
        completed: bool,
    ) -> Result<Self, ValidationError> {
        self.update(
            date,
            activity_id,
            timetable,
            RevisionUpdate {
                completed: Some(completed),
                ..Default::default()
            },
        )
    }
}

/// The school subjects of `date`, sorted by start time.
pub fn subjects_for_date(date: NaiveDate, timetable: &[RecurringActivity]) -> Vec<&RecurringActivity> {
    activities_for_day(DayOfWeek::of_date(date), timetable)
}

/// "HH:MM:SS" for a recording length.
pub fn format_duration(seconds: u64) -> String {
    let hrs = seconds / 3600;
    let mins = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{hrs:02}:{mins:02}:{secs:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, 3).unwrap()
    }

    fn timetable() -> Vec<RecurringActivity> {
        vec![
            RecurringActivity {
                id: "sch_maths".to_string(),
                day_of_week: 1,
                title: "Mathématiques".to_string(),
                time_start: "10:00".to_string(),
                time_end: "11:00".to_string(),
                color: "#F5C842".to_string(),
                revision_color: Some("#3498DB".to_string()),
            },
            RecurringActivity {
                id: "sch_fr".to_string(),
                day_of_week: 1,
                title: "Français".to_string(),
                time_start: "08:00".to_string(),
                time_end: "09:00".to_string(),
                color: "#F5C842".to_string(),
                revision_color: None,
            },
        ]
    }

    #[test]
    fn subjects_of_the_day_sorted() {
        let timetable = timetable();
        let titles: Vec<_> = subjects_for_date(monday(), &timetable)
            .iter()
            .map(|s| s.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Français", "Mathématiques"]);

        let sunday = NaiveDate::from_ymd_opt(2025, 11, 9).unwrap();
        assert!(subjects_for_date(sunday, &timetable).is_empty());
    }

    #[test]
    fn first_update_creates_revision() {
        let timetable = timetable();
        let book = RevisionBook::new()
            .save_audio(monday(), "sch_maths", &timetable, "/tmp/maths.webm", 95)
            .unwrap();
        let revision = book.get(monday(), "sch_maths").unwrap();
        assert_eq!(revision.subject_title, "Mathématiques");
        assert_eq!(revision.audio.as_ref().unwrap().duration_secs, 95);
        assert!(revision.id.starts_with("rev_"));
        assert!(!revision.completed);
    }

    #[test]
    fn updates_do_not_mutate_previous_book() {
        let timetable = timetable();
        let empty = RevisionBook::new();
        let book = empty
            .set_completed(monday(), "sch_fr", &timetable, true)
            .unwrap();
        assert!(empty.is_empty());
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn delete_audio_keeps_photos() {
        let timetable = timetable();
        let photo = SubjectPhoto::new("/tmp/page1.jpg");
        let photo_id = photo.id.clone();
        let book = RevisionBook::new()
            .add_photo(monday(), "sch_maths", &timetable, photo)
            .unwrap()
            .save_audio(monday(), "sch_maths", &timetable, "/tmp/a.webm", 10)
            .unwrap()
            .delete_audio(monday(), "sch_maths", &timetable)
            .unwrap();
        let revision = book.get(monday(), "sch_maths").unwrap();
        assert!(revision.audio.is_none());
        assert_eq!(revision.photos.len(), 1);

        let book = book
            .remove_photo(monday(), "sch_maths", &timetable, &photo_id)
            .unwrap();
        assert!(book.get(monday(), "sch_maths").unwrap().photos.is_empty());
    }

    #[test]
    fn revisions_are_scoped_by_date() {
        let timetable = timetable();
        let next_monday = NaiveDate::from_ymd_opt(2025, 11, 10).unwrap();
        let book = RevisionBook::new()
            .set_completed(monday(), "sch_maths", &timetable, true)
            .unwrap();
        assert!(book.get(next_monday, "sch_maths").is_none());
        assert_eq!(book.for_date(monday()).count(), 1);
        assert_eq!(book.for_date(next_monday).count(), 0);
    }

    #[test]
    fn unknown_subject_is_rejected() {
        let timetable = timetable();
        let tuesday = NaiveDate::from_ymd_opt(2025, 11, 4).unwrap();
        let err = RevisionBook::new()
            .set_completed(tuesday, "sch_maths", &timetable, true)
            .unwrap_err();
        assert!(matches!(err, ValidationError::NotFound { kind: "subject", .. }));
    }

    #[test]
    fn duration_format() {
        assert_eq!(format_duration(0), "00:00:00");
        assert_eq!(format_duration(95), "00:01:35");
        assert_eq!(format_duration(3725), "01:02:05");
    }
}
