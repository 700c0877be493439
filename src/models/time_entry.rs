use super::ids::{ProjectId, ServiceId, TimeEntryId};
use super::local_date::LocalDate;
use super::minutes::Minutes;
use serde::Serialize;

/// A billable time entry, as held in a timesheet row or a remote record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeEntry {
    pub id: Option<TimeEntryId>, // None ⇔ never pushed
    pub date: LocalDate,
    pub minutes: Minutes, // 0 on a pushed entry ⇔ delete
    pub note: String,
    pub billable: bool,
    pub project_id: ProjectId,
    pub service_id: ServiceId,
    pub project_name: String,
    pub service_name: String,
}

impl TimeEntry {
    /// New, not-yet-pushed entry with unresolved references.
    pub fn new(date: LocalDate, minutes: Minutes) -> Self {
        Self {
            id: None,
            date,
            minutes,
            note: String::new(),
            billable: false,
            project_id: ProjectId::default(),
            service_id: ServiceId::default(),
            project_name: String::new(),
            service_name: String::new(),
        }
    }

    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    pub fn has_references(&self) -> bool {
        self.project_id.is_resolved() && self.service_id.is_resolved()
    }

    /// Number of rendered lines in the note (at least 1).
    pub fn note_lines(&self) -> usize {
        self.note.lines().count().max(1)
    }
}
