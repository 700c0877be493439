//! JSON shapes of the mite API. Every resource is wrapped in an object named
//! after it: `{"time_entry": {...}}`, `{"project": {...}}`.

use crate::errors::AppResult;
use crate::models::{LocalDate, Minutes, ProjectId, ServiceId, TimeEntry, TimeEntryId};
use crate::remote::{EntryCommand, NamedRef, UserFilter};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub(crate) struct TimeEntryEnvelope {
    pub time_entry: MiteTimeEntry,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MiteTimeEntry {
    pub id: u64,
    pub date_at: String,
    pub minutes: u32,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub billable: bool,
    #[serde(default)]
    pub project_id: Option<u64>,
    #[serde(default)]
    pub project_name: Option<String>,
    #[serde(default)]
    pub service_id: Option<u64>,
    #[serde(default)]
    pub service_name: Option<String>,
}

impl MiteTimeEntry {
    pub fn into_entry(self) -> AppResult<TimeEntry> {
        Ok(TimeEntry {
            id: TimeEntryId::new(self.id),
            date: self.date_at.parse::<LocalDate>()?,
            minutes: Minutes::new(self.minutes),
            note: self.note.unwrap_or_default(),
            billable: self.billable,
            project_id: ProjectId(self.project_id.unwrap_or(0)),
            service_id: ServiceId(self.service_id.unwrap_or(0)),
            project_name: self.project_name.unwrap_or_default(),
            service_name: self.service_name.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct TimeEntryPayload<'a> {
    pub time_entry: MiteCommand<'a>,
}

#[derive(Debug, Serialize)]
pub(crate) struct MiteCommand<'a> {
    pub date_at: String,
    pub minutes: u32,
    pub note: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
    pub project_id: u64,
    pub service_id: u64,
    pub locked: bool,
}

impl<'a> TimeEntryPayload<'a> {
    pub fn new(cmd: &'a EntryCommand) -> Self {
        Self {
            time_entry: MiteCommand {
                date_at: cmd.date.to_string(),
                minutes: cmd.minutes.value(),
                note: &cmd.note,
                user_id: match cmd.user {
                    UserFilter::Current => None,
                    UserFilter::Id(id) => Some(id),
                },
                project_id: cmd.project_id.0,
                service_id: cmd.service_id.0,
                locked: false,
            },
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct MiteNamed {
    pub id: u64,
    pub name: String,
}

impl From<MiteNamed> for NamedRef {
    fn from(n: MiteNamed) -> Self {
        NamedRef {
            id: n.id,
            name: n.name,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProjectEnvelope {
    pub project: MiteNamed,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ServiceEnvelope {
    pub service: MiteNamed,
}
