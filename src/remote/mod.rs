//! Remote time store: the contract the sync engine needs, and the mite
//! implementation of it.

pub mod mite;
mod wire;

pub use mite::MiteClient;

use crate::errors::AppResult;
use crate::models::{LocalDate, LookupTable, Lookups, Minutes, ProjectId, ServiceId, TimeEntry, TimeEntryId};

/// Whose entries to list, or on whose behalf to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserFilter {
    Current,
    Id(u64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: LocalDate,
    pub to: LocalDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Listing order. Only ordering by date is used by the sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub by_date: bool,
    pub direction: SortDirection,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            by_date: true,
            direction: SortDirection::Asc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryQuery {
    pub user: UserFilter,
    pub range: DateRange,
    pub sort: SortSpec,
}

impl EntryQuery {
    /// The current user's entries between `from` and `to`, oldest first.
    pub fn current_user(from: LocalDate, to: LocalDate) -> Self {
        Self {
            user: UserFilter::Current,
            range: DateRange { from, to },
            sort: SortSpec::default(),
        }
    }
}

/// Field values sent on create and edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryCommand {
    pub date: LocalDate,
    pub minutes: Minutes,
    pub note: String,
    pub user: UserFilter,
    pub project_id: ProjectId,
    pub service_id: ServiceId,
}

impl EntryCommand {
    pub fn from_entry(entry: &TimeEntry) -> Self {
        Self {
            date: entry.date,
            minutes: entry.minutes,
            note: entry.note.clone(),
            user: UserFilter::Current,
            project_id: entry.project_id,
            service_id: entry.service_id,
        }
    }
}

/// A project or service as listed by the remote store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedRef {
    pub id: u64,
    pub name: String,
}

/// Every call is a blocking round-trip; failures are returned, never retried.
pub trait TimeStore {
    fn list_entries(&self, query: &EntryQuery) -> AppResult<Vec<TimeEntry>>;
    fn create_entry(&self, command: &EntryCommand) -> AppResult<TimeEntry>;
    fn edit_entry(&self, id: TimeEntryId, command: &EntryCommand) -> AppResult<()>;
    fn delete_entry(&self, id: TimeEntryId) -> AppResult<()>;
    fn list_projects(&self) -> AppResult<Vec<NamedRef>>;
    fn list_services(&self) -> AppResult<Vec<NamedRef>>;
}

/// Build both lookup tables from the remote listings, in listing order.
pub fn fetch_lookups(store: &dyn TimeStore) -> AppResult<Lookups> {
    let projects: LookupTable = store
        .list_projects()?
        .into_iter()
        .map(|p| (p.name, p.id))
        .collect();
    let services: LookupTable = store
        .list_services()?
        .into_iter()
        .map(|s| (s.name, s.id))
        .collect();

    tracing::debug!(
        "Fetched {} projects and {} services",
        projects.len(),
        services.len()
    );
    Ok(Lookups::new(projects, services))
}
