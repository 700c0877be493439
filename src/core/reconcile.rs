//! Push phase: decide, for each local row, what to do on the remote store.

use crate::errors::{AppError, AppResult};
use crate::models::{TimeEntry, TimeEntryId};
use crate::remote::{EntryCommand, TimeStore};

/// The one remote call a row turns into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncAction {
    Create(EntryCommand),
    Update { id: TimeEntryId, command: EntryCommand },
    Delete(TimeEntryId),
}

impl SyncAction {
    /// Classify a row. Rows without both references are rejected whatever
    /// else they carry; zero minutes on a pushed row means delete.
    pub fn classify(entry: &TimeEntry) -> AppResult<SyncAction> {
        if !entry.has_references() {
            return Err(AppError::MissingReference {
                date: entry.date.to_string(),
                project: entry.project_name.clone(),
                service: entry.service_name.clone(),
            });
        }

        let action = match entry.id {
            None => SyncAction::Create(EntryCommand::from_entry(entry)),
            Some(id) if entry.minutes.is_zero() => SyncAction::Delete(id),
            Some(id) => SyncAction::Update {
                id,
                command: EntryCommand::from_entry(entry),
            },
        };
        Ok(action)
    }

    pub fn label(&self) -> &'static str {
        match self {
            SyncAction::Create(_) => "Create",
            SyncAction::Update { .. } => "Edit",
            SyncAction::Delete(_) => "Delete",
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PushReport {
    pub created: usize,
    pub updated: usize,
    pub deleted: usize,
    /// Ids handed back by create calls. They are not written to the
    /// timesheet: the pull that follows every push brings them in.
    pub created_ids: Vec<TimeEntryId>,
}

impl PushReport {
    pub fn total(&self) -> usize {
        self.created + self.updated + self.deleted
    }
}

pub struct Reconciler<'a> {
    store: &'a dyn TimeStore,
}

impl<'a> Reconciler<'a> {
    pub fn new(store: &'a dyn TimeStore) -> Self {
        Self { store }
    }

    /// Apply one action per entry, strictly in order. The first invalid row
    /// or failed call stops the batch; calls already made stay applied.
    pub fn push(&self, entries: &[TimeEntry]) -> AppResult<PushReport> {
        tracing::info!("Pushing {} entries to mite", entries.len());

        let mut report = PushReport::default();

        for entry in entries {
            let action = SyncAction::classify(entry).inspect_err(|e| tracing::error!("{e}"))?;

            tracing::info!(
                "{} {} | {} | {} | {}",
                action.label(),
                entry.date,
                entry.minutes,
                entry.service_name,
                entry.project_name
            );

            match action {
                SyncAction::Create(command) => {
                    let created = self.store.create_entry(&command)?;
                    if let Some(id) = created.id {
                        tracing::debug!("Created remote entry {id}");
                        report.created_ids.push(id);
                    }
                    report.created += 1;
                }
                SyncAction::Update { id, command } => {
                    self.store.edit_entry(id, &command)?;
                    report.updated += 1;
                }
                SyncAction::Delete(id) => {
                    self.store.delete_entry(id)?;
                    report.deleted += 1;
                }
            }
        }

        Ok(report)
    }
}
