//! Full synchronization run: push the current month, then pull the
//! look-back window and rewrite the timesheet.

use super::reconcile::{PushReport, Reconciler};
use crate::errors::{AppError, AppResult};
use crate::models::LocalDate;
use crate::remote::{EntryQuery, TimeStore, fetch_lookups};
use crate::timesheet::{Document, decode_month, encode, read_lookups};
use chrono::Duration;
use std::path::PathBuf;

/// Linear lifecycle of a run: Idle → (Pushing) → Pulling → Done, or Failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    Idle,
    Pushing,
    Pulling,
    Done,
    Failed,
}

#[derive(Debug, Clone)]
pub struct SyncOptions {
    pub document: PathBuf,
    pub only_pull: bool,
    /// Look-back window of the pull, ending at `today`. The pull starts on
    /// the first day of the month the window begins in.
    pub window: Duration,
    pub today: LocalDate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullReport {
    pub from: LocalDate,
    pub to: LocalDate,
    pub entries: usize,
    pub months: Vec<String>,
    pub projects: usize,
    pub services: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    pub push: Option<PushReport>,
    pub pull: PullReport,
}

pub struct SyncLogic<'a> {
    store: &'a dyn TimeStore,
    options: SyncOptions,
    state: SyncState,
    transitions: Vec<SyncState>,
}

impl<'a> SyncLogic<'a> {
    pub fn new(store: &'a dyn TimeStore, options: SyncOptions) -> Self {
        Self {
            store,
            options,
            state: SyncState::Idle,
            transitions: vec![SyncState::Idle],
        }
    }

    pub fn state(&self) -> SyncState {
        self.state
    }

    /// Every state the run went through, starting with `Idle`.
    pub fn transitions(&self) -> &[SyncState] {
        &self.transitions
    }

    pub fn run(&mut self) -> AppResult<SyncReport> {
        match self.run_phases() {
            Ok(report) => {
                self.enter(SyncState::Done);
                Ok(report)
            }
            Err(e) => {
                self.enter(SyncState::Failed);
                Err(e)
            }
        }
    }

    fn run_phases(&mut self) -> AppResult<SyncReport> {
        let push = if self.options.only_pull {
            tracing::debug!("Pull-only run, skipping push");
            None
        } else {
            self.enter(SyncState::Pushing);
            Some(self.push()?)
        };

        self.enter(SyncState::Pulling);
        let pull = self.pull()?;

        Ok(SyncReport { push, pull })
    }

    fn enter(&mut self, next: SyncState) {
        tracing::debug!("sync: {:?} -> {:?}", self.state, next);
        self.state = next;
        self.transitions.push(next);
    }

    fn push(&self) -> AppResult<PushReport> {
        let doc = Document::open(&self.options.document)?;
        let lookups = read_lookups(&doc)?;
        let outcome = decode_month(&doc, self.options.today, &lookups)?;

        if !outcome.unresolved.is_empty() {
            tracing::warn!(
                "{} project/service names in '{}' did not resolve",
                outcome.unresolved.len(),
                outcome.sheet
            );
        }

        Reconciler::new(self.store).push(&outcome.entries)
    }

    fn pull(&self) -> AppResult<PullReport> {
        let to = self.options.today;
        // il mese più vecchio viene riscritto per intero: si parte dal suo primo giorno
        let from = to
            .checked_sub(self.options.window)
            .ok_or_else(|| AppError::InvalidWindow(format!("{:?}", self.options.window)))?
            .month_start();

        tracing::info!("Fetching past entries from {from} to {to}");
        let entries = self.store.list_entries(&EntryQuery::current_user(from, to))?;
        let lookups = fetch_lookups(self.store)?;

        let path = &self.options.document;
        let mut doc = Document::open_or_new(path)?;
        let written = encode(&mut doc, &entries, &lookups);
        doc.save(path)?;

        Ok(PullReport {
            from,
            to,
            entries: entries.len(),
            months: written.months,
            projects: lookups.projects.len(),
            services: lookups.services.len(),
        })
    }
}
