#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use mighty::errors::{AppError, AppResult};
use mighty::models::{LocalDate, LookupTable, Lookups, Minutes, ProjectId, ServiceId, TimeEntry, TimeEntryId};
use mighty::remote::{EntryCommand, EntryQuery, NamedRef, TimeStore};
use mighty::timesheet::{Column, Document, MonthLayout, Sheet};
use std::cell::{Cell, RefCell};

pub fn mighty() -> Command {
    cargo_bin_cmd!("mighty")
}

pub fn date(s: &str) -> LocalDate {
    s.parse().expect("valid test date")
}

pub fn lookups() -> Lookups {
    let projects: LookupTable = [("Acme", 101), ("Globex Corp", 102)].into_iter().collect();
    let services: LookupTable = [("Dev", 7), ("Meeting", 8)].into_iter().collect();
    Lookups::new(projects, services)
}

/// A fully resolved entry as the remote store would hand it back.
pub fn entry(id: u64, day: &str, minutes: u32, note: &str) -> TimeEntry {
    TimeEntry {
        id: TimeEntryId::new(id),
        date: date(day),
        minutes: Minutes::new(minutes),
        note: note.to_string(),
        billable: true,
        project_id: ProjectId(101),
        service_id: ServiceId(7),
        project_name: "Acme".to_string(),
        service_name: "Dev".to_string(),
    }
}

/// A hand-filled month sheet: header row, gap row, then `rows` from row 3.
/// Each row is Date, Project, Service, Billable?, Time, Description, Id.
pub fn month_sheet(name: &str, rows: &[[&str; 7]]) -> Sheet {
    let layout = MonthLayout::standard();
    let mut sheet = Sheet::new(name);
    for (column, col) in layout.columns() {
        sheet.set_bold(0, col, column.header());
    }
    for (i, row) in rows.iter().enumerate() {
        for (col, text) in row.iter().enumerate() {
            if !text.is_empty() {
                sheet.set(2 + i as u32, col as u16, *text);
            }
        }
    }
    sheet
}

/// Month sheet plus both lookup sheets, as left behind by a previous pull.
pub fn timesheet_with(name: &str, rows: &[[&str; 7]]) -> Document {
    let mut doc = Document::new();
    doc.replace_sheet(month_sheet(name, rows));
    doc.replace_sheet(lookup_sheet("Projects", &[("Acme", 101), ("Globex Corp", 102)]));
    doc.replace_sheet(lookup_sheet("Services", &[("Dev", 7), ("Meeting", 8)]));
    doc
}

pub fn lookup_sheet(name: &str, rows: &[(&str, u64)]) -> Sheet {
    let mut sheet = Sheet::new(name);
    sheet.hidden = true;
    sheet.set_bold(0, 0, "Name");
    sheet.set_bold(0, 1, "Id");
    for (i, (n, id)) in rows.iter().enumerate() {
        sheet.set(1 + i as u32, 0, *n);
        sheet.set(1 + i as u32, 1, id.to_string());
    }
    sheet
}

pub fn time_col() -> u16 {
    MonthLayout::standard().col(Column::Time)
}

// ---------------------------
// Recording fake of the remote store
// ---------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List(EntryQuery),
    Create(EntryCommand),
    Edit(TimeEntryId, EntryCommand),
    Delete(TimeEntryId),
    Projects,
    Services,
}

impl Call {
    pub fn is_write(&self) -> bool {
        matches!(self, Call::Create(_) | Call::Edit(..) | Call::Delete(_))
    }
}

pub struct FakeStore {
    pub remote: Vec<TimeEntry>,
    pub projects: Vec<NamedRef>,
    pub services: Vec<NamedRef>,
    calls: RefCell<Vec<Call>>,
    next_id: Cell<u64>,
    /// Fail the n-th write call (0-based) with a 500.
    fail_write_at: Option<usize>,
}

impl FakeStore {
    pub fn new() -> Self {
        Self {
            remote: Vec::new(),
            projects: vec![
                NamedRef { id: 101, name: "Acme".into() },
                NamedRef { id: 102, name: "Globex Corp".into() },
            ],
            services: vec![
                NamedRef { id: 7, name: "Dev".into() },
                NamedRef { id: 8, name: "Meeting".into() },
            ],
            calls: RefCell::new(Vec::new()),
            next_id: Cell::new(9000),
            fail_write_at: None,
        }
    }

    pub fn with_remote(mut self, entries: Vec<TimeEntry>) -> Self {
        self.remote = entries;
        self
    }

    pub fn failing_write(mut self, n: usize) -> Self {
        self.fail_write_at = Some(n);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn writes(&self) -> Vec<Call> {
        self.calls().into_iter().filter(Call::is_write).collect()
    }

    fn record(&self, call: Call) -> AppResult<()> {
        let is_write = call.is_write();
        let mut calls = self.calls.borrow_mut();
        let writes_so_far = calls.iter().filter(|c| c.is_write()).count();
        calls.push(call);
        if is_write && self.fail_write_at == Some(writes_so_far) {
            return Err(AppError::RemoteStatus {
                status: 500,
                body: "boom".into(),
            });
        }
        Ok(())
    }
}

impl TimeStore for FakeStore {
    fn list_entries(&self, query: &EntryQuery) -> AppResult<Vec<TimeEntry>> {
        self.record(Call::List(*query))?;
        Ok(self
            .remote
            .iter()
            .filter(|e| e.date >= query.range.from && e.date <= query.range.to)
            .cloned()
            .collect())
    }

    fn create_entry(&self, command: &EntryCommand) -> AppResult<TimeEntry> {
        self.record(Call::Create(command.clone()))?;
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let mut created = TimeEntry::new(command.date, command.minutes);
        created.id = TimeEntryId::new(id);
        created.note = command.note.clone();
        created.project_id = command.project_id;
        created.service_id = command.service_id;
        Ok(created)
    }

    fn edit_entry(&self, id: TimeEntryId, command: &EntryCommand) -> AppResult<()> {
        self.record(Call::Edit(id, command.clone()))
    }

    fn delete_entry(&self, id: TimeEntryId) -> AppResult<()> {
        self.record(Call::Delete(id))
    }

    fn list_projects(&self) -> AppResult<Vec<NamedRef>> {
        self.record(Call::Projects)?;
        Ok(self.projects.clone())
    }

    fn list_services(&self) -> AppResult<Vec<NamedRef>> {
        self.record(Call::Services)?;
        Ok(self.services.clone())
    }
}
