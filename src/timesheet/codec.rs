//! Tabular codec: `TimeEntry` values ⇄ monthly sheets of a [`Document`].
//!
//! Lookup tables are always passed in explicitly. `read_lookups` is the only
//! place that pulls them out of the hidden sheets, and the caller decides
//! when that happens.

use super::document::{Document, Sheet};
use super::layout::{
    Column, FIRST_DATA_ROW, HEADER_ROW, LOOKUP_FIRST_ROW, LOOKUP_HEADERS, MonthLayout,
    PROJECTS_SHEET, SERVICES_SHEET, SUMMARY_SHEET, cell_name,
};
use super::style::{fit_columns, style_month_sheet};
use super::summary::{MonthTotal, render_summary, sum_time_column};
use crate::errors::{AppError, AppResult};
use crate::models::ids::parse_u64;
use crate::models::{
    LocalDate, LookupTable, Lookups, Minutes, ProjectId, ServiceId, TimeEntry, TimeEntryId,
};
use indexmap::IndexMap;

/// Result of reading one monthly sheet.
#[derive(Debug, Default)]
pub struct DecodeOutcome {
    pub sheet: String,
    pub entries: Vec<TimeEntry>,
    /// `AppError::UnknownName` for every project/service that did not resolve.
    pub unresolved: Vec<AppError>,
}

/// What a write touched.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EncodeReport {
    pub months: Vec<String>,
    pub rows: usize,
    pub summary: Vec<MonthTotal>,
}

// ---------------------------
// Lookup sheets
// ---------------------------

/// Read the hidden Projects/Services sheets. A missing sheet yields an empty
/// table; a malformed id is a format error.
pub fn read_lookups(doc: &Document) -> AppResult<Lookups> {
    Ok(Lookups::new(
        read_lookup_sheet(doc, PROJECTS_SHEET)?,
        read_lookup_sheet(doc, SERVICES_SHEET)?,
    ))
}

fn read_lookup_sheet(doc: &Document, name: &str) -> AppResult<LookupTable> {
    tracing::debug!("Reading {name}...");

    let mut table = LookupTable::new();

    let Some(sheet) = doc.sheet(name) else {
        tracing::warn!("Lookup sheet '{name}' not found, every {name} name will be unresolved");
        return Ok(table);
    };

    for row in LOOKUP_FIRST_ROW..sheet.row_count() {
        if sheet.is_row_blank(row) {
            continue;
        }
        let name = sheet.text(row, 0);
        let id = parse_u64(sheet.text(row, 1).trim())
            .map_err(|e| e.at_cell(&sheet.name, cell_name(row, 1)))?;

        tracing::debug!("found {name}={id}");
        table.insert(name, id);
    }

    Ok(table)
}

fn render_lookup(name: &str, table: &LookupTable) -> Sheet {
    let mut sheet = Sheet::new(name);
    sheet.hidden = true;

    for (col, header) in LOOKUP_HEADERS.iter().enumerate() {
        sheet.set_bold(HEADER_ROW, col as u16, *header);
    }
    for (i, (display, id)) in table.iter().enumerate() {
        let row = LOOKUP_FIRST_ROW + i as u32;
        sheet.set(row, 0, display);
        sheet.set(row, 1, id.to_string());
    }

    fit_columns(&mut sheet);
    sheet
}

// ---------------------------
// Decode
// ---------------------------

/// Decode the monthly sheet containing `anchor`. A month without a sheet
/// decodes to no entries.
pub fn decode_month(doc: &Document, anchor: LocalDate, lookups: &Lookups) -> AppResult<DecodeOutcome> {
    let name = anchor.partition_name();
    tracing::debug!("Reading all entries from {name} sheet");

    match doc.sheet(&name) {
        Some(sheet) => decode_sheet(sheet, lookups),
        None => {
            tracing::warn!("No sheet named '{name}' in the timesheet, nothing to read");
            Ok(DecodeOutcome {
                sheet: name,
                ..DecodeOutcome::default()
            })
        }
    }
}

/// Decode every non-blank data row, in row order.
pub fn decode_sheet(sheet: &Sheet, lookups: &Lookups) -> AppResult<DecodeOutcome> {
    let layout = MonthLayout::resolve(sheet);
    let mut outcome = DecodeOutcome {
        sheet: sheet.name.clone(),
        ..DecodeOutcome::default()
    };

    for row in FIRST_DATA_ROW..sheet.row_count() {
        if sheet.is_row_blank(row) {
            continue;
        }
        let entry = decode_row(sheet, &layout, row, lookups, &mut outcome.unresolved)?;
        outcome.entries.push(entry);
    }

    Ok(outcome)
}

fn decode_row(
    sheet: &Sheet,
    layout: &MonthLayout,
    row: u32,
    lookups: &Lookups,
    unresolved: &mut Vec<AppError>,
) -> AppResult<TimeEntry> {
    let raw = |column: Column| sheet.text(row, layout.col(column));
    let located = |column: Column| {
        move |e: AppError| e.at_cell(&sheet.name, cell_name(row, layout.col(column)))
    };

    let date: LocalDate = raw(Column::Date).parse().map_err(located(Column::Date))?;
    let minutes: Minutes = raw(Column::Time).parse().map_err(located(Column::Time))?;
    let billable = parse_flag(raw(Column::Billable)).map_err(located(Column::Billable))?;
    let id = TimeEntryId::parse_cell(raw(Column::EntryId)).map_err(located(Column::EntryId))?;

    let (project_name, project_id) =
        resolve_name(&lookups.projects, "project", raw(Column::Project), unresolved);
    let (service_name, service_id) =
        resolve_name(&lookups.services, "service", raw(Column::Service), unresolved);

    Ok(TimeEntry {
        id,
        date,
        minutes,
        note: raw(Column::Description).to_string(),
        billable,
        project_id: ProjectId(project_id),
        service_id: ServiceId(service_id),
        project_name,
        service_name,
    })
}

/// Unresolved names are logged, recorded and decoded with id 0.
fn resolve_name(
    table: &LookupTable,
    kind: &'static str,
    raw: &str,
    unresolved: &mut Vec<AppError>,
) -> (String, u64) {
    match table.resolve(raw) {
        Some((display, id)) => (display.to_string(), id),
        None => {
            let err = AppError::UnknownName {
                table: kind,
                name: raw.trim().to_string(),
            };
            tracing::error!("{err}");
            unresolved.push(err);
            (raw.trim().to_string(), 0)
        }
    }
}

/// Same spellings Go's strconv.ParseBool accepts; blank means "not billable".
fn parse_flag(s: &str) -> AppResult<bool> {
    match s.trim() {
        "" => Ok(false),
        "1" | "t" | "T" => Ok(true),
        "0" | "f" | "F" => Ok(false),
        t if t.eq_ignore_ascii_case("true") => Ok(true),
        t if t.eq_ignore_ascii_case("false") => Ok(false),
        _ => Err(AppError::InvalidFlag(s.to_string())),
    }
}

// ---------------------------
// Encode
// ---------------------------

/// Write `entries` into `doc`: one sheet per month (replacing any sheet of
/// the same name), then the Summary and both lookup sheets. Month sheets not
/// touched by `entries` are kept and re-styled.
pub fn encode(doc: &mut Document, entries: &[TimeEntry], lookups: &Lookups) -> EncodeReport {
    tracing::info!("Loading {} entries", entries.len());

    // mese → (primo giorno, righe) nell'ordine in cui compaiono
    let mut groups: IndexMap<String, (LocalDate, Vec<&TimeEntry>)> = IndexMap::new();
    for entry in entries {
        groups
            .entry(entry.date.partition_name())
            .or_insert_with(|| (entry.date.month_start(), Vec::new()))
            .1
            .push(entry);
    }

    let mut report = EncodeReport {
        rows: entries.len(),
        ..EncodeReport::default()
    };
    let mut totals = Vec::with_capacity(groups.len());

    for (name, (month, rows)) in &groups {
        let (sheet, total) = render_month(name, rows, lookups);
        doc.replace_sheet(sheet);
        report.months.push(name.clone());
        totals.push(MonthTotal {
            month: *month,
            sheet: name.clone(),
            total,
        });
    }

    for sheet in doc.sheets_mut() {
        let Some(month) = LocalDate::from_partition_name(&sheet.name) else {
            continue;
        };
        if groups.keys().any(|g| g.eq_ignore_ascii_case(&sheet.name)) {
            continue;
        }
        tracing::debug!("Keeping sheet '{}' outside the pulled window", sheet.name);
        let layout = MonthLayout::resolve(sheet);
        style_month_sheet(sheet, &layout);
        totals.push(MonthTotal {
            month,
            sheet: sheet.name.clone(),
            total: sum_time_column(sheet),
        });
    }

    tracing::debug!("Writing the summary...");
    totals.sort_by_key(|t| t.month);
    doc.replace_sheet(render_summary(&totals));
    report.summary = totals;

    doc.replace_sheet(render_lookup(PROJECTS_SHEET, &lookups.projects));
    doc.replace_sheet(render_lookup(SERVICES_SHEET, &lookups.services));

    arrange(doc);
    report
}

fn render_month(name: &str, rows: &[&TimeEntry], lookups: &Lookups) -> (Sheet, Minutes) {
    let layout = MonthLayout::standard();
    let mut sheet = Sheet::new(name);

    for (column, col) in layout.columns() {
        sheet.set_bold(HEADER_ROW, col, column.header());
    }

    let mut total = Minutes::ZERO;
    for (i, entry) in rows.iter().enumerate() {
        let row = FIRST_DATA_ROW + i as u32;
        for (column, col) in layout.columns() {
            sheet.set(row, col, render_field(entry, column, lookups));
        }
        total += entry.minutes;
    }

    style_month_sheet(&mut sheet, &layout);
    (sheet, total)
}

fn render_field(entry: &TimeEntry, column: Column, lookups: &Lookups) -> String {
    match column {
        Column::Date => entry.date.to_string(),
        Column::Project => display_name(&entry.project_name, entry.project_id.0, &lookups.projects),
        Column::Service => display_name(&entry.service_name, entry.service_id.0, &lookups.services),
        Column::Billable => entry.billable.to_string(),
        Column::Time => entry.minutes.to_string(),
        Column::Description => entry.note.clone(),
        Column::EntryId => entry.id.map(|id| id.to_string()).unwrap_or_default(),
    }
}

fn display_name(name: &str, id: u64, table: &LookupTable) -> String {
    if !name.trim().is_empty() {
        return name.to_string();
    }
    table.name_of(id).unwrap_or_default().to_string()
}

/// Summary first (and active), months chronologically, other sheets as
/// they were, hidden lookup sheets last.
fn arrange(doc: &mut Document) {
    doc.sort_sheets_by_key(|s| {
        if s.name.eq_ignore_ascii_case(SUMMARY_SHEET) {
            (0, None)
        } else if let Some(month) = LocalDate::from_partition_name(&s.name) {
            (1, Some(month))
        } else if s.name.eq_ignore_ascii_case(PROJECTS_SHEET) {
            (3, None)
        } else if s.name.eq_ignore_ascii_case(SERVICES_SHEET) {
            (4, None)
        } else {
            (2, None)
        }
    });
    doc.set_active(SUMMARY_SHEET);
}
