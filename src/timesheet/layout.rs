//! Sheet layout: names of the special sheets and the named-column schema of
//! a monthly sheet.
//!
//! Row/column indices are 0-based here; `cell_name` renders the A1 address
//! users see in Excel.

use super::document::Sheet;

pub const SUMMARY_SHEET: &str = "Summary";
pub const PROJECTS_SHEET: &str = "Projects";
pub const SERVICES_SHEET: &str = "Services";

/// Row 1: bold header. Row 2: visual gap. Data from row 3.
pub const HEADER_ROW: u32 = 0;
pub const FIRST_DATA_ROW: u32 = 2;

/// Lookup sheets: header in row 1, data from row 2.
pub const LOOKUP_FIRST_ROW: u32 = 1;
pub const LOOKUP_HEADERS: [&str; 2] = ["Name", "Id"];

pub const SUMMARY_HEADERS: [&str; 2] = ["Month", "Total Hours"];

pub const DEFAULT_ROW_HEIGHT: f64 = 15.0;
pub const MAX_COLUMN_WIDTH: usize = 150;
pub const COLUMN_PADDING: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Date,
    Project,
    Service,
    Billable,
    Time,
    Description,
    EntryId,
}

impl Column {
    /// Standard order, which is also the default position of each column.
    pub const ALL: [Column; 7] = [
        Column::Date,
        Column::Project,
        Column::Service,
        Column::Billable,
        Column::Time,
        Column::Description,
        Column::EntryId,
    ];

    pub fn header(self) -> &'static str {
        match self {
            Column::Date => "Date",
            Column::Project => "Project Name",
            Column::Service => "Service Name",
            Column::Billable => "Billable?",
            Column::Time => "Time",
            Column::Description => "Entry Description",
            Column::EntryId => "Entry Id",
        }
    }

    pub fn is_hidden(self) -> bool {
        matches!(self, Column::EntryId)
    }

    fn default_index(self) -> u16 {
        Column::ALL.iter().position(|c| *c == self).unwrap_or(0) as u16
    }
}

/// Column positions of a monthly sheet, resolved once per sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthLayout {
    positions: Vec<(Column, u16)>,
}

impl MonthLayout {
    pub fn standard() -> Self {
        Self {
            positions: Column::ALL
                .iter()
                .map(|c| (*c, c.default_index()))
                .collect(),
        }
    }

    /// Locate each column by its header text (case-insensitive), falling back
    /// to the standard position when the header is missing.
    pub fn resolve(sheet: &Sheet) -> Self {
        let width = sheet.column_count().max(Column::ALL.len() as u16);

        let positions = Column::ALL
            .iter()
            .map(|column| {
                let found = (0..width).find(|&col| {
                    sheet
                        .text(HEADER_ROW, col)
                        .trim()
                        .eq_ignore_ascii_case(column.header())
                });
                (*column, found.unwrap_or_else(|| column.default_index()))
            })
            .collect();

        Self { positions }
    }

    pub fn col(&self, column: Column) -> u16 {
        self.positions
            .iter()
            .find(|(c, _)| *c == column)
            .map(|(_, idx)| *idx)
            .unwrap_or_else(|| column.default_index())
    }

    pub fn columns(&self) -> impl Iterator<Item = (Column, u16)> + '_ {
        self.positions.iter().copied()
    }
}

/// 0-based column index → Excel letters (0 → A, 26 → AA).
pub fn column_letter(col: u16) -> String {
    let mut n = col as u32 + 1;
    let mut out = Vec::new();
    while n > 0 {
        let rem = ((n - 1) % 26) as u8;
        out.push((b'A' + rem) as char);
        n = (n - 1) / 26;
    }
    out.iter().rev().collect()
}

/// 0-based (row, col) → "E5".
pub fn cell_name(row: u32, col: u16) -> String {
    format!("{}{}", column_letter(col), row + 1)
}

/// Internal link target pointing at the top of a sheet.
pub fn sheet_anchor(sheet: &str) -> String {
    format!("'{}'!A1", sheet.replace('\'', "''"))
}
