//! In-memory workbook: named sheets holding a sparse grid of text cells plus
//! the presentation attributes the timesheet needs (bold header cells,
//! internal links, hidden columns/sheets, column widths, row heights).
//!
//! Loading goes through calamine, saving through rust_xlsxwriter; everything
//! in between is plain data so the codec can be tested without touching disk.

use crate::errors::{AppError, AppResult};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cell {
    pub text: String,
    pub bold: bool,
    /// Internal link target, e.g. `'January 2024'!A1`.
    pub link: Option<String>,
}

impl Cell {
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty() && self.link.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sheet {
    pub name: String,
    pub hidden: bool,
    /// Left/vertical-center/wrap style for non-bold cells.
    pub wrap_text: bool,
    cells: BTreeMap<(u32, u16), Cell>,
    hidden_columns: BTreeSet<u16>,
    column_widths: BTreeMap<u16, f64>,
    row_heights: BTreeMap<u32, f64>,
}

impl Sheet {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    pub fn set(&mut self, row: u32, col: u16, text: impl Into<String>) {
        let text = text.into();
        let cell = self.cells.entry((row, col)).or_default();
        cell.text = text;
    }

    pub fn set_bold(&mut self, row: u32, col: u16, text: impl Into<String>) {
        self.set(row, col, text);
        if let Some(cell) = self.cells.get_mut(&(row, col)) {
            cell.bold = true;
        }
    }

    pub fn set_link(&mut self, row: u32, col: u16, text: impl Into<String>, target: String) {
        self.set(row, col, text);
        if let Some(cell) = self.cells.get_mut(&(row, col)) {
            cell.link = Some(target);
        }
    }

    pub fn cell(&self, row: u32, col: u16) -> Option<&Cell> {
        self.cells.get(&(row, col))
    }

    pub fn cell_mut(&mut self, row: u32, col: u16) -> Option<&mut Cell> {
        self.cells.get_mut(&(row, col))
    }

    /// Cell text, "" when the cell is absent.
    pub fn text(&self, row: u32, col: u16) -> &str {
        self.cell(row, col).map(|c| c.text.as_str()).unwrap_or("")
    }

    pub fn cells(&self) -> impl Iterator<Item = ((u32, u16), &Cell)> {
        self.cells.iter().map(|(pos, c)| (*pos, c))
    }

    /// Number of rows up to the last non-empty one.
    pub fn row_count(&self) -> u32 {
        self.cells.keys().map(|(r, _)| r + 1).max().unwrap_or(0)
    }

    pub fn column_count(&self) -> u16 {
        self.cells.keys().map(|(_, c)| c + 1).max().unwrap_or(0)
    }

    pub fn is_row_blank(&self, row: u32) -> bool {
        self.cells
            .range((row, 0)..=(row, u16::MAX))
            .all(|(_, c)| c.is_blank())
    }

    pub fn column_cells(&self, col: u16) -> impl Iterator<Item = &Cell> {
        self.cells
            .iter()
            .filter(move |((_, c), _)| *c == col)
            .map(|(_, cell)| cell)
    }

    pub fn hide_column(&mut self, col: u16) {
        self.hidden_columns.insert(col);
    }

    pub fn is_column_hidden(&self, col: u16) -> bool {
        self.hidden_columns.contains(&col)
    }

    pub fn hidden_columns(&self) -> impl Iterator<Item = u16> + '_ {
        self.hidden_columns.iter().copied()
    }

    pub fn set_column_width(&mut self, col: u16, width: f64) {
        self.column_widths.insert(col, width);
    }

    pub fn column_width(&self, col: u16) -> Option<f64> {
        self.column_widths.get(&col).copied()
    }

    pub fn column_widths(&self) -> impl Iterator<Item = (u16, f64)> + '_ {
        self.column_widths.iter().map(|(c, w)| (*c, *w))
    }

    pub fn set_row_height(&mut self, row: u32, height: f64) {
        self.row_heights.insert(row, height);
    }

    pub fn row_height(&self, row: u32) -> Option<f64> {
        self.row_heights.get(&row).copied()
    }

    pub fn row_heights(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.row_heights.iter().map(|(r, h)| (*r, *h))
    }
}

/// An ordered set of sheets. Sheet names compare case-insensitively, as in Excel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    sheets: Vec<Sheet>,
    active: Option<String>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a workbook from disk.
    pub fn open(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Err(AppError::DocumentNotFound(path.to_path_buf()));
        }
        super::reader::read_document(path)
    }

    /// Load a workbook, or start an empty one when the file does not exist yet.
    pub fn open_or_new(path: &Path) -> AppResult<Self> {
        if path.exists() {
            Self::open(path)
        } else {
            tracing::debug!("{} does not exist, starting a new timesheet", path.display());
            Ok(Self::new())
        }
    }

    /// Write the whole workbook to disk, replacing any existing file.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        super::xlsx::write_document(self, path)
    }

    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name))
    }

    pub fn sheet_mut(&mut self, name: &str) -> Option<&mut Sheet> {
        self.sheets
            .iter_mut()
            .find(|s| s.name.eq_ignore_ascii_case(name))
    }

    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    pub fn sheets_mut(&mut self) -> impl Iterator<Item = &mut Sheet> {
        self.sheets.iter_mut()
    }

    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.name.as_str()).collect()
    }

    /// Replace the sheet with the same name in place, or append it.
    pub fn replace_sheet(&mut self, sheet: Sheet) {
        match self
            .sheets
            .iter_mut()
            .find(|s| s.name.eq_ignore_ascii_case(&sheet.name))
        {
            Some(existing) => *existing = sheet,
            None => self.sheets.push(sheet),
        }
    }

    pub fn remove_sheet(&mut self, name: &str) -> Option<Sheet> {
        let idx = self
            .sheets
            .iter()
            .position(|s| s.name.eq_ignore_ascii_case(name))?;
        Some(self.sheets.remove(idx))
    }

    /// Stable reorder of the sheets by a caller-supplied key.
    pub fn sort_sheets_by_key<K: Ord, F: FnMut(&Sheet) -> K>(&mut self, key: F) {
        self.sheets.sort_by_key(key);
    }

    pub fn set_active(&mut self, name: &str) {
        self.active = Some(name.to_string());
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }
}
