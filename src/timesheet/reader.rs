//! Workbook loading through calamine.

use super::document::{Document, Sheet};
use super::excel_date::serial_to_text;
use crate::errors::AppResult;
use calamine::{Data, Reader, SheetType, SheetVisible, open_workbook_auto};
use std::path::Path;

pub(crate) fn read_document(path: &Path) -> AppResult<Document> {
    tracing::debug!("Reading workbook {}", path.display());

    let mut workbook = open_workbook_auto(path)?;

    // (nome, nascosto) per ogni foglio di lavoro; i chart sheet non hanno celle
    let metadata: Vec<(String, bool)> = workbook
        .sheets_metadata()
        .iter()
        .filter(|s| matches!(s.typ, SheetType::WorkSheet))
        .map(|s| (s.name.clone(), !matches!(s.visible, SheetVisible::Visible)))
        .collect();

    let mut doc = Document::new();

    for (name, hidden) in metadata {
        let range = workbook.worksheet_range(&name)?;
        let mut sheet = Sheet::new(&name);
        sheet.hidden = hidden;

        if let Some((row0, col0)) = range.start() {
            for (r, c, data) in range.cells() {
                let text = cell_to_string(data);
                if text.is_empty() {
                    continue;
                }
                let row = row0 + r as u32;
                let col = (col0 as usize + c) as u16;
                sheet.set(row, col, text);
            }
        }

        tracing::debug!("Loaded sheet '{}' ({} rows)", sheet.name, sheet.row_count());
        doc.replace_sheet(sheet);
    }

    Ok(doc)
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(n) => n.to_string(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", *f as i64),
        Data::Float(f) => format!("{}", f),
        Data::Bool(b) => b.to_string(),
        Data::Error(e) => format!("#ERR({:?})", e),
        Data::DateTime(dt) => serial_to_text(dt.as_f64(), dt.is_duration()),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
    }
}
