// src/timesheet/xlsx.rs

use super::document::{Document, Sheet};
use crate::errors::AppResult;
use rust_xlsxwriter::{Format, FormatAlign, Url, Workbook, Worksheet};
use std::path::Path;

/// Serialize the whole document to an .xlsx file.
pub(crate) fn write_document(doc: &Document, path: &Path) -> AppResult<()> {
    tracing::debug!("Writing to disk {} ...", path.display());

    let mut workbook = Workbook::new();

    let header_format = Format::new().set_bold();
    let text_format = Format::new()
        .set_align(FormatAlign::Left)
        .set_align(FormatAlign::VerticalCenter)
        .set_text_wrap();

    for sheet in doc.sheets() {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&sheet.name)?;

        write_cells(worksheet, sheet, &header_format, &text_format)?;

        // ---------------------------
        // Layout
        // ---------------------------
        for (col, width) in sheet.column_widths() {
            worksheet.set_column_width(col, width)?;
        }
        for col in sheet.hidden_columns() {
            worksheet.set_column_hidden(col)?;
        }
        for (row, height) in sheet.row_heights() {
            worksheet.set_row_height(row, height)?;
        }

        let is_active = doc
            .active()
            .is_some_and(|a| a.eq_ignore_ascii_case(&sheet.name));

        if sheet.hidden && !is_active {
            worksheet.set_hidden(true);
        }
        if is_active {
            worksheet.set_active(true);
        }
    }

    // un workbook senza fogli non è un file valido
    if doc.sheets().is_empty() {
        workbook.add_worksheet();
    }

    workbook.save(path)?;
    Ok(())
}

fn write_cells(
    worksheet: &mut Worksheet,
    sheet: &Sheet,
    header_format: &Format,
    text_format: &Format,
) -> AppResult<()> {
    for ((row, col), cell) in sheet.cells() {
        // solo celle davvero vuote: una nota di soli spazi va conservata
        if cell.text.is_empty() && cell.link.is_none() {
            continue;
        }

        if let Some(target) = &cell.link {
            let url = Url::new(format!("internal:{target}"));
            worksheet.write_url_with_text(row, col, url, cell.text.as_str())?;
            continue;
        }

        if cell.bold {
            worksheet.write_string_with_format(row, col, cell.text.as_str(), header_format)?;
        } else if sheet.wrap_text {
            worksheet.write_string_with_format(row, col, cell.text.as_str(), text_format)?;
        } else {
            worksheet.write_string(row, col, cell.text.as_str())?;
        }
    }
    Ok(())
}
