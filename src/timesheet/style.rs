//! Presentation only: bold headers, hidden id column, column auto-sizing and
//! row heights. Nothing here affects what the codec reads back.

use super::document::Sheet;
use super::layout::{
    COLUMN_PADDING, Column, DEFAULT_ROW_HEIGHT, HEADER_ROW, MAX_COLUMN_WIDTH, MonthLayout,
};
use unicode_width::UnicodeWidthStr;

/// Size every column to its widest rendered line, bounded by `MAX_COLUMN_WIDTH`.
pub(crate) fn fit_columns(sheet: &mut Sheet) {
    for col in 0..sheet.column_count() {
        let widest = sheet
            .column_cells(col)
            .flat_map(|cell| cell.text.lines())
            .map(UnicodeWidthStr::width)
            .max()
            .unwrap_or(0);

        let width = (widest + COLUMN_PADDING).min(MAX_COLUMN_WIDTH);
        sheet.set_column_width(col, width as f64);
    }
}

/// Grow a row so every line of a multi-line note stays visible.
pub(crate) fn fit_row(sheet: &mut Sheet, row: u32, lines: usize) {
    if lines > 1 {
        sheet.set_row_height(row, DEFAULT_ROW_HEIGHT * lines as f64);
    }
}

/// Apply the monthly-sheet look: bold header, hidden id column, wrapped text
/// and fitted columns. Used both for freshly rendered sheets and for sheets
/// carried over from the previous file (calamine does not return styles).
pub(crate) fn style_month_sheet(sheet: &mut Sheet, layout: &MonthLayout) {
    sheet.wrap_text = true;

    for (column, col) in layout.columns() {
        if let Some(cell) = sheet.cell_mut(HEADER_ROW, col) {
            cell.bold = true;
        }
        if column.is_hidden() {
            sheet.hide_column(col);
        }
    }

    let description = layout.col(Column::Description);
    let rows: Vec<(u32, usize)> = (HEADER_ROW + 1..sheet.row_count())
        .map(|row| (row, sheet.text(row, description).lines().count()))
        .collect();
    for (row, lines) in rows {
        fit_row(sheet, row, lines);
    }

    fit_columns(sheet);
}
