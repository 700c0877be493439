//! The "Summary" sheet: one line per month with its total time and a link
//! to the month's own sheet.

use super::document::Sheet;
use super::layout::{
    Column, FIRST_DATA_ROW, HEADER_ROW, MonthLayout, SUMMARY_HEADERS, SUMMARY_SHEET, sheet_anchor,
};
use super::style::fit_columns;
use crate::models::{LocalDate, Minutes};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthTotal {
    pub month: LocalDate, // primo giorno del mese
    pub sheet: String,
    pub total: Minutes,
}

pub(crate) fn render_summary(totals: &[MonthTotal]) -> Sheet {
    let mut sheet = Sheet::new(SUMMARY_SHEET);

    for (col, header) in SUMMARY_HEADERS.iter().enumerate() {
        sheet.set_bold(HEADER_ROW, col as u16, *header);
    }

    for (i, month) in totals.iter().enumerate() {
        let row = FIRST_DATA_ROW + i as u32;
        sheet.set_link(row, 0, month.sheet.as_str(), sheet_anchor(&month.sheet));
        sheet.set(row, 1, month.total.to_string());
    }

    fit_columns(&mut sheet);
    sheet
}

/// Re-sum the Time column of a month sheet we did not rewrite.
/// Cells that do not parse are skipped: the summary is informative only.
pub(crate) fn sum_time_column(sheet: &Sheet) -> Minutes {
    let layout = MonthLayout::resolve(sheet);
    let col = layout.col(Column::Time);

    (FIRST_DATA_ROW..sheet.row_count())
        .filter(|row| !sheet.is_row_blank(*row))
        .filter_map(|row| match sheet.text(row, col).parse::<Minutes>() {
            Ok(m) => Some(m),
            Err(e) => {
                tracing::warn!("'{}' row {}: {e}, left out of the summary", sheet.name, row + 1);
                None
            }
        })
        .sum()
}
