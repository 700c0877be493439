mod common;
use common::{date, entry, lookup_sheet, lookups, month_sheet, time_col, timesheet_with};
use mighty::errors::{AppError, ErrorKind};
use mighty::models::{Lookups, Minutes, TimeEntryId};
use mighty::timesheet::{Document, decode_month, decode_sheet, encode, read_lookups};

#[test]
fn test_decode_time_cell() {
    let doc = timesheet_with(
        "January 2024",
        &[["2024-01-05", "Acme", "Dev", "true", "01:30:00", "setup", ""]],
    );
    let outcome = decode_month(&doc, date("2024-01-20"), &lookups()).unwrap();

    assert_eq!(outcome.sheet, "January 2024");
    assert_eq!(outcome.entries.len(), 1);
    let e = &outcome.entries[0];
    assert_eq!(e.minutes, Minutes::new(90));
    assert_eq!(e.id, None);
    assert_eq!(e.project_id.0, 101);
    assert_eq!(e.service_id.0, 7);
    assert!(e.billable);
    assert_eq!(e.note, "setup");
}

#[test]
fn test_encode_time_cell() {
    let mut doc = Document::new();
    encode(&mut doc, &[entry(55, "2024-01-05", 90, "setup")], &lookups());

    let sheet = doc.sheet("January 2024").expect("month sheet written");
    assert_eq!(sheet.text(2, time_col()), "01:30:00");
}

#[test]
fn test_round_trip_one_month() {
    let originals = vec![
        entry(11, "2024-02-01", 60, "standup"),
        entry(12, "2024-02-02", 135, "line one\nline two"),
        entry(13, "2024-02-29", 15, ""),
    ];
    let mut doc = Document::new();
    encode(&mut doc, &originals, &lookups());

    let decoded = decode_month(&doc, date("2024-02-10"), &lookups()).unwrap();
    assert!(decoded.unresolved.is_empty());
    assert_eq!(decoded.entries.len(), originals.len());
    for (got, want) in decoded.entries.iter().zip(&originals) {
        assert_eq!(got.id, want.id);
        assert_eq!(got.date, want.date);
        assert_eq!(got.minutes, want.minutes);
        assert_eq!(got.note, want.note);
        assert_eq!(got.billable, want.billable);
    }
}

#[test]
fn test_round_trip_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("entries.xlsx");

    let originals = vec![
        entry(21, "2024-03-04", 480, "long day"),
        entry(22, "2024-03-05", 30, "call"),
    ];
    let mut doc = Document::new();
    encode(&mut doc, &originals, &lookups());
    doc.save(&path).unwrap();

    let reopened = Document::open(&path).unwrap();
    assert_eq!(
        reopened.sheet_names(),
        vec!["Summary", "March 2024", "Projects", "Services"]
    );
    assert!(reopened.sheet("Projects").unwrap().hidden);
    assert!(reopened.sheet("Services").unwrap().hidden);

    let table = read_lookups(&reopened).unwrap();
    assert_eq!(table, lookups());

    let decoded = decode_month(&reopened, date("2024-03-31"), &table).unwrap();
    let ids: Vec<_> = decoded.entries.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![TimeEntryId::new(21), TimeEntryId::new(22)]);
    assert_eq!(decoded.entries[0].minutes, Minutes::new(480));
}

#[test]
fn test_lookup_names_case_insensitive_on_decode() {
    let doc = timesheet_with(
        "January 2024",
        &[["2024-01-05", "globex corp", "MEETING", "false", "00:45:00", "", "77"]],
    );
    let e = &decode_month(&doc, date("2024-01-05"), &lookups()).unwrap().entries[0];
    assert_eq!(e.project_id.0, 102);
    assert_eq!(e.service_id.0, 8);
    assert_eq!(e.project_name, "Globex Corp");
    assert_eq!(e.id, TimeEntryId::new(77));
    assert!(!e.billable);
}

#[test]
fn test_unresolved_names_decode_with_zero_id() {
    let doc = timesheet_with(
        "January 2024",
        &[["2024-01-05", "Initech", "Dev", "1", "01:00:00", "", ""]],
    );
    let outcome = decode_month(&doc, date("2024-01-05"), &lookups()).unwrap();

    assert_eq!(outcome.entries.len(), 1);
    assert_eq!(outcome.entries[0].project_id.0, 0);
    assert_eq!(outcome.entries[0].project_name, "Initech");
    assert_eq!(outcome.unresolved.len(), 1);
    assert_eq!(outcome.unresolved[0].kind(), ErrorKind::Lookup);
}

#[test]
fn test_blank_rows_are_skipped() {
    let doc = timesheet_with(
        "January 2024",
        &[
            ["2024-01-05", "Acme", "Dev", "", "01:00:00", "", ""],
            ["", "", "", "", "", "", ""],
            ["2024-01-06", "Acme", "Dev", "", "02:00:00", "", ""],
        ],
    );
    let outcome = decode_month(&doc, date("2024-01-05"), &lookups()).unwrap();
    assert_eq!(outcome.entries.len(), 2);
    assert!(!outcome.entries[0].billable);
}

#[test]
fn test_missing_month_sheet_decodes_to_nothing() {
    let doc = timesheet_with("January 2024", &[]);
    let outcome = decode_month(&doc, date("2024-02-01"), &lookups()).unwrap();
    assert_eq!(outcome.sheet, "February 2024");
    assert!(outcome.entries.is_empty());
}

#[test]
fn test_missing_lookup_sheets_are_empty_tables() {
    let mut doc = Document::new();
    doc.replace_sheet(month_sheet("January 2024", &[]));
    assert_eq!(read_lookups(&doc).unwrap(), Lookups::default());
}

#[test]
fn test_bad_lookup_id_is_a_format_error() {
    let mut doc = Document::new();
    doc.replace_sheet(lookup_sheet("Projects", &[("Acme", 101)]));
    doc.sheet_mut("Projects").unwrap().set(1, 1, "abc");

    let err = read_lookups(&doc).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Format);
    assert!(err.to_string().contains("'Projects'!B2"), "{err}");
}

#[test]
fn test_format_error_names_the_cell() {
    let doc = timesheet_with(
        "January 2024",
        &[
            ["2024-01-05", "Acme", "Dev", "", "01:00:00", "", ""],
            ["2024-01-06", "Acme", "Dev", "", "soon", "", ""],
        ],
    );
    let err = decode_month(&doc, date("2024-01-05"), &lookups()).unwrap_err();

    match &err {
        AppError::Cell { sheet, cell, source } => {
            assert_eq!(sheet, "January 2024");
            assert_eq!(cell, "E4");
            assert!(matches!(**source, AppError::InvalidDuration(_)));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_bad_flag_and_date_are_format_errors() {
    let flag = timesheet_with(
        "January 2024",
        &[["2024-01-05", "Acme", "Dev", "maybe", "01:00:00", "", ""]],
    );
    let err = decode_month(&flag, date("2024-01-05"), &lookups()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Format);

    let day = timesheet_with(
        "January 2024",
        &[["05.01.2024", "Acme", "Dev", "", "01:00:00", "", ""]],
    );
    let err = decode_month(&day, date("2024-01-05"), &lookups()).unwrap_err();
    assert!(err.to_string().contains("A3"), "{err}");
}

#[test]
fn test_columns_are_found_by_header() {
    let mut sheet = mighty::timesheet::Sheet::new("January 2024");
    let headers = [
        "Entry Id",
        "Time",
        "Date",
        "Entry Description",
        "Service Name",
        "Project Name",
        "Billable?",
    ];
    for (col, h) in headers.iter().enumerate() {
        sheet.set_bold(0, col as u16, *h);
    }
    let row = ["42", "00:30:00", "2024-01-09", "review", "Dev", "Acme", "true"];
    for (col, v) in row.iter().enumerate() {
        sheet.set(2, col as u16, *v);
    }

    let e = &decode_sheet(&sheet, &lookups()).unwrap().entries[0];
    assert_eq!(e.id, TimeEntryId::new(42));
    assert_eq!(e.minutes, Minutes::new(30));
    assert_eq!(e.date, date("2024-01-09"));
    assert_eq!(e.note, "review");
    assert_eq!(e.project_id.0, 101);
}

#[test]
fn test_encode_layout_and_summary() {
    let mut doc = Document::new();
    let report = encode(
        &mut doc,
        &[
            entry(1, "2024-01-30", 60, ""),
            entry(2, "2024-02-01", 30, ""),
            entry(3, "2024-02-02", 45, ""),
        ],
        &lookups(),
    );

    assert_eq!(report.months, vec!["January 2024", "February 2024"]);
    assert_eq!(report.rows, 3);
    assert_eq!(
        doc.sheet_names(),
        vec!["Summary", "January 2024", "February 2024", "Projects", "Services"]
    );
    assert_eq!(doc.active(), Some("Summary"));

    let month = doc.sheet("February 2024").unwrap();
    assert_eq!(month.text(0, 0), "Date");
    assert!(month.cell(0, 0).unwrap().bold);
    assert!(month.is_row_blank(1));
    assert!(month.is_column_hidden(6));

    let summary = doc.sheet("Summary").unwrap();
    assert_eq!(summary.text(2, 0), "January 2024");
    assert_eq!(summary.text(2, 1), "01:00:00");
    assert_eq!(summary.text(3, 0), "February 2024");
    assert_eq!(summary.text(3, 1), "01:15:00");
    assert_eq!(
        summary.cell(3, 0).unwrap().link.as_deref(),
        Some("'February 2024'!A1")
    );
}

#[test]
fn test_encode_keeps_months_outside_the_window() {
    let mut doc = timesheet_with(
        "November 2023",
        &[
            ["2023-11-02", "Acme", "Dev", "true", "02:00:00", "old", "5"],
            ["2023-11-03", "Acme", "Dev", "true", "00:30:00", "", "6"],
        ],
    );
    doc.replace_sheet(mighty::timesheet::Sheet::new("Notes"));

    encode(&mut doc, &[entry(7, "2024-01-08", 60, "")], &lookups());

    assert_eq!(
        doc.sheet_names(),
        vec!["Summary", "November 2023", "January 2024", "Notes", "Projects", "Services"]
    );
    let kept = doc.sheet("November 2023").unwrap();
    assert_eq!(kept.text(2, 5), "old");
    assert!(kept.is_column_hidden(6));

    let summary = doc.sheet("Summary").unwrap();
    assert_eq!(summary.text(2, 0), "November 2023");
    assert_eq!(summary.text(2, 1), "02:30:00");
    assert_eq!(summary.text(3, 0), "January 2024");
}

#[test]
fn test_encode_replaces_month_and_grows_note_rows() {
    let mut doc = timesheet_with(
        "January 2024",
        &[["2024-01-02", "Acme", "Dev", "", "09:00:00", "stale", "99"]],
    );
    encode(&mut doc, &[entry(3, "2024-01-05", 60, "a\nb\nc")], &lookups());

    let month = doc.sheet("January 2024").unwrap();
    assert_eq!(month.text(2, 6), "3");
    assert!(month.is_row_blank(3));
    assert_eq!(month.row_height(2), Some(45.0));
}

#[test]
fn test_encode_fills_names_from_lookups() {
    let mut e = entry(4, "2024-01-05", 60, "");
    e.project_name.clear();
    e.service_name.clear();

    let mut doc = Document::new();
    encode(&mut doc, &[e], &lookups());
    let month = doc.sheet("January 2024").unwrap();
    assert_eq!(month.text(2, 1), "Acme");
    assert_eq!(month.text(2, 2), "Dev");
}

#[test]
fn test_excel_native_cells_are_accepted() {
    use rust_xlsxwriter::{ExcelDateTime, Format, Workbook};

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("typed.xlsx");

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("January 2024").unwrap();
    let headers = [
        "Date",
        "Project Name",
        "Service Name",
        "Billable?",
        "Time",
        "Entry Description",
        "Entry Id",
    ];
    for (col, h) in headers.iter().enumerate() {
        sheet.write_string(0, col as u16, *h).unwrap();
    }
    let day = ExcelDateTime::from_ymd(2024, 1, 5).unwrap();
    sheet
        .write_datetime_with_format(2, 0, &day, &Format::new().set_num_format("yyyy-mm-dd"))
        .unwrap();
    sheet.write_string(2, 1, "Acme").unwrap();
    sheet.write_string(2, 2, "Dev").unwrap();
    sheet.write_boolean(2, 3, true).unwrap();
    sheet
        .write_number_with_format(2, 4, 0.0625, &Format::new().set_num_format("hh:mm:ss"))
        .unwrap();
    sheet.write_string(2, 5, "typed by hand").unwrap();
    sheet.write_number(2, 6, 55).unwrap();
    workbook.save(&path).unwrap();

    let doc = Document::open(&path).unwrap();
    let e = &decode_month(&doc, date("2024-01-05"), &lookups()).unwrap().entries[0];
    assert_eq!(e.date, date("2024-01-05"));
    assert_eq!(e.minutes, Minutes::new(90));
    assert!(e.billable);
    assert_eq!(e.id, TimeEntryId::new(55));
}

#[test]
fn test_whitespace_notes_survive_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.xlsx");

    let mut doc = Document::new();
    encode(
        &mut doc,
        &[
            entry(1, "2024-04-01", 30, "   "),
            entry(2, "2024-04-02", 30, "  padded  "),
        ],
        &lookups(),
    );
    doc.save(&path).unwrap();

    let reopened = Document::open(&path).unwrap();
    let decoded = decode_month(&reopened, date("2024-04-01"), &lookups()).unwrap();
    assert_eq!(decoded.entries[0].note, "   ");
    assert_eq!(decoded.entries[1].note, "  padded  ");
}

/// One hand-typed month row where the Date and Time cells are raw numbers
/// with the given number formats.
fn typed_row_file(path: &std::path::Path, serial: f64, date_fmt: &str, hours: f64, time_fmt: &str) {
    use rust_xlsxwriter::{Format, Workbook};

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("January 2024").unwrap();
    for (col, h) in ["Date", "Project Name", "Service Name", "Billable?", "Time"]
        .iter()
        .enumerate()
    {
        sheet.write_string(0, col as u16, *h).unwrap();
    }
    sheet
        .write_number_with_format(2, 0, serial, &Format::new().set_num_format(date_fmt))
        .unwrap();
    sheet.write_string(2, 1, "Acme").unwrap();
    sheet.write_string(2, 2, "Dev").unwrap();
    sheet
        .write_number_with_format(2, 4, hours / 24.0, &Format::new().set_num_format(time_fmt))
        .unwrap();
    workbook.save(path).unwrap();
}

#[test]
fn test_time_over_a_day_in_clock_format() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("long.xlsx");
    // 45296 = 2024-01-05
    typed_row_file(&path, 45296.0, "yyyy-mm-dd", 25.0, "h:mm");

    let doc = Document::open(&path).unwrap();
    let e = &decode_month(&doc, date("2024-01-05"), &lookups()).unwrap().entries[0];
    assert_eq!(e.date, date("2024-01-05"));
    assert_eq!(e.minutes, Minutes::new(1500));
}

#[test]
fn test_huge_date_serial_is_a_format_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("huge.xlsx");
    typed_row_file(&path, 1e20, "yyyy-mm-dd", 1.5, "hh:mm:ss");

    let doc = Document::open(&path).unwrap();
    let err = decode_month(&doc, date("2024-01-05"), &lookups()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Format);
    assert!(err.to_string().contains("A3"), "{err}");
}
