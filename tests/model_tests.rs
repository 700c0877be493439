mod common;
use common::date;
use mighty::errors::{AppError, ErrorKind};
use mighty::models::{LocalDate, LookupTable, Minutes, ProjectId, ServiceId, TimeEntry, TimeEntryId};
use mighty::utils::{mask_secret, parse_window};

#[test]
fn test_minutes_render_as_clock() {
    assert_eq!(Minutes::new(90).to_string(), "01:30:00");
    assert_eq!(Minutes::new(0).to_string(), "00:00:00");
    assert_eq!(Minutes::new(1500).to_string(), "25:00:00");
}

#[test]
fn test_minutes_parse_accepted_forms() {
    assert_eq!("01:30:00".parse::<Minutes>().unwrap(), Minutes::new(90));
    assert_eq!("1:30".parse::<Minutes>().unwrap(), Minutes::new(90));
    assert_eq!(" 25:00:00 ".parse::<Minutes>().unwrap(), Minutes::new(1500));
    assert_eq!("1h30m0s".parse::<Minutes>().unwrap(), Minutes::new(90));
    assert_eq!("45m".parse::<Minutes>().unwrap(), Minutes::new(45));
}

#[test]
fn test_minutes_parse_rejects_garbage_and_seconds() {
    for bad in ["", "abc", "01:60:00", "01:30:15", "1:2:3:4", "-1:00", "90s"] {
        let err = bad.parse::<Minutes>().unwrap_err();
        assert!(matches!(err, AppError::InvalidDuration(_)), "{bad}: {err}");
        assert_eq!(err.kind(), ErrorKind::Format);
    }
}

#[test]
fn test_minutes_sum() {
    let total: Minutes = [30, 45, 15].into_iter().map(Minutes::new).sum();
    assert_eq!(total, Minutes::new(90));
}

#[test]
fn test_local_date_partition_name() {
    let d = date("2024-01-05");
    assert_eq!(d.partition_name(), "January 2024");
    assert_eq!(d.month_start(), date("2024-01-01"));
    assert_eq!(LocalDate::from_partition_name("January 2024"), Some(d.month_start()));
    assert_eq!(LocalDate::from_partition_name("Summary"), None);
    assert_eq!(LocalDate::from_partition_name("Projects"), None);
}

#[test]
fn test_local_date_parse_errors() {
    assert!(matches!("2024-13-01".parse::<LocalDate>(), Err(AppError::InvalidDate(_))));
    assert!(matches!("05/01/2024".parse::<LocalDate>(), Err(AppError::InvalidDate(_))));
    assert_eq!(date("2024-03-09").to_string(), "2024-03-09");
}

#[test]
fn test_entry_id_cell() {
    assert_eq!(TimeEntryId::parse_cell("").unwrap(), None);
    assert_eq!(TimeEntryId::parse_cell("0").unwrap(), None);
    assert_eq!(TimeEntryId::parse_cell(" 55 ").unwrap(), TimeEntryId::new(55));
    assert!(matches!(TimeEntryId::parse_cell("5x"), Err(AppError::InvalidId(_))));
    assert!(matches!(TimeEntryId::parse_cell("-3"), Err(AppError::InvalidId(_))));
}

#[test]
fn test_entry_references() {
    let mut e = TimeEntry::new(date("2024-01-05"), Minutes::new(30));
    assert!(e.is_new());
    assert!(!e.has_references());

    e.project_id = ProjectId(101);
    assert!(!e.has_references());
    e.service_id = ServiceId(7);
    assert!(e.has_references());

    e.note = "one\ntwo\nthree".into();
    assert_eq!(e.note_lines(), 3);
}

#[test]
fn test_lookup_is_case_insensitive() {
    let table: LookupTable = [("Acme Corp", 101)].into_iter().collect();
    assert_eq!(table.id_of("Acme Corp"), Some(101));
    assert_eq!(table.id_of("acme corp"), Some(101));
    assert_eq!(table.id_of("  ACME CORP "), Some(101));
    assert_eq!(table.resolve("acme corp"), Some(("Acme Corp", 101)));
    assert_eq!(table.id_of("Acme"), None);
}

#[test]
fn test_lookup_duplicate_name_last_id_wins() {
    let table: LookupTable = [("Dev", 7), ("Meeting", 8), ("dev", 9)].into_iter().collect();
    assert_eq!(table.len(), 2);
    assert_eq!(table.id_of("DEV"), Some(9));
    let order: Vec<&str> = table.iter().map(|(n, _)| n).collect();
    assert_eq!(order, vec!["dev", "Meeting"]);
    assert_eq!(table.name_of(8), Some("Meeting"));
}

#[test]
fn test_parse_window() {
    assert_eq!(parse_window("4w").unwrap(), chrono::Duration::weeks(4));
    assert_eq!(parse_window("14d").unwrap(), chrono::Duration::days(14));
    assert_eq!(parse_window("2weeks").unwrap(), chrono::Duration::weeks(2));
    assert!(matches!(parse_window("0s"), Err(AppError::InvalidWindow(_))));
    assert!(matches!(parse_window("soon"), Err(AppError::InvalidWindow(_))));
}

#[test]
fn test_mask_secret() {
    assert_eq!(mask_secret("abcdef123456"), "********3456");
    assert_eq!(mask_secret("abc"), "***");
}

#[test]
fn test_plural() {
    use mighty::utils::plural;
    assert_eq!(plural(1, "entry"), "1 entry");
    assert_eq!(plural(2, "entry"), "2 entries");
    assert_eq!(plural(0, "month"), "0 months");
}
