mod common;

use student_finder::schema::{FIXED_COLUMNS, Schema};
use student_finder::{
    DataSourceError, Evaluation, Mark, SearchBy, find_student, format_report, load_students,
};
use tempfile::tempdir;

fn assert_loaded_students(path: &std::path::Path) {
    let table = load_students(path).expect("sheet should load");

    assert_eq!(table.schema(), Schema::Fixed);
    assert_eq!(table.columns(), &FIXED_COLUMNS.map(String::from)[..]);
    // five data rows, one of them blank
    assert_eq!(table.len(), 4);

    let john = &table.records()[0];
    assert_eq!(john.usn(), "1AB24CS001");
    assert_eq!(john.student_name(), "JOHN DOE");
    assert_eq!(john.serial_no(), "1");

    let eval = Evaluation::of(john);
    assert_eq!(eval.subjects_counted, 6);
    assert_eq!(eval.total_marks, 264);

    // sentinels are blanked, so they read as absent
    let sentinel = &table.records()[3];
    assert_eq!(sentinel.student_name(), "");
    assert_eq!(sentinel.field("BMATS201"), "");
    assert_eq!(sentinel.field("BCHES202"), "");
    assert_eq!(sentinel.field("BCEDK203"), "");
    assert_eq!(Evaluation::of(sentinel).subjects_counted, 5);
}

#[test]
fn loads_csv_sheet() {
    let dir = tempdir().unwrap();
    let path = common::write_csv(dir.path(), &common::HEADER, &common::student_rows());
    assert_loaded_students(&path);
}

#[test]
fn loads_xlsx_sheet() {
    let dir = tempdir().unwrap();
    let path = common::write_xlsx(dir.path(), &common::HEADER, &common::student_rows());
    assert_loaded_students(&path);

    let table = load_students(&path).unwrap();
    let asha = find_student(&table, SearchBy::Name, "asha rao").unwrap();
    assert!(format_report(asha).contains("  BMATS201 (Mathematics): 45/50"));
}

#[test]
fn loading_twice_gives_identical_tables() {
    let dir = tempdir().unwrap();
    let path = common::write_xlsx(dir.path(), &common::HEADER, &common::student_rows());
    let first = load_students(&path).unwrap();
    let second = load_students(&path).unwrap();
    assert_eq!(first, second);

    let usn = first.records()[0].usn().to_string();
    let a = find_student(&first, SearchBy::Usn, &usn).unwrap();
    let b = find_student(&second, SearchBy::Usn, &usn).unwrap();
    assert_eq!(format_report(a), format_report(b));
}

#[test]
fn quoted_csv_field_may_span_lines() {
    let dir = tempdir().unwrap();
    let rows = vec![vec![
        "1", "1AB24CS009", "22CS", "DOE,\nJOHN", "45", "45", "45", "45", "45", "45", "45", "45",
    ]];
    let path = common::write_csv(dir.path(), &common::HEADER, &rows);

    let table = load_students(&path).unwrap();
    assert_eq!(table.schema(), Schema::Fixed);
    assert_eq!(table.len(), 1);

    let student = &table.records()[0];
    assert_eq!(student.student_name(), "DOE,\nJOHN");
    let eval = Evaluation::of(student);
    assert_eq!(eval.subjects_counted, 8);
    assert_eq!(eval.total_marks, 360);
    assert!(
        eval.subjects
            .iter()
            .all(|result| result.mark == Mark::Numeric(45))
    );
}

#[test]
fn xlsx_missing_value_markers_read_as_absent() {
    let dir = tempdir().unwrap();
    let rows = vec![
        vec!["1", "1AB24CS010", "22CS", "ASHA", "N/A", "NA", "NULL", "null", "#N/A", "n/a", "40", "41"],
        vec!["None", "nan", "NaN", "NA", "N/A", "NULL", "null", "<NA>", "#N/A", "n/a", "-nan", "#NA"],
        vec!["2", "1AB24CS011", "22CS", "BALA", "45", "45", "45", "45", "45", "45", "45", "45"],
    ];
    let path = common::write_xlsx(dir.path(), &common::HEADER, &rows);

    let table = load_students(&path).unwrap();
    // the all-marker row counts as blank
    assert_eq!(table.len(), 2);
    assert_eq!(table.records()[1].student_name(), "BALA");

    let eval = Evaluation::of(&table.records()[0]);
    assert!(eval.subjects[..6].iter().all(|result| result.mark == Mark::Absent));
    assert_eq!(eval.subjects_counted, 2);
    assert_eq!(eval.total_marks, 81);
}

#[test]
fn narrow_sheet_keeps_its_header() {
    let dir = tempdir().unwrap();
    let rows = vec![vec!["Asha", "40"], vec!["Bala", "AB"]];
    let path = common::write_csv(dir.path(), &["Name", "Marks"], &rows);

    let table = load_students(&path).unwrap();
    assert_eq!(table.schema(), Schema::Degraded);
    assert_eq!(table.columns(), &["Name".to_string(), "Marks".to_string()]);
    assert_eq!(table.len(), 2);
    assert!(find_student(&table, SearchBy::Name, "asha").is_none());

    // the report still renders against missing columns
    let report = format_report(&table.records()[0]);
    assert!(report.contains("BMATS201 (Mathematics): Absent"));
    assert!(!report.contains("Total Marks"));
}

#[test]
fn missing_file_is_a_data_source_error() {
    let dir = tempdir().unwrap();
    let err = load_students(dir.path().join("Sample Copy.xlsx")).unwrap_err();
    assert!(matches!(err, DataSourceError::Missing(_)));
}

#[test]
fn corrupt_workbook_is_a_data_source_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.xlsx");
    std::fs::write(&path, b"this is not a zip archive").unwrap();
    let err = load_students(&path).unwrap_err();
    assert!(matches!(err, DataSourceError::Workbook(_)));
}

#[test]
fn unknown_extension_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("students.txt");
    std::fs::write(&path, "a,b\n").unwrap();
    let err = load_students(&path).unwrap_err();
    assert!(matches!(err, DataSourceError::UnsupportedFormat(ext) if ext == "txt"));
}
