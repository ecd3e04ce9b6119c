#![allow(dead_code)]

use rust_xlsxwriter::Workbook;
use std::fs;
use std::path::{Path, PathBuf};

pub const HEADER: [&str; 12] = [
    "Sl No",
    "USN",
    "Course",
    "Name",
    "MATHS",
    "CHEM",
    "ELEC",
    "EVS",
    "C",
    "WEB",
    "CONST",
    "SOFT",
];

/// Student rows used across tests, banner rows excluded.
pub fn student_rows() -> Vec<Vec<&'static str>> {
    vec![
        vec!["1", "1AB24CS001", "22CS", "JOHN DOE", "45", "38", "AB", "50", "xyz", "42", "40", "49"],
        vec!["", "", "", "", "", "", "", "", "", "", "", ""],
        vec!["2", "1AB24CS002", "22CS", "Asha Rao", "45.9", "ab", "", "", "", "", "", ""],
        vec!["3", "1AB24CS003", "22CS", "Absent Student", "AB", "AB", "AB", "AB", "AB", "AB", "AB", "AB"],
        vec!["4", "1AB24CS004", "22CS", "None", "nan", "NaN", "None", "30", "30", "30", "30", "30"],
    ]
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Writes a CSV with two banner rows, the header and `rows`.
pub fn write_csv(dir: &Path, header: &[&str], rows: &[Vec<&str>]) -> PathBuf {
    let mut content = String::from("SEMESTER RESULTS,,\n,,\n");
    for row in std::iter::once(header).chain(rows.iter().map(|r| r.as_slice())) {
        let line: Vec<String> = row.iter().map(|v| csv_field(v)).collect();
        content.push_str(&line.join(","));
        content.push('\n');
    }
    let path = dir.join("students.csv");
    fs::write(&path, content).unwrap();
    path
}

/// Writes an XLSX workbook with a banner in A1, the header on row 3 and `rows` below.
///
/// Cells that look numeric are written as numbers, the rest as text.
pub fn write_xlsx(dir: &Path, header: &[&str], rows: &[Vec<&str>]) -> PathBuf {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.write_string(0, 0, "SEMESTER RESULTS").unwrap();

    for (c, name) in header.iter().enumerate() {
        worksheet.write_string(2, c as u16, *name).unwrap();
    }
    for (r, row) in rows.iter().enumerate() {
        let excel_row = (r + 3) as u32;
        for (c, value) in row.iter().enumerate() {
            if value.is_empty() {
                continue;
            }
            match value.parse::<f64>() {
                Ok(number) if number.is_finite() => {
                    worksheet.write_number(excel_row, c as u16, number).unwrap();
                }
                _ => {
                    worksheet.write_string(excel_row, c as u16, *value).unwrap();
                }
            }
        }
    }

    let path = dir.join("students.xlsx");
    workbook.save(&path).unwrap();
    path
}
