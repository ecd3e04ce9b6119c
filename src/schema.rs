//! The fixed column layout of the results sheet.

/// Highest mark obtainable in any one subject.
pub const MAX_MARKS: i64 = 50;

/// Leading rows (titles, merged banners) skipped before the header row.
pub const SKIP_ROWS: usize = 2;

pub const SERIAL_NO: &str = "Sl_No";
pub const USN: &str = "USN_LIBRARY";
pub const COURSE_CODE: &str = "Course_Code";
pub const STUDENT_NAME: &str = "Student_Name";

/// One examined subject: the column code used in the sheet and its display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subject {
    pub code: &'static str,
    pub name: &'static str,
}

/// Subjects in display order.
pub const SUBJECTS: [Subject; 8] = [
    Subject { code: "BMATS201", name: "Mathematics" },
    Subject { code: "BCHES202", name: "Chemistry" },
    Subject { code: "BCEDK203", name: "Basic Electronics" },
    Subject { code: "BESCK204A", name: "Environmental Science" },
    Subject { code: "BPLCK205B", name: "Programming in C" },
    Subject { code: "BPWSK206", name: "Web Programming" },
    Subject { code: "BICOK207", name: "Indian Constitution" },
    Subject { code: "BSFHK258", name: "Soft Skills" },
];

/// Names given, by position, to the first twelve columns of a full-width sheet.
pub const FIXED_COLUMNS: [&str; 12] = [
    SERIAL_NO,
    USN,
    COURSE_CODE,
    STUDENT_NAME,
    "BMATS201",
    "BCHES202",
    "BCEDK203",
    "BESCK204A",
    "BPLCK205B",
    "BPWSK206",
    "BICOK207",
    "BSFHK258",
];

/// How the header of a loaded sheet was interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Schema {
    /// At least twelve columns; the first twelve carry the fixed names.
    Fixed,
    /// Too few columns; the sheet's own header names are kept.
    Degraded,
}

impl Schema {
    /// Applies the fixed schema to a header row, returning the final column names.
    ///
    /// Columns past the twelfth keep their original names.
    pub fn apply(header: Vec<String>) -> (Schema, Vec<String>) {
        if header.len() < FIXED_COLUMNS.len() {
            return (Schema::Degraded, header);
        }

        let columns = header
            .into_iter()
            .enumerate()
            .map(|(i, name)| match FIXED_COLUMNS.get(i) {
                Some(fixed) => fixed.to_string(),
                None => name,
            })
            .collect();
        (Schema::Fixed, columns)
    }
}
