use serde::Deserialize;
use std::fmt;

use crate::record::{StudentRecord, StudentTable};
use crate::schema;

/// Which identifying field a search compares against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchBy {
    #[default]
    #[serde(alias = "Student Name", alias = "student_name")]
    Name,
    #[serde(alias = "USN")]
    Usn,
}

impl SearchBy {
    /// Column holding the search key.
    pub fn column(self) -> &'static str {
        match self {
            SearchBy::Name => schema::STUDENT_NAME,
            SearchBy::Usn => schema::USN,
        }
    }

    /// Label shown next to the search box.
    pub fn label(self) -> &'static str {
        match self {
            SearchBy::Name => "Student Name",
            SearchBy::Usn => "USN",
        }
    }

    pub fn parse(value: &str) -> Option<SearchBy> {
        match value.to_ascii_lowercase().as_str() {
            "name" | "student name" | "student_name" => Some(SearchBy::Name),
            "usn" => Some(SearchBy::Usn),
            _ => None,
        }
    }
}

impl fmt::Display for SearchBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SearchBy::Name => "name",
            SearchBy::Usn => "usn",
        })
    }
}

/// Find the first record whose search field equals `query` ignoring case
///
/// Whitespace is significant. A sheet without the search column never matches.
///
/// # Arguments
/// * `table` - The loaded student table
/// * `by` - Which column to compare, the student name or the USN
/// * `query` - The text typed by the user, compared as is
///
/// # Returns
/// * `Option<&StudentRecord>` - The first match in sheet order, or `None`
///
/// # Examples
/// ```no_run
/// use student_finder::{SearchBy, find_student, load_students};
///
/// let table = load_students("Sample Copy.xlsx").unwrap();
/// if let Some(student) = find_student(&table, SearchBy::Usn, "1ab24cs001") {
///     println!("Found {}", student.student_name());
/// }
/// ```
pub fn find_student<'a>(
    table: &'a StudentTable,
    by: SearchBy,
    query: &str,
) -> Option<&'a StudentRecord> {
    let needle = query.to_lowercase();
    table
        .records()
        .iter()
        .find(|record| record.get(by.column()).is_some_and(|v| v.to_lowercase() == needle))
}
