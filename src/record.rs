use serde::ser::{Serialize, SerializeMap, Serializer};
use std::sync::Arc;

use crate::schema::{self, Schema};

/// Placeholder strings that mean "no value" and are blanked at load time.
///
/// Matched exactly, so `none` or ` NA ` stay as they are.
pub const MISSING_SENTINELS: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// One student row.
///
/// Cells are kept as raw strings, addressed by column name. Column names are
/// shared with the owning table.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentRecord {
    columns: Arc<[String]>,
    cells: Vec<String>,
}

impl StudentRecord {
    /// Builds a record, padding or truncating `cells` to the column count.
    pub fn new(columns: Arc<[String]>, mut cells: Vec<String>) -> Self {
        cells.resize(columns.len(), String::new());
        StudentRecord { columns, cells }
    }

    /// Raw value of `column`, or `None` if the sheet has no such column.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.columns
            .iter()
            .position(|c| c == column)
            .map(|i| self.cells[i].as_str())
    }

    /// Like [`get`](Self::get) but a missing column reads as empty.
    pub fn field(&self, column: &str) -> &str {
        self.get(column).unwrap_or("")
    }

    pub fn serial_no(&self) -> &str {
        self.field(schema::SERIAL_NO)
    }

    pub fn usn(&self) -> &str {
        self.field(schema::USN)
    }

    pub fn course_code(&self) -> &str {
        self.field(schema::COURSE_CODE)
    }

    pub fn student_name(&self) -> &str {
        self.field(schema::STUDENT_NAME)
    }

    pub fn cells(&self) -> &[String] {
        &self.cells
    }
}

impl Serialize for StudentRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cells.len()))?;
        for (column, cell) in self.columns.iter().zip(&self.cells) {
            map.serialize_entry(column, cell)?;
        }
        map.end()
    }
}

/// The loaded sheet: column names plus every non-blank row, in sheet order.
///
/// Built once and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentTable {
    schema: Schema,
    columns: Arc<[String]>,
    records: Vec<StudentRecord>,
}

impl StudentTable {
    /// Builds the table from a header row and raw data rows.
    ///
    /// Missing-value sentinels are blanked first, so a row holding nothing but
    /// sentinels counts as blank and is dropped along with the empty ones.
    pub fn from_rows(header: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let (schema, columns) = Schema::apply(header);
        let columns: Arc<[String]> = columns.into();

        let records = rows
            .into_iter()
            .map(|row| row.into_iter().map(normalize_cell).collect::<Vec<_>>())
            .filter(|cells| !is_blank(cells))
            .map(|cells| StudentRecord::new(Arc::clone(&columns), cells))
            .collect();

        StudentTable {
            schema,
            columns,
            records,
        }
    }

    pub fn schema(&self) -> Schema {
        self.schema
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn is_blank(row: &[String]) -> bool {
    row.iter().all(|cell| cell.is_empty())
}

fn normalize_cell(cell: String) -> String {
    if MISSING_SENTINELS.contains(&cell.as_str()) {
        String::new()
    } else {
        cell
    }
}
