use calamine::{Data, Reader, open_workbook_auto};
use csv::ReaderBuilder;
use log::{info, warn};
use std::path::Path;

use crate::error::DataSourceError;
use crate::record::StudentTable;
use crate::schema::{SKIP_ROWS, Schema};

/// Load the student table from a spreadsheet file
///
/// Picks the reader from the file extension, skips the leading banner rows,
/// takes the next row as the header and everything after it as data.
///
/// # Arguments
/// * `filepath` - Path to an `.xlsx`, `.xlsm`, `.xlsb`, `.xls`, `.ods` or `.csv` file
///
/// # Returns
/// * `Result<StudentTable, DataSourceError>` - The loaded table or the reason it could not be read
///
/// # Examples
/// ```no_run
/// use student_finder::loader::load_students;
///
/// match load_students("Sample Copy.xlsx") {
///     Ok(table) => println!("Loaded {} students", table.len()),
///     Err(e) => eprintln!("Error loading sheet: {}", e),
/// }
/// ```
pub fn load_students(filepath: impl AsRef<Path>) -> Result<StudentTable, DataSourceError> {
    let path = filepath.as_ref();
    if !path.is_file() {
        return Err(DataSourceError::Missing(path.to_path_buf()));
    }

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase());

    let grid = match extension.as_deref() {
        Some("csv") => read_csv(path)?,
        Some("xlsx" | "xlsm" | "xlsb" | "xls" | "ods") => read_workbook(path)?,
        Some(ext) => return Err(DataSourceError::UnsupportedFormat(ext.to_string())),
        None => return Err(DataSourceError::UnsupportedFormat(String::new())),
    };

    let table = table_from_grid(grid)?;
    info!(
        "loaded {} student records from {}",
        table.len(),
        path.display()
    );
    if table.schema() == Schema::Degraded {
        warn!(
            "{} has only {} columns; fixed schema not applied",
            path.display(),
            table.columns().len()
        );
    }
    Ok(table)
}

/// Builds the table from every sheet row, top row first.
fn table_from_grid(grid: Vec<Vec<String>>) -> Result<StudentTable, DataSourceError> {
    let mut rows = grid.into_iter().skip(SKIP_ROWS);
    let header = rows.next().ok_or(DataSourceError::NoHeader(SKIP_ROWS))?;
    let data: Vec<Vec<String>> = rows.collect();

    let width = data
        .iter()
        .map(Vec::len)
        .chain(std::iter::once(header.len()))
        .max()
        .unwrap_or(0);

    let header = header_names(header, width);
    let before = data.len();
    let table = StudentTable::from_rows(header, data);
    info!("dropped {} blank rows", before - table.len());
    Ok(table)
}

/// Names empty header cells `Unnamed: {i}` and suffixes repeats with `.1`, `.2`, ...
fn header_names(mut header: Vec<String>, width: usize) -> Vec<String> {
    header.resize(width, String::new());

    let mut names: Vec<String> = Vec::with_capacity(width);
    for (i, cell) in header.into_iter().enumerate() {
        let base = if cell.is_empty() {
            format!("Unnamed: {i}")
        } else {
            cell
        };

        let mut name = base.clone();
        let mut n = 1;
        while names.contains(&name) {
            name = format!("{base}.{n}");
            n += 1;
        }
        names.push(name);
    }
    names
}

/// Reads the first worksheet as strings, addressed from A1.
fn read_workbook(path: &Path) -> Result<Vec<Vec<String>>, DataSourceError> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(DataSourceError::NoWorksheet)??;

    let Some((last_row, last_col)) = range.end() else {
        return Ok(Vec::new());
    };

    let grid: Vec<Vec<String>> = (0..=last_row)
        .map(|r| {
            (0..=last_col)
                .map(|c| range.get_value((r, c)).map(cell_text).unwrap_or_default())
                .collect()
        })
        .collect();
    Ok(grid)
}

/// Text of one workbook cell, the way a spreadsheet shows it when read as a string.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            if f.fract() == 0.0 && f.abs() < 1e15 {
                format!("{}", *f as i64)
            } else {
                f.to_string()
            }
        }
        Data::Bool(b) => (if *b { "True" } else { "False" }).to_string(),
        Data::DateTime(dt) => dt
            .as_datetime()
            .map(|ndt| ndt.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| dt.as_f64().to_string()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Error(_) => String::new(),
    }
}

/// Reads a CSV file as strings, one entry per record.
///
/// Quoted fields may span lines. Rows may differ in length.
fn read_csv(path: &Path) -> Result<Vec<Vec<String>>, DataSourceError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut grid = Vec::new();
    for record in reader.records() {
        let record = record?;
        grid.push(record.iter().map(str::to_string).collect());
    }
    Ok(grid)
}
