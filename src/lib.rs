/*!
# Student Information Finder

A small browser-based lookup tool for semester results, built in Rust.

## Overview

The application reads a results spreadsheet once, lets a user search it by
student name or USN, and shows the matched student's marks subject by subject
together with a total, an average and a percentage. The same report is
available as a plain-text block for copying or downloading.

## Architecture

### Data Layer
- **loader**: reads the first worksheet of an Excel/OpenDocument workbook (or a CSV
  file), skips the two banner rows, drops blank rows and blanks missing-value sentinels
- **schema**: the fixed twelve-column layout and the eight examined subjects
- **record**: immutable `StudentTable` / `StudentRecord` built at the load boundary

### Results Layer
- **marks**: classifies each subject cell as absent, numeric or unreadable
- **evaluate**: per-subject results and the aggregate over numeric marks
- **report**: text report and display-ready fields
- **lookup**: case-insensitive exact search by name or USN

### Web Layer (feature `web`)
- **store**: the table, loaded on first request and shared for the process lifetime
- **app**: routing and handlers

## Endpoints

- `/` - Search page; `?by=name|usn&q=...` runs a search
- `/report?by=...&q=...` - Plain-text report download
- `/api/students` - Full dataset as JSON
- `/api/search?by=...&q=...` - Search result as JSON
*/

pub mod config;
pub mod error;
pub mod evaluate;
pub mod loader;
pub mod lookup;
pub mod marks;
pub mod record;
pub mod report;
pub mod schema;

#[cfg(feature = "web")]
pub mod app;
#[cfg(feature = "web")]
pub mod store;

/// Re-export the everyday types to make them easier to use
pub use config::Config;
pub use error::DataSourceError;
pub use evaluate::{Evaluation, Summary};
pub use loader::load_students;
pub use lookup::{SearchBy, find_student};
pub use marks::Mark;
pub use record::{StudentRecord, StudentTable};
pub use report::{StudentReport, format_report};
