//! Rendering of one student's results, both as a copyable text block and as
//! display-ready fields for the web page.

use serde::Serialize;

use crate::evaluate::{Evaluation, SubjectResult, Summary};
use crate::marks::Mark;
use crate::record::StudentRecord;

const RULE_WIDTH: usize = 50;

/// Styling hint for a subject card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorClass {
    /// A numeric mark.
    Good,
    /// Absent or unreadable.
    Alert,
}

impl From<Mark> for ColorClass {
    fn from(mark: Mark) -> Self {
        if mark.is_numeric() {
            ColorClass::Good
        } else {
            ColorClass::Alert
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubjectDisplay {
    pub code: &'static str,
    pub name: &'static str,
    pub display_text: String,
    pub color_class: ColorClass,
}

impl From<&SubjectResult> for SubjectDisplay {
    fn from(result: &SubjectResult) -> Self {
        SubjectDisplay {
            code: result.subject.code,
            name: result.subject.name,
            display_text: result.mark.to_string(),
            color_class: result.mark.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub student_name: String,
    pub usn: String,
    pub serial_no: String,
    pub course_code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryDisplay {
    pub total: String,
    pub average: String,
    pub percentage: String,
}

impl From<Summary> for SummaryDisplay {
    fn from(summary: Summary) -> Self {
        SummaryDisplay {
            total: summary.total_text(),
            average: summary.average_text(),
            percentage: summary.percentage_text(),
        }
    }
}

/// Everything the presentation layer needs for a found student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentReport {
    pub profile: Profile,
    pub subjects: Vec<SubjectDisplay>,
    pub summary: Option<SummaryDisplay>,
    pub text: String,
}

impl StudentReport {
    pub fn build(record: &StudentRecord) -> StudentReport {
        let evaluation = Evaluation::of(record);

        StudentReport {
            profile: Profile {
                student_name: record.student_name().to_string(),
                usn: record.usn().to_string(),
                serial_no: record.serial_no().to_string(),
                course_code: record.course_code().to_string(),
            },
            subjects: evaluation.subjects.iter().map(SubjectDisplay::from).collect(),
            summary: evaluation.summary().map(SummaryDisplay::from),
            text: render_text(record, &evaluation),
        }
    }
}

/// Format the plain-text report for a student
///
/// Pure: the same record always yields the same bytes.
///
/// # Arguments
/// * `record` - The student row to report on
///
/// # Returns
/// * `String` - Profile, per-subject marks and, when any mark is numeric, the totals
///
/// # Examples
/// ```no_run
/// use student_finder::{SearchBy, find_student, format_report, load_students};
///
/// let table = load_students("Sample Copy.xlsx").unwrap();
/// if let Some(student) = find_student(&table, SearchBy::Name, "john doe") {
///     std::fs::write("report.txt", format_report(student)).unwrap();
/// }
/// ```
pub fn format_report(record: &StudentRecord) -> String {
    render_text(record, &Evaluation::of(record))
}

/// Per-subject display tuples in fixed subject order.
pub fn subject_displays(record: &StudentRecord) -> Vec<SubjectDisplay> {
    Evaluation::of(record)
        .subjects
        .iter()
        .map(SubjectDisplay::from)
        .collect()
}

fn render_text(record: &StudentRecord, evaluation: &Evaluation) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut lines = vec![
        "🎓 STUDENT INFORMATION".to_string(),
        rule.clone(),
        format!("👤 Student Name: {}", record.student_name()),
        format!("📚 USN: {}", record.usn()),
        format!("🔢 Serial No: {}", record.serial_no()),
        format!("📖 Course Code: {}", record.course_code()),
        String::new(),
        "📊 ACADEMIC PERFORMANCE".to_string(),
        rule.clone(),
    ];

    for result in &evaluation.subjects {
        lines.push(format!(
            "  {} ({}): {}",
            result.subject.code, result.subject.name, result.mark
        ));
    }

    lines.push(String::new());
    lines.push("📈 PERFORMANCE SUMMARY".to_string());
    lines.push(rule.clone());

    if let Some(summary) = evaluation.summary() {
        lines.push(format!("Total Marks: {}", summary.total_text()));
        lines.push(format!("Average Marks: {}", summary.average_text()));
        lines.push(format!("Percentage: {}", summary.percentage_text()));
    }
    lines.push(rule);

    lines.join("\n")
}
