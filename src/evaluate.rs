use crate::marks::Mark;
use crate::record::StudentRecord;
use crate::schema::{MAX_MARKS, SUBJECTS, Subject};

/// A subject paired with the classified mark read from a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubjectResult {
    pub subject: Subject,
    pub mark: Mark,
}

/// Per-subject results for one student plus the running totals over numeric marks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub subjects: Vec<SubjectResult>,
    pub total_marks: i128,
    pub subjects_counted: u32,
}

/// Aggregates over the numerically marked subjects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub total_marks: i128,
    pub subjects_counted: u32,
}

impl Evaluation {
    /// Classifies every subject of `record` in fixed order.
    ///
    /// A subject column missing from the sheet reads as empty and so as absent.
    pub fn of(record: &StudentRecord) -> Evaluation {
        let mut total_marks = 0;
        let mut subjects_counted = 0;

        let subjects = SUBJECTS
            .iter()
            .map(|&subject| {
                let mark = Mark::classify(record.field(subject.code));
                if let Mark::Numeric(value) = mark {
                    total_marks += value;
                    subjects_counted += 1;
                }
                SubjectResult { subject, mark }
            })
            .collect();

        Evaluation {
            subjects,
            total_marks,
            subjects_counted,
        }
    }

    /// `None` when no subject carried a numeric mark.
    pub fn summary(&self) -> Option<Summary> {
        (self.subjects_counted > 0).then_some(Summary {
            total_marks: self.total_marks,
            subjects_counted: self.subjects_counted,
        })
    }
}

impl Summary {
    pub fn max_possible(&self) -> i64 {
        i64::from(self.subjects_counted) * MAX_MARKS
    }

    pub fn average(&self) -> f64 {
        self.total_marks as f64 / f64::from(self.subjects_counted)
    }

    pub fn percentage(&self) -> f64 {
        self.total_marks as f64 / self.max_possible() as f64 * 100.0
    }

    /// `"264/300"`
    pub fn total_text(&self) -> String {
        format!("{}/{}", self.total_marks, self.max_possible())
    }

    /// `"44.0/50"`
    pub fn average_text(&self) -> String {
        format!("{:.1}/{}", self.average(), MAX_MARKS)
    }

    /// `"88.0%"`
    pub fn percentage_text(&self) -> String {
        format!("{:.1}%", self.percentage())
    }
}
