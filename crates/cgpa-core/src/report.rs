//! # Report Module
//!
//! Derived results and their renderings.
//!
//! [`OverallResult`] serializes to the JSON body returned by the API:
//!
//! ```text
//! {
//!   "sgpas": [8.86, 8.86],
//!   "cgpa": 8.86,
//!   "total_semesters": 2,
//!   "semester_details": [
//!     {"semester": 1, "sgpa": 8.86, "total_credits": 10.0, "subject_count": 3},
//!     ...
//!   ]
//! }
//! ```
//!
//! [`OverallResult::to_table`] renders the same data for a terminal.

use serde::{Deserialize, Serialize};

/// Width of the console table rules.
const TABLE_WIDTH: usize = 50;

/// Result for one semester.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermResult {
    /// 1-based semester number.
    pub semester: usize,
    /// Credit-weighted grade point average, two decimals.
    pub sgpa: f64,
    /// Sum of the semester's credits.
    pub total_credits: f64,
    /// Number of subjects in the semester.
    pub subject_count: usize,
}

/// Result for the whole record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallResult {
    /// Per-semester SGPAs in input order.
    pub sgpas: Vec<f64>,
    /// Unweighted mean of `sgpas`, two decimals.
    pub cgpa: f64,
    /// Number of semesters.
    pub total_semesters: usize,
    /// Per-semester breakdown in input order.
    pub semester_details: Vec<TermResult>,
}

impl OverallResult {
    /// Assemble a result from per-semester details and the CGPA.
    #[must_use]
    pub fn new(semester_details: Vec<TermResult>, cgpa: f64) -> Self {
        Self {
            sgpas: semester_details.iter().map(|t| t.sgpa).collect(),
            cgpa,
            total_semesters: semester_details.len(),
            semester_details,
        }
    }

    /// Check that every computed figure is a finite number.
    ///
    /// Credits near `f64::MAX` can overflow the sums; JSON cannot carry the
    /// resulting infinities or NaNs.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.cgpa.is_finite()
            && self
                .semester_details
                .iter()
                .all(|t| t.sgpa.is_finite() && t.total_credits.is_finite())
    }

    /// One-line summary used as the API success message.
    #[must_use]
    pub fn summary_message(&self) -> String {
        format!(
            "CGPA calculated successfully for {} semesters",
            self.total_semesters
        )
    }

    /// Format as a plain text table.
    #[must_use]
    pub fn to_table(&self) -> String {
        let heavy = "=".repeat(TABLE_WIDTH);
        let light = "-".repeat(TABLE_WIDTH);
        let mut output = String::new();

        output.push_str(&format!("{heavy}\n"));
        output.push_str("           CGPA CALCULATION RESULTS\n");
        output.push_str(&format!("{heavy}\n"));

        for detail in &self.semester_details {
            output.push_str(&format!(
                "Semester {:2} | SGPA: {:5.2} | Credits: {:4.1} | Subjects: {}\n",
                detail.semester, detail.sgpa, detail.total_credits, detail.subject_count
            ));
        }

        output.push_str(&format!("{light}\n"));
        output.push_str(&format!(
            "Final CGPA: {:.2} ({} semesters)\n",
            self.cgpa, self.total_semesters
        ));
        output.push_str(&format!("{heavy}\n"));

        output
    }
}

// =============================================================================
// TESTS
// =============================================================================
