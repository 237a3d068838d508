//! # Calculator
//!
//! Reduces a validated [`AcademicRecord`] into grade point averages.
//!
//! - SGPA: credit-weighted mean of a semester's grade points.
//! - CGPA: unweighted mean of the semester SGPAs.
//!
//! CGPA deliberately ignores how many credits each semester carried. A
//! heavy semester and a light one count the same.
//!
//! Inputs are validated types, so every term has at least one subject with
//! positive credits and the divisions below never divide by zero.

#![allow(clippy::float_arithmetic)]

use crate::record::{AcademicRecord, Term};
use crate::report::{OverallResult, TermResult};

/// Round to two decimal places.
///
/// Rounds the exact binary value, ties to even, which is what decimal
/// formatting of an `f64` does. `(x * 100.0).round() / 100.0` is not
/// equivalent: the multiplication itself can round (`1.005` becomes `100.5`).
pub fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}

/// Compute one semester's result.
///
/// `index` is the 1-based semester number carried into the result.
pub fn compute_term_result(index: usize, term: &Term) -> TermResult {
    let (total_points, total_credits) = term
        .subjects()
        .iter()
        .fold((0.0_f64, 0.0_f64), |(points, credits), subject| {
            (
                points + subject.grade_point() * subject.credits(),
                credits + subject.credits(),
            )
        });

    TermResult {
        semester: index,
        sgpa: round2(total_points / total_credits),
        total_credits,
        subject_count: term.subject_count(),
    }
}

/// Compute every semester's result and the overall CGPA.
pub fn compute_overall_result(record: &AcademicRecord) -> OverallResult {
    let semester_details: Vec<TermResult> = record
        .terms()
        .iter()
        .enumerate()
        .map(|(i, term)| compute_term_result(i + 1, term))
        .collect();

    let sgpa_sum = semester_details
        .iter()
        .fold(0.0_f64, |sum, term| sum + term.sgpa);
    let cgpa = round2(sgpa_sum / semester_details.len() as f64);

    OverallResult::new(semester_details, cgpa)
}

// =============================================================================
// TESTS
// =============================================================================
