//! # Validator
//!
//! Turns an untrusted JSON submission into an [`AcademicRecord`].
//!
//! Expected shape:
//!
//! ```text
//! { "semesters": [ { "subjects": [ {"gp": 9.0, "credits": 3.0}, ... ] }, ... ] }
//! ```
//!
//! The scan is in input order (semester 1 subject 1, semester 1 subject 2,
//! ..., semester 2 subject 1, ...) and stops at the first violation. Every
//! positioned error uses 1-based semester and subject indices.

use crate::record::{AcademicRecord, ScoreError, SubjectScore, Term};
use serde_json::{Map, Value};
use thiserror::Error;

/// Key holding the list of semesters.
const SEMESTERS_KEY: &str = "semesters";
/// Key holding a semester's list of subjects.
const SUBJECTS_KEY: &str = "subjects";
/// Key holding a subject's grade point.
const GRADE_POINT_KEY: &str = "gp";
/// Key holding a subject's credits.
const CREDITS_KEY: &str = "credits";

// =============================================================================
// ERROR TYPE
// =============================================================================

/// Reason a submission was rejected.
///
/// The `Display` output is the human-readable message returned to callers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Nothing to validate: empty body or falsy JSON (`null`, `false`, `0`, `""`, `[]`, `{}`).
    #[error("No JSON data provided")]
    MissingPayload,

    /// The body is not JSON at all.
    #[error("Invalid JSON: {0}")]
    MalformedJson(String),

    /// Top level is not an object with a `semesters` key.
    #[error("Invalid input format. Expected JSON with 'semesters' key.")]
    InvalidFormat,

    /// `semesters` is not a list, or the list is empty.
    #[error("Semesters must be a non-empty list.")]
    NoSemesters,

    /// A semester is not an object, or its `subjects` is missing or not a list.
    #[error("Semester {semester}: Missing or invalid 'subjects' field")]
    InvalidSubjects { semester: usize },

    /// A semester lists no subjects.
    #[error("Semester {semester} has no subjects!")]
    EmptySemester { semester: usize },

    /// A subject entry is not an object.
    #[error("Semester {semester}, Subject {subject}: Subject must be an object")]
    SubjectNotObject { semester: usize, subject: usize },

    /// A subject lacks `gp` or `credits`.
    #[error("Semester {semester}, Subject {subject}: Missing 'gp' or 'credits' field")]
    MissingField { semester: usize, subject: usize },

    /// A subject's values are not numbers or are out of range.
    #[error("Semester {semester}, Subject {subject}: {reason}")]
    Score {
        semester: usize,
        subject: usize,
        reason: ScoreError,
    },
}

impl ValidationError {
    /// The 1-based semester the error points at, if any.
    #[must_use]
    pub fn semester(&self) -> Option<usize> {
        match self {
            Self::InvalidSubjects { semester }
            | Self::EmptySemester { semester }
            | Self::SubjectNotObject { semester, .. }
            | Self::MissingField { semester, .. }
            | Self::Score { semester, .. } => Some(*semester),
            Self::MissingPayload | Self::MalformedJson(_) | Self::InvalidFormat | Self::NoSemesters => {
                None
            }
        }
    }

    /// The 1-based subject the error points at, if any.
    #[must_use]
    pub fn subject(&self) -> Option<usize> {
        match self {
            Self::SubjectNotObject { subject, .. }
            | Self::MissingField { subject, .. }
            | Self::Score { subject, .. } => Some(*subject),
            _ => None,
        }
    }
}

// =============================================================================
// ENTRY POINTS
// =============================================================================

/// Parse raw JSON bytes and validate the result.
///
/// Empty or whitespace-only input counts as a missing payload.
pub fn validate_json(bytes: &[u8]) -> Result<AcademicRecord, ValidationError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(ValidationError::MissingPayload);
    }
    let value: Value = serde_json::from_slice(bytes)
        .map_err(|e| ValidationError::MalformedJson(e.to_string()))?;
    validate(&value)
}

/// Validate a submission and build the typed record.
pub fn validate(data: &Value) -> Result<AcademicRecord, ValidationError> {
    if is_empty_payload(data) {
        return Err(ValidationError::MissingPayload);
    }

    let semesters = data
        .as_object()
        .and_then(|obj| obj.get(SEMESTERS_KEY))
        .ok_or(ValidationError::InvalidFormat)?;

    let semesters = semesters
        .as_array()
        .filter(|list| !list.is_empty())
        .ok_or(ValidationError::NoSemesters)?;

    let terms = semesters
        .iter()
        .enumerate()
        .map(|(i, semester)| validate_semester(i + 1, semester))
        .collect::<Result<Vec<_>, _>>()?;

    AcademicRecord::new(terms).ok_or(ValidationError::NoSemesters)
}

// =============================================================================
// HELPERS
// =============================================================================

/// Falsy JSON (`null`, `false`, `0`, `""`, `[]`, `{}`) counts as no payload.
fn is_empty_payload(data: &Value) -> bool {
    match data {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(n) => n.as_f64().is_some_and(|x| x == 0.0),
        Value::String(s) => s.is_empty(),
        Value::Object(obj) => obj.is_empty(),
        Value::Array(list) => list.is_empty(),
    }
}

fn validate_semester(semester: usize, value: &Value) -> Result<Term, ValidationError> {
    let subjects = value
        .as_object()
        .and_then(|obj| obj.get(SUBJECTS_KEY))
        .and_then(Value::as_array)
        .ok_or(ValidationError::InvalidSubjects { semester })?;

    let scores = subjects
        .iter()
        .enumerate()
        .map(|(i, subject)| validate_subject(semester, i + 1, subject))
        .collect::<Result<Vec<_>, _>>()?;

    Term::new(scores).ok_or(ValidationError::EmptySemester { semester })
}

fn validate_subject(
    semester: usize,
    subject: usize,
    value: &Value,
) -> Result<SubjectScore, ValidationError> {
    let obj = value
        .as_object()
        .ok_or(ValidationError::SubjectNotObject { semester, subject })?;

    let (gp, credits) = required_fields(obj)
        .ok_or(ValidationError::MissingField { semester, subject })?;

    let score = |reason| ValidationError::Score {
        semester,
        subject,
        reason,
    };

    let gp = as_number(gp).ok_or_else(|| score(ScoreError::NotNumeric(gp.to_string())))?;
    let credits =
        as_number(credits).ok_or_else(|| score(ScoreError::NotNumeric(credits.to_string())))?;

    SubjectScore::new(gp, credits).map_err(score)
}

fn required_fields(obj: &Map<String, Value>) -> Option<(&Value, &Value)> {
    Some((obj.get(GRADE_POINT_KEY)?, obj.get(CREDITS_KEY)?))
}

/// Read a value as a finite number.
///
/// JSON numbers and numeric strings (`"8.5"`) are accepted; booleans,
/// `null`, containers and non-finite strings (`"nan"`, `"inf"`) are not.
fn as_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    number.is_finite().then_some(number)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn one_subject(gp: Value, credits: Value) -> Value {
        json!({"semesters": [{"subjects": [{"gp": gp, "credits": credits}]}]})
    }

    fn message(data: &Value) -> String {
        validate(data).unwrap_err().to_string()
    }

    #[test]
    fn accepts_well_formed_record() {
        let data = json!({"semesters": [
            {"subjects": [{"gp": 9.0, "credits": 3.0}, {"gp": 8.5, "credits": 4.0}]},
            {"subjects": [{"gp": 7.0, "credits": 2.0}]}
        ]});
        let record = validate(&data).unwrap();
        assert_eq!(record.term_count(), 2);
        assert_eq!(record.terms()[0].subject_count(), 2);
        assert_eq!(record.terms()[1].subjects()[0].grade_point(), 7.0);
    }

    #[test]
    fn missing_payload() {
        assert_eq!(validate(&Value::Null), Err(ValidationError::MissingPayload));
        assert_eq!(validate(&json!({})), Err(ValidationError::MissingPayload));
        assert_eq!(validate(&json!([])), Err(ValidationError::MissingPayload));
    }

    #[test]
    fn falsy_scalars_count_as_missing_payload() {
        for data in [json!(false), json!(0), json!(0.0), json!("")] {
            assert_eq!(validate(&data), Err(ValidationError::MissingPayload), "{data}");
        }
        for data in [json!(true), json!(1), json!("semesters")] {
            assert_eq!(validate(&data), Err(ValidationError::InvalidFormat), "{data}");
        }
    }

    #[test]
    fn missing_semesters_key() {
        assert_eq!(
            message(&json!({"terms": []})),
            "Invalid input format. Expected JSON with 'semesters' key."
        );
        assert_eq!(validate(&json!(42)), Err(ValidationError::InvalidFormat));
    }

    #[test]
    fn empty_or_non_list_semesters() {
        assert_eq!(
            message(&json!({"semesters": []})),
            "Semesters must be a non-empty list."
        );
        assert_eq!(
            validate(&json!({"semesters": {"subjects": []}})),
            Err(ValidationError::NoSemesters)
        );
    }

    #[test]
    fn empty_subjects_names_the_semester() {
        let data = json!({"semesters": [
            {"subjects": [{"gp": 9.0, "credits": 3.0}]},
            {"subjects": []}
        ]});
        let err = validate(&data).unwrap_err();
        assert_eq!(err.semester(), Some(2));
        assert_eq!(err.to_string(), "Semester 2 has no subjects!");
    }

    #[test]
    fn invalid_subjects_field() {
        assert_eq!(
            message(&json!({"semesters": [{"courses": []}]})),
            "Semester 1: Missing or invalid 'subjects' field"
        );
        assert_eq!(
            message(&json!({"semesters": [{"subjects": "none"}]})),
            "Semester 1: Missing or invalid 'subjects' field"
        );
        assert_eq!(
            message(&json!({"semesters": [7]})),
            "Semester 1: Missing or invalid 'subjects' field"
        );
    }

    #[test]
    fn subject_shape_errors() {
        assert_eq!(
            message(&json!({"semesters": [{"subjects": [[9.0, 3.0]]}]})),
            "Semester 1, Subject 1: Subject must be an object"
        );
        assert_eq!(
            message(&json!({"semesters": [{"subjects": [{"gp": 9.0}]}]})),
            "Semester 1, Subject 1: Missing 'gp' or 'credits' field"
        );
    }

    #[test]
    fn non_numeric_values_are_named() {
        assert_eq!(
            message(&one_subject(json!("A+"), json!(3))),
            r#"Semester 1, Subject 1: GP and Credits must be numbers, got "A+""#
        );
        assert_eq!(
            message(&one_subject(json!(9), json!(null))),
            "Semester 1, Subject 1: GP and Credits must be numbers, got null"
        );
        assert_eq!(
            message(&one_subject(json!(true), json!(3))),
            "Semester 1, Subject 1: GP and Credits must be numbers, got true"
        );
        assert_eq!(
            message(&one_subject(json!(9), json!(false))),
            "Semester 1, Subject 1: GP and Credits must be numbers, got false"
        );
        assert!(validate(&one_subject(json!("nan"), json!(3))).is_err());
    }

    #[test]
    fn numeric_strings_are_accepted() {
        let record = validate(&one_subject(json!(" 8.5 "), json!("4"))).unwrap();
        let subject = record.terms()[0].subjects()[0];
        assert_eq!(subject.grade_point(), 8.5);
        assert_eq!(subject.credits(), 4.0);
    }

    #[test]
    fn grade_point_bounds() {
        assert_eq!(
            message(&one_subject(json!(-0.01), json!(3))),
            "Semester 1, Subject 1: GP must be between 0-10, got -0.01"
        );
        assert_eq!(
            message(&one_subject(json!(10.01), json!(3))),
            "Semester 1, Subject 1: GP must be between 0-10, got 10.01"
        );
        assert!(validate(&one_subject(json!(0), json!(3))).is_ok());
        assert!(validate(&one_subject(json!(10), json!(3))).is_ok());
    }

    #[test]
    fn credit_bounds() {
        assert_eq!(
            message(&one_subject(json!(8), json!(0))),
            "Semester 1, Subject 1: Credits must be positive, got 0.0"
        );
        assert_eq!(
            message(&one_subject(json!(8), json!(-1.5))),
            "Semester 1, Subject 1: Credits must be positive, got -1.5"
        );
        assert!(validate(&one_subject(json!(8), json!(0.5))).is_ok());
    }

    #[test]
    fn first_violation_wins() {
        let data = json!({"semesters": [
            {"subjects": [{"gp": 9.0, "credits": 3.0}, {"gp": 11.0, "credits": 3.0}]},
            {"subjects": []}
        ]});
        let err = validate(&data).unwrap_err();
        assert_eq!(err.semester(), Some(1));
        assert_eq!(err.subject(), Some(2));
    }

    #[test]
    fn validate_json_bytes() {
        assert_eq!(validate_json(b""), Err(ValidationError::MissingPayload));
        assert_eq!(validate_json(b"  \n"), Err(ValidationError::MissingPayload));
        assert!(matches!(
            validate_json(b"not json"),
            Err(ValidationError::MalformedJson(_))
        ));
        assert!(validate_json(br#"{"semesters":[{"subjects":[{"gp":9,"credits":3}]}]}"#).is_ok());
    }
}
