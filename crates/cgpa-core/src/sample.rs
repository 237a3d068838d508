//! Fixed example submission, served to clients as a format reference.

use serde_json::{Value, json};

/// A two-semester submission in the accepted input format.
///
/// Both semesters compute to an SGPA of 8.86.
pub fn sample_input() -> Value {
    json!({
        "semesters": [
            {
                "subjects": [
                    {"gp": 9.0, "credits": 3.0},
                    {"gp": 8.5, "credits": 4.0},
                    {"gp": 9.2, "credits": 3.0}
                ]
            },
            {
                "subjects": [
                    {"gp": 8.8, "credits": 4.0},
                    {"gp": 9.1, "credits": 3.0},
                    {"gp": 8.7, "credits": 3.0}
                ]
            }
        ]
    })
}
