//! Wordle API response models.
//!
//! These structs map to the daily-solution JSON payload served by the
//! puzzle endpoint. They are used internally by the answer adapter and are
//! not part of the public domain model.

use serde::{Deserialize, Serialize};

/// Daily puzzle payload returned by the answer endpoint.
///
/// Only `solution` is load-bearing; the remaining fields are carried for
/// logging and default to empty when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailySolution {
    /// Numeric puzzle identifier.
    #[serde(default)]
    pub id: u64,

    /// The day's answer word.
    pub solution: String,

    /// Publication date in `YYYY-MM-DD` form.
    #[serde(default)]
    pub print_date: Option<String>,

    /// Days elapsed since the puzzle launched.
    #[serde(default)]
    pub days_since_launch: Option<u64>,

    /// Puzzle editor credit.
    #[serde(default)]
    pub editor: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_payload_deserialization() {
        let json = r#"{
            "id": 2256,
            "solution": "crane",
            "print_date": "2026-08-06",
            "days_since_launch": 1508,
            "editor": "Tracy Bennett"
        }"#;
        let payload: DailySolution = serde_json::from_str(json).unwrap();
        assert_eq!(payload.id, 2256);
        assert_eq!(payload.solution, "crane");
        assert_eq!(payload.print_date.as_deref(), Some("2026-08-06"));
        assert_eq!(payload.days_since_launch, Some(1508));
    }

    #[test]
    fn test_minimal_payload_deserialization() {
        let json = r#"{ "solution": "abide" }"#;
        let payload: DailySolution = serde_json::from_str(json).unwrap();
        assert_eq!(payload.solution, "abide");
        assert_eq!(payload.id, 0);
        assert!(payload.print_date.is_none());
        assert!(payload.editor.is_none());
    }

    #[test]
    fn test_missing_solution_is_an_error() {
        let json = r#"{ "id": 7 }"#;
        let result = serde_json::from_str::<DailySolution>(json);
        assert!(result.is_err());
    }
}
