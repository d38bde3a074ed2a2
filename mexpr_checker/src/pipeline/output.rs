use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Message attached to every accepted verdict
pub const VALID_MESSAGE: &str = "Expression syntax is valid";

/// Outcome of checking one expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub valid: bool,
    pub message: String,
}

impl Verdict {
    /// The expression passed every check
    pub fn accepted() -> Self {
        Self {
            valid: true,
            message: VALID_MESSAGE.to_string(),
        }
    }

    /// The expression failed; the message is the first violation found
    pub fn rejected(message: String) -> Self {
        Self {
            valid: false,
            message,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

/// Verdict for one line of an expression file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineResult {
    /// 1-based line number in the file
    pub line: usize,
    pub expression: String,
    pub valid: bool,
    pub message: String,
}

/// Complete result of checking an expression file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReport {
    pub file: String,
    pub expressions_checked: usize,
    pub valid_count: usize,
    pub invalid_count: usize,
    pub duration_ms: u64,
    pub results: Vec<LineResult>,
}

impl FileReport {
    pub fn new(file: &str, results: Vec<LineResult>, duration: Duration) -> Self {
        let valid_count = results.iter().filter(|result| result.valid).count();
        let invalid_count = results.len() - valid_count;

        Self {
            file: file.to_string(),
            expressions_checked: results.len(),
            valid_count,
            invalid_count,
            duration_ms: duration.as_millis() as u64,
            results,
        }
    }

    pub fn success_rate(&self) -> f64 {
        if self.expressions_checked == 0 {
            0.0
        } else {
            self.valid_count as f64 / self.expressions_checked as f64
        }
    }

    pub fn has_failures(&self) -> bool {
        self.invalid_count > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_constructors() {
        let verdict = Verdict::accepted();
        assert!(verdict.is_valid());
        assert_eq!(verdict.message, VALID_MESSAGE);

        let verdict = Verdict::rejected("Expression cannot end with an operator".to_string());
        assert!(!verdict.is_valid());
        assert_eq!(verdict.message, "Expression cannot end with an operator");
    }

    #[test]
    fn test_verdict_serializes_to_json() {
        let verdict = Verdict::accepted();
        let json = serde_json::to_string(&verdict).unwrap();
        assert!(json.contains("\"valid\":true"));
        assert!(json.contains("Expression syntax is valid"));

        let parsed: Verdict = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, verdict);
    }

    #[test]
    fn test_file_report_counts() {
        let results = vec![
            LineResult {
                line: 1,
                expression: "2 + 3".to_string(),
                valid: true,
                message: VALID_MESSAGE.to_string(),
            },
            LineResult {
                line: 3,
                expression: "2 +".to_string(),
                valid: false,
                message: "Expression cannot end with an operator".to_string(),
            },
            LineResult {
                line: 4,
                expression: "sin(x)".to_string(),
                valid: true,
                message: VALID_MESSAGE.to_string(),
            },
        ];
        let report = FileReport::new("expressions.txt", results, Duration::from_millis(12));

        assert_eq!(report.expressions_checked, 3);
        assert_eq!(report.valid_count, 2);
        assert_eq!(report.invalid_count, 1);
        assert_eq!(report.duration_ms, 12);
        assert!(report.has_failures());
        assert!((report.success_rate() - 2.0 / 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_report() {
        let report = FileReport::new("empty.txt", Vec::new(), Duration::from_millis(1));
        assert_eq!(report.expressions_checked, 0);
        assert_eq!(report.success_rate(), 0.0);
        assert!(!report.has_failures());
    }
}
