//! Expression checking pipeline
//!
//! Ties the stages together: trim and screen the raw text, tokenize it,
//! validate the token stream, and fold the outcome into a [`Verdict`].
//! File checking runs the same pipeline once per non-blank line and never
//! stops early; one bad expression does not hide the verdicts of the rest.

mod catalog;
mod error;
pub mod output;
mod validation;

// Re-export public types
pub use catalog::{example_expressions, ExampleExpression};
pub use error::PipelineError;
pub use output::{FileReport, LineResult, Verdict, VALID_MESSAGE};
pub use validation::validate_pipeline;

use crate::config::compile_time::file_processor::MAX_FILE_SIZE;
use crate::logging::{self, codes};
use crate::syntax::SyntaxError;
use crate::{log_error, log_info, log_performance, log_success};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Check a single expression and report the verdict
///
/// The verdict message is either [`VALID_MESSAGE`] or the first violation
/// found, in pipeline order: empty input, then lexical scanning over the
/// whole text, then the structural walk.
pub fn check_expression(expression: &str) -> Verdict {
    if expression.trim().is_empty() {
        return Verdict::rejected(SyntaxError::EmptyExpression.to_string());
    }

    let mut stream = match crate::lexical::tokenize_expression(expression) {
        Ok(stream) => stream,
        Err(error) => return Verdict::rejected(error.to_string()),
    };

    match crate::syntax::validate_stream(&mut stream) {
        Ok(()) => Verdict::accepted(),
        Err(error) => Verdict::rejected(error.to_string()),
    }
}

/// Check every non-blank line of an expression file
///
/// Line numbers in the report are 1-based file line numbers; blank and
/// whitespace-only lines keep their numbers but produce no verdict.
pub fn check_file(file_path: &str) -> Result<FileReport, PipelineError> {
    let start_time = Instant::now();
    let path = Path::new(file_path);

    if !path.exists() {
        let error = PipelineError::FileNotFound {
            path: file_path.to_string(),
        };
        log_error!(error.error_code(), "Expression file not found", "path" => file_path);
        return Err(error);
    }

    if !path.is_file() {
        let error = PipelineError::NotAFile {
            path: file_path.to_string(),
        };
        log_error!(error.error_code(), "Path is not a regular file", "path" => file_path);
        return Err(error);
    }

    let metadata = fs::metadata(path).map_err(|io_error| {
        let error = PipelineError::from(io_error);
        log_error!(error.error_code(), "Failed to read file metadata", "path" => file_path);
        error
    })?;

    if metadata.len() > MAX_FILE_SIZE {
        let error = PipelineError::FileTooLarge {
            size: metadata.len(),
            max_size: MAX_FILE_SIZE,
        };
        log_error!(error.error_code(), "Expression file exceeds size limit",
            "path" => file_path,
            "size_bytes" => metadata.len(),
            "max_size_bytes" => MAX_FILE_SIZE
        );
        return Err(error);
    }

    let source = fs::read_to_string(path).map_err(|io_error| {
        let error = PipelineError::from(io_error);
        log_error!(error.error_code(), "Failed to read expression file", "path" => file_path);
        error
    })?;

    let report = logging::with_file_context(PathBuf::from(file_path), || {
        log_info!("Starting expression file check",
            "file" => file_path,
            "size_bytes" => metadata.len()
        );

        let mut results = Vec::new();
        for (index, line) in source.lines().enumerate() {
            let line_number = index + 1;
            let expression = line.trim();
            if expression.is_empty() {
                continue;
            }

            logging::set_current_line(line_number);
            let verdict = check_expression(expression);
            results.push(LineResult {
                line: line_number,
                expression: expression.to_string(),
                valid: verdict.valid,
                message: verdict.message,
            });
        }

        FileReport::new(file_path, results, start_time.elapsed())
    });

    log_success!(codes::success::FILE_CHECK_COMPLETE, "Expression file check complete",
        "file" => file_path,
        "expressions_checked" => report.expressions_checked,
        "valid" => report.valid_count,
        "invalid" => report.invalid_count
    );
    log_performance!(codes::success::FILE_CHECK_COMPLETE, "File check timing",
        duration = start_time.elapsed(),
        "file" => file_path,
        "expressions" => report.expressions_checked
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::io::Write;

    #[test]
    fn test_validate_pipeline() {
        let _ = crate::logging::init_global_logging();
        let result = validate_pipeline();
        assert!(result.is_ok());
    }

    #[test]
    fn test_check_expression_accepts_valid_input() {
        let verdict = check_expression("2 + 3 * 4");
        assert!(verdict.is_valid());
        assert_eq!(verdict.message, VALID_MESSAGE);
    }

    #[test]
    fn test_check_expression_reports_first_violation() {
        let verdict = check_expression("2 +");
        assert!(!verdict.is_valid());
        assert_eq!(verdict.message, "Expression cannot end with an operator");

        let verdict = check_expression("* 2 + 3");
        assert_eq!(
            verdict.message,
            "Expression cannot start with the operator '*'"
        );

        // Two violations; only the leftmost one is reported
        let verdict = check_expression("2 + + 3)");
        assert_eq!(
            verdict.message,
            "Expected number, variable, function, or opening bracket after operator at position 2"
        );
    }

    #[test]
    fn test_check_expression_rejects_empty_input() {
        assert_eq!(check_expression("").message, "Empty expression");
        assert_eq!(check_expression("   \t ").message, "Empty expression");
    }

    #[test]
    fn test_lexical_errors_become_verdicts() {
        let verdict = check_expression("2 $ 3");
        assert!(!verdict.is_valid());
        assert_eq!(verdict.message, "Invalid character '$' at position 2");

        let verdict = check_expression("2..5");
        assert_eq!(verdict.message, "Invalid number format at position 2");
    }

    #[test]
    fn test_scanning_runs_before_validation() {
        // The leading operator is a structural problem, but scanning covers
        // the whole text first and trips on the invalid character
        let verdict = check_expression("* 2 $");
        assert_eq!(verdict.message, "Invalid character '$' at position 4");
    }

    #[test]
    fn test_check_file_reports_every_nonblank_line() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "2 + 3").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "2 +").unwrap();
        writeln!(file, "   ").unwrap();
        writeln!(file, "sin(x)").unwrap();
        file.flush().unwrap();

        let report = check_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(report.expressions_checked, 3);
        assert_eq!(report.valid_count, 2);
        assert_eq!(report.invalid_count, 1);
        assert!(report.has_failures());

        let lines: Vec<usize> = report.results.iter().map(|result| result.line).collect();
        assert_eq!(lines, vec![1, 3, 5]);
        assert_eq!(
            report.results[1].message,
            "Expression cannot end with an operator"
        );
        assert_eq!(report.results[2].expression, "sin(x)");
    }

    #[test]
    fn test_check_file_with_only_blank_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file).unwrap();
        writeln!(file, "  \t").unwrap();
        file.flush().unwrap();

        let report = check_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(report.expressions_checked, 0);
        assert!(!report.has_failures());
    }

    #[test]
    fn test_check_file_missing_file() {
        let error = check_file("/no/such/expressions.txt").unwrap_err();
        assert_matches!(error, PipelineError::FileNotFound { .. });
        assert_eq!(error.error_code().as_str(), "E005");
    }

    #[test]
    fn test_check_file_rejects_directory() {
        let dir = tempfile::tempdir().unwrap();
        let error = check_file(dir.path().to_str().unwrap()).unwrap_err();
        assert_matches!(error, PipelineError::NotAFile { .. });
    }

    #[test]
    fn test_check_file_rejects_oversized_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let contents = "2 + 3\n".repeat(200_000);
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();

        let error = check_file(file.path().to_str().unwrap()).unwrap_err();
        assert_matches!(
            error,
            PipelineError::FileTooLarge { max_size, .. } if max_size == MAX_FILE_SIZE
        );
    }
}
