//! Lexical analysis module
//!
//! Provides systematic tokenization for mathematical expression text with
//! sign-aware number scanning and integration with the global logging
//! system.

pub mod analyzer;

use crate::config::compile_time::lexical::*;
use crate::config::runtime::LexicalPreferences;
use crate::tokens::TokenStream;

pub use analyzer::{LexerError, LexicalAnalyzer, LexicalMetrics};

// ============================================================================
// MODULE API
// ============================================================================

/// Tokenize an expression with default preferences
pub fn tokenize_expression(expression: &str) -> Result<TokenStream, LexerError> {
    let mut analyzer = LexicalAnalyzer::new();
    analyzer.tokenize_expression(expression)
}

/// Tokenize with custom runtime preferences
pub fn tokenize_expression_with_preferences(
    expression: &str,
    preferences: LexicalPreferences,
) -> Result<TokenStream, LexerError> {
    let mut analyzer = LexicalAnalyzer::with_preferences(preferences);
    analyzer.tokenize_expression(expression)
}

/// Create a new lexical analyzer with default preferences
pub fn create_analyzer() -> LexicalAnalyzer {
    LexicalAnalyzer::new()
}

/// Create analyzer with custom runtime preferences
pub fn create_analyzer_with_preferences(preferences: LexicalPreferences) -> LexicalAnalyzer {
    LexicalAnalyzer::with_preferences(preferences)
}

// ============================================================================
// MODULE INITIALIZATION AND VALIDATION
// ============================================================================

/// Initialize lexical analysis module validation (for system startup)
/// Validates that all error codes are properly configured
pub fn init_lexical_logging() -> Result<(), String> {
    let test_codes = [
        crate::logging::codes::lexical::INVALID_CHARACTER,
        crate::logging::codes::lexical::INVALID_NUMBER_FORMAT,
    ];

    for code in &test_codes {
        let description = crate::logging::codes::get_description(code.as_str());
        if description == "Unknown error" {
            return Err(format!(
                "Lexical error code {} has no description",
                code.as_str()
            ));
        }

        if crate::logging::codes::get_error_metadata(code.as_str()).is_none() {
            return Err(format!(
                "Lexical error code {} not found in metadata registry",
                code.as_str()
            ));
        }
    }

    // Validate compile-time limits are reasonable
    if MAX_TOKEN_PREVIEW_LENGTH == 0 {
        return Err("MAX_TOKEN_PREVIEW_LENGTH cannot be zero".to_string());
    }
    if MAX_TOKEN_PREVIEW_LENGTH > 10_000 {
        return Err("MAX_TOKEN_PREVIEW_LENGTH exceeds reasonable limit".to_string());
    }

    crate::log_debug!("Lexical limits initialized",
        "max_token_preview_length" => MAX_TOKEN_PREVIEW_LENGTH
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn texts(stream: &TokenStream) -> Vec<&str> {
        stream.tokens().iter().map(|t| t.text()).collect()
    }

    #[test]
    fn test_create_analyzer() {
        let analyzer = create_analyzer();
        // Should not panic - analyzer created successfully
        drop(analyzer);
    }

    #[test]
    fn test_create_analyzer_with_preferences() {
        let preferences = LexicalPreferences {
            collect_detailed_metrics: false,
            track_operator_usage: true,
            ..Default::default()
        };
        let analyzer = create_analyzer_with_preferences(preferences);
        assert!(!analyzer.preferences().collect_detailed_metrics);
        assert!(analyzer.preferences().track_operator_usage);
    }

    #[test]
    fn test_init_logging() {
        let result = init_lexical_logging();
        assert!(result.is_ok());
    }

    #[test]
    fn test_tokenize_simple_expression() {
        let mut analyzer = create_analyzer();
        let stream = analyzer.tokenize_expression("2 + 3 * 4").unwrap();

        assert_eq!(texts(&stream), vec!["2", "+", "3", "*", "4"]);
        assert_eq!(analyzer.metrics().whitespace_skipped, 4);
    }

    #[test]
    fn test_tokenize_function_calls() {
        let stream = tokenize_expression("sin(x) + cos(y)").unwrap();
        assert_eq!(
            texts(&stream),
            vec!["sin", "(", "x", ")", "+", "cos", "(", "y", ")"]
        );
    }

    #[test]
    fn test_leading_signed_number() {
        let stream = tokenize_expression(" -3").unwrap();
        assert_eq!(texts(&stream), vec!["-3"]);

        let stream = tokenize_expression("-3.5").unwrap();
        assert_eq!(texts(&stream), vec!["-3.5"]);
    }

    #[test]
    fn test_signed_number_after_operator_and_bracket() {
        let stream = tokenize_expression("2*-3").unwrap();
        assert_eq!(texts(&stream), vec!["2", "*", "-3"]);

        let stream = tokenize_expression("(-5)").unwrap();
        assert_eq!(texts(&stream), vec!["(", "-5", ")"]);
    }

    #[test]
    fn test_spaced_sign_collapses_into_number() {
        // Spaces between a sign and its digits are dropped from the token text
        let stream = tokenize_expression("- 3").unwrap();
        assert_eq!(texts(&stream), vec!["-3"]);
    }

    #[test]
    fn test_double_minus() {
        let stream = tokenize_expression("2--3").unwrap();
        assert_eq!(texts(&stream), vec!["2", "-", "-3"]);

        let stream = tokenize_expression("--5").unwrap();
        assert_eq!(texts(&stream), vec!["-", "-5"]);
    }

    #[test]
    fn test_minus_after_operand_is_subtraction() {
        let stream = tokenize_expression("2-3").unwrap();
        assert_eq!(texts(&stream), vec!["2", "-", "3"]);

        let stream = tokenize_expression("(2)-3").unwrap();
        assert_eq!(texts(&stream), vec!["(", "2", ")", "-", "3"]);
    }

    #[test]
    fn test_tab_does_not_join_sign_and_digits() {
        // Only literal spaces bridge a sign to its digits
        let stream = tokenize_expression("-\t3").unwrap();
        assert_eq!(texts(&stream), vec!["-", "3"]);
    }

    #[test]
    fn test_decimal_forms() {
        assert_eq!(texts(&tokenize_expression("2.").unwrap()), vec!["2."]);
        assert_eq!(texts(&tokenize_expression(".5").unwrap()), vec![".5"]);
        assert_eq!(texts(&tokenize_expression("1.25").unwrap()), vec!["1.25"]);
    }

    #[test]
    fn test_double_decimal_rejected() {
        let err = tokenize_expression("2..5").unwrap_err();
        assert_matches!(err, LexerError::InvalidNumberFormat { position: 2 });
        assert_eq!(err.to_string(), "Invalid number format at position 2");

        let err = tokenize_expression("1.2.3").unwrap_err();
        assert_matches!(err, LexerError::InvalidNumberFormat { position: 3 });
    }

    #[test]
    fn test_invalid_character() {
        let err = tokenize_expression("2 $ 3").unwrap_err();
        assert_matches!(
            err,
            LexerError::InvalidCharacter {
                character: '$',
                position: 2
            }
        );
        assert_eq!(err.to_string(), "Invalid character '$' at position 2");
    }

    #[test]
    fn test_word_scanning() {
        let stream = tokenize_expression("x_1 + rate2").unwrap();
        assert_eq!(texts(&stream), vec!["x_1", "+", "rate2"]);
    }

    #[test]
    fn test_empty_and_whitespace_input() {
        let stream = tokenize_expression("").unwrap();
        assert!(stream.is_empty());

        let mut analyzer = create_analyzer();
        let stream = analyzer.tokenize_expression(" \t ").unwrap();
        assert!(stream.is_empty());
        assert_eq!(analyzer.metrics().whitespace_skipped, 3);
    }

    #[test]
    fn test_metrics_counting() {
        let mut analyzer = create_analyzer();
        analyzer.tokenize_expression("sin(x) + 2.5 * -1").unwrap();

        let metrics = analyzer.metrics();
        assert_eq!(metrics.total_tokens, 8);
        assert_eq!(metrics.number_tokens, 2);
        assert_eq!(metrics.signed_number_tokens, 1);
        assert_eq!(metrics.word_tokens, 2);
        assert_eq!(metrics.operator_tokens, 2);
        assert_eq!(metrics.bracket_tokens, 2);
    }

    #[test]
    fn test_operator_usage_tracking() {
        let preferences = LexicalPreferences {
            track_operator_usage: true,
            ..Default::default()
        };
        let mut analyzer = create_analyzer_with_preferences(preferences);
        analyzer.tokenize_expression("1+2+3*4").unwrap();

        assert_eq!(analyzer.metrics().operator_usage.get(&'+'), Some(&2));
        assert_eq!(analyzer.metrics().operator_usage.get(&'*'), Some(&1));
    }

    #[test]
    fn test_detailed_metrics_disabled() {
        let preferences = LexicalPreferences {
            collect_detailed_metrics: false,
            ..Default::default()
        };
        let mut analyzer = create_analyzer_with_preferences(preferences);
        analyzer.tokenize_expression("1 + 2").unwrap();

        assert_eq!(analyzer.metrics().total_tokens, 3);
        assert_eq!(analyzer.metrics().number_tokens, 0);
        assert_eq!(analyzer.metrics().operator_tokens, 0);
    }

    #[test]
    fn test_token_spans_use_character_offsets() {
        let stream = tokenize_expression("2 + 3").unwrap();
        let plus = stream.get(1).unwrap();
        assert_eq!(plus.span().start().offset, 2);
        assert_eq!(plus.span().end().offset, 3);

        // A spaced sign still spans from the minus to the last digit
        let stream = tokenize_expression(" -3").unwrap();
        let number = stream.get(0).unwrap();
        assert_eq!(number.span().start().offset, 1);
        assert_eq!(number.span().end().offset, 3);
    }
}
