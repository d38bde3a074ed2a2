//! Syntax validation module - structural checking of token streams
//!
//! Consumes the token stream the lexical module produces and decides whether
//! the expression is structurally well formed: token adjacency, operator
//! placement, function call shape, and bracket pairing. Validation is a
//! single forward walk and stops at the first violation.

pub mod error;
pub mod validator;

use crate::config::compile_time::validator::*;
use crate::config::runtime::ValidatorPreferences;
use crate::log_error;
use crate::tokens::TokenStream;

pub use error::{SyntaxError, SyntaxResult};
pub use validator::{SyntaxValidator, ValidationMetrics};

// ============================================================================
// MODULE API
// ============================================================================

/// Validate a token stream with default preferences
pub fn validate_stream(stream: &mut TokenStream) -> SyntaxResult<()> {
    let mut validator = SyntaxValidator::new();
    run_validation(&mut validator, stream)
}

/// Validate with custom runtime preferences
pub fn validate_stream_with_preferences(
    stream: &mut TokenStream,
    preferences: ValidatorPreferences,
) -> SyntaxResult<()> {
    let mut validator = SyntaxValidator::with_preferences(preferences);
    run_validation(&mut validator, stream)
}

/// Create a new syntax validator with default preferences
pub fn create_validator() -> SyntaxValidator {
    SyntaxValidator::new()
}

/// Create validator with custom runtime preferences
pub fn create_validator_with_preferences(preferences: ValidatorPreferences) -> SyntaxValidator {
    SyntaxValidator::with_preferences(preferences)
}

/// Run the walk and log rejections centrally. The validator leaves the
/// cursor on the offending token, which is where the span comes from.
fn run_validation(validator: &mut SyntaxValidator, stream: &mut TokenStream) -> SyntaxResult<()> {
    let result = validator.validate_stream(stream);

    if let Err(error) = &result {
        match stream.current() {
            Some(token) => {
                log_error!(error.error_code(), "Syntax validation failed",
                    span = token.span(),
                    "error" => error.to_string(),
                    "token" => token.text(),
                    "token_index" => stream.position()
                );
            }
            None => {
                log_error!(error.error_code(), "Syntax validation failed",
                    "error" => error.to_string()
                );
            }
        }
    }

    result
}

// ============================================================================
// MODULE INITIALIZATION AND VALIDATION
// ============================================================================

/// Initialize syntax module validation (for system startup)
/// Validates that all error codes are properly configured
pub fn init_syntax_logging() -> Result<(), String> {
    let test_codes = [
        crate::logging::codes::syntax::EMPTY_EXPRESSION,
        crate::logging::codes::syntax::NO_TOKENS_FOUND,
        crate::logging::codes::syntax::LEADING_OPERATOR,
        crate::logging::codes::syntax::LONE_MINUS,
        crate::logging::codes::syntax::INVALID_AFTER_UNARY_MINUS,
        crate::logging::codes::syntax::UNRECOGNIZED_TOKEN,
        crate::logging::codes::syntax::FUNCTION_CALL_MISSING_BRACKET,
        crate::logging::codes::syntax::TRAILING_OPERATOR,
        crate::logging::codes::syntax::INVALID_AFTER_OPERATOR,
        crate::logging::codes::syntax::INVALID_AFTER_OPERAND,
        crate::logging::codes::syntax::INVALID_AFTER_OPEN_BRACKET,
        crate::logging::codes::syntax::INVALID_AFTER_CLOSE_BRACKET,
        crate::logging::codes::syntax::UNMATCHED_CLOSING_BRACKET,
        crate::logging::codes::syntax::MISMATCHED_BRACKET_PAIR,
        crate::logging::codes::syntax::UNMATCHED_OPENING_BRACKETS,
    ];

    for code in &test_codes {
        let description = crate::logging::codes::get_description(code.as_str());
        if description == "Unknown error" {
            return Err(format!(
                "Syntax error code {} has no description",
                code.as_str()
            ));
        }

        if crate::logging::codes::get_error_metadata(code.as_str()).is_none() {
            return Err(format!(
                "Syntax error code {} not found in metadata registry",
                code.as_str()
            ));
        }
    }

    // Validate compile-time limits are reasonable
    if BRACKET_DEPTH_WARN_THRESHOLD == 0 {
        return Err("BRACKET_DEPTH_WARN_THRESHOLD cannot be zero".to_string());
    }
    if BRACKET_DEPTH_WARN_THRESHOLD > 10_000 {
        return Err("BRACKET_DEPTH_WARN_THRESHOLD exceeds reasonable limit".to_string());
    }

    crate::log_debug!("Validator limits initialized",
        "bracket_depth_warn_threshold" => BRACKET_DEPTH_WARN_THRESHOLD
    );

    Ok(())
}
