//! Error types for the validation walk with global logging integration
//!
//! Every rejection the validator can produce is one variant here; the
//! `Display` text is the exact message quoted in the final verdict, and
//! `error_code` ties each variant into the logging code registry.

use crate::logging::{codes, Code};
use crate::tokens::TokenCategory;

pub type SyntaxResult<T> = Result<T, SyntaxError>;

/// Structural rejections raised while walking the token stream
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxError {
    #[error("Empty expression")]
    EmptyExpression,

    #[error("No valid tokens found")]
    NoTokensFound,

    #[error("Expression cannot start with the operator '{token}'")]
    LeadingOperator { token: String },

    #[error("Expression cannot consist of only a minus sign")]
    LoneMinus,

    #[error("Invalid token '{token}' after unary minus")]
    InvalidAfterUnaryMinus { token: String },

    #[error("Unrecognized token '{token}' at position {position}")]
    UnrecognizedToken { token: String, position: usize },

    #[error("Function '{name}' must be followed by an opening bracket")]
    FunctionMissingBracket { name: String },

    #[error("Expression cannot end with an operator")]
    TrailingOperator,

    #[error("Expected number, variable, function, or opening bracket after operator at position {position}")]
    InvalidAfterOperator { position: usize },

    #[error("Expected operator, closing bracket, or implicit multiplication after {category} at position {position}")]
    InvalidAfterOperand {
        category: TokenCategory,
        position: usize,
    },

    #[error("Expected number, variable, function, or opening bracket after opening bracket at position {position}")]
    InvalidAfterOpenBracket { position: usize },

    #[error("Expected operator, closing bracket, or implicit multiplication after closing bracket at position {position}")]
    InvalidAfterCloseBracket { position: usize },

    #[error("Unmatched closing bracket '{bracket}' at position {position}")]
    UnmatchedClosingBracket { bracket: char, position: usize },

    #[error("Mismatched bracket pair '{open}' and '{close}' at position {position}")]
    MismatchedBracketPair {
        open: char,
        close: char,
        position: usize,
    },

    #[error("Unmatched opening brackets: {brackets}")]
    UnmatchedOpeningBrackets { brackets: String },
}

impl SyntaxError {
    /// Create leading operator error
    pub fn leading_operator(token: &str) -> Self {
        Self::LeadingOperator {
            token: token.to_string(),
        }
    }

    /// Create invalid token after unary minus error
    pub fn invalid_after_unary_minus(token: &str) -> Self {
        Self::InvalidAfterUnaryMinus {
            token: token.to_string(),
        }
    }

    /// Create unrecognized token error
    pub fn unrecognized_token(token: &str, position: usize) -> Self {
        Self::UnrecognizedToken {
            token: token.to_string(),
            position,
        }
    }

    /// Create function missing bracket error
    pub fn function_missing_bracket(name: &str) -> Self {
        Self::FunctionMissingBracket {
            name: name.to_string(),
        }
    }

    /// Create mismatched bracket pair error
    pub fn mismatched_bracket_pair(open: char, close: char, position: usize) -> Self {
        Self::MismatchedBracketPair {
            open,
            close,
            position,
        }
    }

    /// Create unmatched opening brackets error; brackets are quoted in the
    /// order they were pushed onto the stack
    pub fn unmatched_opening_brackets(brackets: &[char]) -> Self {
        Self::UnmatchedOpeningBrackets {
            brackets: brackets
                .iter()
                .map(|bracket| bracket.to_string())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }

    /// Get error code for global logging system
    pub fn error_code(&self) -> Code {
        match self {
            Self::EmptyExpression => codes::syntax::EMPTY_EXPRESSION,
            Self::NoTokensFound => codes::syntax::NO_TOKENS_FOUND,
            Self::LeadingOperator { .. } => codes::syntax::LEADING_OPERATOR,
            Self::LoneMinus => codes::syntax::LONE_MINUS,
            Self::InvalidAfterUnaryMinus { .. } => codes::syntax::INVALID_AFTER_UNARY_MINUS,
            Self::UnrecognizedToken { .. } => codes::syntax::UNRECOGNIZED_TOKEN,
            Self::FunctionMissingBracket { .. } => codes::syntax::FUNCTION_CALL_MISSING_BRACKET,
            Self::TrailingOperator => codes::syntax::TRAILING_OPERATOR,
            Self::InvalidAfterOperator { .. } => codes::syntax::INVALID_AFTER_OPERATOR,
            Self::InvalidAfterOperand { .. } => codes::syntax::INVALID_AFTER_OPERAND,
            Self::InvalidAfterOpenBracket { .. } => codes::syntax::INVALID_AFTER_OPEN_BRACKET,
            Self::InvalidAfterCloseBracket { .. } => codes::syntax::INVALID_AFTER_CLOSE_BRACKET,
            Self::UnmatchedClosingBracket { .. } => codes::syntax::UNMATCHED_CLOSING_BRACKET,
            Self::MismatchedBracketPair { .. } => codes::syntax::MISMATCHED_BRACKET_PAIR,
            Self::UnmatchedOpeningBrackets { .. } => codes::syntax::UNMATCHED_OPENING_BRACKETS,
        }
    }

    /// Token index quoted in the message, if the variant carries one
    pub fn position(&self) -> Option<usize> {
        match self {
            Self::UnrecognizedToken { position, .. }
            | Self::InvalidAfterOperator { position }
            | Self::InvalidAfterOperand { position, .. }
            | Self::InvalidAfterOpenBracket { position }
            | Self::InvalidAfterCloseBracket { position }
            | Self::UnmatchedClosingBracket { position, .. }
            | Self::MismatchedBracketPair { position, .. } => Some(*position),
            _ => None,
        }
    }

    /// Get error severity
    pub fn severity(&self) -> &'static str {
        codes::get_severity(self.error_code().as_str()).as_str()
    }

    /// Get error category
    pub fn category(&self) -> &'static str {
        codes::get_category(self.error_code().as_str())
    }

    /// Check if this error is recoverable
    pub fn is_recoverable(&self) -> bool {
        codes::is_recoverable(self.error_code().as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_mapping() {
        assert_eq!(SyntaxError::EmptyExpression.error_code().as_str(), "E040");
        assert_eq!(SyntaxError::NoTokensFound.error_code().as_str(), "E041");
        assert_eq!(
            SyntaxError::leading_operator("*").error_code().as_str(),
            "E042"
        );
        assert_eq!(SyntaxError::LoneMinus.error_code().as_str(), "E043");
        assert_eq!(SyntaxError::TrailingOperator.error_code().as_str(), "E047");
        assert_eq!(
            SyntaxError::unmatched_opening_brackets(&['('])
                .error_code()
                .as_str(),
            "E054"
        );
    }

    #[test]
    fn test_display_quotes_offending_token() {
        let error = SyntaxError::leading_operator("*");
        assert_eq!(
            error.to_string(),
            "Expression cannot start with the operator '*'"
        );

        let error = SyntaxError::invalid_after_unary_minus("+");
        assert_eq!(error.to_string(), "Invalid token '+' after unary minus");

        let error = SyntaxError::function_missing_bracket("sin");
        assert_eq!(
            error.to_string(),
            "Function 'sin' must be followed by an opening bracket"
        );
    }

    #[test]
    fn test_display_quotes_token_position() {
        let error = SyntaxError::InvalidAfterOperand {
            category: TokenCategory::Number,
            position: 1,
        };
        assert_eq!(
            error.to_string(),
            "Expected operator, closing bracket, or implicit multiplication after number at position 1"
        );
        assert_eq!(error.position(), Some(1));

        let error = SyntaxError::InvalidAfterOperator { position: 3 };
        assert_eq!(
            error.to_string(),
            "Expected number, variable, function, or opening bracket after operator at position 3"
        );
    }

    #[test]
    fn test_bracket_error_messages() {
        let error = SyntaxError::UnmatchedClosingBracket {
            bracket: ')',
            position: 0,
        };
        assert_eq!(
            error.to_string(),
            "Unmatched closing bracket ')' at position 0"
        );

        let error = SyntaxError::mismatched_bracket_pair('[', ')', 2);
        assert_eq!(
            error.to_string(),
            "Mismatched bracket pair '[' and ')' at position 2"
        );

        let error = SyntaxError::unmatched_opening_brackets(&['(', '[']);
        assert_eq!(error.to_string(), "Unmatched opening brackets: (, [");
    }

    #[test]
    fn test_every_variant_is_recoverable() {
        let samples = [
            SyntaxError::EmptyExpression,
            SyntaxError::LoneMinus,
            SyntaxError::unrecognized_token("@", 2),
            SyntaxError::UnmatchedClosingBracket {
                bracket: '}',
                position: 4,
            },
        ];
        for error in samples {
            assert!(error.is_recoverable(), "{} should be recoverable", error);
            assert_eq!(error.category(), "Syntax");
        }
    }

    #[test]
    fn test_severity_comes_from_registry() {
        assert_eq!(SyntaxError::EmptyExpression.severity(), "Low");
        assert_eq!(SyntaxError::TrailingOperator.severity(), "Medium");
    }
}
