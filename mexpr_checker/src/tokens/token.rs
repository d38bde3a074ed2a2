//! Token type and grammatical classification
//!
//! Tokens carry their raw text plus the span they were scanned from; the
//! classification predicates are pure functions over the text, used both by
//! the tokenizer's sign lookback and by the validator walk.
use crate::grammar::functions::is_function_name;
use crate::utils::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed operator set
pub const OPERATORS: [char; 5] = ['+', '-', '*', '/', '^'];

/// The closed opening bracket set
pub const OPENING_BRACKETS: [char; 3] = ['(', '[', '{'];

/// The closed closing bracket set
pub const CLOSING_BRACKETS: [char; 3] = [')', ']', '}'];

/// One lexical unit of the input expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    text: String,
    span: Span,
}

impl Token {
    /// Create a new token
    pub fn new(text: impl Into<String>, span: Span) -> Self {
        Self {
            text: text.into(),
            span,
        }
    }

    /// Raw text of the token exactly as emitted by the scanner
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Input location the token was scanned from
    pub fn span(&self) -> Span {
        self.span
    }

    /// Grammatical category of this token, None if unclassifiable
    pub fn category(&self) -> Option<TokenCategory> {
        classify(&self.text)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Grammatical category of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenCategory {
    /// Numeric literal, possibly carrying a contextual sign
    Number,
    /// Identifier-shaped word outside the function vocabulary
    Variable,
    /// Member of the fixed function vocabulary
    Function,
    /// One of `+ - * / ^`
    Operator,
    /// One of `( [ {`
    OpenBracket,
    /// One of `) ] }`
    CloseBracket,
}

impl TokenCategory {
    /// Lowercase phrase used in diagnostic messages
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Variable => "variable",
            Self::Function => "function",
            Self::Operator => "operator",
            Self::OpenBracket => "opening bracket",
            Self::CloseBracket => "closing bracket",
        }
    }

    /// Check if this category is a value-producing operand (number or variable)
    pub const fn is_operand(self) -> bool {
        matches!(self, Self::Number | Self::Variable)
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// === CHARACTER SET MEMBERSHIP ===

/// Check if a character is one of the five expression operators
pub const fn is_operator_char(ch: char) -> bool {
    matches!(ch, '+' | '-' | '*' | '/' | '^')
}

/// Check if a character opens a bracket group
pub const fn is_opening_bracket_char(ch: char) -> bool {
    matches!(ch, '(' | '[' | '{')
}

/// Check if a character closes a bracket group
pub const fn is_closing_bracket_char(ch: char) -> bool {
    matches!(ch, ')' | ']' | '}')
}

/// Opening bracket paired with a closing bracket
pub const fn bracket_partner(closing: char) -> Option<char> {
    match closing {
        ')' => Some('('),
        ']' => Some('['),
        '}' => Some('{'),
        _ => None,
    }
}

fn single_char(text: &str) -> Option<char> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}

/// Check if a token text is a single operator character
pub fn is_operator_text(text: &str) -> bool {
    single_char(text).map_or(false, is_operator_char)
}

/// Check if a token text is a single opening bracket
pub fn is_opening_bracket_text(text: &str) -> bool {
    single_char(text).map_or(false, is_opening_bracket_char)
}

/// Check if a token text is a single closing bracket
pub fn is_closing_bracket_text(text: &str) -> bool {
    single_char(text).map_or(false, is_closing_bracket_char)
}

// === CLASSIFICATION PREDICATES ===

/// Check if a token text is a decimal literal: optional single leading minus,
/// at least one digit, at most one decimal point, nothing else.
pub fn is_number(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    if digits.is_empty() {
        return false;
    }

    let mut seen_digit = false;
    let mut seen_decimal_point = false;
    for ch in digits.chars() {
        match ch {
            '0'..='9' => seen_digit = true,
            '.' if !seen_decimal_point => seen_decimal_point = true,
            _ => return false,
        }
    }
    seen_digit
}

/// Check if a token text is identifier-shaped: a letter or underscore
/// followed by letters, digits, or underscores.
pub fn is_identifier_shaped(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|ch| ch.is_alphanumeric() || ch == '_')
}

/// Check if a token text is a variable: identifier-shaped and not a
/// function name.
pub fn is_variable(text: &str) -> bool {
    is_identifier_shaped(text) && !is_function_name(text)
}

/// Check if a token text is a recognized function name
pub fn is_function(text: &str) -> bool {
    is_function_name(text)
}

/// Assign the grammatical category for a token text. The predicate order
/// mirrors the validator's expectations: numbers before functions before
/// variables, then direct set membership for operators and brackets.
pub fn classify(text: &str) -> Option<TokenCategory> {
    if is_number(text) {
        Some(TokenCategory::Number)
    } else if is_function(text) {
        Some(TokenCategory::Function)
    } else if is_variable(text) {
        Some(TokenCategory::Variable)
    } else if is_operator_text(text) {
        Some(TokenCategory::Operator)
    } else if is_opening_bracket_text(text) {
        Some(TokenCategory::OpenBracket)
    } else if is_closing_bracket_text(text) {
        Some(TokenCategory::CloseBracket)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_number_accepts_decimal_forms() {
        assert!(is_number("2"));
        assert!(is_number("42"));
        assert!(is_number("3.14"));
        assert!(is_number("2."));
        assert!(is_number(".5"));
        assert!(is_number("-3"));
        assert!(is_number("-.5"));
    }

    #[test]
    fn test_is_number_rejects_malformed_literals() {
        assert!(!is_number(""));
        assert!(!is_number("-"));
        assert!(!is_number("."));
        assert!(!is_number("-."));
        assert!(!is_number("1.2.3"));
        assert!(!is_number("--5"));
        assert!(!is_number("2x"));
        assert!(!is_number("1e5"));
    }

    #[test]
    fn test_is_variable_excludes_function_names() {
        assert!(is_variable("x"));
        assert!(is_variable("_tmp"));
        assert!(is_variable("alpha2"));
        assert!(!is_variable("sin"));
        assert!(!is_variable("sqrt"));
        assert!(!is_variable("2x"));
        assert!(!is_variable(""));
    }

    #[test]
    fn test_classify_covers_all_categories() {
        assert_eq!(classify("3.5"), Some(TokenCategory::Number));
        assert_eq!(classify("-3"), Some(TokenCategory::Number));
        assert_eq!(classify("cos"), Some(TokenCategory::Function));
        assert_eq!(classify("y"), Some(TokenCategory::Variable));
        assert_eq!(classify("^"), Some(TokenCategory::Operator));
        assert_eq!(classify("["), Some(TokenCategory::OpenBracket));
        assert_eq!(classify("}"), Some(TokenCategory::CloseBracket));
        assert_eq!(classify("$"), None);
        assert_eq!(classify("- 3"), None);
    }

    #[test]
    fn test_classification_is_mutually_exclusive() {
        let samples = ["7", "-2.5", "x", "sin", "ln", "+", "-", "(", "{", ")", "]"];
        for text in samples {
            let count = [
                is_number(text),
                is_function(text),
                is_variable(text),
                is_operator_text(text),
                is_opening_bracket_text(text),
                is_closing_bracket_text(text),
            ]
            .iter()
            .filter(|hit| **hit)
            .count();
            assert_eq!(count, 1, "'{}' matched {} predicates", text, count);
        }
    }

    #[test]
    fn test_bracket_partner_pairing() {
        assert_eq!(bracket_partner(')'), Some('('));
        assert_eq!(bracket_partner(']'), Some('['));
        assert_eq!(bracket_partner('}'), Some('{'));
        assert_eq!(bracket_partner('('), None);
    }

    #[test]
    fn test_operator_text_requires_single_char() {
        assert!(is_operator_text("-"));
        assert!(is_operator_text("^"));
        assert!(!is_operator_text("--"));
        assert!(!is_operator_text(""));
    }

    #[test]
    fn test_token_accessors() {
        let token = Token::new("sqrt", Span::from_offsets(0, 4));
        assert_eq!(token.text(), "sqrt");
        assert_eq!(token.span().len(), 4);
        assert_eq!(token.category(), Some(TokenCategory::Function));
        assert_eq!(token.to_string(), "sqrt");
    }

    #[test]
    fn test_category_display_phrases() {
        assert_eq!(TokenCategory::Number.to_string(), "number");
        assert_eq!(TokenCategory::OpenBracket.to_string(), "opening bracket");
        assert_eq!(TokenCategory::CloseBracket.to_string(), "closing bracket");
        assert!(TokenCategory::Number.is_operand());
        assert!(TokenCategory::Variable.is_operand());
        assert!(!TokenCategory::Function.is_operand());
    }
}
