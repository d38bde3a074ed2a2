//! Core lexical analyzer implementation
//!
//! Clean implementation focused on systematic character scanning with
//! sign-aware number handling and proper integration with the global
//! logging system.

use crate::config::compile_time::lexical::*;
use crate::config::runtime::LexicalPreferences;
use crate::logging::codes;
use crate::tokens::{
    is_closing_bracket_char, is_opening_bracket_char, is_opening_bracket_text, is_operator_char,
    is_operator_text, Token, TokenCategory, TokenStream,
};
use crate::utils::{Position, Span};
use crate::{log_debug, log_error, log_success};

/// Lexical analysis errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexerError {
    #[error("Invalid character '{character}' at position {position}")]
    InvalidCharacter { character: char, position: usize },

    #[error("Invalid number format at position {position}")]
    InvalidNumberFormat { position: usize },
}

impl LexerError {
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            LexerError::InvalidCharacter { .. } => codes::lexical::INVALID_CHARACTER,
            LexerError::InvalidNumberFormat { .. } => codes::lexical::INVALID_NUMBER_FORMAT,
        }
    }
}

/// Essential lexical analysis metrics with runtime preferences
#[derive(Debug, Default, Clone)]
pub struct LexicalMetrics {
    pub total_tokens: usize,
    pub number_tokens: usize,
    pub signed_number_tokens: usize,
    pub word_tokens: usize,
    pub operator_tokens: usize,
    pub bracket_tokens: usize,
    pub whitespace_skipped: usize,
    pub invalid_chars: usize,

    // Runtime preference-controlled metrics
    pub operator_usage: std::collections::HashMap<char, usize>,
}

impl LexicalMetrics {
    pub(crate) fn record_token(&mut self, token: &Token, preferences: &LexicalPreferences) {
        self.total_tokens += 1;

        if !preferences.collect_detailed_metrics {
            return;
        }

        match token.category() {
            Some(TokenCategory::Number) => {
                self.number_tokens += 1;
                if token.text().starts_with('-') {
                    self.signed_number_tokens += 1;
                }
            }
            Some(TokenCategory::Function) | Some(TokenCategory::Variable) => {
                self.word_tokens += 1;
            }
            Some(TokenCategory::Operator) => {
                self.operator_tokens += 1;

                // Track per-operator usage if enabled
                if preferences.track_operator_usage {
                    if let Some(op) = token.text().chars().next() {
                        *self.operator_usage.entry(op).or_insert(0) += 1;
                    }
                }
            }
            Some(TokenCategory::OpenBracket) | Some(TokenCategory::CloseBracket) => {
                self.bracket_tokens += 1;
            }
            None => {}
        }
    }

    pub(crate) fn record_whitespace_skipped(&mut self) {
        self.whitespace_skipped += 1;
    }

    pub(crate) fn record_invalid_char(&mut self) {
        self.invalid_chars += 1;
    }
}

/// Core lexical analyzer with global logging integration
pub struct LexicalAnalyzer {
    metrics: LexicalMetrics,
    preferences: LexicalPreferences,
}

impl LexicalAnalyzer {
    pub fn new() -> Self {
        Self {
            metrics: LexicalMetrics::default(),
            preferences: LexicalPreferences::default(),
        }
    }

    pub fn with_preferences(preferences: LexicalPreferences) -> Self {
        Self {
            metrics: LexicalMetrics::default(),
            preferences,
        }
    }

    /// Get metrics from the most recent tokenization
    pub fn metrics(&self) -> &LexicalMetrics {
        &self.metrics
    }

    /// Get active runtime preferences
    pub fn preferences(&self) -> &LexicalPreferences {
        &self.preferences
    }

    /// Update preferences (runtime configurable)
    pub fn set_preferences(&mut self, preferences: LexicalPreferences) {
        self.preferences = preferences;
    }

    /// Tokenize a single expression into a stream of classified text tokens
    ///
    /// Positions in errors are character offsets into the expression, not
    /// byte offsets.
    pub fn tokenize_expression(&mut self, expression: &str) -> Result<TokenStream, LexerError> {
        // Reset metrics for this tokenization
        self.metrics = LexicalMetrics::default();

        let chars: Vec<char> = expression.chars().collect();

        log_debug!("Starting lexical analysis",
            "expression" => expression.chars().take(MAX_TOKEN_PREVIEW_LENGTH).collect::<String>(),
            "char_count" => chars.len()
        );

        // Position table lets the scanner jump freely while keeping spans accurate
        let mut positions = Vec::with_capacity(chars.len() + 1);
        let mut pos = Position::start();
        for &ch in &chars {
            positions.push(pos);
            pos = pos.advance(ch);
        }
        positions.push(pos);

        let mut tokens = Vec::new();
        let mut i = 0;

        while i < chars.len() {
            let ch = chars[i];

            if ch.is_whitespace() {
                self.metrics.record_whitespace_skipped();
                i += 1;
                continue;
            }

            if ch == '-' && self.minus_starts_signed_number(&tokens, &chars, i) {
                i = self.scan_signed_number(&chars, i, &positions, &mut tokens)?;
                continue;
            }

            if ch.is_ascii_digit() || (ch == '.' && next_is_digit(&chars, i)) {
                i = self.scan_number(&chars, i, &positions, &mut tokens)?;
                continue;
            }

            if ch.is_alphabetic() || ch == '_' {
                i = self.scan_word(&chars, i, &positions, &mut tokens);
                continue;
            }

            if is_operator_char(ch) || is_opening_bracket_char(ch) || is_closing_bracket_char(ch) {
                let span = Span::new(positions[i], positions[i + 1]);
                let token = Token::new(ch.to_string(), span);
                self.metrics.record_token(&token, &self.preferences);
                tokens.push(token);
                i += 1;
                continue;
            }

            self.metrics.record_invalid_char();
            let error = LexerError::InvalidCharacter {
                character: ch,
                position: i,
            };
            log_error!(error.error_code(), "Invalid character encountered",
                span = Span::new(positions[i], positions[i + 1]),
                "character" => ch,
                "position" => i
            );
            return Err(error);
        }

        log_success!(codes::success::TOKENIZATION_COMPLETE, "Tokenization complete",
            "total_tokens" => self.metrics.total_tokens,
            "whitespace_skipped" => self.metrics.whitespace_skipped
        );

        if self.preferences.log_token_statistics {
            log_debug!("Token statistics",
                "numbers" => self.metrics.number_tokens,
                "signed_numbers" => self.metrics.signed_number_tokens,
                "words" => self.metrics.word_tokens,
                "operators" => self.metrics.operator_tokens,
                "brackets" => self.metrics.bracket_tokens
            );
        }

        Ok(TokenStream::new(tokens))
    }

    /// Decide whether a minus sign begins a signed number literal
    ///
    /// A minus is a sign when nothing precedes it, or when the previous token
    /// is an operator or an opening bracket, and digits (possibly separated by
    /// literal spaces) follow.
    fn minus_starts_signed_number(&self, tokens: &[Token], chars: &[char], index: usize) -> bool {
        let after_sign_context = match tokens.last() {
            None => true,
            Some(previous) => {
                is_operator_text(previous.text()) || is_opening_bracket_text(previous.text())
            }
        };

        if !after_sign_context {
            return false;
        }

        // Only literal spaces may separate the sign from its digits
        let mut j = index + 1;
        while j < chars.len() && chars[j] == ' ' {
            j += 1;
        }

        match chars.get(j) {
            Some(c) => c.is_ascii_digit() || *c == '.',
            None => false,
        }
    }

    fn scan_signed_number(
        &mut self,
        chars: &[char],
        start: usize,
        positions: &[Position],
        tokens: &mut Vec<Token>,
    ) -> Result<usize, LexerError> {
        let mut text = String::from("-");
        let mut index = start + 1;

        // Spaces between the sign and its digits are dropped from the token text
        while index < chars.len() && chars[index] == ' ' {
            self.metrics.record_whitespace_skipped();
            index += 1;
        }

        let mut seen_decimal_point = false;
        while index < chars.len() {
            let ch = chars[index];
            if ch.is_ascii_digit() {
                text.push(ch);
                index += 1;
            } else if ch == '.' {
                if seen_decimal_point {
                    let error = LexerError::InvalidNumberFormat { position: index };
                    log_error!(error.error_code(), "Invalid number format",
                        span = Span::new(positions[index], positions[index + 1]),
                        "position" => index
                    );
                    return Err(error);
                }
                seen_decimal_point = true;
                text.push('.');
                index += 1;
            } else {
                break;
            }
        }

        let span = Span::new(positions[start], positions[index]);
        let token = Token::new(text, span);
        self.metrics.record_token(&token, &self.preferences);
        tokens.push(token);
        Ok(index)
    }

    fn scan_number(
        &mut self,
        chars: &[char],
        start: usize,
        positions: &[Position],
        tokens: &mut Vec<Token>,
    ) -> Result<usize, LexerError> {
        let mut text = String::new();
        let mut index = start;
        let mut seen_decimal_point = false;

        while index < chars.len() {
            let ch = chars[index];
            if ch.is_ascii_digit() {
                text.push(ch);
                index += 1;
            } else if ch == '.' {
                if seen_decimal_point {
                    let error = LexerError::InvalidNumberFormat { position: index };
                    log_error!(error.error_code(), "Invalid number format",
                        span = Span::new(positions[index], positions[index + 1]),
                        "position" => index
                    );
                    return Err(error);
                }
                seen_decimal_point = true;
                text.push('.');
                index += 1;
            } else {
                break;
            }
        }

        let span = Span::new(positions[start], positions[index]);
        let token = Token::new(text, span);
        self.metrics.record_token(&token, &self.preferences);
        tokens.push(token);
        Ok(index)
    }

    fn scan_word(
        &mut self,
        chars: &[char],
        start: usize,
        positions: &[Position],
        tokens: &mut Vec<Token>,
    ) -> usize {
        let mut text = String::new();
        let mut index = start;

        while index < chars.len() && (chars[index].is_alphanumeric() || chars[index] == '_') {
            text.push(chars[index]);
            index += 1;
        }

        let span = Span::new(positions[start], positions[index]);
        let token = Token::new(text, span);
        self.metrics.record_token(&token, &self.preferences);
        tokens.push(token);
        index
    }
}

fn next_is_digit(chars: &[char], index: usize) -> bool {
    chars
        .get(index + 1)
        .map(|c| c.is_ascii_digit())
        .unwrap_or(false)
}

impl Default for LexicalAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
