//! Single-pass structural validator over the token stream
//!
//! The validator walks the stream once, left to right, holding only the
//! previous token's category and a stack of open brackets. Checks run in a
//! fixed order per token and the walk stops at the first violation, leaving
//! the cursor on the offending token so callers can report its span.

use crate::config::compile_time::validator::*;
use crate::config::runtime::ValidatorPreferences;
use crate::logging::codes;
use crate::syntax::error::{SyntaxError, SyntaxResult};
use crate::tokens::{
    bracket_partner, classify, is_function, is_number, is_opening_bracket_text, is_operator_text,
    is_variable, TokenCategory, TokenStream,
};
use crate::{log_debug, log_success, log_warning};

/// Essential validation metrics with runtime preferences
#[derive(Debug, Default, Clone)]
pub struct ValidationMetrics {
    pub tokens_examined: usize,

    // Runtime preference-controlled metrics
    pub max_bracket_depth: usize,
    pub implicit_multiplications: usize,
}

impl ValidationMetrics {
    pub(crate) fn record_token_examined(&mut self) {
        self.tokens_examined += 1;
    }

    pub(crate) fn record_bracket_depth(&mut self, depth: usize, preferences: &ValidatorPreferences) {
        if preferences.collect_detailed_metrics && depth > self.max_bracket_depth {
            self.max_bracket_depth = depth;
        }
    }

    pub(crate) fn record_implicit_multiplication(&mut self, preferences: &ValidatorPreferences) {
        if preferences.collect_detailed_metrics {
            self.implicit_multiplications += 1;
        }
    }
}

/// Core syntax validator with global logging integration
pub struct SyntaxValidator {
    metrics: ValidationMetrics,
    preferences: ValidatorPreferences,
}

impl SyntaxValidator {
    pub fn new() -> Self {
        Self {
            metrics: ValidationMetrics::default(),
            preferences: ValidatorPreferences::default(),
        }
    }

    pub fn with_preferences(preferences: ValidatorPreferences) -> Self {
        Self {
            metrics: ValidationMetrics::default(),
            preferences,
        }
    }

    /// Get metrics from the most recent validation
    pub fn metrics(&self) -> &ValidationMetrics {
        &self.metrics
    }

    /// Get active runtime preferences
    pub fn preferences(&self) -> &ValidatorPreferences {
        &self.preferences
    }

    /// Update preferences (runtime configurable)
    pub fn set_preferences(&mut self, preferences: ValidatorPreferences) {
        self.preferences = preferences;
    }

    /// Validate the structure of a token stream
    ///
    /// On rejection the stream cursor sits on the offending token, or past
    /// the end for rejections with no single offending token.
    pub fn validate_stream(&mut self, stream: &mut TokenStream) -> SyntaxResult<()> {
        // Reset metrics for this validation
        self.metrics = ValidationMetrics::default();
        stream.reset();

        log_debug!("Starting syntax validation", "tokens" => stream.len());

        if stream.is_empty() {
            return Err(SyntaxError::NoTokensFound);
        }

        self.check_leading_token(stream)?;
        self.walk_stream(stream)?;

        log_success!(codes::success::SYNTAX_VALIDATION_PASSED, "Syntax validation passed",
            "tokens_examined" => self.metrics.tokens_examined,
            "max_bracket_depth" => self.metrics.max_bracket_depth
        );
        Ok(())
    }

    /// Rules for the first token, checked before the walk so a bad start is
    /// reported as a start problem rather than a generic adjacency one
    fn check_leading_token(&mut self, stream: &mut TokenStream) -> SyntaxResult<()> {
        let first_text = match stream.get(0) {
            Some(token) => token.text().to_string(),
            None => return Ok(()),
        };

        if is_operator_text(&first_text) && first_text != "-" {
            return Err(SyntaxError::leading_operator(&first_text));
        }

        // A bare minus survives scanning only when no digits follow it
        // directly, so it must be the unary prefix of an operand
        if first_text == "-" {
            if stream.len() < 2 {
                return Err(SyntaxError::LoneMinus);
            }

            let second_text = match stream.get(1) {
                Some(token) => token.text().to_string(),
                None => return Ok(()),
            };
            let starts_operand = is_number(&second_text)
                || is_function(&second_text)
                || is_variable(&second_text)
                || is_opening_bracket_text(&second_text);
            if !starts_operand {
                stream.advance();
                return Err(SyntaxError::invalid_after_unary_minus(&second_text));
            }
        }

        Ok(())
    }

    /// The main walk: classify each token, apply the adjacency rules against
    /// the previous category, and track bracket pairing
    fn walk_stream(&mut self, stream: &mut TokenStream) -> SyntaxResult<()> {
        let mut previous: Option<TokenCategory> = None;
        let mut previous_text = String::new();
        let mut bracket_stack: Vec<char> = Vec::new();
        let mut depth_warning_emitted = false;

        while let Some(token) = stream.current() {
            let text = token.text().to_string();
            let position = stream.position();
            self.metrics.record_token_examined();

            let category = match classify(&text) {
                Some(category) => category,
                None => return Err(SyntaxError::unrecognized_token(&text, position)),
            };

            if previous == Some(TokenCategory::Function) && category != TokenCategory::OpenBracket {
                return Err(SyntaxError::function_missing_bracket(&previous_text));
            }

            if category == TokenCategory::Operator {
                self.check_operator_continuation(stream, position)?;
            }

            self.check_adjacency(previous, category, position)?;

            match category {
                TokenCategory::OpenBracket => {
                    if let Some(bracket) = text.chars().next() {
                        bracket_stack.push(bracket);
                    }
                    self.metrics
                        .record_bracket_depth(bracket_stack.len(), &self.preferences);

                    if bracket_stack.len() > BRACKET_DEPTH_WARN_THRESHOLD && !depth_warning_emitted
                    {
                        log_warning!("Bracket nesting unusually deep",
                            "depth" => bracket_stack.len(),
                            "threshold" => BRACKET_DEPTH_WARN_THRESHOLD,
                            "position" => position
                        );
                        depth_warning_emitted = true;
                    }
                }
                TokenCategory::CloseBracket => {
                    self.check_bracket_pairing(&mut bracket_stack, &text, position)?;
                }
                _ => {}
            }

            if self.preferences.log_category_transitions {
                if let Some(from) = previous {
                    log_debug!("Category transition",
                        "from" => from.as_str(),
                        "to" => category.as_str(),
                        "position" => position
                    );
                }
            }

            previous = Some(category);
            previous_text = text;
            stream.advance();
        }

        if !bracket_stack.is_empty() {
            return Err(SyntaxError::unmatched_opening_brackets(&bracket_stack));
        }

        Ok(())
    }

    /// An operator must be followed by something that starts an operand:
    /// a number, variable, function, opening bracket, or a chained minus
    fn check_operator_continuation(
        &self,
        stream: &mut TokenStream,
        position: usize,
    ) -> SyntaxResult<()> {
        let continuation = stream
            .peek_next()
            .map(|next| (classify(next.text()), next.text() == "-"));

        match continuation {
            None => Err(SyntaxError::TrailingOperator),
            Some((next_category, next_is_minus)) => {
                let starts_operand = next_is_minus
                    || matches!(
                        next_category,
                        Some(TokenCategory::Number)
                            | Some(TokenCategory::Variable)
                            | Some(TokenCategory::Function)
                            | Some(TokenCategory::OpenBracket)
                    );
                if starts_operand {
                    Ok(())
                } else {
                    stream.advance();
                    Err(SyntaxError::InvalidAfterOperator {
                        position: position + 1,
                    })
                }
            }
        }
    }

    /// What may follow each category. Numbers never follow operands or
    /// closing brackets directly; variables, functions, and opening brackets
    /// do, and count as implicit multiplication.
    fn check_adjacency(
        &mut self,
        previous: Option<TokenCategory>,
        current: TokenCategory,
        position: usize,
    ) -> SyntaxResult<()> {
        let previous = match previous {
            Some(previous) => previous,
            None => return Ok(()),
        };

        let continues_value = matches!(
            current,
            TokenCategory::Operator
                | TokenCategory::CloseBracket
                | TokenCategory::OpenBracket
                | TokenCategory::Function
                | TokenCategory::Variable
        );
        let multiplies_implicitly = matches!(
            current,
            TokenCategory::Variable | TokenCategory::OpenBracket | TokenCategory::Function
        );

        if previous.is_operand() {
            if !continues_value {
                return Err(SyntaxError::InvalidAfterOperand {
                    category: previous,
                    position,
                });
            }
            if multiplies_implicitly {
                self.metrics.record_implicit_multiplication(&self.preferences);
            }
            return Ok(());
        }

        if previous == TokenCategory::OpenBracket {
            let opens_group = matches!(
                current,
                TokenCategory::Number
                    | TokenCategory::Variable
                    | TokenCategory::Function
                    | TokenCategory::OpenBracket
                    | TokenCategory::Operator
            );
            if !opens_group {
                return Err(SyntaxError::InvalidAfterOpenBracket { position });
            }
            return Ok(());
        }

        if previous == TokenCategory::CloseBracket {
            if !continues_value {
                return Err(SyntaxError::InvalidAfterCloseBracket { position });
            }
            if multiplies_implicitly {
                self.metrics.record_implicit_multiplication(&self.preferences);
            }
            return Ok(());
        }

        Ok(())
    }

    /// Pop the innermost opener and require it to pair with this closer
    fn check_bracket_pairing(
        &self,
        bracket_stack: &mut Vec<char>,
        text: &str,
        position: usize,
    ) -> SyntaxResult<()> {
        let close = match text.chars().next() {
            Some(bracket) => bracket,
            None => return Ok(()),
        };

        match bracket_stack.pop() {
            None => Err(SyntaxError::UnmatchedClosingBracket {
                bracket: close,
                position,
            }),
            Some(open) => {
                if bracket_partner(close) == Some(open) {
                    Ok(())
                } else {
                    Err(SyntaxError::mismatched_bracket_pair(open, close, position))
                }
            }
        }
    }
}

impl Default for SyntaxValidator {
    fn default() -> Self {
        Self::new()
    }
}
