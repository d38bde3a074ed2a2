//! Cursor over the scanned token sequence
//!
//! The validator walks the stream once, left to right. Whitespace never
//! reaches the stream (the scanner skips it), so every position here is a
//! significant token and message positions are plain stream indices.

use crate::tokens::token::Token;

/// Ordered token sequence with a single forward cursor.
#[derive(Debug, Clone, Default)]
pub struct TokenStream {
    tokens: Vec<Token>,
    position: usize,
}

impl TokenStream {
    /// Create a new token stream positioned at the first token
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    // === CORE NAVIGATION ===

    /// Get the token under the cursor
    pub fn current(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    /// Peek at the token after the cursor without advancing
    pub fn peek_next(&self) -> Option<&Token> {
        self.tokens.get(self.position + 1)
    }

    /// Advance the cursor to the next token
    pub fn advance(&mut self) -> Option<&Token> {
        if self.position < self.tokens.len() {
            self.position += 1;
        }
        self.current()
    }

    /// Check if the cursor has consumed every token
    pub fn is_at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }

    /// Current cursor index; this is the position quoted in diagnostics
    pub fn position(&self) -> usize {
        self.position
    }

    /// Move the cursor back to the first token
    pub fn reset(&mut self) {
        self.position = 0;
    }

    // === RANDOM ACCESS ===

    /// Get a token by index without moving the cursor
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Number of tokens in the stream
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the stream holds no tokens
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// View the whole sequence in scan order
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }
}
