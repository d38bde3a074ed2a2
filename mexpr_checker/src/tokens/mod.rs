//! Token system for expression checking
//!
//! This module provides the token types shared by the scanner and the
//! validator: the raw [`Token`] (text plus span), the grammatical
//! [`TokenCategory`], and the pure classification predicates that assign
//! categories to token texts.
//!
//! # Overview
//!
//! Scanning and classification are deliberately separate phases. The scanner
//! emits tokens as raw text; nothing about a token's grammatical role is
//! decided at scan time except the contextual sign handling, which only
//! inspects the previously emitted token's text. The validator then calls
//! [`classify`] on each token as it walks the stream.
//!
//! ## Key Components
//!
//! - **[`Token`]** - One lexical unit: raw text plus input span
//! - **[`TokenCategory`]** - The six grammatical categories (number,
//!   variable, function, operator, opening bracket, closing bracket)
//! - **[`TokenStream`]** - Forward cursor used by the validator walk
//! - **Classification predicates** - [`is_number`], [`is_variable`],
//!   [`is_function`], and direct set membership for operators and brackets
//!
//! ## Classification Rules
//!
//! - **Numbers**: digits with at most one decimal point, optionally carrying
//!   a single leading minus merged by the scanner's sign context rule
//! - **Functions**: exact members of the closed vocabulary in
//!   [`crate::grammar::functions`]
//! - **Variables**: identifier-shaped words that are not function names
//! - **Operators / brackets**: single characters matched against the closed
//!   sets [`OPERATORS`], [`OPENING_BRACKETS`], [`CLOSING_BRACKETS`]
//!
//! The predicates are total and mutually exclusive over scanner output:
//! every token the scanner emits matches exactly one category, and anything
//! else was already rejected as a lexical error.

pub mod token;
pub mod token_stream;

// Re-export key types for convenience
pub use token::{Token, TokenCategory};
pub use token_stream::TokenStream;

// Re-export classification functions for the scanner and validator
pub use token::{
    bracket_partner, classify, is_closing_bracket_char, is_closing_bracket_text, is_function,
    is_identifier_shaped, is_number, is_opening_bracket_char, is_opening_bracket_text,
    is_operator_char, is_operator_text, is_variable, CLOSING_BRACKETS, OPENING_BRACKETS, OPERATORS,
};

// Re-export span types from utils
pub use crate::utils::{Position, Span};
