// Internal modules
pub mod config;
pub mod grammar;
pub mod lexical;
#[macro_use]
pub mod logging;
pub mod pipeline;
pub mod syntax;
pub mod tokens;
pub mod utils;

// Re-export key types for library consumers
pub use pipeline::{check_expression, check_file, FileReport, PipelineError, Verdict};
pub use tokens::{Token, TokenCategory, TokenStream};

// Re-export line-level report entries for callers that render their own output
pub use pipeline::output::LineResult;
