//! Grammar vocabulary for mathematical expressions

pub mod functions;

// Re-export function vocabulary
pub use functions::{function_names, is_function_name, MathFunction};
