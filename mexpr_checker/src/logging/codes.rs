//! Consolidated diagnostic codes and classification system
//!
//! Single source of truth for all diagnostic codes, their metadata, and
//! classification functions. Codes are a logging-layer concern: verdict
//! messages shown to callers never contain them.

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// CODE WRAPPER TYPE
// ============================================================================

/// Universal code wrapper for both error and success codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// ERROR CLASSIFICATION TYPES
// ============================================================================

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Critical = 0,
    High = 1,
    Medium = 2,
    Low = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Critical" => Some(Severity::Critical),
            "High" => Some(Severity::High),
            "Medium" => Some(Severity::Medium),
            "Low" => Some(Severity::Low),
            _ => None,
        }
    }
}

/// Complete metadata for a diagnostic code
#[derive(Debug, Clone)]
pub struct ErrorMetadata {
    pub code: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub recoverable: bool,
    pub requires_halt: bool,
    pub description: &'static str,
    pub recommended_action: &'static str,
}

impl ErrorMetadata {
    pub fn new(
        code: &'static str,
        category: &'static str,
        severity: Severity,
        recoverable: bool,
        requires_halt: bool,
        description: &'static str,
        recommended_action: &'static str,
    ) -> Self {
        Self {
            code,
            category,
            severity,
            recoverable,
            requires_halt,
            description,
            recommended_action,
        }
    }
}

// ============================================================================
// ERROR CODE CONSTANTS
// ============================================================================

/// System error codes
pub mod system {
    use super::Code;

    pub const LOGGING_INIT_FAILURE: Code = Code::new("ERR001");
    pub const CONFIG_VALIDATION_FAILURE: Code = Code::new("ERR002");
    pub const PIPELINE_VALIDATION_FAILURE: Code = Code::new("ERR003");
}

/// File processing error codes
pub mod file_processing {
    use super::Code;

    pub const FILE_NOT_FOUND: Code = Code::new("E005");
    pub const NOT_A_FILE: Code = Code::new("E006");
    pub const FILE_TOO_LARGE: Code = Code::new("E007");
    pub const IO_ERROR: Code = Code::new("E008");
}

/// Lexical error codes
pub mod lexical {
    use super::Code;

    pub const INVALID_CHARACTER: Code = Code::new("E020");
    pub const INVALID_NUMBER_FORMAT: Code = Code::new("E021");
}

/// Syntax validation error codes
pub mod syntax {
    use super::Code;

    pub const EMPTY_EXPRESSION: Code = Code::new("E040");
    pub const NO_TOKENS_FOUND: Code = Code::new("E041");
    pub const LEADING_OPERATOR: Code = Code::new("E042");
    pub const LONE_MINUS: Code = Code::new("E043");
    pub const INVALID_AFTER_UNARY_MINUS: Code = Code::new("E044");
    pub const UNRECOGNIZED_TOKEN: Code = Code::new("E045");
    pub const FUNCTION_CALL_MISSING_BRACKET: Code = Code::new("E046");
    pub const TRAILING_OPERATOR: Code = Code::new("E047");
    pub const INVALID_AFTER_OPERATOR: Code = Code::new("E048");
    pub const INVALID_AFTER_OPERAND: Code = Code::new("E049");
    pub const INVALID_AFTER_OPEN_BRACKET: Code = Code::new("E050");
    pub const INVALID_AFTER_CLOSE_BRACKET: Code = Code::new("E051");
    pub const UNMATCHED_CLOSING_BRACKET: Code = Code::new("E052");
    pub const MISMATCHED_BRACKET_PAIR: Code = Code::new("E053");
    pub const UNMATCHED_OPENING_BRACKETS: Code = Code::new("E054");
}

// ============================================================================
// SUCCESS CODE CONSTANTS
// ============================================================================

/// Success codes
pub mod success {
    use super::Code;

    // General success codes
    pub const OPERATION_COMPLETED_SUCCESSFULLY: Code = Code::new("I001");
    pub const SYSTEM_INITIALIZATION_COMPLETED: Code = Code::new("I004");

    // File processing success codes
    pub const FILE_CHECK_COMPLETE: Code = Code::new("I006");

    // Lexical success codes
    pub const TOKENIZATION_COMPLETE: Code = Code::new("I020");

    // Syntax success codes
    pub const SYNTAX_VALIDATION_PASSED: Code = Code::new("I040");
}

// ============================================================================
// ERROR METADATA REGISTRY
// ============================================================================

/// Diagnostic metadata registry using OnceLock for thread safety
static ERROR_REGISTRY: OnceLock<HashMap<&'static str, ErrorMetadata>> = OnceLock::new();

/// Initialize and get the error registry
fn get_error_registry() -> &'static HashMap<&'static str, ErrorMetadata> {
    ERROR_REGISTRY.get_or_init(|| {
        let mut registry = HashMap::new();

        // System errors
        registry.insert(
            "ERR001",
            ErrorMetadata::new(
                "ERR001",
                "System",
                Severity::Critical,
                false,
                true,
                "Global logging initialization failed",
                "Check logging configuration and retry startup",
            ),
        );
        registry.insert(
            "ERR002",
            ErrorMetadata::new(
                "ERR002",
                "System",
                Severity::Critical,
                false,
                true,
                "Compile-time configuration validation failed",
                "Rebuild with a valid configuration profile",
            ),
        );
        registry.insert(
            "ERR003",
            ErrorMetadata::new(
                "ERR003",
                "System",
                Severity::Critical,
                false,
                true,
                "Pipeline stage validation failed",
                "Verify the diagnostic code registry is complete",
            ),
        );

        // File processing errors
        registry.insert(
            "E005",
            ErrorMetadata::new(
                "E005",
                "FileProcessing",
                Severity::Medium,
                false,
                true,
                "Expression file not found at specified path",
                "Check file path and ensure file exists",
            ),
        );
        registry.insert(
            "E006",
            ErrorMetadata::new(
                "E006",
                "FileProcessing",
                Severity::Medium,
                false,
                true,
                "Path does not point to a regular file",
                "Pass a readable file of expressions, one per line",
            ),
        );
        registry.insert(
            "E007",
            ErrorMetadata::new(
                "E007",
                "FileProcessing",
                Severity::Medium,
                false,
                true,
                "Expression file exceeds configured size limit",
                "Split the file or raise max_file_size in the build profile",
            ),
        );
        registry.insert(
            "E008",
            ErrorMetadata::new(
                "E008",
                "FileProcessing",
                Severity::Medium,
                false,
                true,
                "I/O failure while reading expression file",
                "Check file permissions and disk state",
            ),
        );

        // Lexical errors
        registry.insert(
            "E020",
            ErrorMetadata::new(
                "E020",
                "Lexical",
                Severity::Medium,
                true,
                false,
                "Character outside the expression alphabet",
                "Remove or replace the invalid character",
            ),
        );
        registry.insert(
            "E021",
            ErrorMetadata::new(
                "E021",
                "Lexical",
                Severity::Medium,
                true,
                false,
                "Numeric literal with more than one decimal point",
                "Rewrite the number with a single decimal point",
            ),
        );

        // Syntax errors
        registry.insert(
            "E040",
            ErrorMetadata::new(
                "E040",
                "Syntax",
                Severity::Low,
                true,
                false,
                "Input is empty or whitespace only",
                "Provide a non-empty expression",
            ),
        );
        registry.insert(
            "E041",
            ErrorMetadata::new(
                "E041",
                "Syntax",
                Severity::Low,
                true,
                false,
                "Tokenization produced no tokens",
                "Provide an expression with at least one token",
            ),
        );
        registry.insert(
            "E042",
            ErrorMetadata::new(
                "E042",
                "Syntax",
                Severity::Medium,
                true,
                false,
                "Expression starts with a non-minus operator",
                "Start the expression with an operand or unary minus",
            ),
        );
        registry.insert(
            "E043",
            ErrorMetadata::new(
                "E043",
                "Syntax",
                Severity::Low,
                true,
                false,
                "Expression is a single minus sign",
                "Follow the minus with an operand",
            ),
        );
        registry.insert(
            "E044",
            ErrorMetadata::new(
                "E044",
                "Syntax",
                Severity::Medium,
                true,
                false,
                "Token after a leading unary minus cannot start an operand",
                "Follow the unary minus with a number, variable, function, or bracket",
            ),
        );
        registry.insert(
            "E045",
            ErrorMetadata::new(
                "E045",
                "Syntax",
                Severity::Medium,
                true,
                false,
                "Token does not fit any grammatical category",
                "Check the token spelling against the expression grammar",
            ),
        );
        registry.insert(
            "E046",
            ErrorMetadata::new(
                "E046",
                "Syntax",
                Severity::Medium,
                true,
                false,
                "Function name not followed by an opening bracket",
                "Write function calls as name(argument)",
            ),
        );
        registry.insert(
            "E047",
            ErrorMetadata::new(
                "E047",
                "Syntax",
                Severity::Medium,
                true,
                false,
                "Expression ends with an operator",
                "Complete the expression after the operator",
            ),
        );
        registry.insert(
            "E048",
            ErrorMetadata::new(
                "E048",
                "Syntax",
                Severity::Medium,
                true,
                false,
                "Operator not followed by a valid operand start",
                "Follow the operator with a number, variable, function, or bracket",
            ),
        );
        registry.insert(
            "E049",
            ErrorMetadata::new(
                "E049",
                "Syntax",
                Severity::Medium,
                true,
                false,
                "Invalid token directly after a number or variable",
                "Insert an operator or bracket between the operands",
            ),
        );
        registry.insert(
            "E050",
            ErrorMetadata::new(
                "E050",
                "Syntax",
                Severity::Medium,
                true,
                false,
                "Invalid token directly after an opening bracket",
                "Open brackets with an operand or signed number",
            ),
        );
        registry.insert(
            "E051",
            ErrorMetadata::new(
                "E051",
                "Syntax",
                Severity::Medium,
                true,
                false,
                "Invalid token directly after a closing bracket",
                "Follow the closing bracket with an operator or bracket",
            ),
        );
        registry.insert(
            "E052",
            ErrorMetadata::new(
                "E052",
                "Syntax",
                Severity::Medium,
                true,
                false,
                "Closing bracket with no open bracket to match",
                "Remove the extra closing bracket or add its opener",
            ),
        );
        registry.insert(
            "E053",
            ErrorMetadata::new(
                "E053",
                "Syntax",
                Severity::Medium,
                true,
                false,
                "Closing bracket does not pair with the innermost opener",
                "Match bracket kinds: (), [], {}",
            ),
        );
        registry.insert(
            "E054",
            ErrorMetadata::new(
                "E054",
                "Syntax",
                Severity::Medium,
                true,
                false,
                "Opening brackets left unclosed at end of expression",
                "Close every opened bracket",
            ),
        );

        // Success codes
        registry.insert(
            "I001",
            ErrorMetadata::new(
                "I001",
                "System",
                Severity::Low,
                true,
                false,
                "Operation completed successfully",
                "Continue normal operation",
            ),
        );
        registry.insert(
            "I004",
            ErrorMetadata::new(
                "I004",
                "System",
                Severity::Low,
                true,
                false,
                "System initialization completed successfully",
                "Continue normal operation",
            ),
        );
        registry.insert(
            "I006",
            ErrorMetadata::new(
                "I006",
                "FileProcessing",
                Severity::Low,
                true,
                false,
                "Expression file check completed",
                "Review the per-line results",
            ),
        );
        registry.insert(
            "I020",
            ErrorMetadata::new(
                "I020",
                "Lexical",
                Severity::Low,
                true,
                false,
                "Tokenization completed successfully",
                "Continue to syntax validation",
            ),
        );
        registry.insert(
            "I040",
            ErrorMetadata::new(
                "I040",
                "Syntax",
                Severity::Low,
                true,
                false,
                "Syntax validation passed",
                "Expression is well formed",
            ),
        );

        registry
    })
}

// ============================================================================
// CLASSIFICATION FUNCTIONS
// ============================================================================

/// Get metadata for a specific diagnostic code
pub fn get_error_metadata(code: &str) -> Option<&'static ErrorMetadata> {
    get_error_registry().get(code)
}

/// Get severity from a diagnostic code
pub fn get_severity(code: &str) -> Severity {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.severity)
        .unwrap_or(Severity::Medium)
}

/// Check if a diagnostic is recoverable
pub fn is_recoverable(code: &str) -> bool {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.recoverable)
        .unwrap_or(true)
}

/// Check if a diagnostic requires immediate halt
pub fn requires_halt(code: &str) -> bool {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.requires_halt)
        .unwrap_or(false)
}

/// Get human-readable description for a diagnostic code
pub fn get_description(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.description)
        .unwrap_or("Unknown error")
}

/// Get recommended action for a diagnostic code
pub fn get_action(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.recommended_action)
        .unwrap_or("No specific action available")
}

/// Get category for a diagnostic code
pub fn get_category(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.category)
        .unwrap_or("Unknown")
}
