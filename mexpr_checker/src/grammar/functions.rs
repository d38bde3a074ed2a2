//! Recognized function vocabulary
//!
//! The function-name set is closed: a word token is a function call if and
//! only if it appears here, otherwise an identifier-shaped word is a
//! variable. No dynamic registration.
use serde::{Deserialize, Serialize};

/// Built-in mathematical functions recognized by the checker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MathFunction {
    // === TRIGONOMETRIC ===
    Sin,
    Cos,
    Tan,

    // === LOGARITHMIC / EXPONENTIAL ===
    Log,
    Ln,
    Exp,

    // === MAGNITUDE ===
    Sqrt,
    Abs,

    // === ROUNDING ===
    Floor,
    Ceil,
    Round,
}

impl MathFunction {
    /// Get the exact name as it appears in expression source
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Log => "log",
            Self::Ln => "ln",
            Self::Exp => "exp",
            Self::Sqrt => "sqrt",
            Self::Abs => "abs",
            Self::Floor => "floor",
            Self::Ceil => "ceil",
            Self::Round => "round",
        }
    }

    /// Look up a function by name; returns None for every other word
    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "sin" => Some(Self::Sin),
            "cos" => Some(Self::Cos),
            "tan" => Some(Self::Tan),
            "log" => Some(Self::Log),
            "ln" => Some(Self::Ln),
            "exp" => Some(Self::Exp),
            "sqrt" => Some(Self::Sqrt),
            "abs" => Some(Self::Abs),
            "floor" => Some(Self::Floor),
            "ceil" => Some(Self::Ceil),
            "round" => Some(Self::Round),
            _ => None,
        }
    }

    /// Check if this function is trigonometric
    pub const fn is_trigonometric(self) -> bool {
        matches!(self, Self::Sin | Self::Cos | Self::Tan)
    }

    /// Check if this function is logarithmic or exponential
    pub const fn is_logarithmic(self) -> bool {
        matches!(self, Self::Log | Self::Ln | Self::Exp)
    }

    /// Check if this function rounds its argument
    pub const fn is_rounding(self) -> bool {
        matches!(self, Self::Floor | Self::Ceil | Self::Round)
    }
}

impl std::fmt::Display for MathFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The complete function vocabulary, in display order
pub fn function_names() -> &'static [&'static str] {
    &[
        // Trigonometric
        "sin",
        "cos",
        "tan",
        // Logarithmic / exponential
        "log",
        "ln",
        "exp",
        // Magnitude
        "sqrt",
        "abs",
        // Rounding
        "floor",
        "ceil",
        "round",
    ]
}

/// Check if a word is a recognized function name
pub fn is_function_name(s: &str) -> bool {
    MathFunction::from_name(s).is_some()
}
