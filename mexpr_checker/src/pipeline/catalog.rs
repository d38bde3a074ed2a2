//! Built-in demonstration expressions
//!
//! A small catalog covering the accepted grammar and the common rejection
//! shapes. The CLI prints these with their verdicts so users can see what
//! the checker accepts without writing a file first.

/// One demonstration expression with its expected verdict
#[derive(Debug, Clone, Copy)]
pub struct ExampleExpression {
    pub text: &'static str,
    pub expect_valid: bool,
}

/// The demonstration catalog, valid expressions first
pub fn example_expressions() -> &'static [ExampleExpression] {
    &[
        ExampleExpression {
            text: "2 + 3 * 4",
            expect_valid: true,
        },
        ExampleExpression {
            text: "sin(x) + cos(y)",
            expect_valid: true,
        },
        ExampleExpression {
            text: "(a + b) * (c - d)",
            expect_valid: true,
        },
        ExampleExpression {
            text: "sqrt(x^2 + y^2)",
            expect_valid: true,
        },
        ExampleExpression {
            text: "2x + 3(y - z)",
            expect_valid: true,
        },
        ExampleExpression {
            text: "log(10) + exp(-x^2) / (1 + x^2)",
            expect_valid: true,
        },
        ExampleExpression {
            text: "2 +",
            expect_valid: false,
        },
        ExampleExpression {
            text: "* 2 + 3",
            expect_valid: false,
        },
        ExampleExpression {
            text: "2..5",
            expect_valid: false,
        },
        ExampleExpression {
            text: "(2 + 3",
            expect_valid: false,
        },
        ExampleExpression {
            text: "sin 2",
            expect_valid: false,
        },
        ExampleExpression {
            text: "sqrt(x^2 + y^2",
            expect_valid: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::check_expression;

    #[test]
    fn test_catalog_verdicts_match_expectations() {
        for example in example_expressions() {
            let verdict = check_expression(example.text);
            assert_eq!(
                verdict.is_valid(),
                example.expect_valid,
                "'{}' expected valid={}, got message: {}",
                example.text,
                example.expect_valid,
                verdict.message
            );
        }
    }

    #[test]
    fn test_catalog_covers_both_outcomes() {
        let examples = example_expressions();
        assert!(examples.iter().any(|example| example.expect_valid));
        assert!(examples.iter().any(|example| !example.expect_valid));
    }
}
