use mexpr_checker::config::runtime::RuntimeConfig;
use mexpr_checker::{grammar, logging, pipeline};
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Runtime preferences must be installed before the logging service
    // snapshots them
    let runtime = RuntimeConfig::from_environment();
    logging::config::init_runtime_preferences(runtime.logging)?;

    // Initialize global logging system
    logging::init_global_logging()?;

    // Validate pipeline configuration
    pipeline::validate_pipeline()?;

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <expression> [--json]", args[0]);
        eprintln!("       {} --file <path> [--json]", args[0]);
        eprintln!("       {} --help", args[0]);
        std::process::exit(1);
    }

    let options = parse_cli_options(&args[1..]);

    if options.show_help {
        print_help(&args[0]);
        return Ok(());
    }

    if options.show_examples {
        run_examples(options.json_output);
        return Ok(());
    }

    if let Some(ref path) = options.file_path {
        check_file_command(path, options.json_output);
        return Ok(());
    }

    match options.expression {
        Some(ref expression) => check_expression_command(expression, options.json_output),
        None => {
            eprintln!("Error: Nothing to check");
            eprintln!("       Run {} --help for usage", args[0]);
            std::process::exit(1);
        }
    }

    Ok(())
}

#[derive(Debug, Default)]
struct CliOptions {
    expression: Option<String>,
    file_path: Option<String>,
    show_examples: bool,
    json_output: bool,
    show_help: bool,
}

fn parse_cli_options(args: &[String]) -> CliOptions {
    let mut options = CliOptions::default();
    let mut expression_parts: Vec<String> = Vec::new();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--help" => {
                options.show_help = true;
            }
            "--json" => {
                options.json_output = true;
            }
            "--examples" => {
                options.show_examples = true;
            }
            "--file" => {
                if i + 1 < args.len() {
                    options.file_path = Some(args[i + 1].clone());
                    i += 1; // Skip the path argument
                } else {
                    eprintln!("Warning: --file requires a path");
                }
            }
            other if other.starts_with("--") => {
                eprintln!("Warning: Unknown option '{}'", other);
            }
            // Everything else is expression text; loose arguments are
            // joined so unquoted input like `2 + 3` still works
            other => {
                expression_parts.push(other.to_string());
            }
        }
        i += 1;
    }

    if !expression_parts.is_empty() {
        options.expression = Some(expression_parts.join(" "));
    }

    options
}

fn print_help(program_name: &str) {
    println!(
        "Math Expression Syntax Checker v{}",
        env!("CARGO_PKG_VERSION")
    );
    println!("Validates expression syntax without evaluating anything");
    println!();
    println!("USAGE:");
    println!(
        "    {} <expression>           # Check a single expression",
        program_name
    );
    println!(
        "    {} --file <path>          # Check every line of a file",
        program_name
    );
    println!(
        "    {} --examples             # Check the built-in example set",
        program_name
    );
    println!();
    println!("ARGUMENTS:");
    println!("    <expression>   Expression text; loose arguments are joined with spaces");
    println!();
    println!("OPTIONS:");
    println!("    --help              Show this help message");
    println!("    --file <path>       Read expressions line by line from a file");
    println!("    --examples          Check the built-in example expressions");
    println!("    --json              Emit results as pretty-printed JSON");
    println!();
    println!("OUTPUT:");
    println!("    Valid input: confirmation message, exit code 0");
    println!("    Invalid input: the first violation with its position, exit code 1");
    println!("    File mode: per-line results plus a summary; exit code 1 if any line fails");
    println!();
    println!("EXAMPLES:");
    println!(
        "    {} \"2 + 3 * 4\"                    # Quoted expression",
        program_name
    );
    println!(
        "    {} \"sin(x) + cos(y)\" --json       # JSON verdict",
        program_name
    );
    println!(
        "    {} --file expressions.txt         # One expression per line",
        program_name
    );
    println!(
        "    {} --examples                     # Built-in demonstration set",
        program_name
    );
    println!();

    // Print the recognized grammar
    println!("GRAMMAR:");
    println!("    Operators: + - * / ^");
    println!("    Brackets:  () [] {{}}  in any properly nested mix");
    println!("    Functions: {}", grammar::function_names().join(", "));
    println!("    Implicit multiplication: 2x, 3(y - z), (a + b)(c - d)");
}

fn check_expression_command(expression: &str, json_output: bool) {
    let verdict = pipeline::check_expression(expression);

    if json_output {
        print_json(&verdict);
    } else if verdict.is_valid() {
        println!("VALID: {}", expression);
    } else {
        println!("INVALID: {}", expression);
        println!("  {}", verdict.message);
    }

    if !verdict.is_valid() {
        std::process::exit(1);
    }
}

fn check_file_command(file_path: &str, json_output: bool) {
    match pipeline::check_file(file_path) {
        Ok(report) => {
            if json_output {
                print_json(&report);
            } else {
                print_file_report(&report);
            }

            // Exit with error code if any expression failed
            if report.has_failures() {
                std::process::exit(1);
            }
        }
        Err(error) => {
            eprintln!("FAILED: {}", error);
            std::process::exit(1);
        }
    }
}

fn print_file_report(report: &pipeline::FileReport) {
    println!("File Check Summary: {}", report.file);
    println!("  Expressions checked: {}", report.expressions_checked);
    println!(
        "  Valid: {} ({:.1}%)",
        report.valid_count,
        report.success_rate() * 100.0
    );
    println!("  Invalid: {}", report.invalid_count);
    println!("  Total time: {} ms", report.duration_ms);

    if report.invalid_count > 0 {
        println!("\nInvalid Expressions:");
        for result in report.results.iter().filter(|result| !result.valid) {
            println!("  line {}: {}", result.line, result.expression);
            println!("    {}", result.message);
        }
    }
}

fn run_examples(json_output: bool) {
    let examples = pipeline::example_expressions();

    if json_output {
        let reports: Vec<ExampleReport> = examples
            .iter()
            .map(|example| ExampleReport {
                expression: example.text,
                expected_valid: example.expect_valid,
                verdict: pipeline::check_expression(example.text),
            })
            .collect();
        print_json(&reports);
        return;
    }

    println!("Example Expressions:");
    let mut valid_count = 0;
    for example in examples {
        let verdict = pipeline::check_expression(example.text);
        if verdict.is_valid() {
            valid_count += 1;
            println!("  VALID    {}", example.text);
        } else {
            println!("  INVALID  {}", example.text);
            println!("           {}", verdict.message);
        }
    }
    println!();
    println!("{} of {} examples valid", valid_count, examples.len());
}

#[derive(serde::Serialize)]
struct ExampleReport {
    expression: &'static str,
    expected_valid: bool,
    verdict: pipeline::Verdict,
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(rendered) => println!("{}", rendered),
        Err(error) => {
            eprintln!("Error: Failed to render JSON output: {}", error);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cli_options_expression_joined() {
        let args = vec!["2".to_string(), "+".to_string(), "3".to_string()];

        let options = parse_cli_options(&args);
        assert_eq!(options.expression.as_deref(), Some("2 + 3"));
        assert!(!options.json_output);
        assert!(options.file_path.is_none());
    }

    #[test]
    fn test_parse_cli_options_file_and_json() {
        let args = vec![
            "--file".to_string(),
            "expressions.txt".to_string(),
            "--json".to_string(),
        ];

        let options = parse_cli_options(&args);
        assert_eq!(options.file_path.as_deref(), Some("expressions.txt"));
        assert!(options.json_output);
        assert!(options.expression.is_none());
    }

    #[test]
    fn test_parse_cli_options_negative_term_is_expression() {
        let args = vec!["-x".to_string(), "+".to_string(), "2".to_string()];

        let options = parse_cli_options(&args);
        assert_eq!(options.expression.as_deref(), Some("-x + 2"));
    }

    #[test]
    fn test_parse_cli_options_unknown_flag_skipped() {
        let args = vec!["--frobnicate".to_string(), "x".to_string()];

        let options = parse_cli_options(&args);
        assert_eq!(options.expression.as_deref(), Some("x"));
        assert!(!options.show_help);
    }

    #[test]
    fn test_parse_cli_options_examples_mode() {
        let args = vec!["--examples".to_string()];

        let options = parse_cli_options(&args);
        assert!(options.show_examples);
        assert!(options.expression.is_none());
    }

    #[test]
    fn test_parse_cli_options_file_without_path() {
        let args = vec!["--file".to_string()];

        let options = parse_cli_options(&args);
        assert!(options.file_path.is_none());
        assert!(options.expression.is_none());
    }
}
