// build.rs - TOML-driven compile-time constant generation
use std::env;
use std::fs;
use std::path::Path;

#[derive(serde::Deserialize)]
struct CompileTimeConfig {
    lexical: LexicalLimits,
    validator: ValidatorLimits,
    file_processor: FileProcessorLimits,
    logging: LoggingLimits,
}

#[derive(serde::Deserialize)]
struct LexicalLimits {
    max_token_preview_length: usize,
}

#[derive(serde::Deserialize)]
struct ValidatorLimits {
    bracket_depth_warn_threshold: usize,
}

#[derive(serde::Deserialize)]
struct FileProcessorLimits {
    max_file_size: u64,
}

#[derive(serde::Deserialize)]
struct LoggingLimits {
    error_buffer_size: usize,
    max_log_message_length: usize,
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=MEXPR_BUILD_PROFILE");
    println!("cargo:rerun-if-env-changed=MEXPR_CONFIG_DIR");

    let profile = env::var("MEXPR_BUILD_PROFILE").unwrap_or_else(|_| "development".to_string());
    let config_dir = env::var("MEXPR_CONFIG_DIR").unwrap_or_else(|_| "config".to_string());

    // Find workspace root (parent of mexpr_checker directory)
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let workspace_root = Path::new(&manifest_dir)
        .parent()
        .expect("Could not find workspace root (parent directory)");

    // Build config path relative to workspace root
    let config_path = workspace_root
        .join(&config_dir)
        .join(format!("{}.toml", profile));

    println!("cargo:rerun-if-changed={}", config_path.display());

    if !config_path.exists() {
        panic!(
            "Configuration file not found: {}\nWorkspace root: {}\nLooking for: {}/{}/{}.toml",
            config_path.display(),
            workspace_root.display(),
            workspace_root.display(),
            config_dir,
            profile
        );
    }

    let config_content = fs::read_to_string(&config_path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", config_path.display(), e));

    let config: CompileTimeConfig = toml::from_str(&config_content)
        .unwrap_or_else(|e| panic!("Invalid TOML in {}: {}", config_path.display(), e));

    validate_constraints(&config, &profile);
    generate_constants(&config, &profile);

    println!(
        "cargo:warning=Generated constants from {}",
        config_path.display()
    );
}

fn validate_constraints(config: &CompileTimeConfig, profile: &str) {
    const ABSOLUTE_MAX_FILE_SIZE: u64 = 100_000_000;
    const ABSOLUTE_MAX_BUFFER_SIZE: usize = 100_000;

    if config.file_processor.max_file_size == 0 {
        panic!("max_file_size must be nonzero");
    }

    if config.file_processor.max_file_size > ABSOLUTE_MAX_FILE_SIZE {
        panic!("max_file_size exceeds absolute maximum ({} bytes)", ABSOLUTE_MAX_FILE_SIZE);
    }

    if config.logging.error_buffer_size == 0 || config.logging.error_buffer_size > ABSOLUTE_MAX_BUFFER_SIZE {
        panic!("error_buffer_size out of range (1..={})", ABSOLUTE_MAX_BUFFER_SIZE);
    }

    if config.logging.max_log_message_length < 64 {
        panic!("max_log_message_length too small to hold a diagnostic (min: 64)");
    }

    if config.lexical.max_token_preview_length == 0 {
        panic!("max_token_preview_length must be nonzero");
    }

    if config.validator.bracket_depth_warn_threshold == 0 {
        panic!("bracket_depth_warn_threshold must be nonzero");
    }

    if profile == "production" {
        if config.file_processor.max_file_size > 10_000_000 {
            panic!("PRODUCTION: max_file_size too high for production");
        }
        if config.logging.error_buffer_size > 10_000 {
            panic!("PRODUCTION: error_buffer_size too high for production");
        }
    }
}

fn generate_constants(config: &CompileTimeConfig, profile: &str) {
    let out_dir = env::var("OUT_DIR").unwrap();
    let output_path = Path::new(&out_dir).join("constants.rs");

    let constants_code = format!(
        r#"
// Generated compile-time constants from TOML configuration
// Profile: {}
// DO NOT EDIT - Generated by build.rs

pub mod compile_time {{
    pub mod lexical {{
        pub const MAX_TOKEN_PREVIEW_LENGTH: usize = {};
    }}

    pub mod validator {{
        pub const BRACKET_DEPTH_WARN_THRESHOLD: usize = {};
    }}

    pub mod file_processor {{
        pub const MAX_FILE_SIZE: u64 = {};
    }}

    pub mod logging {{
        pub const DEFAULT_ERROR_BUFFER_SIZE: usize = {};
        pub const MAX_LOG_MESSAGE_LENGTH: usize = {};
    }}
}}
"#,
        profile,
        // Lexical
        config.lexical.max_token_preview_length,
        // Validator
        config.validator.bracket_depth_warn_threshold,
        // File processor
        config.file_processor.max_file_size,
        // Logging
        config.logging.error_buffer_size,
        config.logging.max_log_message_length,
    );

    fs::write(output_path, constants_code).unwrap();
}
