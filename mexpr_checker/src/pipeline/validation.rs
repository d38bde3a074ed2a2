/// Validate that the pipeline is properly configured
pub fn validate_pipeline() -> Result<(), String> {
    crate::log_debug!("Validating expression checking pipeline configuration");

    // Validate lexical analyzer integration
    crate::lexical::init_lexical_logging()?;

    // Validate syntax validator integration
    crate::syntax::init_syntax_logging()?;

    // Validate file processing codes
    let file_codes = [
        crate::logging::codes::file_processing::FILE_NOT_FOUND,
        crate::logging::codes::file_processing::NOT_A_FILE,
        crate::logging::codes::file_processing::FILE_TOO_LARGE,
        crate::logging::codes::file_processing::IO_ERROR,
    ];
    for code in &file_codes {
        if crate::logging::codes::get_error_metadata(code.as_str()).is_none() {
            return Err(format!(
                "File processing code {} not found in metadata registry",
                code.as_str()
            ));
        }
    }

    crate::log_debug!("Logging sinks configured",
        "structured" => crate::logging::config::use_structured_logging(),
        "console" => crate::logging::config::use_console_logging()
    );

    crate::log_success!(
        crate::logging::codes::success::SYSTEM_INITIALIZATION_COMPLETED,
        "Complete pipeline validation succeeded",
        "stages_validated" => 3,
        "lexical_analysis" => true,
        "syntax_validation" => true,
        "file_processing" => true,
        "build_profile" => crate::config::build_info::profile()
    );

    Ok(())
}
