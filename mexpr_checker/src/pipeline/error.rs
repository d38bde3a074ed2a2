use crate::logging::codes;

/// Pipeline processing errors
///
/// Grammar problems never appear here: a lexical or syntax rejection becomes
/// an invalid verdict for that line. These errors are the file-level failures
/// that prevent producing any verdicts at all.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Not a regular file: {path}")]
    NotAFile { path: String },

    #[error("File too large: {size} bytes (max: {max_size})")]
    FileTooLarge { size: u64, max_size: u64 },

    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Pipeline error: {message}")]
    Pipeline { message: String },
}

impl PipelineError {
    pub fn pipeline_error(message: &str) -> Self {
        Self::Pipeline {
            message: message.to_string(),
        }
    }

    /// Get the appropriate error code for this error type
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            PipelineError::FileNotFound { .. } => codes::file_processing::FILE_NOT_FOUND,
            PipelineError::NotAFile { .. } => codes::file_processing::NOT_A_FILE,
            PipelineError::FileTooLarge { .. } => codes::file_processing::FILE_TOO_LARGE,
            PipelineError::Io(_) => codes::file_processing::IO_ERROR,
            PipelineError::Pipeline { .. } => codes::system::PIPELINE_VALIDATION_FAILURE,
        }
    }

    /// Check if this error should halt processing
    pub fn requires_halt(&self) -> bool {
        codes::requires_halt(self.error_code().as_str())
    }

    /// Get error severity
    pub fn severity(&self) -> &'static str {
        codes::get_severity(self.error_code().as_str()).as_str()
    }

    /// Get error category
    pub fn category(&self) -> &'static str {
        codes::get_category(self.error_code().as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_mapping() {
        let error = PipelineError::FileNotFound {
            path: "missing.txt".to_string(),
        };
        assert_eq!(error.error_code().as_str(), "E005");
        assert_eq!(error.to_string(), "File not found: missing.txt");

        let error = PipelineError::FileTooLarge {
            size: 2_000_000,
            max_size: 1_048_576,
        };
        assert_eq!(error.error_code().as_str(), "E007");

        let error = PipelineError::pipeline_error("registry incomplete");
        assert_eq!(error.error_code().as_str(), "ERR003");
        assert_eq!(error.to_string(), "Pipeline error: registry incomplete");
    }

    #[test]
    fn test_io_errors_convert() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error = PipelineError::from(io_error);
        assert_eq!(error.error_code().as_str(), "E008");
        assert!(error.to_string().starts_with("Failed to read file:"));
    }

    #[test]
    fn test_file_errors_halt_processing() {
        let error = PipelineError::NotAFile {
            path: "/tmp".to_string(),
        };
        assert!(error.requires_halt());
        assert_eq!(error.category(), "FileProcessing");
        assert_eq!(error.severity(), "Medium");
    }
}
