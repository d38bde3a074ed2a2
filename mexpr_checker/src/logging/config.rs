//! Configuration module for logging - using compile-time constants
//!
//! This module provides access to compile-time limits and runtime user
//! preferences. Limits are fixed at build time and cannot be changed at
//! runtime.

use crate::config::compile_time::logging::*;
use crate::config::runtime::LoggingPreferences;
use std::sync::OnceLock;

// Type aliases for clarity
type EventsLogLevel = crate::logging::events::LogLevel;
type RuntimeLogLevel = crate::config::runtime::LogLevel;

// ============================================================================
// RUNTIME PREFERENCES STORAGE
// ============================================================================

static RUNTIME_PREFERENCES: OnceLock<LoggingPreferences> = OnceLock::new();

/// Initialize runtime preferences
pub fn init_runtime_preferences(preferences: LoggingPreferences) -> Result<(), String> {
    validate_preferences(&preferences)?;

    RUNTIME_PREFERENCES
        .set(preferences)
        .map_err(|_| "Runtime preferences already initialized")?;

    Ok(())
}

/// Get runtime preferences (with fallback to defaults)
fn get_runtime_preferences() -> LoggingPreferences {
    RUNTIME_PREFERENCES.get().cloned().unwrap_or_default()
}

/// Validate runtime preferences
fn validate_preferences(preferences: &LoggingPreferences) -> Result<(), String> {
    // A service with no output sink would swallow every diagnostic
    if !preferences.use_structured_logging && !preferences.enable_console_logging {
        return Err("At least one logging output must be enabled".to_string());
    }

    Ok(())
}

// ============================================================================
// CONFIGURATION ACCESS FUNCTIONS
// ============================================================================

/// Get minimum log level (user preference)
pub fn get_min_log_level() -> EventsLogLevel {
    get_runtime_preferences().min_log_level.to_events_log_level()
}

/// Check if structured logging is enabled (user preference)
pub fn use_structured_logging() -> bool {
    get_runtime_preferences().use_structured_logging
}

/// Check if console logging is enabled (user preference)
pub fn use_console_logging() -> bool {
    get_runtime_preferences().enable_console_logging
}

/// Check if performance events should be logged (user preference)
pub fn log_performance_events() -> bool {
    get_runtime_preferences().log_performance_events
}

/// Get error buffer size (compile-time constant)
pub fn get_error_buffer_size() -> usize {
    DEFAULT_ERROR_BUFFER_SIZE
}

/// Get maximum log message length (compile-time constant)
pub fn get_max_log_message_length() -> usize {
    MAX_LOG_MESSAGE_LENGTH
}

// ============================================================================
// CONFIGURATION VALIDATION
// ============================================================================

/// Validate current configuration settings
pub fn validate_config() -> Result<(), String> {
    // Validate compile-time constants are reasonable
    if DEFAULT_ERROR_BUFFER_SIZE > 100_000 {
        return Err(format!(
            "Log buffer size too large: {}",
            DEFAULT_ERROR_BUFFER_SIZE
        ));
    }

    if DEFAULT_ERROR_BUFFER_SIZE < 100 {
        return Err(format!(
            "Log buffer size too small: {}",
            DEFAULT_ERROR_BUFFER_SIZE
        ));
    }

    if MAX_LOG_MESSAGE_LENGTH < 64 {
        return Err(format!(
            "Max log message length too small: {}",
            MAX_LOG_MESSAGE_LENGTH
        ));
    }

    // Validate runtime preferences if set
    if let Some(preferences) = RUNTIME_PREFERENCES.get() {
        validate_preferences(preferences)?;
    }

    Ok(())
}

/// Get configuration summary for diagnostics
pub fn get_config_summary() -> String {
    let preferences = get_runtime_preferences();

    format!(
        "Logging Configuration:\n\
         === Compile-time Limits ===\n\
         - Error buffer size: {}\n\
         - Max message length: {}\n\
         === User Preferences (Runtime) ===\n\
         - Min log level: {:?}\n\
         - Structured logging: {}\n\
         - Console logging: {}\n\
         - Performance events: {}",
        DEFAULT_ERROR_BUFFER_SIZE,
        MAX_LOG_MESSAGE_LENGTH,
        preferences.min_log_level,
        preferences.use_structured_logging,
        preferences.enable_console_logging,
        preferences.log_performance_events,
    )
}

/// Get recommended configuration for development
pub fn get_development_preferences() -> LoggingPreferences {
    LoggingPreferences {
        use_structured_logging: false,
        enable_console_logging: true,
        min_log_level: RuntimeLogLevel::Debug,
        log_performance_events: true,
    }
}

/// Get recommended configuration for production
pub fn get_production_preferences() -> LoggingPreferences {
    LoggingPreferences {
        use_structured_logging: true,
        enable_console_logging: false,
        min_log_level: RuntimeLogLevel::Info,
        log_performance_events: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_validation() {
        assert!(validate_config().is_ok());
    }

    #[test]
    fn test_compile_time_constants() {
        assert!(DEFAULT_ERROR_BUFFER_SIZE >= 100);
        assert!(MAX_LOG_MESSAGE_LENGTH >= 64);
    }

    #[test]
    fn test_preference_validation_rejects_sinkless_setup() {
        let silent = LoggingPreferences {
            use_structured_logging: false,
            enable_console_logging: false,
            min_log_level: RuntimeLogLevel::Info,
            log_performance_events: false,
        };

        assert!(validate_preferences(&silent).is_err());
    }

    #[test]
    fn test_recommended_preferences_are_valid() {
        assert!(validate_preferences(&get_development_preferences()).is_ok());
        assert!(validate_preferences(&get_production_preferences()).is_ok());
    }

    #[test]
    fn test_recommended_preference_levels() {
        assert_eq!(
            get_development_preferences().min_log_level,
            RuntimeLogLevel::Debug
        );
        assert_eq!(
            get_production_preferences().min_log_level,
            RuntimeLogLevel::Info
        );
        assert!(get_production_preferences().use_structured_logging);
    }

    #[test]
    fn test_config_summary_names_active_limits() {
        let summary = get_config_summary();
        assert!(summary.contains("Error buffer size"));
        assert!(summary.contains(&DEFAULT_ERROR_BUFFER_SIZE.to_string()));
    }
}
