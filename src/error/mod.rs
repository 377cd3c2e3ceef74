//! Error handling for tcpping

use thiserror::Error;

/// Custom error types for tcpping
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Hostname resolution errors
    #[error("Resolution error: {0}")]
    Resolve(String),

    /// Local socket resource errors (socket creation failed)
    #[error("Socket error: {0}")]
    Socket(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Parsing errors (addresses, JSON, etc.)
    #[error("Parsing error: {0}")]
    Parse(String),

    /// Generic internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    /// Create a new resolution error
    pub fn resolve<S: Into<String>>(message: S) -> Self {
        Self::Resolve(message.into())
    }

    /// Create a new socket error
    pub fn socket<S: Into<String>>(message: S) -> Self {
        Self::Socket(message.into())
    }

    /// Create a new I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io(message.into())
    }

    /// Create a new parsing error
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse(message.into())
    }

    /// Create a new internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    /// Get error category for logging and reporting
    pub fn category(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG",
            Self::Validation(_) => "VALIDATION",
            Self::Resolve(_) => "RESOLVE",
            Self::Socket(_) => "SOCKET",
            Self::Io(_) => "IO",
            Self::Parse(_) => "PARSE",
            Self::Internal(_) => "INTERNAL",
        }
    }

    /// Check if error is recoverable (can retry)
    ///
    /// Probe timeouts and connect failures are not errors at all (they are
    /// probe outcomes); anything that reaches this type ends the run.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Resolve(_) => true,
            Self::Config(_) | Self::Validation(_) | Self::Parse(_) => false,
            Self::Socket(_) | Self::Io(_) | Self::Internal(_) => false,
        }
    }

    /// Get exit code for this error type
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::Validation(_) | Self::Parse(_) => 1, // Invalid configuration/usage
            Self::Resolve(_) => 2,  // Name resolution issues
            Self::Socket(_) => 5,   // Local socket resource exhaustion
            Self::Io(_) => 6,       // I/O issues
            Self::Internal(_) => 99, // Internal/unexpected errors
        }
    }

    /// Format error for console display with color coding
    pub fn format_for_console(&self, use_color: bool) -> String {
        let category = self.category();
        let message = self.to_string();

        if use_color {
            use colored::Colorize;
            match self {
                Self::Config(_) | Self::Validation(_) | Self::Parse(_) => {
                    format!("[{}] {}", category.red().bold(), message.red())
                }
                Self::Resolve(_) => {
                    format!("[{}] {}", category.yellow().bold(), message.yellow())
                }
                Self::Socket(_) | Self::Io(_) => {
                    format!("[{}] {}", category.cyan().bold(), message.cyan())
                }
                Self::Internal(_) => {
                    format!("[{}] {}", category.bright_red().bold(), message.bright_red())
                }
            }
        } else {
            format!("[{}] {}", category, message)
        }
    }
}

// Standard library error conversions
impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::io(error.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::parse(format!("JSON error: {}", error))
    }
}

impl From<std::net::AddrParseError> for AppError {
    fn from(error: std::net::AddrParseError) -> Self {
        Self::parse(format!("IP address parse error: {}", error))
    }
}

// Anyhow integration
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::internal(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_constructors() {
        let err = AppError::config("bad port");
        assert_eq!(err.category(), "CONFIG");
        assert_eq!(err.to_string(), "Configuration error: bad port");
    }

    #[test]
    fn test_exit_codes_distinct_by_class() {
        // A fatal socket error must not share an exit code with usage errors.
        assert_ne!(
            AppError::socket("out of descriptors").exit_code(),
            AppError::validation("bad flag").exit_code()
        );
        assert_eq!(AppError::validation("bad flag").exit_code(), 1);
        assert_eq!(AppError::resolve("no such host").exit_code(), 2);
        assert_eq!(AppError::socket("out of descriptors").exit_code(), 5);
    }

    #[test]
    fn test_recoverability() {
        assert!(AppError::resolve("transient").is_recoverable());
        assert!(!AppError::socket("fatal").is_recoverable());
        assert!(!AppError::config("fatal").is_recoverable());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: AppError = io_err.into();
        assert_eq!(err.category(), "IO");
    }

    #[test]
    fn test_anyhow_integration() {
        let anyhow_error = anyhow::anyhow!("wrapped failure");
        let app_error: AppError = anyhow_error.into();
        assert_eq!(app_error.category(), "INTERNAL");

        // Conversion back to anyhow is automatic via std::error::Error
        let app_error = AppError::config("bad knob");
        let anyhow_error = anyhow::anyhow!(app_error);
        assert!(anyhow_error.to_string().contains("Configuration error"));
    }

    #[test]
    fn test_console_format_plain() {
        let err = AppError::resolve("lookup failed");
        let plain = err.format_for_console(false);
        assert!(plain.starts_with("[RESOLVE]"));
        assert!(plain.contains("lookup failed"));
    }
}
