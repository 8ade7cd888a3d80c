use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Scripts can tell a bad invocation apart from a failed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Store written (and graph rendered when requested)
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (missing manifest, store failure, render failure, ...)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for dependency graph generation.
///
/// Display strings are user-facing and end with a hint where one helps.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("Manifest file not found: {path}\n\n💡 Hint: {suggestion}")]
    ManifestNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse {file}\nDetails: {details}\n\n💡 Hint: Please verify that the file is valid npm manifest JSON")]
    ManifestParseError { file: String, details: String },

    #[error("Dependency store operation failed: {operation}\nDetails: {details}")]
    StoreError { operation: String, details: String },

    #[error("Failed to render {format} graph\nDetails: {details}\n\n💡 Hint: Check that Graphviz is installed and `dot` is on your PATH, or use --format dot")]
    RenderError { format: String, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid project path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a directory containing package.json and package-lock.json")]
    InvalidProjectPath { path: PathBuf, reason: String },

    /// Validation error for configuration and domain values
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

impl GraphError {
    /// Wraps a storage engine failure, naming the operation that failed.
    pub fn store(operation: impl Into<String>, err: impl fmt::Display) -> Self {
        GraphError::StoreError {
            operation: operation.into(),
            details: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::InvalidArguments),
            "Invalid Arguments (2)"
        );
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_manifest_not_found_display() {
        let error = GraphError::ManifestNotFound {
            path: PathBuf::from("/project/package-lock.json"),
            suggestion: "Run npm install first".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Manifest file not found"));
        assert!(display.contains("/project/package-lock.json"));
        assert!(display.contains("💡 Hint:"));
        assert!(display.contains("Run npm install first"));
    }

    #[test]
    fn test_manifest_parse_error_display() {
        let error = GraphError::ManifestParseError {
            file: "package.json".to_string(),
            details: "expected value at line 1 column 1".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to parse package.json"));
        assert!(display.contains("expected value"));
    }

    #[test]
    fn test_store_error_helper() {
        let error = GraphError::store("insert package", "disk I/O error");
        let display = format!("{}", error);
        assert!(display.contains("insert package"));
        assert!(display.contains("disk I/O error"));
    }

    #[test]
    fn test_render_error_display() {
        let error = GraphError::RenderError {
            format: "svg".to_string(),
            details: "dot exited with status 1".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to render svg graph"));
        assert!(display.contains("dot exited with status 1"));
        assert!(display.contains("--format dot"));
    }

    #[test]
    fn test_invalid_project_path_display() {
        let error = GraphError::InvalidProjectPath {
            path: PathBuf::from("/invalid/path"),
            reason: "Directory does not exist".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Invalid project path"));
        assert!(display.contains("/invalid/path"));
        assert!(display.contains("Directory does not exist"));
    }

    #[test]
    fn test_security_error_display() {
        let error = GraphError::SecurityError {
            path: PathBuf::from("/test/symlink"),
            reason: "Symbolic links are not allowed".to_string(),
            hint: "Use a regular file instead".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Security violation"));
        assert!(display.contains("/test/symlink"));
        assert!(display.contains("Use a regular file instead"));
    }
}
