pub mod patch;
pub mod report;

pub use patch::PatchError;
pub use report::ReportError;

/// Broad classification used when logging a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Database,
    FileSystem,
    Encoding,
    Configuration,
}

/// Common trait for all custom error types in the crate
pub trait AppError: std::error::Error + Send + Sync + 'static {
    /// Get the machine-readable error code
    fn error_code(&self) -> &'static str;

    /// Get the error category for logging
    fn error_category(&self) -> ErrorCategory;

    /// Get optional suggested action for the operator
    fn suggested_action(&self) -> Option<String> {
        None
    }
}
