//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map ClientError variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-6 are reserved for specific error categories.

use grafana_client::ClientError;

/// Structured exit codes for grafana-import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - dashboard imported.
    Success = 0,

    /// General error - configuration problems or unclassified failures.
    GeneralError = 1,

    /// Authentication failure - Grafana rejected the credentials (HTTP 401).
    AuthenticationFailed = 2,

    /// Connection error - network failure, or Grafana never became ready.
    ConnectionError = 3,

    /// Not found - missing dashboard file or HTTP 404.
    NotFound = 4,

    /// Validation error - dashboard file is not JSON, or HTTP 400.
    ValidationError = 5,

    /// Permission denied - HTTP 403.
    PermissionDenied = 6,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::AuthFailed(_) => ExitCode::AuthenticationFailed,
            ClientError::ApiError { status: 401, .. } => ExitCode::AuthenticationFailed,

            ClientError::Timeout(_) => ExitCode::ConnectionError,
            ClientError::InvalidUrl(_) => ExitCode::ConnectionError,

            ClientError::ApiError { status: 404, .. } => ExitCode::NotFound,
            ClientError::DashboardRead { source, .. }
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                ExitCode::NotFound
            }

            ClientError::ApiError { status: 400, .. } => ExitCode::ValidationError,
            ClientError::InvalidDashboard(_) => ExitCode::ValidationError,

            ClientError::ApiError { status: 403, .. } => ExitCode::PermissionDenied,

            ClientError::HttpError(e) => {
                if e.is_connect() || e.is_timeout() {
                    ExitCode::ConnectionError
                } else {
                    ExitCode::GeneralError
                }
            }

            ClientError::ApiError { .. } => ExitCode::GeneralError,
            ClientError::DashboardRead { .. } => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no ClientError is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.chain()
            .find_map(|cause| cause.downcast_ref::<ClientError>())
            .map(ExitCode::from)
            .unwrap_or(ExitCode::GeneralError)
    }
}
