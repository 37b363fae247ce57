//! Errors raised by the export flow.

use std::path::PathBuf;

use thiserror::Error;

use super::{ApiError, ErrorCategory};

#[derive(Debug, Error)]
pub enum ExportError {
    /// Both selection sets were empty. Rejected before any request is made.
    #[error("Please select at least one dashboard or alert to export")]
    NothingSelected,

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Failed to save {}: {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ExportError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ExportError::NothingSelected => ErrorCategory::User,
            ExportError::Api(err) => err.category(),
            ExportError::Save { .. } => ErrorCategory::System,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            ExportError::NothingSelected => self.to_string(),
            ExportError::Api(err) => format!("Export failed: {}", err.detail()),
            ExportError::Save { .. } => format!("Export failed: {}", self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nothing_selected_is_user_error() {
        let err = ExportError::NothingSelected;
        assert_eq!(err.category(), ErrorCategory::User);
        assert!(err.user_message().contains("select at least one"));
    }

    #[test]
    fn test_api_error_keeps_category() {
        let err: ExportError = ApiError::status("/api/export", 400, b"bad uid").into();
        assert_eq!(err.category(), ErrorCategory::Network);
        assert_eq!(err.user_message(), "Export failed: HTTP 400: bad uid");
    }

    #[test]
    fn test_save_is_system_error() {
        let err = ExportError::Save {
            path: PathBuf::from("/nope/export.zip"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.category(), ErrorCategory::System);
        assert!(err.user_message().contains("/nope/export.zip"));
    }
}
