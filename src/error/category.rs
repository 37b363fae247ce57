//! Error category classification for unified error handling.

use std::fmt;

/// High-level categorization of errors for handling decisions.
///
/// No category is retried automatically and none is fatal to the process;
/// the category drives the notification level and the hint shown next to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Transport failure or a non-2xx status from the backend.
    Network,

    /// A body that could not be decoded into the expected shape.
    MalformedResponse,

    /// The operator asked for something that cannot be done yet
    /// (export with nothing selected).
    User,

    /// Local OS errors (saving the archive).
    System,
}

impl ErrorCategory {
    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::MalformedResponse => "malformed_response",
            ErrorCategory::User => "user",
            ErrorCategory::System => "system",
        }
    }

    /// Returns a user-friendly description of the category.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "Backend unreachable or request rejected",
            ErrorCategory::MalformedResponse => "Unexpected response from the backend",
            ErrorCategory::User => "User action required",
            ErrorCategory::System => "System error",
        }
    }

    /// Returns suggested recovery actions for this category.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "Check that the exporter backend is running and try again",
            ErrorCategory::MalformedResponse => {
                "The backend may be a different version than expected"
            }
            ErrorCategory::User => "Select at least one dashboard or alert",
            ErrorCategory::System => "Check permissions and free space in the download directory",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
