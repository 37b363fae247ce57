//! Error types for the exporter client.
//!
//! | Category | Raised by | Retryable |
//! |----------|-----------|-----------|
//! | Network | transport failure, non-2xx status | Yes (manually) |
//! | MalformedResponse | undecodable body | No |
//! | User | export with nothing selected | No |
//! | System | saving the archive | No |
//!
//! A partial export (errors listed next to a JSON summary) is not an error.

mod api;
mod category;
mod export;

pub use api::{status_reason, ApiError};
pub use category::ErrorCategory;
pub use export::ExportError;
