//! GUI-facing error types.
//!
//! One variant per remote flow, each with a fixed user-facing message
//! independent of the underlying cause. The underlying [`ApiError`] is
//! kept as the source for logging.

use crs_api::ApiError;
use thiserror::Error;

/// Failures reported to the user by the GUI.
#[derive(Debug, Error)]
pub enum GuiError {
    /// The initial records fetch failed.
    #[error("failed to fetch records")]
    RecordsFetch(#[source] ApiError),

    /// The countries fetch failed.
    #[error("failed to fetch countries")]
    CountriesFetch(#[source] ApiError),

    /// An edit submission failed.
    #[error("failed to update record")]
    RecordUpdate(#[source] ApiError),
}

impl GuiError {
    /// Fixed message shown to the user for this failure.
    pub fn user_message(&self) -> &'static str {
        match self {
            GuiError::RecordsFetch(_) => "Failed to fetch records",
            GuiError::CountriesFetch(_) => "Failed to fetch countries",
            GuiError::RecordUpdate(_) => "Failed to update record. Please try again.",
        }
    }
}
