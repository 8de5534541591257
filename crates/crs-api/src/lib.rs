//! Remote data gateway for the customer records API.
//!
//! Thin async wrapper over the three HTTP operations the application
//! uses: listing records, updating one record, and listing countries.
//! Non-success responses are translated into typed failures. There are
//! no retries and no request timeout: a single failed attempt surfaces
//! immediately to the caller.

pub mod client;
pub mod error;

pub use client::{ApiClient, DEFAULT_BASE_URL};
pub use error::{ApiError, Result};
