//! Unified error types for the reservation desk.
//!
//! Everything that can fail returns the crate-wide [`Result`] alias. Storage
//! failures are never swallowed: `DbErr` converts into [`Error::Database`]
//! and propagates to whichever surface invoked the operation.

use thiserror::Error;

/// Top-level error type for all desk operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration file could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong while loading configuration
        message: String,
    },

    /// Underlying database operation failed
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// A date argument could not be parsed as `YYYY-MM-DD`
    #[error("Invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate {
        /// The rejected input text
        value: String,
    },

    /// An operation needed an open booking draft and none exists
    #[error("No booking draft is open")]
    NoActiveDraft,

    /// Submit was called on a draft that already left the editing state
    #[error("Booking draft is {status} and can no longer be submitted")]
    DraftNotEditing {
        /// The draft's current status label
        status: &'static str,
    },

    /// Confirmation-code generation kept colliding with stored codes
    #[error("Could not generate a unique confirmation code after {attempts} attempts")]
    CodeExhausted {
        /// How many candidate codes were tried
        attempts: u32,
    },
}

/// Convenience `Result` type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
