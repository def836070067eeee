//! Crate-level error types.
//!
//! [`BiteBlitzError`] unifies every error source (configuration, terminal
//! and preference-file I/O, JSON, user input) behind a single enum so
//! callers can match on the variant they care about while still using the
//! `?` operator for propagation.
//!
//! [`ValidationError`] is the complete set of failures an ordering
//! operation can produce. Its `Display` text is the notice shown to the
//! user.

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BiteBlitzError>;

/// Top-level error type returned by all public APIs.
#[derive(Debug, thiserror::Error)]
pub enum BiteBlitzError {
    /// An environment variable held a value that could not be used.
    #[error("configuration error: {0}")]
    Config(String),

    /// Terminal or preference file I/O failed.
    #[error("io error: {0}")]
    Io(String),

    /// JSON serialization or deserialization failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// User input was rejected before any state changed.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Rejected user input. Every variant is immediately correctable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The search query was empty or whitespace only.
    #[error("Please enter a search term")]
    EmptyQuery,

    /// Checkout was attempted with no lines in the cart.
    #[error("Your cart is empty")]
    EmptyCart,

    /// Checkout was attempted without a delivery address.
    #[error("Please enter a delivery address")]
    EmptyAddress,
}
