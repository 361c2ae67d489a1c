//! Error types for the Marquee table engine.
//!
//! This module defines the centralized error type [`MarqueeError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for Marquee operations.
///
/// This enum consolidates all error conditions that can occur while driving the
/// table engine, from theme loading to host configuration issues. Most of the
/// engine itself is total (out-of-range input is clamped, missing fields render
/// empty), so errors are confined to the edges: files, configuration, and
/// notification encoding.
///
/// # Examples
///
/// ```
/// use marquee::domain::MarqueeError;
///
/// fn validate_config() -> Result<(), MarqueeError> {
///     Err(MarqueeError::Config("page_size must be positive".to_string()))
/// }
/// ```
#[derive(Debug, Error)]
pub enum MarqueeError {
    /// Theme parsing or loading failed.
    ///
    /// Occurs when a theme file cannot be read or its TOML content cannot be
    /// parsed. The string contains a description of what went wrong.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when required configuration values are missing or malformed.
    /// The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding an outbound query notification failed.
    ///
    /// Occurs when a delegated-mode notification cannot be serialized for a
    /// host that forwards it over a wire. Automatically converts from
    /// `serde_json::Error`.
    #[error("Notification encoding error: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// A specialized `Result` type for Marquee operations.
///
/// This is a type alias for `std::result::Result<T, MarqueeError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, MarqueeError>;
