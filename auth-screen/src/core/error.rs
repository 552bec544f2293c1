//! # Common Error Types
//!
//! Consolidated error handling for the login/signup screen.
//!
//! This module provides the two error types the screen core produces:
//!
//! - **[`ValidationError`]**: Input problems caught before any network call.
//!   Each variant renders the exact alert text shown to the user.
//! - **[`RequestError`]**: Transport and protocol problems from the HTTP
//!   client, including server-signaled rejections carried inside the
//!   response envelope.
//!
//! Both surface to the user as a single alert message string; neither is
//! retried. Every failure path leaves the loading flag reset so the screen
//! never sticks in a loading state.
//!
//! ## Usage Pattern
//!
//! ```rust
//! use auth_screen::core::error::{Outcome, RequestError};
//!
//! fn interpret(status: i64) -> Outcome<()> {
//!     match status {
//!         200 | 201 => Ok(()),
//!         _ => Err(RequestError::Rejected("Email taken".to_string())),
//!     }
//! }
//!
//! assert_eq!(
//!     interpret(409).unwrap_err().to_string(),
//!     "Email taken"
//! );
//! ```

use thiserror::Error;

/// Input validation failure, produced before any request is dispatched.
///
/// Variants are ordered the way the checks run; validation short-circuits on
/// the first failure. The `Display` text is the user-facing alert message.
///
/// # Example
///
/// ```rust
/// use auth_screen::core::error::ValidationError;
///
/// assert_eq!(
///     ValidationError::InvalidEmailFormat.to_string(),
///     "Enter a valid email address"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Email field is empty.
    #[error("Please enter an email address")]
    EmptyEmail,

    /// Email does not match the `local-part@domain.tld` grammar.
    #[error("Enter a valid email address")]
    InvalidEmailFormat,

    /// Password field is empty.
    #[error("Please enter a password")]
    EmptyPassword,

    /// Password fails the strength rules (length, character classes, or a
    /// character outside the allowed alphabet).
    #[error("Password must be at least 8 characters with an uppercase letter, a lowercase letter, a number and a special character")]
    WeakPassword,

    /// Signup only: password and confirm-password differ.
    #[error("Passwords don't match")]
    PasswordMismatch,
}

/// Request failure from the HTTP client.
///
/// Covers everything between "the URL would not parse" and "the server
/// answered but signaled failure in its envelope". The backend embeds
/// success/failure in a JSON `status` field rather than the HTTP status, so
/// [`RequestError::Rejected`] is a business rejection, not a protocol error.
///
/// # Example
///
/// ```rust
/// use auth_screen::core::error::RequestError;
///
/// let err = RequestError::InvalidUrl;
/// assert_eq!(err.to_string(), "Invalid URL");
///
/// let err = RequestError::Transport("connection refused".to_string());
/// assert_eq!(err.to_string(), "connection refused");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// The request URL could not be parsed. No network call was made.
    #[error("Invalid URL")]
    InvalidUrl,

    /// The request body could not be serialized to JSON.
    #[error("Failed to encode request body: {0}")]
    BodyEncoding(String),

    /// Network-level failure (DNS, connection, timeout) or an empty
    /// response body.
    #[error("{0}")]
    Transport(String),

    /// The envelope accepted the response but the payload did not match the
    /// expected shape, or the body was not JSON at all. Carries the raw
    /// response text for debugging.
    #[error("Decoding failed: {reason}\nResponse: {body}")]
    Decoding {
        /// The decoder's own error description.
        reason: String,
        /// Raw response text as received.
        body: String,
    },

    /// The server's envelope signaled failure; the message is the server's
    /// own (or a fixed fallback when the envelope is malformed or silent).
    #[error("{0}")]
    Rejected(String),
}

/// Convenience type alias for `Result<T, RequestError>`.
///
/// This is the type the HTTP client resolves and the controller consumes:
///
/// ```rust
/// use auth_screen::core::error::Outcome;
///
/// fn operation() -> Outcome<String> {
///     Ok("success".to_string())
/// }
/// ```
pub type Outcome<T> = std::result::Result<T, RequestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        assert_eq!(
            ValidationError::EmptyEmail.to_string(),
            "Please enter an email address"
        );
        assert_eq!(
            ValidationError::EmptyPassword.to_string(),
            "Please enter a password"
        );
        assert_eq!(
            ValidationError::PasswordMismatch.to_string(),
            "Passwords don't match"
        );
    }

    #[test]
    fn test_decoding_error_carries_raw_body() {
        let err = RequestError::Decoding {
            reason: "missing field `data`".to_string(),
            body: r#"{"status":200}"#.to_string(),
        };
        let rendered = err.to_string();
        assert!(rendered.starts_with("Decoding failed: missing field `data`"));
        assert!(rendered.contains(r#"Response: {"status":200}"#));
    }

    #[test]
    fn test_rejected_renders_server_message_verbatim() {
        let err = RequestError::Rejected("Email taken".to_string());
        assert_eq!(err.to_string(), "Email taken");
    }
}
