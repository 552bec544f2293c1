//! # Core Abstractions
//!
//! Core traits and error types for dependency injection and better testability.
//!
//! ## Modules
//!
//! - **[`error`]**: Screen error types (`ValidationError`, `RequestError`, `Outcome<T>`)
//! - **[`service`]**: Service traits for dependency injection (`AuthApi`)
//!
//! ## Error Handling
//!
//! Validation failures and request failures are distinct types because they
//! surface at different points: validation errors never reach the network,
//! request errors always come back through the event channel.
//!
//! ```rust
//! use auth_screen::core::{Outcome, RequestError};
//!
//! fn check(url: &str) -> Outcome<()> {
//!     if url.is_empty() {
//!         return Err(RequestError::InvalidUrl);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Dependency Injection
//!
//! The [`AuthApi`] trait lets the controller receive any transport:
//!
//! ```rust,ignore
//! // In production: the real HTTP client
//! let api: Arc<dyn AuthApi> = Arc::new(ApiClient::new(ApiConfig::default()));
//!
//! // In tests: a mock recording calls
//! let api: Arc<dyn AuthApi> = Arc::new(MockAuthApi::new());
//! ```

pub mod error;
pub mod service;

// Re-export commonly used types for convenience
pub use error::{Outcome, RequestError, ValidationError};
pub use service::AuthApi;
