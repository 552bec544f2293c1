//! # Shared Data Transfer Objects Library
//!
//! This library defines the wire contract between the login/signup screen
//! core and the backend API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Login and signup request/response DTOs
//!
//! ## Wire Format
//!
//! The backend expects **camelCase** field names (`deviceToken`,
//! `confirmPassword`, `userId`), so DTOs with multi-word fields carry
//! `#[serde(rename_all = "camelCase")]`. Optional response fields are
//! omitted from JSON when `None` (using
//! `#[serde(skip_serializing_if = "Option::is_none")]`), and all structs
//! implement both `Serialize` and `Deserialize` for bidirectional
//! communication.
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::auth::{LoginRequest, LoginResponse};
//!
//! let request = LoginRequest::new("alice@example.com", "MyPassword123!");
//! let body = serde_json::to_string(&request).unwrap();
//! assert!(body.contains("\"deviceToken\":\"\""));
//!
//! let response: LoginResponse = serde_json::from_str(
//!     r#"{"status":200,"message":"ok","data":{"id":"1","email":"alice@example.com"}}"#,
//! )
//! .unwrap();
//! assert_eq!(response.data.id, "1");
//! ```

pub mod dto;

// Re-export commonly used types for convenience
// Note: Wildcard re-exports are used here since shared is a DTO library
// where all exports are meant to be public API
pub use dto::*;
