//! # Data Transfer Objects (DTOs)
//!
//! This module contains all data structures used for communication between
//! the login/signup screen and the backend REST API.
//!
//! ## Module Organization
//!
//! - [`auth`] - Login and signup request bodies and response payloads
//!
//! ## Serialization Format
//!
//! All DTOs use `serde_json` for JSON serialization:
//!
//! - **Field naming**: camelCase on the wire via `#[serde(rename_all = "camelCase")]`
//! - **Optional fields**: Omitted when `None` using `#[serde(skip_serializing_if = "Option::is_none")]`
//! - **All types**: Implement both `Serialize` and `Deserialize`
//!
//! ## Example JSON Communication
//!
//! ### Request/Response Pair
//!
//! ```text
//! POST /api/api/v1/user/loginWithPhone
//! Content-Type: application/json
//!
//! {
//!   "email": "alice@example.com",
//!   "password": "MyPassword123!",
//!   "deviceToken": "",
//!   "iosDeviceToken": ""
//! }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "status": 200,
//!   "message": "Login successful",
//!   "data": {
//!     "id": "1",
//!     "email": "alice@example.com"
//!   }
//! }
//! ```

pub mod auth;

pub use auth::*;
