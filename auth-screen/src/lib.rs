//! # Auth Screen - Library Root
//!
//! A **view-framework-agnostic core** for an email/password login and
//! signup screen. The host UI renders from shared state, forwards user
//! actions to the controller, and polls once per frame for completions.
//!
//! ## Features
//!
//! - **Two forms, one screen**: Login and signup share state and toggle in place
//! - **Client-side validation**: Email shape and password strength checked before any request
//! - **Enveloped transport**: Success and failure read from the JSON body's `status` field
//! - **Injectable backend**: [`AuthApi`] trait seam for mocking in tests
//!
//! ## Architecture
//!
//! ### Technology Stack
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              auth-screen (this crate)                  │
//! ├────────────────────────────────────────────────────────┤
//! │  Tokio          - Async runtime                        │
//! │  Reqwest        - HTTP client (rustls)                 │
//! │  serde          - Wire serialization                   │
//! │  async-channel  - Task-to-UI event channel             │
//! │  parking_lot    - Shared state locking                 │
//! └────────────────────────────────────────────────────────┘
//!          │ HTTP (JSON envelope)
//!          ▼
//! ┌──────────────────────────┐
//! │  Backend API             │
//! │  (login / signup hosts)  │
//! └──────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: Screen orchestration
//!   - [`AuthController`] with action methods and `on_tick()`
//!   - Observable state ([`AuthState`]) behind `Arc<RwLock<_>>`
//!   - Completion events and their handlers
//!
//! - **core**: Foundations
//!   - Error taxonomies ([`ValidationError`], [`RequestError`])
//!   - The [`AuthApi`] backend trait
//!
//! - **services**: Backend communication
//!   - `api`: HTTP client with envelope handling, endpoint functions
//!
//! - **config**: Endpoint base URLs
//!
//! - **utils**: Runtime handle and credential validation
//!
//! ## Core Concepts
//!
//! ### Event-Driven Communication
//!
//! Submissions run on a Tokio runtime; their results flow back to the UI
//! thread through an unbounded `async_channel` and are applied to state in
//! [`AuthController::on_tick`]. State never changes off the UI thread.
//!
//! ### State Management
//!
//! Screen state is wrapped in `Arc<RwLock<AuthState>>`:
//! - **Thread-safe**: Multiple readers, exclusive writers
//! - **Locked briefly**: Handlers release the lock before any await
//!
//! ## Usage
//!
//! ```rust
//! use auth_screen::{ApiConfig, AuthController, ScreenMode};
//!
//! let mut controller = AuthController::new(ApiConfig::default());
//!
//! // The screen opens on the signup form.
//! assert_eq!(controller.state.read().mode, ScreenMode::SignUp);
//! assert_eq!(controller.state.read().mode.title(), "Create Your Account");
//!
//! // Footer link switches between the two forms.
//! controller.toggle_mode();
//! assert_eq!(controller.state.read().mode, ScreenMode::Login);
//! assert_eq!(controller.state.read().mode.title(), "Log In");
//! ```
//!
//! ## Testing
//!
//! Run all tests:
//! ```bash
//! cargo test --lib
//! ```
//!
//! Controller tests script the backend through [`AuthController::with_api`];
//! transport tests run against a local mock server.

// Re-export main modules for testing and integration
// All modules are public to enable library usage and testing
pub mod app;
pub mod config;
pub mod core;
pub mod services;
pub mod utils;

// Re-export commonly used types for convenience
// These are the most frequently used types that consumers of this library will need
pub use app::{
    AuthController, AuthEvent, AuthState, Credentials, ScreenMode, SocialProvider, UiState,
};
pub use config::ApiConfig;
pub use core::{AuthApi, Outcome, RequestError, ValidationError};
