//! # Events
//!
//! Completion events sent from background tasks to the UI thread.
//!
//! Submissions run on the Tokio runtime; their outcomes cross back to the
//! UI thread through the controller's channel and are applied to state in
//! [`on_tick`](crate::app::AuthController::on_tick). Events carry the full
//! `Result` so the handler decides how success and failure render.

use shared::{LoginResponse, SignUpResponse};

use crate::core::error::RequestError;

/// Completion of a background submission.
#[derive(Debug, Clone)]
pub enum AuthEvent {
    /// Login request finished.
    LoginResult(Result<LoginResponse, RequestError>),
    /// Signup request finished.
    SignUpResult(Result<SignUpResponse, RequestError>),
}
