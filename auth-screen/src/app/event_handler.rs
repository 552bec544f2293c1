//! # Event Handler
//!
//! Handles async completion events from background submissions, updating
//! screen state accordingly.
//!
//! This module processes `AuthEvent` messages received from spawned request
//! tasks and applies them to state in a thread-safe manner. Alert text for
//! each outcome is decided here.

use shared::{LoginResponse, SignUpResponse};

use crate::app::events::AuthEvent;
use crate::app::state::ScreenMode;
use crate::app::AuthController;
use crate::core::error::RequestError;

/// Trait for event handling implementation
pub(crate) trait AuthEventHandler {
    fn handle_event_impl(&mut self, event: AuthEvent);
}

impl AuthEventHandler for AuthController {
    /// Apply a completion event to state.
    ///
    /// Acquires the write lock per-event for minimal duration.
    fn handle_event_impl(&mut self, event: AuthEvent) {
        match event {
            AuthEvent::LoginResult(result) => {
                self.handle_login_result(result);
            }
            AuthEvent::SignUpResult(result) => {
                self.handle_sign_up_result(result);
            }
        }
    }
}

impl AuthController {
    fn handle_login_result(&mut self, result: Result<LoginResponse, RequestError>) {
        tracing::info!(event = "LoginResult", success = result.is_ok(), "Processing login result");

        let mut state = self.state.write();
        state.ui.is_loading = false;
        match result {
            Ok(response) => {
                state.ui.alert_message =
                    Some(response.message.as_deref().unwrap_or("Success").to_string());
                state.credentials.clear();
            }
            Err(error) => {
                state.ui.alert_message = Some(format!("Login Failed: {}", error));
            }
        }
        state.ui.alert_visible = true;
    }

    fn handle_sign_up_result(&mut self, result: Result<SignUpResponse, RequestError>) {
        tracing::info!(event = "SignUpResult", success = result.is_ok(), "Processing signup result");

        let mut state = self.state.write();
        state.ui.is_loading = false;
        match result {
            Ok(_) => {
                state.ui.alert_message = Some("SignUp Successful".to_string());
                state.credentials.clear();
                // Back to the login form so the new account can sign in.
                state.mode = ScreenMode::Login;
            }
            Err(error) => {
                state.ui.alert_message = Some(format!("SignUp Failed: {}", error));
            }
        }
        state.ui.alert_visible = true;
    }
}
