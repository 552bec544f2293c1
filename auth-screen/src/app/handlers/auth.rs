//! # Authentication Handlers
//!
//! Handlers for submit, mode switching, and alert actions.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;
use shared::{LoginRequest, SignUpRequest};

use crate::app::events::AuthEvent;
use crate::app::state::{AuthState, ScreenMode, SocialProvider};
use crate::core::service::AuthApi;
use crate::utils::runtime::TOKIO_RT;
use crate::utils::validation;

/// Handle the primary action button.
///
/// Validates synchronously, then spawns the request for the current mode.
/// The lock is released before the spawn; completion comes back through
/// `event_tx` and is applied on the next tick.
///
/// Internal handler function - use [`crate::app::AuthController::submit`] instead.
pub(crate) fn handle_submit(
    state: Arc<RwLock<AuthState>>,
    event_tx: Sender<AuthEvent>,
    api: Arc<dyn AuthApi>,
) {
    let (mode, email, password, confirm_password) = {
        let mut state = state.write();

        // One request at a time; a submit while loading is dropped.
        if state.ui.is_loading {
            tracing::debug!("Submit ignored: request already in flight");
            return;
        }

        if let Err(error) = validation::validate_credentials(&state.credentials, state.mode) {
            state.ui.alert_message = Some(error.to_string());
            state.ui.alert_visible = true;
            return;
        }

        state.ui.is_loading = true;
        (
            state.mode,
            state.credentials.email.clone(),
            state.credentials.password.clone(),
            state.credentials.confirm_password.clone(),
        )
    };

    let tx = event_tx.clone();
    TOKIO_RT.spawn(async move {
        match mode {
            ScreenMode::Login => {
                let result = api.login(LoginRequest::new(email, password)).await;
                let _ = tx.send(AuthEvent::LoginResult(result)).await;
            }
            ScreenMode::SignUp => {
                let result = api
                    .sign_up(SignUpRequest::new(email, password, confirm_password))
                    .await;
                let _ = tx.send(AuthEvent::SignUpResult(result)).await;
            }
        }
    });
}

/// Switch between the login and signup forms.
///
/// Clears the fields and re-masks both password inputs so nothing typed
/// for one flow leaks into the other.
///
/// Internal handler function - use [`crate::app::AuthController::toggle_mode`] instead.
pub(crate) fn handle_toggle_mode(state: Arc<RwLock<AuthState>>) {
    let mut state = state.write();
    state.mode = state.mode.toggled();
    state.credentials.clear();
    state.show_password = false;
    state.show_confirm_password = false;
}

/// Hide the alert dialog. The message stays behind for re-display.
///
/// Internal handler function - use [`crate::app::AuthController::dismiss_alert`] instead.
pub(crate) fn handle_dismiss_alert(state: Arc<RwLock<AuthState>>) {
    let mut state = state.write();
    state.ui.alert_visible = false;
}

/// Social login buttons are rendered but not wired to a provider flow.
///
/// Internal handler function - use [`crate::app::AuthController::social_login`] instead.
pub(crate) fn handle_social_login(provider: SocialProvider) {
    tracing::info!(provider = provider.title(), "Social login tapped");
}
