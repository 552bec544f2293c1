//! # Screen Orchestrator
//!
//! The main [`AuthController`] struct coordinates the authentication screen:
//! user actions from the host view, background submissions, and observable
//! state the view renders from.
//!
//! ## Architecture
//!
//! The screen follows an event-driven pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                UI Thread (host view)                │
//! │  ┌───────────────────────────────────────────────┐  │
//! │  │  AuthController                               │  │
//! │  │  - on_tick() - drains completion events       │  │
//! │  │  - submit(), toggle_mode(), dismiss_alert()   │  │
//! │  └────────────┬──────────────────────────────────┘  │
//! │               │                                     │
//! │  ┌────────────▼──────────────────────────────────┐  │
//! │  │  State: Arc<RwLock<AuthState>>                │  │
//! │  │  - Lock held briefly, never across awaits     │  │
//! │  └───────────────────────────────────────────────┘  │
//! └───────────────────────┬─────────────────────────────┘
//!                         │ async_channel
//!                         │ (unbounded)
//! ┌───────────────────────▼─────────────────────────────┐
//! │            Background Tasks (TOKIO_RT)              │
//! │  ┌───────────────────────────────────────────────┐  │
//! │  │  handlers::auth::handle_submit                │  │
//! │  │  - spawns login / signup request              │  │
//! │  │  - sends AuthEvent result back                │  │
//! │  └───────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! ## State Management Pattern
//!
//! ```rust,ignore
//! // UI thread: read state for rendering
//! let state = controller.state.read();
//! render_form(&state);
//! drop(state); // lock released immediately
//!
//! // Handlers: write state updates
//! let mut state = controller.state.write();
//! state.ui.is_loading = true;
//! drop(state);
//! ```
//!
//! Completions never touch state directly; they arrive as [`AuthEvent`]
//! messages and are applied when the host calls
//! [`on_tick`](AuthController::on_tick) on the UI thread. State therefore
//! only ever changes on that thread.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use auth_screen::{ApiConfig, AuthController};
//!
//! let mut controller = AuthController::new(ApiConfig::default());
//!
//! // The screen opens on the signup form; the footer link switches it.
//! controller.toggle_mode();
//!
//! // Host view forwards field edits into state.
//! {
//!     let mut state = controller.state.write();
//!     state.credentials.email = "user@example.com".to_string();
//!     state.credentials.password = "Str0ng!Pass1".to_string();
//! }
//!
//! controller.submit();
//!
//! // Host update loop: poll for completions every frame.
//! loop {
//!     controller.on_tick();
//!     let state = controller.state.read();
//!     if state.ui.alert_visible {
//!         println!("{}", state.ui.alert_message.as_deref().unwrap_or(""));
//!         break;
//!     }
//! }
//! ```

mod event_handler;
mod events;
mod handlers;
mod state;

pub use events::AuthEvent;
pub use state::*;

use std::sync::Arc;
use parking_lot::RwLock;
use async_channel::{Sender, Receiver, unbounded};

use crate::config::ApiConfig;
use crate::core::service::AuthApi;
use crate::services::api::ApiClient;

/// Coordinates the authentication screen between the host view, background
/// submissions, and shared state.
///
/// The controller is view-framework agnostic: the host renders from
/// [`state`](AuthController::state), forwards user actions to the action
/// methods, and calls [`on_tick`](AuthController::on_tick) once per frame
/// so completion events get applied on the UI thread.
///
/// # Example
///
/// ```rust
/// use auth_screen::{ApiConfig, AuthController, ScreenMode};
///
/// let controller = AuthController::new(ApiConfig::default());
/// let state = controller.state.read();
/// assert_eq!(state.mode, ScreenMode::SignUp);
/// assert!(!state.ui.is_loading);
/// ```
pub struct AuthController {
    /// Thread-safe shared screen state.
    ///
    /// - Use `read()` for rendering (shared lock, multiple readers)
    /// - Use `write()` for field edits (exclusive lock, single writer)
    /// - Hold locks for minimal duration to keep the UI responsive
    pub state: Arc<RwLock<AuthState>>,

    /// Channel receiver for background submission results.
    ///
    /// Polled in `on_tick()` using `try_recv()` (non-blocking).
    pub event_rx: Receiver<AuthEvent>,

    /// Channel sender cloned into spawned submission tasks.
    event_tx: Sender<AuthEvent>,

    /// Backend the submissions run against. Injected as a trait object so
    /// tests can substitute a scripted double.
    api: Arc<dyn AuthApi>,
}

impl AuthController {
    /// Create a controller backed by the real HTTP client.
    ///
    /// The screen starts on the signup form with empty fields and no alert.
    pub fn new(config: ApiConfig) -> Self {
        Self::with_api(Arc::new(ApiClient::new(config)))
    }

    /// Create a controller with an injected [`AuthApi`] implementation.
    ///
    /// This is the seam for tests and for hosts that already own a client.
    pub fn with_api(api: Arc<dyn AuthApi>) -> Self {
        let (event_tx, event_rx) = unbounded();

        let controller = AuthController {
            state: Arc::new(RwLock::new(AuthState::default())),
            event_rx,
            event_tx,
            api,
        };

        tracing::info!("Auth screen state initialized - event channel created");

        controller
    }

    /// Called every frame to apply pending completion events to state.
    ///
    /// Non-blocking: drains whatever `try_recv()` yields and returns.
    /// A submit's `is_loading` flag only clears here, so state transitions
    /// always happen on the thread that calls this method.
    pub fn on_tick(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
        }
    }

    /// Apply one completion event.
    ///
    /// Delegates to the event_handler module for processing.
    fn handle_event(&mut self, event: AuthEvent) {
        use event_handler::AuthEventHandler;
        self.handle_event_impl(event);
    }

    // ========== UI Action Methods - Delegating to Handlers ==========

    /// Handle the primary action button (LOGIN / Register).
    pub fn submit(&mut self) {
        handlers::auth::handle_submit(self.state.clone(), self.event_tx.clone(), self.api.clone());
    }

    /// Switch between the login and signup forms.
    pub fn toggle_mode(&mut self) {
        handlers::auth::handle_toggle_mode(self.state.clone());
    }

    /// Hide the alert dialog.
    pub fn dismiss_alert(&mut self) {
        handlers::auth::handle_dismiss_alert(self.state.clone());
    }

    /// Handle a social provider button tap.
    pub fn social_login(&mut self, provider: SocialProvider) {
        handlers::auth::handle_social_login(provider);
    }
}
