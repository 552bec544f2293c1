//! # Screen State
//!
//! Observable state for the authentication screen.
//!
//! Everything the view renders lives here: which form is showing, the
//! text field contents, password visibility, and the loading/alert flags.
//! The controller owns one [`AuthState`] behind `Arc<RwLock<_>>`; handlers
//! take write locks briefly and never hold one across an `.await`.

/// Which form the screen is currently presenting.
///
/// A single screen serves both flows; toggling swaps the form fields,
/// labels, and which endpoint a submit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenMode {
    Login,
    SignUp,
}

impl ScreenMode {
    /// The other mode. Used by the footer link ("Don't have an account?").
    pub fn toggled(self) -> Self {
        match self {
            ScreenMode::Login => ScreenMode::SignUp,
            ScreenMode::SignUp => ScreenMode::Login,
        }
    }

    /// Heading shown at the top of the form.
    pub fn title(self) -> &'static str {
        match self {
            ScreenMode::Login => "Log In",
            ScreenMode::SignUp => "Create Your Account",
        }
    }

    /// Supporting line under the heading.
    pub fn subtitle(self) -> &'static str {
        match self {
            ScreenMode::Login => "Enter your registered email & password",
            ScreenMode::SignUp => "Enter your details to get an account",
        }
    }

    /// Label on the primary action button.
    pub fn action_label(self) -> &'static str {
        match self {
            ScreenMode::Login => "LOGIN",
            ScreenMode::SignUp => "Register",
        }
    }
}

/// Third-party identity providers offered below the form.
///
/// Rendering only; tapping one is logged but not wired to a flow yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialProvider {
    Google,
    Facebook,
}

impl SocialProvider {
    /// Providers in display order.
    pub fn all() -> [SocialProvider; 2] {
        [SocialProvider::Google, SocialProvider::Facebook]
    }

    /// Button label.
    pub fn title(self) -> &'static str {
        match self {
            SocialProvider::Google => "Google",
            SocialProvider::Facebook => "Facebook",
        }
    }
}

/// Text field contents and the terms checkbox.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    /// Only rendered and validated in signup mode.
    pub confirm_password: String,
    /// Terms & conditions checkbox. Tracked for the view but not a
    /// precondition for submitting.
    pub accepted_terms: bool,
}

impl Credentials {
    /// Reset every field, including the terms checkbox.
    pub fn clear(&mut self) {
        *self = Credentials::default();
    }
}

/// Loading and alert presentation state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    /// True from submit until the completion event is drained.
    pub is_loading: bool,
    /// Text for the alert dialog. Kept after dismissal so a re-open
    /// animation can still read it.
    pub alert_message: Option<String>,
    /// Whether the alert dialog is showing.
    pub alert_visible: bool,
}

/// Complete state for the authentication screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthState {
    /// Current form mode
    pub mode: ScreenMode,
    /// Form field contents
    pub credentials: Credentials,
    /// Password field shows plain text instead of dots
    pub show_password: bool,
    /// Confirm password field shows plain text instead of dots
    pub show_confirm_password: bool,
    /// Loading and alert flags
    pub ui: UiState,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            // The screen opens on the signup form; the footer link
            // switches to login.
            mode: ScreenMode::SignUp,
            credentials: Credentials::default(),
            show_password: false,
            show_confirm_password: false,
            ui: UiState::default(),
        }
    }
}
