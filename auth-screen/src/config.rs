//! # API Configuration
//!
//! Base URLs and endpoint paths for the backend API.
//!
//! Login and signup are served from two different hosts, so the config
//! carries one base URL per operation. The host application constructs an
//! [`ApiConfig`] and hands it to the client; nothing here reads the
//! environment.

/// Path for the login endpoint, relative to the login base URL.
pub const LOGIN_ENDPOINT: &str = "user/loginWithPhone";

/// Path for the signup endpoint, relative to the signup base URL.
pub const SIGNUP_ENDPOINT: &str = "user/signup";

const DEFAULT_LOGIN_BASE_URL: &str = "https://dually.app/api/api/v1/";
const DEFAULT_SIGNUP_BASE_URL: &str = "https://back-end.dually.app/api/api/v1/";

/// Backend endpoint configuration.
///
/// `Default` points at the production hosts; tests and staging builds inject
/// their own base URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL for login requests.
    pub login_base_url: String,
    /// Base URL for signup requests (separate host).
    pub signup_base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            login_base_url: DEFAULT_LOGIN_BASE_URL.to_string(),
            signup_base_url: DEFAULT_SIGNUP_BASE_URL.to_string(),
        }
    }
}

impl ApiConfig {
    /// Full URL for the login endpoint.
    pub fn login_url(&self) -> String {
        join_url(&self.login_base_url, LOGIN_ENDPOINT)
    }

    /// Full URL for the signup endpoint.
    pub fn signup_url(&self) -> String {
        join_url(&self.signup_base_url, SIGNUP_ENDPOINT)
    }
}

/// Joins a base URL and an endpoint path with exactly one slash between them.
fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
