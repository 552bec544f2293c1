//! # Authentication API
//!
//! Login and signup endpoint functions.
//!
//! Each function resolves its URL from the client's [`ApiConfig`] and posts
//! a typed request body from the `shared` crate. The two endpoints live on
//! different base URLs, which is why resolution goes through the config
//! rather than a single host constant.
//!
//! [`ApiConfig`]: crate::config::ApiConfig

use shared::{LoginRequest, LoginResponse, SignUpRequest, SignUpResponse};

use crate::core::error::Outcome;
use crate::services::api::client::ApiClient;

/// Authenticate an existing user with email and password.
///
/// Posts to `{login_base_url}/user/loginWithPhone`. The request carries
/// empty device token stubs alongside the credentials.
#[tracing::instrument(skip(client, request), fields(email = %request.email))]
pub async fn login(client: &ApiClient, request: LoginRequest) -> Outcome<LoginResponse> {
    tracing::info!("Attempting login");
    let start = std::time::Instant::now();

    let result = client.post(&client.config().login_url(), &request).await;

    match &result {
        Ok(_) => {
            tracing::info!(duration_ms = start.elapsed().as_millis() as u64, "Login successful");
        }
        Err(e) => {
            tracing::warn!(error = %e, "Login failed");
        }
    }

    result
}

/// Register a new user account.
///
/// Posts to `{signup_base_url}/user/signup`. Mobile number is sent empty
/// with the fixed "+91" country code; the form does not collect either.
#[tracing::instrument(skip(client, request), fields(email = %request.email))]
pub async fn sign_up(client: &ApiClient, request: SignUpRequest) -> Outcome<SignUpResponse> {
    tracing::info!("Attempting signup");
    let start = std::time::Instant::now();

    let result = client.post(&client.config().signup_url(), &request).await;

    match &result {
        Ok(_) => {
            tracing::info!(duration_ms = start.elapsed().as_millis() as u64, "Signup successful");
        }
        Err(e) => {
            tracing::warn!(error = %e, "Signup failed");
        }
    }

    result
}
