//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and modularity.

use crate::core::error::Outcome;
use async_trait::async_trait;
use shared::{LoginRequest, LoginResponse, SignUpRequest, SignUpResponse};

/// Trait for authentication API operations
///
/// This trait allows for dependency injection and mocking in tests. The
/// production implementation is [`crate::services::api::ApiClient`];
/// controller tests substitute a mock transport.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Log in with email and password
    async fn login(&self, request: LoginRequest) -> Outcome<LoginResponse>;

    /// Register a new account
    async fn sign_up(&self, request: SignUpRequest) -> Outcome<SignUpResponse>;
}
