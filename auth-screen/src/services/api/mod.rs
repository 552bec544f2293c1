//! # API Service Layer
//!
//! HTTP client plus the endpoint functions built on top of it.
//!
//! [`ApiClient`] owns the transport and the envelope handling; [`auth`]
//! holds the per-endpoint functions. The client also implements the
//! [`AuthApi`](crate::core::AuthApi) trait so controllers can swap in a
//! mock for tests.

pub mod auth;
pub mod client;

pub use auth::*;
pub use client::ApiClient;
