//! # Utility Functions
//!
//! Shared utility functions used across the screen core.
//!
//! ## Modules
//!
//! - **[`validation`]**: Input validation (email grammar, password strength,
//!   cross-field checks)
//! - **[`runtime`]**: Global Tokio runtime bridging non-async UI hosts to
//!   the HTTP client

pub mod runtime;
pub mod validation;
