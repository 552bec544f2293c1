//! # Action Handlers
//!
//! Handlers for the screen's user actions, split out from the controller
//! for testability.

pub mod auth;
