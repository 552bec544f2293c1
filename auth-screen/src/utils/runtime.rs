//! Global Tokio runtime for async HTTP operations.
//!
//! The host UI (an egui loop, another widget toolkit, or a test harness)
//! drives its own main loop, but reqwest requires a tokio runtime. This
//! static runtime bridges the two by:
//! 1. Providing a tokio context for reqwest to execute in
//! 2. Letting results flow back to the UI thread through the event channel
//!
//! Usage:
//! ```rust,ignore
//! use crate::utils::runtime::TOKIO_RT;
//!
//! TOKIO_RT.spawn(async move {
//!     let result = api.login(request).await;
//!     let _ = tx.send(AuthEvent::LoginResult(result)).await;
//! });
//! ```

use once_cell::sync::Lazy;
use tokio::runtime::Runtime;

pub static TOKIO_RT: Lazy<Runtime> = Lazy::new(|| {
    Runtime::new().expect("Failed to create Tokio runtime for async HTTP operations")
});
