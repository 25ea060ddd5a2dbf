//! HTTP request handlers.

pub mod dispatch;
pub mod health;
pub mod snapshot;

pub use dispatch::{dispatch_handler, method_not_allowed_handler, preflight_handler};
pub use health::health_handler;
pub use snapshot::snapshot_handler;
