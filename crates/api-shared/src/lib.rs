//! # API Shared
//!
//! Shared wire definitions for the packsense APIs.
//!
//! Contains:
//! - Request/response types for the REST surface (`wire` module)
//! - Shared services like `HealthService`
//!
//! Used by `api-rest` and `packsense-cli` for common functionality.

pub mod health;
pub mod wire;

pub use health::HealthService;
pub use wire::*;
