//! Core types and service wiring for the meny school catalog aggregator.

/// Domain models and identifiers shared by all suppliers.
pub mod model;
/// Registry and helpers for plugging supplier-specific providers into the service.
pub mod plugin;
/// Traits describing the provider interfaces.
pub mod ports;
/// High-level service facade used by clients.
pub mod service;

pub use model::*;
pub use plugin::*;
pub use ports::*;
pub use service::*;
