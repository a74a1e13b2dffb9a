//! Shared types for the order pricing engine
//!
//! Domain records (line items, users) passed in by the caller, and the
//! error taxonomy surfaced by the pricing pipeline.

pub mod error;
pub mod models;

// Re-exports
pub use error::{PricingError, RejectReason};
pub use models::{ItemCategory, LineItem, User};
