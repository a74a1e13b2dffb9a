//! Order Pricing Engine
//!
//! Computes the final chargeable price of a shopping order: ordered
//! validation, itemized discount rules, aggregation, order-level
//! adjustments, and a capped promotional free-order rule.
//!
//! Pricing mutates the item slice it is handed — discounted prices are
//! visible to the caller after the call returns. The engine instance
//! carries the only state that outlives a call: the lifetime counter of
//! promotional gifts it has granted.

pub mod config;
pub mod engine;
pub mod luck;
pub mod money;
pub mod rules;
pub mod validate;

pub use config::{EngineConfig, GiftPromotion, MatchedPairGift, QuantityDiscount};
pub use engine::PricingEngine;
pub use luck::{Luck, RngLuck, ScriptedLuck};
pub use shared::{ItemCategory, LineItem, PricingError, RejectReason, User};
