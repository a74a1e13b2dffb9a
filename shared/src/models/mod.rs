//! Domain records consumed by the pricing engine

pub mod item;
pub mod user;

pub use item::{ItemCategory, LineItem};
pub use user::User;
