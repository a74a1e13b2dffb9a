//! User Model

use serde::{Deserialize, Serialize};

/// The purchasing user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Display only
    pub name: String,
    /// Used only for the promotional-gift eligibility check
    pub age: u32,
}

impl User {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}
