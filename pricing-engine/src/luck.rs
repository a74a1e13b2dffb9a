//! Boolean randomness capability
//!
//! The promotional draw is an injected capability rather than an ambient
//! global, so the engine can be driven deterministically in tests.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Source of the one boolean draw performed per priced order.
pub trait Luck {
    fn draw(&mut self) -> bool;
}

/// Production source backed by a small PRNG.
pub struct RngLuck(SmallRng);

impl RngLuck {
    pub fn from_entropy() -> Self {
        Self(SmallRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
}

impl Luck for RngLuck {
    fn draw(&mut self) -> bool {
        self.0.gen_bool(0.5)
    }
}

/// Scripted source for deterministic tests.
///
/// Replays the given sequence and keeps returning the last value once
/// exhausted (an empty script always returns false).
pub struct ScriptedLuck {
    draws: Vec<bool>,
    next: usize,
}

impl ScriptedLuck {
    pub fn new(draws: Vec<bool>) -> Self {
        Self { draws, next: 0 }
    }

    pub fn always(value: bool) -> Self {
        Self::new(vec![value])
    }
}

impl Luck for ScriptedLuck {
    fn draw(&mut self) -> bool {
        let value = self
            .draws
            .get(self.next)
            .or(self.draws.last())
            .copied()
            .unwrap_or(false);
        if self.next < self.draws.len() {
            self.next += 1;
        }
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_sequence_then_repeats_last() {
        let mut luck = ScriptedLuck::new(vec![true, false]);
        assert!(luck.draw());
        assert!(!luck.draw());
        assert!(!luck.draw());
        assert!(!luck.draw());
    }

    #[test]
    fn test_empty_script_is_never_lucky() {
        let mut luck = ScriptedLuck::new(vec![]);
        assert!(!luck.draw());
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let mut a = RngLuck::seeded(7);
        let mut b = RngLuck::seeded(7);
        for _ in 0..32 {
            assert_eq!(a.draw(), b.draw());
        }
    }
}
