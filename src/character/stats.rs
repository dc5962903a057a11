//! Clamped resource pools (health, mana, energy).

use serde::{Deserialize, Serialize};

/// A current/max resource. `current` is always within `[0, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatPool {
    current: u32,
    max: u32,
}

impl StatPool {
    /// Creates a full pool.
    pub fn new(max: u32) -> Self {
        Self { current: max, max }
    }

    /// Creates a pool with an explicit current value (clamped).
    pub fn with_current(current: u32, max: u32) -> Self {
        Self {
            current: current.min(max),
            max,
        }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    /// Sets the current value, clamped into `[0, max]`.
    pub fn set(&mut self, value: i64) {
        self.current = value.clamp(0, self.max as i64) as u32;
    }

    /// `set(current + delta)`. Returns the change that actually landed.
    pub fn add(&mut self, delta: i64) -> i64 {
        let before = self.current as i64;
        self.set(before.saturating_add(delta));
        self.current as i64 - before
    }

    /// Refills to max. Returns the amount restored.
    pub fn fill(&mut self) -> u32 {
        let restored = self.max - self.current;
        self.current = self.max;
        restored
    }

    /// Replaces the max, pulling `current` down if it would exceed it.
    pub fn set_max(&mut self, max: u32) {
        self.max = max;
        self.current = self.current.min(max);
    }

    /// Raises the max by `amount` without touching `current`.
    pub fn grow_max(&mut self, amount: u32) {
        self.max = self.max.saturating_add(amount);
    }

    pub fn is_empty(&self) -> bool {
        self.current == 0
    }

    pub fn is_full(&self) -> bool {
        self.current == self.max
    }

    /// Current as a fraction of max (0.0 for a zero-capacity pool).
    pub fn fraction(&self) -> f64 {
        if self.max == 0 {
            return 0.0;
        }
        self.current as f64 / self.max as f64
    }
}
