//! Platform abstraction layer
//!
//! Handles the pieces the browser and native runners share:
//! - Wall-clock gating of simulation ticks
//! - Held-key tracking and mapping to tick input

use std::collections::BTreeSet;

use crate::settings::KeyBindings;
use crate::sim::TickInput;

/// Fixed-step accumulator that releases at most one tick per frame
///
/// Leftover time carries into the next frame, capped at one interval so a
/// long stall yields a single extra tick instead of a burst.
#[derive(Debug, Clone)]
pub struct TickGate {
    interval: f64,
    accumulator: f64,
    last: f64,
}

impl TickGate {
    /// Rounding slack so frames exactly one interval apart always tick
    const EPSILON: f64 = 1e-9;

    pub fn new(interval: f64, now: f64) -> Self {
        Self {
            interval,
            accumulator: 0.0,
            last: now,
        }
    }

    /// Feed the frame time (seconds); true when a tick is due
    pub fn ready(&mut self, now: f64) -> bool {
        let dt = (now - self.last).max(0.0);
        self.last = now;
        self.accumulator += dt;

        if self.accumulator + Self::EPSILON >= self.interval {
            self.accumulator = (self.accumulator - self.interval).min(self.interval);
            true
        } else {
            false
        }
    }
}

/// Keys currently held down, by `KeyboardEvent.key` name
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    held: BTreeSet<String>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: &str) {
        self.held.insert(normalize_key(key));
    }

    pub fn release(&mut self, key: &str) {
        self.held.remove(&normalize_key(key));
    }

    /// Drop every held key (focus loss never delivers the key-up events)
    pub fn clear(&mut self) {
        self.held.clear();
    }

    pub fn is_down(&self, key: &str) -> bool {
        self.held.contains(&normalize_key(key))
    }

    fn any_down(&self, keys: &[String]) -> bool {
        keys.iter().any(|k| self.is_down(k))
    }

    /// Build this tick's input from the held keys
    pub fn to_input(&self, bindings: &KeyBindings) -> TickInput {
        TickInput {
            left: self.any_down(&bindings.left),
            right: self.any_down(&bindings.right),
            jump: self.any_down(&bindings.jump),
            idle_mode: false,
        }
    }
}

/// Letter keys arrive as "a" or "A" depending on shift
fn normalize_key(key: &str) -> String {
    if key.chars().count() == 1 {
        key.to_lowercase()
    } else {
        key.to_string()
    }
}
