//! Shared helpers for integration tests
//!
//! - A deterministic ADC-style signal generator
//! - A reference mean computed from a plain slice, to check filters against

#![allow(dead_code)]

/// Deterministic generator for raw sensor counts
///
/// Produces a slow ramp with bounded noise, clamped to a 10-bit ADC range.
pub struct AdcSignal {
    seed: u32,
    level: f32,
    step: f32,
}

/// Largest count a 10-bit ADC reports
pub const ADC_MAX: i32 = 1023;

impl AdcSignal {
    pub fn new(start: f32, step: f32) -> Self {
        Self {
            seed: 42,
            level: start,
            step,
        }
    }

    /// Next reading as a raw count
    pub fn next_count(&mut self) -> i32 {
        self.level += self.step;
        let noisy = self.level + self.noise(4.0);
        (noisy as i32).clamp(0, ADC_MAX)
    }

    /// Take `n` readings
    pub fn take(&mut self, n: usize) -> Vec<i32> {
        (0..n).map(|_| self.next_count()).collect()
    }

    fn noise(&mut self, amplitude: f32) -> f32 {
        self.seed = self.seed.wrapping_mul(1664525).wrapping_add(1013904223);
        let uniform = (self.seed as f32) / (u32::MAX as f32);
        (uniform - 0.5) * 2.0 * amplitude
    }
}

/// Mean of the last `window` values of `history`, summed oldest first
pub fn reference_mean(history: &[f32], window: usize) -> f32 {
    let start = history.len().saturating_sub(window);
    let tail = &history[start..];
    let sum: f32 = tail.iter().sum();
    sum / tail.len() as f32
}
