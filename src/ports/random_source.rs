//! Random Source Port - Entropy for the simulated metrics.
//!
//! The tool simulator draws dice values and digital-twin utilisation from
//! this port so tests can substitute a deterministic source.

/// Source of uniformly distributed values.
pub trait RandomSource: Send + Sync {
    /// Uniform integer in `[low, high]` (both inclusive). Requires `low <= high`.
    fn uniform_inclusive(&self, low: u32, high: u32) -> u32;

    /// Uniform float in `[0.0, 1.0)`.
    fn unit(&self) -> f64;
}
