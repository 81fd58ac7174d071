//! RNG module - injectable random sources
//!
//! The core never owns randomness. Food placement draws one value in `[0, 1)`
//! from whatever [`RandomSource`] the caller hands in:
//!
//! - any `FnMut() -> f64` closure (e.g. a thread RNG in the host, `|| 0.0` in tests)
//! - [`SimpleRng`], a seeded LCG for replayable games
//! - [`ReplayRandom`], a fixed list of values for scripted tests

/// A source of uniformly distributed values in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

impl<F> RandomSource for F
where
    F: FnMut() -> f64,
{
    fn next_unit(&mut self) -> f64 {
        self()
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_unit(&mut self) -> f64 {
        // 2^32 keeps the result strictly below 1.0.
        self.next_u32() as f64 / 4_294_967_296.0
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Replays a fixed sequence of values.
///
/// Once exhausted it keeps returning the last value, or `0.0` for an empty list.
#[derive(Debug, Clone, Default)]
pub struct ReplayRandom {
    values: Vec<f64>,
    index: usize,
}

impl ReplayRandom {
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            index: 0,
        }
    }

    /// Number of values drawn so far
    pub fn draws(&self) -> usize {
        self.index
    }
}

impl RandomSource for ReplayRandom {
    fn next_unit(&mut self) -> f64 {
        let value = self
            .values
            .get(self.index)
            .or_else(|| self.values.last())
            .copied()
            .unwrap_or(0.0);
        self.index += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        let v1 = rng1.next_u32();
        let v2 = rng2.next_u32();
        assert_ne!(v1, v2);
    }

    #[test]
    fn test_rng_zero_seed_is_not_stuck() {
        let mut rng = SimpleRng::new(0);
        let a = rng.next_u32();
        let b = rng.next_u32();
        assert_ne!(a, b);
    }

    #[test]
    fn test_unit_values_stay_in_range() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..10_000 {
            let v = rng.next_unit();
            assert!((0.0..1.0).contains(&v), "out of range: {}", v);
        }
    }

    #[test]
    fn test_replay_repeats_last_value() {
        let mut replay = ReplayRandom::new(vec![0.25, 0.75]);
        assert_eq!(replay.next_unit(), 0.25);
        assert_eq!(replay.next_unit(), 0.75);
        assert_eq!(replay.next_unit(), 0.75);
        assert_eq!(replay.draws(), 3);
    }

    #[test]
    fn test_replay_empty_yields_zero() {
        let mut replay = ReplayRandom::default();
        assert_eq!(replay.next_unit(), 0.0);
    }

    #[test]
    fn test_closure_is_a_random_source() {
        let mut calls = 0;
        let mut source = || {
            calls += 1;
            0.5
        };
        assert_eq!(source.next_unit(), 0.5);
        assert_eq!(source.next_unit(), 0.5);
        drop(source);
        assert_eq!(calls, 2);
    }
}
