//! Seeded pseudo-random stream.
//!
//! A Mulberry32 generator: one 32-bit counter advanced by a fixed odd
//! increment and mixed with two xor-shift/multiply rounds. Fast and fully
//! reproducible from its seed, not suitable for anything cryptographic.

use rand::{RngCore, SeedableRng, rand_core::impls};

const INCREMENT: u32 = 0x6D2B_79F5;
const SCALE: f64 = 4_294_967_296.0;

/// Deterministic 32-bit generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    /// Creates a new generator whose whole output stream is fixed by `seed`.
    ///
    /// # Arguments
    /// * `seed` - The initial counter value.
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Draws the next value scaled to `[0, 1)`.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        unit(self)
    }
}

/// Maps one 32-bit draw of `rng` onto `[0, 1)`.
#[inline]
pub fn unit<R: RngCore + ?Sized>(rng: &mut R) -> f64 {
    rng.next_u32() as f64 / SCALE
}

impl RngCore for Mulberry32 {
    fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(INCREMENT);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        impls::fill_bytes_via_next(self, dst)
    }
}

impl SeedableRng for Mulberry32 {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let mut a = Mulberry32::new(42);
        let mut b = Mulberry32::new(42);

        for _ in 0..1000 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = Mulberry32::new(1);
        let mut b = Mulberry32::new(2);

        let xs: Vec<u32> = (0..8).map(|_| a.next_u32()).collect();
        let ys: Vec<u32> = (0..8).map(|_| b.next_u32()).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn unit_range() {
        let mut rng = Mulberry32::new(7);

        for _ in 0..10_000 {
            let x = rng.next_f64();
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn seed_bytes_are_little_endian() {
        let mut a = Mulberry32::from_seed(42u32.to_le_bytes());
        let mut b = Mulberry32::new(42);
        assert_eq!(a.next_u64(), b.next_u64());
    }

    #[test]
    fn counter_wraps() {
        let mut rng = Mulberry32::new(u32::MAX);
        let x = rng.next_f64();
        assert!((0.0..1.0).contains(&x));
    }
}
