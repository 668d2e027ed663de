use std::f64::consts::PI;

use rand::{Rng, RngCore, distr::Distribution};

use crate::rng::unit;

/// Standard normal distribution sampled with the Box-Muller transform.
///
/// Each sample consumes at least two uniform draws, more when a draw lands
/// exactly on zero and has to be repeated.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoxMuller;

impl Distribution<f64> for BoxMuller {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let u = open_unit(rng);
        let v = open_unit(rng);
        (-2.0 * u.ln()).sqrt() * (2.0 * PI * v).cos()
    }
}

/// Draws one value with mean 0 and variance 1.
#[inline]
pub fn normal<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    BoxMuller.sample(rng)
}

fn open_unit<R: RngCore + ?Sized>(rng: &mut R) -> f64 {
    loop {
        let x = unit(rng);
        if x > 0.0 {
            return x;
        }
    }
}
