//! Pseudo-random operand data for the benchmark.

use rand::Rng;

/// Fill every element of `buf` with an independent uniform draw from
/// `[1.0, 100.0)`.
///
/// Generic over the RNG so the benchmark binary can pass the thread RNG
/// while tests pass a seeded one.
pub fn fill_random<R: Rng + ?Sized>(rng: &mut R, buf: &mut [f32]) {
    for slot in buf.iter_mut() {
        *slot = rng.random_range(1.0f32..100.0);
    }
}
