//! Presentation-side helpers that sit next to the statistical core.

use rand::Rng;

/// Uniform random offset in `[-amplitude, +amplitude]` for de-overlapping
/// outlier scatter marks.
///
/// The RNG is injected so callers that need reproducible layouts (tests,
/// snapshot renders) can pass a seeded generator.
pub fn jitter<R: Rng>(rng: &mut R, amplitude: f64) -> f64 {
    if amplitude <= 0.0 {
        return 0.0;
    }
    rng.gen_range(-amplitude..=amplitude)
}
