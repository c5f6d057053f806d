//! Random number generator construction
//!
//! Every randomized operation in this crate takes its generator as an explicit argument.
//! This module only provides a convenient way to build one.

use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Builds the generator used to drive variant placement and quality sampling
///
/// A `Some` seed makes a simulation repeatable: the same seed, sequence and settings
/// always yield the same reads. `None` seeds from OS entropy.
///
/// ```
/// use htsynth::{create_rng, generate_variants, EventCounts};
///
/// let counts = EventCounts::new(1, 1, 1);
/// let a = generate_variants("ACGTACGT", counts, &mut create_rng(Some(7))).unwrap();
/// let b = generate_variants("ACGTACGT", counts, &mut create_rng(Some(7))).unwrap();
/// assert_eq!(a, b);
/// ```
#[must_use]
pub fn create_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => SmallRng::from_os_rng(),
    }
}

#[cfg(test)]
mod testing {
    use super::*;
    use rand::Rng;

    fn draw_bases(rng: &mut SmallRng) -> Vec<usize> {
        (0..32).map(|_| rng.random_range(0..4)).collect()
    }

    #[test]
    fn test_same_seed_same_bases() {
        assert_eq!(
            draw_bases(&mut create_rng(Some(2024))),
            draw_bases(&mut create_rng(Some(2024)))
        );
    }

    #[test]
    fn test_seeds_diverge() {
        assert_ne!(
            draw_bases(&mut create_rng(Some(1))),
            draw_bases(&mut create_rng(Some(2)))
        );
    }

    #[test]
    fn test_entropy_seeded_generator() {
        let mut rng = create_rng(None);
        assert!(draw_bases(&mut rng).iter().all(|&b| b < 4));
    }
}
