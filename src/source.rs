//! Uniform index sources.
//!
//! The selection routines only ever need "an integer uniformly in `[0, n)`".
//! Anything implementing [`rand::Rng`] provides that; tests can supply a
//! scripted source instead.

use rand::Rng;

/// A source of uniform indices.
pub trait IndexSource {
    /// Return an index uniformly distributed in `[0, upper)`.
    ///
    /// Callers guarantee `upper > 0`.
    fn index(&mut self, upper: usize) -> usize;
}

impl<R: Rng + ?Sized> IndexSource for R {
    #[inline]
    fn index(&mut self, upper: usize) -> usize {
        self.random_range(0..upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn rng_indices_stay_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        for upper in 1..50 {
            for _ in 0..20 {
                assert!(rng.index(upper) < upper);
            }
        }
    }

    #[test]
    fn upper_of_one_is_always_zero() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!((0..100).all(|_| rng.index(1) == 0));
    }

    #[test]
    fn works_through_dyn_rng() {
        let mut boxed: Box<dyn rand::RngCore> = Box::new(ChaCha8Rng::seed_from_u64(3));
        let i = boxed.index(4);
        assert!(i < 4);
    }
}
