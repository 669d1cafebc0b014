//! Bounded sampling from a collection.
//!
//! Draws `count` items from a slice without replacement, one uniform index at a
//! time. When the working pool runs dry it is refilled with the whole
//! (effective) source, so `count` may exceed the collection size: every
//! aligned run of `len` draws is a permutation of the source positions.
//!
//! Elements are compared by value (`PartialEq`) only to apply an exclusion
//! list. Duplicate values in the input are distinct positions and are drawn
//! independently.
//!
//! Notes:
//! - `*_with_rng` entrypoints take any [`IndexSource`] for deterministic tests.
//! - The working pool holds indices into the caller's slice; the slice itself
//!   is only read.

use crate::error::SelectError;
use crate::source::IndexSource;
use rand::prelude::*;
use tracing::{debug, trace};

/// What to do when more items are requested than the source holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RefillPolicy {
    /// Refill the pool with the full source once it is exhausted.
    #[default]
    Refill,
    /// Stop after one pass: the result has at most `len` items.
    Cap,
}

/// The collection minus every element equal to an excluded one.
fn effective_source<'a, T: PartialEq>(
    collection: &'a [T],
    excluded: Option<&[T]>,
) -> Vec<&'a T> {
    match excluded {
        Some(excluded) if !excluded.is_empty() => collection
            .iter()
            .filter(|item| !excluded.contains(item))
            .collect(),
        _ => collection.iter().collect(),
    }
}

/// Draw a single item uniformly, skipping anything in `excluded`.
pub fn pick_with_rng<T, R>(
    collection: &[T],
    excluded: Option<&[T]>,
    rng: &mut R,
) -> Result<T, SelectError>
where
    T: Clone + PartialEq,
    R: IndexSource + ?Sized,
{
    let source = effective_source(collection, excluded);
    if source.is_empty() {
        return Err(SelectError::EmptySource);
    }
    Ok(source[rng.index(source.len())].clone())
}

/// Draw a single item using the thread-local RNG.
pub fn pick<T: Clone + PartialEq>(
    collection: &[T],
    excluded: Option<&[T]>,
) -> Result<T, SelectError> {
    let mut rng = rand::rng();
    pick_with_rng(collection, excluded, &mut rng)
}

/// Draw `count` items under [`RefillPolicy::Refill`].
pub fn sample_with_rng<T, R>(
    collection: &[T],
    count: usize,
    excluded: Option<&[T]>,
    rng: &mut R,
) -> Result<Vec<T>, SelectError>
where
    T: Clone + PartialEq,
    R: IndexSource + ?Sized,
{
    sample_with_policy(collection, count, excluded, RefillPolicy::Refill, rng)
}

/// Draw `count` items under [`RefillPolicy::Refill`] using the thread-local RNG.
pub fn sample<T: Clone + PartialEq>(
    collection: &[T],
    count: usize,
    excluded: Option<&[T]>,
) -> Result<Vec<T>, SelectError> {
    let mut rng = rand::rng();
    sample_with_rng(collection, count, excluded, &mut rng)
}

/// Draw `count` items under an explicit refill policy.
///
/// `count == 0` returns an empty vector without touching `rng`, even when the
/// source is empty. Otherwise an empty effective source is an error.
pub fn sample_with_policy<T, R>(
    collection: &[T],
    count: usize,
    excluded: Option<&[T]>,
    policy: RefillPolicy,
    rng: &mut R,
) -> Result<Vec<T>, SelectError>
where
    T: Clone + PartialEq,
    R: IndexSource + ?Sized,
{
    if count == 0 {
        return Ok(Vec::new());
    }

    let source = effective_source(collection, excluded);
    if source.is_empty() {
        return Err(SelectError::EmptySource);
    }

    let count = match policy {
        RefillPolicy::Refill => count,
        RefillPolicy::Cap => {
            if count > source.len() {
                debug!(
                    requested = count,
                    available = source.len(),
                    "capping sample count"
                );
            }
            count.min(source.len())
        }
    };

    let mut pool: Vec<usize> = (0..source.len()).collect();
    let mut out = Vec::with_capacity(count);

    for drawn in 0..count {
        // Pool order carries no meaning for a uniform draw.
        let slot = rng.index(pool.len());
        let idx = pool.swap_remove(slot);
        out.push(source[idx].clone());

        if pool.is_empty() && policy == RefillPolicy::Refill {
            trace!(drawn = drawn + 1, size = source.len(), "refilling sample pool");
            pool.extend(0..source.len());
        }
    }

    Ok(out)
}

/// Configured sampler.
///
/// With a seed, every call reseeds a fresh `StdRng`, so repeated calls with the
/// same arguments return the same result. Without one, the thread-local RNG
/// is used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sampler {
    seed: Option<u64>,
    policy: RefillPolicy,
}

impl Sampler {
    /// Create a sampler with no seed and [`RefillPolicy::Refill`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Set random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the policy for counts larger than the source.
    pub fn with_policy(mut self, policy: RefillPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Configured policy.
    pub fn policy(&self) -> RefillPolicy {
        self.policy
    }

    fn rng(&self) -> Box<dyn RngCore> {
        match self.seed {
            Some(s) => Box::new(StdRng::seed_from_u64(s)),
            None => Box::new(rand::rng()),
        }
    }

    /// Draw a single item, skipping anything in `excluded`.
    pub fn pick<T: Clone + PartialEq>(
        &self,
        collection: &[T],
        excluded: Option<&[T]>,
    ) -> Result<T, SelectError> {
        let mut rng = self.rng();
        pick_with_rng(collection, excluded, &mut *rng)
    }

    /// Draw `count` items under the configured policy.
    pub fn sample<T: Clone + PartialEq>(
        &self,
        collection: &[T],
        count: usize,
        excluded: Option<&[T]>,
    ) -> Result<Vec<T>, SelectError> {
        let mut rng = self.rng();
        sample_with_policy(collection, count, excluded, self.policy, &mut *rng)
    }
}
