//! Nearest-item queries over positioned items.
//!
//! A linear scan finds the closest item to an origin; `nearest_k` repeats the
//! scan over a shrinking pool (a partial selection sort, O(k·n)). Game-object
//! counts are small enough that no spatial index is used.
//!
//! Ties resolve to the item that comes first in input order, on every pass.
//! A `NaN` distance ranks as `+inf`.

use crate::distance::Point;
use crate::error::SelectError;
use tracing::debug;

/// An identity paired with a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PositionedItem<I, P> {
    pub id: I,
    pub position: P,
}

impl<I, P> PositionedItem<I, P> {
    pub fn new(id: I, position: P) -> Self {
        Self { id, position }
    }
}

impl<I, P> From<(I, P)> for PositionedItem<I, P> {
    fn from((id, position): (I, P)) -> Self {
        Self { id, position }
    }
}

/// Index (within `positions`) of the closest position, first wins on ties.
fn closest<'a, P, F>(
    positions: impl Iterator<Item = &'a P>,
    origin: &P,
    mut distance: F,
) -> Option<usize>
where
    P: 'a,
    F: FnMut(&P, &P) -> f32,
{
    let mut best: Option<(usize, f32)> = None;
    for (i, position) in positions.enumerate() {
        let mut d = distance(position, origin);
        if d.is_nan() {
            d = f32::INFINITY;
        }
        match best {
            Some((_, best_d)) if d >= best_d => {}
            _ => best = Some((i, d)),
        }
    }
    best.map(|(i, _)| i)
}

/// Index of the item closest to `origin`, or `None` if `items` is empty.
pub fn nearest_index<I, P, F>(
    items: &[PositionedItem<I, P>],
    origin: &P,
    distance: F,
) -> Option<usize>
where
    F: FnMut(&P, &P) -> f32,
{
    closest(items.iter().map(|it| &it.position), origin, distance)
}

/// Identity of the item closest to `origin`.
pub fn nearest<I, P, F>(
    items: &[PositionedItem<I, P>],
    origin: &P,
    distance: F,
) -> Result<I, SelectError>
where
    I: Clone,
    F: FnMut(&P, &P) -> f32,
{
    nearest_index(items, origin, distance)
        .map(|i| items[i].id.clone())
        .ok_or(SelectError::EmptySource)
}

/// Identities of the `k` items closest to `origin`, nearest first.
///
/// `k` is clamped to `items.len()`. `k == 0` returns an empty vector; any
/// other `k` on empty input is [`SelectError::EmptySource`].
pub fn nearest_k<I, P, F>(
    items: &[PositionedItem<I, P>],
    origin: &P,
    k: usize,
    mut distance: F,
) -> Result<Vec<I>, SelectError>
where
    I: Clone,
    F: FnMut(&P, &P) -> f32,
{
    if k == 0 {
        return Ok(Vec::new());
    }
    if items.is_empty() {
        return Err(SelectError::EmptySource);
    }
    if k > items.len() {
        debug!(requested = k, available = items.len(), "clamping nearest_k");
    }
    let k = k.min(items.len());

    // Kept in input order so later passes still break ties by original position.
    let mut pool: Vec<usize> = (0..items.len()).collect();
    let mut out = Vec::with_capacity(k);

    for _ in 0..k {
        let slot = closest(pool.iter().map(|&i| &items[i].position), origin, &mut distance)
            .ok_or(SelectError::EmptySource)?;
        let idx = pool.remove(slot);
        out.push(items[idx].id.clone());
    }

    Ok(out)
}

/// [`nearest`] with Euclidean distance.
pub fn nearest_euclidean<I: Clone, P: Point>(
    items: &[PositionedItem<I, P>],
    origin: &P,
) -> Result<I, SelectError> {
    nearest(items, origin, P::distance)
}

/// [`nearest_k`] with Euclidean distance.
pub fn nearest_k_euclidean<I: Clone, P: Point>(
    items: &[PositionedItem<I, P>],
    origin: &P,
    k: usize,
) -> Result<Vec<I>, SelectError> {
    nearest_k(items, origin, k, P::distance)
}
