//! `erabu`: selection primitives for interactive 3D applications.
//!
//! Small, stateless routines that pick things: random items out of a
//! collection, or the items nearest to a point. Every call owns its scratch
//! state; nothing outlives a call.
//!
//! Exposed modules:
//! - `sampler`: uniform draws without replacement, refilling when exhausted.
//! - `nearest`: nearest / k-nearest positioned items (linear scan).
//! - `distance`: Euclidean distance for `glam` vectors and `[f32; N]`.
//! - `math`: range mapping, vector clamping, wrap-around and clamped counters.
//! - `source`: the "uniform index in `[0, n)`" capability, implemented for any `rand::Rng`.

#![forbid(unsafe_code)]

pub mod distance;
pub mod error;
pub mod math;
pub mod nearest;
pub mod sampler;
pub mod source;

pub use distance::{euclidean, Point};
pub use error::{count_from_signed, SelectError};
pub use nearest::{
    nearest, nearest_euclidean, nearest_index, nearest_k, nearest_k_euclidean, PositionedItem,
};
pub use sampler::{
    pick, pick_with_rng, sample, sample_with_policy, sample_with_rng, RefillPolicy, Sampler,
};
pub use source::IndexSource;
