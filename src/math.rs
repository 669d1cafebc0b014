//! Small numeric helpers: range mapping, vector clamping, counters.

use glam::Vec3;

/// Where `value` sits in `[min, max]`, as a fraction in `[0, 1]`.
///
/// Not clamped: values outside the range map outside `[0, 1]`.
#[inline]
pub fn map_value01(min: f32, max: f32, value: f32) -> f32 {
    (value - min) / (max - min)
}

/// Linearly remap `value` from the `from` range onto the `to` range.
#[inline]
pub fn map_value(value: f32, from: (f32, f32), to: (f32, f32)) -> f32 {
    to.0 + (to.1 - to.0) * map_value01(from.0, from.1, value)
}

/// Clamp each component to `[-limit, limit]`.
#[inline]
pub fn clamp_symmetric(v: Vec3, limit: f32) -> Vec3 {
    clamp_vec3(v, -limit, limit)
}

/// Clamp each component to `[min, max]`.
#[inline]
pub fn clamp_vec3(v: Vec3, min: f32, max: f32) -> Vec3 {
    v.max(Vec3::splat(min)).min(Vec3::splat(max))
}

/// The point `distance` units from `origin` along `direction`.
///
/// `direction` need not be normalized; a zero direction yields `origin`.
#[inline]
pub fn point_along(origin: Vec3, direction: Vec3, distance: f32) -> Vec3 {
    origin + direction.normalize_or_zero() * distance
}

/// Numbers that can be stepped by one.
pub trait Step: Copy + PartialOrd {
    const ZERO: Self;

    /// `self + 1`, saturating for integers.
    fn succ(self) -> Self;

    /// `self - 1`, saturating for integers.
    fn pred(self) -> Self;
}

macro_rules! impl_step_int {
    ($($t:ty),*) => {
        $(
            impl Step for $t {
                const ZERO: Self = 0;

                #[inline]
                fn succ(self) -> Self {
                    self.saturating_add(1)
                }

                #[inline]
                fn pred(self) -> Self {
                    self.saturating_sub(1)
                }
            }
        )*
    };
}

macro_rules! impl_step_float {
    ($($t:ty),*) => {
        $(
            impl Step for $t {
                const ZERO: Self = 0.0;

                #[inline]
                fn succ(self) -> Self {
                    self + 1.0
                }

                #[inline]
                fn pred(self) -> Self {
                    self - 1.0
                }
            }
        )*
    };
}

impl_step_int!(u8, u32, i32, i64, usize);
impl_step_float!(f32, f64);

/// Step up, wrapping to zero once `count` reaches `max`.
#[inline]
pub fn increment_loop<T: Step>(count: T, max: T) -> T {
    if count < max {
        count.succ()
    } else {
        T::ZERO
    }
}

/// Step up, holding at `count` once it reaches `max`.
#[inline]
pub fn increment_clamped<T: Step>(count: T, max: T) -> T {
    if count < max {
        count.succ()
    } else {
        count
    }
}

/// Step down, wrapping to `max` once `count` reaches `min`.
#[inline]
pub fn decrement_loop<T: Step>(count: T, min: T, max: T) -> T {
    if count > min {
        count.pred()
    } else {
        max
    }
}

/// Step down, holding at `count` once it reaches `min`.
#[inline]
pub fn decrement_clamped<T: Step>(count: T, min: T) -> T {
    if count > min {
        count.pred()
    } else {
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map01() {
        assert_eq!(map_value01(0.0, 10.0, 5.0), 0.5);
        assert_eq!(map_value01(10.0, 20.0, 10.0), 0.0);
        assert_eq!(map_value01(10.0, 20.0, 25.0), 1.5);
    }

    #[test]
    fn remap() {
        assert_eq!(map_value(5.0, (0.0, 10.0), (100.0, 200.0)), 150.0);
        assert_eq!(map_value(0.25, (0.0, 1.0), (4.0, 0.0)), 3.0);
    }

    #[test]
    fn clamp_vectors() {
        assert_eq!(
            clamp_symmetric(Vec3::new(5.0, -5.0, 0.0), 3.0),
            Vec3::new(3.0, -3.0, 0.0)
        );
        assert_eq!(
            clamp_vec3(Vec3::new(-1.0, 0.5, 9.0), 0.0, 1.0),
            Vec3::new(0.0, 0.5, 1.0)
        );
    }

    #[test]
    fn ray_points() {
        let p = point_along(Vec3::new(1.0, 1.0, 1.0), Vec3::new(0.0, 0.0, 4.0), 2.0);
        assert_eq!(p, Vec3::new(1.0, 1.0, 3.0));
        assert_eq!(point_along(Vec3::ONE, Vec3::ZERO, 10.0), Vec3::ONE);
    }

    #[test]
    fn increment_loop_wraps() {
        assert_eq!(increment_loop(2, 3), 3);
        assert_eq!(increment_loop(3, 3), 0);
        assert_eq!(increment_loop(255u8, 255u8), 0);
        assert_eq!(increment_loop(1.5f32, 3.0), 2.5);
        assert_eq!(increment_loop(3.0f64, 3.0), 0.0);
    }

    #[test]
    fn increment_clamped_holds() {
        assert_eq!(increment_clamped(4i64, 5), 5);
        assert_eq!(increment_clamped(5i64, 5), 5);
        assert_eq!(increment_clamped(9usize, 5), 9);
    }

    #[test]
    fn decrement_loop_wraps() {
        assert_eq!(decrement_loop(1, 0, 5), 0);
        assert_eq!(decrement_loop(0, 0, 5), 5);
        assert_eq!(decrement_loop(0u8, 0, 9), 9);
        assert_eq!(decrement_loop(-2.0f32, -2.0, 2.0), 2.0);
    }

    #[test]
    fn decrement_clamped_holds() {
        assert_eq!(decrement_clamped(1u32, 0), 0);
        assert_eq!(decrement_clamped(0u32, 0), 0);
        assert_eq!(decrement_clamped(0u8, u8::ZERO), 0);
        assert_eq!(decrement_clamped(-4i32, -5), -5);
    }
}
