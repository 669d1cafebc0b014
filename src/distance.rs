//! Euclidean distance over 2D/3D points.

use glam::{Vec2, Vec3};

/// A point with a Euclidean distance.
pub trait Point {
    /// Square root of the summed squared component differences.
    fn distance(&self, other: &Self) -> f32;
}

impl Point for Vec2 {
    #[inline]
    fn distance(&self, other: &Self) -> f32 {
        self.distance_squared(*other).sqrt()
    }
}

impl Point for Vec3 {
    #[inline]
    fn distance(&self, other: &Self) -> f32 {
        self.distance_squared(*other).sqrt()
    }
}

impl<const N: usize> Point for [f32; N] {
    #[inline]
    fn distance(&self, other: &Self) -> f32 {
        self.iter()
            .zip(other.iter())
            .map(|(a, b)| (a - b) * (a - b))
            .sum::<f32>()
            .sqrt()
    }
}

/// [`Point::distance`] as a free function, for use as a distance callback.
#[inline]
pub fn euclidean<P: Point>(a: &P, b: &P) -> f32 {
    a.distance(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_four_five() {
        assert_eq!(euclidean(&Vec2::new(0.0, 0.0), &Vec2::new(3.0, 4.0)), 5.0);
        assert_eq!(euclidean(&[0.0f32, 0.0], &[3.0, 4.0]), 5.0);
    }

    #[test]
    fn vec3_matches_array() {
        let a = Vec3::new(1.0, -2.0, 3.0);
        let b = Vec3::new(-4.0, 0.5, 2.0);
        let via_glam = euclidean(&a, &b);
        let via_array = euclidean(&a.to_array(), &b.to_array());
        assert!((via_glam - via_array).abs() < 1e-6);
    }

    #[test]
    fn coincident_points_are_zero() {
        let p = Vec3::new(2.0, 2.0, 2.0);
        assert_eq!(euclidean(&p, &p), 0.0);
    }

    #[test]
    fn symmetric() {
        let a = [1.0f32, 5.0, -3.0];
        let b = [0.0f32, 2.0, 7.0];
        assert_eq!(euclidean(&a, &b), euclidean(&b, &a));
    }
}
