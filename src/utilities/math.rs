// src/utilities/math.rs
//
// Small math helpers for sketches. All pass-through; nothing here holds
// state.

use std::f32::consts::PI;

/// Distance between two points.
pub fn dist(x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    ((x2 - x1).powi(2) + (y2 - y1).powi(2)).sqrt()
}

/// Convert degrees to radians.
pub fn radians(degrees: f32) -> f32 {
    degrees * (PI / 180.0)
}

/// Convert radians to degrees.
pub fn degrees(radians: f32) -> f32 {
    radians * (180.0 / PI)
}

/// The greater of two values.
pub fn max<T: PartialOrd>(a: T, b: T) -> T {
    if a > b {
        a
    } else {
        b
    }
}

/// The lesser of two values.
pub fn min<T: PartialOrd>(a: T, b: T) -> T {
    if a < b {
        a
    } else {
        b
    }
}

/// Clamp `value` into [min, max].
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dist_is_euclidean() {
        assert_eq!(dist(0.0, 0.0, 3.0, 4.0), 5.0);
        assert_eq!(dist(1.0, 1.0, 1.0, 1.0), 0.0);
        // Symmetric in its endpoints.
        assert_eq!(dist(-2.0, 5.0, 7.0, -1.0), dist(7.0, -1.0, -2.0, 5.0));
    }

    #[test]
    fn angle_conversions_round_trip() {
        assert!((radians(180.0) - PI).abs() < 1e-6);
        assert!((degrees(PI / 2.0) - 90.0).abs() < 1e-4);
        assert!((degrees(radians(37.5)) - 37.5).abs() < 1e-4);
    }

    #[test]
    fn min_max_clamp() {
        assert_eq!(max(3, 7), 7);
        assert_eq!(min(3.0, 7.0), 3.0);
        assert_eq!(clamp(5, 0, 10), 5);
        assert_eq!(clamp(-5, 0, 10), 0);
        assert_eq!(clamp(50, 0, 10), 10);
    }
}
