// src/utilities/scale.rs
//
// Scale math shared by the node state machine and the draw routines.
// One global scale drives n sub-elements through a staggered reveal.

use crate::constants::{SC_DIV, SC_GAP};

pub fn max_scale(scale: f32, i: usize, n: usize) -> f32 {
    (scale - i as f32 / n as f32).max(0.0)
}

/// Local progress of sub-element `i` out of `n`.
///
/// Stays at 0 until `scale` reaches `i/n`, rises linearly to 1 as `scale`
/// sweeps to `(i+1)/n`, then holds at 1.
pub fn divide_scale(scale: f32, i: usize, n: usize) -> f32 {
    let parts = n as f32;
    (1.0 / parts).min(max_scale(scale, i, n)) * parts
}

/// 0 below `SC_DIV`, 1 from `SC_DIV` up to twice that, and so on.
pub fn scale_factor(scale: f32) -> f32 {
    (scale / SC_DIV).floor()
}

/// Picks `1/a` below the midpoint and `1/b` above it.
pub fn mirror_value(scale: f32, a: f32, b: f32) -> f32 {
    let k = scale_factor(scale);
    (1.0 - k) / a + k / b
}

/// Per-tick scale step in direction `dir`.
pub fn update_value(scale: f32, dir: f32, a: f32, b: f32) -> f32 {
    mirror_value(scale, a, b) * dir * SC_GAP
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_max_scale_floors_at_zero() {
        assert_eq!(max_scale(0.1, 1, 2), 0.0);
        assert_eq!(max_scale(0.0, 3, 4), 0.0);
        assert!((max_scale(0.75, 1, 2) - 0.25).abs() < EPSILON);
    }

    #[test]
    fn test_divide_scale_staggers_sub_elements() {
        // Format: (scale, i, n, expected)
        let tests = vec![
            (0.0, 0, 2, 0.0),
            (0.25, 0, 2, 0.5),
            (0.5, 0, 2, 1.0),
            (0.5, 1, 2, 0.0),
            (0.75, 1, 2, 0.5),
            (1.0, 1, 2, 1.0),
            (0.375, 1, 4, 0.5),
            (1.0, 3, 4, 1.0),
        ];

        for (scale, i, n, expected) in tests {
            let result = divide_scale(scale, i, n);
            assert!(
                (result - expected).abs() < EPSILON,
                "Failed for scale:{}, i:{}, n:{} -> {}",
                scale,
                i,
                n,
                result
            );
        }
    }

    #[test]
    fn test_scale_factor_switches_at_divider() {
        assert_eq!(scale_factor(0.0), 0.0);
        assert_eq!(scale_factor(0.5), 0.0);
        assert_eq!(scale_factor(0.51), 1.0);
        assert_eq!(scale_factor(1.0), 1.0);
        assert_eq!(scale_factor(-0.01), -1.0);
    }

    #[test]
    fn test_update_value_slows_past_midpoint() {
        let early = update_value(0.2, 1.0, 1.0, 4.0);
        let late = update_value(0.8, 1.0, 1.0, 4.0);
        assert!((early - 0.05).abs() < EPSILON);
        assert!((late - 0.0125).abs() < EPSILON);

        let reverse = update_value(0.8, -1.0, 1.0, 4.0);
        assert!((reverse + 0.0125).abs() < EPSILON);
        assert_eq!(update_value(0.3, 0.0, 1.0, 4.0), 0.0);
    }

    proptest! {
        #[test]
        fn divide_scale_is_monotone(a in 0.0f32..=1.0, b in 0.0f32..=1.0, n in 1usize..8, seed in 0usize..8) {
            let i = seed % n;
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(divide_scale(lo, i, n) <= divide_scale(hi, i, n));
        }

        #[test]
        fn divide_scale_is_zero_before_its_window(t in 0.0f32..=1.0, n in 1usize..8, seed in 0usize..8) {
            let i = seed % n;
            let scale = i as f32 / n as f32 * t;
            prop_assert_eq!(divide_scale(scale, i, n), 0.0);
        }

        #[test]
        fn divide_scale_is_one_after_its_window(t in 0.0f32..=1.0, n in 1usize..8, seed in 0usize..8) {
            let i = seed % n;
            let start = (i + 1) as f32 / n as f32;
            let scale = start + (1.0 - start) * t;
            prop_assert!((divide_scale(scale, i, n) - 1.0).abs() < EPSILON);
        }

        #[test]
        fn max_scale_is_never_negative(scale in 0.0f32..=2.0, n in 1usize..8, seed in 0usize..8) {
            prop_assert!(max_scale(scale, seed % n, n) >= 0.0);
        }
    }
}
