//! Easing curves mapping progress in [0, 1] to eased progress in [0, 1].

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EasingType {
    /// Jump straight to the end value
    None,
    Linear,
    #[default]
    Cubic,
    Quintic,
    /// Exponential ease-out
    EaseOut,
}

impl EasingType {
    /// Apply the curve to a progress value; input is clamped to [0, 1]
    #[inline]
    pub fn apply(&self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            EasingType::None => {
                if t < 1.0 {
                    0.0
                } else {
                    1.0
                }
            }
            EasingType::Linear => t,
            EasingType::Cubic => 1.0 - (1.0 - t).powi(3),
            EasingType::Quintic => 1.0 - (1.0 - t).powi(5),
            EasingType::EaseOut => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2.0_f64.powf(-10.0 * t)
                }
            }
        }
    }
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURVES: [EasingType; 4] = [
        EasingType::Linear,
        EasingType::Cubic,
        EasingType::Quintic,
        EasingType::EaseOut,
    ];

    #[test]
    fn test_endpoints() {
        for easing in CURVES {
            assert!(easing.apply(0.0).abs() < 0.001, "{:?} at t=0", easing);
            assert!((easing.apply(1.0) - 1.0).abs() < 0.001, "{:?} at t=1", easing);
        }
        assert_eq!(EasingType::None.apply(0.99), 0.0);
        assert_eq!(EasingType::None.apply(1.0), 1.0);
    }

    #[test]
    fn test_monotonic() {
        for easing in CURVES {
            let mut prev = 0.0;
            for i in 0..=20 {
                let v = easing.apply(i as f64 / 20.0);
                assert!(v >= prev, "{:?} not monotonic at step {}", easing, i);
                prev = v;
            }
        }
    }

    #[test]
    fn test_out_of_range_input_is_clamped() {
        assert_eq!(EasingType::Cubic.apply(-3.0), 0.0);
        assert_eq!(EasingType::Cubic.apply(7.0), 1.0);
        assert_eq!(EasingType::Linear.apply(f64::NAN), 0.0);
    }

    #[test]
    fn test_lerp() {
        assert!((lerp(10.0, 20.0, 0.5) - 15.0).abs() < f64::EPSILON);
        assert!((lerp(20.0, 10.0, 1.0) - 10.0).abs() < f64::EPSILON);
    }
}
