//! Easing functions for camera animation interpolation.
//!
//! Used by the fit-to-bounds animation to shape how origin and distance
//! approach their targets. Every curve is monotonic on `[0, 1]` and maps
//! `0 → 0` and `1 → 1`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Easing function variants for animation curves.
#[derive(
    Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(tag = "curve", rename_all = "snake_case")]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    #[default]
    Linear,
    /// Quadratic ease-in (slow start, fast end).
    QuadraticIn,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
    /// Smoothstep: slow start and slow end.
    SmoothStep,
    /// Cubic Hermite interpolation with configurable control points.
    /// Formula: c1·3t(1-t)² + c2·3(1-t)t² + t³
    CubicHermite {
        /// First inner control point.
        c1: f64,
        /// Second inner control point.
        c2: f64,
    },
}

impl EasingFunction {
    /// Natural ease-out used by animated fits when no curve is configured.
    pub const EASE_OUT: EasingFunction =
        EasingFunction::CubicHermite { c1: 0.33, c2: 1.0 };

    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0].
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

        match self {
            EasingFunction::Linear => t,
            EasingFunction::QuadraticIn => t * t,
            EasingFunction::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            EasingFunction::SmoothStep => t * t * (3.0 - 2.0 * t),
            EasingFunction::CubicHermite { c1, c2 } => {
                let omt = 1.0 - t;
                c1 * 3.0 * t * omt * omt + c2 * 3.0 * omt * t * t + t * t * t
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_endpoints() {
        let linear = EasingFunction::Linear;
        assert_eq!(linear.evaluate(0.0), 0.0);
        assert_eq!(linear.evaluate(0.5), 0.5);
        assert_eq!(linear.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_cubic_hermite_endpoints() {
        let hermite = EasingFunction::EASE_OUT;
        assert_eq!(hermite.evaluate(0.0), 0.0);
        assert!((hermite.evaluate(1.0) - 1.0).abs() < 1e-12);
        assert!(hermite.evaluate(0.25) > 0.25);
    }

    #[test]
    fn test_smoothstep_is_symmetric() {
        let s = EasingFunction::SmoothStep;
        assert_eq!(s.evaluate(0.5), 0.5);
        assert!((s.evaluate(0.2) + s.evaluate(0.8) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_input_clamping() {
        let quad_out = EasingFunction::QuadraticOut;
        assert_eq!(quad_out.evaluate(-0.5), 0.0);
        assert_eq!(quad_out.evaluate(1.5), 1.0);
        assert_eq!(quad_out.evaluate(f64::NAN), 0.0);
        assert_eq!(EasingFunction::QuadraticIn.evaluate(0.5), 0.25);
    }

    #[test]
    fn test_curves_are_monotonic() {
        let curves = [
            EasingFunction::Linear,
            EasingFunction::QuadraticIn,
            EasingFunction::QuadraticOut,
            EasingFunction::SmoothStep,
            EasingFunction::EASE_OUT,
        ];
        for curve in curves {
            let mut prev = curve.evaluate(0.0);
            for i in 1..=100 {
                let next = curve.evaluate(f64::from(i) / 100.0);
                assert!(next >= prev - 1e-12, "{curve:?} not monotonic");
                prev = next;
            }
        }
    }
}
