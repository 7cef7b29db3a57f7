//! Fit-to-bounds: framing an axis-aligned box and animating towards it.

use glam::DVec3;
use web_time::Duration;

use crate::error::NavError;
use crate::util::easing::EasingFunction;

/// Extra room left around the fitted bounds.
const FIT_PADDING: f64 = 1.1;
/// Near clip as a fraction of the unpadded fit distance.
const NEAR_FACTOR: f64 = 0.05;
/// Far clip as a multiple of the unpadded fit distance.
const FAR_FACTOR: f64 = 10.0;

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Minimum corner.
    pub min: DVec3,
    /// Maximum corner.
    pub max: DVec3,
}

impl Bounds {
    /// Box spanning `min` to `max`.
    #[must_use]
    pub fn new(min: DVec3, max: DVec3) -> Self {
        Self { min, max }
    }

    /// Smallest box containing every point, or `None` for no points.
    #[must_use]
    pub fn from_points(points: &[DVec3]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bounds = Self::new(*first, *first);
        for p in rest {
            bounds.min = bounds.min.min(*p);
            bounds.max = bounds.max.max(*p);
        }
        Some(bounds)
    }

    /// Check that both corners are finite, `min <= max` on every axis and
    /// the box has a positive extent along at least one axis.
    pub fn validate(&self) -> Result<(), NavError> {
        if self.min.is_finite()
            && self.max.is_finite()
            && self.min.cmple(self.max).all()
            && self.radius() > 0.0
        {
            Ok(())
        } else {
            Err(NavError::InvalidBounds)
        }
    }

    /// Midpoint of the box.
    #[must_use]
    pub fn center(&self) -> DVec3 {
        (self.min + self.max) / 2.0
    }

    /// Size along each axis.
    #[must_use]
    pub fn extent(&self) -> DVec3 {
        self.max - self.min
    }

    /// Half of the largest extent.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.extent().max_element() / 2.0
    }
}

/// Near and far clip distances.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipPlanes {
    /// Near clip distance.
    pub near: f64,
    /// Far clip distance.
    pub far: f64,
}

/// Pose and clip planes that frame a [`Bounds`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitTarget {
    /// New orbit origin, the bounds center.
    pub origin: DVec3,
    /// New orbit distance, padded.
    pub distance: f64,
    /// Clip planes derived from the unpadded distance.
    pub clip: ClipPlanes,
}

/// Frame `bounds` with a vertical field of view of `fov_radians`.
///
/// `distance = radius / tan(fov / 2)`; the pose uses `1.1 · distance`, the
/// clip planes `0.05 · distance` and `10 · distance`.
#[must_use]
pub fn fit_target(bounds: &Bounds, fov_radians: f64) -> FitTarget {
    let distance = bounds.radius() / (fov_radians / 2.0).tan();
    FitTarget {
        origin: bounds.center(),
        distance: FIT_PADDING * distance,
        clip: ClipPlanes {
            near: NEAR_FACTOR * distance,
            far: FAR_FACTOR * distance,
        },
    }
}

/// An in-progress fit, interpolating origin and distance over time.
#[derive(Debug, Clone, PartialEq)]
pub struct FitAnimation {
    from_origin: DVec3,
    from_distance: f64,
    to_origin: DVec3,
    to_distance: f64,
    duration: Duration,
    elapsed: Duration,
    easing: EasingFunction,
}

impl FitAnimation {
    /// Animation from the current origin and distance to `target`.
    #[must_use]
    pub fn new(
        from_origin: DVec3,
        from_distance: f64,
        target: &FitTarget,
        duration: Duration,
        easing: EasingFunction,
    ) -> Self {
        Self {
            from_origin,
            from_distance,
            to_origin: target.origin,
            to_distance: target.distance,
            duration,
            elapsed: Duration::ZERO,
            easing,
        }
    }

    /// Advance by `dt` and return the interpolated `(origin, distance)`.
    pub fn advance(&mut self, dt: Duration) -> (DVec3, f64) {
        self.elapsed = self.elapsed.saturating_add(dt).min(self.duration);
        self.sample()
    }

    /// Interpolated `(origin, distance)` at the current elapsed time.
    #[must_use]
    pub fn sample(&self) -> (DVec3, f64) {
        let t = if self.duration.is_zero() {
            1.0
        } else {
            self.elapsed.as_secs_f64() / self.duration.as_secs_f64()
        };
        let s = self.easing.evaluate(t);
        (
            self.from_origin.lerp(self.to_origin, s),
            self.from_distance + (self.to_distance - self.from_distance) * s,
        )
    }

    /// Whether the full duration has elapsed.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Final origin and distance.
    #[must_use]
    pub fn target(&self) -> (DVec3, f64) {
        (self.to_origin, self.to_distance)
    }
}
