//! Perspective projection from scene space to raster space.

use glam::{DAffine3, DVec2, DVec3};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::NavError;
use crate::math::horizontal_fov_radians;

/// Below this `|det|` a view transform is treated as non-invertible.
const DETERMINANT_EPSILON: f64 = 1e-12;

/// Below this camera-space depth a point has no defined projection.
const DEPTH_EPSILON: f64 = 1e-12;

/// Which viewport axis the configured field of view spans.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum FovAxis {
    /// FOV spans the viewport height; the horizontal FOV follows the
    /// aspect ratio.
    #[default]
    Vertical,
    /// FOV spans the viewport width and is used as-is.
    Horizontal,
}

/// Viewport size and field of view supplied by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportMetrics {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
    /// Field of view in degrees.
    pub fov_degrees: f64,
    /// Axis the field of view spans.
    pub fov_axis: FovAxis,
}

impl ViewportMetrics {
    /// Viewport with a vertical field of view.
    #[must_use]
    pub fn new(width: f64, height: f64, fov_degrees: f64) -> Self {
        Self {
            width,
            height,
            fov_degrees,
            fov_axis: FovAxis::Vertical,
        }
    }

    /// Same viewport with the field of view spanning `axis`.
    #[must_use]
    pub fn with_fov_axis(mut self, axis: FovAxis) -> Self {
        self.fov_axis = axis;
        self
    }

    /// Check that the dimensions are positive and the FOV lies in
    /// `(0, 180)` degrees.
    pub fn validate(&self) -> Result<(), NavError> {
        let size_ok = self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0;
        let fov_ok = self.fov_degrees > 0.0 && self.fov_degrees < 180.0;
        if size_ok && fov_ok {
            Ok(())
        } else {
            Err(NavError::InvalidViewport {
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Viewport center in pixels.
    #[must_use]
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Horizontal field of view in radians.
    #[must_use]
    pub fn horizontal_fov_radians(&self) -> f64 {
        let fov = self.fov_degrees.to_radians();
        match self.fov_axis {
            FovAxis::Vertical => {
                horizontal_fov_radians(fov, self.width / self.height)
            }
            FovAxis::Horizontal => fov,
        }
    }

    /// Vertical field of view in radians.
    #[must_use]
    pub fn vertical_fov_radians(&self) -> f64 {
        let fov = self.fov_degrees.to_radians();
        match self.fov_axis {
            FovAxis::Vertical => fov,
            FovAxis::Horizontal => {
                horizontal_fov_radians(fov, self.height / self.width)
            }
        }
    }

    /// Pixels per unit of `x / z` in camera space,
    /// `(width / 2) / tan(hfov / 2)`.
    #[must_use]
    pub fn focal_coefficient(&self) -> f64 {
        (self.width / 2.0) / (self.horizontal_fov_radians() / 2.0).tan()
    }
}

/// Scene-to-raster mapping for one view transform and viewport.
///
/// Built once per recomputation. If the view transform cannot be inverted
/// every projection returns the fallback (`(0, 0)` and radius `0`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionTransform {
    inverse_view: Option<DAffine3>,
    center: DVec2,
    focal: f64,
}

impl ProjectionTransform {
    /// Projection for a camera-to-world `view` transform.
    #[must_use]
    pub fn new(view: &DAffine3, viewport: &ViewportMetrics) -> Self {
        let det = view.matrix3.determinant();
        let inverse_view = if det.is_finite() && det.abs() > DETERMINANT_EPSILON
        {
            Some(view.inverse())
        } else {
            log::warn!("view transform is not invertible (det = {det})");
            None
        };
        Self {
            inverse_view,
            center: viewport.center(),
            focal: viewport.focal_coefficient(),
        }
    }

    /// Whether the view transform could be inverted.
    #[must_use]
    pub fn is_invertible(&self) -> bool {
        self.inverse_view.is_some()
    }

    /// Camera-space position of a scene point.
    #[must_use]
    pub fn to_camera_space(&self, point: DVec3) -> Option<DVec3> {
        self.inverse_view.map(|inv| inv.transform_point3(point))
    }

    /// Raster position of a scene point.
    ///
    /// Returns `(0, 0)` if the view is not invertible or the point lies in
    /// the camera plane.
    #[must_use]
    pub fn transform(&self, point: DVec3) -> DVec2 {
        match self.to_camera_space(point) {
            Some(p) if p.z.abs() > DEPTH_EPSILON => {
                DVec2::new(p.x, p.y) * (self.focal / p.z) + self.center
            }
            _ => DVec2::ZERO,
        }
    }

    /// Approximate raster radius of a sphere, `|focal · radius / z|`.
    ///
    /// First-order only: off-axis spheres project to ellipses this does
    /// not account for. Falls back to `0` like [`Self::transform`].
    #[must_use]
    pub fn transform_radius(&self, point: DVec3, radius: f64) -> f64 {
        match self.to_camera_space(point) {
            Some(p) if p.z.abs() > DEPTH_EPSILON => {
                (self.focal * radius / p.z).abs()
            }
            _ => 0.0,
        }
    }
}
