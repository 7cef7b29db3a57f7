use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::FovAxis;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection and initial pose.
pub struct CameraOptions {
    /// Field of view in degrees.
    #[schemars(title = "Field of View", range(min = 10.0, max = 120.0), extend("step" = 1.0))]
    pub fov_degrees: f64,
    /// Viewport axis the field of view spans.
    #[schemars(title = "FOV Axis")]
    pub fov_axis: FovAxis,
    /// Initial distance from the orbit origin.
    #[schemars(skip)]
    pub distance: f64,
    /// Near clipping plane distance until a fit sets one.
    #[schemars(skip)]
    pub znear: f64,
    /// Far clipping plane distance until a fit sets one.
    #[schemars(skip)]
    pub zfar: f64,
    /// Rotate with the arcball instead of the turntable.
    #[schemars(title = "Arcball Rotation")]
    pub arcball_enabled: bool,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fov_degrees: 30.0,
            fov_axis: FovAxis::Vertical,
            distance: 10.0,
            znear: 0.1,
            zfar: 10_000.0,
            arcball_enabled: false,
        }
    }
}
