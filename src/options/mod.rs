//! Camera and navigation options with TOML preset support.
//!
//! Options serialize to/from TOML so hosts can keep navigation presets
//! next to their other settings, and export a JSON schema for property
//! panels.

mod camera;
mod navigation;

use std::path::Path;

pub use camera::CameraOptions;
pub use navigation::{default_bindings, NavigationOptions};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::NavError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera projection and initial pose.
    pub camera: CameraOptions,
    /// Navigation sensitivities and bindings.
    pub navigation: NavigationOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml(text: &str) -> Result<Self, NavError> {
        toml::from_str(text).map_err(|e| NavError::OptionsParse(e.to_string()))
    }

    /// Serialize to pretty-printed TOML.
    pub fn to_toml(&self) -> Result<String, NavError> {
        toml::to_string_pretty(self)
            .map_err(|e| NavError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, NavError> {
        let content = std::fs::read_to_string(path).map_err(NavError::Io)?;
        Self::from_toml(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), NavError> {
        let content = self.to_toml()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(NavError::Io)?;
        }
        std::fs::write(path, content).map_err(NavError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::FovAxis;
    use crate::input::{Modifiers, MouseButton};
    use crate::navigation::{NavigationBehavior, Response};
    use crate::util::easing::EasingFunction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = opts.to_toml().unwrap();
        let parsed = Options::from_toml(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[camera]
fov_degrees = 45.0
fov_axis = "horizontal"
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.camera.fov_degrees, 45.0);
        assert_eq!(opts.camera.fov_axis, FovAxis::Horizontal);
        // Everything else should be default
        assert_eq!(opts.camera.distance, 10.0);
        assert!(!opts.camera.arcball_enabled);
        assert_eq!(opts.navigation, NavigationOptions::default());
    }

    #[test]
    fn default_bindings_match_pane_wiring() {
        let bindings = Options::default().navigation.bindings;
        assert_eq!(
            bindings,
            vec![
                NavigationBehavior::drag(
                    MouseButton::Primary,
                    Response::Rotate
                ),
                NavigationBehavior::drag(MouseButton::Secondary, Response::Pan),
                NavigationBehavior::drag(MouseButton::Middle, Response::Zoom),
                NavigationBehavior::scroll(Response::Zoom),
            ]
        );
    }

    #[test]
    fn custom_bindings_and_easing_parse() {
        let toml_str = r#"
[navigation]
fit_animation_ms = 250

[navigation.fit_easing]
curve = "smooth_step"

[[navigation.bindings]]
response = "pan"

[navigation.bindings.input]
kind = "drag"
button = "primary"
modifiers = { shift = true }

[[navigation.bindings]]
response = "zoom"

[navigation.bindings.input]
kind = "scroll"
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.navigation.fit_animation_ms, 250);
        assert_eq!(opts.navigation.fit_easing, EasingFunction::SmoothStep);
        assert_eq!(
            opts.navigation.bindings,
            vec![
                NavigationBehavior::drag(MouseButton::Primary, Response::Pan)
                    .with_modifiers(Modifiers::SHIFT),
                NavigationBehavior::scroll(Response::Zoom),
            ]
        );
    }

    #[test]
    fn malformed_toml_is_reported() {
        let err = Options::from_toml("[camera]\nfov_degrees = \"wide\"\n");
        assert!(matches!(err, Err(NavError::OptionsParse(_))));
    }

    #[test]
    fn save_and_load_preset() {
        let dir = std::env::temp_dir()
            .join(format!("orbitnav-options-{}", std::process::id()));
        let path = dir.join("preset.toml");
        let mut opts = Options::default();
        opts.camera.arcball_enabled = true;
        opts.navigation.rotation_coefficient = 0.25;
        opts.save(&path).unwrap();
        let loaded = Options::load(&path).unwrap();
        std::fs::remove_dir_all(&dir).unwrap();
        assert_eq!(opts, loaded);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Options::load(Path::new("/nonexistent/orbitnav.toml"));
        assert!(matches!(err, Err(NavError::Io(_))));
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("camera"));
        assert!(props.contains_key("navigation"));

        // Exposed fields present, skipped ones absent
        let camera = &props["camera"]["properties"];
        assert!(camera.get("fov_degrees").is_some());
        assert!(camera.get("arcball_enabled").is_some());
        assert!(camera.get("znear").is_none());

        let navigation = &props["navigation"]["properties"];
        assert!(navigation.get("rotation_coefficient").is_some());
        assert!(navigation.get("bindings").is_none());
    }
}
