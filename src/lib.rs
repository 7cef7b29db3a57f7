// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Orbital camera navigation for 3D viewers.
//!
//! Orbitnav turns pointer input into camera motion around a look-at point
//! and projects scene points into raster space for overlays and hit
//! testing. Rotation runs either as an arcball or as a turntable; pan and
//! zoom scale with distance and field of view so motion tracks the cursor.
//!
//! # Key entry points
//!
//! - [`camera::OrbitalCameraRig`] - attaches to a viewport, owns the pose
//!   and dispatches input to the bound behaviors
//! - [`navigation`] - behavior bindings and the rotate/pan/zoom
//!   controllers
//! - [`options::Options`] - TOML presets for camera and navigation
//! - [`math`] - axis-angle and turntable rotation types
//!
//! # Architecture
//!
//! The host feeds [`input::InputEvent`]s into the rig. An
//! [`input::InputProcessor`] reduces them to gestures, the
//! [`navigation::NavigationBehaviorRegistry`] picks the controller whose
//! binding matches, and the controller edits the
//! [`camera::CameraPose`]. Every edit recomputes the view transforms and
//! the [`camera::ProjectionTransform`] before listeners run, so a listener
//! always observes a consistent camera.

pub mod camera;
pub mod error;
pub mod input;
pub mod math;
pub mod navigation;
pub mod options;
pub mod util;
