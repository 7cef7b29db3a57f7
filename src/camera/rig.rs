//! The orbital camera rig.
//!
//! [`OrbitalCameraRig`] is the single owner of the camera state. Every
//! mutating call (input event, setter, fit step) updates the pose and then
//! recomputes, in order, the pose transforms, the projection, and finally
//! notifies listeners. Nothing observes a half-updated rig.

use std::fmt;

use glam::{DAffine3, DVec2, DVec3};
use web_time::Duration;

use super::fit::{fit_target, Bounds, ClipPlanes, FitAnimation};
use super::pose::{CameraPose, CameraTransforms, RotationState};
use super::projection::{FovAxis, ProjectionTransform, ViewportMetrics};
use crate::error::NavError;
use crate::input::{Gesture, InputEvent, InputProcessor};
use crate::math::{AxisAngle, Turntable};
use crate::navigation::{
    Coefficients, InputCondition, InteractionSession, NavContext,
    NavigationBehavior, NavigationBehaviorRegistry, RotationMode,
};
use crate::options::Options;
use crate::util::easing::EasingFunction;

/// Handle returned by [`OrbitalCameraRig::add_listener`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&OrbitalCameraRig)>;

/// Orbit camera driven by pointer input.
///
/// # Example
///
/// ```
/// use orbitnav::camera::{OrbitalCameraRig, ViewportMetrics};
/// use orbitnav::input::{InputEvent, MouseButton};
/// use orbitnav::options::Options;
///
/// let mut rig = OrbitalCameraRig::from_options(&Options::default());
/// rig.attach(ViewportMetrics::new(800.0, 600.0, 30.0))?;
/// let _ = rig.handle_event(InputEvent::CursorMoved { x: 400.0, y: 300.0 });
/// let _ = rig.handle_event(InputEvent::MouseButton {
///     button: MouseButton::Primary,
///     pressed: true,
/// });
/// let _ = rig.handle_event(InputEvent::CursorMoved { x: 420.0, y: 300.0 });
/// assert_ne!(rig.rotation().axis_angle().angle_degrees(), 0.0);
/// # Ok::<(), orbitnav::error::NavError>(())
/// ```
pub struct OrbitalCameraRig {
    pose: CameraPose,
    viewport: ViewportMetrics,
    attached: bool,
    transforms: CameraTransforms,
    projection: Option<ProjectionTransform>,
    clip: ClipPlanes,
    registry: NavigationBehaviorRegistry,
    input: InputProcessor,
    active: Option<InteractionSession>,
    fit: Option<FitAnimation>,
    fit_duration: Duration,
    fit_easing: EasingFunction,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u64,
}

impl OrbitalCameraRig {
    /// Detached rig at `distance` from the world origin, with no behaviors
    /// registered and turntable rotation.
    #[must_use]
    pub fn new(distance: f64, fov_degrees: f64) -> Self {
        let pose = CameraPose::new(DVec3::ZERO, distance);
        Self {
            pose,
            viewport: ViewportMetrics::new(1.0, 1.0, fov_degrees),
            attached: false,
            transforms: CameraTransforms::from_pose(&pose),
            projection: None,
            clip: ClipPlanes {
                near: 0.1,
                far: 10_000.0,
            },
            registry: NavigationBehaviorRegistry::default(),
            input: InputProcessor::new(),
            active: None,
            fit: None,
            fit_duration: Duration::ZERO,
            fit_easing: EasingFunction::Linear,
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    /// Detached rig configured from `options`, with its bindings
    /// registered. Bindings that have no controller are skipped.
    #[must_use]
    pub fn from_options(options: &Options) -> Self {
        let camera = &options.camera;
        let navigation = &options.navigation;
        let mut rig = Self::new(camera.distance, camera.fov_degrees);
        rig.viewport.fov_axis = camera.fov_axis;
        rig.clip = ClipPlanes {
            near: camera.znear,
            far: camera.zfar,
        };
        let mode = if camera.arcball_enabled {
            RotationMode::Arcball
        } else {
            RotationMode::Turntable
        };
        rig.registry =
            NavigationBehaviorRegistry::new(mode, navigation.coefficients());
        for behavior in &navigation.bindings {
            if let Err(e) = rig.registry.add(*behavior) {
                log::warn!("skipping binding {behavior}: {e}");
            }
        }
        rig.fit_duration = Duration::from_millis(navigation.fit_animation_ms);
        rig.fit_easing = navigation.fit_easing;
        rig.transforms = CameraTransforms::from_pose(&rig.pose);
        rig
    }

    // -- Host attachment --

    /// Attach to a viewport host. Events are ignored and no projection is
    /// available until the rig is attached.
    pub fn attach(
        &mut self,
        viewport: ViewportMetrics,
    ) -> Result<(), NavError> {
        if self.attached {
            log::warn!("attach called on an attached camera rig");
            return Err(NavError::AlreadyAttached);
        }
        if let Err(e) = viewport.validate() {
            log::warn!("rejecting attach: {e}");
            return Err(e);
        }
        self.viewport = viewport;
        self.attached = true;
        // a button pressed while detached never started a gesture
        self.input.release();
        log::debug!(
            "camera rig attached ({}x{})",
            viewport.width,
            viewport.height
        );
        self.commit();
        Ok(())
    }

    /// Detach from the viewport host, dropping any gesture in progress.
    pub fn detach(&mut self) -> Result<(), NavError> {
        if !self.attached {
            log::warn!("detach called on a detached camera rig");
            return Err(NavError::NotAttached);
        }
        self.attached = false;
        self.end_gesture();
        self.input.release();
        log::debug!("camera rig detached");
        self.commit();
        Ok(())
    }

    /// Whether a viewport host is attached.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Resize the viewport.
    pub fn set_viewport_size(
        &mut self,
        width: f64,
        height: f64,
    ) -> Result<(), NavError> {
        self.update_viewport(ViewportMetrics {
            width,
            height,
            ..self.viewport
        })
    }

    /// Change the field of view and the axis it spans.
    pub fn set_field_of_view(
        &mut self,
        fov_degrees: f64,
        axis: FovAxis,
    ) -> Result<(), NavError> {
        self.update_viewport(ViewportMetrics {
            fov_degrees,
            fov_axis: axis,
            ..self.viewport
        })
    }

    fn update_viewport(
        &mut self,
        viewport: ViewportMetrics,
    ) -> Result<(), NavError> {
        if let Err(e) = viewport.validate() {
            log::warn!("rejecting viewport change: {e}");
            return Err(e);
        }
        self.viewport = viewport;
        self.commit();
        Ok(())
    }

    /// Current viewport metrics.
    #[must_use]
    pub fn viewport(&self) -> &ViewportMetrics {
        &self.viewport
    }

    // -- Pose --

    /// Current pose.
    #[must_use]
    pub fn pose(&self) -> &CameraPose {
        &self.pose
    }

    /// Point the camera orbits around.
    #[must_use]
    pub fn origin(&self) -> DVec3 {
        self.pose.origin()
    }

    /// Distance from the camera to the origin.
    #[must_use]
    pub fn distance(&self) -> f64 {
        self.pose.distance()
    }

    /// Current rotation.
    #[must_use]
    pub fn rotation(&self) -> RotationState {
        self.pose.rotation()
    }

    /// Move the orbit origin.
    pub fn set_origin(&mut self, origin: DVec3) {
        self.pose.set_origin(origin);
        self.commit();
    }

    /// Set the orbit distance (clamped positive).
    pub fn set_distance(&mut self, distance: f64) {
        self.pose.set_distance(distance);
        self.commit();
    }

    /// Set the rotation from an axis-angle.
    ///
    /// With turntable rotation active the rotation is stored as the closest
    /// turntable angles, so the view shown is the one the next drag starts
    /// from. Near the poles this can differ from `rotation`.
    pub fn set_rotation(&mut self, rotation: AxisAngle) {
        let state = match self.registry.rotation_mode() {
            RotationMode::Arcball => RotationState::AxisAngle(rotation),
            RotationMode::Turntable => {
                RotationState::Turntable(Turntable::closest_to(&rotation))
            }
        };
        self.pose.set_rotation(state);
        self.commit();
    }

    /// Set the rotation from turntable angles.
    pub fn set_turntable(&mut self, turntable: Turntable) {
        self.pose.set_rotation(RotationState::Turntable(turntable));
        self.commit();
    }

    // -- Behaviors --

    /// Whether rotate-drag behaviors use the arcball.
    #[must_use]
    pub fn arcball_enabled(&self) -> bool {
        self.registry.rotation_mode() == RotationMode::Arcball
    }

    /// Switch rotate-drag behaviors between arcball and turntable.
    ///
    /// The rotation is carried over; switching to the turntable snaps to
    /// the closest turntable angles, which may differ visibly near the
    /// poles.
    pub fn set_arcball_enabled(&mut self, enabled: bool) {
        let mode = if enabled {
            RotationMode::Arcball
        } else {
            RotationMode::Turntable
        };
        if mode == self.registry.rotation_mode() {
            return;
        }
        self.end_gesture();
        self.registry.set_rotation_mode(mode);
        let rotation = self.pose.rotation();
        let converted = match mode {
            RotationMode::Arcball => {
                RotationState::AxisAngle(rotation.axis_angle())
            }
            RotationMode::Turntable => {
                RotationState::Turntable(rotation.to_turntable())
            }
        };
        log::debug!("rotation mode switched to {mode:?}");
        self.pose.set_rotation(converted);
        self.commit();
    }

    /// Register a behavior, replacing any with the same input condition.
    /// Returns the replaced behavior.
    pub fn add_behavior(
        &mut self,
        behavior: NavigationBehavior,
    ) -> Result<Option<NavigationBehavior>, NavError> {
        let replaced = self.registry.add(behavior)?;
        if self.active.is_some_and(|s| s.condition == behavior.input) {
            self.end_gesture();
        }
        Ok(replaced)
    }

    /// Unregister the behavior matching `behavior`'s input condition.
    pub fn remove_behavior(
        &mut self,
        behavior: &NavigationBehavior,
    ) -> Option<NavigationBehavior> {
        let removed = self.registry.remove(behavior)?;
        if self.active.is_some_and(|s| s.condition == removed.input) {
            self.end_gesture();
        }
        Some(removed)
    }

    /// Unregister every behavior.
    pub fn clear_behaviors(&mut self) {
        self.end_gesture();
        self.registry.clear();
    }

    /// Registered behaviors in insertion order.
    #[must_use]
    pub fn behaviors(&self) -> Vec<NavigationBehavior> {
        self.registry.behaviors().copied().collect()
    }

    /// Replace the navigation coefficients.
    pub fn set_coefficients(&mut self, coefficients: Coefficients) {
        self.end_gesture();
        self.registry.set_coefficients(coefficients);
    }

    // -- Fit to bounds --

    /// Frame `bounds` using the configured fit animation.
    pub fn encompass_bounds(
        &mut self,
        bounds: &Bounds,
    ) -> Result<ClipPlanes, NavError> {
        self.encompass_bounds_over(bounds, self.fit_duration)
    }

    /// Frame `bounds`, animating over `duration` (zero snaps).
    ///
    /// Clip planes are updated immediately. Returns them.
    pub fn encompass_bounds_over(
        &mut self,
        bounds: &Bounds,
        duration: Duration,
    ) -> Result<ClipPlanes, NavError> {
        if let Err(e) = bounds.validate() {
            log::warn!("cannot fit {bounds:?}: {e}");
            return Err(e);
        }
        let target = fit_target(bounds, self.viewport.vertical_fov_radians());
        log::debug!(
            "fit: origin {:?}, distance {:.3} over {duration:?}",
            target.origin,
            target.distance
        );
        self.clip = target.clip;
        if duration.is_zero() {
            self.fit = None;
            self.pose.set_origin(target.origin);
            self.pose.set_distance(target.distance);
        } else {
            self.fit = Some(FitAnimation::new(
                self.pose.origin(),
                self.pose.distance(),
                &target,
                duration,
                self.fit_easing,
            ));
        }
        self.commit();
        Ok(target.clip)
    }

    /// Advance a running fit animation by `dt`. Returns whether the pose
    /// changed.
    pub fn advance(&mut self, dt: Duration) -> bool {
        let Some(anim) = self.fit.as_mut() else {
            return false;
        };
        let (origin, distance) = anim.advance(dt);
        if anim.is_finished() {
            self.fit = None;
        }
        self.pose.set_origin(origin);
        self.pose.set_distance(distance);
        self.commit();
        true
    }

    /// Whether a fit animation is running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.fit.is_some()
    }

    /// Stop a running fit animation where it is. Returns whether one was
    /// running.
    pub fn cancel_animation(&mut self) -> bool {
        let cancelled = self.fit.take().is_some();
        if cancelled {
            log::debug!("fit animation cancelled");
        }
        cancelled
    }

    /// Set the duration and easing used by [`Self::encompass_bounds`].
    pub fn set_fit_animation(
        &mut self,
        duration: Duration,
        easing: EasingFunction,
    ) {
        self.fit_duration = duration;
        self.fit_easing = easing;
    }

    /// Clip planes from the last fit, or the configured ones.
    #[must_use]
    pub fn clip_planes(&self) -> ClipPlanes {
        self.clip
    }

    // -- Input --

    /// Feed a raw input event. Returns whether the camera moved.
    ///
    /// Cursor and modifier state is tracked while detached, but no gesture
    /// is dispatched until the rig is attached.
    pub fn handle_event(&mut self, event: InputEvent) -> bool {
        let gesture = self.input.handle_event(event);
        if !self.attached {
            log::trace!("ignoring {event:?} while detached");
            return false;
        }
        match gesture {
            Some(Gesture::Begin {
                button,
                modifiers,
                point,
            }) => {
                self.begin_gesture(
                    InputCondition::Drag { button, modifiers },
                    point,
                );
                false
            }
            Some(Gesture::Drag { point, delta }) => self.drag(point, delta),
            Some(Gesture::End) => {
                self.end_gesture();
                false
            }
            Some(Gesture::Scroll { delta, modifiers }) => {
                self.scroll(InputCondition::Scroll { modifiers }, delta)
            }
            None => false,
        }
    }

    fn begin_gesture(&mut self, condition: InputCondition, point: DVec2) {
        self.end_gesture();
        if self.registry.behavior_for(&condition).is_none() {
            return;
        }
        let _ = self.cancel_animation();
        let Some(controller) = self.registry.controller_mut(&condition) else {
            return;
        };
        let session =
            InteractionSession::new(condition, point, self.pose.rotation());
        controller.begin(
            &session,
            &NavContext {
                pose: &mut self.pose,
                viewport: &self.viewport,
                transforms: &self.transforms,
            },
        );
        log::trace!("gesture started: {condition:?} at {point:?}");
        self.active = Some(session);
    }

    fn drag(&mut self, point: DVec2, delta: DVec2) -> bool {
        let Some(mut session) = self.active else {
            return false;
        };
        let Some(controller) =
            self.registry.controller_mut(&session.condition)
        else {
            self.active = None;
            return false;
        };
        let changed = controller.drag(
            &session,
            point,
            delta,
            &mut NavContext {
                pose: &mut self.pose,
                viewport: &self.viewport,
                transforms: &self.transforms,
            },
        );
        session.last_point = point;
        self.active = Some(session);
        if changed {
            self.commit();
        }
        changed
    }

    fn scroll(&mut self, condition: InputCondition, delta: DVec2) -> bool {
        if self.registry.behavior_for(&condition).is_none() {
            return false;
        }
        let _ = self.cancel_animation();
        let Some(controller) = self.registry.controller_mut(&condition) else {
            return false;
        };
        let changed = controller.scroll(
            delta,
            &mut NavContext {
                pose: &mut self.pose,
                viewport: &self.viewport,
                transforms: &self.transforms,
            },
        );
        if changed {
            self.commit();
        }
        changed
    }

    fn end_gesture(&mut self) {
        if let Some(session) = self.active.take() {
            log::trace!("gesture ended: {:?}", session.condition);
        }
    }

    /// Gesture in progress, if any.
    #[must_use]
    pub fn active_session(&self) -> Option<&InteractionSession> {
        self.active.as_ref()
    }

    // -- Derived transforms --

    /// Rotation-only transform.
    #[must_use]
    pub fn rotation_only_transform(&self) -> DAffine3 {
        self.transforms.rotation_only()
    }

    /// Camera-to-world view transform.
    #[must_use]
    pub fn view_transform(&self) -> DAffine3 {
        self.transforms.view()
    }

    /// Inverse orientation for axis-triad widgets.
    #[must_use]
    pub fn orientation_gizmo_transform(&self) -> DAffine3 {
        self.transforms.orientation_gizmo()
    }

    /// All derived transforms.
    #[must_use]
    pub fn transforms(&self) -> &CameraTransforms {
        &self.transforms
    }

    /// Scene-to-raster projection, available while attached.
    #[must_use]
    pub fn projection(&self) -> Option<&ProjectionTransform> {
        self.projection.as_ref()
    }

    /// Raster position of a scene point.
    pub fn transform(&self, point: DVec3) -> Result<DVec2, NavError> {
        self.projection
            .as_ref()
            .map(|p| p.transform(point))
            .ok_or(NavError::NotAttached)
    }

    /// Approximate raster radius of a sphere at `point`.
    pub fn transform_radius(
        &self,
        point: DVec3,
        radius: f64,
    ) -> Result<f64, NavError> {
        self.projection
            .as_ref()
            .map(|p| p.transform_radius(point, radius))
            .ok_or(NavError::NotAttached)
    }

    // -- Listeners --

    /// Call `listener` after every recomputation, after previously added
    /// listeners.
    pub fn add_listener(
        &mut self,
        listener: impl FnMut(&Self) + 'static,
    ) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Unregister a listener. Returns whether it was registered.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    /// Recompute transforms and projection, then notify listeners.
    fn commit(&mut self) {
        self.transforms = CameraTransforms::from_pose(&self.pose);
        self.projection = self.attached.then(|| {
            ProjectionTransform::new(&self.transforms.view(), &self.viewport)
        });
        let mut listeners = std::mem::take(&mut self.listeners);
        for (_, listener) in &mut listeners {
            listener(self);
        }
        self.listeners = listeners;
    }
}

impl Default for OrbitalCameraRig {
    fn default() -> Self {
        Self::from_options(&Options::default())
    }
}

impl fmt::Debug for OrbitalCameraRig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrbitalCameraRig")
            .field("pose", &self.pose)
            .field("viewport", &self.viewport)
            .field("attached", &self.attached)
            .field("clip", &self.clip)
            .field("registry", &self.registry)
            .field("active", &self.active)
            .field("fit", &self.fit)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}
