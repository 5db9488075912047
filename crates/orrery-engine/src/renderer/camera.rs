use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Quat, Vec3};

/// Viewport dimensions of the overlay layer, in physical pixels.
///
/// A zero-sized viewport is a transient condition (mid-resize) and is
/// reported as degenerate rather than treated as an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Width/height ratio. Falls back to 1.0 when degenerate so the
    /// projection matrix stays finite.
    pub fn aspect(&self) -> f32 {
        if self.is_degenerate() {
            1.0
        } else {
            self.width / self.height
        }
    }

    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Orbit camera producing a perspective view-projection matrix.
/// The engine core consumes only the matrix and the viewport; all camera
/// movement is driven by external control events.
#[derive(Debug, Clone)]
pub struct Camera3D {
    /// Rotation around the world Y axis (radians).
    pub azimuth: f32,
    /// Rotation above the reference plane (radians), clamped to avoid gimbal lock.
    pub elevation: f32,
    /// Distance from the target point.
    pub distance: f32,
    /// Point the camera looks at.
    pub target: Vec3,
    /// Vertical field of view (radians).
    pub fov_y: f32,
    /// Near clip distance.
    pub near: f32,
    /// Far clip distance.
    pub far: f32,
}

/// GPU-side uniform data for the camera.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
}

impl Default for Camera3D {
    fn default() -> Self {
        Self {
            azimuth: 0.0,
            elevation: 0.46,
            distance: 225.0,
            target: Vec3::ZERO,
            fov_y: 60.0_f32.to_radians(),
            near: 0.1,
            far: 2000.0,
        }
    }
}

impl Camera3D {
    const ORBIT_SENSITIVITY: f32 = 0.008;
    const ZOOM_SPEED: f32 = 0.1;
    const MIN_DISTANCE: f32 = 20.0;
    const MAX_DISTANCE: f32 = 1000.0;
    const MAX_ELEVATION: f32 = 1.4; // ~80 degrees

    pub fn new() -> Self {
        Self::default()
    }

    /// Camera position in world space.
    pub fn position(&self) -> Vec3 {
        let offset = Quat::from_rotation_y(self.azimuth)
            * Quat::from_rotation_x(-self.elevation)
            * Vec3::new(0.0, 0.0, self.distance);
        self.target + offset
    }

    /// View matrix looking from `position()` toward the target.
    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), self.target, Vec3::Y)
    }

    /// Perspective projection with GL depth convention (NDC z in [-1, 1]).
    pub fn projection(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_y, aspect, self.near, self.far)
    }

    /// Combined view-projection matrix for the given viewport.
    pub fn view_projection(&self, viewport: Viewport) -> Mat4 {
        self.projection(viewport.aspect()) * self.view()
    }

    pub fn uniform(&self, viewport: Viewport) -> CameraUniform {
        CameraUniform {
            view_proj: self.view_projection(viewport).to_cols_array_2d(),
        }
    }

    /// Orbit the camera by pointer delta.
    pub fn orbit(&mut self, dx: f32, dy: f32) {
        self.azimuth += dx * Self::ORBIT_SENSITIVITY;
        self.elevation -= dy * Self::ORBIT_SENSITIVITY;
        self.elevation = self.elevation.clamp(-Self::MAX_ELEVATION, Self::MAX_ELEVATION);
    }

    /// Zoom the camera (positive = zoom in), clamped to sane distances.
    pub fn zoom(&mut self, delta: f32) {
        self.distance *= 1.0 - delta * Self::ZOOM_SPEED;
        self.distance = self.distance.clamp(Self::MIN_DISTANCE, Self::MAX_DISTANCE);
    }

    /// Re-target the camera.
    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }

    /// Reset to the default view.
    pub fn reset(&mut self) {
        *self = Self {
            fov_y: self.fov_y,
            near: self.near,
            far: self.far,
            ..Self::default()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_position_is_above_reference_plane() {
        let cam = Camera3D::default();
        let pos = cam.position();
        assert!(pos.y > 0.0, "camera y = {}", pos.y);
        assert!(pos.z > 0.0, "camera z = {}", pos.z);
    }

    #[test]
    fn target_projects_to_ndc_origin() {
        let cam = Camera3D::default();
        let viewport = Viewport::new(800.0, 600.0);
        let clip = cam.view_projection(viewport) * cam.target.extend(1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < 1e-4, "ndc.x = {}", ndc.x);
        assert!(ndc.y.abs() < 1e-4, "ndc.y = {}", ndc.y);
        assert!(ndc.z < 1.0, "ndc.z = {}", ndc.z);
    }

    #[test]
    fn orbit_clamps_elevation() {
        let mut cam = Camera3D::default();
        cam.orbit(0.0, -10000.0);
        assert!(cam.elevation <= 1.4);
        cam.orbit(0.0, 10000.0);
        assert!(cam.elevation >= -1.4);
    }

    #[test]
    fn zoom_clamps_distance() {
        let mut cam = Camera3D::default();
        cam.zoom(100.0);
        assert!(cam.distance >= 20.0);
        cam.zoom(-100.0);
        assert!(cam.distance <= 1000.0);
    }

    #[test]
    fn degenerate_viewport_aspect_falls_back() {
        let viewport = Viewport::new(0.0, 600.0);
        assert!(viewport.is_degenerate());
        assert_eq!(viewport.aspect(), 1.0);
    }
}
