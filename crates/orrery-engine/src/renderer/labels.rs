use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

use crate::renderer::camera::Viewport;

/// Normalized device coordinates of a projected point, each axis in [-1, 1]
/// for points inside the frustum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ndc {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Screen-space placement for one label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelPlacement {
    /// Pixel X in overlay coordinates (origin top-left).
    pub x: f32,
    /// Pixel Y in overlay coordinates (origin top-left).
    pub y: f32,
    /// False when the point is at or beyond the far culling boundary,
    /// behind the viewer, or the viewport is degenerate.
    pub visible: bool,
}

impl LabelPlacement {
    pub fn hidden() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            visible: false,
        }
    }
}

/// Per-label record written to the overlay consumer's buffer.
/// 4 floats = 16 bytes stride; `body` is the scene index of the body,
/// `visible` is 1.0 or 0.0.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct LabelInstance {
    pub body: f32,
    pub x: f32,
    pub y: f32,
    pub visible: f32,
}

impl LabelInstance {
    pub const FLOATS: usize = 4;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Project a world-space point to NDC through a view-projection matrix.
/// Returns `None` when the perspective divide is undefined (point at the
/// center of projection).
pub fn project_ndc(view_proj: &Mat4, world: Vec3) -> Option<Ndc> {
    let clip = *view_proj * world.extend(1.0);
    if clip.w == 0.0 {
        return None;
    }
    let inv_w = 1.0 / clip.w;
    Some(Ndc {
        x: clip.x * inv_w,
        y: clip.y * inv_w,
        z: clip.z * inv_w,
    })
}

/// Map NDC to overlay pixel coordinates. NDC Y points up, pixel Y points
/// down, hence the sign flip.
pub fn ndc_to_pixel(x: f32, y: f32, viewport: Viewport) -> (f32, f32) {
    (
        (x * 0.5 + 0.5) * viewport.width,
        (-(y * 0.5) + 0.5) * viewport.height,
    )
}

/// Compute the label placement for one world-space point.
///
/// Visibility is depth-only (`z_ndc < 1`): a point in front of the viewer
/// but outside the horizontal/vertical view still reports a pixel
/// coordinate, one that lies outside the overlay area. The consumer clips
/// those if it wants to.
pub fn place_label(view_proj: &Mat4, world: Vec3, viewport: Viewport) -> LabelPlacement {
    if viewport.is_degenerate() {
        return LabelPlacement::hidden();
    }
    match project_ndc(view_proj, world) {
        Some(ndc) if ndc.z < 1.0 => {
            let (x, y) = ndc_to_pixel(ndc.x, ndc.y, viewport);
            LabelPlacement {
                x,
                y,
                visible: true,
            }
        }
        _ => LabelPlacement::hidden(),
    }
}

/// Label buffer handed to the overlay consumer each tick.
pub struct LabelBuffer {
    /// One record per active body, in scene order.
    pub instances: Vec<LabelInstance>,
}

impl LabelBuffer {
    pub fn new() -> Self {
        Self {
            instances: Vec::with_capacity(16),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: LabelInstance) {
        self.instances.push(instance);
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Raw pointer to label data for flat-buffer consumers.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for LabelBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::camera::Camera3D;

    #[test]
    fn label_instance_is_4_floats() {
        assert_eq!(std::mem::size_of::<LabelInstance>(), 16);
        assert_eq!(LabelInstance::FLOATS, 4);
    }

    #[test]
    fn ndc_origin_maps_to_viewport_center() {
        let viewport = Viewport::new(800.0, 600.0);
        let (x, y) = ndc_to_pixel(0.0, 0.0, viewport);
        assert_eq!((x, y), (400.0, 300.0));
    }

    #[test]
    fn upper_left_ndc_maps_to_upper_left_pixels() {
        let viewport = Viewport::new(800.0, 600.0);
        // NDC (-1, 1) is the top-left corner of the view.
        let (x, y) = ndc_to_pixel(-1.0, 1.0, viewport);
        assert_eq!((x, y), (0.0, 0.0));
    }

    #[test]
    fn ndc_midpoint_depth_is_visible_at_center() {
        // Identity view-projection: world coordinates are already NDC.
        let viewport = Viewport::new(800.0, 600.0);
        let placement = place_label(&Mat4::IDENTITY, Vec3::new(0.0, 0.0, 0.5), viewport);
        assert!(placement.visible);
        assert_eq!((placement.x, placement.y), (400.0, 300.0));
    }

    #[test]
    fn look_at_point_is_visible_at_center() {
        let cam = Camera3D::default();
        let viewport = Viewport::new(800.0, 600.0);
        let view_proj = cam.view_projection(viewport);

        let placement = place_label(&view_proj, cam.target, viewport);
        assert!(placement.visible);
        assert!((placement.x - 400.0).abs() < 1e-2, "x = {}", placement.x);
        assert!((placement.y - 300.0).abs() < 1e-2, "y = {}", placement.y);
    }

    #[test]
    fn point_behind_camera_is_hidden() {
        let cam = Camera3D::default();
        let viewport = Viewport::new(800.0, 600.0);
        let view_proj = cam.view_projection(viewport);

        // The camera sits on +Z looking at the origin; far along +Z is behind it.
        let behind = cam.position() + (cam.position() - cam.target);
        let ndc = project_ndc(&view_proj, behind).unwrap();
        assert!(ndc.z >= 1.0, "ndc.z = {}", ndc.z);
        assert!(!place_label(&view_proj, behind, viewport).visible);
    }

    #[test]
    fn degenerate_viewport_hides_everything() {
        let cam = Camera3D::default();
        let viewport = Viewport::new(0.0, 0.0);
        let view_proj = cam.view_projection(viewport);

        let placement = place_label(&view_proj, cam.target, viewport);
        assert_eq!(placement, LabelPlacement::hidden());
    }

    #[test]
    fn placement_is_pure() {
        let cam = Camera3D::default();
        let viewport = Viewport::new(1024.0, 768.0);
        let view_proj = cam.view_projection(viewport);
        let world = Vec3::new(45.0, 0.0, 0.0);

        let first = place_label(&view_proj, world, viewport);
        let second = place_label(&view_proj, world, viewport);
        assert_eq!(first, second);
    }

    #[test]
    fn buffer_push_and_count() {
        let mut buf = LabelBuffer::new();
        buf.push(LabelInstance::default());
        buf.push(LabelInstance::default());
        assert_eq!(buf.instance_count(), 2);
        buf.clear();
        assert_eq!(buf.instance_count(), 0);
    }
}
