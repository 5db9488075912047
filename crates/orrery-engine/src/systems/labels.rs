use glam::Mat4;

use crate::components::body::Body;
use crate::renderer::camera::Viewport;
use crate::renderer::labels::{place_label, LabelBuffer, LabelInstance};

/// Build the label buffer from the current body positions.
/// One record per active body, carrying its scene index so the overlay
/// consumer can resolve the name. Rebuilt from scratch every tick — camera
/// and body positions both change continuously, so nothing is cached.
pub fn build_label_buffer<'a>(
    bodies: impl Iterator<Item = &'a Body>,
    view_proj: &Mat4,
    viewport: Viewport,
    buffer: &mut LabelBuffer,
) {
    buffer.clear();

    for (index, body) in bodies.enumerate() {
        if !body.active {
            continue;
        }

        let placement = place_label(view_proj, body.pos, viewport);
        buffer.push(LabelInstance {
            body: index as f32,
            x: placement.x,
            y: placement.y,
            visible: if placement.visible { 1.0 } else { 0.0 },
        });
    }
}
