use std::f32::consts::TAU;

use glam::{Quat, Vec3};

use crate::components::body::{Body, OrbitNodes};
use crate::core::scene::Scene;
use crate::core::transform::{LocalTransform, TransformGraph};

/// Fixed rotation of a body's orbital plane: ascending node about the
/// reference normal (+Y), then inclination tilt about the in-plane
/// reference axis (+X).
fn plane_rotation(body: &Body) -> Quat {
    Quat::from_rotation_y(body.ascending_node) * Quat::from_rotation_x(body.inclination)
}

/// Local transform of the revolution pivot for the current angle.
fn pivot_local(body: &Body) -> LocalTransform {
    LocalTransform::from_rotation(Quat::from_rotation_y(body.revolution_angle))
}

/// Local transform of the body node: fixed radial offset along the plane's
/// reference axis, plus axial spin about the plane normal. Spin never moves
/// the body, it only turns it.
fn body_local(body: &Body) -> LocalTransform {
    LocalTransform::new(
        Quat::from_rotation_y(body.spin_angle),
        Vec3::new(body.distance, 0.0, 0.0),
    )
}

/// Build the three-node chain for a body and return its handles.
/// The plane node is rooted at the system center; its rotation is fixed
/// for the lifetime of the graph.
///
/// Callers are expected to have validated `distance > 0` already (see
/// `config::manifest`).
pub fn attach_orbit_chain(graph: &mut TransformGraph, body: &Body) -> OrbitNodes {
    let plane = graph.insert(LocalTransform::from_rotation(plane_rotation(body)));
    let pivot = graph.insert_child(plane, pivot_local(body));
    let node = graph.insert_child(pivot, body_local(body));
    OrbitNodes {
        plane,
        pivot,
        body: node,
    }
}

/// Advance one tick: accumulate angles (when playing), push the updated
/// local transforms into the graph, propagate, and write world transforms
/// back onto the bodies.
///
/// Bodies are mutually independent, so update order is irrelevant.
/// Projection-side consumers read `Body::pos` afterwards.
pub fn tick_orbits(scene: &mut Scene, graph: &mut TransformGraph, playing: bool) {
    if playing {
        for body in scene.iter_mut() {
            if !body.active {
                continue;
            }
            body.revolution_angle = (body.revolution_angle + body.revolution_rate).rem_euclid(TAU);
            body.spin_angle = (body.spin_angle + body.spin_rate).rem_euclid(TAU);

            if let Some(nodes) = body.nodes {
                graph.set_local(nodes.pivot, pivot_local(body));
                graph.set_local(nodes.body, body_local(body));
            }
        }
    }

    graph.propagate();

    for body in scene.iter_mut() {
        if let Some(nodes) = body.nodes {
            let world = graph.world_transform(nodes.body);
            let (_, rotation, translation) = world.to_scale_rotation_translation();
            body.pos = translation;
            body.orientation = rotation;
        }
    }
}
