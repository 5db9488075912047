//! Planetary data — orbital parameters and visual properties.
//!
//! Distances and radii are exaggerated for readability (real planets would
//! be sub-pixel). Rates are radians per tick at the default 60 Hz timestep.

use orrery_engine::{BodyDescriptor, StarDescriptor, SystemManifest};

pub const PLANET_COUNT: usize = 8;

/// Names for UI display, in orbit order.
pub const PLANET_NAMES: [&str; PLANET_COUNT] = [
    "Mercury", "Venus", "Earth", "Mars", "Jupiter", "Saturn", "Uranus", "Neptune",
];

fn planet(
    name: &str,
    radius: f32,
    distance: f32,
    revolution_rate: f32,
    spin_rate: f32,
    inclination_deg: f32,
) -> BodyDescriptor {
    BodyDescriptor {
        name: name.into(),
        radius,
        distance,
        revolution_rate,
        spin_rate,
        inclination_deg,
        ascending_node_deg: None,
        reference: false,
        texture: Some(format!("textures/{}.png", name.to_lowercase())),
        color: None,
    }
}

/// The static configuration table. Built once at startup; only the
/// spin/revolution rates of the spawned bodies change afterwards.
pub fn system_manifest() -> SystemManifest {
    let mut bodies = vec![
        planet("Mercury", 2.0, 20.0, 0.02, 0.004, 7.0),
        planet("Venus", 3.0, 30.0, 0.015, 0.002, 3.39),
        planet("Earth", 3.2, 45.0, 0.01, 0.02, 0.0),
        planet("Mars", 2.5, 60.0, 0.008, 0.018, 1.85),
        planet("Jupiter", 8.0, 90.0, 0.004, 0.04, 1.3),
        planet("Saturn", 7.0, 130.0, 0.003, 0.038, 2.49),
        planet("Uranus", 5.0, 170.0, 0.002, 0.03, 0.77),
        planet("Neptune", 5.0, 210.0, 0.001, 0.032, 1.77),
    ];

    // Earth anchors the reference direction of the reference plane.
    bodies[2].reference = true;

    // Uranus and Neptune have no texture asset — color fallback.
    bodies[6].texture = None;
    bodies[6].color = Some([0.49, 0.84, 0.87]);
    bodies[7].texture = None;
    bodies[7].color = Some([0.28, 0.20, 0.83]);

    SystemManifest {
        star: StarDescriptor {
            name: "Sun".into(),
            radius: 10.0,
            texture: Some("textures/sun.png".into()),
            color: Some([1.0, 0.87, 0.0]),
        },
        bodies,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_passes_validation() {
        system_manifest().validate().unwrap();
    }

    #[test]
    fn table_matches_name_list() {
        let manifest = system_manifest();
        assert_eq!(manifest.bodies.len(), PLANET_COUNT);
        for (body, name) in manifest.bodies.iter().zip(PLANET_NAMES) {
            assert_eq!(body.name, name);
        }
    }

    #[test]
    fn earth_is_the_reference_body() {
        let manifest = system_manifest();
        let earth = &manifest.bodies[2];
        assert!(earth.reference);
        assert_eq!(earth.inclination_deg, 0.0);
        assert_eq!(earth.ascending_node(2), 0.0);
    }

    #[test]
    fn non_reference_bodies_get_scattered_nodes() {
        let manifest = system_manifest();
        let mercury = manifest.bodies[0].ascending_node(0);
        let venus = manifest.bodies[1].ascending_node(1);
        assert_ne!(mercury, venus);
    }
}
